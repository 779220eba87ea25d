// src/app/browser_event_manager.rs
//! キャンバスにマウス・タッチのリスナーを付けて、InputEvent に変換してキューに積むよ。
//! World はここでは触らない (次の tick でまとめて処理する)。

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, Touch, TouchEvent};

use crate::components::position::Position;
use crate::protocol::InputEvent;

pub(crate) type InputQueue = Arc<Mutex<VecDeque<InputEvent>>>;
pub(crate) type Listener = Closure<dyn FnMut(Event)>;

/// 画面上のキャンバスの矩形
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CanvasBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// ブラウザの client 座標を、キャンバスの論理座標に変換する。
/// CSS で拡大縮小されてても大丈夫なように、表示サイズと内部解像度の比で割り戻す。
/// 指がキャンバスの外に出てもタッチイベントは届き続けるので、結果はキャンバスの中に押し込む。
pub(crate) fn to_canvas_coords(
    client_x: f64,
    client_y: f64,
    canvas_box: CanvasBox,
    canvas_width: u32,
    canvas_height: u32,
) -> Position {
    let scale_x = if canvas_box.width > 0.0 { canvas_width as f64 / canvas_box.width } else { 1.0 };
    let scale_y = if canvas_box.height > 0.0 { canvas_height as f64 / canvas_box.height } else { 1.0 };
    Position::new(
        ((client_x - canvas_box.left) * scale_x) as f32,
        ((client_y - canvas_box.top) * scale_y) as f32,
    )
    .clamped(canvas_width as f32, canvas_height as f32)
}

type Binding = (&'static str, fn(Position) -> InputEvent);

/// マウスイベント名と、それが何の入力になるか
pub(crate) const MOUSE_BINDINGS: [Binding; 4] = [
    ("mousedown", InputEvent::PointerDown),
    ("mousemove", InputEvent::PointerMove),
    ("mouseup", InputEvent::PointerUp),
    // キャンバスの外で離された時も、離したことにしておく
    ("mouseleave", InputEvent::PointerUp),
];

/// タッチイベント名と、それが何の入力になるか
pub(crate) const TOUCH_BINDINGS: [Binding; 4] = [
    ("touchstart", InputEvent::PointerDown),
    ("touchmove", InputEvent::PointerMove),
    ("touchend", InputEvent::PointerUp),
    // 電話が来た時などにブラウザが取り消したタッチも、離したのと同じ扱い
    ("touchcancel", InputEvent::PointerUp),
];

fn canvas_position(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Position {
    let rect = canvas.get_bounding_client_rect();
    let canvas_box = CanvasBox {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    };
    to_canvas_coords(client_x, client_y, canvas_box, canvas.width(), canvas.height())
}

fn push(queue: &InputQueue, input: InputEvent) {
    match queue.lock() {
        Ok(mut q) => q.push_back(input),
        Err(e) => error!("browser_event_manager: failed to lock input queue: {}", e),
    }
}

/// マウスイベント用のクロージャを作る
fn mouse_listener(
    canvas: &HtmlCanvasElement,
    queue: &InputQueue,
    make: fn(Position) -> InputEvent,
) -> Listener {
    let canvas = canvas.clone();
    let queue = Arc::clone(queue);
    Closure::wrap(Box::new(move |event: Event| {
        if let Some(mouse_event) = event.dyn_ref::<MouseEvent>() {
            let pos = canvas_position(&canvas, mouse_event.client_x() as f64, mouse_event.client_y() as f64);
            push(&queue, make(pos));
        } else {
            error!("browser_event_manager: expected MouseEvent");
        }
    }) as Box<dyn FnMut(Event)>)
}

/// タッチイベント用のクロージャを作る。1本目の指だけ見る。
/// touchend では `touches` が空になるので `changed_touches` を読む。
fn touch_listener(
    canvas: &HtmlCanvasElement,
    queue: &InputQueue,
    make: fn(Position) -> InputEvent,
) -> Listener {
    let canvas = canvas.clone();
    let queue = Arc::clone(queue);
    Closure::wrap(Box::new(move |event: Event| {
        let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
            error!("browser_event_manager: expected TouchEvent");
            return;
        };
        // ページのスクロールやズームに取られないように
        touch_event.prevent_default();
        let touch: Option<Touch> = touch_event.changed_touches().get(0);
        if let Some(touch) = touch {
            let pos = canvas_position(&canvas, touch.client_x() as f64, touch.client_y() as f64);
            push(&queue, make(pos));
        }
    }) as Box<dyn FnMut(Event)>)
}

/// キャンバスにリスナーを全部付ける。返ってきたクロージャは GameApp が持っておくこと
/// (drop されると JS 側から呼べなくなる)。
pub(crate) fn attach_canvas_listeners(
    canvas: &HtmlCanvasElement,
    queue: &InputQueue,
) -> Result<Vec<Listener>, JsValue> {
    let mouse = MOUSE_BINDINGS
        .iter()
        .map(|&(name, make)| (name, mouse_listener(canvas, queue, make)));
    let touch = TOUCH_BINDINGS
        .iter()
        .map(|&(name, make)| (name, touch_listener(canvas, queue, make)));

    let mut listeners = Vec::with_capacity(MOUSE_BINDINGS.len() + TOUCH_BINDINGS.len());
    for (name, closure) in mouse.chain(touch) {
        canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        debug!("browser_event_manager: attached {}", name);
        listeners.push(closure);
    }
    Ok(listeners)
}
