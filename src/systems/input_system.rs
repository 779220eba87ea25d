// src/systems/input_system.rs
//! 入力イベントを、スクロール・ドラッグ・リセットの各処理に振り分けるよ！
//!
//! 押した時の判定の順番 (上が優先):
//! 1. UI コントロール (リセット → 矢印 → 外部リンク)
//! 2. つかめるピース
//! 3. はまってるピース (クリックを吸収するだけ)
//! 4. トレイ領域ならスワイプ開始

use log::{debug, info};

use super::drag_system::{self, DragEnd};
use super::reset_system;
use crate::components::position::Position;
use crate::components::scroll_state::ScrollMode;
use crate::logic::hit_test::{self, ClickTarget};
use crate::logic::layout::UiControl;
use crate::logic::scroll::{self, ScrollDirection};
use crate::protocol::{InputEvent, PuzzleEvent};
use crate::world::World;

/// 入力イベントを1個処理する
pub fn handle_input(world: &mut World, input: InputEvent, events: &mut Vec<PuzzleEvent>) {
    match input {
        InputEvent::PointerDown(pos) => handle_pointer_down(world, pos, events),
        InputEvent::PointerMove(pos) => handle_pointer_move(world, pos),
        InputEvent::PointerUp(pos) => handle_pointer_up(world, pos, events),
        InputEvent::Quit => {
            info!("input: quit");
            world.running = false;
        }
    }
}

fn handle_pointer_down(world: &mut World, pos: Position, events: &mut Vec<PuzzleEvent>) {
    // ドラッグ中に別の指で押されても、新しい操作は始めない
    if world.dragging.is_active() {
        debug!("input: press ignored while dragging");
        return;
    }

    match hit_test::find_clicked_element(world, pos) {
        Some(ClickTarget::Control(control)) => handle_control(world, control, events),
        Some(ClickTarget::Piece(_)) => {
            if let Some(piece) = drag_system::try_start_drag(world, pos) {
                events.push(PuzzleEvent::DragStarted { piece });
            }
        }
        // はまってるピースは押しても何もしない (下のトレイにも届かない)
        Some(ClickTarget::PlacedPiece(piece)) => {
            debug!("input: press on placed piece {:?} absorbed", piece);
        }
        Some(ClickTarget::TrayArea) => {
            scroll::begin_swipe(&mut world.scroll, pos.x);
            debug!("input: swipe started at x = {}", pos.x);
        }
        None => {}
    }
}

fn handle_control(world: &mut World, control: UiControl, events: &mut Vec<PuzzleEvent>) {
    let wrap_width = world.tray.wrap_width();
    let step = world.config.scroll_step;
    match control {
        UiControl::Reset => {
            reset_system::reset(world, events);
        }
        UiControl::ScrollLeft => scroll::press_arrow(&mut world.scroll, ScrollDirection::Left, step, wrap_width),
        UiControl::ScrollRight => scroll::press_arrow(&mut world.scroll, ScrollDirection::Right, step, wrap_width),
        UiControl::LicenseLink => open_link(&world.config.license_url, events),
        UiControl::ProjectLink => open_link(&world.config.project_url, events),
    }
}

fn open_link(url: &str, events: &mut Vec<PuzzleEvent>) {
    if url.is_empty() {
        debug!("input: link has no url, nothing to open");
        return;
    }
    events.push(PuzzleEvent::OpenLink { url: url.to_string() });
}

fn handle_pointer_move(world: &mut World, pos: Position) {
    if drag_system::update_drag(world, pos) {
        return;
    }
    if world.scroll.is_swiping() {
        let wrap_width = world.tray.wrap_width();
        scroll::update_swipe(&mut world.scroll, pos.x, wrap_width);
    }
}

fn handle_pointer_up(world: &mut World, pos: Position, events: &mut Vec<PuzzleEvent>) {
    // スワイプ・矢印の押しっぱなしはここで止める (オフセットはそのまま)
    if world.scroll.mode != ScrollMode::Idle {
        scroll::release(&mut world.scroll);
    }

    // 最後の位置まで動かしてから離す
    drag_system::update_drag(world, pos);
    match drag_system::end_drag(world) {
        DragEnd::NoDrag => {}
        DragEnd::Snapped(piece) => events.push(PuzzleEvent::Snapped { piece }),
        DragEnd::Dropped(piece, position) => events.push(PuzzleEvent::Dropped { piece, position }),
    }
}
