// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::asset_loader::{self, AssetSet};
use super::browser_event_manager::{self, InputQueue, Listener};
use super::{init_handler, renderer, state_getter};
use crate::components::position::Position;
use crate::protocol::{InputEvent, PuzzleEvent};
use crate::world::World;

/// ブラウザ側から使うパズル本体だよ！🦴
///
/// JS からの使い方:
/// 1. `new GameApp("canvas-id", configJson)` で作る (キャンバスにリスナーも付く)
/// 2. `loadAssets("assets")` で画像の読み込みを始める (終わるまではプレースホルダーで描く)
/// 3. requestAnimationFrame の中で `tick(dt)` を呼ぶ。false が返ってきたらループを止める。
#[wasm_bindgen]
pub struct GameApp {
    world: Arc<Mutex<World>>,
    input_queue: InputQueue,
    assets: Arc<Mutex<AssetSet>>,
    // リスナーのクロージャ。drop すると JS から呼べなくなるので持っておく
    event_closures: Vec<Listener>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<GameApp, JsValue> {
        info!("GameApp: 初期化中...");
        let world = init_handler::initialize_world(config_json);
        let (canvas, context) = init_handler::initialize_canvas(canvas_id)?;
        let input_queue: InputQueue = Arc::new(Mutex::new(VecDeque::new()));
        let event_closures = browser_event_manager::attach_canvas_listeners(&canvas, &input_queue)?;
        info!("GameApp: 初期化完了。");
        Ok(GameApp {
            world,
            input_queue,
            assets: Arc::new(Mutex::new(AssetSet::placeholders())),
            event_closures,
            canvas,
            context,
        })
    }

    /// 画像を裏で読み込む。読み終わったら当たり判定のサイズも画像に合わせる。
    #[wasm_bindgen(js_name = loadAssets)]
    pub fn load_assets(&self, base_url: String) {
        let world = Arc::clone(&self.world);
        let assets = Arc::clone(&self.assets);
        spawn_local(async move {
            let loaded = asset_loader::load_all(&base_url).await;
            match world.lock() {
                Ok(mut world) => loaded.apply_sizes(world.sizes_mut()),
                Err(e) => error!("GameApp: failed to lock world after loading assets: {}", e),
            }
            match assets.lock() {
                Ok(mut slot) => *slot = loaded,
                Err(e) => error!("GameApp: failed to lock asset set: {}", e),
            }
        });
    }

    /// 1フレーム進めて描画する。ループを続けていいなら true。
    pub fn tick(&mut self, dt: f64) -> Result<bool, JsValue> {
        let inputs: Vec<InputEvent> = match self.input_queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(e) => {
                error!("GameApp: failed to lock input queue: {}", e);
                Vec::new()
            }
        };

        let outcome = {
            let mut world = self.world.lock().map_err(|e| lock_error("world", e))?;
            world.tick(inputs, dt)
        };
        for event in &outcome.events {
            self.handle_event(event);
        }

        if outcome.running {
            self.render()?;
        } else {
            info!("GameApp: stopped.");
        }
        Ok(outcome.running)
    }

    /// キャンバスに今の状態を描く
    pub fn render(&self) -> Result<(), JsValue> {
        self.context
            .clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        let world = self.world.lock().map_err(|e| lock_error("world", e))?;
        let assets = self.assets.lock().map_err(|e| lock_error("assets", e))?;
        renderer::render(&world, &assets, &self.context)
    }

    /// 次の tick で止まる
    pub fn quit(&self) {
        self.enqueue(InputEvent::Quit);
    }

    // キャンバスのリスナーを使わずに JS から直接入力を送りたい時用
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&self, x: f32, y: f32) {
        self.enqueue(InputEvent::PointerDown(Position::new(x, y)));
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&self, x: f32, y: f32) {
        self.enqueue(InputEvent::PointerMove(Position::new(x, y)));
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&self, x: f32, y: f32) {
        self.enqueue(InputEvent::PointerUp(Position::new(x, y)));
    }

    /// 今の状態を JSON 文字列で返す (デバッグや JS 側の UI 用)
    #[wasm_bindgen(js_name = getStateJson)]
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_state_json(&self.world)
    }
}

/// ロック失敗を JS の Error にする
fn lock_error(what: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from(js_sys::Error::new(&format!("Failed to lock {}: {}", what, e)))
}

impl GameApp {
    fn enqueue(&self, input: InputEvent) {
        match self.input_queue.lock() {
            Ok(mut queue) => queue.push_back(input),
            Err(e) => error!("GameApp: failed to lock input queue: {}", e),
        }
    }

    /// World から出てきたイベントのうち、ブラウザでやることがあるものを処理する
    fn handle_event(&self, event: &PuzzleEvent) {
        match event {
            PuzzleEvent::OpenLink { url } => {
                let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
                if !matches!(opened, Some(Ok(_))) {
                    warn!("GameApp: could not open {}", url);
                }
            }
            PuzzleEvent::Completed { elapsed } => info!("GameApp: クリア！🎉 {:.1}s", elapsed),
            other => log::debug!("GameApp: {:?}", other),
        }
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        info!("GameApp: 破棄します ({} listeners)", self.event_closures.len());
    }
}
