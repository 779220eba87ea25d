// src/app/init_handler.rs
//! GameApp の初期化まわり (キャンバスの取得と World の作成)。

use std::sync::{Arc, Mutex};

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::config::PuzzleConfig;
use crate::world::World;

/// 設定 JSON (無ければデフォルト) から World を作る
pub(crate) fn initialize_world(config_json: Option<String>) -> Arc<Mutex<World>> {
    let config = match config_json.as_deref() {
        Some(json) if !json.trim().is_empty() => PuzzleConfig::from_json_or_default(json),
        _ => PuzzleConfig::default(),
    };
    info!("App::Init: creating world ({} stage-one pieces)", config.stage_one_pieces.len());
    Arc::new(Mutex::new(World::new(config)))
}

/// id でキャンバスを探して、論理サイズ (300x500) にそろえて 2D コンテキストを取る
pub(crate) fn initialize_canvas(
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))?;
    canvas.set_width(SCREEN_WIDTH as u32);
    canvas.set_height(SCREEN_HEIGHT as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context is not available"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("failed to cast 2d context"))?;
    info!("App::Init: canvas #{} ready", canvas_id);
    Ok((canvas, context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::piece::PieceId;

    #[test]
    fn world_uses_config_json_when_given() {
        let json = r#"{ "stage_one_pieces": ["head", "costa"], "shuffle_seed": 5 }"#;
        let world_arc = initialize_world(Some(json.to_string()));
        let world = world_arc.lock().expect("lock");
        assert_eq!(world.tray().order(), &[PieceId::Head, PieceId::Costa]);
    }

    #[test]
    fn blank_or_broken_config_falls_back_to_defaults() {
        for json in [None, Some("   ".to_string()), Some("{ not json".to_string())] {
            let world_arc = initialize_world(json);
            let world = world_arc.lock().expect("lock");
            assert_eq!(world.tray().len(), 12);
        }
    }
}
