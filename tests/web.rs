// tests/web.rs
// ブラウザの中で GameApp を動かすテスト (wasm-pack test --headless --chrome)
#![cfg(target_arch = "wasm32")]

use skeleton_puzzle::{GameApp, PieceId, StateSnapshot};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

const CANVAS_ID: &str = "puzzle-test-canvas";

fn ensure_canvas() {
    let document = window().and_then(|w| w.document()).expect("document");
    if document.get_element_by_id(CANVAS_ID).is_some() {
        return;
    }
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    canvas.set_id(CANVAS_ID);
    document.body().expect("body").append_child(&canvas).expect("append canvas");
}

fn state(app: &GameApp) -> StateSnapshot {
    let json = app.get_state_json().expect("state json").as_string().expect("string");
    serde_json::from_str(&json).expect("snapshot")
}

#[wasm_bindgen_test]
fn canvas_is_resized_and_first_frame_renders() {
    ensure_canvas();
    let mut app = GameApp::new(CANVAS_ID, None).expect("game app");
    assert!(app.tick(1.0 / 60.0).expect("tick"));

    let canvas = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        .expect("canvas");
    assert_eq!((canvas.width(), canvas.height()), (300, 500));
}

#[wasm_bindgen_test]
fn pointer_input_places_a_piece() {
    ensure_canvas();
    let config = r#"{ "stage_one_pieces": ["head", "costa"], "shuffle_seed": 1 }"#;
    let mut app = GameApp::new(CANVAS_ID, Some(config.to_string())).expect("game app");
    let anchor = PieceId::Head.anchor();
    app.pointer_down(63.0, 440.0);
    app.pointer_move(anchor.x, anchor.y);
    app.pointer_up(anchor.x, anchor.y);
    app.tick(1.0 / 60.0).expect("tick");

    let snapshot = state(&app);
    assert!(snapshot.piece(PieceId::Head).expect("head").placed);
    assert_eq!(snapshot.stage, 1);
}

#[wasm_bindgen_test]
fn quit_stops_the_loop() {
    ensure_canvas();
    let mut app = GameApp::new(CANVAS_ID, None).expect("game app");
    app.quit();
    assert!(!app.tick(1.0 / 60.0).expect("tick"));
    assert!(!app.tick(1.0 / 60.0).expect("tick"));
}
