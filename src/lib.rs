// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // ブラウザ側 (描画・入力・画像)
pub mod components; // 状態を表すデータ
pub mod config; // レイアウト定数と設定
pub mod logic; // 状態を持たない計算
pub mod protocol; // World とホストの間でやり取りするデータ
pub mod system;
pub mod systems; // 入力・ドラッグ・進行・リセット・スクロール・時計
pub mod world;

// よく使うものはここから直接使えるようにしておく
pub use app::game_app::GameApp;
pub use components::piece::PieceId;
pub use components::position::Position;
pub use config::PuzzleConfig;
pub use protocol::{InputEvent, PuzzleEvent, StateSnapshot, TickOutcome};
pub use world::World;

/// `log` クレートのメッセージをブラウザのコンソールに出すロガーだよ。
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&message),
            log::Level::Warn => web_sys::console::warn_1(&message),
            log::Level::Info => web_sys::console::info_1(&message),
            log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&message),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // 2回目以降 (テストなど) は set_logger が失敗するけど、もう付いてるので問題なし
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
    log::info!("Panic hook and console logger set!");
}
