// src/app/mod.rs
//! ブラウザ側の処理 (GameApp) を役割ごとに分割して置くモジュールだよ！
//! パズルのルールは World にあって、ここは入力を集めて描くだけ。

pub mod asset_loader;
pub mod browser_event_manager;
pub mod game_app;
pub mod init_handler;
pub mod renderer;
pub mod state_getter;
