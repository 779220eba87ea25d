// src/components/mod.rs

// パズルの「状態」を表すデータ型たちだよ！ ロジックはほとんど logic/ と systems/ にある。
pub mod dragging_info;
pub mod game_state;
pub mod piece; // ピースのカタログ 🦴
pub mod piece_state;
pub mod position; // 📍
pub mod rect;
pub mod scroll_state;
