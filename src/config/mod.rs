//! レイアウト定数と、実行時に変えられる設定。

pub mod layout;
pub mod puzzle_config;

pub use puzzle_config::PuzzleConfig;
