// src/logic/mod.rs
//! 状態を持たない計算 (当たり判定・スクロール・ルール) をまとめたモジュール。

pub mod hit_test;
pub mod layout;
pub mod rules;
pub mod scroll;
pub mod tray;
