// src/components/piece_state.rs

use serde::{Deserialize, Serialize};

use super::position::Position;

/// ピース1個の「今の状態」だよ。カタログ (PieceSpec) は静的、こっちは動的！
///
/// - `current_position`: トレイにいる間はトレイ座標 (スクロール前)、
///   一度つかんだ後は画面座標。
/// - `placed`: アンカーにはまったら true。はまったピースは二度とつかめない。
/// - `in_tray`: まだ一度もつかまれてない (トレイに並んでる) なら true。
/// - `slot_index`: シャッフル後のトレイでの順番。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceState {
    pub current_position: Position,
    pub placed: bool,
    pub in_tray: bool,
    pub slot_index: usize,
}

impl PieceState {
    /// トレイのスロットに置かれた、まっさらな状態を作る
    pub fn in_slot(slot_index: usize, slot_position: Position) -> Self {
        Self {
            current_position: slot_position,
            placed: false,
            in_tray: true,
            slot_index,
        }
    }

    /// トレイの外 (自由な場所) に置かれてる？
    pub fn is_loose(&self) -> bool {
        !self.placed && !self.in_tray
    }

    /// つかめる状態か (はまってなければ OK)
    pub fn is_draggable(&self) -> bool {
        !self.placed
    }
}
