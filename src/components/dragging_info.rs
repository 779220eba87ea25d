// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use super::piece::PieceId;

/// 今ドラッグ中のピースの情報だよ！🖱️➡️🦴
///
/// 同時につかめるのは1個だけ。ロックとかじゃなくて、`Option` が1個しか
/// 入らないことでそれを保証してる。
/// つかんだ瞬間にピースは指の位置へジャンプするので、
/// クリック位置とのオフセットは持たない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraggingInfo {
    pub piece: Option<PieceId>,
}

impl DraggingInfo {
    pub fn is_active(&self) -> bool {
        self.piece.is_some()
    }

    /// ドラッグを開始する。もう何かつかんでたら false (開始しない)。
    pub fn begin(&mut self, piece: PieceId) -> bool {
        if self.piece.is_some() {
            return false;
        }
        self.piece = Some(piece);
        true
    }

    /// ドラッグ参照を外して、つかんでたピースを返す
    pub fn take(&mut self) -> Option<PieceId> {
        self.piece.take()
    }
}
