// src/components/scroll_state.rs

use serde::{Deserialize, Serialize};

/// トレイのスクロールがいま何をしてるか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollMode {
    #[default]
    Idle,
    /// 左矢印を押しっぱなし
    ButtonScrollLeft,
    /// 右矢印を押しっぱなし
    ButtonScrollRight,
    /// トレイをスワイプ中。押した時の X とその時のオフセットを覚えておく。
    Swiping { anchor_x: i32, offset_at_start: i32 },
}

/// トレイのスクロール状態。オフセットは整数 px。
///
/// ラップモード (ステージ1) では常に `[0, 幅)`、
/// クランプモード (ステージ2) では常に 0 になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    pub offset: i32,
    pub mode: ScrollMode,
    /// 矢印を押したフレームは1ステップだけ。押しっぱなしの分は次のフレームから。
    #[serde(default)]
    pub skip_next_hold: bool,
}

impl ScrollState {
    /// オフセットを 0 に戻して待機状態にする (リセット・ステージ移行時)
    pub fn rewind(&mut self) {
        self.offset = 0;
        self.mode = ScrollMode::Idle;
        self.skip_next_hold = false;
    }

    pub fn is_swiping(&self) -> bool {
        matches!(self.mode, ScrollMode::Swiping { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewind_clears_everything() {
        let mut state = ScrollState {
            offset: 120,
            mode: ScrollMode::Swiping { anchor_x: 50, offset_at_start: 100 },
            skip_next_hold: true,
        };
        assert!(state.is_swiping());
        state.rewind();
        assert_eq!(state, ScrollState::default());
    }
}
