// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use super::piece::PieceId;

/// ステージ番号。ステージ1 = たくさんのピース、ステージ2 = ボーナス1個だけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    One,
    Two,
}

impl Stage {
    pub fn number(self) -> u8 {
        match self {
            Stage::One => 1,
            Stage::Two => 2,
        }
    }
}

/// パズル全体の状態遷移だよ！🏁
///
/// `Stage1Active` → (全部はめた) → `Stage2Active` → (ボーナスをはめた)
/// → `Stage2Complete` → (リセットボタン) → `Stage1Active`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleStatus {
    Stage1Active,
    Stage2Active,
    Stage2Complete,
}

impl PuzzleStatus {
    pub fn stage(self) -> Stage {
        match self {
            PuzzleStatus::Stage1Active => Stage::One,
            PuzzleStatus::Stage2Active | PuzzleStatus::Stage2Complete => Stage::Two,
        }
    }

    pub fn is_complete(self) -> bool {
        self == PuzzleStatus::Stage2Complete
    }
}

/// レベル (ステージ) の状態。`World` が1個だけ持つ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    pub status: PuzzleStatus,
    /// リセットした回数。増える一方で、絶対に戻らない。
    pub reset_count: u32,
    /// 今のステージで有効なピース (= トレイの並び順)
    pub active_pieces: Vec<PieceId>,
    /// 経過時間 (秒)。クリアしたら止まる。
    pub elapsed: f64,
}

impl LevelState {
    pub fn new(active_pieces: Vec<PieceId>) -> Self {
        Self {
            status: PuzzleStatus::Stage1Active,
            reset_count: 0,
            active_pieces,
            elapsed: 0.0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.status.stage()
    }

    pub fn is_active(&self, piece: PieceId) -> bool {
        self.active_pieces.contains(&piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_stage() {
        assert_eq!(PuzzleStatus::Stage1Active.stage(), Stage::One);
        assert_eq!(PuzzleStatus::Stage2Active.stage(), Stage::Two);
        assert_eq!(PuzzleStatus::Stage2Complete.stage().number(), 2);
        assert!(PuzzleStatus::Stage2Complete.is_complete());
        assert!(!PuzzleStatus::Stage2Active.is_complete());
    }

    #[test]
    fn new_level_starts_at_stage_one() {
        let level = LevelState::new(vec![PieceId::Head, PieceId::Costa]);
        assert_eq!(level.stage(), Stage::One);
        assert_eq!(level.reset_count, 0);
        assert!(level.is_active(PieceId::Head));
        assert!(!level.is_active(PieceId::Heart));
    }
}
