// src/config/puzzle_config.rs
//! 実行時に差し替えられるパズル設定。
//! デフォルトは `layout.rs` の定数そのまま。JS から JSON で上書きもできるよ。

use log::warn;
use serde::{Deserialize, Serialize};

use super::layout::{
    DEFAULT_DRAG_INFLATION, HOLD_SCROLL_PER_TICK, LICENSE_URL, PROJECT_URL, SCROLL_STEP,
    SNAP_THRESHOLD,
};
use crate::components::piece::{PieceId, BONUS_PIECE, STAGE_ONE_PIECES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// ステージ1のピース (初期の並び順)
    pub stage_one_pieces: Vec<PieceId>,
    /// ステージ2のボーナスピース
    pub bonus_piece: PieceId,
    pub snap_threshold: f32,
    pub scroll_step: i32,
    pub hold_scroll_per_tick: i32,
    pub default_drag_inflation: f32,
    pub license_url: String,
    pub project_url: String,
    /// 指定するとシャッフルが毎回同じになる (テスト・デバッグ用)
    pub shuffle_seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            stage_one_pieces: STAGE_ONE_PIECES.to_vec(),
            bonus_piece: BONUS_PIECE,
            snap_threshold: SNAP_THRESHOLD,
            scroll_step: SCROLL_STEP,
            hold_scroll_per_tick: HOLD_SCROLL_PER_TICK,
            default_drag_inflation: DEFAULT_DRAG_INFLATION,
            license_url: LICENSE_URL.to_string(),
            project_url: PROJECT_URL.to_string(),
            shuffle_seed: None,
        }
    }
}

impl PuzzleConfig {
    /// JSON から読む。書いてない項目はデフォルトのまま。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: PuzzleConfig = serde_json::from_str(json)?;
        config.normalize();
        Ok(config)
    }

    /// JSON が壊れてたら警告だけ出してデフォルトに戻る
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                warn!("PuzzleConfig: failed to parse config JSON ({}). Using defaults.", e);
                Self::default()
            }
        }
    }

    /// ピースの重複とボーナスの混入を取り除く
    fn normalize(&mut self) {
        let bonus = self.bonus_piece;
        let mut seen = Vec::with_capacity(self.stage_one_pieces.len());
        self.stage_one_pieces.retain(|p| {
            if *p == bonus || seen.contains(p) {
                warn!("PuzzleConfig: dropping duplicate or bonus piece {:?} from stage one", p);
                return false;
            }
            seen.push(*p);
            true
        });
        self.snap_threshold = self.snap_threshold.max(0.0);
    }

    /// ピースごとの当たり判定の広げ幅 (個別設定がなければ標準値)
    pub fn drag_inflation(&self, piece: PieceId) -> f32 {
        piece.spec().drag_inflation.unwrap_or(self.default_drag_inflation)
    }
}
