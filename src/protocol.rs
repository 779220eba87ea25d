// src/protocol.rs

// このファイルは、パズルの中心 (World) と外側 (ブラウザのホストやテスト) の間で
// やり取りするデータの形を定義するよ！💌
// - 入ってくるもの: InputEvent (ポインター操作と終了)
// - 出ていくもの: PuzzleEvent (何が起きたか) と StateSnapshot (描画用の読み取り専用データ)
// JS 側に JSON で渡せるように、出ていくものには serde を付けておくよ。
use serde::{Deserialize, Serialize};

use crate::components::game_state::PuzzleStatus;
use crate::components::piece::PieceId;
use crate::components::position::Position;

// --- ホストから World へ ---

/// UI ツールキットに依存しない入力イベント。座標は画面 (キャンバス) 座標。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown(Position),
    PointerMove(Position),
    PointerUp(Position),
    Quit,
}

// --- World からホストへ ---

/// 1回の tick の中で起きたこと。ホストはこれを見て音を鳴らしたりリンクを開いたりする。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// ピースをつかんだ
    DragStarted { piece: PieceId },
    /// アンカーにはまった！
    Snapped { piece: PieceId },
    /// はまらなかったので、離した場所に置いた
    Dropped { piece: PieceId, position: Position },
    /// 次のステージへ
    StageAdvanced { stage: u8 },
    /// 全部クリア！🏆
    Completed { elapsed: f64 },
    /// リセットした
    Reset { reset_count: u32 },
    /// 外部リンクを開いてほしい (World 自身は I/O しない)
    OpenLink { url: String },
}

/// `World::tick` の戻り値
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickOutcome {
    /// false になったらホストのループは止める (Quit を受け取った)
    pub running: bool,
    pub events: Vec<PuzzleEvent>,
}

/// ピース1個分の描画用データ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceData {
    pub piece: PieceId,
    pub current_position: Position,
    pub placed: bool,
    pub in_tray: bool,
    /// 今のステージで使われてるか (false ならボーナス待ちなど、描画しない)
    pub active: bool,
}

/// レンダラーに渡す読み取り専用のスナップショット。
/// `pieces` は描画順 (下から上) に並んでる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub stage: u8,
    pub status: PuzzleStatus,
    pub complete: bool,
    pub reset_count: u32,
    pub scroll_offset: i32,
    pub wrap_width: i32,
    pub dragging: Option<PieceId>,
    pub elapsed: f64,
    pub pieces: Vec<PieceData>,
}

impl StateSnapshot {
    pub fn piece(&self, piece: PieceId) -> Option<&PieceData> {
        self.pieces.iter().find(|data| data.piece == piece)
    }
}
