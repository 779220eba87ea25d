// src/world.rs

// === Rust 標準ライブラリからのインポート ===
// BTreeMap: PieceId の順番 (= 描画順) で並ぶので、描画もヒットテストも順番が安定する！
use std::collections::BTreeMap;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{
    dragging_info::DraggingInfo,
    game_state::{LevelState, PuzzleStatus},
    piece::PieceId,
    piece_state::PieceState,
    scroll_state::ScrollState,
};
use crate::config::PuzzleConfig;
use crate::logic::hit_test::TrayView;
use crate::logic::layout::{slot_position, PieceSizes};
use crate::logic::tray::TrayLayout;
use crate::protocol::{InputEvent, PieceData, StateSnapshot, TickOutcome};
use crate::system::System;
use crate::systems::{
    clock_system::ClockSystem, input_system, progression_system::ProgressionSystem,
    scroll_system::ScrollHoldSystem,
};

/// パズル全体の状態をひとまとめにした構造体だよ！🌍
///
/// グローバル変数は使わずに、ピース・レベル・スクロール・ドラッグの状態を
/// 全部ここに持たせて、各システムには `&mut World` で渡す。
/// ピースの状態とレベル状態の持ち主はこの World だけ。ドラッグやスクロールは
/// ピースの ID を覚えてるだけで、ピースそのものは持たない。
///
/// I/O もスケジューリングも一切しないので、ディスプレイ無しでそのままテストできる！
pub struct World {
    pub(crate) config: PuzzleConfig,
    pub(crate) pieces: BTreeMap<PieceId, PieceState>,
    pub(crate) level: LevelState,
    pub(crate) tray: TrayLayout,
    pub(crate) scroll: ScrollState,
    pub(crate) dragging: DraggingInfo,
    pub(crate) sizes: PieceSizes,
    pub(crate) rng: StdRng,
    pub(crate) running: bool,
}

impl World {
    /// 設定からステージ1の初期状態を作る。最初の並びは設定の順番そのまま。
    pub fn new(config: PuzzleConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let order = config.stage_one_pieces.clone();
        let mut world = World {
            pieces: BTreeMap::new(),
            level: LevelState::new(Vec::new()),
            tray: TrayLayout::new(Vec::new()),
            scroll: ScrollState::default(),
            dragging: DraggingInfo::default(),
            sizes: PieceSizes::nominal(),
            rng,
            running: true,
            config,
        };
        // ボーナスピースも最初から持っておく (ステージ2まで使われないだけ)
        world.pieces.insert(world.config.bonus_piece, PieceState::in_slot(0, slot_position(0)));
        world.load_stage(order);
        info!(
            "World: initialized with {} stage-one pieces (bonus: {:?})",
            world.level.active_pieces.len(),
            world.config.bonus_piece
        );
        world
    }

    // --- 読み取り用 ---

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn pieces(&self) -> &BTreeMap<PieceId, PieceState> {
        &self.pieces
    }

    pub fn piece(&self, piece: PieceId) -> Option<&PieceState> {
        self.pieces.get(&piece)
    }

    pub fn level(&self) -> &LevelState {
        &self.level
    }

    pub fn tray(&self) -> &TrayLayout {
        &self.tray
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn dragging(&self) -> Option<PieceId> {
        self.dragging.piece
    }

    pub fn sizes(&self) -> &PieceSizes {
        &self.sizes
    }

    /// 画像が読めた時に本物のサイズを教えてもらう
    pub fn sizes_mut(&mut self) -> &mut PieceSizes {
        &mut self.sizes
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.level.status.is_complete()
    }

    pub fn tray_view(&self) -> TrayView {
        TrayView {
            scroll_offset: self.scroll.offset,
            wrap_width: self.tray.wrap_width(),
        }
    }

    /// ステージを読み込む: トレイを作り直して、並びの順にピースをスロットへ戻す。
    /// スクロールは 0、ドラッグは解除。ステージ移行とリセットの共通部分だよ。
    pub(crate) fn load_stage(&mut self, order: Vec<PieceId>) {
        for (slot, &piece) in order.iter().enumerate() {
            self.pieces.insert(piece, PieceState::in_slot(slot, slot_position(slot)));
        }
        self.level.active_pieces = order.clone();
        self.tray = TrayLayout::new(order);
        self.scroll.rewind();
        self.dragging = DraggingInfo::default();
        debug!("World: stage loaded, tray order = {:?}", self.tray.order());
    }

    /// 1フレーム分進める。ホスト (ブラウザの requestAnimationFrame やテスト) から呼ぶ唯一の入口！
    ///
    /// 1. 入力イベントを順番に処理 (イベントごとにクリア判定もする)
    /// 2. 入力が無くてももう一度クリア判定
    /// 3. 押しっぱなしスクロールと時計を進める
    pub fn tick<I>(&mut self, inputs: I, dt: f64) -> TickOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut events = Vec::new();
        if !self.running {
            return TickOutcome { running: false, events };
        }

        let mut progression = ProgressionSystem;
        for input in inputs {
            input_system::handle_input(self, input, &mut events);
            if !self.running {
                info!("World: quit requested, remaining input ignored");
                return TickOutcome { running: false, events };
            }
            progression.run(self, dt, &mut events);
        }
        // 入力が無いフレームでもクリア判定はする (ステージ1が空っぽの設定など)
        progression.run(self, dt, &mut events);

        ScrollHoldSystem.run(self, dt, &mut events);
        ClockSystem.run(self, dt, &mut events);

        TickOutcome { running: self.running, events }
    }

    /// レンダラー向けの読み取り専用スナップショット
    pub fn snapshot(&self) -> StateSnapshot {
        let pieces = self
            .pieces
            .iter()
            .map(|(&piece, state)| PieceData {
                piece,
                current_position: state.current_position,
                placed: state.placed,
                in_tray: state.in_tray,
                active: self.level.is_active(piece) || state.placed,
            })
            .collect();
        StateSnapshot {
            stage: self.level.stage().number(),
            status: self.level.status,
            complete: self.is_complete(),
            reset_count: self.level.reset_count,
            scroll_offset: self.scroll.offset,
            wrap_width: self.tray.wrap_width(),
            dragging: self.dragging.piece,
            elapsed: self.level.elapsed,
            pieces,
        }
    }

    pub fn status(&self) -> PuzzleStatus {
        self.level.status
    }
}

impl Default for World {
    fn default() -> Self {
        World::new(PuzzleConfig::default())
    }
}

// テストコードは world_tests.rs に分けてある
#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
