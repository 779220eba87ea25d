// src/systems/progression_system.rs
use log::info;

use crate::components::game_state::PuzzleStatus;
use crate::logic::rules::is_stage_complete;
use crate::protocol::PuzzleEvent;
use crate::system::System;
use crate::world::World;

/// ステージの進行 (クリア判定) を見るシステムだよ！🏆
///
/// - ステージ1のピースが全部はまった → ボーナスピース1個だけのステージ2へ
/// - ステージ2のボーナスがはまった → クリア！リセットボタンが使えるようになる
/// - クリア後は何もしない (リセットは reset_system の担当)
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressionSystem;

impl ProgressionSystem {
    fn current_stage_complete(&self, world: &World) -> bool {
        is_stage_complete(&world.level.active_pieces, |piece| world.pieces.get(&piece))
    }

    /// ステージ2へ: ボーナスピースだけをトレイに並べて、スクロールはクランプモードに。
    fn advance_to_stage_two(&self, world: &mut World) {
        let bonus = world.config.bonus_piece;
        world.load_stage(vec![bonus]);
        world.level.status = PuzzleStatus::Stage2Active;
        info!("ProgressionSystem: stage one cleared, bonus piece {:?} is up", bonus);
    }
}

impl System for ProgressionSystem {
    fn run(&mut self, world: &mut World, _dt: f64, events: &mut Vec<PuzzleEvent>) {
        match world.level.status {
            PuzzleStatus::Stage1Active => {
                if self.current_stage_complete(world) {
                    self.advance_to_stage_two(world);
                    events.push(PuzzleEvent::StageAdvanced { stage: world.level.stage().number() });
                }
            }
            PuzzleStatus::Stage2Active => {
                if self.current_stage_complete(world) {
                    world.level.status = PuzzleStatus::Stage2Complete;
                    info!("ProgressionSystem: puzzle complete in {:.1}s", world.level.elapsed);
                    events.push(PuzzleEvent::Completed { elapsed: world.level.elapsed });
                }
            }
            PuzzleStatus::Stage2Complete => {}
        }
    }
}
