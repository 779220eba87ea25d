// src/systems/reset_system.rs

use log::{debug, info};

use crate::components::game_state::PuzzleStatus;
use crate::components::piece_state::PieceState;
use crate::logic::layout::slot_position;
use crate::logic::tray::shuffle_pieces;
use crate::protocol::PuzzleEvent;
use crate::world::World;

/// リセットボタンが押された時の処理だよ！🔄
///
/// クリア後 (`Stage2Complete`) にしか効かない。それ以外で呼ばれたら何もしないで false。
///
/// 1. リセット回数を +1 (これは絶対に戻らない)
/// 2. ステージ1のピースの並びを一様ランダムにシャッフル
/// 3. 全ピースの「はまった」を消して、新しいスロットに戻す
/// 4. スクロールを 0 に、経過時間も 0 に戻してステージ1へ
pub fn reset(world: &mut World, events: &mut Vec<PuzzleEvent>) -> bool {
    if world.level.status != PuzzleStatus::Stage2Complete {
        debug!("reset: ignored, puzzle is not complete ({:?})", world.level.status);
        return false;
    }

    world.level.reset_count += 1;

    let mut order = world.config.stage_one_pieces.clone();
    shuffle_pieces(&mut order, &mut world.rng);

    // ボーナスも含めて全部まっさらに。ステージ1の分は load_stage が並べ直す。
    for state in world.pieces.values_mut() {
        *state = PieceState::in_slot(0, slot_position(0));
    }
    world.load_stage(order);
    world.level.status = PuzzleStatus::Stage1Active;
    world.level.elapsed = 0.0;

    info!(
        "reset: #{} done, new tray order = {:?}",
        world.level.reset_count,
        world.tray.order()
    );
    events.push(PuzzleEvent::Reset { reset_count: world.level.reset_count });
    true
}
