// src/systems/drag_system.rs
//! ピースのドラッグ (つかむ → 動かす → 離す) を担当するよ！🖱️

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::components::{piece::PieceId, position::Position};
use crate::config::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::logic::hit_test;
use crate::logic::rules::should_snap;
use crate::world::World;

/// 離した結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragEnd {
    /// ドラッグしてなかった (何もしない)
    NoDrag,
    /// アンカーにはまった
    Snapped(PieceId),
    /// はまらなかった。離した場所にそのまま置いてある (まだつかめる)
    Dropped(PieceId, Position),
}

/// ポインターが押された位置にあるピースをつかむ。
///
/// 手前に描かれてるピースから順に調べて、最初に当たったものだけ。
/// トレイのピースはスクロールとゴーストも考えて判定する。
/// つかんだらピースはすぐ指の位置にジャンプして、トレイから外れる。
pub fn try_start_drag(world: &mut World, pointer: Position) -> Option<PieceId> {
    let pointer = on_screen(pointer);
    let piece = hit_test::find_draggable_piece(world, pointer)?;

    let Some(state) = world.pieces.get_mut(&piece) else {
        warn!("drag: no state for {:?}", piece);
        return None;
    };
    if !world.dragging.begin(piece) {
        debug!("drag: already dragging {:?}, ignoring press on {:?}", world.dragging.piece, piece);
        return None;
    }
    state.current_position = pointer;
    state.in_tray = false;
    info!("drag: started {:?} at ({}, {})", piece, pointer.x, pointer.y);
    Some(piece)
}

/// ドラッグ中なら、ピースをポインターの位置に動かす。動かしたら true。
pub fn update_drag(world: &mut World, pointer: Position) -> bool {
    let Some(piece) = world.dragging.piece else {
        return false;
    };
    match world.pieces.get_mut(&piece) {
        Some(state) => {
            state.current_position = on_screen(pointer);
            true
        }
        None => false,
    }
}

/// ピースが画面の外に置き去りにならないように、画面の中に押し込む
fn on_screen(pointer: Position) -> Position {
    pointer.clamped(SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// 離した時の処理。アンカーまでの距離がしきい値以内ならピタッとはめる。
/// どっちにしてもドラッグ参照は必ず外す。ドラッグしてなければ何もしない。
pub fn end_drag(world: &mut World) -> DragEnd {
    let Some(piece) = world.dragging.take() else {
        return DragEnd::NoDrag;
    };
    let threshold = world.config.snap_threshold;
    let Some(state) = world.pieces.get_mut(&piece) else {
        warn!("drag: released {:?} but it has no state", piece);
        return DragEnd::NoDrag;
    };

    state.current_position = on_screen(state.current_position);
    let target = piece.anchor();
    if should_snap(state.current_position, target, threshold) {
        state.current_position = target;
        state.placed = true;
        info!("drag: {:?} snapped to ({}, {})", piece, target.x, target.y);
        DragEnd::Snapped(piece)
    } else {
        let position = state.current_position;
        debug!(
            "drag: {:?} dropped at ({}, {}), {:.1}px from its anchor",
            piece,
            position.x,
            position.y,
            position.distance_to(target)
        );
        DragEnd::Dropped(piece, position)
    }
}
