// src/logic/rules.rs
//! パズルのルール (純粋な判定関数) をまとめるよ！

use crate::components::{piece::PieceId, piece_state::PieceState, position::Position};

/// 離した位置がアンカーから `threshold` 以内ならスナップする。距離だけで決まる！
pub fn should_snap(release_position: Position, target: Position, threshold: f32) -> bool {
    release_position.distance_to(target) <= threshold
}

/// 今のステージのピースが全部はまってるか。
/// ピースが1個も無いステージは、はめる物が無いので最初から完了。
pub fn is_stage_complete<'a, F>(active_pieces: &[PieceId], mut state_of: F) -> bool
where
    F: FnMut(PieceId) -> Option<&'a PieceState>,
{
    active_pieces
        .iter()
        .all(|&piece| state_of(piece).map_or(false, |state| state.placed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn snap_is_a_function_of_distance() {
        let target = Position::new(100.0, 100.0);
        assert!(should_snap(Position::new(120.0, 110.0), target, 35.0), "約22.4px ならはまる");
        assert!(!should_snap(Position::new(140.0, 140.0), target, 35.0), "約56.6px ならはまらない");
        assert!(should_snap(Position::new(135.0, 100.0), target, 35.0), "ちょうど境界もはまる");
        assert!(should_snap(target, target, 0.0));
    }

    #[test]
    fn completion_requires_every_active_piece() {
        let mut states = BTreeMap::new();
        let pieces = [PieceId::Head, PieceId::Costa];
        for (i, &piece) in pieces.iter().enumerate() {
            states.insert(piece, PieceState::in_slot(i, Position::default()));
        }
        assert!(!is_stage_complete(&pieces, |p| states.get(&p)));

        states.get_mut(&PieceId::Head).unwrap().placed = true;
        assert!(!is_stage_complete(&pieces, |p| states.get(&p)));

        states.get_mut(&PieceId::Costa).unwrap().placed = true;
        assert!(is_stage_complete(&pieces, |p| states.get(&p)));

        assert!(is_stage_complete(&[], |p| states.get(&p)), "空のステージは最初から完了");
        assert!(!is_stage_complete(&[PieceId::Heart], |p| states.get(&p)), "状態がないピースは未完了");
    }
}
