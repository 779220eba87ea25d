// src/logic/tray.rs

use rand::seq::SliceRandom;
use rand::Rng;

use super::layout::slot_position;
use crate::components::{piece::PieceId, position::Position};
use crate::config::layout::TRAY_SPACING_X;

/// トレイの並び。ステージごとに1回作ったら変えない (リセット時は作り直す)。
///
/// スロットの X は `TRAY_START_X + index * 間隔`、Y は固定。
/// 全体の幅は `個数 * 間隔` で、ピースが0個でも割り算・剰余で
/// 困らないように最低 1 にしてある。
#[derive(Debug, Clone, PartialEq)]
pub struct TrayLayout {
    order: Vec<PieceId>,
    total_width: i32,
}

impl TrayLayout {
    pub fn new(order: Vec<PieceId>) -> Self {
        let total_width = (order.len() as i32 * TRAY_SPACING_X).max(1);
        Self { order, total_width }
    }

    pub fn order(&self) -> &[PieceId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total_width(&self) -> i32 {
        self.total_width
    }

    /// スクロール計算に渡す幅。
    /// 2個以上ならぐるっと回るラップモード、1個以下ならスクロールしない (1 を返す)。
    pub fn wrap_width(&self) -> i32 {
        if self.order.len() > 1 {
            self.total_width
        } else {
            1
        }
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrap_width() > 1
    }

    pub fn slot_index(&self, piece: PieceId) -> Option<usize> {
        self.order.iter().position(|&p| p == piece)
    }

    /// ピースのスロット位置 (トレイ座標)。トレイにいないピースなら None。
    pub fn slot_position(&self, piece: PieceId) -> Option<Position> {
        self.slot_index(piece).map(slot_position)
    }
}

/// ピースの並びをシャッフルする (一様ランダム)。
pub fn shuffle_pieces<R: Rng + ?Sized>(pieces: &mut [PieceId], rng: &mut R) {
    pieces.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn width_is_count_times_spacing() {
        let tray = TrayLayout::new(vec![PieceId::Head, PieceId::Costa, PieceId::Pelvis]);
        assert_eq!(tray.total_width(), 189);
        assert_eq!(tray.wrap_width(), 189);
        assert!(tray.is_wrapping());
        assert_eq!(tray.slot_position(PieceId::Pelvis), Some(Position::new(189.0, 440.0)));
        assert_eq!(tray.slot_position(PieceId::Heart), None);
    }

    #[test]
    fn degenerate_trays_do_not_wrap() {
        let empty = TrayLayout::new(Vec::new());
        assert_eq!(empty.total_width(), 1, "0個でも幅は1");
        assert_eq!(empty.wrap_width(), 1);

        let single = TrayLayout::new(vec![PieceId::Heart]);
        assert_eq!(single.wrap_width(), 1, "1個ならスクロールしない");
        assert!(!single.is_wrapping());
        assert_eq!(single.slot_index(PieceId::Heart), Some(0));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original = crate::components::piece::STAGE_ONE_PIECES.to_vec();
        let mut shuffled = original.clone();
        let mut rng = StdRng::seed_from_u64(42);
        shuffle_pieces(&mut shuffled, &mut rng);

        assert_eq!(shuffled.len(), original.len(), "シャッフルで数が変わった！");
        assert_eq!(
            shuffled.iter().sorted().collect_vec(),
            original.iter().sorted().collect_vec(),
            "同じピースの並べ替えになってるはず"
        );
    }
}
