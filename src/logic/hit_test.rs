// src/logic/hit_test.rs
//! ポインターが押された場所に「何があるか」を調べるよ！🔍
//!
//! 判定の順番:
//! 1. UI コントロール (リセット → 左矢印 → 右矢印 → 外部リンク2つ)
//! 2. まだはまってないピース (手前に描かれてるものから)
//! 3. もうはまってるピース (押しても何も起きないけど、クリックは吸収する)
//! 4. トレイ領域 (スワイプ開始)

use std::cmp::Reverse;

use itertools::Itertools;

use super::layout::{tray_area, PieceSizes, UiControl, CONTROL_PRIORITY};
use crate::components::{piece::PieceId, piece_state::PieceState, position::Position, rect::Rect};
use crate::world::World;

/// クリックされたもの
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Control(UiControl),
    /// つかめるピース
    Piece(PieceId),
    /// もうはまってるピース
    PlacedPiece(PieceId),
    /// トレイの何もないところ
    TrayArea,
}

/// トレイを画面に映す時のパラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrayView {
    pub scroll_offset: i32,
    pub wrap_width: i32,
}

impl TrayView {
    pub fn is_wrapping(&self) -> bool {
        self.wrap_width > 1
    }
}

/// ピースが画面上に現れる中心座標のリスト。
///
/// - トレイの中: スクロール分ずらした位置。ラップモードなら ±幅 のゴーストも足す
///   (端をまたいでるピースもつかめるように)。
/// - それ以外 (はまってる / 自由な場所): `current_position` そのまま1個。
pub fn screen_positions(state: &PieceState, view: TrayView) -> Vec<Position> {
    if !state.in_tray || state.placed {
        return vec![state.current_position];
    }
    let on_screen = state.current_position.offset_x(-(view.scroll_offset as f32));
    if view.is_wrapping() {
        let w = view.wrap_width as f32;
        vec![on_screen, on_screen.offset_x(-w), on_screen.offset_x(w)]
    } else {
        vec![on_screen]
    }
}

/// ドラッグ用の当たり判定 (描画矩形を `inflation` だけ広げたもの) 全部
pub fn hit_boxes(piece: PieceId, state: &PieceState, sizes: &PieceSizes, inflation: f32, view: TrayView) -> Vec<Rect> {
    screen_positions(state, view)
        .into_iter()
        .map(|center| sizes.rect_at(piece, center).inflate(inflation))
        .collect()
}

/// `point` に当たってる一番手前のピースを返す。
/// 候補の順番は気にしなくていい (ここで描画順の逆に並べ直す)。
pub fn find_piece_at<'a, I, F>(
    point: Position,
    candidates: I,
    sizes: &PieceSizes,
    inflation_of: F,
    view: TrayView,
) -> Option<PieceId>
where
    I: IntoIterator<Item = (PieceId, &'a PieceState)>,
    F: Fn(PieceId) -> f32,
{
    candidates
        .into_iter()
        .sorted_by_key(|(piece, _)| Reverse(piece.draw_index()))
        .find(|(piece, state)| {
            hit_boxes(*piece, state, sizes, inflation_of(*piece), view)
                .iter()
                .any(|rect| rect.contains(point))
        })
        .map(|(piece, _)| piece)
}

/// 押せる UI コントロールを優先順に探す。リセットはクリアした後だけ押せる。
pub fn find_control(world: &World, point: Position) -> Option<UiControl> {
    CONTROL_PRIORITY.iter().copied().find(|&control| {
        (control != UiControl::Reset || world.level().status.is_complete()) && control.rect().contains(point)
    })
}

/// つかめるピース (今のステージのピースで、まだはまってないもの) を探す
pub fn find_draggable_piece(world: &World, point: Position) -> Option<PieceId> {
    let config = world.config();
    let draggable = world
        .pieces()
        .iter()
        .filter(|(piece, state)| state.is_draggable() && world.level().is_active(**piece))
        .map(|(piece, state)| (*piece, state));
    find_piece_at(point, draggable, world.sizes(), |p| config.drag_inflation(p), world.tray_view())
}

/// もうはまってるピースを探す (当たり判定は描画矩形そのまま)
pub fn find_placed_piece(world: &World, point: Position) -> Option<PieceId> {
    let placed = world
        .pieces()
        .iter()
        .filter(|(_, state)| state.placed)
        .map(|(piece, state)| (*piece, state));
    find_piece_at(point, placed, world.sizes(), |_| 0.0, world.tray_view())
}

/// World の状態を見て、クリック位置にあるものを特定する。
pub fn find_clicked_element(world: &World, point: Position) -> Option<ClickTarget> {
    if let Some(control) = find_control(world, point) {
        return Some(ClickTarget::Control(control));
    }
    if let Some(piece) = find_draggable_piece(world, point) {
        return Some(ClickTarget::Piece(piece));
    }
    if let Some(piece) = find_placed_piece(world, point) {
        return Some(ClickTarget::PlacedPiece(piece));
    }
    if tray_area().contains(point) {
        return Some(ClickTarget::TrayArea);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: TrayView = TrayView { scroll_offset: 0, wrap_width: 189 };

    fn tray_piece(x: f32) -> PieceState {
        PieceState::in_slot(0, Position::new(x, 440.0))
    }

    #[test]
    fn tray_piece_has_two_ghosts_in_wrap_mode() {
        let state = tray_piece(63.0);
        let view = TrayView { scroll_offset: 20, wrap_width: 189 };
        let xs: Vec<f32> = screen_positions(&state, view).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![43.0, 43.0 - 189.0, 43.0 + 189.0]);

        let clamp = TrayView { scroll_offset: 0, wrap_width: 1 };
        assert_eq!(screen_positions(&state, clamp).len(), 1, "クランプモードはゴースト無し");
    }

    #[test]
    fn loose_piece_ignores_scroll() {
        let mut state = tray_piece(63.0);
        state.in_tray = false;
        state.current_position = Position::new(150.0, 200.0);
        let view = TrayView { scroll_offset: 100, wrap_width: 189 };
        assert_eq!(screen_positions(&state, view), vec![Position::new(150.0, 200.0)]);
    }

    #[test]
    fn ghost_copy_is_grabbable_across_the_edge() {
        let sizes = PieceSizes::nominal();
        // スロット x=189 のピースを 180 スクロール → 画面 x=9。ゴーストは x=198。
        let state = tray_piece(189.0);
        let view = TrayView { scroll_offset: 180, wrap_width: 189 };
        let hit = find_piece_at(Position::new(198.0, 440.0), [(PieceId::Head, &state)], &sizes, |_| 0.0, view);
        assert_eq!(hit, Some(PieceId::Head), "右側のゴーストでもつかめる");
    }

    #[test]
    fn later_draw_order_wins_on_overlap() {
        let sizes = PieceSizes::nominal();
        let a = tray_piece(100.0);
        let b = tray_piece(110.0);
        // Backbone は一番下、Head はもっと上に描かれる
        let candidates = [(PieceId::Head, &b), (PieceId::Backbone, &a)];
        let hit = find_piece_at(Position::new(105.0, 440.0), candidates, &sizes, |_| 6.0, VIEW);
        assert_eq!(hit, Some(PieceId::Head));

        let reversed = [(PieceId::Backbone, &a), (PieceId::Head, &b)];
        let hit = find_piece_at(Position::new(105.0, 440.0), reversed, &sizes, |_| 6.0, VIEW);
        assert_eq!(hit, Some(PieceId::Head), "渡す順番には依存しない");
    }

    #[test]
    fn inflation_extends_the_hit_box() {
        let mut sizes = PieceSizes::nominal();
        sizes.set(PieceId::RightKnee, 20.0, 20.0);
        let state = tray_piece(100.0);
        let point = Position::new(115.0, 440.0); // 中心から 15px、矩形の端は 10px
        let miss = find_piece_at(point, [(PieceId::RightKnee, &state)], &sizes, |_| 0.0, VIEW);
        assert_eq!(miss, None);
        let hit = find_piece_at(point, [(PieceId::RightKnee, &state)], &sizes, |_| 12.0, VIEW);
        assert_eq!(hit, Some(PieceId::RightKnee));
    }
}
