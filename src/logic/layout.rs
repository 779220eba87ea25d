// src/logic/layout.rs
//! 固定のレイアウト定数から、UI コントロールの矩形やピースの大きさを計算するよ。
//! 状態を持たないので、どこからでも気軽に呼べる！

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::{piece::PieceId, position::Position, rect::Rect};
use crate::config::layout::*;

/// 画面上の押せるもの。押された時はこの順番 (上から) で判定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiControl {
    /// リセットボタン (クリア後だけ有効)
    Reset,
    ScrollLeft,
    ScrollRight,
    /// ライセンス表記 → 外部リンク
    LicenseLink,
    /// プロジェクトアイコン → 外部リンク
    ProjectLink,
}

/// 判定の優先順
pub const CONTROL_PRIORITY: [UiControl; 5] = [
    UiControl::Reset,
    UiControl::ScrollLeft,
    UiControl::ScrollRight,
    UiControl::LicenseLink,
    UiControl::ProjectLink,
];

impl UiControl {
    pub fn rect(self) -> Rect {
        match self {
            UiControl::Reset => Rect::from_tuple(RESET_BUTTON_RECT),
            UiControl::ScrollLeft => Rect::from_tuple(LEFT_ARROW_RECT),
            UiControl::ScrollRight => Rect::from_tuple(RIGHT_ARROW_RECT),
            UiControl::LicenseLink => Rect::from_tuple(LICENSE_TEXT_RECT),
            UiControl::ProjectLink => Rect::from_tuple(PROJECT_ICON_RECT),
        }
    }
}

/// スワイプを受け付けるトレイ領域
pub fn tray_area() -> Rect {
    Rect::new(TRAY_AREA_X, TRAY_AREA_Y, TRAY_AREA_WIDTH, TRAY_AREA_HEIGHT)
}

/// 背景イラストの矩形
pub fn background_rect() -> Rect {
    Rect::new(BACKGROUND_X, BACKGROUND_Y, BACKGROUND_WIDTH, BACKGROUND_HEIGHT)
}

/// トレイの `slot_index` 番目のスロットの中心 (スクロール前のトレイ座標)
pub fn slot_position(slot_index: usize) -> Position {
    Position::new(TRAY_START_X + (slot_index as i32 * TRAY_SPACING_X) as f32, TRAY_Y)
}

/// ピースごとの描画サイズ。
///
/// 最初はカタログの名目サイズ (プレースホルダーと同じ) で埋めておいて、
/// 画像が読めたら本物のサイズで上書きする。どっちにしても当たり判定は必ず計算できる。
#[derive(Debug, Clone, PartialEq)]
pub struct PieceSizes {
    sizes: HashMap<PieceId, (f32, f32)>,
}

impl Default for PieceSizes {
    fn default() -> Self {
        Self::nominal()
    }
}

impl PieceSizes {
    pub fn nominal() -> Self {
        let sizes = crate::components::piece::DRAW_ORDER
            .iter()
            .map(|&piece| (piece, piece.nominal_size()))
            .collect();
        Self { sizes }
    }

    pub fn get(&self, piece: PieceId) -> (f32, f32) {
        self.sizes.get(&piece).copied().unwrap_or_else(|| piece.nominal_size())
    }

    pub fn set(&mut self, piece: PieceId, width: f32, height: f32) {
        self.sizes.insert(piece, (width, height));
    }

    /// 中心 `center` に置いた時の描画矩形
    pub fn rect_at(&self, piece: PieceId, center: Position) -> Rect {
        let (w, h) = self.get(piece);
        Rect::centered(center, w, h)
    }
}
