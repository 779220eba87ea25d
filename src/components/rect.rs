// src/components/rect.rs

use serde::{Deserialize, Serialize};

use super::position::Position;

/// 軸に沿った矩形 (左上 x, y と 幅, 高さ)。
/// ボタンの当たり判定やピースのバウンディングボックスに使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// レイアウト定数のタプル (x, y, w, h) から作る
    pub const fn from_tuple(t: (f32, f32, f32, f32)) -> Self {
        Self::new(t.0, t.1, t.2, t.3)
    }

    /// 中心座標とサイズから作る
    pub fn centered(center: Position, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// 点が矩形の中にあるか。右端・下端は含まない。
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }

    /// 四方に `margin` だけ広げた矩形を返す (ドラッグの当たり判定用)
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }

    /// 横方向に [min_x, max_x) の帯と重なっているか。画面外カリング用。
    pub fn overlaps_band(&self, min_x: f32, max_x: f32) -> bool {
        self.right() > min_x && self.left() < max_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Position::new(10.0, 10.0)), "左上の角は含む");
        assert!(rect.contains(Position::new(29.9, 29.9)));
        assert!(!rect.contains(Position::new(30.0, 15.0)), "右端は含まない");
        assert!(!rect.contains(Position::new(15.0, 30.0)), "下端は含まない");
    }

    #[test]
    fn inflate_grows_every_side() {
        let rect = Rect::centered(Position::new(50.0, 50.0), 10.0, 10.0).inflate(5.0);
        assert_eq!(rect, Rect::new(40.0, 40.0, 20.0, 20.0));
        assert_eq!(rect.center(), Position::new(50.0, 50.0));
    }

    #[test]
    fn band_overlap() {
        let rect = Rect::new(-20.0, 0.0, 30.0, 10.0);
        assert!(rect.overlaps_band(0.0, 300.0), "左にはみ出してても一部見えてる");
        assert!(!Rect::new(300.0, 0.0, 10.0, 10.0).overlaps_band(0.0, 300.0));
    }
}
