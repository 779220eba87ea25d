// src/components/position.rs

use serde::{Deserialize, Serialize};

/// 2D空間での位置を表す型だよ！ (x, y) 座標を持つよ。📍
///
/// ピースの中心座標だったり、アンカー(はめ込み先)だったり、
/// ポインターの位置だったり、いろんな所で使う汎用の点！
///
/// 座標は `f32`。スクロール量だけは整数 (px) で持ってるけど、
/// 画面上の位置はこっちで統一するよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// もう一つの点とのユークリッド距離。スナップ判定で使う！
    pub fn distance_to(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// `[0, width] x [0, height]` の中に押し込んだ点を返す
    pub fn clamped(&self, width: f32, height: f32) -> Position {
        Position { x: self.x.clamp(0.0, width), y: self.y.clamp(0.0, height) }
    }

    /// X 方向だけずらした点を返す (トレイのスクロールやゴーストで使う)
    pub fn offset_x(&self, dx: f32) -> Position {
        Position { x: self.x + dx, y: self.y }
    }
}

impl From<(f32, f32)> for Position {
    fn from(v: (f32, f32)) -> Self {
        Position { x: v.0, y: v.1 }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_points() {
        let target = Position::new(100.0, 100.0);
        let near = Position::new(120.0, 110.0);
        let far = Position::new(140.0, 140.0);

        // sqrt(400 + 100) ≒ 22.36
        assert!((near.distance_to(target) - 22.36).abs() < 0.01);
        // sqrt(1600 + 1600) ≒ 56.57
        assert!((far.distance_to(target) - 56.57).abs() < 0.01);
        // 距離は対称
        assert_eq!(near.distance_to(target), target.distance_to(near));
        println!("距離計算テスト、成功！🎉");
    }

    #[test]
    fn offset_keeps_y() {
        let pos = Position::new(10.0, 20.0).offset_x(-30.0);
        assert_eq!(pos, Position::new(-20.0, 20.0));
    }
}
