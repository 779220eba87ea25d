// src/components/piece.rs

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::config::layout::{BACKGROUND_X, BACKGROUND_Y, BASE_PIECE_HEIGHT};

/// パズルのピース (骨のパーツ) を表す列挙型だよ！🦴
///
/// 文字列キーの辞書じゃなくて enum にしておくと、ピースごとの設定
/// (倍率とか回転とか) を書き忘れた時にコンパイラが教えてくれる！安心！✨
///
/// 宣言の順番がそのまま「描画順 (下から上)」になってるよ。
/// `Heart` はステージ2で出てくるボーナスピース。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceId {
    Backbone, // 一番下
    Costa,
    Pelvis,
    RightFemur,
    LeftFemur,
    RightLeg,
    LeftLeg,
    RightArm,
    LeftArm,
    Head,
    RightKnee,
    LeftKnee,
    Heart, // 一番上 (ボーナス)
}

/// 描画順 (下から上)。レンダラーとヒットテストが使う。
pub const DRAW_ORDER: [PieceId; 13] = [
    PieceId::Backbone,
    PieceId::Costa,
    PieceId::Pelvis,
    PieceId::RightFemur,
    PieceId::LeftFemur,
    PieceId::RightLeg,
    PieceId::LeftLeg,
    PieceId::RightArm,
    PieceId::LeftArm,
    PieceId::Head,
    PieceId::RightKnee,
    PieceId::LeftKnee,
    PieceId::Heart,
];

/// ステージ1で使う12個のピース (ボーナス以外全部)
pub const STAGE_ONE_PIECES: [PieceId; 12] = [
    PieceId::Backbone,
    PieceId::Costa,
    PieceId::Pelvis,
    PieceId::RightFemur,
    PieceId::LeftFemur,
    PieceId::RightLeg,
    PieceId::LeftLeg,
    PieceId::RightArm,
    PieceId::LeftArm,
    PieceId::Head,
    PieceId::RightKnee,
    PieceId::LeftKnee,
];

/// ステージ2のボーナスピース
pub const BONUS_PIECE: PieceId = PieceId::Heart;

/// ピース1個分の静的な設定だよ。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceSpec {
    /// 画像ファイル名 (アセットローダーが使う)
    pub file_name: &'static str,
    /// 背景の左上からのアンカー位置
    pub anchor_offset: (f32, f32),
    /// 基準の高さに掛ける倍率
    pub scale: f32,
    /// 回転角度 (度、反時計回りが正)
    pub rotation_deg: f32,
    /// 当たり判定の広げ幅。None なら標準値を使う。
    pub drag_inflation: Option<f32>,
}

impl PieceId {
    /// カタログを引く。match なので新しいピースを足したら必ずここも書くことになる！
    pub const fn spec(self) -> PieceSpec {
        match self {
            PieceId::Head => spec("head.png", (123.0, 26.0), 1.12, 0.0, None),
            PieceId::Costa => spec("costa.png", (123.0, 85.0), 1.25, 0.0, None),
            PieceId::Backbone => spec("backbone.png", (123.0, 110.0), 2.8, 0.0, None),
            PieceId::Pelvis => spec("pelvis.png", (123.0, 155.0), 1.15, 0.0, None),
            PieceId::RightArm => spec("right_arm.png", (50.0, 130.0), 3.3, -9.4, None),
            PieceId::LeftArm => spec("left_arm.png", (200.0, 130.0), 3.3, 9.4, None),
            PieceId::RightFemur => spec("right_femur.png", (98.0, 202.0), 1.76, 0.0, None),
            PieceId::LeftFemur => spec("left_femur.png", (152.0, 202.0), 1.76, 0.0, None),
            // 膝はすごく小さいので当たり判定を大きめに
            PieceId::RightKnee => spec("right_knee.png", (103.0, 237.0), 0.42, 0.0, Some(12.0)),
            PieceId::LeftKnee => spec("left_knee.png", (147.0, 237.0), 0.42, 0.0, Some(12.0)),
            PieceId::RightLeg => spec("right_leg.png", (105.0, 294.0), 2.28, 0.0, None),
            PieceId::LeftLeg => spec("left_leg.png", (145.0, 294.0), 2.28, 0.0, None),
            PieceId::Heart => spec("heart.png", (123.0, 95.0), 0.8, 0.0, None),
        }
    }

    /// 画面上のアンカー (はめ込み先) の座標
    pub fn anchor(self) -> Position {
        let (dx, dy) = self.spec().anchor_offset;
        Position::new(BACKGROUND_X + dx, BACKGROUND_Y + dy)
    }

    /// 描画順でのインデックス (大きいほど手前)
    pub fn draw_index(self) -> usize {
        self as usize
    }

    /// 画像がまだ無い時の大きさ。プレースホルダーと同じ正方形を回転させた外接矩形。
    pub fn nominal_size(self) -> (f32, f32) {
        let spec = self.spec();
        let side = BASE_PIECE_HEIGHT * spec.scale;
        rotated_bounds(side, side, spec.rotation_deg)
    }

    pub fn file_name(self) -> &'static str {
        self.spec().file_name
    }
}

const fn spec(
    file_name: &'static str,
    anchor_offset: (f32, f32),
    scale: f32,
    rotation_deg: f32,
    drag_inflation: Option<f32>,
) -> PieceSpec {
    PieceSpec { file_name, anchor_offset, scale, rotation_deg, drag_inflation }
}

/// 幅 w, 高さ h の矩形を `deg` 度回転させた時の外接矩形のサイズ。
/// 画像を回転させるとキャンバスはこの大きさに広がるので、当たり判定もそれに合わせる。
pub fn rotated_bounds(w: f32, h: f32, deg: f32) -> (f32, f32) {
    if deg == 0.0 {
        return (w, h);
    }
    let (sin, cos) = deg.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    (w * cos + h * sin, w * sin + h * cos)
}
