// src/app/asset_loader.rs
//! 画像をまとめて非同期で読み込むよ！🖼️
//!
//! 1枚でも読めなかったら、同じ大きさのプレースホルダー (緑の丸) に差し替えて続行。
//! 画像が無くてもパズルは遊べるし、当たり判定の大きさも変わらない。

use std::collections::HashMap;

use futures::future::join_all;
use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::components::piece::{rotated_bounds, PieceId, DRAW_ORDER};
use crate::config::layout::BASE_PIECE_HEIGHT;
use crate::logic::layout::PieceSizes;

/// 画像の読み込みで起きるエラー
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image `{0}` not found or empty")]
    Missing(String),
    #[error("failed to decode image `{name}`: {reason}")]
    Decode { name: String, reason: String },
    #[error("DOM error: {0}")]
    Dom(String),
}

/// JS から返ってきたエラー値を読める文字列にする
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// ピースの見た目
#[derive(Debug, Clone)]
pub enum Sprite {
    Image(HtmlImageElement),
    /// 画像が読めなかった時の代わり
    Placeholder,
}

/// 描画用に大きさを決めたピース画像。
/// `width`/`height` は回転前の大きさ。画面上の外接矩形は `bounds()` で。
#[derive(Debug, Clone)]
pub struct PieceImage {
    pub sprite: Sprite,
    pub width: f32,
    pub height: f32,
    pub rotation_deg: f32,
}

impl PieceImage {
    pub fn placeholder(piece: PieceId) -> Self {
        let side = BASE_PIECE_HEIGHT * piece.spec().scale;
        PieceImage {
            sprite: Sprite::Placeholder,
            width: side,
            height: side,
            rotation_deg: piece.spec().rotation_deg,
        }
    }

    /// 回転した後の外接矩形の大きさ (= 当たり判定の大きさ)
    pub fn bounds(&self) -> (f32, f32) {
        rotated_bounds(self.width, self.height, self.rotation_deg)
    }
}

/// 画像の元の大きさから、描画する大きさを決める。
/// 高さを「基準の高さ × 倍率」にそろえて、横は縦横比を保つ。
pub fn scaled_size(piece: PieceId, natural_width: u32, natural_height: u32) -> (f32, f32) {
    let height = BASE_PIECE_HEIGHT * piece.spec().scale;
    if natural_height == 0 {
        return (height, height);
    }
    let width = natural_width as f32 * height / natural_height as f32;
    (width, height)
}

/// 読み込んだ画像一式
#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    pub pieces: HashMap<PieceId, PieceImage>,
    pub background: Option<HtmlImageElement>,
    pub reset_button: Option<HtmlImageElement>,
}

impl AssetSet {
    /// 全部プレースホルダーのセット (読み込みが終わるまではこれで描く)
    pub fn placeholders() -> Self {
        AssetSet {
            pieces: DRAW_ORDER.iter().map(|&p| (p, PieceImage::placeholder(p))).collect(),
            background: None,
            reset_button: None,
        }
    }

    pub fn piece(&self, piece: PieceId) -> PieceImage {
        self.pieces
            .get(&piece)
            .cloned()
            .unwrap_or_else(|| PieceImage::placeholder(piece))
    }

    /// 当たり判定用のサイズ表を画像に合わせて作り直す
    pub fn apply_sizes(&self, sizes: &mut PieceSizes) {
        for (&piece, image) in &self.pieces {
            let (w, h) = image.bounds();
            sizes.set(piece, w, h);
        }
    }
}

/// 画像を1枚読み込んで、デコードが終わるまで待つ
async fn load_image(url: &str) -> Result<HtmlImageElement, AssetError> {
    let image = HtmlImageElement::new().map_err(|e| AssetError::Dom(describe(&e)))?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| AssetError::Decode { name: url.to_string(), reason: describe(&e) })?;
    if image.natural_width() == 0 || image.natural_height() == 0 {
        return Err(AssetError::Missing(url.to_string()));
    }
    Ok(image)
}

/// ピース画像を読み込んで、描画サイズを決める
pub async fn load_piece_image(base_url: &str, piece: PieceId) -> Result<PieceImage, AssetError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), piece.file_name());
    let image = load_image(&url).await?;
    let (width, height) = scaled_size(piece, image.natural_width(), image.natural_height());
    Ok(PieceImage {
        sprite: Sprite::Image(image),
        width,
        height,
        rotation_deg: piece.spec().rotation_deg,
    })
}

/// 読めなかったら警告を出してプレースホルダーにする
pub async fn load_or_placeholder(base_url: &str, piece: PieceId) -> PieceImage {
    match load_piece_image(base_url, piece).await {
        Ok(image) => image,
        Err(e) => {
            warn!("asset_loader: {} (using placeholder for {:?})", e, piece);
            PieceImage::placeholder(piece)
        }
    }
}

async fn load_optional(base_url: &str, file_name: &str) -> Option<HtmlImageElement> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), file_name);
    match load_image(&url).await {
        Ok(image) => Some(image),
        Err(e) => {
            warn!("asset_loader: {}", e);
            None
        }
    }
}

/// 全部の画像を並行して読み込む。失敗しても必ず全ピース分そろって返ってくる。
pub async fn load_all(base_url: &str) -> AssetSet {
    let piece_images = join_all(DRAW_ORDER.iter().map(|&piece| async move {
        (piece, load_or_placeholder(base_url, piece).await)
    }))
    .await;
    let background = load_optional(base_url, "background.png").await;
    let reset_button = load_optional(base_url, "reset.png").await;

    let loaded = piece_images
        .iter()
        .filter(|(_, image)| matches!(image.sprite, Sprite::Image(_)))
        .count();
    info!("asset_loader: {}/{} piece images loaded", loaded, DRAW_ORDER.len());

    AssetSet {
        pieces: piece_images.into_iter().collect(),
        background,
        reset_button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_size_keeps_aspect_ratio() {
        // Costa は倍率 1.25 → 高さ 56.25
        let (w, h) = scaled_size(PieceId::Costa, 200, 100);
        assert!((h - 56.25).abs() < 1e-4);
        assert!((w - 112.5).abs() < 1e-4, "横長の画像は横長のまま");
        assert_eq!(scaled_size(PieceId::Costa, 10, 0), (56.25, 56.25), "高さ0なら正方形");
    }

    #[test]
    fn placeholder_matches_nominal_size() {
        for piece in DRAW_ORDER {
            let image = PieceImage::placeholder(piece);
            let (w, h) = image.bounds();
            let (nw, nh) = piece.nominal_size();
            assert!((w - nw).abs() < 1e-3 && (h - nh).abs() < 1e-3, "{:?} のサイズが違う", piece);
        }
    }

    #[test]
    fn apply_sizes_overwrites_hit_box_sizes() {
        let mut set = AssetSet::placeholders();
        set.pieces.insert(
            PieceId::Head,
            PieceImage { sprite: Sprite::Placeholder, width: 80.0, height: 40.0, rotation_deg: 0.0 },
        );
        let mut sizes = PieceSizes::nominal();
        set.apply_sizes(&mut sizes);
        assert_eq!(sizes.get(PieceId::Head), (80.0, 40.0));
        assert_eq!(sizes.get(PieceId::Costa), PieceId::Costa.nominal_size());
    }
}
