// src/app/renderer.rs
//! World の状態を Canvas 2D に描くよ！🎨
//! 読むだけで World は書き換えない。

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::asset_loader::{AssetSet, PieceImage, Sprite};
use crate::components::piece::PieceId;
use crate::components::position::Position;
use crate::components::rect::Rect;
use crate::config::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::logic::hit_test::screen_positions;
use crate::logic::layout::{background_rect, UiControl};
use crate::world::World;

const BACKGROUND_COLOR: &str = "#f4efe6";
const PLACEHOLDER_FILL: &str = "#3cb371";
const TEXT_COLOR: &str = "#222222";
const BUTTON_COLOR: &str = "#e0d6c3";

/// 1フレーム分を描く
pub fn render(world: &World, assets: &AssetSet, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    context.set_fill_style_str(BACKGROUND_COLOR);
    context.fill_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);

    draw_background(assets.background.as_ref(), context)?;
    draw_pieces(world, assets, context)?;
    draw_arrows(context);
    draw_overlay(world, assets, context)?;
    Ok(())
}

fn draw_background(image: Option<&HtmlImageElement>, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let rect = background_rect();
    match image {
        Some(image) => context.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        )?,
        None => {
            context.set_stroke_style_str(TEXT_COLOR);
            context.stroke_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
        }
    }
    Ok(())
}

/// ピースを描画順に描く。トレイのピースはスクロール分ずらして、
/// ラップモードならゴーストも描く (画面外のものは飛ばす)。
fn draw_pieces(world: &World, assets: &AssetSet, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let view = world.tray_view();
    // BTreeMap なので PieceId の順 = 描画順
    for (&piece, state) in world.pieces() {
        if !state.placed && !world.level().is_active(piece) {
            continue;
        }
        let image = assets.piece(piece);
        let (w, h) = world.sizes().get(piece);
        for center in screen_positions(state, view) {
            if !Rect::centered(center, w, h).overlaps_band(0.0, SCREEN_WIDTH) {
                continue;
            }
            draw_piece(piece, &image, center, context)?;
        }
    }
    Ok(())
}

fn draw_piece(
    piece: PieceId,
    image: &PieceImage,
    center: Position,
    context: &CanvasRenderingContext2d,
) -> Result<(), JsValue> {
    context.save();
    context.translate(center.x as f64, center.y as f64)?;
    // 角度は反時計回りが正なので、キャンバスの rotate には符号を反転して渡す
    context.rotate(-(image.rotation_deg as f64).to_radians())?;
    let (w, h) = (image.width as f64, image.height as f64);
    match &image.sprite {
        Sprite::Image(element) => {
            context.draw_image_with_html_image_element_and_dw_and_dh(element, -w / 2.0, -h / 2.0, w, h)?;
        }
        Sprite::Placeholder => {
            context.begin_path();
            context.arc(0.0, 0.0, w.min(h) / 2.0, 0.0, PI * 2.0)?;
            context.set_fill_style_str(PLACEHOLDER_FILL);
            context.fill();
            context.set_stroke_style_str("black");
            context.set_line_width(1.0);
            context.stroke();
            log::trace!("renderer: placeholder for {:?}", piece);
        }
    }
    context.restore();
    Ok(())
}

fn draw_arrows(context: &CanvasRenderingContext2d) {
    context.set_fill_style_str(TEXT_COLOR);
    for (control, pointing_left) in [(UiControl::ScrollLeft, true), (UiControl::ScrollRight, false)] {
        let r = control.rect();
        let (left, right) = (r.left() as f64 + 6.0, r.right() as f64 - 6.0);
        let (top, bottom, mid) = (r.top() as f64 + 8.0, r.bottom() as f64 - 8.0, r.center().y as f64);
        context.begin_path();
        if pointing_left {
            context.move_to(right, top);
            context.line_to(left, mid);
            context.line_to(right, bottom);
        } else {
            context.move_to(left, top);
            context.line_to(right, mid);
            context.line_to(left, bottom);
        }
        context.close_path();
        context.fill();
    }
}

fn draw_text(context: &CanvasRenderingContext2d, text: &str, at: Position, font: &str) -> Result<(), JsValue> {
    context.set_font(font);
    context.set_fill_style_str(TEXT_COLOR);
    context.fill_text(text, at.x as f64, at.y as f64)
}

/// ボタン・文字まわり
fn draw_overlay(world: &World, assets: &AssetSet, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    context.set_text_align("center");

    if world.status().stage().number() == 2 && !world.is_complete() {
        draw_text(context, "Bonus! Find where the heart goes", Position::new(SCREEN_WIDTH / 2.0, 380.0), "14px sans-serif")?;
    }

    if world.is_complete() {
        let r = UiControl::Reset.rect();
        match assets.reset_button.as_ref() {
            Some(image) => context.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                r.x as f64,
                r.y as f64,
                r.width as f64,
                r.height as f64,
            )?,
            None => {
                context.set_fill_style_str(BUTTON_COLOR);
                context.fill_rect(r.x as f64, r.y as f64, r.width as f64, r.height as f64);
                draw_text(context, "Reset", Position::new(r.center().x, r.center().y + 5.0), "14px sans-serif")?;
            }
        }
        draw_text(context, "Complete!", Position::new(SCREEN_WIDTH / 2.0, 380.0), "bold 22px sans-serif")?;
        let time = format!("Time: {:.1}s", world.level().elapsed);
        draw_text(context, &time, Position::new(SCREEN_WIDTH / 2.0, 398.0), "12px sans-serif")?;
    }

    let license = UiControl::LicenseLink.rect();
    context.set_text_align("left");
    draw_text(context, "CC BY 4.0", Position::new(license.left(), license.bottom() - 3.0), "11px sans-serif")?;

    let icon = UiControl::ProjectLink.rect();
    context.set_stroke_style_str(TEXT_COLOR);
    context.stroke_rect(icon.x as f64, icon.y as f64, icon.width as f64, icon.height as f64);
    context.set_text_align("center");
    draw_text(context, "?", Position::new(icon.center().x, icon.center().y + 5.0), "bold 14px sans-serif")?;
    Ok(())
}
