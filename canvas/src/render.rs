//! Rendering: draws the full board scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the card list and UI state and produces
//! pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::affordance::Affordance;
use crate::consts::HANDLE_SIZE_PX;
use crate::doc::{Card, CardList, Fit};
use crate::geometry::{Bounds, Rect};
use crate::hit::ResizeAnchor;
use crate::input::UiState;

const CONTAINER_FILL: &str = "#F4F1EC";
const CONTAINER_STROKE: &str = "#C9C2B8";
const SELECTION_STROKE: &str = "#4AA3FF";
const HANDLE_FILL: &str = "#FFFFFF";
const BUTTON_FILL: &str = "#D94B4B";
const BUTTON_TEXT: &str = "#FFFFFF";
const CAPTION_TEXT: &str = "rgba(0, 0, 0, 0.55)";

/// Draw the full scene: container, cards, and selection UI.
///
/// `dpr` is the device pixel ratio; all other values are CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    cards: &CardList,
    ui: &UiState,
    affordances: &[Box<dyn Affordance>],
    bounds: Bounds,
    dpr: f64,
) -> Result<(), JsValue> {
    let width = f64::from(bounds.width);
    let height = f64::from(bounds.height);

    // Layer 1: clear and paint the container.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(CONTAINER_FILL);
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_stroke_style_str(CONTAINER_STROKE);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(0.5, 0.5, (width - 1.0).max(0.0), (height - 1.0).max(0.0));

    // Layer 2: cards in insertion order (bottom first).
    for card in cards {
        draw_card(ctx, card)?;
    }

    // Layer 3: selection UI.
    if let Some(card) = ui.selected_id.and_then(|id| cards.get(id)) {
        draw_selection(ctx, card.rect())?;
        for affordance in affordances {
            draw_button(ctx, affordance.rect(card, bounds), affordance.label())?;
        }
    }

    Ok(())
}

fn draw_card(ctx: &CanvasRenderingContext2d, card: &Card) -> Result<(), JsValue> {
    let (x, y, w, h) = rect_f64(card.rect());
    ctx.save();
    ctx.set_fill_style_str(&card.color);
    ctx.fill_rect(x, y, w, h);
    draw_fit_guide(ctx, card.fit, x, y, w, h);
    ctx.restore();
    draw_caption(ctx, card.fit.as_str(), x, y, w, h)
}

/// Outline how the card's image would be placed for its fit mode.
fn draw_fit_guide(ctx: &CanvasRenderingContext2d, fit: Fit, x: f64, y: f64, w: f64, h: f64) {
    let side = w.min(h);
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.6)");
    ctx.set_line_width(1.0);
    match fit {
        Fit::Auto => {}
        Fit::Contain => {
            ctx.stroke_rect(x + (w - side) / 2.0, y + (h - side) / 2.0, side, side);
        }
        Fit::Cover => {
            let cover = w.max(h);
            ctx.stroke_rect(x + (w - cover) / 2.0, y + (h - cover) / 2.0, cover, cover);
        }
    }
}

fn draw_caption(ctx: &CanvasRenderingContext2d, text: &str, x: f64, y: f64, w: f64, h: f64) -> Result<(), JsValue> {
    if w < 40.0 || h < 20.0 {
        return Ok(());
    }
    ctx.save();
    ctx.set_fill_style_str(CAPTION_TEXT);
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("bottom");
    let result = ctx.fill_text(text, x + 4.0, y + h - 4.0);
    ctx.restore();
    result
}

fn draw_selection(ctx: &CanvasRenderingContext2d, rect: Rect) -> Result<(), JsValue> {
    let (x, y, w, h) = rect_f64(rect);
    ctx.save();
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(x, y, w, h);

    let half = HANDLE_SIZE_PX / 2.0;
    ctx.set_fill_style_str(HANDLE_FILL);
    for anchor in ResizeAnchor::ALL {
        let p = anchor.handle_point(rect);
        ctx.fill_rect(p.x - half, p.y - half, HANDLE_SIZE_PX, HANDLE_SIZE_PX);
        ctx.stroke_rect(p.x - half, p.y - half, HANDLE_SIZE_PX, HANDLE_SIZE_PX);
    }
    ctx.restore();
    Ok(())
}

fn draw_button(ctx: &CanvasRenderingContext2d, rect: Rect, label: &str) -> Result<(), JsValue> {
    let (x, y, w, h) = rect_f64(rect);
    ctx.save();
    ctx.set_fill_style_str(BUTTON_FILL);
    ctx.fill_rect(x, y, w, h);
    ctx.set_fill_style_str(BUTTON_TEXT);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let result = ctx.fill_text(label, x + w / 2.0, y + h / 2.0);
    ctx.restore();
    result
}

fn rect_f64(rect: Rect) -> (f64, f64, f64, f64) {
    (f64::from(rect.left), f64::from(rect.top), f64::from(rect.width), f64::from(rect.height))
}
