//! Card assembly: composes the procedural artwork, panel, text and QR
//! placements into finished front and back surfaces.
//!
//! Layout is fixed-offset placement on the 84x54 mm canvas; there is no
//! layout engine here. All randomness flows through the caller's coin-flip
//! source, so one seed reproduces both faces exactly.

use crate::card::config::CardConfig;
use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::error::CardforgeResult;
use crate::foundation::rng::{CoinFlip, Seed};
use crate::render::chain::{ChainParams, render_chain};
use crate::render::grid::{GridParams, render_fading_grid};
use crate::surface::model::{RectStyle, Surface, TextAnchor, TextStyle};

/// Font family used for all card text.
pub const FONT_FAMILY: &str = "AvantGarde LT CondMedium";

/// Output file name of the front face.
pub const FRONT_SVG: &str = "business_card.svg";

/// Output file name of the back face.
pub const BACK_SVG: &str = "business_card_back.svg";

/// Artifact name of the front (contact) QR image.
pub const QR_FRONT_SVG: &str = "qr_code.svg";

/// Artifact name of the back (URL) QR image.
pub const QR_BACK_SVG: &str = "qr_code_back.svg";

const TEXT_PADDING: f64 = 10.0;
const QR_IMAGE_INSET: f64 = 10.0;
const QR_FRAME_SIZE: f64 = 10.0;
const QR_FRAME_STROKE: f64 = 2.0;

/// Assemble the front face of the card.
#[tracing::instrument(skip(config, rng))]
pub fn assemble_front(config: &CardConfig, rng: &mut impl CoinFlip) -> CardforgeResult<Surface> {
    config.validate()?;

    let canvas = Canvas::business_card();
    let (w, h) = (canvas.width, canvas.height);
    let mut surface = Surface::new(canvas);

    add_background(&mut surface, config, w, h);
    surface.add_rect(
        Point::new(config.border_width, config.border_width),
        w - 2.0 * config.border_width,
        h - 2.0 * config.border_width,
        RectStyle {
            fill: config.fill_color.clone(),
            stroke: Some("white".to_string()),
            ..RectStyle::default()
        },
    );

    render_fading_grid(
        &mut surface,
        rng,
        &GridParams {
            anchor: Point::new(w - w * 0.05, h - h * 0.075),
            width: floor_div(w * 2.1, 4.0),
            height: floor_div(h, 1.5),
            square_size: 5.0,
            spacing: 5.0,
            max_opacity: 0.5,
        },
    )?;

    render_chain(
        &mut surface,
        rng,
        &ChainParams {
            start: Point::new(w - w * 0.12, h - h * 0.88),
            count: 12,
            size_increment: 0.0,
            size: 15.0,
            gap: 5.0,
            ..ChainParams::default()
        },
    )?;

    let panel_x = w - config.panel_width - config.panel_x_offset;
    let panel_y = config.panel_y_offset;
    surface.add_rect(
        Point::new(panel_x, panel_y),
        config.panel_width,
        config.panel_height,
        RectStyle {
            fill: config.fill_color.clone(),
            stroke: Some(config.fill_color.clone()),
            corner_radius: 5.0,
            ..RectStyle::default()
        },
    );

    // Contact block grows upward from the bottom edge.
    let text_x = TEXT_PADDING + 5.0;
    let mut y_offset = h - TEXT_PADDING - 5.0;
    for line in [
        format!("\u{2709} {}", config.email),
        format!("\u{260E} {}", config.phone),
        config.org.clone(),
        config.url.clone(),
    ] {
        surface.add_text(&line, Point::new(text_x, y_offset), label(8.0));
        y_offset -= 10.0;
    }
    y_offset -= 10.0;
    surface.add_text(&config.name, Point::new(text_x, y_offset), label(18.0));
    y_offset -= 20.0;
    surface.add_text(&config.job_title, Point::new(text_x, y_offset), label(14.0));

    let qr_origin = Point::new(
        config.qr_code_x + QR_IMAGE_INSET,
        config.qr_code_y + QR_IMAGE_INSET,
    );
    surface.add_image(QR_FRONT_SVG, qr_origin, config.qr_code_size, config.qr_code_size);
    add_qr_corner_frames(&mut surface, qr_origin, config.qr_code_size, 5.0);

    tracing::debug!(shapes = surface.len(), "assembled front face");
    Ok(surface)
}

/// Assemble the back face of the card.
///
/// The seed is printed bottom-right so a physical card is enough to
/// regenerate its artwork.
#[tracing::instrument(skip(config, seed, rng))]
pub fn assemble_back(
    config: &CardConfig,
    seed: &Seed,
    rng: &mut impl CoinFlip,
) -> CardforgeResult<Surface> {
    config.validate()?;

    let canvas = Canvas::business_card();
    let (w, h) = (canvas.width, canvas.height);
    let mut surface = Surface::new(canvas);

    add_background(&mut surface, config, w, h);

    render_fading_grid(
        &mut surface,
        rng,
        &GridParams {
            anchor: Point::new(w - w * 0.05, h - h * 0.075),
            width: floor_div(w * 4.0, 4.0) + 10.0,
            height: floor_div(h, 3.0) - 5.0,
            square_size: 5.0,
            spacing: 5.0,
            max_opacity: 0.5,
        },
    )?;

    render_fading_grid(
        &mut surface,
        rng,
        &GridParams {
            anchor: Point::new(w - w * 0.05, h - h * 0.6),
            width: floor_div(w * 4.0, 4.0) + 10.0,
            height: floor_div(h, 2.5) - 5.0,
            square_size: 5.0,
            spacing: 5.0,
            max_opacity: 0.5,
        },
    )?;

    render_chain(
        &mut surface,
        rng,
        &ChainParams {
            start: Point::new(w - w * 0.08, h - h * 0.49),
            count: 24,
            size_increment: 0.0,
            z_angle: 50.0,
            size: 16.0,
            gap: 5.0,
            ..ChainParams::default()
        },
    )?;

    let panel_x = w - config.panel_width - config.panel_x_offset;
    let panel_y = config.panel_y_offset;
    surface.add_text(
        &config.version,
        Point::new(panel_x + 5.0, panel_y),
        label(8.0),
    );

    let qr_origin = Point::new(QR_IMAGE_INSET, QR_IMAGE_INSET);
    surface.add_image(QR_BACK_SVG, qr_origin, 30.0, 30.0);
    add_qr_corner_frames(&mut surface, qr_origin, 30.0, 3.0);

    surface.add_text(
        &seed.to_string(),
        Point::new(w - 20.0, h - 2.0),
        TextStyle {
            anchor: TextAnchor::End,
            ..label(6.0)
        },
    );

    tracing::debug!(shapes = surface.len(), "assembled back face");
    Ok(surface)
}

fn add_background(surface: &mut Surface, config: &CardConfig, w: f64, h: f64) {
    surface.add_rect(
        Point::ZERO,
        w,
        h,
        RectStyle {
            fill: config.fill_color.clone(),
            stroke: Some(config.fill_color.clone()),
            stroke_width: config.border_width,
            ..RectStyle::default()
        },
    );
}

/// Eight white angle marks framing the corners of a QR image.
fn add_qr_corner_frames(surface: &mut Surface, origin: Point, size: f64, margin: f64) {
    let f = QR_FRAME_SIZE;
    let t = QR_FRAME_STROKE;
    let m = margin;
    let white = RectStyle::default();

    let marks = [
        // top-left
        (Vec2::new(-m, -m), f, t),
        (Vec2::new(-m, -m), t, f),
        // top-right
        (Vec2::new(size - f + m, -m), f, t),
        (Vec2::new(size - t + m, -m), t, f),
        // bottom-left
        (Vec2::new(-m, size - t + m), f, t),
        (Vec2::new(-m, size - f + m), t, f),
        // bottom-right
        (Vec2::new(size - f + m, size - t + m), f, t),
        (Vec2::new(size - t + m, size - f + m), t, f),
    ];
    for (offset, width, height) in marks {
        surface.add_rect(origin + offset, width, height, white.clone());
    }
}

fn label(font_size: f64) -> TextStyle {
    TextStyle {
        font_size,
        font_family: FONT_FAMILY.to_string(),
        fill: "white".to_string(),
        anchor: TextAnchor::Start,
    }
}

/// Grid extents snap to whole pixels via floor division.
fn floor_div(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

#[cfg(test)]
#[path = "../../tests/unit/card/assemble.rs"]
mod tests;
