//! Cardforge generates business-card artwork as vector graphics.
//!
//! A card is produced in three stages:
//!
//! 1. **Project**: a [`CubeSpec`] is turned into six screen-space quads by the
//!    pseudo-3D projection engine ([`project_cube_faces`]).
//! 2. **Compose**: the chain and grid composers ([`render_chain`],
//!    [`render_fading_grid`]) append shapes to a [`Surface`], driven by a
//!    seedable coin-flip source; the card assembler ([`assemble_front`],
//!    [`assemble_back`]) adds panels, text and QR placements on top.
//! 3. **Write**: a finished [`Surface`] is serialized to SVG ([`Svg`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every random decision flows through an
//!   explicitly passed [`Rng64`]; the same [`Seed`] reproduces a card
//!   byte-for-byte.
//! - **No IO in the render core**: composers only append to a [`Surface`];
//!   file output and QR encoding live at the edges ([`Svg`], [`QrEncoder`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod card;
mod foundation;
mod projection;
mod render;
mod surface;

pub use card::assemble::{
    BACK_SVG, FONT_FAMILY, FRONT_SVG, QR_BACK_SVG, QR_FRONT_SVG, assemble_back, assemble_front,
};
pub use card::config::CardConfig;
pub use card::qr::{
    QrEncoder, QrPayload, QrRequest, QrStyle, QrencodeCli, ensure_parent_dir, is_qrencode_on_path,
};
pub use foundation::core::{
    CARD_HEIGHT_MM, CARD_WIDTH_MM, Canvas, PX_PER_MM, Point, Rect, Vec2, clamp01,
};
pub use foundation::error::{CardforgeError, CardforgeResult};
pub use foundation::rng::{CoinFlip, Rng64, Seed};
pub use projection::cube::{CubeFaces, CubeSpec, Face, FaceQuad, project_cube_faces};
pub use render::chain::{CHAIN_FILL, ChainParams, render_chain};
pub use render::cube::{SIDE_ACCENT_FILL, render_cube};
pub use render::grid::{GridParams, render_fading_grid};
pub use surface::model::{RectStyle, Shape, Surface, TextAnchor, TextStyle};
pub use surface::svg::Svg;
