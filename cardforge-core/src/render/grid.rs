//! The fading grid: sparse rounded squares whose opacity drops with distance
//! from an anchor corner.

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{CardforgeError, CardforgeResult};
use crate::foundation::rng::CoinFlip;
use crate::surface::model::{RectStyle, Surface};

/// Parameters for one fading grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridParams {
    /// Anchor corner; cells extend up and to the left of it.
    pub anchor: Point,
    /// Horizontal extent used to derive the column count.
    pub width: f64,
    /// Vertical extent used to derive the row count.
    pub height: f64,
    /// Side length of each square; must be > 0.
    pub square_size: f64,
    /// Spacing between squares; must be >= 0.
    pub spacing: f64,
    /// Opacity of the cell at the anchor; fades to zero at the far corner.
    pub max_opacity: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            anchor: Point::ZERO,
            width: 0.0,
            height: 0.0,
            square_size: 10.0,
            spacing: 5.0,
            max_opacity: 1.0,
        }
    }
}

/// One included cell, derived from its (row, col) distance from the anchor.
struct GridCell {
    position: Point,
    opacity: f64,
}

/// Render a fading grid with a fair coin flip per cell.
///
/// A region smaller than one cell step produces zero cells and no output.
pub fn render_fading_grid(
    surface: &mut Surface,
    rng: &mut impl CoinFlip,
    params: &GridParams,
) -> CardforgeResult<()> {
    if !(params.square_size > 0.0) {
        return Err(CardforgeError::validation("grid square_size must be > 0"));
    }
    if !(params.spacing >= 0.0) {
        return Err(CardforgeError::validation("grid spacing must be >= 0"));
    }

    let step = params.square_size + params.spacing;
    let num_cols = (params.width / step).floor().max(0.0) as usize;
    let num_rows = (params.height / step).floor().max(0.0) as usize;
    if num_cols + num_rows == 0 {
        // Also guards the division in the fade formula.
        return Ok(());
    }

    for row in 0..num_rows {
        for col in 0..num_cols {
            if rng.next_bool() {
                let fade = 1.0 - (col + row) as f64 / (num_cols + num_rows) as f64;
                let cell = GridCell {
                    position: params.anchor - Vec2::new(col as f64 * step, row as f64 * step),
                    opacity: (params.max_opacity * fade).max(0.0),
                };
                surface.add_rect(
                    cell.position,
                    params.square_size,
                    params.square_size,
                    RectStyle {
                        fill: "white".to_string(),
                        stroke: None,
                        opacity: cell.opacity,
                        corner_radius: 1.0,
                        ..RectStyle::default()
                    },
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
