//! The "protein chain": a coin-flipped run of cubes along a diagonal.

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::CardforgeResult;
use crate::foundation::rng::CoinFlip;
use crate::projection::cube::CubeSpec;
use crate::render::cube::render_cube;
use crate::surface::model::Surface;

/// Fill color forced onto every chain cube.
pub const CHAIN_FILL: &str = "white";

/// Parameters for one chain of cubes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChainParams {
    /// Insert point of the first cube.
    pub start: Point,
    /// Number of coin flips (upper bound on cubes drawn).
    pub count: usize,
    /// Size added per drawn cube.
    pub size_increment: f64,
    /// Starting x shear angle in degrees.
    pub x_angle: f64,
    /// Y shear angle in degrees (never advanced).
    pub y_angle: f64,
    /// Starting z rotation angle in degrees.
    pub z_angle: f64,
    /// Starting cube size.
    pub size: f64,
    /// Constant bias added to the z angle of every drawn cube.
    pub phase_shift: f64,
    /// Face gap passed through to each cube.
    pub gap: f64,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            start: Point::ZERO,
            count: 0,
            size_increment: 5.0,
            x_angle: 0.0,
            y_angle: 0.0,
            z_angle: 0.0,
            size: 20.0,
            phase_shift: 0.0,
            gap: 10.0,
        }
    }
}

/// Mutable iteration state threaded through one chain render.
struct ChainState {
    insert: Point,
    size: f64,
    x_angle: f64,
    z_angle: f64,
}

impl ChainState {
    fn advance(&mut self, size_increment: f64) {
        self.insert += Vec2::new(-self.size * 1.5, 0.0);
        self.size += size_increment;
        self.x_angle += 5.0;
        self.z_angle += 50.0;
    }
}

/// Render a chain of cubes with a fair coin flip per step.
///
/// A skipped step advances nothing: the insert point, size and angles only
/// move when a cube is actually drawn. The spacing and density of the chain
/// depend on that coupling, so it is intentional, not a defect.
pub fn render_chain(
    surface: &mut Surface,
    rng: &mut impl CoinFlip,
    params: &ChainParams,
) -> CardforgeResult<()> {
    let mut state = ChainState {
        insert: params.start,
        size: params.size,
        x_angle: params.x_angle,
        z_angle: params.z_angle,
    };

    for _ in 0..params.count {
        if rng.next_bool() {
            let spec = CubeSpec {
                insert: state.insert,
                size: state.size,
                fill_color: CHAIN_FILL.to_string(),
                fill_opacity: 1.0,
                stroke_opacity: 1.0,
                x_angle: state.x_angle,
                y_angle: params.y_angle,
                z_angle: state.z_angle + params.phase_shift,
                gap: params.gap,
                ..CubeSpec::default()
            };
            render_cube(surface, &spec)?;
            state.advance(params.size_increment);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/chain.rs"]
mod tests;
