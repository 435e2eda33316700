//! Pseudo-3D cube projection.
//!
//! A cube is described by a [`CubeSpec`] and projected into six screen-space
//! quads. The rotation passes are not a faithful 3D-to-2D projection: the X
//! and Y passes substitute the cube's `size` for a coordinate in the sine
//! term, which shears the square instead of rotating it. That asymmetry is
//! the look; a mathematically correct rotation produces a different figure.

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{CardforgeError, CardforgeResult};

/// Fully determines one rendered cube's geometry and style.
///
/// Stateless; recomputed per cube, no persistent identity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubeSpec {
    /// Top-left anchor of the base square.
    pub insert: Point,
    /// Side length of the base square; must be > 0.
    pub size: f64,
    /// Fill color for all faces except the side face.
    pub fill_color: String,
    /// Stroke color for all faces.
    pub stroke_color: String,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Stroke opacity in `[0, 1]`.
    pub stroke_opacity: f64,
    /// X shear angle in degrees.
    pub x_angle: f64,
    /// Y shear angle in degrees.
    pub y_angle: f64,
    /// Z rotation angle in degrees.
    pub z_angle: f64,
    /// Uniform face shrink toward the center, in `(0, 1]`; must be > 0.
    pub face_scale: f64,
    /// Directional per-face offset separating the faces visually.
    pub gap: f64,
}

impl Default for CubeSpec {
    fn default() -> Self {
        Self {
            insert: Point::ZERO,
            size: 50.0,
            fill_color: "#D1E2F2".to_string(),
            stroke_color: "#4365E1".to_string(),
            fill_opacity: 1.0,
            stroke_opacity: 1.0,
            x_angle: 0.0,
            y_angle: 0.0,
            z_angle: 0.0,
            face_scale: 0.9,
            gap: 20.0,
        }
    }
}

impl CubeSpec {
    /// Reject geometry the projection cannot meaningfully handle.
    ///
    /// These are programmer or config errors; clamping them silently would
    /// corrupt the figure without signal.
    pub fn validate(&self) -> CardforgeResult<()> {
        if !(self.size > 0.0) {
            return Err(CardforgeError::validation("cube size must be > 0"));
        }
        if !(self.face_scale > 0.0) {
            return Err(CardforgeError::validation("cube face_scale must be > 0"));
        }
        Ok(())
    }
}

/// One of the six quadrilateral faces of a rendered cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Face {
    /// Near lower face.
    Front,
    /// Upper face.
    Top,
    /// Right face (drawn with the accent fill).
    Side,
    /// Lower far face.
    Bottom,
    /// Far face.
    Back,
    /// Left face.
    Left,
}

impl Face {
    /// Painter's-algorithm draw order. Later faces overlap earlier ones;
    /// changing this order changes the cube's occlusion appearance.
    pub const DRAW_ORDER: [Face; 6] = [
        Face::Front,
        Face::Top,
        Face::Side,
        Face::Bottom,
        Face::Back,
        Face::Left,
    ];
}

/// One face's polygon: exactly four points, in a consistent winding order.
pub type FaceQuad = [Point; 4];

/// The six projected face quads of one cube.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubeFaces {
    /// Near lower face.
    pub front: FaceQuad,
    /// Upper face.
    pub top: FaceQuad,
    /// Right face.
    pub side: FaceQuad,
    /// Lower far face.
    pub bottom: FaceQuad,
    /// Far face.
    pub back: FaceQuad,
    /// Left face.
    pub left: FaceQuad,
}

impl CubeFaces {
    /// The quad for a given face.
    pub fn quad(&self, face: Face) -> FaceQuad {
        match face {
            Face::Front => self.front,
            Face::Top => self.top,
            Face::Side => self.side,
            Face::Bottom => self.bottom,
            Face::Back => self.back,
            Face::Left => self.left,
        }
    }
}

/// Project a cube spec into its six screen-space face quads.
///
/// Pure function of the spec. Fails only on invalid geometry
/// ([`CubeSpec::validate`]).
pub fn project_cube_faces(spec: &CubeSpec) -> CardforgeResult<CubeFaces> {
    spec.validate()?;

    let size = spec.size;
    let x_rad = spec.x_angle.to_radians();
    let y_rad = spec.y_angle.to_radians();
    let z_rad = spec.z_angle.to_radians();

    // Base square at angle zero, corners clockwise from the anchor.
    let base = [
        spec.insert,
        spec.insert + Vec2::new(size, 0.0),
        spec.insert + Vec2::new(size, size),
        spec.insert + Vec2::new(0.0, size),
    ];
    let center = spec.insert + Vec2::new(size / 2.0, size / 2.0);

    // X pass: shears y by size*sin, not y*sin. Deliberate.
    let shear_x = |p: Point| -> Point {
        let y = p.y - center.y;
        Point::new(p.x, y * x_rad.cos() - size * x_rad.sin() + center.y)
    };
    // Y pass: same asymmetry along x.
    let shear_y = |p: Point| -> Point {
        let x = p.x - center.x;
        Point::new(x * y_rad.cos() + size * y_rad.sin() + center.x, p.y)
    };
    // Z pass: true 2D rotation about the center.
    let rotate_z = |p: Point| -> Point {
        let x = p.x - center.x;
        let y = p.y - center.y;
        Point::new(
            x * z_rad.cos() - y * z_rad.sin() + center.x,
            x * z_rad.sin() + y * z_rad.cos() + center.y,
        )
    };
    let scale = |p: Point| -> Point {
        Point::new(
            center.x + (p.x - center.x) * spec.face_scale,
            center.y + (p.y - center.y) * spec.face_scale,
        )
    };

    let s = base.map(|p| scale(rotate_z(shear_y(shear_x(p)))));

    // The far side of the cube: selected corners pushed down by the scaled size.
    let depth = Vec2::new(0.0, size * spec.face_scale);
    let deep = s.map(|p| p + depth);

    let down = Vec2::new(0.0, spec.gap);
    let up = Vec2::new(0.0, -spec.gap);
    let right = Vec2::new(spec.gap, 0.0);
    let left = Vec2::new(-spec.gap, 0.0);

    Ok(CubeFaces {
        front: offset([s[0], s[1], deep[1], deep[0]], down),
        top: offset([s[0], s[1], s[2], s[3]], up),
        side: offset([s[1], s[2], deep[2], deep[1]], right),
        bottom: offset([deep[0], deep[1], deep[2], deep[3]], down),
        back: offset([s[3], s[2], deep[2], deep[3]], left),
        left: offset([s[0], s[3], deep[3], deep[0]], left),
    })
}

fn offset(quad: FaceQuad, by: Vec2) -> FaceQuad {
    quad.map(|p| p + by)
}

#[cfg(test)]
#[path = "../../tests/unit/projection/cube.rs"]
mod tests;
