use crate::foundation::error::CardforgeResult;
use crate::projection::cube::{CubeSpec, Face, project_cube_faces};
use crate::surface::model::Surface;

/// Fixed accent fill for the side face, regardless of `spec.fill_color`.
/// Acts as the cube's shading proxy.
pub const SIDE_ACCENT_FILL: &str = "#4365E1";

/// Render one cube onto the surface as six filled polygons.
///
/// Faces are emitted in [`Face::DRAW_ORDER`] so later faces overlap earlier
/// ones. Additive only: the surface is never cleared or read back.
pub fn render_cube(surface: &mut Surface, spec: &CubeSpec) -> CardforgeResult<()> {
    let faces = project_cube_faces(spec)?;
    for face in Face::DRAW_ORDER {
        let fill = if face == Face::Side {
            SIDE_ACCENT_FILL
        } else {
            spec.fill_color.as_str()
        };
        surface.add_polygon(
            faces.quad(face).to_vec(),
            fill,
            &spec.stroke_color,
            spec.fill_opacity,
            spec.stroke_opacity,
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cube.rs"]
mod tests;
