use crate::foundation::core::{Canvas, Point, clamp01};

/// A single vector shape accumulated on a [`Surface`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Shape {
    /// Filled and stroked polygon.
    Polygon {
        /// Polygon vertices in drawing order.
        points: Vec<Point>,
        /// Fill color (SVG color string).
        fill: String,
        /// Stroke color (SVG color string).
        stroke: String,
        /// Fill opacity in `[0, 1]`.
        fill_opacity: f64,
        /// Stroke opacity in `[0, 1]`.
        stroke_opacity: f64,
    },
    /// Axis-aligned, optionally rounded rectangle.
    Rect {
        /// Top-left corner.
        insert: Point,
        /// Rectangle width.
        width: f64,
        /// Rectangle height.
        height: f64,
        /// Styling parameters.
        style: RectStyle,
    },
    /// A run of text at a fixed position.
    Text {
        /// Text content.
        content: String,
        /// Baseline anchor position.
        insert: Point,
        /// Styling parameters.
        style: TextStyle,
    },
    /// Placement of an external image artifact by path.
    Image {
        /// Path or URL of the image.
        href: String,
        /// Top-left corner.
        insert: Point,
        /// Placed width.
        width: f64,
        /// Placed height.
        height: f64,
    },
}

/// Styling for [`Shape::Rect`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectStyle {
    /// Fill color.
    pub fill: String,
    /// Stroke color; `None` means no stroke.
    pub stroke: Option<String>,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Fill and stroke opacity in `[0, 1]`.
    pub opacity: f64,
    /// Corner radius (applied to both axes).
    pub corner_radius: f64,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: "white".to_string(),
            stroke: None,
            stroke_width: 1.0,
            opacity: 1.0,
            corner_radius: 0.0,
        }
    }
}

/// Horizontal anchoring of a text run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAnchor {
    /// Text extends rightwards from the insert point.
    #[default]
    Start,
    /// Text extends leftwards from the insert point.
    End,
}

/// Styling for [`Shape::Text`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// Font family name.
    pub font_family: String,
    /// Fill color.
    pub fill: String,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            font_family: "sans-serif".to_string(),
            fill: "black".to_string(),
            anchor: TextAnchor::Start,
        }
    }
}

/// Append-only accumulator of vector shapes for one render pass.
///
/// The render core only ever adds shapes; it never reads them back. Opacities
/// are clamped to `[0, 1]` at insertion so no downstream writer has to deal
/// with out-of-range values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Surface {
    canvas: Canvas,
    shapes: Vec<Shape>,
}

impl Surface {
    /// Create an empty surface for the given canvas.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            shapes: Vec::new(),
        }
    }

    /// Canvas dimensions this surface renders to.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Accumulated shapes, in insertion (painter's) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of accumulated shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether nothing has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a filled/stroked polygon.
    pub fn add_polygon(
        &mut self,
        points: Vec<Point>,
        fill: &str,
        stroke: &str,
        fill_opacity: f64,
        stroke_opacity: f64,
    ) {
        self.shapes.push(Shape::Polygon {
            points,
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            fill_opacity: clamp01(fill_opacity),
            stroke_opacity: clamp01(stroke_opacity),
        });
    }

    /// Append a rectangle.
    pub fn add_rect(&mut self, insert: Point, width: f64, height: f64, style: RectStyle) {
        self.shapes.push(Shape::Rect {
            insert,
            width,
            height,
            style: RectStyle {
                opacity: clamp01(style.opacity),
                ..style
            },
        });
    }

    /// Append a text run.
    pub fn add_text(&mut self, content: &str, insert: Point, style: TextStyle) {
        self.shapes.push(Shape::Text {
            content: content.to_string(),
            insert,
            style,
        });
    }

    /// Append an external image placement.
    pub fn add_image(&mut self, href: &str, insert: Point, width: f64, height: f64) {
        self.shapes.push(Shape::Image {
            href: href.to_string(),
            insert,
            width,
            height,
        });
    }
}
