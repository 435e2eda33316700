use crate::foundation::error::{CardforgeError, CardforgeResult};

pub use kurbo::{Point, Rect, Vec2};

/// Horizontal pixel density used for the card canvas (CSS px per millimetre).
pub const PX_PER_MM: f64 = 3.5433;

/// Standard business-card width in millimetres.
pub const CARD_WIDTH_MM: f64 = 84.0;

/// Standard business-card height in millimetres.
pub const CARD_HEIGHT_MM: f64 = 54.0;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl Canvas {
    /// Build a canvas, rejecting non-positive dimensions.
    pub fn new(width: f64, height: f64) -> CardforgeResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(CardforgeError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// The fixed 84x54 mm card canvas in pixels.
    pub fn business_card() -> Self {
        Self {
            width: CARD_WIDTH_MM * PX_PER_MM,
            height: CARD_HEIGHT_MM * PX_PER_MM,
        }
    }
}

/// Clamp a value to `[0, 1]`.
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
