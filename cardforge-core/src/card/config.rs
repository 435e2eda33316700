use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CardforgeError, CardforgeResult};
use crate::foundation::rng::Seed;

/// Card configuration loaded once before any rendering.
///
/// Text fields, colors and layout offsets; everything the two card faces
/// need besides the seed-driven procedural artwork.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardConfig {
    /// Holder name (large line on the front).
    pub name: String,
    /// Job title line.
    #[serde(default)]
    pub job_title: String,
    /// Organization line.
    #[serde(default)]
    pub org: String,
    /// Phone line (also encoded into the contact QR).
    #[serde(default)]
    pub phone: String,
    /// Email line (also encoded into the contact QR).
    #[serde(default)]
    pub email: String,
    /// URL line (also encoded into both QR codes).
    #[serde(default)]
    pub url: String,

    /// Card background color.
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
    /// QR light-module color.
    #[serde(default = "default_back_color")]
    pub back_color: String,
    /// Width of the outer border stroke.
    #[serde(default = "default_border_width")]
    pub border_width: f64,

    /// Info panel width.
    #[serde(default = "default_panel_width")]
    pub panel_width: f64,
    /// Info panel height.
    #[serde(default = "default_panel_height")]
    pub panel_height: f64,
    /// Panel inset from the right edge.
    #[serde(default = "default_panel_offset")]
    pub panel_x_offset: f64,
    /// Panel inset from the top edge.
    #[serde(default = "default_panel_offset")]
    pub panel_y_offset: f64,

    /// Front QR block x position.
    #[serde(default = "default_qr_pos")]
    pub qr_code_x: f64,
    /// Front QR block y position.
    #[serde(default = "default_qr_pos")]
    pub qr_code_y: f64,
    /// Front QR image side length.
    #[serde(default = "default_qr_size")]
    pub qr_code_size: f64,

    /// Version label printed on the back.
    #[serde(default = "default_version")]
    pub version: String,
    /// Reproducibility seed; a fresh one is generated when absent.
    #[serde(default)]
    pub seed: Option<Seed>,
}

fn default_fill_color() -> String {
    "#4365E1".to_string()
}

fn default_back_color() -> String {
    "white".to_string()
}

fn default_border_width() -> f64 {
    2.0
}

fn default_panel_width() -> f64 {
    120.0
}

fn default_panel_height() -> f64 {
    60.0
}

fn default_panel_offset() -> f64 {
    10.0
}

fn default_qr_pos() -> f64 {
    10.0
}

fn default_qr_size() -> f64 {
    50.0
}

fn default_version() -> String {
    "v1.0".to_string()
}

impl CardConfig {
    /// Load and parse a config JSON file.
    pub fn from_path(path: &Path) -> CardforgeResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| CardforgeError::serde(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layout values the assembler cannot place.
    pub fn validate(&self) -> CardforgeResult<()> {
        if !(self.border_width >= 0.0) {
            return Err(CardforgeError::config("border_width must be >= 0"));
        }
        if !(self.panel_width > 0.0 && self.panel_height > 0.0) {
            return Err(CardforgeError::config("panel dimensions must be > 0"));
        }
        if !(self.qr_code_size > 0.0) {
            return Err(CardforgeError::config("qr_code_size must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/config.rs"]
mod tests;
