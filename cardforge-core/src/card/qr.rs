//! QR-code encoding capability boundary.
//!
//! The core never encodes QR codes itself; it places a pre-encoded image
//! artifact by path. The one real implementation here drives the system
//! `qrencode` binary, which avoids linking a codec for a concern that is out
//! of scope.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::foundation::error::{CardforgeError, CardforgeResult};

/// Dark/light module colors for an encoded QR image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QrStyle {
    /// Dark module color.
    pub dark: String,
    /// Light module color.
    pub light: String,
}

/// What a QR code should carry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum QrPayload {
    /// MeCard contact payload (front of the card).
    MeCard {
        /// Contact name.
        name: String,
        /// Contact phone number.
        phone: String,
        /// Contact email.
        email: String,
        /// Contact URL.
        url: String,
    },
    /// Plain URL payload (back of the card).
    Url(String),
}

impl QrPayload {
    /// The literal text handed to the encoder.
    pub fn encode_text(&self) -> String {
        match self {
            QrPayload::MeCard {
                name,
                phone,
                email,
                url,
            } => format!(
                "MECARD:N:{};TEL:{};EMAIL:{};URL:{};;",
                mecard_escape(name),
                mecard_escape(phone),
                mecard_escape(email),
                mecard_escape(url),
            ),
            QrPayload::Url(url) => url.clone(),
        }
    }
}

/// Characters reserved by the MeCard format.
fn mecard_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | ';' | ':' | ',') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// One encoding request: payload plus colors.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QrRequest {
    /// What to encode.
    pub payload: QrPayload,
    /// Module colors.
    pub style: QrStyle,
}

/// Capability producing a QR image artifact at a given path.
pub trait QrEncoder {
    /// Encode `request` and write the artifact to `out_path`.
    fn encode(&self, request: &QrRequest, out_path: &Path) -> CardforgeResult<()>;
}

/// Whether the system `qrencode` binary is available.
pub fn is_qrencode_on_path() -> bool {
    Command::new("qrencode")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Create the parent directory of an output path if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> CardforgeResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// [`QrEncoder`] backed by the system `qrencode` binary.
///
/// We intentionally shell out rather than link a QR crate: encoding is an
/// external collaborator in this system, the same way video encoding is in
/// tools that pipe frames to a system `ffmpeg`.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrencodeCli;

impl QrEncoder for QrencodeCli {
    fn encode(&self, request: &QrRequest, out_path: &Path) -> CardforgeResult<()> {
        ensure_parent_dir(out_path)?;

        if !is_qrencode_on_path() {
            return Err(CardforgeError::encode(
                "qrencode is required for QR output, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("qrencode");
        cmd.stdout(Stdio::null()).stderr(Stdio::piped());
        cmd.args(["-t", "SVG", "-m", "1"])
            .args(["--foreground", &qrencode_color(&request.style.dark)?])
            .args(["--background", &qrencode_color(&request.style.light)?])
            .arg("-o")
            .arg(out_path)
            .arg(request.payload.encode_text());

        let output = cmd.output().map_err(|e| {
            CardforgeError::encode(format!(
                "failed to spawn qrencode (is it installed and on PATH?): {e}"
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CardforgeError::encode(format!(
                "qrencode exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// `qrencode` wants bare RRGGBB/RRGGBBAA hex; accept the common SVG forms.
fn qrencode_color(color: &str) -> CardforgeResult<String> {
    let named = match color.to_ascii_lowercase().as_str() {
        "white" => Some("FFFFFF"),
        "black" => Some("000000"),
        _ => None,
    };
    if let Some(hex) = named {
        return Ok(hex.to_string());
    }

    let hex = color.strip_prefix('#').unwrap_or(color);
    let valid_len = hex.len() == 6 || hex.len() == 8;
    if valid_len && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(hex.to_string())
    } else {
        Err(CardforgeError::encode(format!(
            "cannot express color '{color}' as a qrencode hex color"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/qr.rs"]
mod tests;
