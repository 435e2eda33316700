/// Convenience result type used across cardforge.
pub type CardforgeResult<T> = Result<T, CardforgeError>;

/// Top-level error taxonomy used by the crate's APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardforgeError {
    /// Invalid geometry or render parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable card configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while invoking the external QR encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardforgeError {
    /// Build a [`CardforgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardforgeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CardforgeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CardforgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
