/// Convenience result type used across Easel.
pub type EaselResult<T> = Result<T, EaselError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is raised at the call site that detected it; a failing call never
/// leaves a partially-applied mutation behind.
#[derive(thiserror::Error, Debug)]
pub enum EaselError {
    /// Invalid geometry, color channel, frame or frame window.
    #[error("validation error: {0}")]
    Validation(String),

    /// Two transformations of the same kind overlap on one shape.
    #[error("conflict error: {0}")]
    Conflict(String),

    /// A shape identifier does not resolve to a shape on the canvas.
    #[error("not found: {0}")]
    NotFound(String),

    /// Errors when serializing or deserializing scene documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EaselError {
    /// Build a [`EaselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EaselError::Conflict`] value.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Build a [`EaselError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`EaselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for EaselError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
