/// Convenience result type used across tfedit.
pub type TfeResult<T> = Result<T, TfeError>;

/// Top-level error taxonomy used by the editor APIs.
#[derive(thiserror::Error, Debug)]
pub enum TfeError {
    /// Invalid caller-provided construction or raster parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel addressing outside a raster's bounds.
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TfeError {
    /// Build a [`TfeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TfeError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
