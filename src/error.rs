use thiserror::Error;

/// Top-level error type for the stroke normalization core.
///
/// The geometry pipeline itself never fails: unusable strokes are dropped.
/// Errors only arise at the edges, when validating configuration or when
/// decoding a raw record from JSON.
#[derive(Debug, Error)]
pub enum StrokeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to canvas configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas height must be finite and positive, got {0}")]
    InvalidHeight(f64),
}

/// Errors related to decoding raw character records.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed character record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("character record must be a JSON object")]
    NotAnObject,
}

/// Convenience type alias for results using [`StrokeError`].
pub type Result<T> = std::result::Result<T, StrokeError>;
