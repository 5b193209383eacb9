use thiserror::Error;

/// Top-level error type for the plotgeo boundary kernel.
#[derive(Debug, Error)]
pub enum PlotGeoError {
    #[error("insufficient vertices: need at least {required}, got {actual}")]
    InsufficientVertices { required: usize, actual: usize },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`PlotGeoError`].
pub type Result<T> = std::result::Result<T, PlotGeoError>;
