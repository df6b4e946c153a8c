use thiserror::Error;

/// Reasons the cursor overlay could not get something to draw on.
#[derive(Debug, Error, PartialEq)]
pub enum TrailError {
    #[error("canvas element is not mounted")]
    CanvasMissing,
    #[error("2d context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("canvas returned a context that is not a 2d rendering context")]
    ContextType,
}
