use ggez::GameError;
use thiserror::Error;

/// Parameter combinations rejected at construction time, before any draw
/// command can be emitted for the malformed curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// The rolling circle must be non-empty and fit inside the fixed circle.
    #[error("invalid geometry: inner radius {inner} must lie in 1..={outer}")]
    InvalidGeometry { inner: u32, outer: u32 },
    /// The pen offset is normalized to the rolling circle's radius.
    #[error("invalid hole ratio {0}: must lie in (0, 1]")]
    InvalidRatio(f32),
}

impl From<ParamError> for GameError {
    fn from(err: ParamError) -> Self {
        GameError::CustomError(err.to_string())
    }
}
