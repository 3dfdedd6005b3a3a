//! Convenience result type alias for Mottu Vision.

use crate::error::AppError;

/// A specialized `Result` type for Mottu Vision operations.
pub type AppResult<T> = Result<T, AppError>;
