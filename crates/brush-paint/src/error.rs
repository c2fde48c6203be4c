//! Error types for brush-paint.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaintError {
    #[error("brush weight count {got} does not match {width}x{height}")]
    WeightCountMismatch { width: usize, height: usize, got: usize },

    #[error("source texel count {got} does not match {width}x{height}")]
    TexelCountMismatch { width: usize, height: usize, got: usize },

    #[error("texture dimensions must be positive, got {0}x{1}")]
    ZeroDimension(usize, usize),
}

pub type PaintResult<T> = Result<T, PaintError>;
