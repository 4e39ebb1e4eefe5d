use thiserror::Error;

/// Rejected construction arguments. Insertion and queries never fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("max_objects must be greater than zero (max_objects: {max_objects})")]
    InvalidMaxObjects { max_objects: usize },

    #[error(
        "rectangle width/height must be finite and non-negative (width: {width}, height: {height})"
    )]
    InvalidRectangleDims { width: f32, height: f32 },

    #[error("rectangle origin must be finite (x: {x}, y: {y})")]
    InvalidRectangleOrigin { x: f32, y: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
