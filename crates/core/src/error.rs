//! Error types for the cube model.

/// Errors raised by slot-addressed cube operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    #[error("invalid slot {0} (expected 0..=7)")]
    InvalidSlot(usize),

    #[error("no cube at index {index} ({count} cubes)")]
    InvalidCube { index: usize, count: usize },
}
