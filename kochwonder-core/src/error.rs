//! Error types shared by the generator and the viewport controller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KochError {
    /// Malformed base shape or generation request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Recursion depth {depth} exceeds the supported maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A newer generation request superseded this one.
    #[error("Generation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, KochError>;
