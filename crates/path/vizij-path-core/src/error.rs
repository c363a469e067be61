//! Error types for path editing and configuration.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PathError {
    /// Vertex write past the end of the path
    #[error("Vertex index {index} out of bounds for path with {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Rejected configuration
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
