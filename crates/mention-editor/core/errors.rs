//! Error types for selection-aware editor operations
//!
//! Follows the core crate's philosophy: the five mention operations are
//! total over their documented domains, so the only failures here are
//! addressing errors: a selection endpoint that does not exist in the tree
//! it is applied to. Structured variants via thiserror, no stringly-typed
//! errors.

use thiserror::Error;

use crate::core::position::DocumentPosition;

/// Errors from selection-aware operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The position's block or node index does not exist in the document
    #[error("position out of bounds: {position}")]
    PositionOutOfBounds {
        /// The offending position
        position: DocumentPosition,
    },

    /// The position addresses an existing node but past its length
    #[error("offset {offset} exceeds node length {length} at {position}")]
    OffsetOutOfBounds {
        /// The offending position
        position: DocumentPosition,
        /// Requested offset in selection units
        offset: usize,
        /// The node's actual length
        length: usize,
    },
}

/// Result type alias for editor operations
pub type Result<T> = core::result::Result<T, EditorError>;
