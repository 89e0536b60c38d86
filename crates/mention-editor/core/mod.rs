//! Core editor types: positions, selections, errors, and tree surgery
//!
//! Everything selection-aware builds on these. The document tree itself
//! lives in `mention-core`; this module adds the addressing scheme over it
//! and the two structural edits (range delete, caret splice) that the
//! clipboard and paste paths share.

pub mod edit;
pub mod errors;
pub mod position;

pub use edit::{check_position, delete_range, is_valid_position, splice_nodes};
pub use errors::{EditorError, Result};
pub use position::{DocumentPosition, Selection};
