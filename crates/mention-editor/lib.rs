//! # mention-editor
//!
//! Selection-aware transforms for mention-bearing rich text, built on
//! `mention-core`. The host editor owns rendering, caret placement, and
//! keyboard handling; this crate supplies the behavior that has to be exact
//! at node boundaries:
//!
//! - **Copy/cut export**: serialize any (possibly partial) selection back
//!   into storage syntax, so mention tokens survive external clipboards.
//!   Forward and backward drags produce identical output.
//! - **Paste import**: detect storage tokens in arbitrary pasted text and
//!   splice resolved mention nodes at the caret, falling back to a fresh
//!   block at the document end when the target is unusable.
//! - **Tree surgery**: the shared range-delete and caret-splice edits,
//!   with mentions kept atomic throughout.
//!
//! Everything runs synchronously inside one host update transaction; there
//! is no interior state and no concurrency below the host's debounce
//! boundary.
//!
//! # Example
//!
//! ```
//! use mention_core::resolver::MapResolver;
//! use mention_editor::{paste_into, DocumentPosition};
//!
//! let resolver = MapResolver::new().with_media("logo", "a1");
//! let mut doc = mention_core::parse("Hello world", &resolver);
//!
//! let outcome = paste_into(
//!     &mut doc,
//!     Some(DocumentPosition::new(0, 0, 6)),
//!     "@{ref:logo} ",
//!     &resolver,
//! );
//! assert!(outcome.consumed());
//! assert_eq!(mention_core::serialize(&doc), "Hello @{ref:logo} world");
//! ```

#![deny(unsafe_code)]

pub mod clipboard;
pub mod core;
pub mod paste;

// Re-export mention-core types as first-class citizens.
pub use mention_core::ast::{Block, Document, InlineNode, Mention, MentionKind, TextRun};
pub use mention_core::resolver::{MapResolver, ReferenceSet, ResolverSet};

pub use clipboard::{cut_selection, export_selection, selection_contains_mention};
pub use core::{
    check_position, delete_range, is_valid_position, splice_nodes, DocumentPosition, EditorError,
    Result, Selection,
};
pub use paste::{import_pasted_text, paste_into, PasteOutcome};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
