//! # mention-core
//!
//! Document model, token grammar, and reference validation for typed
//! "mentions" embedded in free-form rich text. A mention references a
//! generation variable, a reference-media asset, or a pipeline step, and the
//! crate keeps two representations loss-free in both directions:
//!
//! - an in-memory tree of blocks and inline nodes used for interactive
//!   editing, and
//! - a canonical flat storage string using the inline `@{kind:name}` token
//!   syntax.
//!
//! The third representation, atomic styled rendering of each mention, is the
//! host editor's job; this crate only supplies the data it renders from.
//!
//! ## Operations
//!
//! - [`serialize`]: tree to storage string; total and pure.
//! - [`parse`]: storage string plus per-kind resolvers to a fresh tree;
//!   total, unresolved names become invalid mentions rather than lost text.
//! - [`validate::validate`]: re-scan a live tree against the current
//!   reference sets, flipping only the flags that actually changed.
//!
//! Selection-aware operations (clipboard export, paste import) live in the
//! `mention-editor` crate on top of this one.
//!
//! ## Quick start
//!
//! ```
//! use mention_core::{parse, serialize, resolver::MapResolver, ast::VariableType};
//!
//! let resolver = MapResolver::new()
//!     .with_variable("subject", "v1", VariableType::Text)
//!     .with_media("logo", "a1");
//!
//! let doc = parse("Render @{text:subject} over @{ref:logo}", &resolver);
//! assert_eq!(doc.mentions().count(), 2);
//! assert_eq!(serialize(&doc), "Render @{text:subject} over @{ref:logo}");
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod ast;
pub mod parser;
pub mod resolver;
pub mod serializer;
pub mod tokenizer;
pub mod validate;

pub use ast::{Block, Document, InlineNode, Mention, MentionKind, TextRun, VariableType};
pub use parser::{parse, parse_inline};
pub use resolver::{MapResolver, ReferenceSet, ResolverSet};
pub use serializer::serialize;
pub use tokenizer::{contains_token, scan_text, KindTag, TokenMatch};
pub use validate::{invalid_mentions, validate};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
