//! Paste import of storage tokens from arbitrary plain text
//!
//! Pasted text may carry storage tokens (copied from another document,
//! another app, or typed by hand). When it does, the host suppresses its
//! default paste handling and splices real mention nodes in; when it does
//! not, the paste must stay an ordinary plain-text paste, untouched by this
//! crate. A paste augments the open document, it never resets it.

use mention_core::ast::{Block, Document, InlineNode};
use mention_core::resolver::ResolverSet;
use mention_core::{contains_token, parse_inline};

use crate::core::edit::splice_nodes;
use crate::core::position::DocumentPosition;

/// What a paste request turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    /// No token in the text; the host's default paste handling proceeds
    /// unmodified
    Deferred,
    /// Tokens found; nodes were spliced at the caret
    Imported {
        /// How many inline nodes were produced from the text
        nodes: usize,
    },
    /// Tokens found but the target was unusable; nodes were appended in a
    /// fresh block at the document end
    AppendedAtEnd {
        /// How many inline nodes were produced from the text
        nodes: usize,
    },
}

impl PasteOutcome {
    /// Whether the host must suppress its default paste handling
    #[must_use]
    pub const fn consumed(&self) -> bool {
        !matches!(self, Self::Deferred)
    }
}

/// Convert pasted text into inline nodes when it contains at least one
/// storage token.
///
/// Returns `None` for token-free text so ordinary paste stays on the host's
/// fast path; the pre-check is cheap and allocation-free. Line boundaries
/// in the text become [`InlineNode::LineBreak`] nodes, because splicing
/// must not create blocks.
#[must_use]
pub fn import_pasted_text<R: ResolverSet>(text: &str, resolvers: &R) -> Option<Vec<InlineNode>> {
    if !contains_token(text) {
        return None;
    }
    Some(parse_inline(text, resolvers))
}

/// Paste text into the document at a caret position.
///
/// Token-free text is [`PasteOutcome::Deferred`] and the document is left
/// untouched. With tokens present, the nodes are spliced at `target`; a
/// missing or out-of-bounds target falls back to appending the nodes at the
/// document end, wrapped in a fresh block. The fallback never fails and
/// never surfaces an error; a paste with recognizable tokens always lands
/// somewhere visible.
pub fn paste_into<R: ResolverSet>(
    doc: &mut Document,
    target: Option<DocumentPosition>,
    text: &str,
    resolvers: &R,
) -> PasteOutcome {
    let Some(nodes) = import_pasted_text(text, resolvers) else {
        return PasteOutcome::Deferred;
    };
    let count = nodes.len();

    if let Some(pos) = target {
        if splice_nodes(doc, pos, nodes.clone()).is_ok() {
            return PasteOutcome::Imported { nodes: count };
        }
    }

    doc.push_block(Block::from_nodes(nodes));
    PasteOutcome::AppendedAtEnd { nodes: count }
}
