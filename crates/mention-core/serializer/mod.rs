//! Tree-to-storage serializer
//!
//! Emits the canonical flat storage string for a document. Total and pure:
//! every well-formed document has exactly one serialization and nothing here
//! can fail. Text runs emit verbatim, hard breaks emit embedded newlines,
//! mentions emit their storage token, blocks join with `\n`, and one
//! trailing newline is trimmed from the final result.

use crate::ast::{Document, InlineNode};

/// Serialize a document into its canonical storage string.
///
/// # Example
///
/// ```
/// use mention_core::{serialize, ast::{Block, Document, InlineNode, Mention, MentionKind}};
///
/// let doc = Document::from_blocks(vec![Block::from_nodes(vec![
///     InlineNode::text("Hello "),
///     InlineNode::Mention(Mention::new(MentionKind::MediaAsset, Some("a1".into()), "logo")),
///     InlineNode::text("!"),
/// ])]);
/// assert_eq!(serialize(&doc), "Hello @{ref:logo}!");
/// ```
#[must_use]
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();
    for (i, block) in document.blocks().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for node in block.nodes() {
            match node {
                InlineNode::Text(run) => out.push_str(run.content()),
                InlineNode::LineBreak => out.push('\n'),
                InlineNode::Mention(mention) => out.push_str(&mention.storage_token()),
            }
        }
    }
    if out.ends_with('\n') {
        out.pop();
    }
    out
}
