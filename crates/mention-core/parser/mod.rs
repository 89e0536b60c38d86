//! Storage-to-tree deserializer
//!
//! Rebuilds a [`Document`] from the canonical flat storage string. The parse
//! is total: any input produces a well-formed tree, unresolved names become
//! invalid mentions (never dropped, never degraded to text), and malformed
//! tokens stay literal. Parsing is a whole-document reset, not a merge.
//!
//! For any text already in grammar form the round trip holds:
//! `serialize(&parse(text, r)) == text`.
//!
//! # Example
//!
//! ```
//! use mention_core::{parse, resolver::MapResolver, ast::VariableType};
//!
//! let resolver = MapResolver::new().with_variable("subject", "v1", VariableType::Text);
//! let doc = parse("Use @{text:subject} please", &resolver);
//!
//! let block = &doc.blocks()[0];
//! assert_eq!(block.nodes().len(), 3);
//! assert_eq!(block.nodes()[1].as_mention().unwrap().ref_id(), Some("v1"));
//! ```

use crate::ast::{Block, Document, InlineNode, Mention, MentionKind, TextRun};
use crate::resolver::ResolverSet;
use crate::tokenizer::{scan_text, KindTag};

/// Deserialize a storage string into a fresh document.
///
/// Splits on `\n` into blocks, scans each line for tokens, and resolves each
/// token name through the matching per-kind lookup. Every block ends in a
/// text run (empty when the line ends on a mention or is itself empty) so
/// the host editor always has a caret landing spot.
pub fn parse<R: ResolverSet>(text: &str, resolvers: &R) -> Document {
    let blocks = text
        .split('\n')
        .map(|line| parse_line(line, resolvers))
        .collect();
    Document::from_blocks(blocks)
}

/// Deserialize flat text into a node list for splicing at a caret.
///
/// Shares the scan-and-resolve path with [`parse`] but keeps the result
/// flat: line boundaries become [`InlineNode::LineBreak`] nodes instead of
/// new blocks, because a paste augments the surrounding block structure
/// rather than resetting it. Gap runs are only emitted when non-empty.
pub fn parse_inline<R: ResolverSet>(text: &str, resolvers: &R) -> Vec<InlineNode> {
    let mut nodes = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(InlineNode::LineBreak);
        }
        let mut cursor = 0;
        for m in scan_text(line) {
            if m.start > cursor {
                nodes.push(InlineNode::text(&line[cursor..m.start]));
            }
            nodes.push(InlineNode::Mention(resolve_mention(m.tag, m.name, resolvers)));
            cursor = m.end;
        }
        if cursor < line.len() {
            nodes.push(InlineNode::text(&line[cursor..]));
        }
    }
    nodes
}

fn parse_line<R: ResolverSet>(line: &str, resolvers: &R) -> Block {
    let mut block = Block::new();
    let mut cursor = 0;
    for m in scan_text(line) {
        if m.start > cursor {
            block.push(InlineNode::text(&line[cursor..m.start]));
        }
        block.push(InlineNode::Mention(resolve_mention(m.tag, m.name, resolvers)));
        cursor = m.end;
    }
    if cursor < line.len() {
        block.push(InlineNode::text(&line[cursor..]));
    } else {
        // Caret landing spot when the line ends on a mention or is empty.
        block.push(InlineNode::Text(TextRun::empty()));
    }
    block
}

/// Resolve one scanned token into a mention node.
///
/// The storage tag decides the kind; the resolver only supplies existence
/// and the pinned entity id. Step mentions never carry an id even when the
/// step resolves.
fn resolve_mention<R: ResolverSet>(tag: KindTag, name: &str, resolvers: &R) -> Mention {
    let kind = MentionKind::from(tag);
    // Outer Option is existence, inner is the pinned id.
    let resolved = match tag {
        KindTag::Text | KindTag::Input => resolvers.variable(name).map(|entry| Some(entry.id)),
        KindTag::Ref => resolvers.media(name).map(|entry| Some(entry.id)),
        KindTag::Step => resolvers.step(name).map(|_| None),
    };
    match resolved {
        Some(id) => Mention::new(kind, id, name),
        None => Mention::unresolved(kind, name),
    }
}
