//! Structural edits on the document tree
//!
//! Position validation plus the two tree-surgery operations the clipboard
//! and paste paths share: deleting a normalized range and splicing a node
//! list at a caret. Both rebuild the affected block(s) from kept parts,
//! merging adjacent text runs at the seams, and both keep a block from ever
//! ending up with zero nodes.
//!
//! Mentions are atomic throughout: a boundary can sit before (offset 0) or
//! after (offset 1) a mention, never inside one, so surgery either keeps or
//! drops a mention whole.

use mention_core::ast::{Document, InlineNode, TextRun};

use crate::core::errors::{EditorError, Result};
use crate::core::position::DocumentPosition;

/// Validate that `pos` addresses a real point in `doc`.
///
/// An empty block accepts exactly the position `(block, 0, 0)`; otherwise
/// the node index must exist and the offset must not exceed the node's
/// length in selection units.
///
/// # Errors
///
/// [`EditorError::PositionOutOfBounds`] for a missing block or node,
/// [`EditorError::OffsetOutOfBounds`] for an offset past the node's length.
pub fn check_position(doc: &Document, pos: DocumentPosition) -> Result<()> {
    let Some(block) = doc.blocks().get(pos.block) else {
        return Err(EditorError::PositionOutOfBounds { position: pos });
    };
    if block.is_empty() {
        if pos.node == 0 && pos.offset == 0 {
            return Ok(());
        }
        return Err(EditorError::PositionOutOfBounds { position: pos });
    }
    let Some(node) = block.nodes().get(pos.node) else {
        return Err(EditorError::PositionOutOfBounds { position: pos });
    };
    if pos.offset > node.len() {
        return Err(EditorError::OffsetOutOfBounds {
            position: pos,
            offset: pos.offset,
            length: node.len(),
        });
    }
    Ok(())
}

/// Whether `pos` addresses a real point in `doc`
#[must_use]
pub fn is_valid_position(doc: &Document, pos: DocumentPosition) -> bool {
    check_position(doc, pos).is_ok()
}

/// Delete everything between two positions, merging the boundary blocks
/// when the range crosses block boundaries.
///
/// The positions are normalized internally, so argument order does not
/// matter. A collapsed range is a no-op.
///
/// # Errors
///
/// Propagates position validation failures; the document is untouched on
/// error.
pub fn delete_range(
    doc: &mut Document,
    a: DocumentPosition,
    b: DocumentPosition,
) -> Result<()> {
    check_position(doc, a)?;
    check_position(doc, b)?;
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    if start == end {
        return Ok(());
    }

    if start.block == end.block {
        let block = &mut doc.blocks_mut()[start.block];
        let mut parts = kept_head(block.nodes(), start);
        parts.extend(kept_tail(block.nodes(), end));
        *block.nodes_mut() = rebuild(parts);
    } else {
        let blocks = doc.blocks_mut();
        let tail = kept_tail(blocks[end.block].nodes(), end);
        let mut parts = kept_head(blocks[start.block].nodes(), start);
        parts.extend(tail);
        *blocks[start.block].nodes_mut() = rebuild(parts);
        blocks.drain(start.block + 1..=end.block);
    }
    Ok(())
}

/// Splice a node list into the document at a caret position.
///
/// Splits a text run when the caret sits inside one; inserts before or
/// after an atomic node depending on which side of it the caret sits.
///
/// # Errors
///
/// Propagates position validation failures; the document is untouched on
/// error.
pub fn splice_nodes(
    doc: &mut Document,
    pos: DocumentPosition,
    nodes: Vec<InlineNode>,
) -> Result<()> {
    check_position(doc, pos)?;
    if nodes.is_empty() {
        return Ok(());
    }

    let block = &mut doc.blocks_mut()[pos.block];
    if block.is_empty() {
        *block.nodes_mut() = rebuild(nodes);
        return Ok(());
    }

    let mut parts = kept_head(block.nodes(), pos);
    parts.extend(nodes);
    parts.extend(kept_tail(block.nodes(), pos));
    *block.nodes_mut() = rebuild(parts);
    Ok(())
}

/// Everything strictly before `pos` within one block's node list.
fn kept_head(nodes: &[InlineNode], pos: DocumentPosition) -> Vec<InlineNode> {
    let mut kept = nodes[..pos.node.min(nodes.len())].to_vec();
    if let Some(node) = nodes.get(pos.node) {
        match node {
            InlineNode::Text(run) => {
                let head = char_slice(run.content(), 0, pos.offset);
                if !head.is_empty() {
                    kept.push(InlineNode::text(head));
                }
            }
            atomic => {
                if pos.offset >= 1 {
                    kept.push(atomic.clone());
                }
            }
        }
    }
    kept
}

/// Everything at or after `pos` within one block's node list.
fn kept_tail(nodes: &[InlineNode], pos: DocumentPosition) -> Vec<InlineNode> {
    let mut kept = Vec::new();
    if let Some(node) = nodes.get(pos.node) {
        match node {
            InlineNode::Text(run) => {
                let tail = char_slice(run.content(), pos.offset, run.len());
                if !tail.is_empty() {
                    kept.push(InlineNode::text(tail));
                }
            }
            atomic => {
                if pos.offset == 0 {
                    kept.push(atomic.clone());
                }
            }
        }
        kept.extend_from_slice(&nodes[pos.node + 1..]);
    }
    kept
}

/// Fold parts into a block node list, merging adjacent text runs and never
/// leaving the block empty.
fn rebuild(parts: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut nodes: Vec<InlineNode> = Vec::with_capacity(parts.len());
    for part in parts {
        match (nodes.last_mut(), &part) {
            (Some(InlineNode::Text(last)), InlineNode::Text(run)) => {
                *last = TextRun::new(format!("{}{}", last.content(), run.content()));
            }
            _ => nodes.push(part),
        }
    }
    if nodes.is_empty() {
        nodes.push(InlineNode::Text(TextRun::empty()));
    }
    nodes
}

/// Slice a string by char offsets, clamped to the string's end.
pub(crate) fn char_slice(s: &str, from: usize, to: usize) -> &str {
    if from >= to {
        return "";
    }
    let start = byte_index(s, from);
    let end = byte_index(s, to);
    &s[start..end]
}

fn byte_index(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map_or(s.len(), |(index, _)| index)
}
