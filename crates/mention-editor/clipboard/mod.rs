//! Copy/cut export of selections in storage syntax
//!
//! When a selection touches at least one mention, the host bypasses its
//! default clipboard handling and asks this module for the storage-syntax
//! rendition of the selection, so mention tokens survive round trips through
//! external clipboards. Plain-text selections are the host's business:
//! [`selection_contains_mention`] is the gate.
//!
//! Output is independent of drag direction (the selection is normalized
//! before anything looks at it), and a crossed block boundary emits exactly
//! one `\n`.

use mention_core::ast::{Document, InlineNode};

use crate::core::edit::{char_slice, check_position, delete_range};
use crate::core::errors::Result;
use crate::core::position::{DocumentPosition, Selection};

/// Whether the selection intersects at least one mention node.
///
/// The host checks this before overriding its default copy behavior; a
/// selection over plain text only should copy as plain text. Invalid
/// selections report `false` rather than erroring, because the host is only
/// probing.
#[must_use]
pub fn selection_contains_mention(doc: &Document, selection: &Selection) -> bool {
    let (start, end) = selection.normalized();
    if check_position(doc, start).is_err() || check_position(doc, end).is_err() {
        return false;
    }
    let mut found = false;
    visit_selected(doc, start, end, |_, node, from, to| {
        if from < to && matches!(node, InlineNode::Mention(_)) {
            found = true;
        }
    });
    found
}

/// Serialize the selected slice of the document into storage syntax.
///
/// Partially selected boundary text runs contribute only their selected
/// substring; an intersected mention contributes its whole token (mentions
/// are atomic, there is no partial mention); line breaks and crossed block
/// boundaries each contribute one `\n`.
///
/// # Errors
///
/// Fails only when a selection endpoint does not exist in the document.
pub fn export_selection(doc: &Document, selection: &Selection) -> Result<String> {
    let (start, end) = selection.normalized();
    check_position(doc, start)?;
    check_position(doc, end)?;

    let mut out = String::new();
    let mut current_block = start.block;
    visit_selected(doc, start, end, |block_index, node, from, to| {
        while current_block < block_index {
            // Exactly one separator per crossed block boundary, even when
            // the boundary blocks are only partially selected.
            out.push('\n');
            current_block += 1;
        }
        if from >= to {
            return;
        }
        match node {
            InlineNode::Text(run) => out.push_str(char_slice(run.content(), from, to)),
            InlineNode::LineBreak => out.push('\n'),
            InlineNode::Mention(mention) => out.push_str(&mention.storage_token()),
        }
    });
    // A fully crossed empty block still separates its neighbors.
    while current_block < end.block {
        out.push('\n');
        current_block += 1;
    }
    Ok(out)
}

/// Export the selection, then delete it from the document.
///
/// Export and mutation are two explicit steps, always in that order, so a
/// failed export leaves the document untouched.
///
/// # Errors
///
/// Same conditions as [`export_selection`].
pub fn cut_selection(doc: &mut Document, selection: &Selection) -> Result<String> {
    let (start, end) = selection.normalized();
    let exported = export_selection(doc, selection)?;
    delete_range(doc, start, end)?;
    Ok(exported)
}

/// Walk every node the normalized range intersects, in document order,
/// handing the callback the block index, the node, and its selected
/// sub-span in selection units. Callers decide what a block transition
/// emits.
fn visit_selected<F>(doc: &Document, start: DocumentPosition, end: DocumentPosition, mut f: F)
where
    F: FnMut(usize, &InlineNode, usize, usize),
{
    for block_index in start.block..=end.block.min(doc.blocks().len().saturating_sub(1)) {
        let block = &doc.blocks()[block_index];
        for (node_index, node) in block.nodes().iter().enumerate() {
            if block_index == start.block && node_index < start.node {
                continue;
            }
            if block_index == end.block && node_index > end.node {
                break;
            }
            let from = if block_index == start.block && node_index == start.node {
                start.offset
            } else {
                0
            };
            let to = if block_index == end.block && node_index == end.node {
                end.offset
            } else {
                node.len()
            };
            f(block_index, node, from, to);
        }
    }
}
