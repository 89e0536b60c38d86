//! Tree positions and selections
//!
//! A position addresses one point in the document tree as
//! (block index, node index, offset). Offsets are measured in selection
//! units: chars inside a text run, and a single unit for the atomic nodes
//! (mention, line break) where 0 is before the node and 1 after it. A caret
//! can therefore never land strictly inside a mention.
//!
//! Selections keep their anchor/focus orientation (the host reports drags in
//! either direction) and normalize on demand; every consumer in this crate
//! works on the normalized range, which is what makes forward and backward
//! drags indistinguishable in output.

use core::fmt;

/// A point in the document tree.
///
/// Ordering is lexicographic over (block, node, offset), which matches
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentPosition {
    /// Block index in the document
    pub block: usize,
    /// Node index within the block
    pub node: usize,
    /// Offset within the node, in selection units
    pub offset: usize,
}

impl DocumentPosition {
    /// Create a position from its three coordinates
    #[must_use]
    pub const fn new(block: usize, node: usize, offset: usize) -> Self {
        Self {
            block,
            node,
            offset,
        }
    }

    /// Position at the very start of a document
    #[must_use]
    pub const fn start() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for DocumentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.block, self.node, self.offset)
    }
}

/// A directed selection between an anchor and a focus.
///
/// The anchor is where the drag started, the focus where it currently ends;
/// a backward drag has `focus < anchor`. Use [`Selection::normalized`] for
/// the direction-independent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started
    pub anchor: DocumentPosition,
    /// Where the selection currently ends
    pub focus: DocumentPosition,
}

impl Selection {
    /// Create a selection from anchor and focus
    #[must_use]
    pub const fn new(anchor: DocumentPosition, focus: DocumentPosition) -> Self {
        Self { anchor, focus }
    }

    /// Create a collapsed selection (a caret) at one position
    #[must_use]
    pub const fn caret(position: DocumentPosition) -> Self {
        Self {
            anchor: position,
            focus: position,
        }
    }

    /// Whether the selection is collapsed to a caret
    #[must_use]
    pub fn is_caret(&self) -> bool {
        self.anchor == self.focus
    }

    /// Whether the focus sits at or after the anchor
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.anchor <= self.focus
    }

    /// Direction-independent (start, end) pair
    #[must_use]
    pub fn normalized(&self) -> (DocumentPosition, DocumentPosition) {
        if self.is_forward() {
            (self.anchor, self.focus)
        } else {
            (self.focus, self.anchor)
        }
    }

    /// The same range with anchor and focus swapped
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            anchor: self.focus,
            focus: self.anchor,
        }
    }
}
