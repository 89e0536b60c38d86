//! Document tree for mention-bearing rich text
//!
//! A [`Document`] is an ordered list of [`Block`]s (paragraphs); each block
//! is an ordered list of [`InlineNode`]s. The node set is a closed tagged
//! union so every consumer matches exhaustively; there is no open subtype
//! dispatch anywhere in this crate.
//!
//! One block serializes to exactly one line of the storage format. A hard
//! [`InlineNode::LineBreak`] inside a block serializes to an embedded newline
//! that does not start a new block.

pub mod mention;

pub use mention::{Mention, MentionKind, VariableType};

/// Plain text run between or around mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRun {
    content: String,
}

impl TextRun {
    /// Create a run from any string-like content
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Create an empty run (caret landing spot after a trailing mention)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The run's text content
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in chars, the unit selection offsets are measured in
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the run holds no text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// One inline node of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InlineNode {
    /// Plain editable text
    Text(TextRun),
    /// Hard break within a block
    LineBreak,
    /// Atomic reference node
    Mention(Mention),
}

impl InlineNode {
    /// Convenience constructor for a text node
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextRun::new(content))
    }

    /// Selection length of this node in offset units.
    ///
    /// Text runs measure in chars; mentions and line breaks are atomic units
    /// of length 1 (offset 0 is before the node, 1 is after it).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(run) => run.len(),
            Self::LineBreak | Self::Mention(_) => 1,
        }
    }

    /// Whether this node contributes nothing to the serialized output
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(run) => run.is_empty(),
            Self::LineBreak | Self::Mention(_) => false,
        }
    }

    /// Borrow the mention if this node is one
    #[must_use]
    pub const fn as_mention(&self) -> Option<&Mention> {
        match self {
            Self::Mention(m) => Some(m),
            _ => None,
        }
    }
}

/// One paragraph of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    nodes: Vec<InlineNode>,
}

impl Block {
    /// Create an empty block
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a block from a node list
    #[must_use]
    pub fn from_nodes(nodes: Vec<InlineNode>) -> Self {
        Self { nodes }
    }

    /// The block's nodes in order
    #[must_use]
    pub fn nodes(&self) -> &[InlineNode] {
        &self.nodes
    }

    /// Mutable access for structural edits (splice, delete)
    pub fn nodes_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.nodes
    }

    /// Append a node
    pub fn push(&mut self, node: InlineNode) {
        self.nodes.push(node);
    }

    /// Whether the block holds no nodes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Ordered sequence of blocks; the whole editable document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create a document from a block list
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The document's blocks in order
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Mutable access for structural edits
    pub fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    /// Append a block at the document end
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Whether the document holds no blocks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All mentions in document order
    pub fn mentions(&self) -> impl Iterator<Item = &Mention> {
        self.blocks
            .iter()
            .flat_map(|block| block.nodes().iter())
            .filter_map(InlineNode::as_mention)
    }

    /// Mutable mention traversal in document order
    pub fn mentions_mut(&mut self) -> impl Iterator<Item = &mut Mention> {
        self.blocks
            .iter_mut()
            .flat_map(|block| block.nodes.iter_mut())
            .filter_map(|node| match node {
                InlineNode::Mention(m) => Some(m),
                _ => None,
            })
    }

    /// Display rendering of the document: mentions as `@name`, blocks and
    /// hard breaks as newlines. What the user reads, not what is stored.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for node in block.nodes() {
                match node {
                    InlineNode::Text(run) => out.push_str(run.content()),
                    InlineNode::LineBreak => out.push('\n'),
                    InlineNode::Mention(m) => out.push_str(&m.display_text()),
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document::from_blocks(vec![
            Block::from_nodes(vec![
                InlineNode::text("Hello "),
                InlineNode::Mention(Mention::new(
                    MentionKind::MediaAsset,
                    Some("a1".into()),
                    "logo",
                )),
                InlineNode::text("!"),
            ]),
            Block::from_nodes(vec![
                InlineNode::Mention(Mention::unresolved(MentionKind::Step, "ghost")),
                InlineNode::Text(TextRun::empty()),
            ]),
        ])
    }

    #[test]
    fn node_lengths() {
        assert_eq!(InlineNode::text("héllo").len(), 5);
        assert_eq!(InlineNode::LineBreak.len(), 1);
        assert_eq!(
            InlineNode::Mention(Mention::unresolved(MentionKind::Step, "s")).len(),
            1
        );
    }

    #[test]
    fn mention_iteration_order() {
        let doc = sample_document();
        let names: Vec<_> = doc.mentions().map(Mention::ref_name).collect();
        assert_eq!(names, ["logo", "ghost"]);
    }

    #[test]
    fn plain_text_rendering() {
        let doc = sample_document();
        assert_eq!(doc.plain_text(), "Hello @logo!\n@ghost");
    }

    #[test]
    fn empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.mentions().count(), 0);
        assert_eq!(doc.plain_text(), "");
    }
}
