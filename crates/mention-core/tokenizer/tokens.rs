//! Storage token kind tags and token construction
//!
//! The canonical storage syntax embeds a mention as `@{<tag>:<name>}` where
//! the tag selects the reference family. Tags are part of the persisted
//! format, so their spellings are stable for backward compatibility.

/// Kind tag of a storage token.
///
/// Maps one-to-one onto the persisted tag spellings:
///
/// | Tag     | Spelling | Reference family        |
/// |---------|----------|-------------------------|
/// | `Text`  | `text`   | textual variable        |
/// | `Input` | `input`  | media-typed variable    |
/// | `Ref`   | `ref`    | reference-media asset   |
/// | `Step`  | `step`   | pipeline step           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KindTag {
    /// Textual variable reference (`@{text:name}`)
    Text,
    /// Media-typed variable reference (`@{input:name}`)
    Input,
    /// Reference-media-registry asset (`@{ref:name}`)
    Ref,
    /// Pipeline-step reference (`@{step:name}`)
    Step,
}

impl KindTag {
    /// All tags in scanning order, useful for exhaustive tests
    pub const ALL: [Self; 4] = [Self::Text, Self::Input, Self::Ref, Self::Step];

    /// Persisted spelling of this tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Input => "input",
            Self::Ref => "ref",
            Self::Step => "step",
        }
    }

    /// Parse a tag spelling.
    ///
    /// Returns `None` for anything that is not one of the four stable tags;
    /// the scanner then treats the candidate token as literal text.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(Self::Text),
            "input" => Some(Self::Input),
            "ref" => Some(Self::Ref),
            "step" => Some(Self::Step),
            _ => None,
        }
    }
}

impl core::fmt::Display for KindTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the canonical storage token for a tag and name.
///
/// The caller is responsible for name sanitization: a name containing `}`
/// would terminate the token early on the next parse. Hosts strip `{`, `}`
/// and `:` from display names before they reach this crate.
///
/// # Example
///
/// ```
/// use mention_core::tokenizer::{format_token, KindTag};
///
/// assert_eq!(format_token(KindTag::Ref, "logo"), "@{ref:logo}");
/// ```
#[must_use]
pub fn format_token(tag: KindTag, name: &str) -> String {
    format!("@{{{}:{name}}}", tag.as_str())
}
