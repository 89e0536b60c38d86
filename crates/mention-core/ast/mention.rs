//! Typed mention node and its kind families
//!
//! A mention is an atomic inline reference to a variable, a reference-media
//! asset, or a pipeline step. The node is immutable after construction with
//! one exception: the derived `is_invalid` flag, which only the validator in
//! this crate may flip. Renaming a referenced entity never rewrites existing
//! mentions; they go invalid instead and stay correctable in place.

use crate::tokenizer::{format_token, KindTag};

/// Sub-type of a variable mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableType {
    /// Plain text variable, persisted with the `text` tag
    Text,
    /// Media-typed variable, persisted with the `input` tag
    Media,
}

/// Reference family of a mention.
///
/// The three families share one structural contract and differ only in how
/// the host renders them and which reference collection validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MentionKind {
    /// Generation variable, textual or media-typed
    Variable(VariableType),
    /// Asset from the reference-media registry
    MediaAsset,
    /// Pipeline step, keyed by name only
    Step,
}

impl MentionKind {
    /// Storage tag this kind serializes with
    #[must_use]
    pub const fn tag(self) -> KindTag {
        match self {
            Self::Variable(VariableType::Text) => KindTag::Text,
            Self::Variable(VariableType::Media) => KindTag::Input,
            Self::MediaAsset => KindTag::Ref,
            Self::Step => KindTag::Step,
        }
    }

    /// Whether this kind is either variable family
    #[must_use]
    pub const fn is_variable(self) -> bool {
        matches!(self, Self::Variable(_))
    }
}

impl From<KindTag> for MentionKind {
    fn from(tag: KindTag) -> Self {
        match tag {
            KindTag::Text => Self::Variable(VariableType::Text),
            KindTag::Input => Self::Variable(VariableType::Media),
            KindTag::Ref => Self::MediaAsset,
            KindTag::Step => Self::Step,
        }
    }
}

impl core::fmt::Display for MentionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Variable(VariableType::Text) => "text variable",
            Self::Variable(VariableType::Media) => "media variable",
            Self::MediaAsset => "reference media",
            Self::Step => "step",
        };
        f.write_str(label)
    }
}

/// Atomic inline reference embedded in rich text.
///
/// Only `ref_name` is persisted in the storage format; `ref_id` pins the
/// referenced entity as it existed when the mention was created (absent for
/// step mentions and for mentions parsed against an unknown name), and
/// `is_invalid` is a derived cache the validator keeps current.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mention {
    kind: MentionKind,
    ref_id: Option<String>,
    ref_name: String,
    is_invalid: bool,
}

impl Mention {
    /// Create a resolved mention.
    #[must_use]
    pub fn new(kind: MentionKind, ref_id: Option<String>, ref_name: impl Into<String>) -> Self {
        Self {
            kind,
            ref_id,
            ref_name: ref_name.into(),
            is_invalid: false,
        }
    }

    /// Create a mention for a name the resolver could not find.
    ///
    /// The token is preserved rather than degraded to plain text, so the user
    /// can see and fix the broken reference in place.
    #[must_use]
    pub fn unresolved(kind: MentionKind, ref_name: impl Into<String>) -> Self {
        Self {
            kind,
            ref_id: None,
            ref_name: ref_name.into(),
            is_invalid: true,
        }
    }

    /// Reference family of this mention
    #[must_use]
    pub const fn kind(&self) -> MentionKind {
        self.kind
    }

    /// Entity id captured at creation time, if any
    #[must_use]
    pub fn ref_id(&self) -> Option<&str> {
        self.ref_id.as_deref()
    }

    /// Human-readable name; the only value the storage format persists
    #[must_use]
    pub fn ref_name(&self) -> &str {
        &self.ref_name
    }

    /// Whether the name is currently missing from the reference set
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.is_invalid
    }

    /// Validator-only flag update; all other fields are frozen.
    pub(crate) fn set_invalid(&mut self, invalid: bool) {
        self.is_invalid = invalid;
    }

    /// Text the host renders for this mention (`@` + name).
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("@{}", self.ref_name)
    }

    /// Canonical storage token for this mention.
    #[must_use]
    pub fn storage_token(&self) -> String {
        format_token(self.kind.tag(), &self.ref_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tag_mapping_round_trips() {
        for tag in KindTag::ALL {
            assert_eq!(MentionKind::from(tag).tag(), tag);
        }
    }

    #[test]
    fn resolved_mention_fields() {
        let m = Mention::new(
            MentionKind::Variable(VariableType::Text),
            Some("v1".into()),
            "subject",
        );
        assert_eq!(m.ref_id(), Some("v1"));
        assert_eq!(m.ref_name(), "subject");
        assert!(!m.is_invalid());
        assert!(m.kind().is_variable());
    }

    #[test]
    fn unresolved_mention_flagged() {
        let m = Mention::unresolved(MentionKind::MediaAsset, "ghost");
        assert!(m.is_invalid());
        assert_eq!(m.ref_id(), None);
        assert_eq!(m.ref_name(), "ghost");
    }

    #[test]
    fn display_and_storage_text() {
        let m = Mention::new(MentionKind::MediaAsset, Some("a9".into()), "logo");
        assert_eq!(m.display_text(), "@logo");
        assert_eq!(m.storage_token(), "@{ref:logo}");

        let step = Mention::new(MentionKind::Step, None, "Crop Image");
        assert_eq!(step.storage_token(), "@{step:Crop Image}");
    }
}
