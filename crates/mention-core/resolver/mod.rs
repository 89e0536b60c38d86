//! Reference resolution and lookup sets
//!
//! The host owns the collections of variables, reference media, and pipeline
//! steps. This module defines the two contracts the core consumes:
//!
//! - [`ResolverSet`]: per-kind name lookups used while parsing, returning
//!   the entity behind a name so the parser can pin its id.
//! - [`ReferenceSet`]: flat name sets used by the validator, rebuilt from
//!   the host's current collections on every validation pass.
//!
//! [`MapResolver`] is a concrete map-backed implementation of both, used by
//! hosts with in-memory collections and throughout the test suite.

use ahash::{AHashMap, AHashSet};

use crate::ast::{MentionKind, VariableType};

/// Variable entity behind a resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableEntry {
    /// Stable entity id
    pub id: String,
    /// Declared variable sub-type; informational, the storage tag wins when
    /// they disagree
    pub variable_type: VariableType,
}

/// Reference-media asset behind a resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaEntry {
    /// Stable entity id
    pub id: String,
}

/// Pipeline step behind a resolved name.
///
/// Step mentions key by name only; the id is available to hosts but is never
/// stored on a step mention.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepEntry {
    /// Stable entity id
    pub id: String,
}

/// Per-kind name lookup supplied by the host to the parser and paste
/// importer.
pub trait ResolverSet {
    /// Look up a generation variable by display name
    fn variable(&self, name: &str) -> Option<VariableEntry>;

    /// Look up a reference-media asset by display name
    fn media(&self, name: &str) -> Option<MediaEntry>;

    /// Look up a pipeline step by display name
    fn step(&self, name: &str) -> Option<StepEntry>;
}

/// Map-backed [`ResolverSet`] for in-memory collections.
///
/// ```
/// use mention_core::resolver::{MapResolver, ResolverSet};
/// use mention_core::ast::VariableType;
///
/// let resolver = MapResolver::new()
///     .with_variable("subject", "v1", VariableType::Text)
///     .with_media("logo", "a1");
///
/// assert!(resolver.variable("subject").is_some());
/// assert!(resolver.step("subject").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    variables: AHashMap<String, VariableEntry>,
    media: AHashMap<String, MediaEntry>,
    steps: AHashMap<String, StepEntry>,
}

impl MapResolver {
    /// Create an empty resolver (every lookup misses)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style
    #[must_use]
    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        id: impl Into<String>,
        variable_type: VariableType,
    ) -> Self {
        self.variables.insert(
            name.into(),
            VariableEntry {
                id: id.into(),
                variable_type,
            },
        );
        self
    }

    /// Add a reference-media asset, builder style
    #[must_use]
    pub fn with_media(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.media.insert(name.into(), MediaEntry { id: id.into() });
        self
    }

    /// Add a pipeline step, builder style
    #[must_use]
    pub fn with_step(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.steps.insert(name.into(), StepEntry { id: id.into() });
        self
    }

    /// Snapshot the current names as a validator lookup set
    #[must_use]
    pub fn reference_set(&self) -> ReferenceSet {
        ReferenceSet {
            variables: self.variables.keys().cloned().collect(),
            media: self.media.keys().cloned().collect(),
            steps: self.steps.keys().cloned().collect(),
        }
    }
}

impl ResolverSet for MapResolver {
    fn variable(&self, name: &str) -> Option<VariableEntry> {
        self.variables.get(name).cloned()
    }

    fn media(&self, name: &str) -> Option<MediaEntry> {
        self.media.get(name).cloned()
    }

    fn step(&self, name: &str) -> Option<StepEntry> {
        self.steps.get(name).cloned()
    }
}

/// Current reference names, one O(1) lookup set per kind.
///
/// Rebuilt (or snapshotted) by the host whenever its collections change,
/// then handed to [`crate::validate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    variables: AHashSet<String>,
    media: AHashSet<String>,
    steps: AHashSet<String>,
}

impl ReferenceSet {
    /// Create an empty set (every mention validates as invalid)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from name iterators, one per kind
    #[must_use]
    pub fn from_names<V, M, S>(variables: V, media: M, steps: S) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            variables: variables.into_iter().map(Into::into).collect(),
            media: media.into_iter().map(Into::into).collect(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Add variable names, builder style
    #[must_use]
    pub fn with_variables<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.variables.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add reference-media names, builder style
    #[must_use]
    pub fn with_media<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.media.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add step names, builder style
    #[must_use]
    pub fn with_steps<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.steps.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether `name` exists in the collection that validates `kind`.
    ///
    /// Both variable families check the same variable collection; the
    /// sub-type does not narrow the lookup.
    #[must_use]
    pub fn contains(&self, kind: MentionKind, name: &str) -> bool {
        match kind {
            MentionKind::Variable(_) => self.variables.contains(name),
            MentionKind::MediaAsset => self.media.contains(name),
            MentionKind::Step => self.steps.contains(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_resolver_lookups() {
        let resolver = MapResolver::new()
            .with_variable("subject", "v1", VariableType::Text)
            .with_media("logo", "a1")
            .with_step("Crop", "s1");

        assert_eq!(resolver.variable("subject").unwrap().id, "v1");
        assert_eq!(resolver.media("logo").unwrap().id, "a1");
        assert_eq!(resolver.step("Crop").unwrap().id, "s1");

        // Kinds never cross-resolve.
        assert!(resolver.media("subject").is_none());
        assert!(resolver.variable("logo").is_none());
    }

    #[test]
    fn reference_set_per_kind_lookup() {
        let refs = ReferenceSet::from_names(["subject"], ["logo"], ["Crop"]);

        assert!(refs.contains(MentionKind::Variable(VariableType::Text), "subject"));
        assert!(refs.contains(MentionKind::Variable(VariableType::Media), "subject"));
        assert!(refs.contains(MentionKind::MediaAsset, "logo"));
        assert!(refs.contains(MentionKind::Step, "Crop"));

        assert!(!refs.contains(MentionKind::MediaAsset, "subject"));
        assert!(!refs.contains(MentionKind::Step, "logo"));
    }

    #[test]
    fn snapshot_matches_resolver() {
        let resolver = MapResolver::new()
            .with_variable("a", "v1", VariableType::Media)
            .with_step("b", "s1");
        let refs = resolver.reference_set();

        assert!(refs.contains(MentionKind::Variable(VariableType::Text), "a"));
        assert!(refs.contains(MentionKind::Step, "b"));
        assert!(!refs.contains(MentionKind::MediaAsset, "a"));
    }
}
