//! Mention re-validation against the current reference sets
//!
//! The host calls [`validate`] whenever its variable/media/step collections
//! change (debounced at the call site; the pass itself is safe to run at any
//! time on any document). Validation is the only code path that touches the
//! `is_invalid` flag, and it writes the flag only when the value actually
//! changes, so an unchanged reference set never mutates the document and the
//! host never sees redundant re-renders.

use crate::ast::{Document, Mention};
use crate::resolver::ReferenceSet;

/// Recompute every mention's `is_invalid` flag against `refs`.
///
/// Visits mentions in document order and returns how many flags changed.
/// Idempotent: a second pass with the same reference set returns 0 and
/// leaves the document untouched. Node ordering, counts, and every other
/// field are preserved.
///
/// # Example
///
/// ```
/// use mention_core::{parse, validate::validate, resolver::{MapResolver, ReferenceSet}};
///
/// let mut doc = parse("@{ref:logo}", &MapResolver::new());
/// assert!(doc.mentions().next().unwrap().is_invalid());
///
/// let refs = ReferenceSet::new().with_media(["logo"]);
/// assert_eq!(validate(&mut doc, &refs), 1);
/// assert!(!doc.mentions().next().unwrap().is_invalid());
/// assert_eq!(validate(&mut doc, &refs), 0);
/// ```
pub fn validate(document: &mut Document, refs: &ReferenceSet) -> usize {
    let mut changed = 0;
    for mention in document.mentions_mut() {
        let should_be_invalid = !refs.contains(mention.kind(), mention.ref_name());
        if should_be_invalid != mention.is_invalid() {
            mention.set_invalid(should_be_invalid);
            changed += 1;
        }
    }
    changed
}

/// Mentions currently flagged invalid, in document order.
///
/// Convenience for hosts that surface a broken-reference list next to the
/// editor.
pub fn invalid_mentions(document: &Document) -> impl Iterator<Item = &Mention> {
    document.mentions().filter(|mention| mention.is_invalid())
}
