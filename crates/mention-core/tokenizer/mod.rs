//! Mention token scanner
//!
//! Zero-copy lexical scan for `@{kind:name}` storage tokens inside a line of
//! text. The grammar is regular and total: scanning proceeds left to right,
//! matches never overlap, and anything that fails to match (a stray `@`, an
//! unterminated `{`, an unknown tag) simply stays literal text. No input can
//! make the scanner fail.
//!
//! # Example
//!
//! ```
//! use mention_core::tokenizer::{scan_text, KindTag};
//!
//! let matches = scan_text("Use @{text:subject} please");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].tag, KindTag::Text);
//! assert_eq!(matches[0].name, "subject");
//! ```

pub mod tokens;

pub use tokens::{format_token, KindTag};

/// Longest tag spelling the scanner will consume before giving up (`input`)
const MAX_TAG_LEN: usize = 5;

/// A single token match inside a scanned line.
///
/// Borrows the name from the source text; `start..end` is the byte span of
/// the whole token including the `@{` and `}` delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch<'a> {
    /// Which reference family the tag selects
    pub tag: KindTag,
    /// Raw name between `:` and `}`, unvalidated
    pub name: &'a str,
    /// Byte offset of the `@` in the source
    pub start: usize,
    /// Byte offset one past the closing `}`
    pub end: usize,
}

/// Scan text for all storage tokens, left to right, non-overlapping.
///
/// Names may contain any character except `}` and `\n`; block splitting
/// happens before scanning, so a token can never span lines and the scanner
/// enforces the same rule for flat text (paste pre-checks, clipboard data).
#[must_use]
pub fn scan_text(text: &str) -> Vec<TokenMatch<'_>> {
    let mut matches = Vec::new();
    let mut from = 0;
    while let Some(m) = next_token(text, from) {
        from = m.end;
        matches.push(m);
    }
    matches
}

/// Cheap pre-check used by the paste path: does `text` contain at least one
/// well-formed storage token?
#[must_use]
pub fn contains_token(text: &str) -> bool {
    next_token(text, 0).is_some()
}

/// Find the first token at or after byte offset `from`.
fn next_token(text: &str, from: usize) -> Option<TokenMatch<'_>> {
    let mut at = from;
    while let Some(rel) = text[at..].find('@') {
        let start = at + rel;
        if let Some(m) = match_token_at(text, start) {
            return Some(m);
        }
        // Not a token here; resume after this '@'.
        at = start + 1;
    }
    None
}

/// Try to match one complete token whose `@` sits at byte offset `start`.
fn match_token_at(text: &str, start: usize) -> Option<TokenMatch<'_>> {
    let rest = &text[start..];
    let body = rest.strip_prefix("@{")?;

    let colon = body.find(':')?;
    if colon > MAX_TAG_LEN {
        return None;
    }
    let tag = KindTag::from_tag(&body[..colon])?;

    let name_body = &body[colon + 1..];
    let close = name_body.find('}')?;
    let name = &name_body[..close];
    if name.contains('\n') {
        return None;
    }

    // '@' + '{' + tag + ':' + name + '}'
    let end = start + 2 + colon + 1 + close + 1;
    Some(TokenMatch {
        tag,
        name,
        start,
        end,
    })
}
