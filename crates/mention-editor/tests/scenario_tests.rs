//! End-to-end scenarios across both crates: parse, serialize, validate,
//! paste, and clipboard behavior as a host editor would drive them.

use mention_core::ast::{Block, Document, InlineNode, Mention, MentionKind, VariableType};
use mention_core::resolver::{MapResolver, ReferenceSet};
use mention_core::{parse, serialize, validate};
use mention_editor::{
    cut_selection, export_selection, paste_into, selection_contains_mention, DocumentPosition,
    PasteOutcome, Selection,
};
use pretty_assertions::assert_eq;

#[test]
fn serialize_text_mention_text_block() {
    let doc = Document::from_blocks(vec![Block::from_nodes(vec![
        InlineNode::text("Hello "),
        InlineNode::Mention(Mention::new(
            MentionKind::MediaAsset,
            Some("a1".into()),
            "logo",
        )),
        InlineNode::text("!"),
    ])]);
    assert_eq!(serialize(&doc), "Hello @{ref:logo}!");
}

#[test]
fn deserialize_resolved_variable() {
    let resolver = MapResolver::new().with_variable("subject", "v1", VariableType::Text);
    let doc = parse("Use @{text:subject} please", &resolver);

    let nodes = doc.blocks()[0].nodes();
    assert_eq!(nodes[0], InlineNode::text("Use "));
    let mention = nodes[1].as_mention().unwrap();
    assert_eq!(
        mention.kind(),
        MentionKind::Variable(VariableType::Text)
    );
    assert_eq!(mention.ref_id(), Some("v1"));
    assert!(!mention.is_invalid());
    assert_eq!(nodes[2], InlineNode::text(" please"));
}

#[test]
fn deserialize_unresolvable_step() {
    let doc = parse("@{step:Missing Step}", &MapResolver::new());
    let mention = doc.mentions().next().unwrap();
    assert!(mention.is_invalid());
    assert_eq!(mention.ref_name(), "Missing Step");
}

#[test]
fn second_validation_pass_mutates_nothing() {
    let resolver = MapResolver::new().with_media("logo", "a1");
    let mut doc = parse("@{ref:logo} and @{ref:ghost}", &resolver);

    let refs = resolver.reference_set();
    validate(&mut doc, &refs);
    let snapshot = doc.clone();
    assert_eq!(validate(&mut doc, &refs), 0);
    assert_eq!(doc, snapshot);
}

#[test]
fn paste_with_partially_resolvable_tokens() {
    let resolver = MapResolver::new().with_media("bg", "a1");
    let mut doc = parse("start ", &resolver);

    let outcome = paste_into(
        &mut doc,
        Some(DocumentPosition::new(0, 0, 6)),
        "see @{ref:bg} and @{ref:unknownAsset}",
        &resolver,
    );
    assert_eq!(outcome, PasteOutcome::Imported { nodes: 4 });

    let mentions: Vec<_> = doc.mentions().collect();
    assert_eq!(mentions.len(), 2);
    assert!(!mentions[0].is_invalid());
    assert!(mentions[1].is_invalid());
    assert_eq!(mentions[1].ref_name(), "unknownAsset");
    assert_eq!(
        serialize(&doc),
        "start see @{ref:bg} and @{ref:unknownAsset}"
    );
}

#[test]
fn rename_asymmetry_between_steps_and_variables() {
    // A renamed variable goes invalid; a renamed step silently reattaches
    // when another step takes over the old name, because step mentions key
    // by name only.
    let before = MapResolver::new()
        .with_variable("subject", "v1", VariableType::Text)
        .with_step("Crop", "s1");
    let mut doc = parse("@{text:subject} @{step:Crop}", &before);

    let after = MapResolver::new()
        .with_variable("topic", "v1", VariableType::Text)
        .with_step("Crop", "s2");
    validate(&mut doc, &after.reference_set());

    let mentions: Vec<_> = doc.mentions().collect();
    assert!(mentions[0].is_invalid());
    assert!(!mentions[1].is_invalid());
}

#[test]
fn clipboard_round_trip_through_plain_text() {
    let resolver = MapResolver::new().with_media("logo", "a1");
    let doc = parse("intro @{ref:logo} outro", &resolver);

    let selection = Selection::new(
        DocumentPosition::new(0, 0, 2),
        DocumentPosition::new(0, 2, 4),
    );
    assert!(selection_contains_mention(&doc, &selection));
    let copied = export_selection(&doc, &selection).unwrap();
    assert_eq!(copied, "tro @{ref:logo} out");

    // Pasting the exported text into another document restores the mention.
    let mut other = parse("x", &resolver);
    let outcome = paste_into(
        &mut other,
        Some(DocumentPosition::new(0, 0, 1)),
        &copied,
        &resolver,
    );
    assert!(outcome.consumed());
    assert_eq!(serialize(&other), "xtro @{ref:logo} out");
    assert!(!other.mentions().next().unwrap().is_invalid());
}

#[test]
fn cut_then_validate_remaining_document() {
    let resolver = MapResolver::new().with_media("logo", "a1");
    let mut doc = parse("keep @{ref:logo} cut @{ref:ghost}", &resolver);

    // Cut from just before the invalid mention to the end of the block.
    let selection = Selection::new(
        DocumentPosition::new(0, 2, 5),
        DocumentPosition::new(0, 4, 0),
    );
    let exported = cut_selection(&mut doc, &selection).unwrap();
    assert_eq!(exported, "@{ref:ghost}");
    assert_eq!(serialize(&doc), "keep @{ref:logo} cut ");

    let mut refs = ReferenceSet::new();
    refs = refs.with_media(["logo"]);
    assert_eq!(validate(&mut doc, &refs), 0);
}

#[test]
fn whole_document_reset_on_reparse() {
    let resolver = MapResolver::new().with_media("logo", "a1");
    let doc = parse("a @{ref:logo}", &resolver);
    assert_eq!(doc.mentions().count(), 1);

    // Reloading different storage text produces an entirely fresh tree.
    let doc = parse("plain only", &resolver);
    assert_eq!(doc.mentions().count(), 0);
}
