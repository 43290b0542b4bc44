// Textloom - precedent-linked text reconstruction
//
// Copyright (c) 2026 Textloom contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end reconstruction scenarios.
//!
//! These tests drive the public pipeline the way a caller would: flat
//! records in, ordered text and payloads out.

use textloom_core::{
    assemble, decode_payload, escape_payload, has_required_fields, Ident, LoomErrorKind,
    Paragraph, Record, Sentence, Word, REQUIRED_FIELDS,
};

fn word(id: i64, parent: i64, payload: &str, precedent: Option<i64>) -> Word {
    Word::new(
        Some(Ident::Int(parent)),
        Ident::Int(id),
        payload,
        precedent.map(Ident::Int),
    )
}

fn sentence(id: i64, precedent: Option<i64>) -> Sentence {
    Sentence::new(Ident::Int(id), precedent.map(Ident::Int))
}

// =============================================================================
// Payload decoding
// =============================================================================

#[test]
fn test_escaped_payload_decodes_to_text() {
    let w = word(1, 1, "Hello\\x2c\\x20world\\u0021", None);
    assert_eq!(w.decoded_payload().unwrap(), "Hello, world!");
}

#[test]
fn test_decoding_never_mutates_the_raw_payload() {
    let w = word(1, 1, "line\\nbreak", None);
    assert_eq!(w.decoded_payload().unwrap(), "line\nbreak");
    assert_eq!(w.payload, "line\\nbreak");
}

#[test]
fn test_round_trip_through_escape_and_decode() {
    let original = "Mixed: tab\\t raw é 世界";
    let escaped = escape_payload(original);
    assert_eq!(decode_payload(&escaped).unwrap(), original);
}

#[test]
fn test_malformed_payload_fails_at_decode_time_not_intake() {
    // Construction accepts anything; the error surfaces on first decode.
    let w = word(1, 1, "broken\\x9", None);
    let err = w.decoded_payload().unwrap_err();
    assert_eq!(err.kind, LoomErrorKind::Decode);
}

// =============================================================================
// Chain ordering
// =============================================================================

#[test]
fn test_chain_head_sits_at_depth_zero() {
    let mut s = sentence(1, None);
    s.add_word(word(10, 1, "head", None));
    s.add_word(word(11, 1, "next", Some(10)));
    s.resolve_and_order_words().unwrap();
    assert_eq!(s.words[0].depth, 0);
    assert_eq!(s.words[1].depth, 1);
}

#[test]
fn test_three_link_chain_reads_in_precedent_order() {
    // C names B, B names A; insertion order is scrambled on purpose.
    let mut s = sentence(1, None);
    s.add_word(word(12, 1, "C", Some(11)));
    s.add_word(word(10, 1, "A", None));
    s.add_word(word(11, 1, "B", Some(10)));
    s.resolve_and_order_words().unwrap();
    let ids: Vec<i64> = s.words.iter().map(|w| w.id.as_int().unwrap()).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_eq!(s.decoded_text().unwrap(), "A B C");
}

#[test]
fn test_chain_depths_are_contiguous() {
    let mut s = sentence(1, None);
    for i in (0..8).rev() {
        let precedent = if i == 0 { None } else { Some(i - 1) };
        s.add_word(word(i, 1, "w", precedent));
    }
    s.resolve_and_order_words().unwrap();
    let depths: Vec<usize> = s.words.iter().map(|w| w.depth).collect();
    assert_eq!(depths, (0..8).collect::<Vec<_>>());
}

#[test]
fn test_two_heads_keep_insertion_order() {
    // A dangling precedent starts a second chain rather than failing.
    let mut s = sentence(1, None);
    s.add_word(word(10, 1, "first", None));
    s.add_word(word(20, 1, "stranded", Some(99)));
    s.add_word(word(11, 1, "second", Some(10)));
    s.resolve_and_order_words().unwrap();
    assert_eq!(s.decoded_text().unwrap(), "first stranded second");
}

#[test]
fn test_precedent_cycle_is_rejected() {
    let mut s = sentence(1, None);
    s.add_word(word(10, 1, "a", Some(11)));
    s.add_word(word(11, 1, "b", Some(10)));
    let err = s.resolve_and_order_words().unwrap_err();
    assert_eq!(err.kind, LoomErrorKind::Chain);
}

// =============================================================================
// Containment rules
// =============================================================================

#[test]
fn test_duplicate_word_add_is_a_no_op() {
    let mut s = sentence(1, None);
    s.add_word(word(10, 1, "once", None));
    s.add_word(word(10, 1, "once", None));
    assert_eq!(s.words.len(), 1);
}

#[test]
fn test_foreign_word_is_silently_dropped() {
    let mut s = sentence(1, None);
    s.add_word(word(10, 2, "not mine", None));
    assert!(s.words.is_empty());
}

#[test]
fn test_required_field_names_are_fixed() {
    assert_eq!(REQUIRED_FIELDS, ["parent_id", "id", "precedent", "type"]);
    assert!(has_required_fields(
        ["type", "id", "precedent", "parent_id", "payload"],
        &REQUIRED_FIELDS
    ));
    assert!(!has_required_fields(
        ["type", "id", "precedent"],
        &REQUIRED_FIELDS
    ));
}

// =============================================================================
// End-to-end assembly
// =============================================================================

#[test]
fn test_hello_world_from_shuffled_records() {
    let records = vec![
        Record::Word(word(21, 2, "It\\x20works.", None)),
        Record::Sentence(sentence(2, Some(1))),
        Record::Word(word(11, 1, "world!", Some(10))),
        Record::Sentence(sentence(1, None)),
        Record::Word(word(10, 1, "Hello", None)),
    ];
    let assembly = assemble(records).unwrap();
    assert_eq!(
        assembly.paragraph.compile_text().unwrap(),
        "Hello world! It works."
    );
    assert!(assembly.report.is_clean());
}

#[test]
fn test_sentence_order_follows_sentence_chain() {
    let records = vec![
        Record::Sentence(sentence(2, Some(1))),
        Record::Sentence(sentence(1, None)),
        Record::Word(word(20, 2, "two", None)),
        Record::Word(word(10, 1, "one", None)),
    ];
    let assembly = assemble(records).unwrap();
    let ids: Vec<i64> = assembly
        .paragraph
        .sentences
        .iter()
        .map(|s| s.id.as_int().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(assembly.paragraph.compile_text().unwrap(), "one two");
}

#[test]
fn test_string_ids_work_end_to_end() {
    let records = vec![
        Record::Sentence(Sentence::new(Ident::from("s-1"), None)),
        Record::Word(Word::new(
            Some(Ident::from("s-1")),
            Ident::from("w-b"),
            "beta",
            Some(Ident::from("w-a")),
        )),
        Record::Word(Word::new(
            Some(Ident::from("s-1")),
            Ident::from("w-a"),
            "alpha",
            None,
        )),
    ];
    let assembly = assemble(records).unwrap();
    assert_eq!(assembly.paragraph.compile_text().unwrap(), "alpha beta");
}

#[test]
fn test_int_and_string_ids_do_not_collide() {
    // Ident::Int(1) and Ident::Text("1") are different parents.
    let records = vec![
        Record::Sentence(Sentence::new(Ident::Int(1), None)),
        Record::Word(Word::new(
            Some(Ident::from("1")),
            Ident::Int(10),
            "lost",
            None,
        )),
    ];
    let assembly = assemble(records).unwrap();
    assert_eq!(assembly.report.orphaned_words, 1);
    assert_eq!(assembly.report.words, 0);
}

#[test]
fn test_empty_sentences_still_take_part_in_ordering() {
    let records = vec![
        Record::Sentence(sentence(2, Some(1))),
        Record::Sentence(sentence(1, None)),
        Record::Word(word(20, 2, "tail", None)),
    ];
    let assembly = assemble(records).unwrap();
    // Sentence 1 has no words and contributes an empty segment.
    assert_eq!(assembly.paragraph.compile_text().unwrap(), " tail");
}

#[test]
fn test_rebuilt_paragraph_can_be_reassembled_by_hand() {
    // The incremental API arrives at the same result as assemble().
    let mut p = Paragraph::new();
    let mut s1 = sentence(1, None);
    s1.add_word(word(10, 1, "by", None));
    s1.add_word(word(11, 1, "hand", Some(10)));
    let mut s2 = sentence(2, Some(1));
    s2.add_word(word(20, 2, "too", None));
    s1.resolve_and_order_words().unwrap();
    s2.resolve_and_order_words().unwrap();
    p.add_sentence(s2);
    p.add_sentence(s1);
    p.resolve_and_order_sentences().unwrap();
    assert_eq!(p.compile_text().unwrap(), "by hand too");
}
