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

//! Whole-document assembly from flat record collections.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::LoomResult;
use crate::ident::Ident;
use crate::paragraph::Paragraph;
use crate::record::Record;
use crate::sentence::{Sentence, WordPlacement};

/// Tallies of what happened while routing records into a paragraph.
///
/// Dropped words are not errors; upstream data is routinely missing pieces.
/// The report makes the drops visible so batch callers can warn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Word records attached to a sentence.
    pub words: usize,
    /// Sentence records placed in the paragraph.
    pub sentences: usize,
    /// Word records whose parent_id matched no sentence.
    pub orphaned_words: usize,
    /// Word records dropped because their id was already attached.
    pub duplicate_words: usize,
    /// Sentence records whose id repeated an earlier sentence's.
    pub duplicate_sentences: usize,
}

impl AssemblyReport {
    /// True when every record landed cleanly.
    pub fn is_clean(&self) -> bool {
        self.orphaned_words == 0 && self.duplicate_words == 0 && self.duplicate_sentences == 0
    }
}

/// A fully resolved paragraph plus the routing report.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// The reconstructed paragraph, sentences and words in reading order.
    pub paragraph: Paragraph,
    /// What happened on the way there.
    pub report: AssemblyReport,
}

/// Build a reading-ordered paragraph from a flat record collection.
///
/// Records may arrive in any order: words are routed to the sentence their
/// parent_id names through one lookup table, each sentence resolves its word
/// chain, and the paragraph resolves the sentence chain. Record arrival
/// order is the tie-break wherever chain depths are equal. When two
/// sentences share an id, the first one owns the id; words route to it and
/// the repeat is flagged in the report.
///
/// # Errors
///
/// Fails with a chain error when any precedent cycle is found.
pub fn assemble(records: Vec<Record>) -> LoomResult<Assembly> {
    let mut report = AssemblyReport::default();
    let mut sentences: Vec<Sentence> = Vec::new();
    let mut words = Vec::new();

    for record in records {
        match record {
            Record::Sentence(sentence) => sentences.push(sentence),
            Record::Word(word) => words.push(word),
        }
    }
    report.sentences = sentences.len();

    let mut by_id: HashMap<Ident, usize> = HashMap::with_capacity(sentences.len());
    for (i, sentence) in sentences.iter().enumerate() {
        match by_id.entry(sentence.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
            Entry::Occupied(_) => report.duplicate_sentences += 1,
        }
    }

    for word in words {
        let target = word
            .parent_id
            .as_ref()
            .and_then(|parent| by_id.get(parent).copied());
        match target {
            Some(i) => match sentences[i].add_word(word) {
                WordPlacement::Added => report.words += 1,
                WordPlacement::AlreadyPresent => report.duplicate_words += 1,
                // Routing is by parent id, so the parent check cannot fail here.
                WordPlacement::ParentMismatch => {
                    debug_assert!(false, "parent-routed word rejected by its sentence");
                    report.orphaned_words += 1;
                }
            },
            None => report.orphaned_words += 1,
        }
    }

    for sentence in &mut sentences {
        sentence
            .resolve_and_order_words()
            .map_err(|e| e.with_context(format!("in sentence {}", sentence.id)))?;
    }

    let mut paragraph = Paragraph::new();
    paragraph.set_sentences(sentences);
    paragraph.resolve_and_order_sentences()?;

    Ok(Assembly { paragraph, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    fn word_record(id: i64, parent: i64, payload: &str, precedent: Option<i64>) -> Record {
        Record::Word(Word::new(
            Some(Ident::Int(parent)),
            Ident::Int(id),
            payload,
            precedent.map(Ident::Int),
        ))
    }

    fn sentence_record(id: i64, precedent: Option<i64>) -> Record {
        Record::Sentence(Sentence::new(Ident::Int(id), precedent.map(Ident::Int)))
    }

    // ==================== Happy path tests ====================

    #[test]
    fn test_assemble_single_sentence() {
        let records = vec![
            word_record(11, 1, "world!", Some(10)),
            sentence_record(1, None),
            word_record(10, 1, "Hello", None),
        ];
        let assembly = assemble(records).unwrap();
        assert_eq!(assembly.paragraph.compile_text().unwrap(), "Hello world!");
        assert!(assembly.report.is_clean());
        assert_eq!(assembly.report.words, 2);
        assert_eq!(assembly.report.sentences, 1);
    }

    #[test]
    fn test_assemble_orders_sentences_and_words() {
        let records = vec![
            sentence_record(2, Some(1)),
            word_record(20, 2, "second.", None),
            sentence_record(1, None),
            word_record(11, 1, "first", Some(10)),
            word_record(10, 1, "The", None),
        ];
        let assembly = assemble(records).unwrap();
        assert_eq!(
            assembly.paragraph.compile_text().unwrap(),
            "The first second."
        );
    }

    #[test]
    fn test_assemble_empty_input() {
        let assembly = assemble(Vec::new()).unwrap();
        assert_eq!(assembly.paragraph.compile_text().unwrap(), "");
        assert!(assembly.report.is_clean());
    }

    // ==================== Routing report tests ====================

    #[test]
    fn test_orphaned_word_is_counted_and_dropped() {
        let records = vec![
            sentence_record(1, None),
            word_record(10, 1, "kept", None),
            word_record(20, 9, "lost", None),
        ];
        let assembly = assemble(records).unwrap();
        assert_eq!(assembly.paragraph.compile_text().unwrap(), "kept");
        assert_eq!(assembly.report.orphaned_words, 1);
        assert!(!assembly.report.is_clean());
    }

    #[test]
    fn test_word_without_parent_is_orphaned() {
        let records = vec![
            sentence_record(1, None),
            Record::Word(Word::new(None, Ident::Int(10), "stray", None)),
        ];
        let assembly = assemble(records).unwrap();
        assert_eq!(assembly.report.orphaned_words, 1);
        assert_eq!(assembly.report.words, 0);
    }

    #[test]
    fn test_duplicate_word_id_is_counted_once() {
        let records = vec![
            sentence_record(1, None),
            word_record(10, 1, "one", None),
            word_record(10, 1, "one again", None),
        ];
        let assembly = assemble(records).unwrap();
        assert_eq!(assembly.paragraph.compile_text().unwrap(), "one");
        assert_eq!(assembly.report.duplicate_words, 1);
    }

    #[test]
    fn test_duplicate_sentence_id_routes_words_to_first() {
        let records = vec![
            sentence_record(1, None),
            sentence_record(1, None),
            word_record(10, 1, "text", None),
        ];
        let assembly = assemble(records).unwrap();
        assert_eq!(assembly.report.duplicate_sentences, 1);
        assert_eq!(assembly.report.sentences, 2);
        assert_eq!(assembly.paragraph.sentences[0].words.len(), 1);
        assert!(assembly.paragraph.sentences[1].words.is_empty());
    }

    #[test]
    fn test_is_clean_reflects_each_routing_count() {
        assert!(AssemblyReport::default().is_clean());

        let dirty = [
            AssemblyReport {
                orphaned_words: 1,
                ..Default::default()
            },
            AssemblyReport {
                duplicate_words: 1,
                ..Default::default()
            },
            AssemblyReport {
                duplicate_sentences: 1,
                ..Default::default()
            },
        ];
        for report in dirty {
            assert!(!report.is_clean());
        }
    }

    // ==================== Failure tests ====================

    #[test]
    fn test_word_cycle_fails_with_sentence_context() {
        let records = vec![
            sentence_record(7, None),
            word_record(10, 7, "a", Some(11)),
            word_record(11, 7, "b", Some(10)),
        ];
        let err = assemble(records).unwrap_err();
        assert_eq!(err.context, Some("in sentence 7".to_string()));
    }

    #[test]
    fn test_sentence_cycle_fails() {
        let records = vec![sentence_record(1, Some(2)), sentence_record(2, Some(1))];
        assert!(assemble(records).is_err());
    }
}
