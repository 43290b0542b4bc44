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

//! Sentence fragments and word containment.

use crate::chain::{order_by_depth, ChainLink};
use crate::error::LoomResult;
use crate::ident::Ident;
use crate::word::Word;

/// Outcome of attaching a word to a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPlacement {
    /// The word was appended.
    Added,
    /// A word with the same id is already attached; the sentence is
    /// unchanged.
    AlreadyPresent,
    /// The word's parent_id names a different sentence; the word was
    /// dropped and the sentence is unchanged.
    ParentMismatch,
}

/// A sentence: a collection of word fragments.
///
/// Every instance starts with its own empty word list. Words stay in
/// insertion order until [`Sentence::resolve_and_order_words`] runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence {
    /// The sentence's own identifier.
    pub id: Ident,
    /// Identifier of the sentence immediately before this one, if any.
    pub precedent_id: Option<Ident>,
    /// Attached words.
    pub words: Vec<Word>,
    /// Hops to the head of the sentence chain (0 until resolved).
    pub depth: usize,
}

impl Sentence {
    /// Create a new sentence with no words.
    pub fn new(id: Ident, precedent_id: Option<Ident>) -> Self {
        Self {
            id,
            precedent_id,
            words: Vec::new(),
            depth: 0,
        }
    }

    /// Find an attached word by id.
    pub fn find_word(&self, id: &Ident) -> Option<&Word> {
        self.words.iter().find(|word| &word.id == id)
    }

    /// Attach a word to this sentence.
    ///
    /// A word whose id is already attached leaves the sentence unchanged,
    /// as does a word whose parent_id does not equal this sentence's id.
    /// Neither case is an error; the returned [`WordPlacement`] reports
    /// which outcome happened.
    pub fn add_word(&mut self, word: Word) -> WordPlacement {
        if self.find_word(&word.id).is_some() {
            return WordPlacement::AlreadyPresent;
        }
        match &word.parent_id {
            Some(parent) if *parent == self.id => {
                self.words.push(word);
                WordPlacement::Added
            }
            _ => WordPlacement::ParentMismatch,
        }
    }

    /// Resolve word precedent links and sort the words into reading order.
    ///
    /// Words at equal depth keep their insertion order.
    ///
    /// # Errors
    ///
    /// Fails with a chain error when the word precedent links form a cycle.
    pub fn resolve_and_order_words(&mut self) -> LoomResult<()> {
        order_by_depth(&mut self.words)
    }

    /// Decode every word payload and join them with single spaces.
    ///
    /// Returns the empty string for a sentence with no words.
    ///
    /// # Errors
    ///
    /// Fails with a decode error when any word payload is malformed.
    pub fn decoded_text(&self) -> LoomResult<String> {
        let mut parts = Vec::with_capacity(self.words.len());
        for word in &self.words {
            parts.push(word.decoded_payload()?);
        }
        Ok(parts.join(" "))
    }
}

impl ChainLink for Sentence {
    fn id(&self) -> &Ident {
        &self.id
    }

    fn precedent_id(&self) -> Option<&Ident> {
        self.precedent_id.as_ref()
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }
}
