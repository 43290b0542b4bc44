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

//! Paragraph assembly from sentence chains.

use crate::chain::order_by_depth;
use crate::error::LoomResult;
use crate::sentence::Sentence;

/// A paragraph: the top-level container of sentence fragments.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    /// Sentences, in insertion order until resolved.
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sentence.
    pub fn add_sentence(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    /// Replace the sentence set wholesale.
    pub fn set_sentences(&mut self, sentences: Vec<Sentence>) {
        self.sentences = sentences;
    }

    /// Resolve sentence precedent links and sort the sentences into reading
    /// order.
    ///
    /// Sentences at equal depth keep their insertion order.
    ///
    /// # Errors
    ///
    /// Fails with a chain error when the sentence precedent links form a
    /// cycle.
    pub fn resolve_and_order_sentences(&mut self) -> LoomResult<()> {
        order_by_depth(&mut self.sentences)
    }

    /// Decode every sentence and join them with single spaces.
    ///
    /// # Errors
    ///
    /// Fails with a decode error when any word payload is malformed.
    pub fn compile_text(&self) -> LoomResult<String> {
        let mut parts = Vec::with_capacity(self.sentences.len());
        for sentence in &self.sentences {
            parts.push(sentence.decoded_text()?);
        }
        Ok(parts.join(" "))
    }
}
