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

//! Word fragments.

use crate::chain::ChainLink;
use crate::decode::decode_payload;
use crate::error::LoomResult;
use crate::ident::Ident;

/// The smallest fragment: one word of the final text.
///
/// Field values are stored exactly as they arrived; construction performs no
/// validation or decoding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// Identifier of the sentence this word belongs to.
    pub parent_id: Option<Ident>,
    /// The word's own identifier.
    pub id: Ident,
    /// Raw payload text, possibly containing escape sequences.
    pub payload: String,
    /// Identifier of the word immediately before this one, if any.
    pub precedent_id: Option<Ident>,
    /// Hops to the head of the word chain (0 until resolved).
    pub depth: usize,
}

impl Word {
    /// Create a new word.
    pub fn new(
        parent_id: Option<Ident>,
        id: Ident,
        payload: impl Into<String>,
        precedent_id: Option<Ident>,
    ) -> Self {
        Self {
            parent_id,
            id,
            payload: payload.into(),
            precedent_id,
            depth: 0,
        }
    }

    /// Decode the payload's escape sequences into readable text.
    ///
    /// Decoding runs on every call; the raw payload is kept untouched.
    ///
    /// # Errors
    ///
    /// Fails with a decode error when the payload contains a malformed
    /// escape sequence.
    pub fn decoded_payload(&self) -> LoomResult<String> {
        decode_payload(&self.payload)
    }
}

impl ChainLink for Word {
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

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction tests ====================

    #[test]
    fn test_word_new_stores_fields_verbatim() {
        let word = Word::new(
            Some(Ident::Int(1)),
            Ident::Int(10),
            "Hello\\x2c",
            Some(Ident::Int(9)),
        );
        assert_eq!(word.parent_id, Some(Ident::Int(1)));
        assert_eq!(word.id, Ident::Int(10));
        assert_eq!(word.payload, "Hello\\x2c");
        assert_eq!(word.precedent_id, Some(Ident::Int(9)));
        assert_eq!(word.depth, 0);
    }

    #[test]
    fn test_word_without_parent_or_precedent() {
        let word = Word::new(None, Ident::from("w-1"), "text", None);
        assert_eq!(word.parent_id, None);
        assert_eq!(word.precedent_id, None);
    }

    // ==================== Payload decoding tests ====================

    #[test]
    fn test_decoded_payload() {
        let word = Word::new(None, Ident::Int(1), "Hello\\x2c\\x20world", None);
        assert_eq!(word.decoded_payload().unwrap(), "Hello, world");
    }

    #[test]
    fn test_decoded_payload_leaves_raw_untouched() {
        let word = Word::new(None, Ident::Int(1), "a\\tb", None);
        word.decoded_payload().unwrap();
        assert_eq!(word.payload, "a\\tb");
    }

    #[test]
    fn test_decoded_payload_reports_malformed_escape() {
        let word = Word::new(None, Ident::Int(1), "bad\\x2", None);
        assert!(word.decoded_payload().is_err());
    }
}
