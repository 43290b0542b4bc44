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

//! Typed fragment records and intake field validation.

use std::fmt;

use crate::sentence::Sentence;
use crate::word::Word;

/// Field names every fragment record must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["parent_id", "id", "precedent", "type"];

/// The kind of fragment a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecordType {
    /// A word fragment.
    Word,
    /// A sentence fragment.
    Sentence,
}

impl RecordType {
    /// The wire name for this record type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Sentence => "sentence",
        }
    }

    /// Parse a wire name into a record type.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "word" => Some(Self::Word),
            "sentence" => Some(Self::Sentence),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed fragment record, ready for assembly.
///
/// All field access past the intake boundary goes through these variants;
/// nothing downstream looks fields up by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A word fragment.
    Word(Word),
    /// A sentence fragment.
    Sentence(Sentence),
}

impl Record {
    /// The record's type tag.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Word(_) => RecordType::Word,
            Self::Sentence(_) => RecordType::Sentence,
        }
    }
}

/// Check that every required field name occurs among the present names.
///
/// Presence is the only criterion: values are not inspected, and extra
/// fields are ignored.
pub fn has_required_fields<'a, I>(present: I, required: &[&str]) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let present: Vec<&str> = present.into_iter().collect();
    required.iter().all(|field| present.contains(field))
}
