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

//! Core data model and precedent-chain resolution for Textloom.
//!
//! Upstream systems emit documents as flat, unordered batches of typed
//! fragment records. Each fragment carries its own id, the container it
//! belongs to (`parent_id`), and the fragment that comes immediately before
//! it (`precedent`); no positions or indices exist anywhere. This crate
//! rebuilds reading order from those links:
//!
//! - [`Word`] and [`Sentence`] model the two fragment types, [`Paragraph`]
//!   the document root, [`Record`] the typed intake form.
//! - [`decode_payload`] expands escaped word payloads back into readable
//!   text; [`escape_payload`] is its inverse.
//! - [`resolve_depths`] and [`order_by_depth`] walk precedent chains
//!   through an id lookup table and sort fragments by distance from the
//!   chain head. Cycles fail instead of hanging; unknown precedents start
//!   new chains.
//! - [`assemble`] runs the whole pipeline over a flat record collection and
//!   reports every record it had to drop on the way.
//!
//! # Example
//!
//! ```
//! use textloom_core::{assemble, Ident, Record, Sentence, Word};
//!
//! let records = vec![
//!     Record::Word(Word::new(
//!         Some(Ident::Int(1)),
//!         Ident::Int(11),
//!         "world!",
//!         Some(Ident::Int(10)),
//!     )),
//!     Record::Sentence(Sentence::new(Ident::Int(1), None)),
//!     Record::Word(Word::new(Some(Ident::Int(1)), Ident::Int(10), "Hello", None)),
//! ];
//!
//! let assembly = assemble(records).unwrap();
//! assert_eq!(assembly.paragraph.compile_text().unwrap(), "Hello world!");
//! ```

mod assemble;
mod chain;
mod decode;
mod error;
mod ident;
mod paragraph;
mod record;
mod sentence;
mod word;

pub use assemble::{assemble, Assembly, AssemblyReport};
pub use chain::{order_by_depth, resolve_depths, ChainLink};
pub use decode::{decode_payload, escape_payload};
pub use error::{LoomError, LoomErrorKind, LoomResult};
pub use ident::Ident;
pub use paragraph::Paragraph;
pub use record::{has_required_fields, Record, RecordType, REQUIRED_FIELDS};
pub use sentence::{Sentence, WordPlacement};
pub use word::Word;
