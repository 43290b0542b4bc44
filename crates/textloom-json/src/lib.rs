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

//! JSON boundary for Textloom.
//!
//! This crate converts between the flat JSON records fragments arrive in
//! and the structured payload the assembled paragraph is published as.
//!
//! # Intake
//!
//! [`record_from_str`] and [`record_from_value`] turn one flat JSON
//! object into a typed [`textloom_core::Record`], rejecting records that
//! miss a required field or name an unknown type.
//!
//! # Output
//!
//! [`formatted_payload`] renders an assembled
//! [`textloom_core::Paragraph`] as the nested payload: the compiled text
//! plus each sentence with its ordered child words, every word payload
//! present both verbatim and decoded.
//!
//! # Example
//!
//! ```
//! use textloom_core::assemble;
//! use textloom_json::{formatted_payload, record_from_str};
//!
//! let records = vec![
//!     record_from_str(r#"{"parent_id": null, "id": 1, "precedent": null, "type": "sentence"}"#)?,
//!     record_from_str(
//!         r#"{"parent_id": 1, "id": 10, "payload": "Hello", "precedent": null, "type": "word"}"#,
//!     )?,
//!     record_from_str(
//!         r#"{"parent_id": 1, "id": 11, "payload": "world\\x21", "precedent": 10, "type": "word"}"#,
//!     )?,
//! ];
//! let assembly = assemble(records)?;
//! let payload = formatted_payload(&assembly.paragraph)?;
//! assert_eq!(payload["resulting_text"], "Hello world!");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod from_json;
mod to_json;

pub use from_json::{record_from_str, record_from_value, validate_record, ImportError};
pub use to_json::{
    formatted_payload, formatted_payload_string, sentence_payload, word_payload, ExportError,
};
