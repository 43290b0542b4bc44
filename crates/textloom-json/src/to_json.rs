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

//! Structured payload output.
//!
//! Once a paragraph is assembled, this module renders it back out as the
//! nested payload shape: the compiled text plus every sentence with its
//! ordered child words. Word payloads appear twice, once verbatim as they
//! arrived and once decoded.

use serde_json::{json, Value as JsonValue};
use textloom_core::{Ident, LoomError, Paragraph, RecordType, Sentence, Word};

/// Errors that can occur while rendering assembled output.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    /// A word payload failed to decode.
    #[error(transparent)]
    Decode(#[from] LoomError),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialize(err.to_string())
    }
}

fn ident_json(id: &Ident) -> JsonValue {
    match id {
        Ident::Int(n) => json!(n),
        Ident::Text(s) => json!(s),
    }
}

fn opt_ident_json(id: Option<&Ident>) -> JsonValue {
    match id {
        Some(id) => ident_json(id),
        None => JsonValue::Null,
    }
}

/// Render one word as an output object.
///
/// # Errors
///
/// Fails when the stored payload does not decode.
pub fn word_payload(word: &Word) -> Result<JsonValue, ExportError> {
    Ok(json!({
        "precedent": opt_ident_json(word.precedent_id.as_ref()),
        "id": ident_json(&word.id),
        "parent_id": opt_ident_json(word.parent_id.as_ref()),
        "payload": word.payload,
        "payload_translated": word.decoded_payload()?,
        "type": RecordType::Word.as_str(),
    }))
}

/// Render one sentence with its ordered children.
///
/// Sentences never carry a parent of their own, so `parent_id` is always
/// null in the output.
pub fn sentence_payload(sentence: &Sentence) -> Result<JsonValue, ExportError> {
    let children = sentence
        .words
        .iter()
        .map(word_payload)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({
        "precedent": opt_ident_json(sentence.precedent_id.as_ref()),
        "id": ident_json(&sentence.id),
        "parent_id": JsonValue::Null,
        "type": RecordType::Sentence.as_str(),
        "children": children,
    }))
}

/// Render a fully assembled paragraph as the structured payload.
///
/// The paragraph's sentences and words must already be in reading order;
/// output preserves whatever order they hold.
pub fn formatted_payload(paragraph: &Paragraph) -> Result<JsonValue, ExportError> {
    let sentences = paragraph
        .sentences
        .iter()
        .map(sentence_payload)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({
        "resulting_text": paragraph.compile_text()?,
        "sentences": sentences,
    }))
}

/// Render the structured payload as a JSON string.
///
/// # Errors
///
/// Fails when a word payload does not decode or serialization fails.
pub fn formatted_payload_string(paragraph: &Paragraph, pretty: bool) -> Result<String, ExportError> {
    let payload = formatted_payload(paragraph)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    Ok(rendered)
}
