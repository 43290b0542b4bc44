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

//! JSON record intake.
//!
//! Raw fragment records arrive as flat JSON objects. Intake checks the
//! required field names, then converts the object into a typed
//! [`Record`]; everything past this boundary works with typed fragments
//! and never looks a field up by name again.

use serde_json::{Map, Value as JsonValue};
use textloom_core::{
    has_required_fields, Ident, LoomError, Record, RecordType, Sentence, Word, REQUIRED_FIELDS,
};

/// Errors that can occur while turning raw JSON into typed records.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ImportError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// Root value must be an object.
    #[error("record must be a JSON object, found {0}")]
    InvalidRoot(String),

    /// The record failed intake validation.
    #[error(transparent)]
    Record(#[from] LoomError),
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ParseError(err.to_string())
    }
}

/// Check a decoded JSON object for the presence of every required field.
///
/// Only key presence counts; values are not inspected and extra keys are
/// ignored.
pub fn validate_record(record: &Map<String, JsonValue>, required: &[&str]) -> bool {
    has_required_fields(record.keys().map(String::as_str), required)
}

/// Parse one record from a JSON string.
///
/// # Errors
///
/// Fails when the string is not valid JSON, or for the same reasons as
/// [`record_from_value`].
pub fn record_from_str(json: &str) -> Result<Record, ImportError> {
    let value: JsonValue = serde_json::from_str(json)?;
    record_from_value(&value)
}

/// Convert a decoded JSON value into a typed record.
///
/// The value must be an object carrying every name in
/// [`REQUIRED_FIELDS`]. Identifiers may be integers or strings;
/// `parent_id` and `precedent` may also be null. A word record must
/// additionally carry a string `payload`.
///
/// # Errors
///
/// Fails with a validation error when a required field is missing or the
/// wrong shape, or when `type` names neither known fragment type.
pub fn record_from_value(value: &JsonValue) -> Result<Record, ImportError> {
    let record = match value.as_object() {
        Some(record) => record,
        None => return Err(ImportError::InvalidRoot(json_type_name(value).to_string())),
    };

    for field in REQUIRED_FIELDS {
        if !record.contains_key(field) {
            return Err(
                LoomError::validation(format!("missing required field '{}'", field)).into(),
            );
        }
    }

    let record_type = match record.get("type").and_then(JsonValue::as_str) {
        Some(name) => match RecordType::parse(name) {
            Some(record_type) => record_type,
            None => {
                return Err(
                    LoomError::validation(format!("unknown record type '{}'", name)).into(),
                )
            }
        },
        None => return Err(LoomError::validation("field 'type' must be a string").into()),
    };

    let id = match ident_value(record.get("id")) {
        Some(id) => id,
        None => {
            return Err(LoomError::validation("field 'id' must be an integer or string").into())
        }
    };
    let parent_id = opt_ident_field(record, "parent_id")?;
    let precedent_id = opt_ident_field(record, "precedent")?;

    match record_type {
        RecordType::Word => {
            let payload = match record.get("payload").and_then(JsonValue::as_str) {
                Some(payload) => payload,
                None => {
                    return Err(
                        LoomError::validation("word record must carry a string 'payload'").into(),
                    )
                }
            };
            Ok(Record::Word(Word::new(parent_id, id, payload, precedent_id)))
        }
        RecordType::Sentence => Ok(Record::Sentence(Sentence::new(id, precedent_id))),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn ident_value(value: Option<&JsonValue>) -> Option<Ident> {
    match value {
        Some(JsonValue::Number(n)) => n.as_i64().map(Ident::Int),
        Some(JsonValue::String(s)) => Some(Ident::Text(s.clone())),
        _ => None,
    }
}

/// Read an identifier field that may be null.
fn opt_ident_field(
    record: &Map<String, JsonValue>,
    field: &str,
) -> Result<Option<Ident>, ImportError> {
    match record.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => match ident_value(Some(value)) {
            Some(id) => Ok(Some(id)),
            None => Err(LoomError::validation(format!(
                "field '{}' must be null, an integer, or a string",
                field
            ))
            .into()),
        },
    }
}
