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

//! Structured error types for the Textloom CLI.
//!
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting.

use std::io;
use std::path::PathBuf;
use textloom_json::ExportError;
use thiserror::Error;

/// The main error type for Textloom CLI operations.
///
/// Each variant carries enough context to print a useful message; the
/// binary reports the error and exits non-zero.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the maximum allowed limit.
    ///
    /// This prevents memory exhaustion on oversized record files.
    #[error(
        "File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB). \
         Set TEXTLOOM_MAX_FILE_SIZE (in bytes) to raise the limit"
    )]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// A record file did not parse into a valid fragment record.
    #[error("Invalid record in '{path}': {message}")]
    InvalidRecord {
        /// The file the record came from
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// Paragraph assembly failed.
    ///
    /// This wraps errors from textloom-core, such as a precedent cycle.
    #[error("Assembly failed: {0}")]
    Assembly(String),

    /// Rendering the structured payload failed.
    #[error("Failed to render output: {0}")]
    Output(String),

    /// One or more record files failed validation.
    ///
    /// This is returned by the `validate` command after every file has
    /// been reported individually.
    #[error("{failed} of {total} record files failed validation")]
    ValidationFailed {
        /// Number of files that failed
        failed: usize,
        /// Number of files checked
        total: usize,
    },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid-record error.
    pub fn invalid_record(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<ExportError> for CliError {
    fn from(source: ExportError) -> Self {
        Self::Output(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "records/a.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("records/a.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("huge.json", 20_000_000, 16 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("huge.json"));
        assert!(msg.contains("20000000 bytes"));
        assert!(msg.contains("16 MB"));
        assert!(msg.contains("TEXTLOOM_MAX_FILE_SIZE"));
    }

    #[test]
    fn test_invalid_record_display() {
        let err = CliError::invalid_record("records/b.json", "missing required field 'id'");
        let msg = err.to_string();
        assert!(msg.contains("records/b.json"));
        assert!(msg.contains("missing required field 'id'"));
    }

    #[test]
    fn test_validation_failed_display() {
        let err = CliError::ValidationFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(
            err.to_string(),
            "2 of 5 record files failed validation"
        );
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::Assembly("precedent cycle through fragment 3".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
