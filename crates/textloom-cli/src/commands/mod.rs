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

//! CLI command implementations

mod assemble;
mod validate;

pub use assemble::assemble;
pub use validate::validate;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default maximum record file size (16 MB).
/// Can be overridden via the TEXTLOOM_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Get the maximum file size from the environment or use the default.
///
/// Reads the `TEXTLOOM_MAX_FILE_SIZE` environment variable. Falls back
/// to [`DEFAULT_MAX_FILE_SIZE`] if the variable is not set or does not
/// parse as a byte count.
fn get_max_file_size() -> u64 {
    std::env::var("TEXTLOOM_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a record file from disk with size validation.
///
/// Checks the file size against the configured maximum before reading,
/// so an oversized file is rejected without allocating for it.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file exceeds the
/// size limit, or the contents cannot be read as UTF-8.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if file creation or writing fails, or if writing to
/// stdout fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("stdout", e)),
    }
}

/// List the record files in a directory, sorted by path.
///
/// Only direct children that are regular files count as record files;
/// subdirectories are not descended into. Sorting keeps runs
/// deterministic regardless of directory iteration order.
///
/// # Errors
///
/// Returns `Err` if the directory cannot be read.
pub fn record_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let entries = fs::read_dir(dir).map_err(|e| CliError::io_error(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CliError::io_error(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
