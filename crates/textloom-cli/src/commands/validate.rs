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

//! Validate command - record file validation without assembly

use super::{read_file, record_files};
use crate::error::CliError;
use colored::Colorize;
use std::path::Path;
use textloom_json::record_from_str;

/// Validate every record file in a directory.
///
/// Each file must parse as JSON, carry all required record fields, and
/// name a known fragment type. Files are reported individually; the
/// command fails if any file is invalid.
///
/// # Arguments
///
/// * `dir` - Directory containing one JSON record per file
///
/// # Errors
///
/// Returns `Err` if the directory cannot be read, or with
/// [`CliError::ValidationFailed`] if one or more files are invalid.
///
/// # Output
///
/// Prints one line per file (✓ or ✗ with the failure reason), then a
/// summary count.
pub fn validate(dir: &str) -> Result<(), CliError> {
    let files = record_files(Path::new(dir))?;

    let total = files.len();
    let mut failed = 0usize;
    for path in &files {
        match check_file(path) {
            Ok(()) => println!("{} {}", "✓".green().bold(), path.display()),
            Err(message) => {
                println!("{} {}: {}", "✗".red().bold(), path.display(), message);
                failed += 1;
            }
        }
    }

    println!("{} of {} record files valid", total - failed, total);
    if failed > 0 {
        return Err(CliError::ValidationFailed { failed, total });
    }
    Ok(())
}

fn check_file(path: &Path) -> Result<(), String> {
    let content = read_file(path).map_err(|e| e.to_string())?;
    record_from_str(&content).map_err(|e| e.to_string())?;
    Ok(())
}
