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

//! Assemble command - rebuild ordered text from a directory of records

use super::{read_file, record_files, write_output};
use crate::error::CliError;
use colored::Colorize;
use std::path::Path;
use textloom_core::assemble as assemble_records;
use textloom_json::{formatted_payload_string, record_from_str};

/// Assemble the record files in a directory into ordered text.
///
/// Reads every file in `dir` as one flat JSON fragment record, rebuilds
/// the paragraph from the precedent links, prints an assembly summary
/// and the resulting text, and writes the structured payload to `output`
/// or stdout.
///
/// # Arguments
///
/// * `dir` - Directory containing one JSON record per file
/// * `output` - Optional path for the structured payload; stdout if `None`
/// * `pretty` - Pretty-print the structured payload
/// * `skip_invalid` - Warn and skip unreadable or invalid record files
///   instead of aborting
///
/// # Errors
///
/// Returns `Err` if:
/// - The directory cannot be listed
/// - A record file cannot be read or is invalid, unless `skip_invalid`
///   downgrades that file to a warning
/// - Assembly fails, for example on a precedent cycle
/// - A word payload does not decode
/// - Writing the payload fails
///
/// # Examples
///
/// ```no_run
/// use textloom_cli::commands::assemble;
///
/// # fn main() -> Result<(), textloom_cli::error::CliError> {
/// // Print the payload to stdout
/// assemble("records", None, false, false)?;
///
/// // Write a pretty payload, skipping bad files
/// assemble("records", Some("paragraph.json"), true, true)?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Prints a summary to stdout including:
/// - Assembly status (✓) with sentence and word counts
/// - Counts of skipped, orphaned, and duplicate fragments
/// - The resulting text between asterisks
pub fn assemble(
    dir: &str,
    output: Option<&str>,
    pretty: bool,
    skip_invalid: bool,
) -> Result<(), CliError> {
    let files = record_files(Path::new(dir))?;

    let mut records = Vec::with_capacity(files.len());
    let mut skipped = 0usize;
    for path in &files {
        // Unreadable and oversized files honor --skip-invalid too.
        let content = match read_file(path) {
            Ok(content) => content,
            Err(e) if skip_invalid => {
                eprintln!("{} {}", "warning:".yellow().bold(), e);
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        match record_from_str(&content) {
            Ok(record) => records.push(record),
            Err(e) if skip_invalid => {
                eprintln!("{} {}: {}", "warning:".yellow().bold(), path.display(), e);
                skipped += 1;
            }
            Err(e) => return Err(CliError::invalid_record(path, e.to_string())),
        }
    }

    let assembly = assemble_records(records).map_err(|e| CliError::Assembly(e.to_string()))?;
    let report = &assembly.report;

    println!("{} {}", "✓".green().bold(), dir);
    println!("  Sentences: {}", report.sentences);
    println!("  Words: {}", report.words);
    if skipped > 0 {
        println!("  Skipped files: {}", skipped);
    }
    if report.orphaned_words > 0 {
        println!("  Orphaned words: {}", report.orphaned_words);
    }
    if report.duplicate_words > 0 {
        println!("  Duplicate words: {}", report.duplicate_words);
    }
    if report.duplicate_sentences > 0 {
        println!("  Duplicate sentences: {}", report.duplicate_sentences);
    }

    let text = assembly
        .paragraph
        .compile_text()
        .map_err(|e| CliError::Output(e.to_string()))?;
    println!("Resulting output: *{}*", text);

    let payload = formatted_payload_string(&assembly.paragraph, pretty)?;
    write_output(&payload, output)?;
    if let Some(path) = output {
        println!("{} wrote structured payload to {}", "✓".green().bold(), path);
    }

    Ok(())
}
