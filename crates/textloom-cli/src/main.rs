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

//! Textloom Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use textloom_cli::cli::Commands;

/// Textloom - rebuild ordered text from fragment records
///
/// Reads a directory of flat JSON fragment records, reconstructs the
/// reading order from their precedent links, and emits the assembled
/// text together with its structured payload.
///
/// # Examples
///
/// ```bash
/// # Assemble the records in a directory and print the result
/// textloom assemble records/
///
/// # Write the structured payload to a file, pretty-printed
/// textloom assemble records/ --output paragraph.json --pretty
///
/// # Check every record file without assembling
/// textloom validate records/
/// ```
#[derive(Parser)]
#[command(name = "textloom")]
#[command(author, version, about = "Textloom - rebuild ordered text from fragment records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
