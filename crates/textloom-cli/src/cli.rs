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

//! Command definitions and dispatch for the Textloom CLI.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Textloom commands.
///
/// # Commands
///
/// - **Assemble**: Rebuild the paragraph from a directory of record files
/// - **Validate**: Check every record file without assembling
#[derive(Subcommand)]
pub enum Commands {
    /// Assemble the records in a directory into ordered text
    ///
    /// Reads every file in the directory as one JSON fragment record,
    /// reconstructs the reading order from the precedent links, prints a
    /// summary, and emits the structured payload.
    Assemble {
        /// Directory containing one JSON record per file
        #[arg(value_name = "DIR")]
        dir: String,

        /// Output file for the structured payload (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the structured payload
        #[arg(short, long)]
        pretty: bool,

        /// Skip files that fail record validation instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Validate every record file in a directory
    ///
    /// Checks that each file parses as JSON, carries all required
    /// fields, and names a known fragment type. Reports per-file results
    /// and fails if any file is invalid.
    Validate {
        /// Directory containing one JSON record per file
        #[arg(value_name = "DIR")]
        dir: String,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Assemble {
                dir,
                output,
                pretty,
                skip_invalid,
            } => commands::assemble(&dir, output.as_deref(), pretty, skip_invalid),
            Commands::Validate { dir } => commands::validate(&dir),
        }
    }
}
