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

//! Textloom CLI library for command-line parsing and execution.
//!
//! This library backs the `textloom` binary. It reads fragment records
//! from disk, feeds them through textloom-core assembly, and renders the
//! result.
//!
//! # Commands
//!
//! - **assemble**: Rebuild the paragraph from a directory of record
//!   files and emit the structured payload
//! - **validate**: Check every record file in a directory without
//!   assembling
//!
//! # Examples
//!
//! ```no_run
//! use textloom_cli::commands::{assemble, validate};
//!
//! # fn main() -> Result<(), textloom_cli::error::CliError> {
//! // Check the record files first
//! validate("records")?;
//!
//! // Assemble and write the payload to a file
//! assemble("records", Some("paragraph.json"), true, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Record files larger than the configured limit are rejected before
//! reading (configurable via `TEXTLOOM_MAX_FILE_SIZE`).
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>` for consistent error
//! reporting; the binary prints the error and exits non-zero.

pub mod cli;
pub mod commands;
pub mod error;
