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

//! Error types for text reconstruction.

use std::fmt;
use thiserror::Error;

/// The kind of failure raised while rebuilding a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoomErrorKind {
    /// Record rejected at the intake boundary.
    Validation,
    /// Payload escape sequences could not be decoded.
    Decode,
    /// Precedent links do not form a walkable chain.
    Chain,
}

impl fmt::Display for LoomErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "ValidationError"),
            Self::Decode => write!(f, "DecodeError"),
            Self::Chain => write!(f, "MalformedChainError"),
        }
    }
}

/// An error raised by the reconstruction pipeline.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct LoomError {
    /// The kind of error.
    pub kind: LoomErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Additional context (e.g., "in sentence 7").
    pub context: Option<String>,
}

impl LoomError {
    /// Create a new error.
    pub fn new(kind: LoomErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(LoomErrorKind::Validation, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(LoomErrorKind::Decode, message)
    }

    pub fn chain(message: impl Into<String>) -> Self {
        Self::new(LoomErrorKind::Chain, message)
    }
}

/// Result type for reconstruction operations.
pub type LoomResult<T> = Result<T, LoomError>;
