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

//! Identifier values for fragment records.

use std::fmt;

/// A record identifier as it arrives from source data.
///
/// Producers emit identifiers as either numbers or strings. Both forms are
/// preserved so that output payloads echo the original exactly; two
/// identifiers are equal only if they have the same form and content
/// (`Int(1)` is not `Text("1")`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Ident {
    /// Integer identifier.
    Int(i64),
    /// String identifier.
    Text(String),
}

impl Ident {
    /// Try to get the identifier as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the identifier as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Ident {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Accessor tests ====================

    #[test]
    fn test_ident_as_int() {
        assert_eq!(Ident::Int(42).as_int(), Some(42));
        assert_eq!(Ident::Text("42".to_string()).as_int(), None);
    }

    #[test]
    fn test_ident_as_str() {
        assert_eq!(Ident::Text("w-1".to_string()).as_str(), Some("w-1"));
        assert_eq!(Ident::Int(1).as_str(), None);
    }

    // ==================== Equality tests ====================

    #[test]
    fn test_ident_equality() {
        assert_eq!(Ident::Int(7), Ident::Int(7));
        assert_eq!(Ident::from("a"), Ident::from("a"));
        assert_ne!(Ident::Int(7), Ident::Int(8));
    }

    #[test]
    fn test_int_and_text_forms_are_distinct() {
        assert_ne!(Ident::Int(1), Ident::Text("1".to_string()));
    }

    // ==================== Display and conversion tests ====================

    #[test]
    fn test_ident_display() {
        assert_eq!(format!("{}", Ident::Int(12)), "12");
        assert_eq!(format!("{}", Ident::from("s-3")), "s-3");
    }

    #[test]
    fn test_ident_from_conversions() {
        assert_eq!(Ident::from(5), Ident::Int(5));
        assert_eq!(Ident::from("x"), Ident::Text("x".to_string()));
        assert_eq!(Ident::from("x".to_string()), Ident::Text("x".to_string()));
    }

    #[test]
    fn test_ident_usable_as_map_key() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(Ident::Int(1), "a");
        map.insert(Ident::from("1"), "b");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Ident::Int(1)), Some(&"a"));
    }
}
