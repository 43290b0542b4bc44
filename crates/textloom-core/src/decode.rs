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

//! Escaped payload decoding.
//!
//! Word payloads travel with backslash escape sequences in them. Decoding
//! expands the escapes into raw bytes and reads the final byte sequence back
//! as UTF-8, so a `\xHH` pair may contribute one byte of a multi-byte
//! character.

use memchr::memchr;

use crate::error::{LoomError, LoomResult};

/// Decode a payload's escape sequences into readable text.
///
/// Supported escapes: `\xHH` (one raw byte from two hex digits), `\uHHHH`
/// (a code point from four hex digits), `\n`, `\t`, `\r`, `\0`, `\\`, `\'`
/// and `\"`. Any other escape is kept verbatim, backslash included.
///
/// # Errors
///
/// Fails with a decode error when a hex escape is truncated or contains a
/// non-hex digit, when the payload ends with a lone backslash, when `\uHHHH`
/// names a surrogate, or when the expanded bytes are not valid UTF-8.
pub fn decode_payload(payload: &str) -> LoomResult<String> {
    let bytes = payload.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    // '\\' (0x5c) never occurs inside a multi-byte UTF-8 sequence, so a
    // byte-level scan cannot split a character.
    while let Some(offset) = memchr(b'\\', &bytes[i..]) {
        out.extend_from_slice(&bytes[i..i + offset]);
        i = decode_escape(bytes, i + offset, &mut out)?;
    }
    out.extend_from_slice(&bytes[i..]);

    String::from_utf8(out).map_err(|_| LoomError::decode("expanded bytes are not valid UTF-8"))
}

/// Expand one escape sequence starting at the backslash.
///
/// Returns the index of the first byte after the sequence.
fn decode_escape(bytes: &[u8], start: usize, out: &mut Vec<u8>) -> LoomResult<usize> {
    let next = match bytes.get(start + 1) {
        Some(b) => *b,
        None => return Err(LoomError::decode("payload ends with a lone backslash")),
    };

    match next {
        b'n' => {
            out.push(b'\n');
            Ok(start + 2)
        }
        b't' => {
            out.push(b'\t');
            Ok(start + 2)
        }
        b'r' => {
            out.push(b'\r');
            Ok(start + 2)
        }
        b'0' => {
            out.push(0);
            Ok(start + 2)
        }
        b'\\' => {
            out.push(b'\\');
            Ok(start + 2)
        }
        b'\'' => {
            out.push(b'\'');
            Ok(start + 2)
        }
        b'"' => {
            out.push(b'"');
            Ok(start + 2)
        }
        b'x' => {
            let hi = hex_digit(bytes, start + 2)?;
            let lo = hex_digit(bytes, start + 3)?;
            out.push((hi << 4) | lo);
            Ok(start + 4)
        }
        b'u' => {
            let mut value: u32 = 0;
            for offset in 0..4 {
                value = (value << 4) | u32::from(hex_digit(bytes, start + 2 + offset)?);
            }
            match char::from_u32(value) {
                Some(c) => {
                    let mut buf = [0u8; 4];
                    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                    Ok(start + 6)
                }
                None => Err(LoomError::decode(format!(
                    "\\u{:04x} is not a valid code point",
                    value
                ))),
            }
        }
        _ => {
            // Unknown escape - keep as-is; the next byte is copied by the
            // caller's literal pass.
            out.push(b'\\');
            Ok(start + 1)
        }
    }
}

fn hex_digit(bytes: &[u8], pos: usize) -> LoomResult<u8> {
    match bytes.get(pos) {
        Some(b @ b'0'..=b'9') => Ok(b - b'0'),
        Some(b @ b'a'..=b'f') => Ok(b - b'a' + 10),
        Some(b @ b'A'..=b'F') => Ok(b - b'A' + 10),
        Some(_) => Err(LoomError::decode("invalid hex digit in escape sequence")),
        None => Err(LoomError::decode("truncated hex escape sequence")),
    }
}

/// Escape text back into the transport form accepted by [`decode_payload`].
///
/// Backslashes, newlines, tabs and carriage returns become their named
/// escapes; every other byte outside printable ASCII becomes `\xHH`.
/// `decode_payload(&escape_payload(s))` returns `s` for any string.
pub fn escape_payload(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    out
}
