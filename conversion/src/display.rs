// This file is part of supra-conversion.
// Copyright (C) 2025 Supra Conversion Contributors
// SPDX-License-Identifier: Apache-2.0
// Licensed under the Apache License, Version 2.0 (the "License");
// You may not use this file except in compliance with the License.
// You may obtain a copy of the License at
// http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hex helpers for showing values to people. None of these produce canonical
//! encodings.

use crate::backend::CanonicalBackend;
use crate::config::ValueKind;
use crate::error::ConversionError;
use num_bigint::BigInt;
use tracing::warn;

/// Lowercase hex of the UTF-8 bytes of `text`, without a prefix.
pub fn text_to_hex(text: &str) -> String {
    const_hex::encode(text.as_bytes())
}

/// `0x`-prefixed lowercase hex of `bytes`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    const_hex::encode_prefixed(bytes)
}

/// Decodes hex with an optional `0x` prefix.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, ConversionError> {
    Ok(const_hex::decode(hex)?)
}

/// Renders an on-chain hex value for display.
///
/// Textual values are decoded as canonical strings; anything else is read
/// as an integer and printed in decimal. Empty input yields an empty string.
/// Failures are logged and the input is returned as-is.
pub fn hex_to_display_string<B: CanonicalBackend + ?Sized>(
    backend: &B,
    hex: &str,
    kind: ValueKind,
) -> String {
    if hex.is_empty() {
        return String::new();
    }
    let rendered = match kind {
        ValueKind::Text => hex_to_bytes(hex).and_then(|bytes| backend.decode_str(&bytes)),
        ValueKind::Numeric => parse_display_integer(hex).map(|n| n.to_string()),
    };
    rendered.unwrap_or_else(|error| {
        warn!(hex, ?kind, %error, "error converting hex to display string");
        hex.to_owned()
    })
}

/// Reads an integer the way on-chain view results present them: `0x`, `0o`
/// or `0b` prefixed digits, or a signed decimal. Surrounding whitespace is
/// ignored, and blank input reads as zero.
fn parse_display_integer(literal: &str) -> Result<BigInt, ConversionError> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Ok(BigInt::default());
    }
    let prefixed = |prefix: [&str; 2]| {
        prefix
            .iter()
            .find_map(|p| trimmed.strip_prefix(p))
    };
    let (digits, radix) = if let Some(d) = prefixed(["0x", "0X"]) {
        (d, 16)
    } else if let Some(d) = prefixed(["0o", "0O"]) {
        (d, 8)
    } else if let Some(d) = prefixed(["0b", "0B"]) {
        (d, 2)
    } else {
        let unsigned = trimmed.trim_start_matches(['+', '-']);
        if trimmed.len() - unsigned.len() > 1 {
            return Err(ConversionError::InvalidInteger(literal.to_owned()));
        }
        (unsigned, 10)
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ConversionError::InvalidInteger(literal.to_owned()));
    }
    let source = if radix == 10 { trimmed } else { digits };
    BigInt::parse_bytes(source.as_bytes(), radix)
        .ok_or_else(|| ConversionError::InvalidInteger(literal.to_owned()))
}
