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

//! The conversion helpers exposed as [`ConversionUtils`].

use crate::backend::{CanonicalBackend, NativeBackend};
use crate::config::{ConversionConfig, ValueKind};
use crate::display;
use crate::error::ConversionError;
use crate::types::{VectorValues, to_u256, to_u64};
use num_bigint::BigUint;
use serialize::MAX_SEQUENCE_LENGTH;

/// Converts human-readable values into the BCS bytes Supra transactions
/// expect, and back into text for display.
///
/// Every method is independent of every other; the only state is the
/// backend and the display configuration.
#[derive(Clone, Debug, Default)]
pub struct ConversionUtils<B = NativeBackend> {
    backend: B,
    config: ConversionConfig,
}

impl ConversionUtils<NativeBackend> {
    /// Conversions over [`NativeBackend`] with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: CanonicalBackend> ConversionUtils<B> {
    /// Conversions over a specific backend.
    pub fn with_backend(backend: B) -> Self {
        ConversionUtils {
            backend,
            config: ConversionConfig::default(),
        }
    }

    /// Replaces the display configuration.
    pub fn with_config(mut self, config: ConversionConfig) -> Self {
        self.config = config;
        self
    }

    /// The backend in use.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The display configuration in use.
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Encodes `name` as a Move identifier.
    pub fn string_to_identifier_bytes(&self, name: &str) -> Result<Vec<u8>, ConversionError> {
        self.backend.encode_identifier(name)
    }

    /// Encodes `value` as a length-prefixed UTF-8 string.
    pub fn serialize_string(&self, value: &str) -> Result<Vec<u8>, ConversionError> {
        self.backend.encode_str(value)
    }

    /// Decodes the output of [`Self::serialize_string`].
    pub fn deserialize_string(&self, bytes: &[u8]) -> Result<String, ConversionError> {
        self.backend.decode_str(bytes)
    }

    /// Parses a hex address into its 32 canonical bytes.
    pub fn address_to_bytes(&self, hex: &str) -> Result<Vec<u8>, ConversionError> {
        let address = self.backend.parse_address(hex)?;
        self.backend.encode_address(&address)
    }

    /// Decodes a canonical `vector<u8>`.
    pub fn deserialize_vector_of_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, ConversionError> {
        self.backend.decode_byte_vector(bytes)
    }

    /// Encodes `value` as 8 little-endian bytes.
    pub fn serialize_u64(&self, value: &BigUint) -> Result<Vec<u8>, ConversionError> {
        self.backend.encode_u64(to_u64(value)?)
    }

    /// Encodes `value` as 32 little-endian bytes.
    pub fn serialize_u256(&self, value: &BigUint) -> Result<Vec<u8>, ConversionError> {
        self.backend.encode_u256(&to_u256(value)?)
    }

    /// Encodes `value` as a single byte.
    pub fn serialize_bool(&self, value: bool) -> Result<Vec<u8>, ConversionError> {
        self.backend.encode_bool(value)
    }

    /// Encodes a vector: its element count as ULEB128, then every element
    /// with the encoding of its type.
    pub fn serialize_vector(&self, values: &VectorValues) -> Result<Vec<u8>, ConversionError> {
        if values.len() > MAX_SEQUENCE_LENGTH {
            return Err(ConversionError::ValueOutOfRange {
                value: values.len().to_string(),
                width: "vector length",
            });
        }
        let mut res = self.backend.encode_sequence_length(values.len())?;
        let b = &self.backend;
        match values {
            VectorValues::U8(elems) => {
                for elem in elems {
                    res.extend(b.encode_u8(*elem)?);
                }
            }
            VectorValues::U64(elems) => {
                for elem in elems {
                    res.extend(b.encode_u64(to_u64(elem)?)?);
                }
            }
            VectorValues::Bool(elems) => {
                for elem in elems {
                    res.extend(b.encode_bool(*elem)?);
                }
            }
            VectorValues::String(elems) => {
                for elem in elems {
                    res.extend(b.encode_str(elem)?);
                }
            }
            VectorValues::Address(elems) => {
                for elem in elems {
                    res.extend(b.encode_address(&b.parse_address(elem)?)?);
                }
            }
        }
        Ok(res)
    }

    /// The display kind configured for a Move type name.
    pub fn value_kind(&self, type_name: &str) -> ValueKind {
        self.config.value_kind(type_name)
    }

    /// Renders an on-chain hex value for display. Never fails: decoding
    /// errors are logged and `hex` is returned unchanged.
    pub fn hex_to_display_string(&self, hex: &str, kind: ValueKind) -> String {
        display::hex_to_display_string(&self.backend, hex, kind)
    }

    /// Like [`Self::hex_to_display_string`], resolving the kind from a Move
    /// type name through the configuration.
    pub fn hex_to_display_string_for_type(&self, hex: &str, type_name: &str) -> String {
        self.hex_to_display_string(hex, self.value_kind(type_name))
    }

    /// Lowercase hex of the UTF-8 bytes of `text`, without a prefix.
    pub fn text_to_hex(&self, text: &str) -> String {
        display::text_to_hex(text)
    }
}
