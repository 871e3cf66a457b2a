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

//! The serialization capability the conversion helpers are built on.

use crate::error::ConversionError;
use crate::types::{AccountAddress, Identifier};
use serialize::{U256, Uleb128, from_bytes, to_bytes};

/// Canonical encoding primitives.
///
/// Every implementation must produce bit-identical output: ULEB128 sequence
/// lengths, little-endian fixed-width integers, one-byte booleans and
/// 32-byte addresses.
pub trait CanonicalBackend {
    /// Encodes text as a Move identifier. Any string is accepted; callers
    /// wanting grammar checks build an [`Identifier`] with [`Identifier::new`].
    fn encode_identifier(&self, name: &str) -> Result<Vec<u8>, ConversionError>;

    /// Encodes a length-prefixed UTF-8 string.
    fn encode_str(&self, value: &str) -> Result<Vec<u8>, ConversionError>;

    /// Decodes a length-prefixed UTF-8 string, consuming all of `bytes`.
    fn decode_str(&self, bytes: &[u8]) -> Result<String, ConversionError>;

    /// Parses a hex account address.
    fn parse_address(&self, hex: &str) -> Result<AccountAddress, ConversionError> {
        AccountAddress::from_hex(hex)
    }

    /// Encodes an address as its 32 raw bytes.
    fn encode_address(&self, address: &AccountAddress) -> Result<Vec<u8>, ConversionError>;

    /// Encodes a single byte.
    fn encode_u8(&self, value: u8) -> Result<Vec<u8>, ConversionError>;

    /// Encodes a `u64` as 8 little-endian bytes.
    fn encode_u64(&self, value: u64) -> Result<Vec<u8>, ConversionError>;

    /// Encodes a `u256` as 32 little-endian bytes.
    fn encode_u256(&self, value: &U256) -> Result<Vec<u8>, ConversionError>;

    /// Encodes a boolean as `0x01` or `0x00`.
    fn encode_bool(&self, value: bool) -> Result<Vec<u8>, ConversionError>;

    /// Encodes the ULEB128 element count that precedes a sequence.
    fn encode_sequence_length(&self, len: usize) -> Result<Vec<u8>, ConversionError>;

    /// Decodes a `vector<u8>`, consuming all of `bytes`.
    fn decode_byte_vector(&self, bytes: &[u8]) -> Result<Vec<u8>, ConversionError>;
}

/// The default backend, built on `supra-bcs-serialize`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NativeBackend;

impl CanonicalBackend for NativeBackend {
    fn encode_identifier(&self, name: &str) -> Result<Vec<u8>, ConversionError> {
        Ok(to_bytes(&Identifier::new_unchecked(name))?)
    }

    fn encode_str(&self, value: &str) -> Result<Vec<u8>, ConversionError> {
        Ok(to_bytes(value)?)
    }

    fn decode_str(&self, bytes: &[u8]) -> Result<String, ConversionError> {
        Ok(from_bytes(bytes)?)
    }

    fn encode_address(&self, address: &AccountAddress) -> Result<Vec<u8>, ConversionError> {
        Ok(to_bytes(address)?)
    }

    fn encode_u8(&self, value: u8) -> Result<Vec<u8>, ConversionError> {
        Ok(to_bytes(&value)?)
    }

    fn encode_u64(&self, value: u64) -> Result<Vec<u8>, ConversionError> {
        Ok(to_bytes(&value)?)
    }

    fn encode_u256(&self, value: &U256) -> Result<Vec<u8>, ConversionError> {
        Ok(to_bytes(value)?)
    }

    fn encode_bool(&self, value: bool) -> Result<Vec<u8>, ConversionError> {
        Ok(to_bytes(&value)?)
    }

    fn encode_sequence_length(&self, len: usize) -> Result<Vec<u8>, ConversionError> {
        Ok(to_bytes(&Uleb128::sequence_length(len)?)?)
    }

    fn decode_byte_vector(&self, bytes: &[u8]) -> Result<Vec<u8>, ConversionError> {
        Ok(from_bytes(bytes)?)
    }
}
