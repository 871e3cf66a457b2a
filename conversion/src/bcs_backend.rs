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

//! [`CanonicalBackend`] over the `bcs` crate.

use crate::backend::CanonicalBackend;
use crate::error::ConversionError;
use crate::types::{AccountAddress, Identifier};
use serialize::U256;

/// A backend delegating to the `bcs` crate through `serde`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BcsBackend;

impl CanonicalBackend for BcsBackend {
    fn encode_identifier(&self, name: &str) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::to_bytes(&Identifier::new_unchecked(name))?)
    }

    fn encode_str(&self, value: &str) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::to_bytes(value)?)
    }

    fn decode_str(&self, bytes: &[u8]) -> Result<String, ConversionError> {
        Ok(bcs::from_bytes(bytes)?)
    }

    fn encode_address(&self, address: &AccountAddress) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::to_bytes(address)?)
    }

    fn encode_u8(&self, value: u8) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::to_bytes(&value)?)
    }

    fn encode_u64(&self, value: u64) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::to_bytes(&value)?)
    }

    // serde has no 256-bit integer; fixed arrays are encoded without a prefix
    fn encode_u256(&self, value: &U256) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::to_bytes(&value.to_le_bytes())?)
    }

    fn encode_bool(&self, value: bool) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::to_bytes(&value)?)
    }

    // Unit elements encode to nothing, leaving only the length prefix.
    fn encode_sequence_length(&self, len: usize) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::to_bytes(&vec![(); len])?)
    }

    fn decode_byte_vector(&self, bytes: &[u8]) -> Result<Vec<u8>, ConversionError> {
        Ok(bcs::from_bytes(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NativeBackend;

    #[test]
    fn matches_native_on_fixed_examples() {
        let native = NativeBackend;
        let bcs = BcsBackend;
        assert_eq!(
            bcs.encode_str("supra").unwrap(),
            native.encode_str("supra").unwrap()
        );
        for name in ["mint", "hello world", "9lives", ""] {
            assert_eq!(
                bcs.encode_identifier(name).unwrap(),
                native.encode_identifier(name).unwrap()
            );
        }
        let addr = AccountAddress::from_hex("0xcafe").unwrap();
        assert_eq!(
            bcs.encode_address(&addr).unwrap(),
            native.encode_address(&addr).unwrap()
        );
        assert_eq!(
            bcs.encode_u256(&U256::new(1 << 100)).unwrap(),
            native.encode_u256(&U256::new(1 << 100)).unwrap()
        );
        for len in [0, 1, 127, 128, 300, 1 << 20] {
            assert_eq!(
                bcs.encode_sequence_length(len).unwrap(),
                native.encode_sequence_length(len).unwrap()
            );
        }
    }

    #[test]
    fn rejects_what_native_rejects() {
        let bcs = BcsBackend;
        assert!(bcs.decode_str(&[0x02, b'a']).is_err());
        assert!(bcs.decode_byte_vector(&[0x80, 0x00]).is_err());
        assert!(bcs.decode_byte_vector(&[0x01, 0x07, 0x00]).is_err());
    }
}
