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

use crate::{Deserializable, Serializable};
use std::io::{Read, Write};

/// The largest number of elements (or bytes, for strings) a sequence may hold.
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

const CONTINUATION_BIT: u8 = 0b1000_0000;
const PAYLOAD_BITS: u8 = 0b0111_1111;

/// A `u32` in unsigned LEB128 form, as used for sequence lengths and enum
/// variant indices.
///
/// Only the minimal encoding of each value is accepted on decode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uleb128(pub u32);

impl Uleb128 {
    /// Validates a sequence length against [`MAX_SEQUENCE_LENGTH`].
    pub fn sequence_length(len: usize) -> std::io::Result<Self> {
        if len > MAX_SEQUENCE_LENGTH {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("sequence length {len} exceeds maximum of {MAX_SEQUENCE_LENGTH}"),
            ));
        }
        Ok(Uleb128(len as u32))
    }

    /// Decodes a sequence length, rejecting lengths above [`MAX_SEQUENCE_LENGTH`].
    pub fn read_sequence_length(reader: &mut impl Read) -> std::io::Result<usize> {
        let len = Uleb128::deserialize(reader, 0)?.0 as usize;
        if len > MAX_SEQUENCE_LENGTH {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("sequence length {len} exceeds maximum of {MAX_SEQUENCE_LENGTH}"),
            ));
        }
        Ok(len)
    }

    /// Number of bytes `value` occupies once encoded.
    pub const fn encoded_len(value: u64) -> usize {
        let bits = 64 - (value | 1).leading_zeros() as usize;
        bits.div_ceil(7)
    }
}

impl From<u32> for Uleb128 {
    fn from(value: u32) -> Self {
        Uleb128(value)
    }
}

impl Serializable for Uleb128 {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        let mut buf = [0u8; 5];
        let mut value = self.0;
        let mut n = 0;
        loop {
            let byte = (value as u8) & PAYLOAD_BITS;
            value >>= 7;
            if value == 0 {
                buf[n] = byte;
                n += 1;
                break;
            }
            buf[n] = byte | CONTINUATION_BIT;
            n += 1;
        }
        writer.write_all(&buf[..n])
    }

    fn serialized_size(&self) -> usize {
        Uleb128::encoded_len(self.0 as u64)
    }
}

impl Deserializable for Uleb128 {
    fn deserialize(reader: &mut impl Read, recursion_depth: u32) -> std::io::Result<Self> {
        let mut value = 0u64;
        for shift in (0..32).step_by(7) {
            let byte = u8::deserialize(reader, recursion_depth)?;
            let digit = byte & PAYLOAD_BITS;
            value |= (digit as u64) << shift;
            if digit == byte {
                if shift > 0 && digit == 0 {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "non-canonical uleb128 encoding",
                    ));
                }
                return u32::try_from(value).map(Uleb128).map_err(|_| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "uleb128 value out of range for u32",
                    )
                });
            }
        }
        Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "uleb128 value out of range for u32",
        ))
    }
}
