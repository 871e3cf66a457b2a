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

//! Typed forms of the values accepted by the conversion helpers.

use crate::error::ConversionError;
use const_hex::ToHexExt;
use num_bigint::BigUint;
use serde::Serialize;
use serialize::{Serializable, U256};
use std::fmt::{self, Debug, Display, Formatter};
use std::io::Write;
use std::str::FromStr;

/// The number of bytes in an [`AccountAddress`].
pub const ADDRESS_LENGTH: usize = 32;

/// A Supra account address.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AccountAddress(pub [u8; ADDRESS_LENGTH]);

impl AccountAddress {
    /// Parses a hex address, with or without a `0x` prefix.
    ///
    /// Short forms such as `0x1` are left-padded with zeros, and an odd
    /// number of digits is accepted. More than 64 digits, or any character
    /// that is not a hex digit, is rejected.
    pub fn from_hex(hex: &str) -> Result<Self, ConversionError> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        if digits.len() > ADDRESS_LENGTH * 2 {
            return Err(ConversionError::InvalidAddressFormat(format!(
                "{hex:?} is longer than {ADDRESS_LENGTH} bytes"
            )));
        }
        let padded = format!("{digits:0>width$}", width = ADDRESS_LENGTH * 2);
        const_hex::decode_to_array(padded)
            .map(AccountAddress)
            .map_err(|e| ConversionError::InvalidAddressFormat(format!("{hex:?}: {e}")))
    }
}

impl FromStr for AccountAddress {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountAddress::from_hex(s)
    }
}

impl Debug for AccountAddress {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0.encode_hex_with_prefix())
    }
}

impl Display for AccountAddress {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0.encode_hex_with_prefix())
    }
}

impl Serializable for AccountAddress {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        Serializable::serialize(&self.0, writer)
    }
    fn serialized_size(&self) -> usize {
        ADDRESS_LENGTH
    }
}

/// A Move identifier, such as a module or function name.
///
/// Encoded exactly like a string. [`Identifier::new`] enforces Move's
/// identifier grammar; [`Identifier::new_unchecked`] accepts any text, which
/// is what argument encoding uses.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Identifier(String);

impl Identifier {
    /// Validates `name` against the identifier grammar:
    /// `[A-Za-z][A-Za-z0-9_]*` or `_[A-Za-z0-9_]+`.
    pub fn new(name: impl Into<String>) -> Result<Self, ConversionError> {
        let name = name.into();
        if Identifier::is_valid(&name) {
            Ok(Identifier(name))
        } else {
            Err(ConversionError::InvalidIdentifier(name))
        }
    }

    /// Wraps `name` without checking it against the identifier grammar.
    pub fn new_unchecked(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    /// Whether `name` follows the identifier grammar.
    pub fn is_valid(name: &str) -> bool {
        let valid_tail = |b: &u8| b.is_ascii_alphanumeric() || *b == b'_';
        match name.as_bytes() {
            [first, rest @ ..] if first.is_ascii_alphabetic() => rest.iter().all(valid_tail),
            [b'_', rest @ ..] => !rest.is_empty() && rest.iter().all(valid_tail),
            _ => false,
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Serializable for Identifier {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        Serializable::serialize(&self.0, writer)
    }
    fn serialized_size(&self) -> usize {
        self.0.serialized_size()
    }
}

/// Narrows an arbitrary-precision integer to `u64`.
pub fn to_u64(value: &BigUint) -> Result<u64, ConversionError> {
    u64::try_from(value).map_err(|_| ConversionError::ValueOutOfRange {
        value: value.to_string(),
        width: "u64",
    })
}

/// Narrows an arbitrary-precision integer to `u256`.
pub fn to_u256(value: &BigUint) -> Result<U256, ConversionError> {
    if value.bits() > 256 {
        return Err(ConversionError::ValueOutOfRange {
            value: value.to_string(),
            width: "u256",
        });
    }
    let mut le_bytes = [0u8; 32];
    let digits = value.to_bytes_le();
    le_bytes[..digits.len()].copy_from_slice(&digits);
    Ok(U256::from_le_bytes(le_bytes))
}

/// Parses an unsigned integer literal, either decimal or `0x`-prefixed hex.
pub fn parse_integer(literal: &str) -> Result<BigUint, ConversionError> {
    let (digits, radix) = match literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (literal, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ConversionError::InvalidInteger(literal.to_owned()));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| ConversionError::InvalidInteger(literal.to_owned()))
}

/// The element type of a vector argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// `u8`, one byte per element.
    U8,
    /// `u64`, eight little-endian bytes per element.
    U64,
    /// `bool`, one byte per element.
    Bool,
    /// `0x1::string::String`, length-prefixed UTF-8.
    String,
    /// `address`, 32 bytes per element.
    Address,
}

impl ElementType {
    /// The Move spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::U8 => "u8",
            ElementType::U64 => "u64",
            ElementType::Bool => "bool",
            ElementType::String => "string",
            ElementType::Address => "address",
        }
    }
}

impl Display for ElementType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u8" => Ok(ElementType::U8),
            "u64" => Ok(ElementType::U64),
            "bool" => Ok(ElementType::Bool),
            "string" | "String" => Ok(ElementType::String),
            "address" => Ok(ElementType::Address),
            other => Err(format!(
                "unsupported element type {other:?}, expected one of u8, u64, bool, string, address"
            )),
        }
    }
}

/// A homogeneous vector argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorValues {
    /// `vector<u8>`
    U8(Vec<u8>),
    /// `vector<u64>`; elements are range-checked when encoded.
    U64(Vec<BigUint>),
    /// `vector<bool>`
    Bool(Vec<bool>),
    /// `vector<0x1::string::String>`
    String(Vec<String>),
    /// `vector<address>`, as hex strings parsed when encoded.
    Address(Vec<String>),
}

impl VectorValues {
    /// Parses textual elements as `element_type`.
    pub fn parse<S: AsRef<str>>(
        element_type: ElementType,
        elements: &[S],
    ) -> Result<Self, ConversionError> {
        let strs = elements.iter().map(AsRef::<str>::as_ref);
        Ok(match element_type {
            ElementType::U8 => VectorValues::U8(
                strs.map(|s| {
                    let value = parse_integer(s)?;
                    u8::try_from(&value).map_err(|_| ConversionError::ValueOutOfRange {
                        value: value.to_string(),
                        width: "u8",
                    })
                })
                .collect::<Result<_, _>>()?,
            ),
            ElementType::U64 => VectorValues::U64(strs.map(parse_integer).collect::<Result<_, _>>()?),
            ElementType::Bool => VectorValues::Bool(
                strs.map(|s| match s {
                    "true" => Ok(true),
                    "false" => Ok(false),
                    other => Err(ConversionError::InvalidEncoding(format!(
                        "{other:?} is not a bool"
                    ))),
                })
                .collect::<Result<_, _>>()?,
            ),
            ElementType::String => VectorValues::String(strs.map(str::to_owned).collect()),
            ElementType::Address => VectorValues::Address(strs.map(str::to_owned).collect()),
        })
    }

    /// The shared type of every element.
    pub fn element_type(&self) -> ElementType {
        match self {
            VectorValues::U8(_) => ElementType::U8,
            VectorValues::U64(_) => ElementType::U64,
            VectorValues::Bool(_) => ElementType::Bool,
            VectorValues::String(_) => ElementType::String,
            VectorValues::Address(_) => ElementType::Address,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        match self {
            VectorValues::U8(v) => v.len(),
            VectorValues::U64(v) => v.len(),
            VectorValues::Bool(v) => v.len(),
            VectorValues::String(v) | VectorValues::Address(v) => v.len(),
        }
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_short_form_is_left_padded() {
        let addr = AccountAddress::from_hex("0x1").unwrap();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(addr.0, expected);
        assert_eq!(
            addr.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn address_accepts_odd_digits_and_no_prefix() {
        let addr = AccountAddress::from_hex("abc").unwrap();
        assert_eq!(&addr.0[30..], &[0x0a, 0xbc]);
        assert_eq!(AccountAddress::from_hex("0XABC").unwrap(), addr);
    }

    #[test]
    fn address_full_length_round_trips() {
        let hex = "0x88fbd33f54e1126269769780feb24480428179f552e2313fbe571b72e62a1ca1";
        let addr: AccountAddress = hex.parse().unwrap();
        assert_eq!(addr.to_string(), hex);
    }

    #[test]
    fn address_rejects_bad_input() {
        assert!(matches!(
            AccountAddress::from_hex("0xzz"),
            Err(ConversionError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            AccountAddress::from_hex(&format!("0x{}", "1".repeat(65))),
            Err(ConversionError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            AccountAddress::from_hex("0x12 34"),
            Err(ConversionError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn identifier_grammar() {
        for valid in ["transfer", "A", "coin_v2", "_x", "__"] {
            assert!(Identifier::is_valid(valid), "{valid}");
        }
        for invalid in ["", "_", "2fast", "has-dash", "spa ce", "ünïcode"] {
            assert!(!Identifier::is_valid(invalid), "{invalid}");
        }
        assert_eq!(
            Identifier::new("1abc"),
            Err(ConversionError::InvalidIdentifier("1abc".into()))
        );
    }

    #[test]
    fn address_encodes_as_raw_bytes() {
        let addr = AccountAddress::from_hex("0xcafe").unwrap();
        let bytes = serialize::to_bytes(&addr).unwrap();
        assert_eq!(bytes, addr.0.to_vec());
        assert_eq!(Serializable::serialized_size(&addr), bytes.len());
    }

    #[test]
    fn unchecked_identifier_keeps_any_text() {
        let ident = Identifier::new_unchecked("hello world");
        assert_eq!(ident.as_str(), "hello world");
        assert_eq!(
            serialize::to_bytes(&ident).unwrap(),
            serialize::to_bytes("hello world").unwrap()
        );
    }

    #[test]
    fn integer_narrowing() {
        assert_eq!(to_u64(&BigUint::from(u64::MAX)).unwrap(), u64::MAX);
        assert!(matches!(
            to_u64(&(BigUint::from(u64::MAX) + 1u32)),
            Err(ConversionError::ValueOutOfRange { width: "u64", .. })
        ));
        let max256 = (BigUint::from(1u32) << 256) - 1u32;
        assert_eq!(to_u256(&max256).unwrap(), U256::MAX);
        assert!(to_u256(&(max256 + 1u32)).is_err());
        assert_eq!(to_u256(&BigUint::from(0u32)).unwrap(), U256::ZERO);
    }

    #[test]
    fn integer_literals() {
        assert_eq!(parse_integer("42").unwrap(), BigUint::from(42u32));
        assert_eq!(parse_integer("0xff").unwrap(), BigUint::from(255u32));
        for bad in ["", "0x", "-1", "1_000", "12a"] {
            assert!(parse_integer(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn parse_vector_values() {
        let values = VectorValues::parse(ElementType::U8, &["1", "0x10"]).unwrap();
        assert_eq!(values, VectorValues::U8(vec![1, 16]));
        assert!(VectorValues::parse(ElementType::U8, &["256"]).is_err());
        let values = VectorValues::parse(ElementType::Bool, &["true", "false"]).unwrap();
        assert_eq!(values.element_type(), ElementType::Bool);
        assert_eq!(values.len(), 2);
        assert!(VectorValues::parse(ElementType::Bool, &["yes"]).is_err());
    }

    #[test]
    fn element_type_names() {
        for ty in [
            ElementType::U8,
            ElementType::U64,
            ElementType::Bool,
            ElementType::String,
            ElementType::Address,
        ] {
            assert_eq!(ty.as_str().parse::<ElementType>(), Ok(ty));
        }
        assert!("u128".parse::<ElementType>().is_err());
    }
}
