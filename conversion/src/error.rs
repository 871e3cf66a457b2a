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

use thiserror::Error;

/// Errors produced while converting values to or from their canonical form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The string is not valid hex, or encodes more than 32 bytes.
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),

    /// The integer does not fit the target width.
    #[error("value {value} out of range for {width}")]
    ValueOutOfRange {
        /// Decimal rendering of the rejected value.
        value: String,
        /// The target type, e.g. `u64`.
        width: &'static str,
    },

    /// The bytes are not a canonical encoding of the requested type.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The string does not follow Move's identifier grammar.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The string is not an unsigned decimal or `0x` hex integer literal.
    #[error("invalid integer literal: {0:?}")]
    InvalidInteger(String),

    /// A configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for ConversionError {
    fn from(e: std::io::Error) -> Self {
        ConversionError::InvalidEncoding(e.to_string())
    }
}

impl From<const_hex::FromHexError> for ConversionError {
    fn from(e: const_hex::FromHexError) -> Self {
        ConversionError::InvalidEncoding(e.to_string())
    }
}

#[cfg(feature = "bcs")]
impl From<bcs::Error> for ConversionError {
    fn from(e: bcs::Error) -> Self {
        ConversionError::InvalidEncoding(e.to_string())
    }
}
