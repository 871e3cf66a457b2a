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

//! Settings that steer how on-chain values are rendered for display.

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// How a hex value should be rendered for display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// An encoded string, rendered as its text.
    Text,
    /// A number, rendered in decimal.
    Numeric,
}

/// Conversion settings, loadable from JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Move type names whose values are decoded as text by
    /// [`crate::ConversionUtils::hex_to_display_string`]. Every other type
    /// is treated as numeric.
    pub textual_kinds: Vec<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            textual_kinds: vec!["String".into(), "0x1::string::String".into()],
        }
    }
}

impl ConversionConfig {
    /// Parses a configuration from a JSON document. Missing fields keep
    /// their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConversionError> {
        serde_json::from_str(json).map_err(|e| ConversionError::Config(e.to_string()))
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConversionError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConversionError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), ?config, "loaded conversion config");
        Ok(config)
    }

    /// Resolves the display kind of a Move type name.
    pub fn value_kind(&self, type_name: &str) -> ValueKind {
        let type_name = type_name.trim();
        if self.textual_kinds.iter().any(|k| k == type_name) {
            ValueKind::Text
        } else {
            ValueKind::Numeric
        }
    }
}
