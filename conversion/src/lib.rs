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

#![deny(unreachable_pub)]
#![deny(missing_docs)]

//! Conversions between human-readable values and the BCS byte encodings
//! expected by Supra Move transaction arguments, plus a few hex helpers for
//! displaying on-chain values.
//!
//! All encoding rules are delegated to a [`CanonicalBackend`]. The default,
//! [`NativeBackend`], is built on `supra-bcs-serialize`; with the `bcs`
//! feature, [`BcsBackend`] delegates to the `bcs` crate instead.

mod adapter;
pub mod backend;
#[cfg(feature = "bcs")]
mod bcs_backend;
pub mod config;
pub mod display;
mod error;
pub mod types;

pub use adapter::ConversionUtils;
pub use backend::{CanonicalBackend, NativeBackend};
#[cfg(feature = "bcs")]
pub use bcs_backend::BcsBackend;
pub use config::{ConversionConfig, ValueKind};
pub use error::ConversionError;
pub use num_bigint::BigUint;
pub use types::{AccountAddress, ElementType, Identifier, VectorValues};
