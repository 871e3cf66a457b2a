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
#![deny(warnings)]

//! Binary Canonical Serialization (BCS) as used by Supra Move transaction
//! payloads: ULEB128 sequence lengths, fixed-width little-endian integers,
//! one-byte booleans and length-prefixed UTF-8 strings.

mod deserializable;
mod serializable;
mod uleb128;
mod util;

pub use crate::deserializable::{Deserializable, RECURSION_LIMIT, from_bytes};
pub use crate::serializable::{Serializable, to_bytes};
pub use crate::uleb128::{MAX_SEQUENCE_LENGTH, Uleb128};
pub use crate::util::{ReadExt, VecExt};
pub use ethnum::U256;
