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

use crate::VecExt;
use crate::uleb128::Uleb128;
use std::{borrow::Borrow, io::Write};

/// Serializes a value into a freshly allocated buffer.
pub fn to_bytes<T: Serializable + ?Sized>(value: &T) -> std::io::Result<Vec<u8>> {
    let mut res = Vec::with_bounded_capacity(value.serialized_size());
    value.serialize(&mut res)?;
    Ok(res)
}

/// Canonical binary serialization.
///
/// Implementations must be deterministic: equal values always produce equal
/// bytes. See [`crate::Deserializable`] for the deserialization counterpart.
pub trait Serializable {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()>;
    fn serialized_size(&self) -> usize;
}

impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        <[T]>::serialize(self, writer)
    }
    fn serialized_size(&self) -> usize {
        <[T]>::serialized_size(self)
    }
}

impl<T: Serializable> Serializable for [T] {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        Uleb128::sequence_length(self.len())?.serialize(writer)?;
        for elem in self {
            elem.serialize(writer)?;
        }
        Ok(())
    }
    fn serialized_size(&self) -> usize {
        self.iter()
            .fold(Uleb128::encoded_len(self.len() as u64), |acc, x| {
                acc + x.serialized_size()
            })
    }
}

impl<'a, T> Serializable for &'a T
where
    T: Serializable + ?Sized + 'a,
    Self: Borrow<T>,
{
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        T::serialize(self, writer)
    }

    fn serialized_size(&self) -> usize {
        T::serialized_size(self)
    }
}

impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        match self {
            Some(v) => {
                true.serialize(writer)?;
                v.serialize(writer)
            }
            None => false.serialize(writer),
        }
    }

    fn serialized_size(&self) -> usize {
        match self {
            Some(v) => 1 + v.serialized_size(),
            None => 1,
        }
    }
}

impl Serializable for str {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        Uleb128::sequence_length(self.len())?.serialize(writer)?;
        writer.write_all(self.as_bytes())
    }

    fn serialized_size(&self) -> usize {
        let len = self.len();
        Uleb128::encoded_len(len as u64) + len
    }
}

impl Serializable for String {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        str::serialize(self, writer)
    }

    fn serialized_size(&self) -> usize {
        str::serialized_size(self)
    }
}

/// Fixed-size byte arrays carry no length prefix.
impl<const N: usize> Serializable for [u8; N] {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(&self[..])
    }
    fn serialized_size(&self) -> usize {
        N
    }
}

impl<T: Serializable + ?Sized> Serializable for Box<T> {
    fn serialize(&self, writer: &mut impl Write) -> std::io::Result<()> {
        T::serialize(self, writer)
    }
    fn serialized_size(&self) -> usize {
        T::serialized_size(self)
    }
}
