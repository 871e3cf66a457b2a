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

use crate::uleb128::Uleb128;
use crate::{Deserializable, Serializable};
use ethnum::U256;
use std::io::Read;

pub trait VecExt {
    fn with_bounded_capacity(n: usize) -> Self;
}

impl<T> VecExt for Vec<T> {
    fn with_bounded_capacity(n: usize) -> Self {
        const MEMORY_LIMIT: usize = 1 << 25; // 32 MiB
        let alloc_limit = MEMORY_LIMIT / std::mem::size_of::<T>().max(1);
        Self::with_capacity(usize::min(alloc_limit, n))
    }
}

pub trait ReadExt: Read {
    fn read_exact_to_vec(&mut self, n: usize) -> std::io::Result<Vec<u8>> {
        const CHUNK_SIZE: usize = 4096;
        let mut res = Vec::with_capacity(usize::min(n, CHUNK_SIZE));
        let mut len = 0;
        while n > len {
            let new_len = usize::min(n, len + CHUNK_SIZE);
            res.resize(new_len, 0);
            self.read_exact(&mut res[len..])?;
            len = new_len;
        }
        Ok(res)
    }
}

impl<R: Read> ReadExt for R {}

impl Serializable for bool {
    fn serialize(&self, writer: &mut impl std::io::Write) -> std::io::Result<()> {
        writer.write_all(&[*self as u8])
    }
    fn serialized_size(&self) -> usize {
        1
    }
}

impl Deserializable for bool {
    fn deserialize(reader: &mut impl Read, recursion_depth: u32) -> std::io::Result<Self> {
        match u8::deserialize(reader, recursion_depth)? {
            0 => Ok(false),
            1 => Ok(true),
            v => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid bool byte {v:#04x}"),
            )),
        }
    }
}

macro_rules! via_le_bytes {
    ($ty:ty, $len:expr_2021) => {
        impl Serializable for $ty {
            fn serialize(&self, writer: &mut impl std::io::Write) -> std::io::Result<()> {
                writer.write_all(&self.to_le_bytes()[..])
            }
            fn serialized_size(&self) -> usize {
                $len
            }
        }

        impl Deserializable for $ty {
            fn deserialize(reader: &mut impl Read, _recursion_depth: u32) -> std::io::Result<Self> {
                let mut buf = [0u8; $len];
                reader.read_exact(&mut buf[..])?;
                Ok(<$ty>::from_le_bytes(buf))
            }
        }
    };
}

via_le_bytes!(u8, 1);
via_le_bytes!(u16, 2);
via_le_bytes!(u32, 4);
via_le_bytes!(u64, 8);
via_le_bytes!(U256, 32);

// Fields are encoded back to back with no framing, as for a struct.
impl<A: Serializable, B: Serializable, C: Serializable> Serializable for (A, B, C) {
    fn serialize(&self, writer: &mut impl std::io::Write) -> std::io::Result<()> {
        self.0.serialize(writer)?;
        self.1.serialize(writer)?;
        self.2.serialize(writer)
    }

    fn serialized_size(&self) -> usize {
        self.0.serialized_size() + self.1.serialized_size() + self.2.serialized_size()
    }
}

impl<A: Deserializable, B: Deserializable, C: Deserializable> Deserializable for (A, B, C) {
    fn deserialize(reader: &mut impl Read, mut recursion_depth: u32) -> std::io::Result<Self> {
        Self::check_rec(&mut recursion_depth)?;
        let a = A::deserialize(reader, recursion_depth)?;
        let b = B::deserialize(reader, recursion_depth)?;
        Ok((a, b, C::deserialize(reader, recursion_depth)?))
    }
}

impl Deserializable for String {
    fn deserialize(reader: &mut impl Read, _recursion_depth: u32) -> std::io::Result<Self> {
        let len = Uleb128::read_sequence_length(reader)?;
        let vec = reader.read_exact_to_vec(len)?;
        String::from_utf8(vec).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[macro_export]
#[cfg(feature = "proptest")]
macro_rules! randomised_serialization_test {
    ($type:ident) => {
        serialize::randomised_serialization_test!($type < >);
    };
    ($type:ident < $($targ:ty),* >) => {
        #[cfg(test)]
        ::paste::paste! {
            #[allow(non_snake_case)]
            #[test]
            fn [<proptest_deserialize_ $type>]() where $type<$($targ),*>: proptest::prelude::Arbitrary {
                let mut runner = proptest::test_runner::TestRunner::default();

                runner.run(&<$type<$($targ),*> as proptest::prelude::Arbitrary>::arbitrary(), |v| {
                    let bytes = serialize::to_bytes(&v).unwrap();
                    let des_result: $type<$($targ),*> = serialize::from_bytes(&bytes).unwrap();
                    assert_eq!(des_result, v);

                    Ok(())
                }).unwrap();
            }

            #[allow(non_snake_case)]
            #[test]
            fn [<proptest_serialized_size_ $type>]() where $type<$($targ),*>: proptest::prelude::Arbitrary {
                let mut runner = proptest::test_runner::TestRunner::default();

                runner.run(&<$type<$($targ),*> as proptest::prelude::Arbitrary>::arbitrary(), |v| {
                    let mut bytes: Vec<u8> = Vec::new();
                    <$type<$($targ),*> as serialize::Serializable>::serialize(&v, &mut bytes).unwrap();
                    assert_eq!(bytes.len(), <$type<$($targ),*> as serialize::Serializable>::serialized_size(&v));

                    Ok(())
                }).unwrap();
            }

            #[allow(non_snake_case)]
            #[test]
            fn [<proptest_random_data_deserialize_ $type>]() {
                use rand::Rng;
                let mut rng = rand::thread_rng();

                for _ in 0..100 {
                    let size: u8 = rng.r#gen();
                    let mut bytes: Vec<u8> = Vec::new();
                    for _i in 0..size {
                        bytes.push(rng.r#gen())
                    }
                    let _ = <$type<$($targ),*> as serialize::Deserializable>::deserialize(&mut bytes.as_slice(), 0);
                }
            }
        }
    };
}

#[cfg(feature = "proptest")]
#[allow(unused)]
use crate as serialize;

#[cfg(feature = "proptest")]
randomised_serialization_test!(String);
#[cfg(feature = "proptest")]
randomised_serialization_test!(Vec<u8>);
