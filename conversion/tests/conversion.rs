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

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use supra_conversion::*;

    fn native() -> ConversionUtils<NativeBackend> {
        ConversionUtils::new()
    }

    fn bcs() -> ConversionUtils<BcsBackend> {
        ConversionUtils::with_backend(BcsBackend)
    }

    fn biguint_below_bits(bits: u32) -> impl Strategy<Value = BigUint> {
        proptest::collection::vec(any::<u8>(), 0..=(bits as usize / 8))
            .prop_map(|le| BigUint::from_bytes_le(&le))
    }

    fn address_hex() -> impl Strategy<Value = String> {
        "(0x)?[0-9a-fA-F]{0,64}"
    }

    proptest! {
        #[test]
        fn string_round_trip(s in any::<String>()) {
            let bytes = native().serialize_string(&s).unwrap();
            prop_assert_eq!(native().deserialize_string(&bytes).unwrap(), s.clone());
            prop_assert_eq!(bcs().deserialize_string(&bytes).unwrap(), s);
        }

        #[test]
        fn u64_is_eight_le_bytes(v in any::<u64>()) {
            let bytes = native().serialize_u64(&BigUint::from(v)).unwrap();
            prop_assert_eq!(bytes, v.to_le_bytes().to_vec());
        }

        #[test]
        fn u256_is_32_le_bytes(v in biguint_below_bits(256)) {
            let bytes = native().serialize_u256(&v).unwrap();
            prop_assert_eq!(bytes.len(), 32);
            prop_assert_eq!(BigUint::from_bytes_le(&bytes), v.clone());
            prop_assert_eq!(bcs().serialize_u256(&v).unwrap(), bytes);
        }

        #[test]
        fn backends_agree_on_strings(s in any::<String>()) {
            prop_assert_eq!(
                native().serialize_string(&s).unwrap(),
                bcs().serialize_string(&s).unwrap()
            );
        }

        #[test]
        fn backends_agree_on_identifiers(name in any::<String>()) {
            let bytes = native().string_to_identifier_bytes(&name).unwrap();
            prop_assert_eq!(&bcs().string_to_identifier_bytes(&name).unwrap(), &bytes);
            prop_assert_eq!(bytes, native().serialize_string(&name).unwrap());
        }

        #[test]
        fn backends_agree_on_addresses(hex in address_hex()) {
            let bytes = native().address_to_bytes(&hex).unwrap();
            prop_assert_eq!(bytes.len(), 32);
            prop_assert_eq!(bcs().address_to_bytes(&hex).unwrap(), bytes);
        }

        #[test]
        fn backends_agree_on_byte_vectors(v in proptest::collection::vec(any::<u8>(), 0..400)) {
            let values = VectorValues::U8(v.clone());
            let bytes = native().serialize_vector(&values).unwrap();
            prop_assert_eq!(&bcs().serialize_vector(&values).unwrap(), &bytes);
            prop_assert_eq!(native().deserialize_vector_of_bytes(&bytes).unwrap(), v.clone());
            prop_assert_eq!(bcs().deserialize_vector_of_bytes(&bytes).unwrap(), v);
        }

        #[test]
        fn backends_agree_on_u64_vectors(v in proptest::collection::vec(any::<u64>(), 0..50)) {
            let values = VectorValues::U64(v.iter().copied().map(BigUint::from).collect());
            let bytes = native().serialize_vector(&values).unwrap();
            prop_assert_eq!(bcs().serialize_vector(&values).unwrap(), bytes);
        }

        #[test]
        fn backends_agree_on_bool_vectors(v in proptest::collection::vec(any::<bool>(), 0..200)) {
            let values = VectorValues::Bool(v);
            prop_assert_eq!(
                native().serialize_vector(&values).unwrap(),
                bcs().serialize_vector(&values).unwrap()
            );
        }

        #[test]
        fn backends_agree_on_string_vectors(v in proptest::collection::vec(any::<String>(), 0..20)) {
            let values = VectorValues::String(v);
            prop_assert_eq!(
                native().serialize_vector(&values).unwrap(),
                bcs().serialize_vector(&values).unwrap()
            );
        }

        #[test]
        fn backends_agree_on_address_vectors(v in proptest::collection::vec(address_hex(), 0..10)) {
            let values = VectorValues::Address(v);
            prop_assert_eq!(
                native().serialize_vector(&values).unwrap(),
                bcs().serialize_vector(&values).unwrap()
            );
        }

        #[test]
        fn backends_agree_on_garbage(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(
                native().deserialize_vector_of_bytes(&bytes).is_ok(),
                bcs().deserialize_vector_of_bytes(&bytes).is_ok()
            );
            prop_assert_eq!(
                native().deserialize_string(&bytes).ok(),
                bcs().deserialize_string(&bytes).ok()
            );
        }

        #[test]
        fn text_display_inverts_string_encoding(s in any::<String>()) {
            let hex = display::bytes_to_hex(&native().serialize_string(&s).unwrap());
            prop_assert_eq!(native().hex_to_display_string(&hex, ValueKind::Text), s);
        }

        #[test]
        fn numeric_display_is_decimal(v in any::<u128>()) {
            let hex = format!("{v:#x}");
            prop_assert_eq!(native().hex_to_display_string(&hex, ValueKind::Numeric), v.to_string());
        }

        #[test]
        fn text_to_hex_is_utf8_hex(s in any::<String>()) {
            let hex = native().text_to_hex(&s);
            prop_assert_eq!(hex.len(), s.len() * 2);
            prop_assert_eq!(display::hex_to_bytes(&hex).unwrap(), s.as_bytes().to_vec());
            prop_assert!(!hex.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn documented_examples() {
        assert_eq!(native().serialize_bool(true).unwrap(), vec![0x01]);
        assert_eq!(native().serialize_bool(false).unwrap(), vec![0x00]);
        assert_eq!(native().serialize_vector(&VectorValues::U8(vec![])).unwrap(), vec![0x00]);
        assert_eq!(native().text_to_hex("A"), "41");
        assert_eq!(native().text_to_hex(""), "");
        assert_eq!(native().hex_to_display_string("", ValueKind::Text), "");
        assert!(matches!(
            native().address_to_bytes("0x123g"),
            Err(ConversionError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            bcs().address_to_bytes("0x123g"),
            Err(ConversionError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn identifiers_accept_free_text() {
        for bytes in [
            native().string_to_identifier_bytes("hello world").unwrap(),
            bcs().string_to_identifier_bytes("hello world").unwrap(),
        ] {
            assert_eq!(
                display::bytes_to_hex(&bytes),
                "0x0b68656c6c6f20776f726c64"
            );
        }
    }

    #[test]
    fn out_of_range_is_reported_by_both_backends() {
        let too_big = BigUint::from(u64::MAX) + 1u32;
        for result in [native().serialize_u64(&too_big), bcs().serialize_u64(&too_big)] {
            assert!(matches!(
                result,
                Err(ConversionError::ValueOutOfRange { width: "u64", .. })
            ));
        }
    }

    #[test]
    fn known_transfer_arguments() {
        // 0x1::supra_account::transfer(to: address, amount: u64)
        let to = native()
            .address_to_bytes("0x88fbd33f54e1126269769780feb24480428179f552e2313fbe571b72e62a1ca1")
            .unwrap();
        assert_eq!(
            display::bytes_to_hex(&to),
            "0x88fbd33f54e1126269769780feb24480428179f552e2313fbe571b72e62a1ca1"
        );
        let amount = native().serialize_u64(&BigUint::from(100_000_000u64)).unwrap();
        assert_eq!(display::bytes_to_hex(&amount), "0x00e1f50500000000");
        assert_eq!(
            display::bytes_to_hex(&native().string_to_identifier_bytes("supra_account").unwrap()),
            "0x0d73757072615f6163636f756e74"
        );
    }
}
