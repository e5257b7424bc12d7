//! Property-based tests for the round-trip, conversion and normalization
//! guarantees.

use proptest::prelude::*;

use lanevec::{hash_vector, BoolVector, ConvertTo, LaneAccess, Vector};

proptest! {
    /// Array → vector → array is the identity, for a spread of element
    /// kinds and lane counts.
    #[test]
    fn prop_array_roundtrip_i32x8(values: [i32; 8]) {
        let v = Vector::<i32, 8>::from_array(values);
        prop_assert_eq!(v.to_array(), values);
    }

    #[test]
    fn prop_array_roundtrip_u8x16(values: [u8; 16]) {
        let v = Vector::<u8, 16>::from_array(values);
        prop_assert_eq!(v.to_array(), values);
    }

    #[test]
    fn prop_array_roundtrip_u128x2(values: [u128; 2]) {
        let v = Vector::<u128, 2>::from_array(values);
        prop_assert_eq!(v.to_array(), values);
    }

    /// Bit-exact round trip for floats, NaN payloads included.
    #[test]
    fn prop_array_roundtrip_f64x4(values: [f64; 4]) {
        let v = Vector::<f64, 4>::from_array(values);
        prop_assert_eq!(v.to_array().map(f64::to_bits), values.map(f64::to_bits));
    }

    /// Value conversion applies the scalar cast per lane, nothing else.
    #[test]
    fn prop_float_to_int_conversion_matches_scalar(values: [f32; 4]) {
        let v = Vector::<f32, 4>::from_array(values);
        let converted: Vector<i32, 4> = v.convert();
        prop_assert_eq!(converted.to_array(), values.map(|x| x as i32));
    }

    #[test]
    fn prop_widening_conversion_matches_scalar(values: [i16; 8]) {
        let v = Vector::<i16, 8>::from_array(values);
        let converted: Vector<f64, 8> = v.convert();
        prop_assert_eq!(converted.to_array(), values.map(f64::from));
    }

    /// Normalizing an all-bits-encoded comparison register equals direct
    /// construction from the booleans, and the predicates agree with a
    /// scalar reference loop.
    #[test]
    fn prop_bool_normalization(values: [bool; 4]) {
        let expanded = Vector::<i32, 4>::from_array(values.map(|b| if b { -1 } else { 0 }));
        let normalized = BoolVector::from_all_bits(expanded);
        prop_assert_eq!(normalized, BoolVector::<i32, 4>::from_array(values));

        prop_assert_eq!(normalized.any(), values.iter().any(|&b| b));
        prop_assert_eq!(normalized.all(), values.iter().all(|&b| b));
        prop_assert_eq!(normalized.none(), !values.iter().any(|&b| b));
        prop_assert_eq!(normalized.count_true(), values.iter().filter(|&&b| b).count());
    }

    /// The expand/normalize pair is a round trip on canonical vectors.
    #[test]
    fn prop_all_bits_roundtrip(values: [bool; 8]) {
        let b = BoolVector::<i16, 8>::from_array(values);
        prop_assert_eq!(BoolVector::from_all_bits(b.to_all_bits()), b);
    }

    /// Iteration yields the lanes in order.
    #[test]
    fn prop_iter_matches_array(values: [i64; 4]) {
        let v = Vector::<i64, 4>::from_array(values);
        let collected: Vec<i64> = v.iter().collect();
        prop_assert_eq!(collected, values.to_vec());
    }

    /// Display/parse round trip for integral vectors.
    #[test]
    fn prop_display_parse_roundtrip(values: [i64; 2]) {
        let v = Vector::<i64, 2>::from_array(values);
        let parsed: Vector<i64, 2> = v.to_string().parse().unwrap();
        prop_assert_eq!(parsed, v);
    }

    /// Hashing is content-determined.
    #[test]
    fn prop_equal_vectors_hash_equal(values: [u32; 4]) {
        let a = Vector::<u32, 4>::from_array(values);
        let b = Vector::<u32, 4>::from_array(values);
        prop_assert_eq!(hash_vector(&a), hash_vector(&b));
    }
}
