//! Hashing tests: per-lane hashes, lane folding and 128-bit halving.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lanevec::{hash_lanes, hash_vector, Complex, ComplexVector, Vector};

fn std_hash<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

mod determinism_tests {
    use super::*;

    #[test]
    fn test_equal_contents_hash_equal() {
        let a = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        let b = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        assert_eq!(hash_vector(&a), hash_vector(&b));
        assert_eq!(std_hash(&a), std_hash(&b));
    }

    #[test]
    fn test_one_lane_difference_changes_hash() {
        let a = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        for lane in 0..4 {
            let mut values = a.to_array();
            values[lane] += 1;
            let b = Vector::<i32, 4>::from_array(values);
            assert_ne!(hash_vector(&a), hash_vector(&b), "lane {lane}");
        }
    }

    #[test]
    fn test_lane_order_matters() {
        let a = Vector::<u8, 4>::from_array([1, 2, 3, 4]);
        let b = Vector::<u8, 4>::from_array([4, 3, 2, 1]);
        assert_ne!(hash_vector(&a), hash_vector(&b));
    }

    #[test]
    fn test_float_vectors_hash() {
        let a = Vector::<f64, 2>::from_array([1.5, -2.5]);
        let b = Vector::<f64, 2>::from_array([1.5, -2.5]);
        assert_eq!(std_hash(&a), std_hash(&b));

        let c = Vector::<f64, 2>::from_array([1.5, -2.4]);
        assert_ne!(hash_vector(&a), hash_vector(&c));
    }

    #[test]
    fn test_complex_vectors_hash() {
        let a = ComplexVector::<f32, 2>::from_array([
            Complex::new(1.0, 2.0),
            Complex::new(3.0, 4.0),
        ]);
        // Swapping re/im must change the hash.
        let b = ComplexVector::<f32, 2>::from_array([
            Complex::new(2.0, 1.0),
            Complex::new(4.0, 3.0),
        ]);
        assert_ne!(hash_vector(&a), hash_vector(&b));
        assert_eq!(std_hash(&a), std_hash(&a));
    }
}

mod wide_element_tests {
    use super::*;

    #[test]
    fn test_u128_high_half_participates() {
        let lo = Vector::<u128, 2>::from_array([1, 2]);
        let hi = Vector::<u128, 2>::from_array([1 | (1u128 << 64), 2]);
        // Same low halves, different high halves.
        assert_ne!(hash_vector(&lo), hash_vector(&hi));
    }

    #[test]
    fn test_i128_hashes_deterministically() {
        let v = Vector::<i128, 2>::from_array([-1, i128::MAX]);
        let w = Vector::<i128, 2>::from_array([-1, i128::MAX]);
        assert_eq!(hash_vector(&v), hash_vector(&w));
    }
}

mod lane_hash_tests {
    use super::*;

    #[test]
    fn test_hash_lanes_has_same_lane_count() {
        let v = Vector::<i16, 8>::from_fn(|i| i as i16);
        let hashes = hash_lanes(&v);
        assert_eq!(hashes.lanes(), 8);
        // Distinct inputs should produce distinct per-lane hashes.
        let values = hashes.to_array();
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(values[i], values[j]);
            }
        }
    }
}
