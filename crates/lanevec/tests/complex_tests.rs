//! Complex family tests: split-component storage and cross-term arithmetic.

use lanevec::{Complex, ComplexVector, LaneAccess, Vector};

mod construction_tests {
    use super::*;

    #[test]
    fn test_split_components() {
        let c = ComplexVector::<f64, 2>::from_array([
            Complex::new(1.0, 2.0),
            Complex::new(3.0, 4.0),
        ]);
        assert_eq!(c.re().to_array(), [1.0, 3.0]);
        assert_eq!(c.im().to_array(), [2.0, 4.0]);
    }

    #[test]
    fn test_from_parts() {
        let re = Vector::<f32, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
        let im = Vector::<f32, 4>::splat(-1.0);
        let c = ComplexVector::from_parts(re, im);
        assert_eq!(c.get(2), Complex::new(3.0, -1.0));
    }

    #[test]
    fn test_lane_write_updates_both_components() {
        let mut c = ComplexVector::<f64, 2>::splat(Complex::new(0.0, 0.0));
        c.set(1, Complex::new(5.0, -6.0));
        assert_eq!(c.re().to_array(), [0.0, 5.0]);
        assert_eq!(c.im().to_array(), [0.0, -6.0]);
    }

    #[test]
    fn test_proxy_write_updates_both_components() {
        let mut c = ComplexVector::<f32, 2>::splat(Complex::new(1.0, 1.0));
        c.lane_mut(0).set(Complex::new(9.0, -9.0));
        assert_eq!(c.get(0), Complex::new(9.0, -9.0));
        assert_eq!(c.get(1), Complex::new(1.0, 1.0));
    }
}

mod arithmetic_tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = ComplexVector::<f64, 2>::from_array([
            Complex::new(1.0, 2.0),
            Complex::new(3.0, 4.0),
        ]);
        let b = ComplexVector::<f64, 2>::splat(Complex::new(1.0, -1.0));
        assert_eq!((a + b).get(0), Complex::new(2.0, 1.0));
        assert_eq!((a - b).get(1), Complex::new(2.0, 5.0));
    }

    #[test]
    fn test_cross_term_multiply() {
        // (1+2i)(2+0i) = 2+4i, (3+4i)(0+1i) = -4+3i
        let a = ComplexVector::<f64, 2>::from_array([
            Complex::new(1.0, 2.0),
            Complex::new(3.0, 4.0),
        ]);
        let b = ComplexVector::<f64, 2>::from_array([
            Complex::new(2.0, 0.0),
            Complex::new(0.0, 1.0),
        ]);
        let product = a * b;
        assert_eq!(product.get(0), Complex::new(2.0, 4.0));
        assert_eq!(product.get(1), Complex::new(-4.0, 3.0));
    }

    #[test]
    fn test_divide_inverts_multiply() {
        let a = ComplexVector::<f64, 4>::from_array([
            Complex::new(1.0, 2.0),
            Complex::new(-3.0, 4.0),
            Complex::new(0.5, -0.5),
            Complex::new(10.0, 0.0),
        ]);
        let b = ComplexVector::<f64, 4>::splat(Complex::new(2.0, -1.0));
        let q = (a * b) / b;
        for i in 0..4 {
            assert!((q.get(i).re - a.get(i).re).abs() < 1e-12);
            assert!((q.get(i).im - a.get(i).im).abs() < 1e-12);
        }
    }

    #[test]
    fn test_conj_norm_sqr() {
        let a = ComplexVector::<f32, 2>::from_array([
            Complex::new(3.0, 4.0),
            Complex::new(-1.0, 1.0),
        ]);
        assert_eq!(a.conj().get(0), Complex::new(3.0, -4.0));
        assert_eq!(a.norm_sqr().to_array(), [25.0, 2.0]);
    }

    #[test]
    fn test_simd_eq() {
        let a = ComplexVector::<f64, 2>::from_array([
            Complex::new(1.0, 2.0),
            Complex::new(3.0, 4.0),
        ]);
        let b = ComplexVector::<f64, 2>::from_array([
            Complex::new(1.0, 2.0),
            Complex::new(3.0, -4.0),
        ]);
        assert_eq!(a.simd_eq(&b).to_array(), [true, false]);
        assert_eq!(a.simd_ne(&b).to_array(), [false, true]);
    }
}
