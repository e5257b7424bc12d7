//! Formatted I/O tests: display, parsing and partial fills.

use lanevec::{
    BoolVector, Complex, ComplexVector, FillError, LaneAccess, ParseVectorError, Vector,
};

mod display_tests {
    use super::*;

    #[test]
    fn test_vector_display() {
        let v = Vector::<i32, 4>::from_array([1, -2, 3, -4]);
        assert_eq!(v.to_string(), "(1;-2;3;-4)");
    }

    #[test]
    fn test_float_display() {
        let v = Vector::<f64, 2>::from_array([1.5, -0.25]);
        assert_eq!(v.to_string(), "(1.5;-0.25)");
    }

    #[test]
    fn test_bool_display_is_zero_one() {
        let b = BoolVector::<i32, 4>::from_array([true, false, false, true]);
        assert_eq!(b.to_string(), "(1;0;0;1)");
    }

    #[test]
    fn test_complex_display() {
        let c = ComplexVector::<f64, 2>::from_array([
            Complex::new(1.0, 2.0),
            Complex::new(-3.0, -4.0),
        ]);
        assert_eq!(c.to_string(), "(1+2i;-3-4i)");
    }
}

mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let v = Vector::<i64, 4>::from_array([10, -20, 30, -40]);
        let parsed: Vector<i64, 4> = v.to_string().parse().unwrap();
        assert_eq!(parsed, v);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed: Vector<i32, 2> = " ( 1 ; 2 ) ".parse().unwrap();
        assert_eq!(parsed.to_array(), [1, 2]);
    }

    #[test]
    fn test_parse_underflow_is_distinct() {
        let err = "(1;2;3)".parse::<Vector<i32, 4>>().unwrap_err();
        assert_eq!(
            err,
            ParseVectorError::Underflow {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_parse_too_many_lanes() {
        let err = "(1;2;3)".parse::<Vector<i32, 2>>().unwrap_err();
        assert_eq!(err, ParseVectorError::TooMany { lanes: 2 });
    }

    #[test]
    fn test_parse_bad_lane_reports_index() {
        let err = "(1;x;3;4)".parse::<Vector<i32, 4>>().unwrap_err();
        assert_eq!(err, ParseVectorError::BadLane { index: 1 });
    }

    #[test]
    fn test_parse_requires_parens() {
        assert_eq!(
            "1;2".parse::<Vector<i32, 2>>().unwrap_err(),
            ParseVectorError::Syntax
        );
    }

    #[test]
    fn test_parse_bool_vector() {
        let parsed: BoolVector<i32, 4> = "(1;0;true;false)".parse().unwrap();
        assert_eq!(parsed.to_array(), [true, false, true, false]);
    }

    #[test]
    fn test_parse_complex_vector_roundtrip() {
        let c = ComplexVector::<f64, 2>::from_array([
            Complex::new(1.5, -2.5),
            Complex::new(-3.0, 4.0),
        ]);
        let parsed: ComplexVector<f64, 2> = c.to_string().parse().unwrap();
        assert_eq!(parsed, c);
    }
}

mod fill_tests {
    use super::*;

    #[test]
    fn test_fill_from_complete() {
        let mut v = Vector::<i32, 4>::splat(0);
        v.fill_from([1, 2, 3, 4]).unwrap();
        assert_eq!(v.to_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_fill_from_underflow_keeps_written_lanes() {
        let mut v = Vector::<i32, 4>::splat(-1);
        let err = v.fill_from([7, 8]).unwrap_err();
        assert_eq!(err, FillError::Underflow { filled: 2, lanes: 4 });
        // Written lanes stay; the rest are untouched.
        assert_eq!(v.to_array(), [7, 8, -1, -1]);
    }

    #[test]
    fn test_fill_from_extra_elements_ignored() {
        let mut v = Vector::<i32, 2>::splat(0);
        v.fill_from(1..100).unwrap();
        assert_eq!(v.to_array(), [1, 2]);
    }
}
