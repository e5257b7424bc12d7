//! Formatted input and output.
//!
//! A lane vector renders as `(v0;v1;...;vn)` — every lane in lane order,
//! separated by semicolons. Parsing accepts the same shape and fails with
//! a distinct error when fewer numeric tokens are present than lanes.
//! Formatting reads whole lane values through the value accessor; the
//! partial-fill path ([`crate::LaneAccess::fill_from`]) is the recoverable
//! analogue for streaming input, reporting [`FillError::Underflow`] while
//! leaving already-written lanes in place.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::complex::ComplexVector;
use crate::element::{Complex, Float, Int};
use crate::mask::BoolVector;
use crate::register::Repr;
use crate::vector::Vector;

/// Errors from parsing a lane vector out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVectorError {
    /// The input is not of the form `(v0;v1;...)`.
    #[error("expected a parenthesized, semicolon-separated lane list")]
    Syntax,
    /// A lane token failed to parse as the element type.
    #[error("lane {index} is not a valid element value")]
    BadLane {
        /// Zero-based index of the offending lane token.
        index: usize,
    },
    /// Fewer lane tokens than lanes.
    #[error("input underflow: expected {expected} lanes, found {found}")]
    Underflow {
        /// Lanes required by the vector type.
        expected: usize,
        /// Lane tokens actually present.
        found: usize,
    },
    /// More lane tokens than lanes.
    #[error("too many lanes: expected exactly {lanes}")]
    TooMany {
        /// Lanes required by the vector type.
        lanes: usize,
    },
}

/// Error from filling a vector out of an iterator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// The iterator ran dry before every lane was written. Lanes below
    /// `filled` hold the new values; the rest are untouched.
    #[error("input underflow: filled {filled} of {lanes} lanes")]
    Underflow {
        /// Number of lanes successfully written.
        filled: usize,
        /// Lanes required by the vector type.
        lanes: usize,
    },
}

fn fmt_lanes<I>(f: &mut fmt::Formatter<'_>, lanes: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("(")?;
    for (i, lane) in lanes.into_iter().enumerate() {
        if i > 0 {
            f.write_str(";")?;
        }
        write!(f, "{lane}")?;
    }
    f.write_str(")")
}

fn split_lanes(s: &str, lanes: usize) -> Result<Vec<&str>, ParseVectorError> {
    let body = s
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseVectorError::Syntax)?;
    let tokens: Vec<&str> = body.split(';').map(str::trim).collect();
    if tokens.len() < lanes {
        return Err(ParseVectorError::Underflow {
            expected: lanes,
            found: tokens.len(),
        });
    }
    if tokens.len() > lanes {
        return Err(ParseVectorError::TooMany { lanes });
    }
    Ok(tokens)
}

impl<T, const L: usize> fmt::Display for Vector<T, L>
where
    T: Repr<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_lanes(f, self.to_array())
    }
}

impl<T, const L: usize> FromStr for Vector<T, L>
where
    T: Repr<L> + FromStr,
{
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = split_lanes(s, L)?;
        let mut out = Self::default();
        for (i, token) in tokens.into_iter().enumerate() {
            let value = token
                .parse::<T>()
                .map_err(|_| ParseVectorError::BadLane { index: i })?;
            out.set(i, value);
        }
        Ok(out)
    }
}

impl<M, const L: usize> fmt::Display for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_lanes(f, self.to_array().map(|b| u8::from(b)))
    }
}

impl<M, const L: usize> FromStr for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = split_lanes(s, L)?;
        let mut out = Self::default();
        for (i, token) in tokens.into_iter().enumerate() {
            let value = match token {
                "0" | "false" => false,
                "1" | "true" => true,
                _ => return Err(ParseVectorError::BadLane { index: i }),
            };
            out.set(i, value);
        }
        Ok(out)
    }
}

impl<T, const L: usize> fmt::Display for ComplexVector<T, L>
where
    T: Float + Repr<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_lanes(f, self.to_array())
    }
}

impl<T, const L: usize> FromStr for ComplexVector<T, L>
where
    T: Float + Repr<L> + FromStr,
{
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = split_lanes(s, L)?;
        let mut out = Self::default();
        for (i, token) in tokens.into_iter().enumerate() {
            let value = token
                .parse::<Complex<T>>()
                .map_err(|_| ParseVectorError::BadLane { index: i })?;
            out.set(i, value);
        }
        Ok(out)
    }
}

/// Error from parsing a complex scalar out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a complex value of the form a+bi")]
pub struct ParseComplexError;

impl<T> FromStr for Complex<T>
where
    T: Float + FromStr,
{
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().strip_suffix('i').ok_or(ParseComplexError)?;
        // Split at the last +/- that is neither leading nor part of an
        // exponent, so "1.5e-3+2e+1i" parses.
        let bytes = inner.as_bytes();
        let mut split = None;
        for (i, &b) in bytes.iter().enumerate().skip(1) {
            if (b == b'+' || b == b'-') && !matches!(bytes[i - 1], b'e' | b'E') {
                split = Some(i);
            }
        }
        let split = split.ok_or(ParseComplexError)?;
        let re = inner[..split].trim().parse::<T>().map_err(|_| ParseComplexError)?;
        let im = inner[split..].trim().parse::<T>().map_err(|_| ParseComplexError)?;
        Ok(Complex::new(re, im))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complex_scalar() {
        assert_eq!("1+2i".parse::<Complex<f64>>().unwrap(), Complex::new(1.0, 2.0));
        assert_eq!("1.5-2.5i".parse::<Complex<f64>>().unwrap(), Complex::new(1.5, -2.5));
        assert_eq!(
            "1e-3+2e+1i".parse::<Complex<f64>>().unwrap(),
            Complex::new(1e-3, 2e1)
        );
        assert!("42".parse::<Complex<f64>>().is_err());
    }
}
