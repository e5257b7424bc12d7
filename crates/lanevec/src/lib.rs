//! # lanevec
//!
//! Compile-time generic, fixed-width packed lane vectors.
//!
//! A lane vector holds `L` lanes (1, 2, 4, 8, 16, 32 or 64) of one
//! element kind — signed/unsigned integers of 1 to 16 bytes, `f32`/`f64`,
//! a complex pair over a float width, or booleans — backed by an opaque
//! packed register whose alignment equals its full byte size. Every
//! (element kind, lane count, category) combination behaves as one
//! uniform abstraction.
//!
//! # Architecture
//!
//! - **Representation registry** ([`register`]): a closed-world table
//!   mapping each (element, lane count) pair to its unique
//!   `#[repr(C, align(N))]` backing register. Unsupported combinations
//!   fail to compile.
//! - **Category dispatch** ([`dispatch`]): the type-level function from
//!   (element, category) to the integral/floating ([`Vector`]), complex
//!   ([`ComplexVector`]) or boolean ([`BoolVector`]) family.
//! - **Lane proxies** ([`proxy`]): index-based reference/pointer stand-ins
//!   for direct access into the opaque register, with full iterator
//!   ergonomics. Vectors never hand out raw element pointers.
//! - **Conversion engine** ([`convert`]): value conversion (`as`-cast
//!   semantics, complex↔flat lane doubling) and bit reinterpretation
//!   (same-byte-size register view), both shape-checked at compile time.
//! - **Normalization** ([`mask`]): boolean lanes are observably `0`/`1`
//!   regardless of which truth encoding a comparison backend produced;
//!   the all-bits-set interop encoding is an explicit, separate
//!   conversion.
//! - **Transform engine** ([`transform`]): generic 1–4-ary elementwise
//!   application with output-family inference; every derived operation in
//!   the crate routes through it.
//! - **Memory management** ([`lanevec_alloc`], re-exported as [`alloc`]):
//!   alignment-exact heap allocation with a process-wide, lock-guarded
//!   allocation-failure handler.
//!
//! # Example
//!
//! ```
//! use lanevec::{I32x4, LaneAccess};
//!
//! let a = I32x4::from_array([1, 2, 3, 4]);
//! let b = I32x4::from_array([10, 20, 30, 40]);
//! assert_eq!((a + b).to_array(), [11, 22, 33, 44]);
//!
//! let gt = a.simd_gt(&I32x4::splat(2));
//! assert_eq!(gt.count_true(), 2);
//! assert_eq!(a.iter().sum::<i32>(), 10);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod complex;
pub mod convert;
pub mod dispatch;
pub mod element;
pub mod format;
pub mod hashing;
pub mod mask;
pub mod math;
pub mod proxy;
pub mod register;
pub mod transform;
pub mod vector;

#[cfg(feature = "serde")]
mod serde_impls;

/// Alignment-exact allocation, re-exported from `lanevec-alloc`.
pub use lanevec_alloc as alloc;

pub use complex::ComplexVector;
pub use convert::{CastTo, ConvertTo, Reinterpret};
pub use dispatch::{Arithmetic, Boolean, Category, ComplexKind, Dispatch, FamilyOf};
pub use element::{Complex, Float, Int, Scalar};
pub use format::{FillError, ParseComplexError, ParseVectorError};
pub use hashing::{fold_hashes, hash_lanes, hash_vector, LaneHash};
pub use mask::BoolVector;
pub use proxy::{LaneAccess, LaneMut, LanePtr, LaneRef, Lanes};
pub use register::{Register, Repr};
pub use transform::{transform, transform2, transform3, transform4, LaneVector, TransformResult};
pub use vector::Vector;

/// Convenience aliases for common 128- and 256-bit shapes.
pub mod aliases {
    use super::{BoolVector, Complex, ComplexVector, Vector};

    /// 4 lanes of `f32` (128-bit).
    pub type F32x4 = Vector<f32, 4>;
    /// 8 lanes of `f32` (256-bit).
    pub type F32x8 = Vector<f32, 8>;
    /// 2 lanes of `f64` (128-bit).
    pub type F64x2 = Vector<f64, 2>;
    /// 4 lanes of `f64` (256-bit).
    pub type F64x4 = Vector<f64, 4>;
    /// 4 lanes of `i32` (128-bit).
    pub type I32x4 = Vector<i32, 4>;
    /// 8 lanes of `i32` (256-bit).
    pub type I32x8 = Vector<i32, 8>;
    /// 2 lanes of `i64` (128-bit).
    pub type I64x2 = Vector<i64, 2>;
    /// 16 lanes of `u8` (128-bit).
    pub type U8x16 = Vector<u8, 16>;
    /// 4 lanes of `u32` (128-bit).
    pub type U32x4 = Vector<u32, 4>;
    /// 4 complex lanes over `f32`.
    pub type CF32x4 = ComplexVector<f32, 4>;
    /// 2 complex lanes over `f64`.
    pub type CF64x2 = ComplexVector<f64, 2>;
    /// 4 boolean lanes at 32-bit mask width.
    pub type B32x4 = BoolVector<i32, 4>;
    /// A single complex `f64` scalar.
    pub type C64 = Complex<f64>;
}

pub use aliases::{B32x4, CF32x4, CF64x2, F32x4, F32x8, F64x2, F64x4, I32x4, I32x8, I64x2, U32x4, U8x16};
