//! The generic elementwise transform engine.
//!
//! [`transform`] through [`transform4`] apply a callable to corresponding
//! lanes of one to four same-lane-count vectors and collect the results
//! into a fresh lane vector. The output family is inferred from the
//! callable's return type via [`TransformResult`]:
//!
//! - an arithmetic scalar return selects the matching [`Vector`];
//! - a `bool` return selects the boolean family, with the mask width taken
//!   from the first input;
//! - a [`Complex`] return selects the complex family.
//!
//! The mapping from input lane index to output lane index is always the
//! identity. The order in which lanes are visited is unspecified; the
//! callable must not carry data dependencies between lanes.
//!
//! Every derived elementwise operation in this crate — operators, the math
//! catalog, per-lane hashing — is a thin call into this module.

use crate::complex::ComplexVector;
use crate::element::{Complex, Float, Int};
use crate::mask::BoolVector;
use crate::register::Repr;
use crate::vector::Vector;

/// A fixed-width lane vector of `L` lanes.
///
/// The common read/write surface shared by the integral/floating, boolean
/// and complex families. `Elem` is what one lane reads back as (`bool` for
/// the boolean family, [`Complex`] for the complex family); `MaskElem` is
/// the integral mask kind carrying this vector's element width, used when
/// a transform produces boolean output.
pub trait LaneVector<const L: usize>: Copy {
    /// The per-lane value type.
    type Elem: Copy;

    /// The integral mask element of the same byte width as the lane kind.
    type MaskElem: Int;

    /// Number of lanes.
    const LANES: usize = L;

    /// Read lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= L`.
    fn lane(&self, index: usize) -> Self::Elem;

    /// Write lane `index`. For the complex family this writes both the
    /// real and imaginary component, never only one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= L`.
    fn set_lane(&mut self, index: usize, value: Self::Elem);
}

/// Output-family inference for the transform engine.
///
/// Implemented by every type a transform callable may return; `Vector`
/// names the lane-vector family that collects it.
pub trait TransformResult<V, const L: usize>: Sized {
    /// The inferred output lane-vector type.
    type Vector;

    /// Collect one value per lane index into the output family.
    fn collect<F: FnMut(usize) -> Self>(f: F) -> Self::Vector;
}

macro_rules! impl_transform_result {
    ($($t:ty),* $(,)?) => {$(
        impl<V, const L: usize> TransformResult<V, L> for $t
        where
            $t: Repr<L>,
        {
            type Vector = Vector<$t, L>;

            #[inline]
            fn collect<F: FnMut(usize) -> Self>(f: F) -> Self::Vector {
                Vector::from_fn(f)
            }
        }
    )*};
}

impl_transform_result!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

impl<V, const L: usize> TransformResult<V, L> for bool
where
    V: LaneVector<L>,
    V::MaskElem: Repr<L>,
{
    type Vector = BoolVector<V::MaskElem, L>;

    #[inline]
    fn collect<F: FnMut(usize) -> Self>(f: F) -> Self::Vector {
        BoolVector::from_fn(f)
    }
}

impl<V, T, const L: usize> TransformResult<V, L> for Complex<T>
where
    T: Float + Repr<L>,
{
    type Vector = ComplexVector<T, L>;

    #[inline]
    fn collect<F: FnMut(usize) -> Self>(f: F) -> Self::Vector {
        ComplexVector::from_fn(f)
    }
}

/// Apply `f` to every lane of `v`, collecting into the inferred family.
#[inline]
pub fn transform<V, R, F, const L: usize>(mut f: F, v: &V) -> R::Vector
where
    V: LaneVector<L>,
    R: TransformResult<V, L>,
    F: FnMut(V::Elem) -> R,
{
    R::collect(|i| f(v.lane(i)))
}

/// Apply `f` to corresponding lanes of `a` and `b`.
#[inline]
pub fn transform2<V1, V2, R, F, const L: usize>(mut f: F, a: &V1, b: &V2) -> R::Vector
where
    V1: LaneVector<L>,
    V2: LaneVector<L>,
    R: TransformResult<V1, L>,
    F: FnMut(V1::Elem, V2::Elem) -> R,
{
    R::collect(|i| f(a.lane(i), b.lane(i)))
}

/// Apply `f` to corresponding lanes of `a`, `b` and `c`.
#[inline]
pub fn transform3<V1, V2, V3, R, F, const L: usize>(mut f: F, a: &V1, b: &V2, c: &V3) -> R::Vector
where
    V1: LaneVector<L>,
    V2: LaneVector<L>,
    V3: LaneVector<L>,
    R: TransformResult<V1, L>,
    F: FnMut(V1::Elem, V2::Elem, V3::Elem) -> R,
{
    R::collect(|i| f(a.lane(i), b.lane(i), c.lane(i)))
}

/// Apply `f` to corresponding lanes of `a`, `b`, `c` and `d`.
#[inline]
pub fn transform4<V1, V2, V3, V4, R, F, const L: usize>(
    mut f: F,
    a: &V1,
    b: &V2,
    c: &V3,
    d: &V4,
) -> R::Vector
where
    V1: LaneVector<L>,
    V2: LaneVector<L>,
    V3: LaneVector<L>,
    V4: LaneVector<L>,
    R: TransformResult<V1, L>,
    F: FnMut(V1::Elem, V2::Elem, V3::Elem, V4::Elem) -> R,
{
    R::collect(|i| f(a.lane(i), b.lane(i), c.lane(i), d.lane(i)))
}
