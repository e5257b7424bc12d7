//! Category dispatch: from (element kind, semantic category) to a family.
//!
//! A lane-vector type is selected by three coordinates — the scalar
//! element kind, the lane count, and the semantic *category* (arithmetic,
//! complex or boolean). [`Dispatch`] is the type-level function performing
//! that selection:
//!
//! - an integral kind with [`Boolean`] selects the boolean family, with
//!   the kind as mask element;
//! - an integral or floating kind with [`Arithmetic`] selects [`Vector`]
//!   (the integral and floating families, split at the element-trait
//!   level);
//! - a floating kind with [`ComplexKind`] selects [`ComplexVector`];
//! - a [`Complex`] scalar selects the complex family over its unwrapped
//!   element, whatever the category.
//!
//! Every other combination — a floating kind with [`Boolean`], an
//! integral kind with [`ComplexKind`] — has no impl, so requesting it
//! fails to compile instead of silently picking an unintended family.

use crate::complex::ComplexVector;
use crate::element::{sealed, Complex, Float};
use crate::mask::BoolVector;
use crate::register::Repr;
use crate::vector::Vector;

/// The arithmetic category: plain integral or floating lanes.
pub struct Arithmetic;

/// The complex category: paired real/imaginary lanes.
pub struct ComplexKind;

/// The boolean category: `0`/`1` truth lanes over an integral mask.
pub struct Boolean;

/// A semantic category marker. Sealed.
pub trait Category: sealed::Sealed {}

impl sealed::Sealed for Arithmetic {}
impl sealed::Sealed for ComplexKind {}
impl sealed::Sealed for Boolean {}

impl Category for Arithmetic {}
impl Category for ComplexKind {}
impl Category for Boolean {}

/// The family selected for (`Self`, `C`) at `L` lanes.
pub trait Dispatch<C: Category, const L: usize> {
    /// The selected lane-vector family.
    type Family;
}

/// Convenience alias for the dispatched family type.
pub type FamilyOf<T, C, const L: usize> = <T as Dispatch<C, L>>::Family;

macro_rules! dispatch_int {
    ($($t:ty),* $(,)?) => {$(
        impl<const L: usize> Dispatch<Arithmetic, L> for $t
        where
            $t: Repr<L>,
        {
            type Family = Vector<$t, L>;
        }

        impl<const L: usize> Dispatch<Boolean, L> for $t
        where
            $t: Repr<L>,
        {
            type Family = BoolVector<$t, L>;
        }
    )*};
}

dispatch_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! dispatch_float {
    ($($t:ty),* $(,)?) => {$(
        impl<const L: usize> Dispatch<Arithmetic, L> for $t
        where
            $t: Repr<L>,
        {
            type Family = Vector<$t, L>;
        }

        impl<const L: usize> Dispatch<ComplexKind, L> for $t
        where
            $t: Repr<L>,
        {
            type Family = ComplexVector<$t, L>;
        }
    )*};
}

dispatch_float!(f32, f64);

impl<T, const L: usize> Dispatch<ComplexKind, L> for Complex<T>
where
    T: Float + Repr<L>,
{
    type Family = ComplexVector<T, L>;
}

impl<T, const L: usize> Dispatch<Arithmetic, L> for Complex<T>
where
    T: Float + Repr<L>,
{
    type Family = ComplexVector<T, L>;
}
