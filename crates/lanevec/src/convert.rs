//! The conversion engine: value conversion and bit reinterpretation.
//!
//! Two distinct, non-interchangeable operations connect the lane-vector
//! families:
//!
//! - [`ConvertTo`] is *value conversion*: an elementwise numeric cast with
//!   scalar `as` semantics — truncation toward zero for float→int, exact
//!   widening where the target can represent every source value. Shapes
//!   must match: identical lane counts, except complex↔non-complex where
//!   the flat side has exactly twice the lanes (each complex lane maps to
//!   an adjacent real-then-imaginary pair, and back).
//! - [`Reinterpret`] is *bit reinterpretation*: no value transformation at
//!   all, just the same register bytes viewed as another combination of
//!   identical total byte size. Reinterpreting into the boolean family
//!   preserves whatever bit patterns were there; it is on the caller to
//!   understand that family's truth encoding.
//!
//! Both reject shape mismatches at compile time — a lane-count mismatch
//! has no impl, and a byte-size mismatch trips a constant assertion during
//! monomorphization. Neither is ever a runtime check.
//!
//! Boolean sources value-convert through their canonical `0`/`1` lanes;
//! the all-bits interop encoding does not participate here.

use crate::complex::ComplexVector;
use crate::element::{Complex, Float, Int, Scalar};
use crate::mask::BoolVector;
use crate::register::Repr;
use crate::transform::{transform, TransformResult};
use crate::vector::Vector;

/// A scalar value conversion with the semantics of an `as` cast.
pub trait CastTo<U>: Copy {
    /// Convert `self` into `U`.
    fn cast(self) -> U;
}

macro_rules! impl_cast_to {
    ($src:ty => $($dst:ty),*) => {$(
        impl CastTo<$dst> for $src {
            #[inline]
            fn cast(self) -> $dst {
                self as $dst
            }
        }
    )*};
}

macro_rules! impl_casts {
    ($($src:ty),*) => {$(
        impl_cast_to!($src => i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);
    )*};
}

impl_casts!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

impl CastTo<bool> for bool {
    #[inline]
    fn cast(self) -> bool {
        self
    }
}

impl<T: Copy> CastTo<Complex<T>> for Complex<T> {
    #[inline]
    fn cast(self) -> Complex<T> {
        self
    }
}

/// A real scalar widens into the complex plane with a zero imaginary part.
impl<T: Float> CastTo<Complex<T>> for T {
    #[inline]
    fn cast(self) -> Complex<T> {
        Complex::new(self, T::default())
    }
}

/// Elementwise, value-preserving conversion into another lane-vector type.
pub trait ConvertTo<Target> {
    /// Convert lane by lane.
    fn convert(&self) -> Target;
}

impl<T, U, const L: usize> ConvertTo<Vector<U, L>> for Vector<T, L>
where
    T: Repr<L> + CastTo<U>,
    U: Scalar + Repr<L> + TransformResult<Vector<T, L>, L, Vector = Vector<U, L>>,
{
    #[inline]
    fn convert(&self) -> Vector<U, L> {
        transform(|v: T| -> U { v.cast() }, self)
    }
}

impl<M, U, const L: usize> ConvertTo<Vector<U, L>> for BoolVector<M, L>
where
    M: Int + Repr<L> + CastTo<U>,
    U: Scalar + Repr<L> + TransformResult<BoolVector<M, L>, L, Vector = Vector<U, L>>,
{
    #[inline]
    fn convert(&self) -> Vector<U, L> {
        transform(|b: bool| -> U { M::from_bool(b).cast() }, self)
    }
}

impl<T, U, const L: usize> ConvertTo<ComplexVector<U, L>> for ComplexVector<T, L>
where
    T: Float + Repr<L> + CastTo<U>,
    U: Float + Repr<L>,
    Vector<T, L>: ConvertTo<Vector<U, L>>,
{
    #[inline]
    fn convert(&self) -> ComplexVector<U, L> {
        ComplexVector::from_parts(self.re().convert(), self.im().convert())
    }
}

// Complex ↔ non-complex conversion doubles/halves the lane count: complex
// lane `i` maps to flat lanes `2i` (real) and `2i + 1` (imaginary), in
// that order. One impl per supported lane-count pair keeps the shape rule
// a compile-time property.
macro_rules! impl_complex_flat_convert {
    ($($cplx:tt => $flat:tt),* $(,)?) => {$(
        impl<T, U> ConvertTo<Vector<U, $flat>> for ComplexVector<T, $cplx>
        where
            T: Float + Repr<$cplx> + CastTo<U>,
            U: Scalar + Repr<$flat>,
        {
            #[inline]
            fn convert(&self) -> Vector<U, $flat> {
                Vector::from_fn(|i| {
                    let lane = self.get(i / 2);
                    if i % 2 == 0 { lane.re.cast() } else { lane.im.cast() }
                })
            }
        }

        impl<T, U> ConvertTo<ComplexVector<U, $cplx>> for Vector<T, $flat>
        where
            T: Repr<$flat> + CastTo<U>,
            U: Float + Repr<$cplx>,
        {
            #[inline]
            fn convert(&self) -> ComplexVector<U, $cplx> {
                ComplexVector::from_fn(|i| {
                    Complex::new(self.get(2 * i).cast(), self.get(2 * i + 1).cast())
                })
            }
        }
    )*};
}

impl_complex_flat_convert!(1 => 2, 2 => 4, 4 => 8, 8 => 16, 16 => 32, 32 => 64);

/// Bit-level reinterpretation into another lane-vector type of identical
/// total byte size.
pub trait Reinterpret<Target> {
    /// Reinterpret the backing bytes without transforming values.
    fn reinterpret(self) -> Target;
}

macro_rules! assert_same_size {
    ($a:ty, $b:ty) => {
        const {
            assert!(
                core::mem::size_of::<$a>() == core::mem::size_of::<$b>(),
                "bit reinterpretation requires identical register byte sizes",
            );
        }
    };
}

impl<T, U, const L: usize, const M: usize> Reinterpret<Vector<U, M>> for Vector<T, L>
where
    T: Repr<L>,
    U: Repr<M>,
{
    #[inline]
    fn reinterpret(self) -> Vector<U, M> {
        assert_same_size!(<T as Repr<L>>::Register, <U as Repr<M>>::Register);
        Vector::from_register(bytemuck::cast(self.to_register()))
    }
}

impl<T, N, const L: usize, const M: usize> Reinterpret<BoolVector<N, M>> for Vector<T, L>
where
    T: Repr<L>,
    N: Int + Repr<M>,
{
    #[inline]
    fn reinterpret(self) -> BoolVector<N, M> {
        assert_same_size!(<T as Repr<L>>::Register, <N as Repr<M>>::Register);
        BoolVector::from_register(bytemuck::cast(self.to_register()))
    }
}

impl<N, U, const L: usize, const M: usize> Reinterpret<Vector<U, M>> for BoolVector<N, L>
where
    N: Int + Repr<L>,
    U: Repr<M>,
{
    #[inline]
    fn reinterpret(self) -> Vector<U, M> {
        assert_same_size!(<N as Repr<L>>::Register, <U as Repr<M>>::Register);
        Vector::from_register(bytemuck::cast(self.to_register()))
    }
}

impl<N, P, const L: usize, const M: usize> Reinterpret<BoolVector<P, M>> for BoolVector<N, L>
where
    N: Int + Repr<L>,
    P: Int + Repr<M>,
{
    #[inline]
    fn reinterpret(self) -> BoolVector<P, M> {
        assert_same_size!(<N as Repr<L>>::Register, <P as Repr<M>>::Register);
        BoolVector::from_register(bytemuck::cast(self.to_register()))
    }
}

impl<T, U, const L: usize, const M: usize> Reinterpret<ComplexVector<U, M>> for ComplexVector<T, L>
where
    T: Float + Repr<L>,
    U: Float + Repr<M>,
    Vector<T, L>: Reinterpret<Vector<U, M>>,
{
    #[inline]
    fn reinterpret(self) -> ComplexVector<U, M> {
        ComplexVector::from_parts(self.re().reinterpret(), self.im().reinterpret())
    }
}
