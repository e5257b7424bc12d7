//! The elementwise math catalog.
//!
//! Every function here is a one-line application of the transform engine
//! with the matching scalar routine; no function carries its own lane
//! loop. The floating surface mirrors the scalar `f32`/`f64` method set;
//! the integral surface is the small set that is meaningful lane-wise.

use crate::register::Repr;
use crate::transform::{transform, transform2, transform3};
use crate::vector::Vector;

macro_rules! impl_float_math {
    ($($t:ty),*) => {$(
        impl<const L: usize> Vector<$t, L>
        where
            $t: Repr<L>,
        {
            /// Lane-wise absolute value.
            #[inline]
            #[must_use]
            pub fn abs(&self) -> Self {
                transform(<$t>::abs, self)
            }

            /// Lane-wise square root.
            #[inline]
            #[must_use]
            pub fn sqrt(&self) -> Self {
                transform(<$t>::sqrt, self)
            }

            /// Lane-wise reciprocal.
            #[inline]
            #[must_use]
            pub fn recip(&self) -> Self {
                transform(<$t>::recip, self)
            }

            /// Lane-wise floor.
            #[inline]
            #[must_use]
            pub fn floor(&self) -> Self {
                transform(<$t>::floor, self)
            }

            /// Lane-wise ceiling.
            #[inline]
            #[must_use]
            pub fn ceil(&self) -> Self {
                transform(<$t>::ceil, self)
            }

            /// Lane-wise round half away from zero.
            #[inline]
            #[must_use]
            pub fn round(&self) -> Self {
                transform(<$t>::round, self)
            }

            /// Lane-wise truncation toward zero.
            #[inline]
            #[must_use]
            pub fn trunc(&self) -> Self {
                transform(<$t>::trunc, self)
            }

            /// Lane-wise `e^x`.
            #[inline]
            #[must_use]
            pub fn exp(&self) -> Self {
                transform(<$t>::exp, self)
            }

            /// Lane-wise natural logarithm.
            #[inline]
            #[must_use]
            pub fn ln(&self) -> Self {
                transform(<$t>::ln, self)
            }

            /// Lane-wise base-2 logarithm.
            #[inline]
            #[must_use]
            pub fn log2(&self) -> Self {
                transform(<$t>::log2, self)
            }

            /// Lane-wise base-10 logarithm.
            #[inline]
            #[must_use]
            pub fn log10(&self) -> Self {
                transform(<$t>::log10, self)
            }

            /// Lane-wise sine.
            #[inline]
            #[must_use]
            pub fn sin(&self) -> Self {
                transform(<$t>::sin, self)
            }

            /// Lane-wise cosine.
            #[inline]
            #[must_use]
            pub fn cos(&self) -> Self {
                transform(<$t>::cos, self)
            }

            /// Lane-wise tangent.
            #[inline]
            #[must_use]
            pub fn tan(&self) -> Self {
                transform(<$t>::tan, self)
            }

            /// Lane-wise fused multiply-add `self * b + c`.
            #[inline]
            #[must_use]
            pub fn mul_add(&self, b: &Self, c: &Self) -> Self {
                transform3(<$t>::mul_add, self, b, c)
            }

            /// Lane-wise `self^exp`.
            #[inline]
            #[must_use]
            pub fn powf(&self, exp: &Self) -> Self {
                transform2(<$t>::powf, self, exp)
            }

            /// Lane-wise four-quadrant arctangent of `self / x`.
            #[inline]
            #[must_use]
            pub fn atan2(&self, x: &Self) -> Self {
                transform2(<$t>::atan2, self, x)
            }

            /// Lane-wise hypotenuse `sqrt(self² + other²)`.
            #[inline]
            #[must_use]
            pub fn hypot(&self, other: &Self) -> Self {
                transform2(<$t>::hypot, self, other)
            }

            /// Lane-wise magnitude of `self` with the sign of `sign`.
            #[inline]
            #[must_use]
            pub fn copysign(&self, sign: &Self) -> Self {
                transform2(<$t>::copysign, self, sign)
            }
        }
    )*};
}

impl_float_math!(f32, f64);

macro_rules! impl_signed_int_math {
    ($($t:ty),*) => {$(
        impl<const L: usize> Vector<$t, L>
        where
            $t: Repr<L>,
        {
            /// Lane-wise absolute value (wrapping at the minimum value).
            #[inline]
            #[must_use]
            pub fn abs(&self) -> Self {
                transform(<$t>::wrapping_abs, self)
            }

            /// Lane-wise sign: `-1`, `0` or `1`.
            #[inline]
            #[must_use]
            pub fn signum(&self) -> Self {
                transform(<$t>::signum, self)
            }
        }
    )*};
}

impl_signed_int_math!(i8, i16, i32, i64, i128);
