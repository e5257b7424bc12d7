//! The complex lane-vector family.
//!
//! A complex vector stores its lanes as two parallel real-valued vectors —
//! one for the real parts, one for the imaginary parts — rather than
//! interleaving components in a single register. Component access is
//! therefore a direct register read, and the cross-term arithmetic of
//! multiply/divide works on whole component vectors without any
//! deinterleaving step.
//!
//! Lane reads and writes always touch both components together; there is
//! no way to observe a lane with only one component updated.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::element::{check_lane, Complex, Float, Scalar};
use crate::mask::BoolVector;
use crate::register::Repr;
use crate::transform::{transform2, LaneVector};
use crate::vector::Vector;

/// A packed vector of `L` complex lanes over the floating element `T`,
/// split into parallel real and imaginary component vectors.
#[derive(Clone, Copy)]
pub struct ComplexVector<T, const L: usize>
where
    T: Float + Repr<L>,
{
    re: Vector<T, L>,
    im: Vector<T, L>,
}

impl<T, const L: usize> ComplexVector<T, L>
where
    T: Float + Repr<L>,
{
    /// Number of lanes.
    pub const LANES: usize = L;

    /// A complex vector with every lane set to `value`.
    #[inline]
    #[must_use]
    pub fn splat(value: Complex<T>) -> Self {
        Self {
            re: Vector::splat(value.re),
            im: Vector::splat(value.im),
        }
    }

    /// A complex vector built lane by lane from `f(lane_index)`.
    #[inline]
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize) -> Complex<T>) -> Self {
        let mut re = Vector::default();
        let mut im = Vector::default();
        for i in 0..L {
            let c = f(i);
            re.set(i, c.re);
            im.set(i, c.im);
        }
        Self { re, im }
    }

    /// A complex vector from per-lane values.
    #[inline]
    #[must_use]
    pub fn from_array(values: [Complex<T>; L]) -> Self {
        Self::from_fn(|i| values[i])
    }

    /// The lanes as an array of complex values.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [Complex<T>; L] {
        core::array::from_fn(|i| Complex::new(self.re.get(i), self.im.get(i)))
    }

    /// Assemble from separate real and imaginary component vectors.
    #[inline]
    #[must_use]
    pub fn from_parts(re: Vector<T, L>, im: Vector<T, L>) -> Self {
        Self { re, im }
    }

    /// The real component vector.
    #[inline]
    #[must_use]
    pub fn re(&self) -> Vector<T, L> {
        self.re
    }

    /// The imaginary component vector.
    #[inline]
    #[must_use]
    pub fn im(&self) -> Vector<T, L> {
        self.im
    }

    /// Replace the real component vector.
    #[inline]
    pub fn set_re(&mut self, re: Vector<T, L>) {
        self.re = re;
    }

    /// Replace the imaginary component vector.
    #[inline]
    pub fn set_im(&mut self, im: Vector<T, L>) {
        self.im = im;
    }

    /// Number of lanes.
    #[inline]
    #[must_use]
    pub const fn lanes(&self) -> usize {
        L
    }

    /// Read lane `index`: both components together.
    ///
    /// # Panics
    ///
    /// Panics if `index >= L`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Complex<T> {
        check_lane(index, L);
        Complex::new(self.re.get(index), self.im.get(index))
    }

    /// Write lane `index`: both components together.
    ///
    /// # Panics
    ///
    /// Panics if `index >= L`.
    #[inline]
    pub fn set(&mut self, index: usize, value: Complex<T>) {
        check_lane(index, L);
        self.re.set(index, value.re);
        self.im.set(index, value.im);
    }

    /// Read lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `L`.
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> Complex<T> {
        // SAFETY: forwarded contract.
        unsafe { Complex::new(self.re.get_unchecked(index), self.im.get_unchecked(index)) }
    }

    /// Write lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `L`.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: Complex<T>) {
        // SAFETY: forwarded contract.
        unsafe {
            self.re.set_unchecked(index, value.re);
            self.im.set_unchecked(index, value.im);
        }
    }
}

impl<T, const L: usize> ComplexVector<T, L>
where
    T: Float + Repr<L>,
    T::Mask: Repr<L>,
{
    /// Lane-wise `==`, producing a boolean vector over the component
    /// mask width.
    #[inline]
    #[must_use]
    pub fn simd_eq(&self, rhs: &Self) -> BoolVector<T::Mask, L> {
        transform2(|a: Complex<T>, b: Complex<T>| a == b, self, rhs)
    }

    /// Lane-wise `!=`.
    #[inline]
    #[must_use]
    pub fn simd_ne(&self, rhs: &Self) -> BoolVector<T::Mask, L> {
        transform2(|a: Complex<T>, b: Complex<T>| a != b, self, rhs)
    }
}

impl<T, const L: usize> LaneVector<L> for ComplexVector<T, L>
where
    T: Float + Repr<L>,
{
    type Elem = Complex<T>;
    type MaskElem = <T as Scalar>::Mask;

    #[inline]
    fn lane(&self, index: usize) -> Complex<T> {
        self.get(index)
    }

    #[inline]
    fn set_lane(&mut self, index: usize, value: Complex<T>) {
        self.set(index, value);
    }
}

impl<T, const L: usize> Default for ComplexVector<T, L>
where
    T: Float + Repr<L>,
{
    fn default() -> Self {
        Self {
            re: Vector::default(),
            im: Vector::default(),
        }
    }
}

impl<T, const L: usize> PartialEq for ComplexVector<T, L>
where
    T: Float + Repr<L>,
{
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl<T, const L: usize> fmt::Debug for ComplexVector<T, L>
where
    T: Float + Repr<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComplexVector({:?})", self.to_array())
    }
}

// ============================================================================
// Arithmetic. Add/Sub act componentwise; Mul/Div use the cross-term
// formulas over whole component vectors, which the split storage makes a
// handful of plain register-wide operations.
// ============================================================================

macro_rules! impl_complex_vector_ops {
    ($($t:ty),*) => {$(
        impl<const L: usize> Add for ComplexVector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::from_parts(self.re + rhs.re, self.im + rhs.im)
            }
        }

        impl<const L: usize> Sub for ComplexVector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::from_parts(self.re - rhs.re, self.im - rhs.im)
            }
        }

        impl<const L: usize> Mul for ComplexVector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
                Self::from_parts(
                    self.re * rhs.re - self.im * rhs.im,
                    self.re * rhs.im + self.im * rhs.re,
                )
            }
        }

        impl<const L: usize> Div for ComplexVector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                // (a + bi)/(c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)
                let denom = rhs.re * rhs.re + rhs.im * rhs.im;
                Self::from_parts(
                    (self.re * rhs.re + self.im * rhs.im) / denom,
                    (self.im * rhs.re - self.re * rhs.im) / denom,
                )
            }
        }

        impl<const L: usize> Neg for ComplexVector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self::from_parts(-self.re, -self.im)
            }
        }

        impl<const L: usize> ComplexVector<$t, L>
        where
            $t: Repr<L>,
        {
            /// Lane-wise complex conjugate.
            #[inline]
            #[must_use]
            pub fn conj(&self) -> Self {
                Self::from_parts(self.re, -self.im)
            }

            /// Lane-wise squared magnitude `re² + im²`, as a real vector.
            #[inline]
            #[must_use]
            pub fn norm_sqr(&self) -> Vector<$t, L> {
                self.re * self.re + self.im * self.im
            }
        }
    )*};
}

impl_complex_vector_ops!(f32, f64);

macro_rules! impl_complex_assign_ops {
    ($($trait_:ident, $method:ident, $base:ident, $base_method:ident;)*) => {$(
        impl<T, const L: usize> $trait_ for ComplexVector<T, L>
        where
            T: Float + Repr<L>,
            Self: $base<Output = Self>,
        {
            #[inline]
            fn $method(&mut self, rhs: Self) {
                *self = self.$base_method(rhs);
            }
        }
    )*};
}

impl_complex_assign_ops! {
    AddAssign, add_assign, Add, add;
    SubAssign, sub_assign, Sub, sub;
    MulAssign, mul_assign, Mul, mul;
    DivAssign, div_assign, Div, div;
}
