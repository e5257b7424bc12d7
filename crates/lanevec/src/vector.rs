//! The integral and floating lane-vector families.
//!
//! [`Vector<T, L>`] is the arithmetic lane vector: `L` lanes of a scalar
//! element `T`, backed by the register the registry selects for the
//! combination. The integral and floating families share this one generic
//! struct; they are split at the trait level (`T: Int` vs `T: Float`), and
//! the operator surface below is generated per element kind so each family
//! keeps its own semantics (wrapping integer arithmetic, IEEE float
//! arithmetic).
//!
//! A vector owns its backing register by value. The register's lane layout
//! is not part of the public contract — element access goes through the
//! accessors and proxies, never through references into the storage, which
//! is also why there is no `Index` impl.

use core::fmt;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::element::check_lane;
use crate::mask::BoolVector;
use crate::register::{Register, Repr};
use crate::transform::{transform2, LaneVector};

/// A packed vector of `L` lanes of the scalar element `T`.
///
/// `L` must be one of 1, 2, 4, 8, 16, 32 or 64; other lane counts have no
/// registry entry and fail to compile.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const L: usize>
where
    T: Repr<L>,
{
    reg: T::Register,
}

impl<T, const L: usize> Vector<T, L>
where
    T: Repr<L>,
{
    /// Number of lanes.
    pub const LANES: usize = L;

    /// A vector with every lane set to `value`.
    #[inline]
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self {
            reg: T::Register::splat(value),
        }
    }

    /// A vector built lane by lane from `f(lane_index)`.
    #[inline]
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut reg: T::Register = bytemuck::Zeroable::zeroed();
        for i in 0..L {
            reg.set(i, f(i));
        }
        Self { reg }
    }

    /// A vector from per-lane values in declaration order.
    #[inline]
    #[must_use]
    pub fn from_array(values: [T; L]) -> Self {
        Self::from_fn(|i| values[i])
    }

    /// The lanes as an array, in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [T; L] {
        core::array::from_fn(|i| self.reg.get(i))
    }

    /// Load the first `L` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() < L`.
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        assert!(
            slice.len() >= L,
            "slice of length {} cannot fill a {L}-lane vector",
            slice.len()
        );
        Self::from_fn(|i| slice[i])
    }

    /// Store all lanes into the front of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() < L`.
    #[inline]
    pub fn write_to_slice(&self, slice: &mut [T]) {
        assert!(
            slice.len() >= L,
            "slice of length {} cannot hold a {L}-lane vector",
            slice.len()
        );
        for i in 0..L {
            slice[i] = self.reg.get(i);
        }
    }

    /// Wrap an existing backing register.
    #[inline]
    #[must_use]
    pub fn from_register(reg: T::Register) -> Self {
        Self { reg }
    }

    /// Unwrap into the backing register.
    #[inline]
    #[must_use]
    pub fn to_register(self) -> T::Register {
        self.reg
    }

    /// Load from a register-aligned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and aligned to the register's
    /// alignment (its full byte size).
    #[inline]
    #[must_use]
    pub unsafe fn load_aligned(ptr: *const T::Register) -> Self {
        // SAFETY: forwarded contract.
        Self { reg: unsafe { ptr.read() } }
    }

    /// Load `L` elements from an arbitrarily aligned element pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `L` elements.
    #[inline]
    #[must_use]
    pub unsafe fn load_unaligned(ptr: *const T) -> Self {
        // SAFETY: forwarded contract; read_unaligned tolerates any alignment.
        Self::from_fn(|i| unsafe { ptr.add(i).read_unaligned() })
    }

    /// Store to a register-aligned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes and aligned to the register's
    /// alignment.
    #[inline]
    pub unsafe fn store_aligned(&self, ptr: *mut T::Register) {
        // SAFETY: forwarded contract.
        unsafe { ptr.write(self.reg) };
    }

    /// Store `L` elements to an arbitrarily aligned element pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `L` elements.
    #[inline]
    pub unsafe fn store_unaligned(&self, ptr: *mut T) {
        for i in 0..L {
            // SAFETY: forwarded contract.
            unsafe { ptr.add(i).write_unaligned(self.reg.get(i)) };
        }
    }

    /// Number of lanes.
    #[inline]
    #[must_use]
    pub const fn lanes(&self) -> usize {
        L
    }

    /// Read lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= L`. See [`Vector::get_unchecked`] for the
    /// unchecked form.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> T {
        check_lane(index, L);
        self.reg.get(index)
    }

    /// Write lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= L`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        check_lane(index, L);
        self.reg.set(index, value);
    }

    /// Read lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `L`.
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        // SAFETY: forwarded contract.
        unsafe { self.reg.get_unchecked(index) }
    }

    /// Write lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `L`.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        // SAFETY: forwarded contract.
        unsafe { self.reg.set_unchecked(index, value) };
    }
}

impl<T, const L: usize> Vector<T, L>
where
    T: Repr<L>,
    T::Mask: Repr<L>,
{
    /// Lane-wise `==`, producing a boolean vector.
    #[inline]
    #[must_use]
    pub fn simd_eq(&self, rhs: &Self) -> BoolVector<T::Mask, L> {
        transform2(|a, b| a == b, self, rhs)
    }

    /// Lane-wise `!=`.
    #[inline]
    #[must_use]
    pub fn simd_ne(&self, rhs: &Self) -> BoolVector<T::Mask, L> {
        transform2(|a, b| a != b, self, rhs)
    }

    /// Lane-wise `<`.
    #[inline]
    #[must_use]
    pub fn simd_lt(&self, rhs: &Self) -> BoolVector<T::Mask, L> {
        transform2(|a, b| a < b, self, rhs)
    }

    /// Lane-wise `<=`.
    #[inline]
    #[must_use]
    pub fn simd_le(&self, rhs: &Self) -> BoolVector<T::Mask, L> {
        transform2(|a, b| a <= b, self, rhs)
    }

    /// Lane-wise `>`.
    #[inline]
    #[must_use]
    pub fn simd_gt(&self, rhs: &Self) -> BoolVector<T::Mask, L> {
        transform2(|a, b| a > b, self, rhs)
    }

    /// Lane-wise `>=`.
    #[inline]
    #[must_use]
    pub fn simd_ge(&self, rhs: &Self) -> BoolVector<T::Mask, L> {
        transform2(|a, b| a >= b, self, rhs)
    }
}

impl<T, const L: usize> LaneVector<L> for Vector<T, L>
where
    T: Repr<L>,
{
    type Elem = T;
    type MaskElem = T::Mask;

    #[inline]
    fn lane(&self, index: usize) -> T {
        self.get(index)
    }

    #[inline]
    fn set_lane(&mut self, index: usize, value: T) {
        self.set(index, value);
    }
}

impl<T, const L: usize> Default for Vector<T, L>
where
    T: Repr<L>,
{
    fn default() -> Self {
        Self {
            reg: bytemuck::Zeroable::zeroed(),
        }
    }
}

impl<T, const L: usize> PartialEq for Vector<T, L>
where
    T: Repr<L>,
{
    fn eq(&self, other: &Self) -> bool {
        (0..L).all(|i| self.reg.get(i) == other.reg.get(i))
    }
}

impl<T, const L: usize> fmt::Debug for Vector<T, L>
where
    T: Repr<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?})", self.to_array())
    }
}

// ============================================================================
// Operator surface, generated per element kind.
// ============================================================================

macro_rules! impl_arith_ops {
    ($($t:ty => $add:ident, $sub:ident, $mul:ident;)*) => {$(
        impl<const L: usize> Add for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a.$add(b), &self, &rhs)
            }
        }

        impl<const L: usize> Sub for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a.$sub(b), &self, &rhs)
            }
        }

        impl<const L: usize> Mul for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a.$mul(b), &self, &rhs)
            }
        }

        impl<const L: usize> Div for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a / b, &self, &rhs)
            }
        }

        impl<const L: usize> Rem for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a % b, &self, &rhs)
            }
        }
    )*};
}

// Integer lane arithmetic wraps; float lane arithmetic is IEEE.
impl_arith_ops! {
    i8 => wrapping_add, wrapping_sub, wrapping_mul;
    i16 => wrapping_add, wrapping_sub, wrapping_mul;
    i32 => wrapping_add, wrapping_sub, wrapping_mul;
    i64 => wrapping_add, wrapping_sub, wrapping_mul;
    i128 => wrapping_add, wrapping_sub, wrapping_mul;
    u8 => wrapping_add, wrapping_sub, wrapping_mul;
    u16 => wrapping_add, wrapping_sub, wrapping_mul;
    u32 => wrapping_add, wrapping_sub, wrapping_mul;
    u64 => wrapping_add, wrapping_sub, wrapping_mul;
    u128 => wrapping_add, wrapping_sub, wrapping_mul;
    f32 => add, sub, mul;
    f64 => add, sub, mul;
}

macro_rules! impl_neg {
    ($($t:ty => $neg:ident),* $(,)?) => {$(
        impl<const L: usize> Neg for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                crate::transform::transform(|a: $t| a.$neg(), &self)
            }
        }
    )*};
}

impl_neg! {
    i8 => wrapping_neg, i16 => wrapping_neg, i32 => wrapping_neg,
    i64 => wrapping_neg, i128 => wrapping_neg,
    f32 => neg, f64 => neg,
}

macro_rules! impl_int_bit_ops {
    ($($t:ty),* $(,)?) => {$(
        impl<const L: usize> BitAnd for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a & b, &self, &rhs)
            }
        }

        impl<const L: usize> BitOr for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a | b, &self, &rhs)
            }
        }

        impl<const L: usize> BitXor for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a ^ b, &self, &rhs)
            }
        }

        impl<const L: usize> Not for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                crate::transform::transform(|a: $t| !a, &self)
            }
        }

        /// Uniform shift: every lane shifted by the same amount.
        impl<const L: usize> Shl<u32> for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn shl(self, bits: u32) -> Self {
                crate::transform::transform(|a: $t| a.wrapping_shl(bits), &self)
            }
        }

        impl<const L: usize> Shr<u32> for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn shr(self, bits: u32) -> Self {
                crate::transform::transform(|a: $t| a.wrapping_shr(bits), &self)
            }
        }

        /// Elementwise shift: each lane shifted by the corresponding lane.
        impl<const L: usize> Shl for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn shl(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a.wrapping_shl(b as u32), &self, &rhs)
            }
        }

        impl<const L: usize> Shr for Vector<$t, L>
        where
            $t: Repr<L>,
        {
            type Output = Self;
            #[inline]
            fn shr(self, rhs: Self) -> Self {
                transform2(|a: $t, b: $t| a.wrapping_shr(b as u32), &self, &rhs)
            }
        }
    )*};
}

impl_int_bit_ops!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! impl_assign_ops {
    ($($trait_:ident, $method:ident, $base:ident, $base_method:ident, $rhs:ty;)*) => {$(
        impl<T, const L: usize> $trait_<$rhs> for Vector<T, L>
        where
            T: Repr<L>,
            Self: $base<$rhs, Output = Self>,
        {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = self.$base_method(rhs);
            }
        }
    )*};
}

impl_assign_ops! {
    AddAssign, add_assign, Add, add, Self;
    SubAssign, sub_assign, Sub, sub, Self;
    MulAssign, mul_assign, Mul, mul, Self;
    DivAssign, div_assign, Div, div, Self;
    RemAssign, rem_assign, Rem, rem, Self;
    BitAndAssign, bitand_assign, BitAnd, bitand, Self;
    BitOrAssign, bitor_assign, BitOr, bitor, Self;
    BitXorAssign, bitxor_assign, BitXor, bitxor, Self;
    ShlAssign, shl_assign, Shl, shl, Self;
    ShrAssign, shr_assign, Shr, shr, Self;
    ShlAssign, shl_assign, Shl, shl, u32;
    ShrAssign, shr_assign, Shr, shr, u32;
}

// ============================================================================
// Reductions. Lane reads go through the proxy iterator, the one sanctioned
// indirection into the backing register.
// ============================================================================

macro_rules! impl_int_reductions {
    ($($t:ty),* $(,)?) => {$(
        impl<const L: usize> Vector<$t, L>
        where
            $t: Repr<L>,
        {
            /// Wrapping sum of all lanes.
            #[inline]
            #[must_use]
            pub fn reduce_sum(&self) -> $t {
                use crate::proxy::LaneAccess;
                self.iter().fold(0, <$t>::wrapping_add)
            }

            /// Wrapping product of all lanes.
            #[inline]
            #[must_use]
            pub fn reduce_product(&self) -> $t {
                use crate::proxy::LaneAccess;
                self.iter().fold(1, <$t>::wrapping_mul)
            }

            /// Minimum lane value.
            #[inline]
            #[must_use]
            pub fn reduce_min(&self) -> $t {
                use crate::proxy::LaneAccess;
                self.iter().fold(<$t>::MAX, <$t>::min)
            }

            /// Maximum lane value.
            #[inline]
            #[must_use]
            pub fn reduce_max(&self) -> $t {
                use crate::proxy::LaneAccess;
                self.iter().fold(<$t>::MIN, <$t>::max)
            }

            /// Lane-wise minimum of two vectors.
            #[inline]
            #[must_use]
            pub fn simd_min(&self, rhs: &Self) -> Self {
                transform2(|a: $t, b: $t| a.min(b), self, rhs)
            }

            /// Lane-wise maximum of two vectors.
            #[inline]
            #[must_use]
            pub fn simd_max(&self, rhs: &Self) -> Self {
                transform2(|a: $t, b: $t| a.max(b), self, rhs)
            }

            /// Lane-wise clamp into `[lo, hi]`.
            #[inline]
            #[must_use]
            pub fn simd_clamp(&self, lo: &Self, hi: &Self) -> Self {
                self.simd_max(lo).simd_min(hi)
            }
        }
    )*};
}

impl_int_reductions!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! impl_float_reductions {
    ($($t:ty),* $(,)?) => {$(
        impl<const L: usize> Vector<$t, L>
        where
            $t: Repr<L>,
        {
            /// Sum of all lanes.
            #[inline]
            #[must_use]
            pub fn reduce_sum(&self) -> $t {
                use crate::proxy::LaneAccess;
                self.iter().fold(0.0, |acc, v| acc + v)
            }

            /// Product of all lanes.
            #[inline]
            #[must_use]
            pub fn reduce_product(&self) -> $t {
                use crate::proxy::LaneAccess;
                self.iter().fold(1.0, |acc, v| acc * v)
            }

            /// Minimum lane value (NaN lanes are ignored, IEEE `minNum`).
            #[inline]
            #[must_use]
            pub fn reduce_min(&self) -> $t {
                use crate::proxy::LaneAccess;
                self.iter().fold(<$t>::INFINITY, <$t>::min)
            }

            /// Maximum lane value (NaN lanes are ignored, IEEE `maxNum`).
            #[inline]
            #[must_use]
            pub fn reduce_max(&self) -> $t {
                use crate::proxy::LaneAccess;
                self.iter().fold(<$t>::NEG_INFINITY, <$t>::max)
            }

            /// Lane-wise minimum of two vectors.
            #[inline]
            #[must_use]
            pub fn simd_min(&self, rhs: &Self) -> Self {
                transform2(|a: $t, b: $t| a.min(b), self, rhs)
            }

            /// Lane-wise maximum of two vectors.
            #[inline]
            #[must_use]
            pub fn simd_max(&self, rhs: &Self) -> Self {
                transform2(|a: $t, b: $t| a.max(b), self, rhs)
            }

            /// Lane-wise clamp into `[lo, hi]`.
            #[inline]
            #[must_use]
            pub fn simd_clamp(&self, lo: &Self, hi: &Self) -> Self {
                self.simd_max(lo).simd_min(hi)
            }
        }
    )*};
}

impl_float_reductions!(f32, f64);
