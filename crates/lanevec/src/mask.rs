//! The boolean lane-vector family and its truth-encoding normalization.
//!
//! Code-generation backends disagree on how a comparison encodes "true"
//! per lane: vector-extension style backends produce a signed integer of
//! the element width with *all bits set*, while others produce the literal
//! value `1` in the operand element type. [`BoolVector`] reconciles the
//! two: regardless of origin, every lane observably stores `0` or `1`.
//!
//! - [`BoolVector::from_comparison`] accepts a raw comparison register in
//!   either encoding and normalizes it (bitwise AND with 1) during
//!   construction, so downstream logic is backend-independent.
//! - [`BoolVector::to_all_bits`] goes the other direction, expanding the
//!   canonical `0`/`1` lanes back to the all-bits-set encoding for interop
//!   with code that expects that convention. Its input must already be
//!   validly `0`/`1`-encoded (debug-asserted).
//!
//! The all-bits encoding never leaks into default construction, comparison
//! results or generic value conversion: `to_all_bits` returns a plain
//! integral [`Vector`], not a boolean vector.
//!
//! The mask element `M` is the signed integer of the same byte width as
//! the element kind the booleans were produced from, so a boolean vector
//! always occupies the same register shape as its source.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::element::{check_lane, Int};
use crate::register::{Register, Repr};
use crate::transform::{transform, transform2, transform3, LaneVector, TransformResult};
use crate::vector::Vector;

/// A packed vector of `L` boolean lanes, stored as `0`/`1` in the integral
/// mask element `M`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct BoolVector<M, const L: usize>
where
    M: Int + Repr<L>,
{
    reg: M::Register,
}

impl<M, const L: usize> BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    /// Number of lanes.
    pub const LANES: usize = L;

    /// A boolean vector with every lane set to `value`.
    #[inline]
    #[must_use]
    pub fn splat(value: bool) -> Self {
        Self {
            reg: M::Register::splat(M::from_bool(value)),
        }
    }

    /// A boolean vector built lane by lane from `f(lane_index)`.
    #[inline]
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize) -> bool) -> Self {
        let mut reg: M::Register = bytemuck::Zeroable::zeroed();
        for i in 0..L {
            reg.set(i, M::from_bool(f(i)));
        }
        Self { reg }
    }

    /// A boolean vector from per-lane values.
    #[inline]
    #[must_use]
    pub fn from_array(values: [bool; L]) -> Self {
        Self::from_fn(|i| values[i])
    }

    /// The lanes as a boolean array.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [bool; L] {
        core::array::from_fn(|i| self.reg.get(i).as_bool())
    }

    /// Normalize a raw comparison result into canonical `0`/`1` lanes.
    ///
    /// Accepts either truth encoding — all-bits-set or literal `1` — and
    /// masks each lane down to its low bit, so the constructed vector is
    /// backend-independent.
    #[inline]
    #[must_use]
    pub fn from_comparison(raw: M::Register) -> Self {
        let mut reg = raw;
        for i in 0..L {
            reg.set(i, raw.get(i).low_bit());
        }
        Self { reg }
    }

    /// Normalize an all-bits-style integral vector into a boolean vector.
    ///
    /// Shorthand for [`BoolVector::from_comparison`] over the vector's
    /// register.
    #[inline]
    #[must_use]
    pub fn from_all_bits(expanded: Vector<M, L>) -> Self {
        Self::from_comparison(expanded.to_register())
    }

    /// Expand canonical `0`/`1` lanes to the all-bits-set encoding.
    ///
    /// The result is a plain integral vector with `-1` for true and `0`
    /// for false, for interop with code expecting that convention. Lanes
    /// must already be validly `0`/`1`-encoded; any other content is a
    /// caller error (debug-asserted).
    #[inline]
    #[must_use]
    pub fn to_all_bits(&self) -> Vector<M, L> {
        debug_assert!(
            (0..L).all(|i| {
                let m = self.reg.get(i);
                m == M::ZERO || m == M::ONE
            }),
            "boolean vector holds a lane outside the 0/1 encoding"
        );
        Vector::from_fn(|i| if self.reg.get(i).as_bool() { M::ALL } else { M::ZERO })
    }

    /// Wrap a register without normalizing.
    ///
    /// The bits are preserved as-is; lanes outside `0`/`1` keep whatever
    /// meaning the caller assigns them. Prefer
    /// [`BoolVector::from_comparison`] unless the register is known to be
    /// canonical already.
    #[inline]
    #[must_use]
    pub fn from_register(reg: M::Register) -> Self {
        Self { reg }
    }

    /// Unwrap into the backing register.
    #[inline]
    #[must_use]
    pub fn to_register(self) -> M::Register {
        self.reg
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
    /// Panics if `index >= L`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        check_lane(index, L);
        self.reg.get(index).as_bool()
    }

    /// Write lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= L`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        check_lane(index, L);
        self.reg.set(index, M::from_bool(value));
    }

    /// Read lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `L`.
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> bool {
        // SAFETY: forwarded contract.
        unsafe { self.reg.get_unchecked(index) }.as_bool()
    }

    /// Write lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `L`.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: bool) {
        // SAFETY: forwarded contract.
        unsafe { self.reg.set_unchecked(index, M::from_bool(value)) };
    }

    /// Whether any lane is true.
    #[inline]
    #[must_use]
    pub fn any(&self) -> bool {
        (0..L).any(|i| self.reg.get(i).as_bool())
    }

    /// Whether all lanes are true.
    #[inline]
    #[must_use]
    pub fn all(&self) -> bool {
        (0..L).all(|i| self.reg.get(i).as_bool())
    }

    /// Whether no lane is true.
    #[inline]
    #[must_use]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Number of true lanes.
    #[inline]
    #[must_use]
    pub fn count_true(&self) -> usize {
        (0..L).filter(|&i| self.reg.get(i).as_bool()).count()
    }

    /// Lane-wise blend: true lanes pick from `if_true`, false lanes from
    /// `if_false`.
    #[inline]
    #[must_use]
    pub fn select<V>(&self, if_true: &V, if_false: &V) -> V
    where
        V: LaneVector<L>,
        V::Elem: TransformResult<Self, L, Vector = V>,
    {
        transform3(|m, a, b| if m { a } else { b }, self, if_true, if_false)
    }
}

impl<M, const L: usize> LaneVector<L> for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    type Elem = bool;
    type MaskElem = M;

    #[inline]
    fn lane(&self, index: usize) -> bool {
        self.get(index)
    }

    #[inline]
    fn set_lane(&mut self, index: usize, value: bool) {
        self.set(index, value);
    }
}

impl<M, const L: usize> Default for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    fn default() -> Self {
        Self {
            reg: bytemuck::Zeroable::zeroed(),
        }
    }
}

impl<M, const L: usize> PartialEq for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    fn eq(&self, other: &Self) -> bool {
        (0..L).all(|i| self.reg.get(i).as_bool() == other.reg.get(i).as_bool())
    }
}

impl<M, const L: usize> Eq for BoolVector<M, L> where M: Int + Repr<L> {}

impl<M, const L: usize> fmt::Debug for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoolVector({:?})", self.to_array())
    }
}

impl<M, const L: usize> BitAnd for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        transform2(|a, b| a & b, &self, &rhs)
    }
}

impl<M, const L: usize> BitOr for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        transform2(|a, b| a | b, &self, &rhs)
    }
}

impl<M, const L: usize> BitXor for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        transform2(|a, b| a ^ b, &self, &rhs)
    }
}

impl<M, const L: usize> Not for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        transform(|a: bool| !a, &self)
    }
}

impl<M, const L: usize> BitAndAssign for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<M, const L: usize> BitOrAssign for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<M, const L: usize> BitXorAssign for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}
