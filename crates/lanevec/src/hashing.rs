//! Per-lane hashing and lane folding.
//!
//! Hashing a lane vector is two steps: [`hash_lanes`] produces a vector of
//! per-lane 64-bit hashes through the transform engine, and
//! [`fold_hashes`] folds them into one scalar with a seed-mixing combiner,
//! in lane order. The `std::hash::Hash` impls for the families route
//! through the same pair, so equal vectors hash equal and a single
//! differing lane changes the result with overwhelming probability.
//!
//! 128-bit elements do not fit the 64-bit per-lane hash; they are
//! decomposed into two 64-bit halves which are hashed and combined first.

use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::complex::ComplexVector;
use crate::element::{Complex, Float, Int};
use crate::mask::BoolVector;
use crate::register::Repr;
use crate::transform::{transform, LaneVector};
use crate::vector::Vector;

/// A per-lane 64-bit hash.
pub trait LaneHash: Copy {
    /// Hash this lane value to 64 bits.
    fn lane_hash(self) -> u64;
}

#[inline]
fn fx(bits: u64) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_u64(bits);
    hasher.finish()
}

/// Mix `hash` into `seed`.
#[inline]
#[must_use]
pub fn combine(seed: u64, hash: u64) -> u64 {
    seed ^ hash
        .wrapping_add(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

macro_rules! impl_lane_hash {
    ($($t:ty),* $(,)?) => {$(
        impl LaneHash for $t {
            #[inline]
            fn lane_hash(self) -> u64 {
                fx(self as u64)
            }
        }
    )*};
}

impl_lane_hash!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_lane_hash_wide {
    ($($t:ty),* $(,)?) => {$(
        impl LaneHash for $t {
            #[inline]
            fn lane_hash(self) -> u64 {
                // Two 64-bit halves, hashed and combined.
                let bits = self as u128;
                combine(fx(bits as u64), fx((bits >> 64) as u64))
            }
        }
    )*};
}

impl_lane_hash_wide!(i128, u128);

impl LaneHash for f32 {
    #[inline]
    fn lane_hash(self) -> u64 {
        fx(u64::from(self.to_bits()))
    }
}

impl LaneHash for f64 {
    #[inline]
    fn lane_hash(self) -> u64 {
        fx(self.to_bits())
    }
}

impl LaneHash for bool {
    #[inline]
    fn lane_hash(self) -> u64 {
        fx(u64::from(self))
    }
}

impl<T: Float + LaneHash> LaneHash for Complex<T> {
    #[inline]
    fn lane_hash(self) -> u64 {
        combine(self.re.lane_hash(), self.im.lane_hash())
    }
}

/// Per-lane hashes of `v`, as a `u64` vector of the same lane count.
#[inline]
#[must_use]
pub fn hash_lanes<V, const L: usize>(v: &V) -> Vector<u64, L>
where
    V: LaneVector<L>,
    V::Elem: LaneHash,
    u64: Repr<L>,
{
    transform(|lane: V::Elem| lane.lane_hash(), v)
}

/// Fold per-lane hashes into one scalar, in lane order.
#[inline]
#[must_use]
pub fn fold_hashes<const L: usize>(hashes: &Vector<u64, L>) -> u64
where
    u64: Repr<L>,
{
    use crate::proxy::LaneAccess;
    hashes.iter().fold(0, combine)
}

/// Hash a whole lane vector to one scalar.
#[inline]
#[must_use]
pub fn hash_vector<V, const L: usize>(v: &V) -> u64
where
    V: LaneVector<L>,
    V::Elem: LaneHash,
    u64: Repr<L>,
{
    fold_hashes(&hash_lanes(v))
}

impl<T, const L: usize> Hash for Vector<T, L>
where
    T: Repr<L> + LaneHash,
    u64: Repr<L>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_vector(self));
    }
}

impl<M, const L: usize> Hash for BoolVector<M, L>
where
    M: Int + Repr<L>,
    u64: Repr<L>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_vector(self));
    }
}

impl<T, const L: usize> Hash for ComplexVector<T, L>
where
    T: Float + Repr<L> + LaneHash,
    u64: Repr<L>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_vector(self));
    }
}
