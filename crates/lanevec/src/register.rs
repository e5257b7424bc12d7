//! The representation registry.
//!
//! Every (element kind, lane count) pair maps to exactly one concrete
//! backing-register type. A register for `L` lanes of a `w`-byte element
//! is `L * w` bytes large and `L * w` bytes aligned — the alignment equals
//! the full byte size, not merely the element alignment, so any instance
//! satisfies hardware register alignment.
//!
//! The table below is a closed world: the [`Repr`] impl for a combination
//! exists if and only if that combination is supported, so an unsupported
//! pair fails to compile instead of silently picking a wrong layout.
//! Supported lane counts are 1, 2, 4, 8, 16, 32 and 64 for every element
//! kind, including the 128-bit extended integers.

use crate::element::Scalar;

/// A backing register: opaque packed storage for `LANES` lanes of `Elem`.
///
/// Registers are plain old data (`bytemuck::Pod`), which is what makes
/// whole-register bit reinterpretation and zero-initialization sound.
/// Lane layout is an implementation detail; all access goes through
/// [`Register::get`]/[`Register::set`], never through raw element
/// pointers into the storage.
///
/// # Safety
///
/// Implementations must store exactly `LANES` elements, with
/// `size_of::<Self>() == LANES * size_of::<Elem>()` and
/// `align_of::<Self>() == size_of::<Self>()`.
pub unsafe trait Register: bytemuck::Pod + Send + Sync + 'static {
    /// The lane element kind.
    type Elem: Scalar;

    /// Number of lanes held.
    const LANES: usize;

    /// A register with every lane set to `value`.
    fn splat(value: Self::Elem) -> Self;

    /// Read lane `index`.
    fn get(&self, index: usize) -> Self::Elem;

    /// Write lane `index`.
    fn set(&mut self, index: usize, value: Self::Elem);

    /// Read lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `LANES`.
    unsafe fn get_unchecked(&self, index: usize) -> Self::Elem;

    /// Write lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `LANES`.
    unsafe fn set_unchecked(&mut self, index: usize, value: Self::Elem);
}

/// The registry lookup: the backing register for `L` lanes of `Self`.
///
/// Implemented by the table below for every supported combination; a
/// missing impl is the compile-time "no such representation" failure.
pub trait Repr<const L: usize>: Scalar {
    /// The unique backing-register type for this combination.
    type Register: Register<Elem = Self>;
}

macro_rules! registers {
    ($($name:ident: $elem:ty, $lanes:tt, $align:tt;)*) => {$(
        #[doc = concat!("Backing register: ", stringify!($lanes), " lanes of `", stringify!($elem), "`.")]
        #[derive(Clone, Copy)]
        #[repr(C, align($align))]
        pub struct $name([$elem; $lanes]);

        // SAFETY: a dense array of a Pod element, no padding (the size is
        // exactly the alignment).
        unsafe impl bytemuck::Zeroable for $name {}
        unsafe impl bytemuck::Pod for $name {}

        // SAFETY: size and alignment are pinned by the repr attributes.
        unsafe impl Register for $name {
            type Elem = $elem;
            const LANES: usize = $lanes;

            #[inline]
            fn splat(value: $elem) -> Self {
                Self([value; $lanes])
            }

            #[inline]
            fn get(&self, index: usize) -> $elem {
                self.0[index]
            }

            #[inline]
            fn set(&mut self, index: usize, value: $elem) {
                self.0[index] = value;
            }

            #[inline]
            unsafe fn get_unchecked(&self, index: usize) -> $elem {
                // SAFETY: the caller guarantees `index < LANES`.
                unsafe { *self.0.get_unchecked(index) }
            }

            #[inline]
            unsafe fn set_unchecked(&mut self, index: usize, value: $elem) {
                // SAFETY: the caller guarantees `index < LANES`.
                unsafe { *self.0.get_unchecked_mut(index) = value; }
            }
        }

        impl Repr<$lanes> for $elem {
            type Register = $name;
        }
    )*};
}

registers! {
    RegI8x1: i8, 1, 1;
    RegI8x2: i8, 2, 2;
    RegI8x4: i8, 4, 4;
    RegI8x8: i8, 8, 8;
    RegI8x16: i8, 16, 16;
    RegI8x32: i8, 32, 32;
    RegI8x64: i8, 64, 64;

    RegI16x1: i16, 1, 2;
    RegI16x2: i16, 2, 4;
    RegI16x4: i16, 4, 8;
    RegI16x8: i16, 8, 16;
    RegI16x16: i16, 16, 32;
    RegI16x32: i16, 32, 64;
    RegI16x64: i16, 64, 128;

    RegI32x1: i32, 1, 4;
    RegI32x2: i32, 2, 8;
    RegI32x4: i32, 4, 16;
    RegI32x8: i32, 8, 32;
    RegI32x16: i32, 16, 64;
    RegI32x32: i32, 32, 128;
    RegI32x64: i32, 64, 256;

    RegI64x1: i64, 1, 8;
    RegI64x2: i64, 2, 16;
    RegI64x4: i64, 4, 32;
    RegI64x8: i64, 8, 64;
    RegI64x16: i64, 16, 128;
    RegI64x32: i64, 32, 256;
    RegI64x64: i64, 64, 512;

    RegI128x1: i128, 1, 16;
    RegI128x2: i128, 2, 32;
    RegI128x4: i128, 4, 64;
    RegI128x8: i128, 8, 128;
    RegI128x16: i128, 16, 256;
    RegI128x32: i128, 32, 512;
    RegI128x64: i128, 64, 1024;

    RegU8x1: u8, 1, 1;
    RegU8x2: u8, 2, 2;
    RegU8x4: u8, 4, 4;
    RegU8x8: u8, 8, 8;
    RegU8x16: u8, 16, 16;
    RegU8x32: u8, 32, 32;
    RegU8x64: u8, 64, 64;

    RegU16x1: u16, 1, 2;
    RegU16x2: u16, 2, 4;
    RegU16x4: u16, 4, 8;
    RegU16x8: u16, 8, 16;
    RegU16x16: u16, 16, 32;
    RegU16x32: u16, 32, 64;
    RegU16x64: u16, 64, 128;

    RegU32x1: u32, 1, 4;
    RegU32x2: u32, 2, 8;
    RegU32x4: u32, 4, 16;
    RegU32x8: u32, 8, 32;
    RegU32x16: u32, 16, 64;
    RegU32x32: u32, 32, 128;
    RegU32x64: u32, 64, 256;

    RegU64x1: u64, 1, 8;
    RegU64x2: u64, 2, 16;
    RegU64x4: u64, 4, 32;
    RegU64x8: u64, 8, 64;
    RegU64x16: u64, 16, 128;
    RegU64x32: u64, 32, 256;
    RegU64x64: u64, 64, 512;

    RegU128x1: u128, 1, 16;
    RegU128x2: u128, 2, 32;
    RegU128x4: u128, 4, 64;
    RegU128x8: u128, 8, 128;
    RegU128x16: u128, 16, 256;
    RegU128x32: u128, 32, 512;
    RegU128x64: u128, 64, 1024;

    RegF32x1: f32, 1, 4;
    RegF32x2: f32, 2, 8;
    RegF32x4: f32, 4, 16;
    RegF32x8: f32, 8, 32;
    RegF32x16: f32, 16, 64;
    RegF32x32: f32, 32, 128;
    RegF32x64: f32, 64, 256;

    RegF64x1: f64, 1, 8;
    RegF64x2: f64, 2, 16;
    RegF64x4: f64, 4, 32;
    RegF64x8: f64, 8, 64;
    RegF64x16: f64, 16, 128;
    RegF64x32: f64, 32, 256;
    RegF64x64: f64, 64, 512;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    macro_rules! check_layout {
        ($($elem:ty),*; $($lanes:literal),*) => {
            check_layout!(@elems [$($elem),*] [$($lanes),*]);
        };
        (@elems [] [$($lanes:literal),*]) => {};
        (@elems [$elem:ty $(, $rest:ty)*] [$($lanes:literal),*]) => {
            $(
                {
                    type R = <$elem as Repr<$lanes>>::Register;
                    assert_eq!(size_of::<R>(), $lanes * size_of::<$elem>());
                    assert_eq!(align_of::<R>(), size_of::<R>());
                    assert_eq!(<R as Register>::LANES, $lanes);
                }
            )*
            check_layout!(@elems [$($rest),*] [$($lanes),*]);
        };
    }

    #[test]
    fn test_size_and_alignment_for_all_combinations() {
        check_layout!(i8; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(i16; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(i32; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(i64; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(i128; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(u8; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(u16; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(u32; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(u64; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(u128; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(f32; 1, 2, 4, 8, 16, 32, 64);
        check_layout!(f64; 1, 2, 4, 8, 16, 32, 64);
    }

    #[test]
    fn test_register_get_set() {
        let mut r = RegI32x4::splat(0);
        r.set(2, 7);
        assert_eq!(r.get(2), 7);
        assert_eq!(r.get(0), 0);
    }
}
