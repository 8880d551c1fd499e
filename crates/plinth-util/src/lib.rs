// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the plinth kernels.
//!
//! Conversion functions scrub their source after reading so that message
//! words and chaining values do not linger in temporaries.

#![cfg_attr(not(test), no_std)]


/// Fills a byte slice with a repeating pattern byte.
///
/// # Example
///
/// ```
/// use plinth_util::fill_bytes_with_pattern;
///
/// let mut buffer = [0u8; 8];
/// fill_bytes_with_pattern(&mut buffer, b'a');
/// assert!(buffer.iter().all(|&b| b == b'a'));
/// ```
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
}

/// Generates `{type}_from_be` and `{type}_to_be` functions for integer types.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Reads ", stringify!($size), " big-endian bytes into a `", stringify!($type), "`, zeroizing the source bytes.")]
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for byte in bytes.iter_mut() {
                *dst = (*dst << 8) | (*byte as $type);
                *byte = 0;
            }
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as big-endian bytes, zeroizing the source.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * ($size - 1 - i))) as u8;
            }
            *src = 0;
        }
    };
}

impl_be_conversions!(u32, 4, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, u64_from_be, u64_to_be);

mod sealed {
    pub trait Sealed {}
}

/// Integer types for which all-zero bits is a valid value.
///
/// Sealed; bounds the volatile zeroization helpers.
pub trait Primitive: Copy + sealed::Sealed {}

macro_rules! impl_primitive {
    ($($type:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $type {}
            impl Primitive for $type {}
        )*
    };
}

impl_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use plinth_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Zeroizes a single primitive value using a volatile write.
///
/// Restricted to [`Primitive`] integers.
///
/// # Example
///
/// ```
/// use plinth_util::zeroize_primitive;
///
/// let mut total_len = 4096u64;
/// zeroize_primitive(&mut total_len);
/// assert_eq!(total_len, 0);
/// ```
#[inline(always)]
pub fn zeroize_primitive<T: Primitive>(val: &mut T) {
    // SAFETY: `val` is a valid, aligned, exclusive reference and all-zero
    // bits is a valid value for every `Primitive`.
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
}

/// Bulk zeroization of a slice of plain-old-data values.
///
/// Uses `write_bytes` (memset) followed by a volatile read so the optimizer
/// cannot drop the write as dead.
///
/// # Example
///
/// ```
/// use plinth_util::fast_zeroize_slice;
///
/// let mut schedule = [0x428a2f98u32; 64];
/// fast_zeroize_slice(&mut schedule);
/// assert!(schedule.iter().all(|&w| w == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T: Primitive>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: the pointer covers exactly `byte_len` bytes owned by `slice`,
    // and every `Primitive` is a plain integer with no invalid bit patterns.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
}
