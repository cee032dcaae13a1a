//! # daub
//!
//! *A fresh coat for your canvas.*
//!
//! Pack four 8-bit channels into one `u32` pixel, then slap that pixel across
//! every cell of a canvas. Fills are SIMD-dispatched (x86-64 AVX2, ARM NEON,
//! WASM SIMD128) with automatic fallback to scalar code.
//!
//! ## Pixel layout
//!
//! A packed pixel is big-endian RGBA as a 32-bit word: red in bits 31–24,
//! green in 23–16, blue in 15–8, alpha in 7–0. See [`pack_rgba`].
//!
//! ## Fill semantics
//!
//! Fills are per pixel: every `u32` cell receives the whole packed value.
//! A single-byte memset over the canvas is only correct when `r == g == b == a`
//! and, sized in pixels, covers a quarter of the bytes; nothing here does that.
//!
//! Every fill validates its dimensions before writing. A rejected fill leaves
//! the buffer untouched.
//!
//! ## Feature flags
//!
//! - **`rgb`** — Fills over [`rgb`] crate pixel types (`Rgba<u8>`,
//!   `Bgra<u8>`) via bytemuck.
//! - **`imgref`** — Whole-image and rectangle fills over [`imgref`] types.
//!   Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

use core::fmt;

mod pack;

pub use pack::*;

mod fill;

pub use fill::*;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod img;

#[cfg(test)]
mod test_log;

/// Why a fill was rejected. Nothing is written when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FillError {
    /// Width or height was negative.
    NegativeDimension,
    /// The requested region does not fit in the buffer.
    OutOfBounds,
    /// A byte buffer length is not a multiple of 4.
    NotPixelAligned,
    /// Row stride is smaller than the row width.
    InvalidStride,
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NegativeDimension => "canvas width or height is negative",
            Self::OutOfBounds => "fill region exceeds the buffer",
            Self::NotPixelAligned => "buffer length is not a multiple of 4 bytes",
            Self::InvalidStride => "stride is smaller than the row width",
        })
    }
}

impl core::error::Error for FillError {}

/// Wrapping 8-bit addition.
///
/// Linkage smoke test; carries no pixel meaning.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}
