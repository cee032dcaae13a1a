//! Solid fills over [`rgb`] crate pixel types via bytemuck.
//!
//! Slices are reinterpreted as bytes and filled with the SIMD-dispatched
//! byte kernels, so channel order follows the pixel type: `Rgba<u8>` gets
//! `[r, g, b, a]`, `Bgra<u8>` gets `[b, g, r, a]`.
//!
//! ```rust
//! use rgb::Rgba;
//! use daub::typed_rgb;
//!
//! let mut pixels = vec![Rgba::new(0u8, 0, 0, 0); 100];
//! typed_rgb::fill_rgba(&mut pixels, Rgba::new(255, 0, 128, 255));
//! assert_eq!(typed_rgb::pack_px(pixels[99]), 0xFF00_80FF);
//! ```

use crate::{FillError, pack_rgba, unpack_rgba};
use rgb::{Bgra, Rgba};

// ---------------------------------------------------------------------------
// Packed ↔ typed
// ---------------------------------------------------------------------------

/// Pack an `Rgba<u8>` into a big-endian RGBA word.
#[inline]
pub const fn pack_px(px: Rgba<u8>) -> u32 {
    pack_rgba(px.r, px.g, px.b, px.a)
}

/// Unpack a big-endian RGBA word into an `Rgba<u8>`.
#[inline]
pub const fn unpack_px(pixel: u32) -> Rgba<u8> {
    let [r, g, b, a] = unpack_rgba(pixel);
    Rgba { r, g, b, a }
}

// ---------------------------------------------------------------------------
// Fills
// ---------------------------------------------------------------------------

/// Set every pixel of `pixels` to `color`.
pub fn fill_rgba(pixels: &mut [Rgba<u8>], color: Rgba<u8>) {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::fill_rgba_bytes(bytes, [color.r, color.g, color.b, color.a])
        .expect("typed slice is always valid");
}

/// Set every pixel of a BGRA slice to `color`, stored in BGRA order.
pub fn fill_bgra(pixels: &mut [Bgra<u8>], color: Rgba<u8>) {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::fill_rgba_bytes(bytes, [color.b, color.g, color.r, color.a])
        .expect("typed slice is always valid");
}

/// Fill the first `width × height` pixels of `canvas` with `color`.
///
/// Same checks as [`crate::fill_canvas`].
pub fn fill_canvas_rgba(
    width: i32,
    height: i32,
    canvas: &mut [Rgba<u8>],
    color: Rgba<u8>,
) -> Result<(), FillError> {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(canvas);
    crate::fill_canvas_bytes(width, height, bytes, color.r, color.g, color.b, color.a)
}
