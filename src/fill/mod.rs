// ---------------------------------------------------------------------------
// Solid canvas fills with SIMD dispatch.
//
// Architecture: #[rite] row functions broadcast the pixel into a vector
// register and store it block by block, one kernel per tier.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch).
//
// Every fill is per pixel: the packed u32 goes into each cell whole. Sizes
// are validated up front so a rejected call never writes.
// ---------------------------------------------------------------------------

use core::fmt;

use crate::{FillError, OPAQUE_WHITE, pack_rgba};
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

#[cold]
pub(crate) fn rejected(err: FillError, what: fmt::Arguments<'_>) -> FillError {
    log::debug!("fill of {what} rejected: {err}");
    err
}

/// Number of buffer elements a `width × height` canvas covers at `per_px`
/// elements per pixel, checked against `len`.
#[inline]
fn check_canvas(width: i32, height: i32, len: usize, per_px: usize) -> Result<usize, FillError> {
    let reject = |err| rejected(err, format_args!("{width}x{height} into {len} cells"));
    let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
        return Err(reject(FillError::NegativeDimension));
    };
    let cells = w
        .checked_mul(h)
        .and_then(|px| px.checked_mul(per_px))
        .ok_or_else(|| reject(FillError::OutOfBounds))?;
    if cells > len {
        return Err(reject(FillError::OutOfBounds));
    }
    Ok(cells)
}

#[inline]
fn check_strided(len: usize, width: usize, height: usize, stride: usize) -> Result<(), FillError> {
    let reject = |err| {
        rejected(
            err,
            format_args!("{width}x{height} stride {stride} into {len} cells"),
        )
    };
    if width > stride {
        return Err(reject(FillError::InvalidStride));
    }
    let total = (height - 1)
        .checked_mul(stride)
        .and_then(|t| t.checked_add(width))
        .ok_or_else(|| reject(FillError::OutOfBounds))?;
    if len < total {
        return Err(reject(FillError::OutOfBounds));
    }
    Ok(())
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// Set every cell of `buf` to `pixel`.
pub fn fill_pixels(buf: &mut [u32], pixel: u32) {
    incant!(fill_impl(buf, pixel), [v3, arm_v2, wasm128, scalar]);
}

/// Fill the first `width × height` cells of `canvas` with the packed color
/// `(r, g, b, a)`. Cells past the canvas are left alone.
///
/// Each cell receives the full [`pack_rgba`] word, so mixed channels such as
/// opaque red (`0xFF0000FF`) fill correctly. Zero width or height writes
/// nothing.
///
/// ```rust
/// let mut canvas = [0u32; 4];
/// daub::fill_canvas(2, 2, &mut canvas, 255, 0, 0, 255).unwrap();
/// assert_eq!(canvas, [0xFF00_00FF; 4]);
/// ```
///
/// # Errors
///
/// [`FillError::NegativeDimension`] if either dimension is negative,
/// [`FillError::OutOfBounds`] if `canvas` is shorter than `width × height`.
pub fn fill_canvas(
    width: i32,
    height: i32,
    canvas: &mut [u32],
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<(), FillError> {
    fill_canvas_with(width, height, canvas, pack_rgba(r, g, b, a))
}

/// [`fill_canvas`] for an already-packed pixel.
pub fn fill_canvas_with(
    width: i32,
    height: i32,
    canvas: &mut [u32],
    pixel: u32,
) -> Result<(), FillError> {
    let n = check_canvas(width, height, canvas.len(), 1)?;
    fill_pixels(&mut canvas[..n], pixel);
    Ok(())
}

/// Reset a `width × height` canvas to opaque white.
pub fn clear_canvas(width: i32, height: i32, canvas: &mut [u32]) -> Result<(), FillError> {
    fill_canvas_with(width, height, canvas, OPAQUE_WHITE)
}

/// Write `rgba` into every 4-byte pixel of `buf`.
pub fn fill_rgba_bytes(buf: &mut [u8], rgba: [u8; 4]) -> Result<(), FillError> {
    if !buf.len().is_multiple_of(4) {
        let len = buf.len();
        return Err(rejected(
            FillError::NotPixelAligned,
            format_args!("{len} bytes"),
        ));
    }
    incant!(fill_bytes_impl(buf, rgba), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

/// Fill a `width × height` canvas stored as RGBA bytes (`[r, g, b, a]` per
/// pixel, the layout of a browser `ImageData`).
///
/// Needs `4 × width × height` bytes; trailing bytes are left alone.
pub fn fill_canvas_bytes(
    width: i32,
    height: i32,
    buf: &mut [u8],
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<(), FillError> {
    let n = check_canvas(width, height, buf.len(), 4)?;
    let canvas = &mut buf[..n];
    let rgba = [r, g, b, a];
    incant!(fill_bytes_impl(canvas, rgba), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Fill a strided `width × height` region with `pixel`.
///
/// `stride` is the distance in pixels between the start of consecutive rows.
/// Must be ≥ `width`. Padding cells between rows are never written.
/// The buffer must be at least `(height - 1) * stride + width` cells.
/// Zero width or height writes nothing.
pub fn fill_canvas_strided(
    buf: &mut [u32],
    width: usize,
    height: usize,
    stride: usize,
    pixel: u32,
) -> Result<(), FillError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    check_strided(buf.len(), width, height, stride)?;
    incant!(
        fill_strided(buf, width, height, stride, pixel),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}
