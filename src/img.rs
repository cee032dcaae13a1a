//! Whole-image and rectangle fills using [`imgref`] types.
//!
//! Strided images are filled with one dispatch for the whole image; the
//! padding between `width` and `stride` is never written.
//!
//! ```rust
//! use daub::img;
//!
//! let mut canvas = img::new_canvas(500, 500, daub::OPAQUE_WHITE);
//! img::fill_rect(&mut canvas, 10, 10, 20, 5, daub::pack_rgba(255, 0, 0, 255)).unwrap();
//! assert_eq!(canvas.buf()[10 * 500 + 10], 0xFF00_00FF);
//! assert_eq!(canvas.buf()[10 * 500 + 9], daub::OPAQUE_WHITE);
//! ```

use alloc::vec;

use imgref::ImgVec;
use rgb::Rgba;

use crate::fill::rejected;
use crate::{FillError, OPAQUE_WHITE};

/// Allocate a `width × height` canvas with every pixel set to `pixel`.
///
/// # Panics
///
/// If `width × height` overflows `usize`.
pub fn new_canvas(width: usize, height: usize, pixel: u32) -> ImgVec<u32> {
    let len = width
        .checked_mul(height)
        .expect("canvas pixel count overflows usize");
    ImgVec::new(vec![pixel; len], width, height)
}

/// Set every visible pixel of `img` to `pixel`.
pub fn fill_img(img: &mut ImgVec<u32>, pixel: u32) {
    let w = img.width();
    let h = img.height();
    let stride = img.stride();
    crate::fill_canvas_strided(img.buf_mut(), w, h, stride, pixel)
        .expect("ImgVec dimensions are always valid");
}

/// Reset `img` to opaque white.
pub fn clear_img(img: &mut ImgVec<u32>) {
    fill_img(img, OPAQUE_WHITE);
}

/// Fill the `width × height` rectangle whose top-left pixel is
/// `(left, top)`.
///
/// The rectangle must lie inside the image; it is not clipped. An empty
/// rectangle writes nothing.
pub fn fill_rect(
    img: &mut ImgVec<u32>,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
    pixel: u32,
) -> Result<(), FillError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    let fits = |start: usize, len: usize, limit: usize| {
        start.checked_add(len).is_some_and(|end| end <= limit)
    };
    if !fits(left, width, img.width()) || !fits(top, height, img.height()) {
        let (img_w, img_h) = (img.width(), img.height());
        return Err(rejected(
            FillError::OutOfBounds,
            format_args!("rect {width}x{height} at ({left}, {top}) on {img_w}x{img_h} image"),
        ));
    }
    let stride = img.stride();
    let start = top * stride + left;
    crate::fill_canvas_strided(&mut img.buf_mut()[start..], width, height, stride, pixel)
}

/// Set every visible pixel of an RGBA image to `color`.
pub fn fill_img_rgba(img: &mut ImgVec<Rgba<u8>>, color: Rgba<u8>) {
    for row in img.rows_mut() {
        crate::typed_rgb::fill_rgba(row, color);
    }
}
