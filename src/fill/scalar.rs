use archmage::prelude::*;

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn fill_row_scalar(_token: ScalarToken, row: &mut [u32], pixel: u32) {
    row.fill(pixel);
}

pub(super) fn fill_bytes_row_scalar(_token: ScalarToken, row: &mut [u8], rgba: [u8; 4]) {
    for px in row.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn fill_impl_scalar(t: ScalarToken, b: &mut [u32], p: u32) {
    fill_row_scalar(t, b, p);
}
pub(super) fn fill_bytes_impl_scalar(t: ScalarToken, b: &mut [u8], rgba: [u8; 4]) {
    fill_bytes_row_scalar(t, b, rgba);
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn fill_strided_scalar(
    t: ScalarToken,
    buf: &mut [u32],
    w: usize,
    h: usize,
    stride: usize,
    pixel: u32,
) {
    for y in 0..h {
        fill_row_scalar(t, &mut buf[y * stride..][..w], pixel);
    }
}
