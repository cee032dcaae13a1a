use archmage::prelude::*;
use safe_unaligned_simd::x86_64::_mm256_storeu_si256;

// ===========================================================================
// x86-64 AVX2 — rite row implementations
//
// The 4-byte pixel is broadcast to all eight i32 lanes, then stored
// 32 bytes at a time. The tail is written pixel by pixel.
// ===========================================================================

#[rite]
pub(super) fn fill_bytes_row_v3(_token: X64V3Token, row: &mut [u8], rgba: [u8; 4]) {
    let splat = _mm256_set1_epi32(i32::from_ne_bytes(rgba));
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, splat);
        i += 32;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[rite]
pub(super) fn fill_row_v3(token: X64V3Token, row: &mut [u32], pixel: u32) {
    fill_bytes_row_v3(token, bytemuck::cast_slice_mut(row), pixel.to_ne_bytes());
}

// ===========================================================================
// x86-64 AVX2 — arcane wrappers (contiguous)
// ===========================================================================

#[arcane]
pub(super) fn fill_impl_v3(t: X64V3Token, b: &mut [u32], p: u32) {
    fill_row_v3(t, b, p);
}
#[arcane]
pub(super) fn fill_bytes_impl_v3(t: X64V3Token, b: &mut [u8], rgba: [u8; 4]) {
    fill_bytes_row_v3(t, b, rgba);
}

// ===========================================================================
// x86-64 AVX2 — arcane wrappers (strided)
// ===========================================================================

#[arcane]
pub(super) fn fill_strided_v3(
    t: X64V3Token,
    buf: &mut [u32],
    w: usize,
    h: usize,
    stride: usize,
    pixel: u32,
) {
    for y in 0..h {
        fill_row_v3(t, &mut buf[y * stride..][..w], pixel);
    }
}
