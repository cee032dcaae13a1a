use core::arch::wasm32::u32x4_splat;

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::v128_store;

// ===========================================================================
// WASM SIMD128 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn fill_bytes_row_wasm128(_token: Wasm128Token, row: &mut [u8], rgba: [u8; 4]) {
    let splat = u32x4_splat(u32::from_ne_bytes(rgba));
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        v128_store(out, splat);
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[rite]
pub(super) fn fill_row_wasm128(token: Wasm128Token, row: &mut [u32], pixel: u32) {
    fill_bytes_row_wasm128(token, bytemuck::cast_slice_mut(row), pixel.to_ne_bytes());
}

// ===========================================================================
// WASM SIMD128 — arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn fill_impl_wasm128(t: Wasm128Token, b: &mut [u32], p: u32) {
    fill_row_wasm128(t, b, p);
}
#[arcane]
pub(super) fn fill_bytes_impl_wasm128(t: Wasm128Token, b: &mut [u8], rgba: [u8; 4]) {
    fill_bytes_row_wasm128(t, b, rgba);
}
#[arcane]
pub(super) fn fill_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u32],
    w: usize,
    h: usize,
    stride: usize,
    pixel: u32,
) {
    for y in 0..h {
        fill_row_wasm128(t, &mut buf[y * stride..][..w], pixel);
    }
}
