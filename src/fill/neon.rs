use archmage::prelude::*;

// ===========================================================================
// ARM NEON — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn fill_bytes_row_arm_v2(_token: Arm64V2Token, row: &mut [u8], rgba: [u8; 4]) {
    use core::arch::aarch64::{vdupq_n_u32, vreinterpretq_u8_u32};
    let splat = vreinterpretq_u8_u32(vdupq_n_u32(u32::from_ne_bytes(rgba)));
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, splat);
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[rite]
pub(super) fn fill_row_arm_v2(token: Arm64V2Token, row: &mut [u32], pixel: u32) {
    fill_bytes_row_arm_v2(token, bytemuck::cast_slice_mut(row), pixel.to_ne_bytes());
}

// ===========================================================================
// ARM NEON — arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn fill_impl_arm_v2(t: Arm64V2Token, b: &mut [u32], p: u32) {
    fill_row_arm_v2(t, b, p);
}
#[arcane]
pub(super) fn fill_bytes_impl_arm_v2(t: Arm64V2Token, b: &mut [u8], rgba: [u8; 4]) {
    fill_bytes_row_arm_v2(t, b, rgba);
}
#[arcane]
pub(super) fn fill_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u32],
    w: usize,
    h: usize,
    stride: usize,
    pixel: u32,
) {
    for y in 0..h {
        fill_row_arm_v2(t, &mut buf[y * stride..][..w], pixel);
    }
}
