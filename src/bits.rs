// https://graphics.stanford.edu/~seander/bithacks.html#InterleaveBMN
//
// Each mask keeps alternating runs of 1, 2, 4, 8, 16 and 32 bits.
const B0: u64 = 0x5555_5555_5555_5555;
const B1: u64 = 0x3333_3333_3333_3333;
const B2: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const B3: u64 = 0x00FF_00FF_00FF_00FF;
const B4: u64 = 0x0000_FFFF_0000_FFFF;
const B5: u64 = 0x0000_0000_FFFF_FFFF;

/// Spreads the 32 bits of `v` into the even bit positions of a `u64`.
#[inline]
fn spread(v: u32) -> u64 {
    let mut v = v as u64;
    v = (v | (v << 16)) & B4;
    v = (v | (v << 8)) & B3;
    v = (v | (v << 4)) & B2;
    v = (v | (v << 2)) & B1;
    v = (v | (v << 1)) & B0;
    v
}

/// Collects the even bit positions of `v` back into a `u32`.
#[inline]
fn squash(v: u64) -> u32 {
    let mut v = v & B0;
    v = (v | (v >> 1)) & B1;
    v = (v | (v >> 2)) & B2;
    v = (v | (v >> 4)) & B3;
    v = (v | (v >> 8)) & B4;
    v = (v | (v >> 16)) & B5;
    v as u32
}

/// Morton-interleaves two grid coordinates.
///
/// Bit `2i` of the result is bit `i` of `x` and bit `2i + 1` is bit `i` of
/// `y`. The geohash passes latitude as `x` and longitude as `y`, so bit 63 is
/// the top longitude bit and bit 62 the top latitude bit.
#[inline]
pub fn interleave(x: u32, y: u32) -> u64 {
    spread(x) | (spread(y) << 1)
}

/// Inverse of [`interleave`], returning `(x, y)`.
#[inline]
pub fn deinterleave(z: u64) -> (u32, u32) {
    (squash(z), squash(z >> 1))
}
