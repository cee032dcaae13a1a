// ---------------------------------------------------------------------------
// Packed pixel values.
//
// Layout: big-endian RGBA in a u32 word. R in bits 31–24, G 23–16, B 15–8,
// A 7–0. `to_be_bytes()` of a packed pixel is `[r, g, b, a]`.
// ---------------------------------------------------------------------------

use core::fmt;

/// Opaque white, the blank canvas color.
pub const OPAQUE_WHITE: u32 = 0xFFFF_FFFF;

/// Opaque black.
pub const OPAQUE_BLACK: u32 = 0x0000_00FF;

/// Fully transparent black.
pub const TRANSPARENT: u32 = 0;

/// Pack four channels into one pixel: `(r << 24) | (g << 16) | (b << 8) | a`.
///
/// Total and lossless; [`unpack_rgba`] is the inverse.
///
/// ```rust
/// assert_eq!(daub::pack_rgba(255, 0, 0, 255), 0xFF00_00FF);
/// assert_eq!(daub::pack_rgba(1, 2, 3, 4), 0x0102_0304);
/// ```
#[inline(always)]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32
}

/// Split a packed pixel back into `[r, g, b, a]`.
#[inline(always)]
pub const fn unpack_rgba(pixel: u32) -> [u8; 4] {
    pixel.to_be_bytes()
}

// ===========================================================================
// Hex colors
// ===========================================================================

/// Why a hex color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseColorError {
    /// The string does not start with `#`.
    MissingHash,
    /// Digit count is not 3, 4, 6, or 8.
    InvalidLength,
    /// A character after `#` is not a hex digit.
    InvalidDigit,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingHash => "hex color must start with '#'",
            Self::InvalidLength => "hex color must have 3, 4, 6, or 8 digits",
            Self::InvalidDigit => "hex color contains a non-hex character",
        })
    }
}

impl core::error::Error for ParseColorError {}

#[inline]
fn nibble(c: u8) -> Result<u8, ParseColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseColorError::InvalidDigit),
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` into a packed pixel.
///
/// Short forms repeat each digit (`#f80` is `#ff8800`). Without an alpha
/// component the pixel is opaque.
///
/// ```rust
/// assert_eq!(daub::parse_hex("#ff0000"), Ok(0xFF00_00FF));
/// assert_eq!(daub::parse_hex("#0000"), Ok(daub::TRANSPARENT));
/// ```
pub fn parse_hex(s: &str) -> Result<u32, ParseColorError> {
    let digits = s
        .strip_prefix('#')
        .ok_or(ParseColorError::MissingHash)?
        .as_bytes();
    let mut ch = [0u8, 0, 0, 0xFF];
    match digits.len() {
        3 | 4 => {
            for (c, &d) in ch.iter_mut().zip(digits) {
                *c = nibble(d)? * 0x11;
            }
        }
        6 | 8 => {
            for (c, pair) in ch.iter_mut().zip(digits.chunks_exact(2)) {
                *c = (nibble(pair[0])? << 4) | nibble(pair[1])?;
            }
        }
        _ => return Err(ParseColorError::InvalidLength),
    }
    Ok(u32::from_be_bytes(ch))
}
