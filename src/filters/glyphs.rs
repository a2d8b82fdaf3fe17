// SPDX-License-Identifier: MPL-2.0

//! 8x8 monochrome bitmaps for the ASCII ramp
//!
//! One byte per row, most significant bit is the leftmost pixel.

/// Side length of a glyph bitmap
pub const GLYPH_SIZE: usize = 8;

type Bitmap = [u8; GLYPH_SIZE];

const AT: Bitmap = [
    0b0011_1100,
    0b0100_0010,
    0b1001_1010,
    0b1010_1010,
    0b1001_1100,
    0b1000_0000,
    0b0111_1100,
    0b0000_0000,
];

const PERCENT: Bitmap = [
    0b1100_0010,
    0b1100_0100,
    0b0000_1000,
    0b0001_0000,
    0b0010_0000,
    0b0100_0110,
    0b1000_0110,
    0b0000_0000,
];

const HASH: Bitmap = [
    0b0010_0100,
    0b0010_0100,
    0b0111_1110,
    0b0010_0100,
    0b0111_1110,
    0b0010_0100,
    0b0010_0100,
    0b0000_0000,
];

const STAR: Bitmap = [
    0b0000_0000,
    0b0101_0100,
    0b0011_1000,
    0b0111_1100,
    0b0011_1000,
    0b0101_0100,
    0b0000_0000,
    0b0000_0000,
];

const PLUS: Bitmap = [
    0b0000_0000,
    0b0001_0000,
    0b0001_0000,
    0b0111_1100,
    0b0001_0000,
    0b0001_0000,
    0b0000_0000,
    0b0000_0000,
];

const EQUALS: Bitmap = [
    0b0000_0000,
    0b0000_0000,
    0b0111_1100,
    0b0000_0000,
    0b0111_1100,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
];

const MINUS: Bitmap = [
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0111_1100,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
];

const COLON: Bitmap = [
    0b0000_0000,
    0b0001_1000,
    0b0001_1000,
    0b0000_0000,
    0b0001_1000,
    0b0001_1000,
    0b0000_0000,
    0b0000_0000,
];

const PERIOD: Bitmap = [
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0001_1000,
    0b0001_1000,
    0b0000_0000,
];

const BLANK: Bitmap = [0; GLYPH_SIZE];

/// Bitmap for a ramp character; unknown characters render blank
pub fn bitmap(ch: char) -> &'static Bitmap {
    match ch {
        '@' => &AT,
        '%' => &PERCENT,
        '#' => &HASH,
        '*' => &STAR,
        '+' => &PLUS,
        '=' => &EQUALS,
        '-' => &MINUS,
        ':' => &COLON,
        '.' => &PERIOD,
        _ => &BLANK,
    }
}

/// Whether the glyph covers bitmap cell (gx, gy)
#[inline]
pub fn is_set(bitmap: &Bitmap, gx: usize, gy: usize) -> bool {
    bitmap[gy] & (0x80 >> gx) != 0
}
