// SPDX-License-Identifier: MPL-2.0

//! Pop-art compositor
//!
//! Splits the canvas into a 2x2 grid. Each quadrant shows the original frame
//! downsampled by two with one of four fixed color remaps:
//!
//! ```text
//! ┌──────────┬──────────┐
//! │ red      │ green    │
//! ├──────────┼──────────┤
//! │ blue     │ invert   │
//! └──────────┴──────────┘
//! ```
//!
//! With an odd width or height the last column or row is outside every
//! quadrant and keeps its original content.

use crate::frame::FrameBuffer;

/// Per-quadrant remaps, row-major from the top-left
pub const QUADRANT_EFFECTS: [fn(u8, u8, u8) -> [u8; 3]; 4] =
    [red_boost, green_boost, blue_boost, invert];

#[inline]
fn boost(c: u8) -> u8 {
    (c as u16 * 3 / 2).min(255) as u8
}

#[inline]
fn halve(c: u8) -> u8 {
    c / 2
}

pub fn red_boost(r: u8, g: u8, b: u8) -> [u8; 3] {
    [boost(r), halve(g), halve(b)]
}

pub fn green_boost(r: u8, g: u8, b: u8) -> [u8; 3] {
    [halve(r), boost(g), halve(b)]
}

pub fn blue_boost(r: u8, g: u8, b: u8) -> [u8; 3] {
    [halve(r), halve(g), boost(b)]
}

pub fn invert(r: u8, g: u8, b: u8) -> [u8; 3] {
    [255 - r, 255 - g, 255 - b]
}

/// Compose the four quadrants
///
/// With `stride` above 1 only every Nth quadrant pixel is sampled and the
/// sample fills its stride x stride cell.
pub fn apply_popart(frame: &mut FrameBuffer, stride: u32) {
    let (width, height) = frame.dimensions();
    let (quad_w, quad_h) = (width / 2, height / 2);
    if quad_w == 0 || quad_h == 0 {
        return;
    }

    let stride = stride.max(1) as usize;
    let source = frame.pixels().to_vec();
    let pixels = frame.pixels_mut();

    for (index, effect) in QUADRANT_EFFECTS.iter().enumerate() {
        let origin_x = (index % 2) * quad_w;
        let origin_y = (index / 2) * quad_h;

        for py in (0..quad_h).step_by(stride) {
            for px in (0..quad_w).step_by(stride) {
                let src = source[(py * 2) * width + px * 2];
                let [r, g, b] = effect(src[0], src[1], src[2]);

                for cy in py..(py + stride).min(quad_h) {
                    for cx in px..(px + stride).min(quad_w) {
                        // Alpha follows the source pixel feeding this cell
                        let alpha = source[(cy * 2) * width + cx * 2][3];
                        pixels[(origin_y + cy) * width + origin_x + cx] = [r, g, b, alpha];
                    }
                }
            }
        }
    }
}
