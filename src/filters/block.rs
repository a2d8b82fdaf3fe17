// SPDX-License-Identifier: MPL-2.0

//! Block quantizers: pixelate and ASCII
//!
//! Both tile the frame into non-overlapping square blocks; the last block in
//! each row and column is clipped to the frame edge.

use super::glyphs::{self, GLYPH_SIZE};
use crate::constants::ASCII_RAMP;
use crate::frame::FrameBuffer;

/// One tile of the frame, already clipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

fn blocks(width: usize, height: usize, size: usize) -> impl Iterator<Item = Block> {
    let size = size.max(1);
    (0..height).step_by(size).flat_map(move |y| {
        (0..width).step_by(size).map(move |x| Block {
            x,
            y,
            width: size.min(width - x),
            height: size.min(height - y),
        })
    })
}

/// Fill each block with its average color
pub fn apply_pixelate(frame: &mut FrameBuffer, block_size: u32) {
    let (width, height) = frame.dimensions();
    let pixels = frame.pixels_mut();

    for block in blocks(width, height, block_size as usize) {
        let mut sum = [0u64; 3];
        for y in block.y..block.y + block.height {
            for pixel in &pixels[y * width + block.x..y * width + block.x + block.width] {
                sum[0] += pixel[0] as u64;
                sum[1] += pixel[1] as u64;
                sum[2] += pixel[2] as u64;
            }
        }

        let count = (block.width * block.height) as u64;
        let avg = sum.map(|s| (s / count) as u8);

        for y in block.y..block.y + block.height {
            for pixel in &mut pixels[y * width + block.x..y * width + block.x + block.width] {
                pixel[0] = avg[0];
                pixel[1] = avg[1];
                pixel[2] = avg[2];
            }
        }
    }
}

/// Ramp index for an average brightness in [0, 255]
///
/// Floors `brightness / 255 * (len - 1)`, so brighter input never picks an
/// earlier (denser) glyph.
pub fn glyph_index(brightness: f32, ramp_len: usize) -> usize {
    if ramp_len == 0 {
        return 0;
    }
    let last = ramp_len - 1;
    let scaled = (brightness.clamp(0.0, 255.0) / 255.0 * last as f32).floor();
    (scaled as usize).min(last)
}

/// Average of (R + G + B) / 3 over every `step`-th pixel of the block
fn block_brightness(pixels: &[[u8; 4]], width: usize, block: Block, step: usize) -> f32 {
    let mut total = 0u64;
    let mut count = 0u64;
    for y in (block.y..block.y + block.height).step_by(step) {
        for x in (block.x..block.x + block.width).step_by(step) {
            let p = pixels[y * width + x];
            total += p[0] as u64 + p[1] as u64 + p[2] as u64;
            count += 1;
        }
    }
    // count >= 1: the first row and column are always sampled
    total as f32 / (3 * count) as f32
}

/// Replace each block with a white ramp glyph on black
///
/// The glyph is drawn at a font size equal to `block_size` and centered in
/// the block. Photo content is fully replaced; alpha is kept.
pub fn apply_ascii(frame: &mut FrameBuffer, block_size: u32, sample_step: u32) {
    let (width, height) = frame.dimensions();
    let size = block_size.max(1) as usize;
    let step = sample_step.max(1) as usize;
    let ramp: Vec<char> = ASCII_RAMP.chars().collect();
    let pixels = frame.pixels_mut();

    for block in blocks(width, height, size) {
        let brightness = block_brightness(pixels, width, block, step);
        let bitmap = glyphs::bitmap(ramp[glyph_index(brightness, ramp.len())]);

        // Glyph square origin, centered on the (possibly clipped) block
        let origin_x = block.x as isize + (block.width as isize - size as isize) / 2;
        let origin_y = block.y as isize + (block.height as isize - size as isize) / 2;

        for y in block.y..block.y + block.height {
            let gy = y as isize - origin_y;
            for x in block.x..block.x + block.width {
                let gx = x as isize - origin_x;
                let inside = (0..size as isize).contains(&gx) && (0..size as isize).contains(&gy);
                let lit = inside
                    && glyphs::is_set(
                        bitmap,
                        gx as usize * GLYPH_SIZE / size,
                        gy as usize * GLYPH_SIZE / size,
                    );

                let value = if lit { 255 } else { 0 };
                let pixel = &mut pixels[y * width + x];
                pixel[0] = value;
                pixel[1] = value;
                pixel[2] = value;
            }
        }
    }
}
