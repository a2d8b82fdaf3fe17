// SPDX-License-Identifier: MPL-2.0

//! Pencil sketch via Sobel edge detection
//!
//! Two passes: grayscale every pixel, then write an inverted gradient
//! magnitude for each interior pixel into a separate output so the kernel
//! never reads a value it already overwrote. The one-pixel border keeps its
//! grayscale value since the kernel is undefined there.

use super::color::luma;
use crate::frame::FrameBuffer;

pub fn apply_sketch(frame: &mut FrameBuffer) {
    let (width, height) = frame.dimensions();

    // Pass 1: grayscale in place, keeping a luma plane for the kernel
    let mut gray = Vec::with_capacity(width * height);
    for pixel in frame.pixels_mut() {
        let value = luma(pixel[0], pixel[1], pixel[2]);
        pixel[0] = value;
        pixel[1] = value;
        pixel[2] = value;
        gray.push(value as i32);
    }

    if width < 3 || height < 3 {
        return;
    }

    // Pass 2: gradient into a copy, then swap it in wholesale
    let mut output = frame.pixels().to_vec();
    let sample = |x: usize, y: usize| gray[y * width + x];

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let tl = sample(x - 1, y - 1);
            let tm = sample(x, y - 1);
            let tr = sample(x + 1, y - 1);
            let ml = sample(x - 1, y);
            let mr = sample(x + 1, y);
            let bl = sample(x - 1, y + 1);
            let bm = sample(x, y + 1);
            let br = sample(x + 1, y + 1);

            let gx = (tr + 2 * mr + br) - (tl + 2 * ml + bl);
            let gy = (bl + 2 * bm + br) - (tl + 2 * tm + tr);
            let magnitude = ((gx * gx + gy * gy) as f32).sqrt();

            // Dark lines on white paper
            let edge = (255.0 - magnitude.min(255.0)) as u8;

            let pixel = &mut output[y * width + x];
            pixel[0] = edge;
            pixel[1] = edge;
            pixel[2] = edge;
        }
    }

    frame.pixels_mut().copy_from_slice(&output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_input_has_no_edges() {
        let mut frame = FrameBuffer::filled(6, 5, [90, 140, 200, 255]).unwrap();
        apply_sketch(&mut frame);

        let gray = luma(90, 140, 200);
        for y in 0..5 {
            for x in 0..6 {
                let [r, g, b, a] = frame.pixel(x, y).unwrap();
                let interior = x > 0 && x < 5 && y > 0 && y < 4;
                let expected = if interior { 255 } else { gray };
                assert_eq!([r, g, b, a], [expected, expected, expected, 255]);
            }
        }
    }

    #[test]
    fn test_vertical_edge_is_dark() {
        // Left half black, right half white
        let mut frame = FrameBuffer::filled(4, 3, [0, 0, 0, 255]).unwrap();
        for y in 0..3 {
            for x in 2..4 {
                frame.pixels_mut()[y * 4 + x] = [255, 255, 255, 255];
            }
        }
        apply_sketch(&mut frame);

        // Gx = 4 * 255 at the boundary, clamped to full ink
        assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
        assert_eq!(frame.pixel(2, 1), Some([0, 0, 0, 255]));
        // Border row keeps its grayscale value
        assert_eq!(frame.pixel(1, 0), Some([0, 0, 0, 255]));
        assert_eq!(frame.pixel(2, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_tiny_frame_is_grayscale_only() {
        let mut frame = FrameBuffer::filled(2, 2, [255, 0, 0, 9]).unwrap();
        apply_sketch(&mut frame);
        assert!(frame.pixels().iter().all(|p| *p == [76, 76, 76, 9]));
    }
}
