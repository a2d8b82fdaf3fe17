// SPDX-License-Identifier: MPL-2.0

//! Geometric remappers: fisheye warp and horizontal mirror

use crate::frame::FrameBuffer;

/// Radial fisheye warp using inverse mapping
///
/// For every visited destination pixel inside the circle of radius
/// `min(cx, cy)`, the source pixel is `center + offset * (d / radius)^2`.
/// Pixels outside the circle keep their original content. With a stride
/// above 1 only every Nth pixel on each axis is written; the rest keep
/// their pre-transform value.
pub fn apply_fisheye(frame: &mut FrameBuffer, stride: u32) {
    let (width, height) = frame.dimensions();
    let stride = stride.max(1) as usize;
    let center_x = (width / 2) as f32;
    let center_y = (height / 2) as f32;
    let radius = center_x.min(center_y);

    if radius <= 0.0 {
        return;
    }

    let source = frame.pixels().to_vec();
    let pixels = frame.pixels_mut();

    for y in (0..height).step_by(stride) {
        for x in (0..width).step_by(stride) {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance >= radius {
                continue;
            }

            let factor = (distance / radius).powi(2);
            let src_x = (center_x + dx * factor).floor();
            let src_y = (center_y + dy * factor).floor();

            // Out-of-bounds samples skip the pixel rather than the frame
            if src_x < 0.0 || src_y < 0.0 || src_x >= width as f32 || src_y >= height as f32 {
                continue;
            }

            pixels[y * width + x] = source[src_y as usize * width + src_x as usize];
        }
    }
}

/// Flip the frame horizontally
pub fn apply_mirror(frame: &mut FrameBuffer) {
    let (width, _) = frame.dimensions();
    for row in frame.pixels_mut().chunks_exact_mut(width) {
        row.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> FrameBuffer {
        let data = (0..width * height)
            .flat_map(|i| [(i % 256) as u8, (i / 256) as u8, 7, 255])
            .collect();
        FrameBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn test_fisheye_center_is_fixed() {
        let original = gradient(2, 2);
        let mut frame = original.clone();
        apply_fisheye(&mut frame, 1);
        assert_eq!(frame, original);
    }

    #[test]
    fn test_fisheye_keeps_corners() {
        let original = gradient(9, 9);
        let mut frame = original.clone();
        apply_fisheye(&mut frame, 1);
        for (x, y) in [(0, 0), (8, 0), (0, 8), (8, 8)] {
            assert_eq!(frame.pixel(x, y), original.pixel(x, y));
        }
        assert_eq!(frame.pixel(4, 4), original.pixel(4, 4));
    }

    #[test]
    fn test_fisheye_pulls_toward_center() {
        let original = gradient(9, 9);
        let mut frame = original.clone();
        apply_fisheye(&mut frame, 1);
        // (6, 4): dx = 2, factor = (2/4)^2, source x = 4 + 0.5
        assert_eq!(frame.pixel(6, 4), original.pixel(4, 4));
    }

    #[test]
    fn test_fisheye_preview_stride_skips() {
        let original = gradient(9, 9);
        let mut frame = original.clone();
        apply_fisheye(&mut frame, 2);
        // Odd coordinates are never visited
        assert_eq!(frame.pixel(5, 5), original.pixel(5, 5));
    }

    #[test]
    fn test_mirror_flips_rows() {
        let data = vec![1, 1, 1, 10, 2, 2, 2, 20, 3, 3, 3, 30, 4, 4, 4, 40];
        let mut frame = FrameBuffer::new(2, 2, data).unwrap();
        apply_mirror(&mut frame);
        assert_eq!(
            frame.as_bytes(),
            &[2, 2, 2, 20, 1, 1, 1, 10, 4, 4, 4, 40, 3, 3, 3, 30]
        );
    }
}
