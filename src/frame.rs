// SPDX-License-Identifier: MPL-2.0

//! RGBA frame buffers
//!
//! A [`FrameBuffer`] is a tightly packed, row-major RGBA8 pixel grid. The
//! length invariant (`data.len() == width * height * 4`) is checked once at
//! construction, so filters can index freely afterwards.

use crate::constants::BYTES_PER_PIXEL;
use crate::errors::{FrameError, FrameResult, PipelineError};
use image::RgbaImage;

/// Rectangular RGBA8 pixel grid, row-major, no padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Expected byte length for a frame, or the reason it can't exist
fn expected_len(width: u32, height: u32) -> FrameResult<usize> {
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(FrameError::Overflow { width, height })
}

/// Validate a raw RGBA slice against its claimed dimensions
pub fn validate_rgba(data: &[u8], width: u32, height: u32) -> FrameResult<()> {
    let expected = expected_len(width, height)?;
    if data.len() != expected {
        return Err(FrameError::SizeMismatch {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

impl FrameBuffer {
    /// Wrap raw RGBA bytes, validating the length against the dimensions
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> FrameResult<Self> {
        validate_rgba(&data, width, height)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a frame where every pixel has the same RGBA value
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> FrameResult<Self> {
        let len = expected_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height) as usize, for indexing
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// View the frame as whole pixels
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    /// Mutable view of the frame as whole pixels
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    /// Pixel at (x, y), or None when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels()[y as usize * self.width as usize + x as usize])
    }

    /// Take back the raw RGBA bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Convert into an `image` buffer for encoding or display
    pub fn into_rgba_image(self) -> Result<RgbaImage, PipelineError> {
        let (width, height) = (self.width, self.height);
        RgbaImage::from_raw(width, height, self.data).ok_or_else(|| {
            PipelineError::Image(format!(
                "Failed to create {}x{} RGBA image from frame data",
                width, height
            ))
        })
    }
}

impl TryFrom<RgbaImage> for FrameBuffer {
    type Error = FrameError;

    fn try_from(image: RgbaImage) -> FrameResult<Self> {
        let (width, height) = image.dimensions();
        FrameBuffer::new(width, height, image.into_raw())
    }
}
