//! RGBA pixel buffer type used at the library boundary.
//!
//! A [`PixelBuffer`] is a rectangular grid of `width × height` pixels, four
//! 8-bit channels per pixel (R, G, B, A), stored row-major and
//! channel-interleaved (stride = width × 4). Internally it is an
//! `ndarray::Array3<u8>` of shape `(height, width, 4)`, which has exactly
//! that byte layout.
//!
//! The length invariant (`data.len() == width * height * 4`) is checked once,
//! in [`PixelBuffer::from_vec`]. Every filter in this crate takes an already
//! constructed buffer, so the filters themselves are total and never fail.

use ndarray::{Array3, ArrayView3};
use std::error::Error;
use std::fmt;

/// Errors produced at the buffer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// The flat byte slice does not match `width * height * 4`.
    InvalidBuffer { expected: usize, actual: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidBuffer { expected, actual } => write!(
                f,
                "invalid pixel buffer: expected {expected} bytes (width * height * 4), got {actual}"
            )
        }
    }
}

impl Error for FilterError {}

/// An owned RGBA image buffer with known dimensions.
///
/// Construction validates the shape; after that the buffer is immutable from
/// the outside and every filter call allocates a fresh output, so input and
/// output are never aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Build a buffer from flat RGBA bytes in row-major order.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `data` - Flat bytes, length must be `width * height * 4`
    ///
    /// # Errors
    /// [`FilterError::InvalidBuffer`] if the length does not match the
    /// dimensions.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FilterError> {
        let actual = data.len();
        let data = Array3::from_shape_vec((height, width, 4), data).map_err(|_| {
            FilterError::InvalidBuffer { expected: width * height * 4, actual }
        })?;
        Ok(Self { data })
    }

    /// Zero-filled (transparent black) buffer of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: Array3::zeros((height, width, 4)) }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Read-only `(height, width, 4)` view for the filter kernels.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Consume the buffer, returning the flat RGBA bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data.into_raw_vec_and_offset().0
    }

    pub(crate) fn from_array(data: Array3<u8>) -> Self {
        Self { data }
    }
}
