//! pixelfx
//!
//! Per-pixel and 3×3 neighborhood-convolution filters over raw RGBA pixel
//! buffers, for host applications that decode bitmaps themselves and consume
//! the transformed result. No file I/O, no codecs, no GPU.
//!
//! ## Image Format
//!
//! A [`PixelBuffer`] is `width × height` RGBA pixels, 8 bits per channel,
//! row-major and channel-interleaved (a flat byte slice of length
//! `width * height * 4`). Buffers are validated at construction; every filter
//! returns a newly allocated buffer of identical dimensions and never mutates
//! its input.
//!
//! ## Two API layers
//!
//! - The free functions below operate on [`PixelBuffer`] and are the
//!   host-facing surface.
//! - The [`filters`] modules expose the same operations over
//!   `ndarray::ArrayView3<u8>` of shape `(height, width, 4)` for callers that
//!   already hold array data (this is also what the Python bindings use).
//!
//! ## Boundary behavior
//!
//! The convolution filters leave the one-pixel border uncomputed (transparent
//! black), and the geometric remaps leave unreachable destinations the same
//! way; both are intentional, documented behavior of the filter set.
//!
//! Logging goes through the `log` facade; the library installs no logger.

pub mod buffer;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::{FilterError, PixelBuffer};
pub use filters::color_adjust::Tint;

/// Sobel edge detection; see [`filters::edge::edge_detect`].
pub fn edge_detect(input: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_array(filters::edge::edge_detect(input.view()))
}

/// Gaussian blur; `radius` is accepted but currently ignored (the fixed 3×3
/// kernel is always used). See [`filters::blur::gaussian_blur`].
pub fn gaussian_blur(input: &PixelBuffer, radius: u32) -> PixelBuffer {
    PixelBuffer::from_array(filters::blur::gaussian_blur(input.view(), radius))
}

/// 3×3 sharpen; see [`filters::sharpen::sharpen`].
pub fn sharpen(input: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_array(filters::sharpen::sharpen(input.view()))
}

/// Multiplicative brightness adjustment, `factor >= 0`; see
/// [`filters::color_adjust::adjust_brightness`].
pub fn adjust_brightness(input: &PixelBuffer, factor: f32) -> PixelBuffer {
    PixelBuffer::from_array(filters::color_adjust::adjust_brightness(input.view(), factor))
}

/// Tint RGB channels by [`Tint`] ratios; see
/// [`filters::color_adjust::colorize`].
pub fn colorize(input: &PixelBuffer, tint: Tint) -> PixelBuffer {
    PixelBuffer::from_array(filters::color_adjust::colorize(input.view(), tint))
}

/// Invert RGB channels; see [`filters::color_adjust::invert_colors`].
pub fn invert_colors(input: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_array(filters::color_adjust::invert_colors(input.view()))
}

/// Rotate about the image center (same-size output, nearest neighbor); see
/// [`filters::transform::rotate`].
pub fn rotate_image(input: &PixelBuffer, degrees: f32) -> PixelBuffer {
    PixelBuffer::from_array(filters::transform::rotate(input.view(), degrees))
}

/// Shear by `skew_x`/`skew_y` (forward mapping, same-size output); see
/// [`filters::transform::skew`].
pub fn skew_image(input: &PixelBuffer, skew_x: f32, skew_y: f32) -> PixelBuffer {
    PixelBuffer::from_array(filters::transform::skew(input.view(), skew_x, skew_y))
}

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::filters::blur;
    use crate::filters::color_adjust::{self, Tint};
    use crate::filters::edge;
    use crate::filters::sharpen as sharpen_mod;
    use crate::filters::transform;

    fn check_rgba(shape: &[usize]) -> PyResult<()> {
        if shape[2] != 4 {
            return Err(PyValueError::new_err(format!(
                "expected an RGBA image of shape (height, width, 4), got {} channels",
                shape[2]
            )));
        }
        Ok(())
    }

    /// Sobel edge detection on an RGBA u8 image.
    ///
    /// Output is grayscale edge magnitude in RGB with alpha 255; the
    /// one-pixel border is left transparent black.
    #[pyfunction]
    pub fn edge_detect<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(input.shape())?;
        Ok(edge::edge_detect(input).into_pyarray(py))
    }

    /// Gaussian blur on an RGBA u8 image.
    ///
    /// `radius` is accepted for interface compatibility but the fixed 3x3
    /// kernel is always used.
    #[pyfunction]
    #[pyo3(signature = (image, radius=1))]
    pub fn gaussian_blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        radius: u32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(input.shape())?;
        Ok(blur::gaussian_blur(input, radius).into_pyarray(py))
    }

    /// 3x3 sharpen on an RGBA u8 image.
    #[pyfunction]
    pub fn sharpen<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(input.shape())?;
        Ok(sharpen_mod::sharpen(input).into_pyarray(py))
    }

    /// Scale RGB channels by a non-negative factor, alpha preserved.
    #[pyfunction]
    pub fn adjust_brightness<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        factor: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(input.shape())?;
        Ok(color_adjust::adjust_brightness(input, factor).into_pyarray(py))
    }

    /// Tint RGB channels by per-channel ratios in 0-255, alpha preserved.
    #[pyfunction]
    #[pyo3(signature = (image, r=255, g=255, b=255))]
    pub fn colorize<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        r: u8,
        g: u8,
        b: u8,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(input.shape())?;
        Ok(color_adjust::colorize(input, Tint::new(r, g, b)).into_pyarray(py))
    }

    /// Invert RGB channels, alpha preserved.
    #[pyfunction]
    pub fn invert_colors<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(input.shape())?;
        Ok(color_adjust::invert_colors(input).into_pyarray(py))
    }

    /// Rotate about the image center; same-size output, nearest neighbor,
    /// uncovered pixels transparent black.
    #[pyfunction]
    pub fn rotate_image<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        degrees: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(input.shape())?;
        Ok(transform::rotate(input, degrees).into_pyarray(py))
    }

    /// Shear with forward mapping; same-size output, dropped or unwritten
    /// pixels transparent black.
    #[pyfunction]
    pub fn skew_image<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        skew_x: f32,
        skew_y: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(input.shape())?;
        Ok(transform::skew(input, skew_x, skew_y).into_pyarray(py))
    }

    #[pymodule]
    pub fn pixelfx(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Convolution filters
        m.add_function(wrap_pyfunction!(edge_detect, m)?)?;
        m.add_function(wrap_pyfunction!(gaussian_blur, m)?)?;
        m.add_function(wrap_pyfunction!(sharpen, m)?)?;

        // Per-pixel maps
        m.add_function(wrap_pyfunction!(adjust_brightness, m)?)?;
        m.add_function(wrap_pyfunction!(colorize, m)?)?;
        m.add_function(wrap_pyfunction!(invert_colors, m)?)?;

        // Geometric remaps
        m.add_function(wrap_pyfunction!(rotate_image, m)?)?;
        m.add_function(wrap_pyfunction!(skew_image, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixelfx;

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_gray(width: usize, height: usize, v: u8) -> PixelBuffer {
        let mut data = vec![v; width * height * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        PixelBuffer::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn test_all_ops_preserve_dimensions() {
        let input = opaque_gray(5, 4, 90);

        for output in [
            edge_detect(&input),
            gaussian_blur(&input, 1),
            sharpen(&input),
            adjust_brightness(&input, 1.5),
            colorize(&input, Tint::new(10, 20, 30)),
            invert_colors(&input),
            rotate_image(&input, 42.0),
            skew_image(&input, 0.5, -0.5),
        ] {
            assert_eq!(output.width(), input.width());
            assert_eq!(output.height(), input.height());
            assert_eq!(output.clone().into_vec().len(), 5 * 4 * 4);
        }
    }

    #[test]
    fn test_input_not_mutated_by_chaining() {
        let input = opaque_gray(3, 3, 100);
        let before = input.clone();

        let blurred = gaussian_blur(&input, 1);
        let _ = sharpen(&blurred);
        let _ = invert_colors(&input);

        assert_eq!(input, before);
    }

    #[test]
    fn test_invert_roundtrip_through_host_api() {
        let input = opaque_gray(2, 2, 77);
        let back = invert_colors(&invert_colors(&input));
        assert_eq!(back, input);
    }

    #[test]
    fn test_flat_bytes_contract() {
        // Mis-sized host buffer is rejected up front.
        assert!(matches!(
            PixelBuffer::from_vec(3, 3, vec![0u8; 35]),
            Err(FilterError::InvalidBuffer { expected: 36, actual: 35 })
        ));
    }
}
