//! 3×3 sharpen filter.
//!
//! Classic center-weighted sharpen kernel with no normalization; per-channel
//! sums are clamped into byte range. Same border policy as the other
//! convolution filters: the one-pixel border stays at the zero-initialized
//! default.

use log::trace;
use ndarray::{Array3, ArrayView3};

/// Sharpen kernel (weight sum 1, so flat regions pass through unchanged).
pub const SHARPEN_KERNEL: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Apply the sharpen filter to an RGBA image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Sharpened image with the same dimensions; alpha 255 at interior pixels,
/// (0,0,0,0) on the one-pixel border.
pub fn sharpen(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    trace!("sharpen on {width}x{height} image");

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut r = 0i32;
            let mut g = 0i32;
            let mut b = 0i32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let py = y + ky - 1;
                    let px = x + kx - 1;
                    let weight = SHARPEN_KERNEL[ky][kx];

                    r += input[[py, px, 0]] as i32 * weight;
                    g += input[[py, px, 1]] as i32 * weight;
                    b += input[[py, px, 2]] as i32 * weight;
                }
            }

            output[[y, x, 0]] = r.clamp(0, 255) as u8;
            output[[y, x, 1]] = g.clamp(0, 255) as u8;
            output[[y, x, 2]] = b.clamp(0, 255) as u8;
            output[[y, x, 3]] = 255;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_region_unchanged() {
        // Weight sum is 1: 5c - 4c = c for uniform input.
        let mut img = Array3::<u8>::zeros((4, 4, 4));
        for y in 0..4 {
            for x in 0..4 {
                img[[y, x, 0]] = 100;
                img[[y, x, 1]] = 150;
                img[[y, x, 2]] = 200;
                img[[y, x, 3]] = 255;
            }
        }

        let result = sharpen(img.view());

        for y in 1..3 {
            for x in 1..3 {
                assert_eq!(result[[y, x, 0]], 100);
                assert_eq!(result[[y, x, 1]], 150);
                assert_eq!(result[[y, x, 2]], 200);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_bright_spike_clamps_high() {
        // 5 * 200 with black neighbors = 1000, clamped to 255.
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        img[[1, 1, 0]] = 200;

        let result = sharpen(img.view());
        assert_eq!(result[[1, 1, 0]], 255);
        assert_eq!(result[[1, 1, 1]], 0);
    }

    #[test]
    fn test_dark_pixel_clamps_low() {
        // Black center surrounded by white: 0 - 4 * 255 clamps to 0.
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        for y in 0..3 {
            for x in 0..3 {
                if y == 1 && x == 1 {
                    continue;
                }
                for c in 0..3 {
                    img[[y, x, c]] = 255;
                }
            }
        }

        let result = sharpen(img.view());
        assert_eq!(result[[1, 1, 0]], 0);
        assert_eq!(result[[1, 1, 3]], 255);
    }

    #[test]
    fn test_border_left_at_default() {
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        img.fill(200);

        let result = sharpen(img.view());

        for y in 0..3 {
            for x in 0..3 {
                if y == 1 && x == 1 {
                    continue;
                }
                for c in 0..4 {
                    assert_eq!(result[[y, x, c]], 0);
                }
            }
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = Array3::<u8>::zeros((5, 8, 4));
        let result = sharpen(img.view());
        assert_eq!(result.dim(), (5, 8, 4));
    }
}
