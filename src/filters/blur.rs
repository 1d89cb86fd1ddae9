//! Gaussian blur with a fixed 3×3 kernel.
//!
//! The `radius` parameter is accepted for interface compatibility but has no
//! effect: the filter always convolves with the fixed kernel below. Interior
//! pixels get the per-channel weighted RGB average with alpha forced to 255;
//! the one-pixel border is left at the output's zero-initialized default.

use log::{trace, warn};
use ndarray::{Array3, ArrayView3};

/// 3×3 Gaussian approximation.
pub const GAUSSIAN_KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Normalization divisor (the kernel weight sum).
pub const GAUSSIAN_WEIGHT: u32 = 16;

/// Apply Gaussian blur to an RGBA image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `radius` - Accepted but currently ignored; the fixed 3×3 kernel is
///   always used
///
/// # Returns
/// Blurred image with the same dimensions; alpha 255 at interior pixels,
/// (0,0,0,0) on the one-pixel border.
pub fn gaussian_blur(input: ArrayView3<u8>, radius: u32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    if radius != 1 {
        warn!("blur radius {radius} requested, but only the fixed 3x3 kernel is implemented");
    }
    trace!("gaussian blur on {width}x{height} image");

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut r = 0u32;
            let mut g = 0u32;
            let mut b = 0u32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let py = y + ky - 1;
                    let px = x + kx - 1;
                    let weight = GAUSSIAN_KERNEL[ky][kx];

                    r += input[[py, px, 0]] as u32 * weight;
                    g += input[[py, px, 1]] as u32 * weight;
                    b += input[[py, px, 2]] as u32 * weight;
                }
            }

            output[[y, x, 0]] = (r / GAUSSIAN_WEIGHT) as u8;
            output[[y, x, 1]] = (g / GAUSSIAN_WEIGHT) as u8;
            output[[y, x, 2]] = (b / GAUSSIAN_WEIGHT) as u8;
            output[[y, x, 3]] = 255;
        }
    }

    output
}
