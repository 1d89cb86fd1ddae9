//! Sobel edge detection.
//!
//! Produces a grayscale edge-magnitude image: each interior pixel gets the
//! gradient magnitude written into R, G and B with alpha forced to 255.
//!
//! ## Border policy
//!
//! Pixels without a full 3×3 neighborhood (the one-pixel border) are not
//! computed and stay at the output's zero-initialized default (0,0,0,0).
//! Callers that need opaque borders must fill them afterwards.

use log::trace;
use ndarray::{Array3, ArrayView3};

/// Horizontal Sobel kernel.
pub const SOBEL_GX: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical Sobel kernel.
pub const SOBEL_GY: [[i32; 3]; 3] = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Apply Sobel edge detection to an RGBA image.
///
/// Grayscale is taken as the plain channel mean (R+G+B)/3, then the two
/// Sobel kernels are accumulated over the 3×3 neighborhood and the magnitude
/// `sqrt(gx² + gy²)` is clamped to [0, 255].
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Edge-magnitude image with the same dimensions; R=G=B=magnitude, alpha 255
/// at interior pixels, (0,0,0,0) on the one-pixel border.
pub fn edge_detect(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    trace!("sobel edge detect on {width}x{height} image");

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut pixel_x = 0.0f32;
            let mut pixel_y = 0.0f32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let py = y + ky - 1;
                    let px = x + kx - 1;

                    let r = input[[py, px, 0]] as f32;
                    let g = input[[py, px, 1]] as f32;
                    let b = input[[py, px, 2]] as f32;
                    let gray = (r + g + b) / 3.0;

                    pixel_x += SOBEL_GX[ky][kx] as f32 * gray;
                    pixel_y += SOBEL_GY[ky][kx] as f32 * gray;
                }
            }

            let magnitude =
                (pixel_x * pixel_x + pixel_y * pixel_y).sqrt().clamp(0.0, 255.0) as u8;

            output[[y, x, 0]] = magnitude;
            output[[y, x, 1]] = magnitude;
            output[[y, x, 2]] = magnitude;
            output[[y, x, 3]] = 255;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_black_has_zero_gradient_interior() {
        // 3x3 opaque black: single interior pixel is (0,0,0,255).
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        for y in 0..3 {
            for x in 0..3 {
                img[[y, x, 3]] = 255;
            }
        }

        let result = edge_detect(img.view());

        assert_eq!(result[[1, 1, 0]], 0);
        assert_eq!(result[[1, 1, 1]], 0);
        assert_eq!(result[[1, 1, 2]], 0);
        assert_eq!(result[[1, 1, 3]], 255);
    }

    #[test]
    fn test_border_left_at_default() {
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        img.fill(255);

        let result = edge_detect(img.view());

        for y in 0..3 {
            for x in 0..3 {
                if y == 1 && x == 1 {
                    continue;
                }
                for c in 0..4 {
                    assert_eq!(result[[y, x, c]], 0, "border pixel ({x},{y}) ch {c}");
                }
            }
        }
    }

    #[test]
    fn test_vertical_edge_saturates() {
        // Left column white, rest black: |gx| = 4 * 255 at the interior
        // pixel, magnitude clamps to 255.
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        for y in 0..3 {
            for c in 0..3 {
                img[[y, 0, c]] = 255;
            }
        }

        let result = edge_detect(img.view());

        assert_eq!(result[[1, 1, 0]], 255);
        assert_eq!(result[[1, 1, 1]], 255);
        assert_eq!(result[[1, 1, 2]], 255);
        assert_eq!(result[[1, 1, 3]], 255);
    }

    #[test]
    fn test_uniform_image_is_flat() {
        let mut img = Array3::<u8>::zeros((5, 5, 4));
        for y in 0..5 {
            for x in 0..5 {
                img[[y, x, 0]] = 120;
                img[[y, x, 1]] = 60;
                img[[y, x, 2]] = 30;
                img[[y, x, 3]] = 255;
            }
        }

        let result = edge_detect(img.view());

        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(result[[y, x, 0]], 0);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = Array3::<u8>::zeros((7, 4, 4));
        let result = edge_detect(img.view());
        assert_eq!(result.dim(), (7, 4, 4));
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        // No interior pixels at all: everything stays zero.
        let img = Array3::<u8>::zeros((2, 2, 4));
        let result = edge_detect(img.view());
        assert!(result.iter().all(|&v| v == 0));

        let img = Array3::<u8>::zeros((1, 5, 4));
        let result = edge_detect(img.view());
        assert!(result.iter().all(|&v| v == 0));
    }
}
