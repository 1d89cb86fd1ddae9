//! Geometric remaps: rotation and skew.
//!
//! Both produce an output of the same dimensions as the input (no bounding
//! box expansion) and sample nearest-neighbor, copying all four channels
//! verbatim. Pixels that no source maps to keep the output's zero-initialized
//! default (transparent black).
//!
//! Rotation uses inverse mapping (destination → source) so the result has no
//! holes; skew uses forward mapping (source → destination), which can drop
//! destinations entirely or write one destination from several sources, in
//! which case the last write in scan order wins.

use log::trace;
use ndarray::{Array3, ArrayView3};

/// Rotate an RGBA image about its center by `degrees`.
///
/// For each destination pixel the center-relative coordinate is rotated by
/// the inverse matrix and floored to integer source indices. With the
/// y-down raster coordinates used here, a positive angle rotates image
/// content counter-clockwise on screen.
///
/// Destination pixels whose source falls outside the image stay at
/// (0,0,0,0); there is no wraparound, edge clamping, or interpolation.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `degrees` - Rotation angle, any real number
pub fn rotate(input: ArrayView3<u8>, degrees: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    let (sin, cos) = degrees.to_radians().sin_cos();
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;

    trace!("rotate {width}x{height} image by {degrees} degrees");

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;

            let src_x = (cos * dx + sin * dy + cx).floor();
            let src_y = (-sin * dx + cos * dy + cy).floor();

            if src_x < 0.0 || src_y < 0.0 || src_x >= width as f32 || src_y >= height as f32 {
                continue;
            }

            let sx = src_x as usize;
            let sy = src_y as usize;
            for c in 0..4 {
                output[[y, x, c]] = input[[sy, sx, c]];
            }
        }
    }

    output
}

/// Shear an RGBA image by the given factors.
///
/// Forward mapping: source pixel (x, y) lands at
/// `dest_x = floor(x + skew_y * y)`, `dest_y = floor(y + skew_x * x)`.
/// Out-of-bounds destinations are silently dropped; destinations written by
/// more than one source keep the last write in scan order; destinations no
/// source reaches stay at (0,0,0,0).
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `skew_x` - Vertical shear per source column
/// * `skew_y` - Horizontal shear per source row
pub fn skew(input: ArrayView3<u8>, skew_x: f32, skew_y: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    trace!("skew {width}x{height} image by ({skew_x}, {skew_y})");

    for y in 0..height {
        for x in 0..width {
            let dest_x = (x as f32 + skew_y * y as f32).floor();
            let dest_y = (y as f32 + skew_x * x as f32).floor();

            if dest_x < 0.0 || dest_y < 0.0 || dest_x >= width as f32 || dest_y >= height as f32
            {
                continue;
            }

            let dx = dest_x as usize;
            let dy = dest_y as usize;
            for c in 0..4 {
                output[[dy, dx, c]] = input[[y, x, c]];
            }
        }
    }

    output
}
