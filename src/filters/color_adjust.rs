//! Per-pixel color adjustments: brightness, colorize, invert.
//!
//! All three map RGB channels independently and pass alpha through unchanged.

use ndarray::{Array3, ArrayView3};

/// Tint ratios for [`colorize`], one per color channel.
///
/// Each component is a percentage-style multiplier in [0, 255]: 255 keeps the
/// channel as-is, 0 zeroes it. Because the components are bytes, the tint
/// product `in * tint / 255` can never leave byte range, so colorize needs no
/// clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    /// Identity tint (keeps all channels unchanged).
    pub const WHITE: Tint = Tint { r: 255, g: 255, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Scale RGB channels by a non-negative factor.
///
/// Factors below 1.0 darken, above 1.0 brighten. Results are clamped at 255
/// (no lower clamp is needed since both factor and channel are non-negative).
/// Alpha is passed through unchanged.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `factor` - Multiplier, must be >= 0
pub fn adjust_brightness(input: ArrayView3<u8>, factor: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                output[[y, x, c]] = (input[[y, x, c]] as f32 * factor).min(255.0) as u8;
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

/// Tint an image: `out = in * tint / 255` per RGB channel.
///
/// Alpha is passed through unchanged. [`Tint::WHITE`] is the identity.
pub fn colorize(input: ArrayView3<u8>, tint: Tint) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));
    let tint = [tint.r, tint.g, tint.b];

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                output[[y, x, c]] =
                    (input[[y, x, c]] as u16 * tint[c] as u16 / 255) as u8;
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

/// Invert RGB channels (`255 - v`), passing alpha through unchanged.
///
/// Involutive: applying it twice restores the original image.
pub fn invert_colors(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                output[[y, x, c]] = 255 - input[[y, x, c]];
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}
