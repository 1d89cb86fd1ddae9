//! WebAssembly exports for the pixelfx filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and use the
//! flat-byte convention: RGBA bytes in row-major order, `width * height * 4`
//! long. A mis-sized buffer raises a JS exception (the `InvalidBuffer`
//! contract) instead of reading out of bounds.

use wasm_bindgen::prelude::*;

use crate::buffer::PixelBuffer;
use crate::filters::color_adjust::Tint;

/// Sobel edge detection.
///
/// # Arguments
/// * `data` - Flat RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
#[wasm_bindgen]
pub fn edge_detect_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let input = PixelBuffer::from_vec(width, height, data.to_vec())?;
    Ok(crate::edge_detect(&input).into_vec())
}

/// Gaussian blur; `radius` is accepted but the fixed 3x3 kernel is always
/// used.
#[wasm_bindgen]
pub fn gaussian_blur_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    radius: u32,
) -> Result<Vec<u8>, JsError> {
    let input = PixelBuffer::from_vec(width, height, data.to_vec())?;
    Ok(crate::gaussian_blur(&input, radius).into_vec())
}

/// 3x3 sharpen.
#[wasm_bindgen]
pub fn sharpen_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let input = PixelBuffer::from_vec(width, height, data.to_vec())?;
    Ok(crate::sharpen(&input).into_vec())
}

/// Multiplicative brightness adjustment (`factor >= 0`), alpha preserved.
#[wasm_bindgen]
pub fn adjust_brightness_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    factor: f32,
) -> Result<Vec<u8>, JsError> {
    let input = PixelBuffer::from_vec(width, height, data.to_vec())?;
    Ok(crate::adjust_brightness(&input, factor).into_vec())
}

/// Tint RGB channels by per-channel ratios in 0-255, alpha preserved.
#[wasm_bindgen]
pub fn colorize_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    r: u8,
    g: u8,
    b: u8,
) -> Result<Vec<u8>, JsError> {
    let input = PixelBuffer::from_vec(width, height, data.to_vec())?;
    Ok(crate::colorize(&input, Tint::new(r, g, b)).into_vec())
}

/// Invert RGB channels, alpha preserved.
#[wasm_bindgen]
pub fn invert_colors_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let input = PixelBuffer::from_vec(width, height, data.to_vec())?;
    Ok(crate::invert_colors(&input).into_vec())
}

/// Rotate about the image center; same-size output, nearest neighbor.
#[wasm_bindgen]
pub fn rotate_image_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    degrees: f32,
) -> Result<Vec<u8>, JsError> {
    let input = PixelBuffer::from_vec(width, height, data.to_vec())?;
    Ok(crate::rotate_image(&input, degrees).into_vec())
}

/// Shear with forward mapping; same-size output.
#[wasm_bindgen]
pub fn skew_image_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    skew_x: f32,
    skew_y: f32,
) -> Result<Vec<u8>, JsError> {
    let input = PixelBuffer::from_vec(width, height, data.to_vec())?;
    Ok(crate::skew_image(&input, skew_x, skew_y).into_vec())
}
