//! Filter kernels over RGBA image arrays.
//!
//! Every function here takes a read-only `(height, width, 4)` view and
//! returns a freshly allocated array of the same dimensions; inputs are never
//! mutated and never aliased with outputs. All operations are single-pass and
//! stateless, so independent calls are trivially parallelizable by the
//! caller.
//!
//! ## Filter Categories
//!
//! - **Convolution** (fixed 3×3 kernels): [`edge::edge_detect`],
//!   [`blur::gaussian_blur`], [`sharpen::sharpen`]. These compute interior
//!   pixels only; the one-pixel border stays at the zero-initialized default.
//! - **Per-pixel maps**: [`color_adjust::adjust_brightness`],
//!   [`color_adjust::colorize`], [`color_adjust::invert_colors`]. These touch
//!   every pixel and pass alpha through unchanged.
//! - **Coordinate remaps**: [`transform::rotate`] (inverse mapping),
//!   [`transform::skew`] (forward mapping). Same-size output,
//!   nearest-neighbor sampling, unreached pixels stay at the default.
//!
//! Intermediate arithmetic may overflow byte range; every value is clamped or
//! bounded back into [0, 255] before storage.

pub mod blur;
pub mod color_adjust;
pub mod edge;
pub mod sharpen;
pub mod transform;
