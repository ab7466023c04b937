#![deny(missing_docs)]
//! Image types and traits for generating and manipulating images

/// image representation for the image operations.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Pixel data conversions between images.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, Mask, Rect, Rgba8Image};
