#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image statistics module.
pub mod core;

/// image cropping module.
pub mod crop;

/// shape masks and compositing module.
pub mod draw;

/// image blending module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// per pixel iteration utilities.
pub mod pixels;

/// utility functions for resizing images.
pub mod resize;
