//! Filter operations
//!
//! This module provides the box based gaussian blur approximation and its masked variants.

/// Blur kernel sizing
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;

/// Running sum box filter
mod box_filter;
pub(crate) use box_filter::fast_horizontal_filter;
