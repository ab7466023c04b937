use imghandle_image::{
    ops::{cast_and_scale, saturate_u8},
    Image, ImageError, ImageSize, Mask, Rect,
};

use super::{fast_horizontal_filter, kernels};
use crate::{draw, enhance};

/// Radius used by [`blur_default`].
pub const DEFAULT_BLUR_RADIUS: f32 = 10.0;

/// Options controlling the box blur passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlurOptions {
    /// Number of horizontal and vertical box pass pairs, at least one.
    pub passes: usize,
    /// Optional upper bound on the box radius.
    pub max_radius: Option<usize>,
}

impl Default for BlurOptions {
    fn default() -> Self {
        Self {
            passes: 3,
            max_radius: None,
        }
    }
}

impl BlurOptions {
    /// Set the number of box passes.
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    /// Set an upper bound on the box radius.
    pub fn with_max_radius(mut self, max_radius: usize) -> Self {
        self.max_radius = Some(max_radius);
        self
    }
}

/// Blur an image using a box blur filter multiple times to achieve a near gaussian blur
///
/// Every pass averages a `2 * half_kernel_size + 1` window horizontally and then vertically,
/// with edge-clamped sampling.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `half_kernel_size` - The box radius in pixels.
/// * `passes` - The number of horizontal and vertical pass pairs.
///
/// # Errors
///
/// Returns an error if `src` and `dst` differ in size or if `passes` is zero.
pub fn box_blur_fast<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    half_kernel_size: usize,
    passes: usize,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::DimensionMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut().copy_from_slice(src.as_slice());
    box_blur_inplace(dst, half_kernel_size, passes)
}

/// Blur an `f32` image in place with the box passes of [`box_blur_fast`].
///
/// The passes alternate between `image` and a single transposed scratch buffer.
///
/// # Errors
///
/// Returns [`ImageError::InvalidParameter`] if `passes` is zero.
pub fn box_blur_inplace<const C: usize>(
    image: &mut Image<f32, C>,
    half_kernel_size: usize,
    passes: usize,
) -> Result<(), ImageError> {
    if passes == 0 {
        return Err(ImageError::InvalidParameter(
            "the number of blur passes must be at least 1".to_string(),
        ));
    }

    let transposed_size = ImageSize {
        width: image.height(),
        height: image.width(),
    };

    let mut transposed = Image::<f32, C>::from_size_val(transposed_size, 0.0)?;

    for _ in 0..passes {
        fast_horizontal_filter(image, &mut transposed, half_kernel_size)?;
        fast_horizontal_filter(&transposed, image, half_kernel_size)?;
    }

    Ok(())
}

/// Blur an 8-bit image with a gaussian-like box blur.
///
/// Uses [`BlurOptions::default`], three box passes with `round(radius)` as box radius.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `radius` - The blur radius in pixels, zero returns an exact copy.
/// * `mask` - Optional mask gating the blur per pixel, 0 keeps the source and 255
///   takes the blurred value.
///
/// # Errors
///
/// * [`ImageError::InvalidDimensions`] if the image has zero width or height.
/// * [`ImageError::InvalidParameter`] if `radius` is negative or not finite.
/// * [`ImageError::DimensionMismatch`] if the mask size differs from the image size.
///
/// # Example
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::filter::blur;
///
/// let image = Image::<u8, 4>::from_size_pixel(
///     ImageSize { width: 8, height: 6 },
///     [10, 20, 30, 255],
/// ).unwrap();
///
/// let blurred = blur(&image, 2.0, None).unwrap();
///
/// assert_eq!(blurred.size(), image.size());
/// assert_eq!(blurred, image);
/// ```
pub fn blur<const C: usize>(
    src: &Image<u8, C>,
    radius: f32,
    mask: Option<&Mask>,
) -> Result<Image<u8, C>, ImageError> {
    blur_with_options(src, radius, mask, &BlurOptions::default())
}

/// Blur an 8-bit image with explicit [`BlurOptions`].
///
/// All arguments are validated before any pixel is processed; see [`blur`] for the
/// error conditions. Zero passes fail with [`ImageError::InvalidParameter`].
pub fn blur_with_options<const C: usize>(
    src: &Image<u8, C>,
    radius: f32,
    mask: Option<&Mask>,
    options: &BlurOptions,
) -> Result<Image<u8, C>, ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::InvalidDimensions(src.width(), src.height()));
    }

    let half_kernel_size = kernels::box_blur_radius(radius, src.size(), options.max_radius)?;

    if let Some(mask) = mask {
        if mask.size() != src.size() {
            return Err(ImageError::DimensionMismatch(
                src.width(),
                src.height(),
                mask.width(),
                mask.height(),
            ));
        }
    }

    if options.passes == 0 {
        return Err(ImageError::InvalidParameter(
            "the number of blur passes must be at least 1".to_string(),
        ));
    }

    if half_kernel_size == 0 {
        log::trace!("blur radius {radius} rounds to zero, returning a copy");
        return Ok(src.clone());
    }

    log::debug!(
        "box blur {} with half kernel {} over {} passes",
        src.size(),
        half_kernel_size,
        options.passes
    );

    // one f32 working copy, the transposed scratch of the passes and the output
    let mut working = Image::<f32, C>::from_size_val(src.size(), 0.0)?;
    cast_and_scale(src, &mut working, 1.0)?;

    box_blur_inplace(&mut working, half_kernel_size, options.passes)?;

    let mut dst = Image::<u8, C>::from_size_val(src.size(), 0)?;
    saturate_u8(&working, &mut dst)?;

    if let Some(mask) = mask {
        enhance::blend_masked_inplace(src, mask, &mut dst)?;
    }

    Ok(dst)
}

/// Blur an image with [`DEFAULT_BLUR_RADIUS`].
pub fn blur_default<const C: usize>(src: &Image<u8, C>) -> Result<Image<u8, C>, ImageError> {
    blur(src, DEFAULT_BLUR_RADIUS, None)
}

/// Blur only the pixels inside `rect`.
///
/// Pixels outside the rectangle are copied unchanged. Pixels inside still sample their
/// neighbours outside the rectangle, so the blurred area has no hard inner border.
///
/// # Errors
///
/// Fails like [`blur`], and with [`ImageError::InvalidParameter`] if `rect` is empty or
/// not fully inside the image.
pub fn blur_region<const C: usize>(
    src: &Image<u8, C>,
    radius: f32,
    rect: Rect,
) -> Result<Image<u8, C>, ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::InvalidDimensions(src.width(), src.height()));
    }

    rect.check_inside(src.size())?;

    let mask = draw::rect_mask(src.size(), rect)?;
    blur(src, radius, Some(&mask))
}
