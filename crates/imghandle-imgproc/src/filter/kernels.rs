use imghandle_image::{ImageError, ImageSize};

/// Derive the integer box radius used by the blur passes.
///
/// The radius is rounded to the nearest integer and clamped to the larger image side.
/// `max_radius` adds an optional tighter bound.
///
/// # Arguments
///
/// * `radius` - The requested blur radius in pixels.
/// * `size` - The size of the image to blur.
/// * `max_radius` - Optional upper bound for the box radius.
///
/// # Errors
///
/// Returns [`ImageError::InvalidParameter`] when `radius` is negative or not finite.
///
/// # Example
///
/// ```
/// use imghandle_image::ImageSize;
/// use imghandle_imgproc::filter::kernels::box_blur_radius;
///
/// let size = ImageSize { width: 8, height: 4 };
///
/// assert_eq!(box_blur_radius(2.4, size, None).unwrap(), 2);
/// assert_eq!(box_blur_radius(2.5, size, None).unwrap(), 3);
/// assert_eq!(box_blur_radius(100.0, size, None).unwrap(), 8);
/// assert_eq!(box_blur_radius(100.0, size, Some(5)).unwrap(), 5);
/// ```
pub fn box_blur_radius(
    radius: f32,
    size: ImageSize,
    max_radius: Option<usize>,
) -> Result<usize, ImageError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(ImageError::InvalidParameter(format!(
            "blur radius must be a finite non-negative number, got {radius}"
        )));
    }

    let bound = size.width.max(size.height);
    let bound = max_radius.map_or(bound, |m| m.min(bound));

    // compare in f64 so that large radii do not wrap when cast
    let rounded = f64::from(radius).round();
    if rounded >= bound as f64 {
        return Ok(bound);
    }

    Ok(rounded as usize)
}
