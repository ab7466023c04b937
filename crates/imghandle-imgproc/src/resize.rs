use fast_image_resize as fr;
use imghandle_image::{Image, ImageError, ImageSize, Rect, Rgba8Image};

use crate::crop;

/// Interpolation mode for the resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Resize an RGBA8 image to the size of `dst`.
///
/// Uses the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container, its size is the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::resize::{resize_fast, InterpolationMode};
///
/// let image = Image::<_, 4>::new(
///    ImageSize {
///       width: 4,
///       height: 5,
///    },
///    vec![0u8; 4 * 5 * 4],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///   width: 2,
///   height: 3,
/// };
///
/// let mut image_resized = Image::<_, 4>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(
///   &image,
///   &mut image_resized,
///   InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
///
/// # Errors
///
/// The function returns an error if either image is empty or the image cannot be resized.
pub fn resize_fast(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 4>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    for size in [src.size(), dst.size()] {
        if size.is_empty() {
            return Err(ImageError::InvalidDimensions(size.width, size.height));
        }
    }

    let (src_width, src_height) = (src.width() as u32, src.height() as u32);
    let (dst_width, dst_height) = (dst.width() as u32, dst.height() as u32);

    // prepare the input image for the fast_image_resize crate
    let src_image = fr::images::ImageRef::new(
        src_width,
        src_height,
        src.as_slice(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    // prepare the output image for the fast_image_resize crate
    let mut dst_image = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let options = match interpolation {
        InterpolationMode::Bilinear => fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Bilinear)),
        InterpolationMode::Nearest => fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Nearest),
    };

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    Ok(())
}

/// Resize an RGBA8 image to `size`, returning a new image.
pub fn resize(
    src: &Rgba8Image,
    size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Rgba8Image, ImageError> {
    let mut dst = Rgba8Image::from_size_val(size, 0)?;
    resize_fast(src, &mut dst, interpolation)?;
    Ok(dst)
}

// scale `side` by `num / den`, rounded and at least one pixel
fn scale_side(side: usize, num: usize, den: usize) -> usize {
    ((side as f64 * num as f64 / den as f64).round() as usize).max(1)
}

/// Scale an image to a fixed width, keeping the aspect ratio.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if the image or the target width is zero.
///
/// # Example
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::resize::scale_to_width;
///
/// let image = Image::<u8, 4>::from_size_val(ImageSize { width: 40, height: 30 }, 0).unwrap();
///
/// let scaled = scale_to_width(&image, 20).unwrap();
/// assert_eq!(scaled.size(), ImageSize { width: 20, height: 15 });
/// ```
pub fn scale_to_width(src: &Rgba8Image, width: usize) -> Result<Rgba8Image, ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::InvalidDimensions(src.width(), src.height()));
    }

    let height = scale_side(src.height(), width, src.width());
    resize(src, ImageSize { width, height }, InterpolationMode::Bilinear)
}

/// Scale an image to a fixed height, keeping the aspect ratio.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if the image or the target height is zero.
pub fn scale_to_height(src: &Rgba8Image, height: usize) -> Result<Rgba8Image, ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::InvalidDimensions(src.width(), src.height()));
    }

    let width = scale_side(src.width(), height, src.height());
    resize(src, ImageSize { width, height }, InterpolationMode::Bilinear)
}

/// Scale an image so that it covers `size`, then crop the centered `size` window.
///
/// The aspect ratio is kept, the overflowing side is trimmed evenly on both ends.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if the image or the target size is empty.
pub fn fill_clip(src: &Rgba8Image, size: ImageSize) -> Result<Rgba8Image, ImageError> {
    for s in [src.size(), size] {
        if s.is_empty() {
            return Err(ImageError::InvalidDimensions(s.width, s.height));
        }
    }

    // pick the larger scale factor so both sides cover the target
    let cover_width = size.width as u128 * src.height() as u128;
    let cover_height = size.height as u128 * src.width() as u128;
    let scaled_size = if cover_width >= cover_height {
        ImageSize {
            width: size.width,
            height: scale_side(src.height(), size.width, src.width()).max(size.height),
        }
    } else {
        ImageSize {
            width: scale_side(src.width(), size.height, src.height()).max(size.width),
            height: size.height,
        }
    };

    let scaled = resize(src, scaled_size, InterpolationMode::Bilinear)?;

    let rect = Rect::new(
        (scaled_size.width - size.width) / 2,
        (scaled_size.height - size.height) / 2,
        size.width,
        size.height,
    );

    crop::crop(&scaled, rect)
}
