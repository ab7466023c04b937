use crate::pixels;
use imghandle_image::{Image, ImageError, Rgba8Image};

/// Convert an RGBA8 image to grayscale using the formula:
///
/// Y = (77 * R + 150 * G + 29 * B) >> 8
///
/// The alpha channel is ignored.
///
/// # Arguments
///
/// * `src` - The input RGBA8 image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::color::gray_from_rgba_u8;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 1,
///         height: 2,
///     },
///     vec![0, 128, 255, 255, 128, 0, 128, 10],
/// )
/// .unwrap();
///
/// let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// gray_from_rgba_u8(&image, &mut gray).unwrap();
/// assert_eq!(gray.as_slice(), &[103, 53]);
/// ```
pub fn gray_from_rgba_u8(src: &Image<u8, 4>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    pixels::iter_pixels(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = luma(src_pixel);
    })
}

/// Convert a grayscale image to RGBA8 by replicating the gray value across the color channels.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `alpha` - The alpha channel of the output, a single channel image of the same size.
/// * `dst` - The output RGBA8 image.
pub fn rgba_from_gray(
    src: &Image<u8, 1>,
    alpha: &Image<u8, 1>,
    dst: &mut Image<u8, 4>,
) -> Result<(), ImageError> {
    for other in [alpha.size(), dst.size()] {
        if src.size() != other {
            return Err(ImageError::DimensionMismatch(
                src.cols(),
                src.rows(),
                other.width,
                other.height,
            ));
        }
    }

    dst.as_slice_mut()
        .chunks_exact_mut(4)
        .zip(src.as_slice().iter().zip(alpha.as_slice()))
        .for_each(|(dst_pixel, (&gray, &a))| {
            dst_pixel.copy_from_slice(&[gray, gray, gray, a]);
        });

    Ok(())
}

/// Return a grayscale copy of an RGBA8 image, keeping its alpha channel.
///
/// # Example
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::color::grayscale;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![255, 0, 0, 40],
/// ).unwrap();
///
/// assert_eq!(grayscale(&image).unwrap().as_slice(), &[76, 76, 76, 40]);
/// ```
pub fn grayscale(src: &Rgba8Image) -> Result<Rgba8Image, ImageError> {
    let mut dst = Rgba8Image::from_size_val(src.size(), 0)?;

    pixels::iter_pixels(src, &mut dst, |src_pixel, dst_pixel| {
        let gray = luma(src_pixel);
        dst_pixel.copy_from_slice(&[gray, gray, gray, src_pixel[3]]);
    })?;

    Ok(dst)
}

fn luma(pixel: &[u8]) -> u8 {
    let r = pixel[0] as u16;
    let g = pixel[1] as u16;
    let b = pixel[2] as u16;
    ((r * 77 + g * 150 + b * 29) >> 8) as u8
}
