use imghandle_image::{Image, ImageError, ImageSize, Mask};

/// Blend two images with a per-pixel mask.
///
/// The formula used is:
///
/// dst(x,y,c) = round(original(x,y,c) * (1 - m/255) + processed(x,y,c) * m/255)
///
/// where `m = mask(x,y)`. A mask value of 0 keeps the original pixel and 255 takes the
/// processed one.
///
/// # Arguments
///
/// * `original` - The unprocessed image.
/// * `processed` - The processed image, e.g. a blurred copy of `original`.
/// * `mask` - The single channel blend weights.
/// * `dst` - The output image.
///
/// # Errors
///
/// Returns an error if any of the four images differ in size.
///
/// # Example
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::enhance::blend_masked;
///
/// let size = ImageSize { width: 3, height: 1 };
/// let original = Image::<u8, 1>::new(size, vec![0, 0, 0]).unwrap();
/// let processed = Image::<u8, 1>::new(size, vec![200, 200, 200]).unwrap();
/// let mask = Image::<u8, 1>::new(size, vec![0, 51, 255]).unwrap();
///
/// let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();
/// blend_masked(&original, &processed, &mask, &mut dst).unwrap();
///
/// assert_eq!(dst.as_slice(), &[0, 40, 200]);
/// ```
pub fn blend_masked<const C: usize>(
    original: &Image<u8, C>,
    processed: &Image<u8, C>,
    mask: &Mask,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    check_sizes(original, &[processed.size(), mask.size(), dst.size()])?;

    original
        .as_slice()
        .chunks_exact(C)
        .zip(processed.as_slice().chunks_exact(C))
        .zip(mask.as_slice().iter())
        .zip(dst.as_slice_mut().chunks_exact_mut(C))
        .for_each(|(((src_pixel, proc_pixel), &m), dst_pixel)| {
            let weight = m as f32 / 255.0;
            for ((out, &a), &b) in dst_pixel.iter_mut().zip(src_pixel).zip(proc_pixel) {
                *out = blend_value(a, b, weight);
            }
        });

    Ok(())
}

/// Blend `original` into an already processed image, in place.
///
/// Same formula as [`blend_masked`] with `processed` serving as both input and output,
/// so no extra image is allocated.
///
/// # Errors
///
/// Returns an error if any of the three images differ in size.
pub fn blend_masked_inplace<const C: usize>(
    original: &Image<u8, C>,
    mask: &Mask,
    processed: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    check_sizes(original, &[mask.size(), processed.size()])?;

    original
        .as_slice()
        .chunks_exact(C)
        .zip(mask.as_slice().iter())
        .zip(processed.as_slice_mut().chunks_exact_mut(C))
        .for_each(|((src_pixel, &m), proc_pixel)| {
            let weight = m as f32 / 255.0;
            for (out, &a) in proc_pixel.iter_mut().zip(src_pixel) {
                *out = blend_value(a, *out, weight);
            }
        });

    Ok(())
}

fn check_sizes<const C: usize>(
    original: &Image<u8, C>,
    others: &[ImageSize],
) -> Result<(), ImageError> {
    for other in others {
        if *other != original.size() {
            return Err(ImageError::DimensionMismatch(
                original.width(),
                original.height(),
                other.width,
                other.height,
            ));
        }
    }
    Ok(())
}

fn blend_value(original: u8, processed: u8, weight: f32) -> u8 {
    let v = original as f32 * (1.0 - weight) + processed as f32 * weight;
    v.round().clamp(0.0, 255.0) as u8
}
