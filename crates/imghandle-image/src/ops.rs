use crate::{Image, ImageError};

/// Cast the pixel data of an image to a different type.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `scale` - The scale to multiply the pixel data with.
///
/// Example:
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_image::ops::cast_and_scale;
///
/// let image = Image::<u8, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 1,
///   },
///   vec![0u8, 255],
/// ).unwrap();
///
/// let mut image_f32 = Image::from_size_val(image.size(), 0.0f32).unwrap();
///
/// cast_and_scale(&image, &mut image_f32, 1. / 255.0).unwrap();
///
/// assert_eq!(image_f32.as_slice(), &[0.0f32, 1.0]);
/// ```
pub fn cast_and_scale<T, U, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<U, C>,
    scale: U,
) -> Result<(), ImageError>
where
    T: Copy + num_traits::NumCast,
    U: Copy + num_traits::NumCast + std::ops::Mul<U, Output = U>,
{
    if src.size() != dst.size() {
        return Err(ImageError::DimensionMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .try_for_each(|(out, &inp)| {
            let x = U::from(inp).ok_or(ImageError::CastError(
                std::any::type_name::<U>().to_string(),
            ))?;
            *out = x * scale;
            Ok::<(), ImageError>(())
        })?;

    Ok(())
}

/// Round and saturate `f32` pixel data into an 8-bit image.
///
/// Every value is rounded to the nearest integer and clamped to [0, 255].
pub fn saturate_u8<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::DimensionMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .for_each(|(out, &inp)| {
            *out = inp.round().clamp(0.0, 255.0) as u8;
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageSize;

    #[test]
    fn test_cast_and_scale() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0u8, 0, 255, 0, 0, 255],
        )?;

        let mut image_f64: Image<f64, 3> = Image::from_size_val(image.size(), 0.0)?;

        super::cast_and_scale(&image, &mut image_f64, 1. / 255.0)?;

        let expected = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0];

        assert_eq!(image_f64.as_slice(), expected);

        Ok(())
    }

    #[test]
    fn test_cast_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val([2, 2].into(), 0)?;
        let mut other = Image::<f32, 1>::from_size_val([3, 2].into(), 0.0)?;

        assert_eq!(
            cast_and_scale(&image, &mut other, 1.0),
            Err(ImageError::DimensionMismatch(2, 2, 3, 2))
        );

        Ok(())
    }

    #[test]
    fn test_saturate_u8() -> Result<(), ImageError> {
        let src = Image::<f32, 1>::new([5, 1].into(), vec![-3.0, 0.49, 127.5, 254.6, 400.0])?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        saturate_u8(&src, &mut dst)?;

        assert_eq!(dst.as_slice(), &[0, 0, 128, 255, 255]);

        Ok(())
    }
}
