use imghandle_image::{Image, ImageError};

/// Compute the mean of each channel of an image.
///
/// # Arguments
///
/// * `image` - The input image.
///
/// # Returns
///
/// The per-channel mean.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if the image is empty.
///
/// # Example
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::core::mean;
///
/// let image = Image::<u8, 3>::new(
///    ImageSize {
///      width: 2,
///      height: 2,
///    },
///    vec![0, 1, 2, 253, 254, 255, 128, 129, 130, 64, 65, 66],
/// ).unwrap();
///
/// assert_eq!(mean(&image).unwrap(), [111.25, 112.25, 113.25]);
/// ```
pub fn mean<const C: usize>(image: &Image<u8, C>) -> Result<[f64; C], ImageError> {
    if image.size().is_empty() {
        return Err(ImageError::InvalidDimensions(image.width(), image.height()));
    }

    let sum = image
        .as_slice()
        .chunks_exact(C)
        .fold([0u64; C], |mut sum, pixel| {
            for (s, &v) in sum.iter_mut().zip(pixel) {
                *s += v as u64;
            }
            sum
        });

    let n = (image.width() * image.height()) as f64;
    Ok(sum.map(|s| s as f64 / n))
}

/// The average color of an image, each channel rounded to the nearest integer.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if the image is empty.
pub fn mean_color<const C: usize>(image: &Image<u8, C>) -> Result<[u8; C], ImageError> {
    let mean = mean(image)?;
    Ok(mean.map(|m| m.round().clamp(0.0, 255.0) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use imghandle_image::ImageSize;

    #[test]
    fn test_mean_color() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 100, 255, 255, 255, 101, 255, 0],
        )?;

        assert_eq!(mean(&image)?, [127.5, 100.5, 255.0, 127.5]);
        assert_eq!(mean_color(&image)?, [128, 101, 255, 128]);

        Ok(())
    }

    #[test]
    fn test_mean_color_uniform() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_pixel([17, 9].into(), [12, 34, 56, 78])?;
        assert_eq!(mean_color(&image)?, [12, 34, 56, 78]);
        Ok(())
    }

    #[test]
    fn test_mean_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new([3, 0].into(), vec![])?;
        assert_eq!(mean_color(&image), Err(ImageError::InvalidDimensions(3, 0)));
        Ok(())
    }
}
