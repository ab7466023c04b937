use imghandle_image::{Image, ImageError, Rect};

/// Crop an image to a specified region.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `dst` - The destination image to store the cropped image.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
///
/// # Errors
///
/// Returns an error if the `dst` sized region at (x, y) does not fit inside `src`.
///
/// # Examples
///
/// ```rust
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::crop::crop_image;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let mut cropped = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 2 }, 0u8).unwrap();
///
/// crop_image(&image, &mut cropped, 1, 1).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy,
{
    Rect::new(x, y, dst.cols(), dst.rows()).check_inside(src.size())?;

    let dst_cols = dst.cols();
    let src_cols = src.cols();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .chunks_exact_mut(dst_cols * C)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // get the slice at the top left corner
            let offset = (y + i) * src_cols * C + x * C;
            let src_slice = &src_data[offset..offset + dst_cols * C];

            // copy the slice to the destination
            dst_row.copy_from_slice(src_slice);
        });

    Ok(())
}

/// Return the part of `src` covered by `rect` as a new image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidParameter`] if `rect` is empty or not inside `src`.
pub fn crop<T, const C: usize>(src: &Image<T, C>, rect: Rect) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default,
{
    rect.check_inside(src.size())?;

    let mut dst = Image::<T, C>::from_size_val(rect.size(), T::default())?;
    crop_image(src, &mut dst, rect.x, rect.y)?;

    Ok(dst)
}

/// Paste `src` into `dst` with its top-left corner at (x, y).
///
/// # Errors
///
/// Returns an error if `src` placed at (x, y) does not fit inside `dst`.
pub fn paste_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy,
{
    Rect::new(x, y, src.cols(), src.rows()).check_inside(dst.size())?;

    let src_cols = src.cols();
    let dst_cols = dst.cols();
    let dst_data = dst.as_slice_mut();

    src.as_slice()
        .chunks_exact(src_cols * C)
        .enumerate()
        .for_each(|(i, src_row)| {
            let offset = (y + i) * dst_cols * C + x * C;
            dst_data[offset..offset + src_cols * C].copy_from_slice(src_row);
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use imghandle_image::{Image, ImageError, ImageSize, Rect};

    #[test]
    fn test_crop() -> Result<(), ImageError> {
        let image_size = ImageSize {
            width: 2,
            height: 3,
        };

        #[rustfmt::skip]
        let image = Image::<_, 3>::new(
            image_size,
            vec![
                0u8, 1, 2, 3, 4, 5,
                6u8, 7, 8, 9, 10, 11,
                12u8, 13, 14, 15, 16, 17,
            ],
        )?;

        let data_expected = vec![9u8, 10, 11, 15, 16, 17];

        let crop_size = ImageSize {
            width: 1,
            height: 2,
        };

        let mut cropped = Image::<_, 3>::from_size_val(crop_size, 0u8)?;

        super::crop_image(&image, &mut cropped, 1, 1)?;

        assert_eq!(cropped.as_slice(), &data_expected);

        let cropped = super::crop(&image, Rect::new(1, 1, 1, 2))?;
        assert_eq!(cropped.as_slice(), &data_expected);

        Ok(())
    }

    #[test]
    fn test_crop_out_of_bounds() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_val([4, 4].into(), 0)?;

        assert!(matches!(
            super::crop(&image, Rect::new(3, 0, 2, 2)),
            Err(ImageError::InvalidParameter(_))
        ));
        assert!(matches!(
            super::crop(&image, Rect::new(0, 0, 0, 2)),
            Err(ImageError::InvalidParameter(_))
        ));

        Ok(())
    }

    #[test]
    fn test_paste() -> Result<(), ImageError> {
        let patch = Image::<u8, 1>::new([2, 2].into(), vec![1, 2, 3, 4])?;
        let mut canvas = Image::<u8, 1>::from_size_val([4, 3].into(), 0)?;

        super::paste_image(&patch, &mut canvas, 1, 1)?;

        #[rustfmt::skip]
        assert_eq!(
            canvas.as_slice(),
            &[
                0, 0, 0, 0,
                0, 1, 2, 0,
                0, 3, 4, 0,
            ]
        );

        assert!(super::paste_image(&patch, &mut canvas, 3, 0).is_err());

        Ok(())
    }
}
