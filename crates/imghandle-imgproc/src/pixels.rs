use imghandle_image::{Image, ImageError};

/// Apply a function to each pair of source and destination pixels.
///
/// The pixels are visited in row-major order.
///
/// # Errors
///
/// Returns [`ImageError::DimensionMismatch`] if `src` and `dst` differ in size.
pub fn iter_pixels<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    mut f: impl FnMut(&[T1], &mut [T2]),
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::DimensionMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    src.as_slice()
        .chunks_exact(C1)
        .zip(dst.as_slice_mut().chunks_exact_mut(C2))
        .for_each(|(src_pixel, dst_pixel)| f(src_pixel, dst_pixel));

    Ok(())
}

/// Apply a function to each pixel of the image in place.
pub fn iter_pixels_mut<T, const C: usize>(
    image: &mut Image<T, C>,
    mut f: impl FnMut(usize, usize, &mut [T]),
) {
    let cols = image.cols();
    if cols == 0 {
        return;
    }

    image
        .as_slice_mut()
        .chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(y, row)| {
            row.chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, pixel)| f(x, y, pixel));
        });
}
