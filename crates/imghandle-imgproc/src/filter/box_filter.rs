use imghandle_image::{Image, ImageError};

/// Horizontal box average with edge-clamped sampling, written transposed.
///
/// Each output value is the mean of the `2 * half_kernel_x_size + 1` pixels centered on the
/// source pixel in the same row; columns outside `[0, cols)` read the nearest edge pixel.
/// The window sum is kept as a running sum, so the cost per pixel does not depend on the
/// kernel size.
///
/// The result is stored transposed: `dst` must have `src.rows()` columns and `src.cols()`
/// rows. Calling the filter twice therefore blurs both axes and restores the orientation.
pub(crate) fn fast_horizontal_filter<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    half_kernel_x_size: usize,
) -> Result<(), ImageError> {
    let rows = src.rows();
    let cols = src.cols();

    if dst.cols() != rows || dst.rows() != cols {
        return Err(ImageError::DimensionMismatch(
            rows,
            cols,
            dst.cols(),
            dst.rows(),
        ));
    }

    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    let radius = half_kernel_x_size as isize;
    let last_col = cols as isize - 1;
    let kernel_len = (2 * half_kernel_x_size + 1) as f32;

    for r in 0..rows {
        let row_offset = r * cols * C;
        let sample =
            |x: isize, ch: usize| src_data[row_offset + x.clamp(0, last_col) as usize * C + ch];

        let mut row_acc = [0.0f32; C];
        for x in -radius..=radius {
            for (ch, acc) in row_acc.iter_mut().enumerate() {
                *acc += sample(x, ch);
            }
        }

        for c in 0..cols {
            let transposed_pix_offset = c * rows * C + r * C;
            for (ch, acc) in row_acc.iter_mut().enumerate() {
                dst_data[transposed_pix_offset + ch] = *acc / kernel_len;

                // slide the window one column to the right
                let x = c as isize;
                *acc += sample(x + radius + 1, ch) - sample(x - radius, ch);
            }
        }
    }

    Ok(())
}
