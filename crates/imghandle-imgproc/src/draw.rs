use imghandle_image::{ImageError, ImageSize, Mask, Rect, Rgba8Image};

use crate::{crop, pixels};

const OPAQUE: u8 = 255;

// validate a length argument and round it to whole pixels
fn pixel_length(name: &str, value: f32) -> Result<usize, ImageError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ImageError::InvalidParameter(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(value.round() as usize)
}

// side of `side` framed by `border` pixels on both ends
fn framed_side(side: usize, border: usize) -> Result<usize, ImageError> {
    border
        .checked_mul(2)
        .and_then(|b| b.checked_add(side))
        .ok_or_else(|| ImageError::InvalidParameter(format!("border width {border} is too large")))
}

fn check_not_empty(size: ImageSize) -> Result<(), ImageError> {
    if size.is_empty() {
        return Err(ImageError::InvalidDimensions(size.width, size.height));
    }
    Ok(())
}

/// Create a mask that is 255 inside `rect` and 0 elsewhere.
///
/// # Errors
///
/// Returns [`ImageError::InvalidParameter`] if `rect` is empty or not inside `size`.
pub fn rect_mask(size: ImageSize, rect: Rect) -> Result<Mask, ImageError> {
    rect.check_inside(size)?;

    let mut mask = Mask::from_size_val(size, 0)?;
    pixels::iter_pixels_mut(&mut mask, |x, y, pixel| {
        let inside = (rect.x..rect.x + rect.width).contains(&x)
            && (rect.y..rect.y + rect.height).contains(&y);
        if inside {
            pixel[0] = OPAQUE;
        }
    });

    Ok(mask)
}

/// Create a mask of the largest circle centered in `size`.
///
/// A pixel belongs to the circle when its center lies within the radius.
///
/// # Example
///
/// ```
/// use imghandle_image::ImageSize;
/// use imghandle_imgproc::draw::circle_mask;
///
/// let mask = circle_mask(ImageSize { width: 4, height: 4 }).unwrap();
///
/// #[rustfmt::skip]
/// assert_eq!(mask.as_slice(), &[
///     0, 255, 255, 0,
///     255, 255, 255, 255,
///     255, 255, 255, 255,
///     0, 255, 255, 0,
/// ]);
/// ```
pub fn circle_mask(size: ImageSize) -> Result<Mask, ImageError> {
    let radius = size.width.min(size.height) as f32 / 2.0;
    let (cx, cy) = (size.width as f32 / 2.0, size.height as f32 / 2.0);

    let mut mask = Mask::from_size_val(size, 0)?;
    pixels::iter_pixels_mut(&mut mask, |x, y, pixel| {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if dx * dx + dy * dy <= radius * radius {
            pixel[0] = OPAQUE;
        }
    });

    Ok(mask)
}

/// Create a mask of a rectangle covering `size` with rounded corners.
///
/// The corner radius is clamped to half of the shorter side.
///
/// # Errors
///
/// Returns [`ImageError::InvalidParameter`] if `corner_radius` is negative or not finite.
pub fn rounded_rect_mask(size: ImageSize, corner_radius: f32) -> Result<Mask, ImageError> {
    if !corner_radius.is_finite() || corner_radius < 0.0 {
        return Err(ImageError::InvalidParameter(format!(
            "corner radius must be a finite non-negative number, got {corner_radius}"
        )));
    }

    let radius = corner_radius.min(size.width.min(size.height) as f32 / 2.0);
    let (w, h) = (size.width as f32, size.height as f32);

    let mut mask = Mask::from_size_val(size, OPAQUE)?;
    pixels::iter_pixels_mut(&mut mask, |x, y, pixel| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // distance to the nearest corner circle center, zero outside the corner boxes
        let dx = (radius - px).max(px - (w - radius)).max(0.0);
        let dy = (radius - py).max(py - (h - radius)).max(0.0);

        if dx * dx + dy * dy > radius * radius {
            pixel[0] = 0;
        }
    });

    Ok(mask)
}

/// Multiply the alpha channel of an image by `mask / 255`.
///
/// # Errors
///
/// Returns [`ImageError::DimensionMismatch`] if the mask size differs from the image size.
pub fn apply_alpha_mask(src: &Rgba8Image, mask: &Mask) -> Result<Rgba8Image, ImageError> {
    if src.size() != mask.size() {
        return Err(ImageError::DimensionMismatch(
            src.width(),
            src.height(),
            mask.width(),
            mask.height(),
        ));
    }

    let mut dst = src.clone();
    dst.as_slice_mut()
        .chunks_exact_mut(4)
        .zip(mask.as_slice())
        .for_each(|(pixel, &m)| {
            pixel[3] = ((pixel[3] as u16 * m as u16 + 127) / 255) as u8;
        });

    Ok(dst)
}

// the centered square of side min(width, height)
fn center_square(src: &Rgba8Image) -> Result<Rgba8Image, ImageError> {
    let side = src.width().min(src.height());
    let rect = Rect::new(
        (src.width() - side) / 2,
        (src.height() - side) / 2,
        side,
        side,
    );
    crop::crop(src, rect)
}

/// Crop the centered square of an image and clear the alpha outside its inscribed circle.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if the image is empty.
pub fn circle(src: &Rgba8Image) -> Result<Rgba8Image, ImageError> {
    check_not_empty(src.size())?;

    let square = center_square(src)?;
    let mask = circle_mask(square.size())?;
    apply_alpha_mask(&square, &mask)
}

/// Like [`circle`], surrounded by a ring of `color` that is `border_width` pixels wide.
///
/// The output is a square of side `min(width, height) + 2 * border_width`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if the image is empty and
/// [`ImageError::InvalidParameter`] if `border_width` is negative or not finite.
pub fn circle_with_border(
    src: &Rgba8Image,
    border_width: f32,
    color: [u8; 4],
) -> Result<Rgba8Image, ImageError> {
    check_not_empty(src.size())?;
    let border = pixel_length("border width", border_width)?;

    let square = center_square(src)?;
    let inner_mask = circle_mask(square.size())?;

    let side = framed_side(square.width(), border)?;
    let mut canvas = Rgba8Image::from_size_pixel([side, side].into(), color)?;

    for (y, (row, mask_row)) in square
        .as_slice()
        .chunks_exact(4 * square.width())
        .zip(inner_mask.as_slice().chunks_exact(square.width()))
        .enumerate()
    {
        for (x, (pixel, &m)) in row.chunks_exact(4).zip(mask_row).enumerate() {
            if m == OPAQUE {
                canvas.set_pixel(x + border, y + border, [pixel[0], pixel[1], pixel[2], pixel[3]])?;
            }
        }
    }

    let outer_mask = circle_mask(canvas.size())?;
    apply_alpha_mask(&canvas, &outer_mask)
}

/// Surround an image with a solid border of `color`.
///
/// The output has size `(width + 2 * border_width) x (height + 2 * border_width)` with the
/// source copied at `(border_width, border_width)`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if the image is empty and
/// [`ImageError::InvalidParameter`] if `border_width` is negative or not finite.
///
/// # Example
///
/// ```
/// use imghandle_image::{Image, ImageSize};
/// use imghandle_imgproc::draw::with_border;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let image = Image::<u8, 4>::from_size_pixel(size, [9, 9, 9, 255]).unwrap();
///
/// let framed = with_border(&image, 1.0, [0, 0, 0, 255]).unwrap();
///
/// assert_eq!(framed.size(), ImageSize { width: 4, height: 3 });
/// assert_eq!(framed.get_pixel(1, 1).unwrap(), [9, 9, 9, 255]);
/// assert_eq!(framed.get_pixel(0, 0).unwrap(), [0, 0, 0, 255]);
/// ```
pub fn with_border(
    src: &Rgba8Image,
    border_width: f32,
    color: [u8; 4],
) -> Result<Rgba8Image, ImageError> {
    check_not_empty(src.size())?;
    let border = pixel_length("border width", border_width)?;

    let size = ImageSize {
        width: framed_side(src.width(), border)?,
        height: framed_side(src.height(), border)?,
    };

    let mut canvas = Rgba8Image::from_size_pixel(size, color)?;
    crop::paste_image(src, &mut canvas, border, border)?;

    Ok(canvas)
}

/// Like [`with_border`], with the alpha cleared outside a rectangle with rounded corners.
///
/// # Errors
///
/// Fails like [`with_border`], and with [`ImageError::InvalidParameter`] if
/// `corner_radius` is negative or not finite.
pub fn with_rounded_border(
    src: &Rgba8Image,
    border_width: f32,
    color: [u8; 4],
    corner_radius: f32,
) -> Result<Rgba8Image, ImageError> {
    let framed = with_border(src, border_width, color)?;
    let mask = rounded_rect_mask(framed.size(), corner_radius)?;
    apply_alpha_mask(&framed, &mask)
}
