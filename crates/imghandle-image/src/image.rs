use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use imghandle_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Returns true if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// An axis-aligned rectangle in pixel coordinates.
///
/// `x` and `y` locate the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Column of the top-left corner
    pub x: usize,
    /// Row of the top-left corner
    pub y: usize,
    /// Width of the rectangle in pixels
    pub width: usize,
    /// Height of the rectangle in pixels
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The size of the rectangle.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Check that the rectangle is non-empty and lies inside an image of `size`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidParameter`] otherwise.
    pub fn check_inside(&self, size: ImageSize) -> Result<(), ImageError> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageError::InvalidParameter(format!(
                "rectangle {}x{} is empty",
                self.width, self.height
            )));
        }

        let fits_x = self.x.checked_add(self.width).is_some_and(|r| r <= size.width);
        let fits_y = self.y.checked_add(self.height).is_some_and(|b| b <= size.height);
        if !fits_x || !fits_y {
            return Err(ImageError::InvalidParameter(format!(
                "rectangle ({}, {}, {}x{}) exceeds image bounds {}x{}",
                self.x, self.y, self.width, self.height, size.width, size.height
            )));
        }

        Ok(())
    }
}

// number of elements of an image buffer, rejecting sizes a `Vec<T>` cannot hold
fn buffer_len<T>(size: ImageSize, channels: usize) -> Result<usize, ImageError> {
    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(channels))
        .filter(|&n| {
            n.checked_mul(std::mem::size_of::<T>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(ImageError::InvalidDimensions(size.width, size.height))
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major and interleaved, with shape (H, W, C),
/// where H is the height of the image, W the width and C the number of channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit RGBA image, the raster type most operations work on.
pub type Rgba8Image = Image<u8, 4>;

/// A single channel 8-bit mask, 0 keeps the original and 255 takes the processed pixel.
pub type Mask = Image<u8, 1>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    /// Sizes whose buffer length overflows fail with [`ImageError::InvalidDimensions`].
    ///
    /// # Examples
    ///
    /// ```
    /// use imghandle_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let expected = buffer_len::<T>(size, CHANNELS)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value every channel of every pixel is set to.
    ///
    /// # Examples
    ///
    /// ```
    /// use imghandle_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.as_slice().len(), 200);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; buffer_len::<T>(size, CHANNELS)?];
        Image::new(size, data)
    }

    /// Create a new image with every pixel set to `pixel`.
    pub fn from_size_pixel(size: ImageSize, pixel: [T; CHANNELS]) -> Result<Self, ImageError>
    where
        T: Copy,
    {
        let mut data = Vec::with_capacity(buffer_len::<T>(size, CHANNELS)?);
        for _ in 0..size.width * size.height {
            data.extend_from_slice(&pixel);
        }
        Image::new(size, data)
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Returns
    ///
    /// A new image with the pixel data cast to the given type.
    pub fn cast<U>(&self) -> Result<Image<U, CHANNELS>, ImageError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| {
                U::from(x)
                    .ok_or_else(|| ImageError::CastError(std::any::type_name::<U>().to_string()))
            })
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    /// Get a channel of the image.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image<T, 1>, ImageError>
    where
        T: Copy,
    {
        if channel >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, CHANNELS));
        }

        let channel_data = self
            .data
            .chunks_exact(CHANNELS)
            .map(|pixel| pixel[channel])
            .collect();

        Image::new(self.size, channel_data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// The raw pixel buffer, row-major and interleaved.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The raw pixel buffer, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a single channel value by `[row, col, channel]`, `None` when out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, ch] = index;
        if x >= self.width() || y >= self.height() || ch >= CHANNELS {
            return None;
        }
        self.data.get((y * self.width() + x) * CHANNELS + ch)
    }

    /// Get the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] when the pixel is outside the image.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[T; CHANNELS], ImageError>
    where
        T: Copy + Default,
    {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let offset = (y * self.width() + x) * CHANNELS;
        let mut pixel = [T::default(); CHANNELS];
        pixel.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Ok(pixel)
    }

    /// Set the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] when the pixel is outside the image.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [T; CHANNELS]) -> Result<(), ImageError>
    where
        T: Copy,
    {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let offset = (y * self.width() + x) * CHANNELS;
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize, Rect};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert!(!image_size.is_empty());
        assert!(ImageSize { width: 0, height: 3 }.is_empty());
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 4],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 4);

        Ok(())
    }

    #[test]
    fn image_wrong_length() {
        let res = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 15],
        );
        assert_eq!(res, Err(ImageError::InvalidChannelShape(15, 16)));
    }

    #[test]
    fn image_size_overflow() {
        let huge = ImageSize {
            width: usize::MAX,
            height: 2,
        };
        assert_eq!(
            Image::<u8, 4>::from_size_val(huge, 0),
            Err(ImageError::InvalidDimensions(usize::MAX, 2))
        );
        assert_eq!(
            Image::<u8, 4>::from_size_pixel(huge, [0; 4]),
            Err(ImageError::InvalidDimensions(usize::MAX, 2))
        );
        assert_eq!(
            Image::<u8, 1>::new(huge, vec![]),
            Err(ImageError::InvalidDimensions(usize::MAX, 2))
        );

        // fits in usize but not in an allocation
        let too_large = ImageSize {
            width: 1 << 31,
            height: 1 << 30,
        };
        assert_eq!(
            Image::<f32, 1>::from_size_val(too_large, 0.0),
            Err(ImageError::InvalidDimensions(1 << 31, 1 << 30))
        );
    }

    #[test]
    fn image_zero_width_is_constructible() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 0,
                height: 8,
            },
            vec![],
        )?;
        assert!(image.size().is_empty());
        assert!(image.as_slice().is_empty());

        Ok(())
    }

    #[test]
    fn image_cast() -> Result<(), ImageError> {
        let image_u8 = Image::<_, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0u8, 1, 2, 3, 4, 5],
        )?;
        assert_eq!(image_u8.get([1, 0, 2]), Some(&5u8));

        let image_f32: Image<f32, 3> = image_u8.cast()?;
        assert_eq!(image_f32.get([1, 0, 2]), Some(&5.0f32));

        let negative = Image::<f32, 1>::new(image_u8.size(), vec![-1.0, 2.0])?;
        assert!(matches!(
            negative.cast::<u8>(),
            Err(ImageError::CastError(_))
        ));

        Ok(())
    }

    #[test]
    fn image_channel() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0, 1, 2, 3, 4, 5, 6, 7],
        )?;

        let alpha = image.channel(3)?;
        assert_eq!(alpha.as_slice(), &[3, 7]);
        assert_eq!(
            image.channel(4),
            Err(ImageError::ChannelIndexOutOfBounds(4, 4))
        );

        Ok(())
    }

    #[test]
    fn image_pixel_access() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let mut image = Image::<u8, 4>::from_size_pixel(size, [1, 2, 3, 4])?;
        image.set_pixel(2, 1, [9, 9, 9, 255])?;

        assert_eq!(image.get_pixel(0, 0)?, [1, 2, 3, 4]);
        assert_eq!(image.get_pixel(2, 1)?, [9, 9, 9, 255]);
        assert_eq!(
            image.get_pixel(3, 0),
            Err(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        );

        Ok(())
    }

    #[test]
    fn rect_bounds() {
        let size = ImageSize {
            width: 8,
            height: 4,
        };
        assert!(Rect::new(0, 0, 8, 4).check_inside(size).is_ok());
        assert!(Rect::new(2, 1, 6, 3).check_inside(size).is_ok());
        assert!(Rect::new(2, 1, 7, 3).check_inside(size).is_err());
        assert!(Rect::new(0, 0, 0, 3).check_inside(size).is_err());
        assert!(Rect::new(usize::MAX, 0, 2, 1).check_inside(size).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rect_serde() -> Result<(), serde_json::Error> {
        let rect = Rect::new(1, 2, 3, 4);
        let json = serde_json::to_string(&rect)?;
        assert_eq!(json, r#"{"x":1,"y":2,"width":3,"height":4}"#);
        assert_eq!(serde_json::from_str::<Rect>(&json)?, rect);
        Ok(())
    }
}
