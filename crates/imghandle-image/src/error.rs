/// An error type for the image operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the image has zero width or height, or a size too large to allocate.
    #[error("Invalid image dimensions ({0}x{1}), the image is empty or too large")]
    InvalidDimensions(usize, usize),

    /// Error when two images that must share a size do not.
    #[error("Image size mismatch ({0}x{1}) vs ({2}x{3})")]
    DimensionMismatch(usize, usize, usize, usize),

    /// Error when an argument is out of its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error reported by the resize backend.
    #[error("Failed to resize the image: {0}")]
    ResizeError(String),
}
