mod gray;

pub use gray::{gray_from_rgba_u8, grayscale, rgba_from_gray};
