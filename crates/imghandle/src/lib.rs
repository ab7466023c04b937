#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use imghandle_image as image;

#[doc(inline)]
pub use imghandle_imgproc as imgproc;
