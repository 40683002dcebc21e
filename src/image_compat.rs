//! Compatibility with the `image` crate, enabled with the `image_compat` feature

use crate::pixel::{RGBAu8Pixel, RGBAf32Pixel};
use crate::render::FrameBuffer;

/// Framebuffers that can be copied into an owned `image` buffer.
pub trait ImageFrameBuffer<P, C> where P: image::Pixel {
    /// Copy the color buffer into a new image, or `None` if the
    /// framebuffer dimensions don't form a valid image.
    fn copy_to_image(&self) -> Option<image::ImageBuffer<P, C>>;
}

impl ImageFrameBuffer<image::Rgba<u8>, Vec<u8>> for FrameBuffer<RGBAf32Pixel> {
    fn copy_to_image(&self) -> Option<image::RgbaImage> {
        let mut res = Vec::with_capacity(self.color_buffer().len() * 4);

        for color in self.color_buffer() {
            let RGBAu8Pixel { r, g, b, a } = RGBAu8Pixel::from(*color);

            res.push(r);
            res.push(g);
            res.push(b);
            res.push(a);
        }

        image::RgbaImage::from_raw(self.width(), self.height(), res)
    }
}
