//! Image buffer and gamma-corrected file output.
//!
//! The buffer holds linear-RGB color plus per-pixel alpha, with row 0 at
//! the bottom of world space. Gamma encoding and the row flip happen only
//! on save, so everything upstream works in linear color.

use lumen_math::Vec3;
use std::path::Path;
use thiserror::Error;

/// Default gamma used for output correction.
pub const DEFAULT_GAMMA: f32 = 1.8;

/// Errors from persisting an image buffer.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] ::image::ImageError),
}

/// A width x height buffer of linear-RGB pixels with per-pixel alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    gamma: f32,
    pixels: Vec<Vec3>,
    alpha: Vec<u8>,
}

impl Image {
    /// Create a new image buffer, black and fully opaque.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            gamma: DEFAULT_GAMMA,
            pixels: vec![Vec3::ZERO; size],
            alpha: vec![u8::MAX; size],
        }
    }

    /// Set the gamma used for output correction.
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Get the linear color at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Get the alpha value at (x, y).
    pub fn get_alpha(&self, x: u32, y: u32) -> u8 {
        self.alpha[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y) to a linear color and alpha.
    ///
    /// Out-of-bounds writes are silently ignored; a stray pixel never
    /// fails the render. y counts up from the bottom of world space.
    pub fn paint(&mut self, x: u32, y: u32, color: Vec3, alpha: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y * self.width + x) as usize;
        self.pixels[index] = color;
        self.alpha[index] = alpha;
    }

    /// Encode the buffer to an image file, format chosen by extension.
    ///
    /// Applies gamma encoding (`channel^(1/gamma)`) to the RGB channels
    /// and flips rows so row 0 lands at the bottom of the written image.
    /// Unwritable paths and unsupported extensions surface as errors.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ImageError> {
        let inv_gamma = 1.0 / self.gamma;
        let encode = |channel: f32| (255.0 * channel.max(0.0).powf(inv_gamma).min(1.0)) as u8;

        let mut out = ::image::RgbaImage::new(self.width, self.height);
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            // Image files store row 0 at the top
            let row = self.height - 1 - y;
            let index = (row * self.width + x) as usize;
            let color = self.pixels[index];
            *pixel = ::image::Rgba([
                encode(color.x),
                encode(color.y),
                encode(color.z),
                self.alpha[index],
            ]);
        }

        log::info!(
            "saving {}x{} image to {}",
            self.width,
            self.height,
            path.as_ref().display()
        );
        out.save(path.as_ref())?;
        Ok(())
    }
}
