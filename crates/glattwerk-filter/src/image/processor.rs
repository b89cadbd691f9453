// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — load, grayscale, flip, rotate, save. Operates on
// in-memory images using the `image` and `imageproc` crates.

use glattwerk_core::error::{GlattwerkError, Result};
use glattwerk_core::Grid;
use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgba};
use imageproc::geometric_transformations::{self, Interpolation};
use tracing::{debug, info, instrument};

use super::grid_io::grid_from_luma;

/// Luma weights applied to the red, green, and blue channels.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Image processing pipeline operating on a single in-memory image.
///
/// All operations are non-destructive: each method consumes `self` and returns a
/// new `ImageProcessor` wrapping the transformed image, enabling method chaining.
///
/// ```ignore
/// ImageProcessor::open("photo.png")?
///     .grayscale()
///     .flip_horizontal()
///     .rotate(45.0)
///     .save("photo_gray_rotated.png")?;
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            GlattwerkError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self { image: img })
    }

    /// Create a processor from raw encoded bytes (PNG, JPEG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            GlattwerkError::ImageError(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Intensity grid of the current image.
    ///
    /// Single-channel 8-bit images are read as-is; anything else goes through
    /// the same luma weighting as [`ImageProcessor::grayscale`].
    pub fn to_grid(&self) -> Grid {
        match &self.image {
            DynamicImage::ImageLuma8(gray) => grid_from_luma(gray),
            other => grid_from_luma(&weighted_luma(other)),
        }
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Convert the image to 8-bit grayscale with `p = 0.299R + 0.587G + 0.114B`.
    ///
    /// Alpha is discarded.
    #[instrument(skip(self))]
    pub fn grayscale(self) -> Self {
        info!("Converting to grayscale");
        Self {
            image: DynamicImage::ImageLuma8(weighted_luma(&self.image)),
        }
    }

    /// Mirror the image around its vertical axis.
    #[instrument(skip(self))]
    pub fn flip_horizontal(self) -> Self {
        debug!("Flipping horizontally");
        Self {
            image: self.image.fliph(),
        }
    }

    /// Rotate the image about its centre pixel `(width / 2, height / 2)` by
    /// `degrees`, counter-clockwise for positive angles.
    ///
    /// The canvas keeps its size, so corners that rotate out are cropped and
    /// uncovered areas are filled with black. Multiples of 360 degrees are a
    /// no-op and 180 degrees is lossless; other angles use bilinear
    /// interpolation.
    #[instrument(skip(self))]
    pub fn rotate(self, degrees: f32) -> Self {
        info!(degrees, "Rotating image");

        let normalised = degrees.rem_euclid(360.0);
        if normalised < 0.01 || (360.0 - normalised) < 0.01 {
            return self;
        }
        if (normalised - 180.0).abs() < 0.01 {
            return Self {
                image: self.image.rotate180(),
            };
        }

        // imageproc rotates clockwise in image coordinates (y down). Its
        // `rotate_about_center` pivots at (w/2.0, h/2.0), half a pixel off the
        // centre pixel of odd-sized images, so pass the pivot explicitly.
        let theta = -degrees.to_radians();
        let center = ((self.width() / 2) as f32, (self.height() / 2) as f32);
        let rotated = match &self.image {
            DynamicImage::ImageLuma8(gray) => DynamicImage::ImageLuma8(geometric_transformations::rotate(
                gray,
                center,
                theta,
                Interpolation::Bilinear,
                Luma([0u8]),
            )),
            other => DynamicImage::ImageRgba8(geometric_transformations::rotate(
                &other.to_rgba8(),
                center,
                theta,
                Interpolation::Bilinear,
                Rgba([0u8, 0, 0, 255]),
            )),
        };

        debug!("General rotation applied");
        Self { image: rotated }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| GlattwerkError::ImageError(format!("PNG encoding failed: {}", err)))?;
        Ok(buffer)
    }

    /// Write the image to a file. The format is inferred from the file extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.image.save(path.as_ref()).map_err(|err| {
            GlattwerkError::ImageError(format!(
                "failed to save image to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }
}

/// Per-pixel weighted luma, rounded and clamped to 8 bits.
fn weighted_luma(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    let [wr, wg, wb] = LUMA_WEIGHTS;
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let image::Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        let value = wr * r as f32 + wg * g as f32 + wb * b as f32;
        Luma([value.round().clamp(0.0, 255.0) as u8])
    })
}
