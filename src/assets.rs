//! Indicator icon loading.
//!
//! Each status indicator shows a small icon that is rendered either at its
//! natural brightness or brightened (factor 2.0) while the indicator is
//! active. Both variants are produced once at load time, so toggling an
//! indicator only swaps which bitmap is drawn.
//!
//! # Processing
//!
//! 1. Decode the file (PNG or WebP) with the `image` crate.
//! 2. Resize to `ICON_SIZE` x `ICON_SIZE` (Catmull-Rom).
//! 3. Scale RGB channels by the brightness factor, saturating at 255. Alpha
//!    is left untouched.
//! 4. Convert to `Rgb565`; pixels with alpha below 50% become transparent.
//!
//! # Failure
//!
//! A missing or undecodable icon is fatal. The cluster cannot render without
//! its fixed icon set, so [`IconSet::load`] returns the first error and the
//! caller aborts startup.

use std::path::{Path, PathBuf};

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use thiserror::Error;

use crate::config::{ICON_PATHS, ICON_SIZE};
use crate::widgets::IndicatorId;

/// Brightness multiplier of an inactive icon.
pub const NORMAL_BRIGHTNESS: f32 = 1.0;

/// Brightness multiplier of an active icon.
pub const ACTIVE_BRIGHTNESS: f32 = 2.0;

/// Alpha values below this are drawn as transparent.
const ALPHA_CUTOFF: u8 = 128;

/// Errors raised while loading the icon set.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load icon {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

// =============================================================================
// Icon Bitmap
// =============================================================================

/// A decoded, resized icon ready to draw.
///
/// Row-major, `None` for transparent pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconBitmap {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
}

impl IconBitmap {
    /// Resize `image` to the icon size and apply `brightness`.
    pub fn from_image(
        image: &DynamicImage,
        brightness: f32,
    ) -> Self {
        let resized = image.resize_exact(ICON_SIZE, ICON_SIZE, FilterType::CatmullRom).to_rgba8();
        Self::from_rgba(&resized, brightness)
    }

    fn from_rgba(
        image: &RgbaImage,
        brightness: f32,
    ) -> Self {
        let pixels = image
            .pixels()
            .map(|pixel| {
                let [r, g, b, a] = pixel.0;
                (a >= ALPHA_CUTOFF).then(|| {
                    Rgb565::from(Rgb888::new(
                        enhance(r, brightness),
                        enhance(g, brightness),
                        enhance(b, brightness),
                    ))
                })
            })
            .collect();

        Self {
            size: Size::new(image.width(), image.height()),
            pixels,
        }
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn size(&self) -> Size { self.size }

    /// Pixel at `(x, y)` relative to the icon's top-left corner.
    #[allow(dead_code)]
    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> Option<Rgb565> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels[(y * self.size.width + x) as usize]
    }

    /// Opaque pixels translated so the icon's top-left lands on `origin`.
    pub fn pixels_at(
        &self,
        origin: Point,
    ) -> impl Iterator<Item = Pixel<Rgb565>> + '_ {
        let width = self.size.width as i32;
        self.pixels.iter().enumerate().filter_map(move |(i, color)| {
            let i = i as i32;
            color.map(|c| Pixel(origin + Point::new(i % width, i / width), c))
        })
    }
}

/// Multiply one channel by `factor`, saturating at 255.
#[inline]
fn enhance(
    channel: u8,
    factor: f32,
) -> u8 {
    (f32::from(channel) * factor).round().clamp(0.0, 255.0) as u8
}

// =============================================================================
// Icon Variants
// =============================================================================

/// The two renderings of one indicator icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconVariants {
    normal: IconBitmap,
    active: IconBitmap,
}

impl IconVariants {
    /// Precompute both brightness variants from a decoded image.
    pub fn from_image(image: &DynamicImage) -> Self {
        Self {
            normal: IconBitmap::from_image(image, NORMAL_BRIGHTNESS),
            active: IconBitmap::from_image(image, ACTIVE_BRIGHTNESS),
        }
    }

    /// Decode `path` and precompute both variants.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let image = image::open(path).map_err(|source| AssetError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_image(&image))
    }

    /// Variant for the given active state.
    #[inline]
    pub const fn get(
        &self,
        active: bool,
    ) -> &IconBitmap {
        if active { &self.active } else { &self.normal }
    }
}

// =============================================================================
// Icon Set
// =============================================================================

/// One icon pair per indicator, in indicator construction order.
pub struct IconSet {
    icons: [IconVariants; IndicatorId::COUNT],
}

impl IconSet {
    /// Load every icon listed in [`ICON_PATHS`](crate::config::ICON_PATHS).
    pub fn load_default() -> Result<Self, AssetError> { Self::load(&ICON_PATHS.map(Path::new)) }

    /// Load one icon per indicator. Fails on the first missing or corrupt file.
    pub fn load(paths: &[&Path; IndicatorId::COUNT]) -> Result<Self, AssetError> {
        let [seatbelt, engine, battery, lights, airbag] = *paths;
        Ok(Self {
            icons: [
                load_logged(seatbelt)?,
                load_logged(engine)?,
                load_logged(battery)?,
                load_logged(lights)?,
                load_logged(airbag)?,
            ],
        })
    }

    /// Same image for every indicator. Used by tests and the headless draw checks.
    #[allow(dead_code)]
    pub fn uniform(image: &DynamicImage) -> Self {
        let variants = IconVariants::from_image(image);
        Self {
            icons: core::array::from_fn(|_| variants.clone()),
        }
    }

    /// Consume the set, yielding icons in indicator order.
    pub fn into_array(self) -> [IconVariants; IndicatorId::COUNT] { self.icons }
}

fn load_logged(path: &Path) -> Result<IconVariants, AssetError> {
    let icon = IconVariants::load(path)?;
    tracing::debug!(path = %path.display(), "icon loaded");
    Ok(icon)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn solid(
        width: u32,
        height: u32,
        rgba: [u8; 4],
    ) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    #[test]
    fn test_enhance_scales_and_saturates() {
        assert_eq!(enhance(100, 1.0), 100);
        assert_eq!(enhance(100, 2.0), 200);
        assert_eq!(enhance(200, 2.0), 255, "should saturate at 255");
        assert_eq!(enhance(0, 2.0), 0);
    }

    #[test]
    fn test_icon_is_resized() {
        let bitmap = IconBitmap::from_image(&solid(64, 48, [80, 80, 80, 255]), NORMAL_BRIGHTNESS);
        assert_eq!(bitmap.size(), Size::new(ICON_SIZE, ICON_SIZE));
        assert_eq!(bitmap.pixels_at(Point::zero()).count(), (ICON_SIZE * ICON_SIZE) as usize);
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let bitmap = IconBitmap::from_image(&solid(30, 30, [255, 0, 0, 0]), NORMAL_BRIGHTNESS);
        assert_eq!(bitmap.pixels_at(Point::zero()).count(), 0);
        assert_eq!(bitmap.pixel(0, 0), None);
    }

    #[test]
    fn test_active_variant_is_brighter() {
        let variants = IconVariants::from_image(&solid(30, 30, [64, 64, 64, 255]));
        let normal = variants.get(false).pixel(15, 15).unwrap();
        let active = variants.get(true).pixel(15, 15).unwrap();
        assert_eq!(normal, Rgb565::from(Rgb888::new(64, 64, 64)));
        assert_eq!(active, Rgb565::from(Rgb888::new(128, 128, 128)));
    }

    #[test]
    fn test_pixels_at_translates() {
        let bitmap = IconBitmap::from_image(&solid(30, 30, [255, 255, 255, 255]), NORMAL_BRIGHTNESS);
        let first = bitmap.pixels_at(Point::new(100, 50)).next().unwrap();
        assert_eq!(first.0, Point::new(100, 50));
        let last = bitmap.pixels_at(Point::new(100, 50)).last().unwrap();
        assert_eq!(last.0, Point::new(129, 79));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let bitmap = IconBitmap::from_image(&solid(30, 30, [255, 255, 255, 255]), NORMAL_BRIGHTNESS);
        assert_eq!(bitmap.pixel(ICON_SIZE, 0), None);
        assert_eq!(bitmap.pixel(0, ICON_SIZE), None);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = IconVariants::load(Path::new("assets/does-not-exist.png"));
        match result {
            Err(AssetError::Load { path, .. }) => {
                assert_eq!(path, PathBuf::from("assets/does-not-exist.png"));
            }
            Ok(_) => panic!("loading a missing icon must fail"),
        }
    }

    #[test]
    fn test_error_message_names_file() {
        let err = IconVariants::load(Path::new("nope/missing.webp")).unwrap_err();
        assert!(err.to_string().contains("nope/missing.webp"), "message was: {err}");
    }

    #[test]
    fn test_icon_set_load_stops_at_first_failure() {
        let paths = [
            Path::new("assets/missing-1.png"),
            Path::new("assets/missing-2.png"),
            Path::new("assets/missing-3.png"),
            Path::new("assets/missing-4.png"),
            Path::new("assets/missing-5.png"),
        ];
        let err = IconSet::load(&paths).err().unwrap();
        assert!(err.to_string().contains("missing-1.png"));
    }

    #[test]
    fn test_uniform_set_has_one_icon_per_indicator() {
        let set = IconSet::uniform(&solid(30, 30, [10, 20, 30, 255]));
        assert_eq!(set.into_array().len(), IndicatorId::COUNT);
    }

    #[test]
    fn test_bundled_icons_load() {
        let set = IconSet::load_default().expect("bundled icons must decode");
        for icon in set.into_array() {
            assert_eq!(icon.get(false).size(), Size::new(ICON_SIZE, ICON_SIZE));
        }
    }
}
