//! Sprite textures loaded from the assets directory.
//!
//! Images are decoded up front so their sizes are known at scene setup.
//! They are uploaded to the GPU the first time they are drawn.

use eframe::egui::{self, ColorImage, TextureHandle, TextureId, TextureOptions, Vec2};
use std::collections::HashMap;
use std::path::Path;

/// Every texture the title screen knows how to draw
pub const TITLE_TEXTURES: &[&str] = &[
    "logo",
    "wiki",
    "discord",
    "github",
    "reddit",
    "ivy-sprite",
    "finn-sprite",
];

/// Decoded images and their uploaded textures
#[derive(Default)]
pub struct Assets {
    images: HashMap<String, ColorImage>,
    textures: HashMap<String, TextureHandle>,
}

impl Assets {
    /// Decode `<key>.png` from `dir` for each key.
    ///
    /// Missing or unreadable files are logged and skipped.
    pub fn load_dir(dir: &Path, keys: &[&str]) -> Self {
        let mut assets = Self::default();
        for key in keys {
            let path = dir.join(format!("{}.png", key));
            match load_color_image(&path) {
                Ok(image) => {
                    assets.images.insert(key.to_string(), image);
                }
                Err(e) => {
                    tracing::warn!("Texture '{}' unavailable ({:?}): {}", key, path, e);
                }
            }
        }
        tracing::info!("Loaded {}/{} textures from {:?}", assets.images.len(), keys.len(), dir);
        assets
    }

    /// Pixel size of a decoded image
    pub fn size(&self, key: &str) -> Option<Vec2> {
        self.images
            .get(key)
            .map(|img| Vec2::new(img.size[0] as f32, img.size[1] as f32))
    }

    /// Texture id for drawing, uploading on first use
    pub fn texture(&mut self, ctx: &egui::Context, key: &str) -> Option<TextureId> {
        if let Some(handle) = self.textures.get(key) {
            return Some(handle.id());
        }
        let image = self.images.get(key)?.clone();
        let handle = ctx.load_texture(key, image, TextureOptions::NEAREST);
        let id = handle.id();
        self.textures.insert(key.to_string(), handle);
        Some(id)
    }
}

/// Decode a PNG into an egui image
pub fn load_color_image(path: &Path) -> anyhow::Result<ColorImage> {
    let bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&bytes)?.into_rgba8();
    let (width, height) = image.dimensions();
    Ok(ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        image.as_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let assets = Assets::load_dir(dir.path(), TITLE_TEXTURES);
        assert!(assets.size("logo").is_none());
    }

    #[test]
    fn test_png_size_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let img = image::RgbaImage::from_pixel(12, 20, image::Rgba([255, 0, 0, 255]));
        img.save(dir.path().join("ivy-sprite.png")).unwrap();
        std::fs::write(dir.path().join("finn-sprite.png"), b"not a png").unwrap();

        let assets = Assets::load_dir(dir.path(), &["ivy-sprite", "finn-sprite"]);
        assert_eq!(assets.size("ivy-sprite"), Some(Vec2::new(12.0, 20.0)));
        assert!(assets.size("finn-sprite").is_none());
    }
}
