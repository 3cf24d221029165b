// Central asset management system

use super::{AssetError, AssetLoader};
use crate::engine::animation::SpriteSheet;
use anyhow::Result;
use image::RgbaImage;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// Central asset store for a scene
///
/// Images are decoded to RGBA and kept by key. Sprite-sheets are images with
/// a frame grid attached.
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Decoded images, including sprite-sheet textures
    images: HashMap<String, RgbaImage>,

    /// Frame layout of loaded sprite-sheets
    sheets: HashMap<String, SpriteSheet>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            images: HashMap::new(),
            sheets: HashMap::new(),
        }
    }

    /// Load an image from disk under `key`
    pub fn load_image(&mut self, key: &str, path: &str) -> Result<()> {
        if self.images.contains_key(key) {
            return Err(AssetError::AlreadyLoaded(key.to_string()).into());
        }

        let image = self.decode(path)?;
        debug!("Loaded image '{}' ({}x{})", key, image.width(), image.height());
        self.images.insert(key.to_string(), image);
        Ok(())
    }

    /// Load a sprite-sheet made of `frame_width` x `frame_height` frames
    pub fn load_spritesheet(
        &mut self,
        key: &str,
        path: &str,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<&SpriteSheet> {
        if self.images.contains_key(key) {
            return Err(AssetError::AlreadyLoaded(key.to_string()).into());
        }

        let image = self.decode(path)?;
        let (width, height) = image.dimensions();

        let fits = frame_width > 0
            && frame_height > 0
            && width >= frame_width
            && height >= frame_height
            && width % frame_width == 0
            && height % frame_height == 0;
        if !fits {
            return Err(AssetError::InvalidFrameSize {
                key: key.to_string(),
                width,
                height,
                frame_width,
                frame_height,
            }
            .into());
        }

        let sheet = SpriteSheet::new(
            key,
            frame_width,
            frame_height,
            width / frame_width,
            height / frame_height,
        );
        debug!(
            "Loaded sprite-sheet '{}' ({} frames of {}x{})",
            key,
            sheet.frame_count(),
            frame_width,
            frame_height
        );

        self.images.insert(key.to_string(), image);
        let sheet = self.sheets.entry(key.to_string()).or_insert(sheet);
        Ok(&*sheet)
    }

    fn decode(&self, path: &str) -> Result<RgbaImage> {
        let bytes = self.loader.load_bytes(path)?;
        let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_string(),
            source,
        })?;
        Ok(image.to_rgba8())
    }

    /// Get the size of a loaded image
    pub fn image_size(&self, key: &str) -> Option<(u32, u32)> {
        self.images.get(key).map(|image| image.dimensions())
    }

    /// Get a loaded sprite-sheet by key
    pub fn sheet(&self, key: &str) -> Option<&SpriteSheet> {
        self.sheets.get(key)
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            image_count: self.images.len(),
            sheet_count: self.sheets.len(),
        }
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub image_count: usize,
    pub sheet_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        RgbaImage::new(width, height).save(path).unwrap();
    }

    fn asset_error(err: &anyhow::Error) -> &AssetError {
        err.downcast_ref::<AssetError>().unwrap()
    }

    #[test]
    fn test_load_image() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir, "background.png", 64, 32);

        let mut assets = AssetManager::new(dir.path());
        assets.load_image("background", "background.png").unwrap();

        assert_eq!(assets.image_size("background"), Some((64, 32)));
        assert!(assets.sheet("background").is_none());
        assert_eq!(assets.image_size("hero_idle"), None);
    }

    #[test]
    fn test_load_image_twice() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir, "background.png", 8, 8);

        let mut assets = AssetManager::new(dir.path());
        assets.load_image("background", "background.png").unwrap();
        let err = assets.load_image("background", "background.png").unwrap_err();
        assert!(matches!(asset_error(&err), AssetError::AlreadyLoaded(_)));
    }

    #[test]
    fn test_load_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = AssetManager::new(dir.path());

        let err = assets.load_image("background", "background.png").unwrap_err();
        assert!(matches!(asset_error(&err), AssetError::NotFound(_)));
    }

    #[test]
    fn test_load_corrupt_image() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();

        let mut assets = AssetManager::new(dir.path());
        let err = assets.load_image("broken", "broken.png").unwrap_err();
        assert!(matches!(asset_error(&err), AssetError::Decode { .. }));
    }

    #[test]
    fn test_load_spritesheet() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir, "hero/_Idle.png", 1200, 80);

        let mut assets = AssetManager::new(dir.path());
        let sheet = assets
            .load_spritesheet("hero_idle", "hero/_Idle.png", 120, 80)
            .unwrap();
        assert_eq!(sheet.columns, 10);
        assert_eq!(sheet.rows, 1);
        assert_eq!(sheet.frame_count(), 10);

        assert_eq!(
            assets.stats(),
            AssetStats {
                image_count: 1,
                sheet_count: 1
            }
        );
    }

    #[test]
    fn test_spritesheet_with_partial_frames() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir, "_Run.png", 1150, 80);

        let mut assets = AssetManager::new(dir.path());
        let err = assets
            .load_spritesheet("hero_run", "_Run.png", 120, 80)
            .unwrap_err();
        assert!(matches!(
            asset_error(&err),
            AssetError::InvalidFrameSize { width: 1150, .. }
        ));
        assert!(assets.sheet("hero_run").is_none());
    }
}
