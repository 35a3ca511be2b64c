//=========================================================================
// Texture Cache
//=========================================================================
//
// Loads and caches decoded images keyed by file path.
//
// Get-or-load semantics: a `get` miss logs a warning and falls through
// to loading, so callers never pre-register textures. Decode failures
// are logged and reported as `None` — a missing texture degrades to an
// invisible sprite, never a crash.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use glam::Vec2;
use image::RgbaImage;
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::ResourceError;

//=== Texture =============================================================

/// A decoded RGBA image.
#[derive(Debug, Clone)]
pub struct Texture {
    image: RgbaImage,
}

impl Texture {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Size in pixels as a float vector, the unit sprites work in.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    /// Raw pixel data for backends that upload or blit.
    pub fn pixels(&self) -> &RgbaImage {
        &self.image
    }
}

//=== TextureCache ========================================================

/// Path-keyed cache of decoded textures.
pub struct TextureCache {
    textures: HashMap<String, Texture>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Loads a texture, or returns the cached one if already loaded.
    ///
    /// Returns `None` (after logging) when the file cannot be read or
    /// decoded.
    pub fn load(&mut self, path: &str) -> Option<&Texture> {
        if !self.textures.contains_key(path) {
            match Self::decode(path) {
                Ok(texture) => {
                    info!("loaded texture: {}", path);
                    self.textures.insert(path.to_string(), texture);
                }
                Err(e) => {
                    warn!("failed to load texture {}: {}", path, e);
                    return None;
                }
            }
        }
        self.textures.get(path)
    }

    /// Returns the texture, loading it on a miss.
    pub fn get(&mut self, path: &str) -> Option<&Texture> {
        if !self.textures.contains_key(path) {
            warn!("texture not cached: {}, loading it now", path);
        }
        self.load(path)
    }

    /// Size of a texture in pixels; `(0, 0)` when unavailable.
    pub fn size(&mut self, path: &str) -> Vec2 {
        match self.get(path) {
            Some(texture) => texture.size(),
            None => {
                warn!("texture {} unavailable, reporting zero size", path);
                Vec2::ZERO
            }
        }
    }

    /// Drops a cached texture.
    pub fn unload(&mut self, path: &str) {
        if self.textures.remove(path).is_some() {
            info!("unloaded texture: {}", path);
        } else {
            warn!("texture not cached: {}, cannot unload", path);
        }
    }

    /// Drops every cached texture.
    pub fn clear(&mut self) {
        self.textures.clear();
        info!("cleared all textures");
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    //--- Internal Helpers -------------------------------------------------

    fn decode(path: &str) -> Result<Texture, ResourceError> {
        let image = image::open(path)?.to_rgba8();
        Ok(Texture { image })
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Writes a small PNG to a unique temp path and returns the path.
    fn temp_png(name: &str, width: u32, height: u32) -> String {
        let path = std::env::temp_dir().join(format!(
            "verdant_texture_test_{}_{}",
            std::process::id(),
            name
        ));
        let path = path.to_string_lossy().into_owned() + ".png";
        RgbaImage::new(width, height)
            .save(&path)
            .expect("write test png");
        path
    }

    #[test]
    fn load_caches_and_reports_size() {
        let path = temp_png("load", 7, 3);
        let mut cache = TextureCache::new();

        let texture = cache.load(&path).expect("png should load");
        assert_eq!(texture.width(), 7);
        assert_eq!(texture.height(), 3);
        assert_eq!(cache.len(), 1);

        // Second load hits the cache and keeps a single entry.
        assert!(cache.load(&path).is_some());
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.size(&path), Vec2::new(7.0, 3.0));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn get_loads_on_miss() {
        let path = temp_png("miss", 2, 2);
        let mut cache = TextureCache::new();

        assert!(cache.is_empty());
        assert!(cache.get(&path).is_some());
        assert_eq!(cache.len(), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_degrades_to_none_and_zero_size() {
        let mut cache = TextureCache::new();
        assert!(cache.get("/no/such/texture.png").is_none());
        assert_eq!(cache.size("/no/such/texture.png"), Vec2::ZERO);
        assert!(cache.is_empty());
    }

    #[test]
    fn unload_removes_entry() {
        let path = temp_png("unload", 4, 4);
        let mut cache = TextureCache::new();
        cache.load(&path);

        cache.unload(&path);
        assert!(cache.is_empty());

        // Unloading again is a logged no-op.
        cache.unload(&path);
        let _ = std::fs::remove_file(&path);
    }
}
