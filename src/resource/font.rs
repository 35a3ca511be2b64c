//=========================================================================
// Font Cache
//=========================================================================
//
// Caches font faces keyed by (file path, point size).
//
// The cache stores the raw face bytes; rasterization is the render
// backend's concern. The point size is part of the key so the same face
// can be registered at several sizes, matching how text layers ask for
// fonts.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};

//=== FontFace ============================================================

/// A loaded font face at a fixed point size.
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Arc<Vec<u8>>,
    point_size: u32,
}

impl FontFace {
    /// Raw TTF/OTF bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn point_size(&self) -> u32 {
        self.point_size
    }
}

//=== FontCache ===========================================================

/// (path, point size)-keyed cache of font faces.
///
/// Faces loaded from the same file at different sizes share the
/// underlying byte buffer.
pub struct FontCache {
    fonts: HashMap<(String, u32), FontFace>,
}

impl FontCache {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
        }
    }

    /// Loads a face, or returns the cached one.
    pub fn load(&mut self, path: &str, point_size: u32) -> Option<&FontFace> {
        let key = (path.to_string(), point_size);
        if !self.fonts.contains_key(&key) {
            let data = match self.shared_bytes(path) {
                Some(data) => data,
                None => return None,
            };
            info!("loaded font: {} @ {}pt", path, point_size);
            self.fonts.insert(key.clone(), FontFace { data, point_size });
        }
        self.fonts.get(&key)
    }

    /// Returns a face, loading it on a miss.
    pub fn get(&mut self, path: &str, point_size: u32) -> Option<&FontFace> {
        if !self.fonts.contains_key(&(path.to_string(), point_size)) {
            warn!("font not cached: {} @ {}pt, loading it now", path, point_size);
        }
        self.load(path, point_size)
    }

    /// Drops one cached face.
    pub fn unload(&mut self, path: &str, point_size: u32) {
        if self.fonts.remove(&(path.to_string(), point_size)).is_some() {
            info!("unloaded font: {} @ {}pt", path, point_size);
        } else {
            warn!("font not cached: {} @ {}pt, cannot unload", path, point_size);
        }
    }

    /// Drops every cached face.
    pub fn clear(&mut self) {
        self.fonts.clear();
        info!("cleared all fonts");
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    //--- Internal Helpers -------------------------------------------------

    /// Returns the file's bytes, reusing the buffer of any face already
    /// loaded from the same path.
    fn shared_bytes(&self, path: &str) -> Option<Arc<Vec<u8>>> {
        if let Some(existing) = self
            .fonts
            .iter()
            .find(|((p, _), _)| p.as_str() == path)
            .map(|(_, face)| face.data.clone())
        {
            return Some(existing);
        }
        match std::fs::read(path) {
            Ok(bytes) => Some(Arc::new(bytes)),
            Err(e) => {
                warn!("failed to load font {}: {}", path, e);
                None
            }
        }
    }
}

impl Default for FontCache {
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

    fn temp_font(name: &str, bytes: &[u8]) -> String {
        let path = std::env::temp_dir().join(format!(
            "verdant_font_test_{}_{}.ttf",
            std::process::id(),
            name
        ));
        let path = path.to_string_lossy().into_owned();
        std::fs::write(&path, bytes).expect("write test font");
        path
    }

    #[test]
    fn load_keys_by_path_and_size() {
        let path = temp_font("keys", b"fake-face-bytes");
        let mut cache = FontCache::new();

        assert!(cache.load(&path, 16).is_some());
        assert!(cache.load(&path, 32).is_some());
        assert_eq!(cache.len(), 2);

        let face = cache.get(&path, 16).expect("cached face");
        assert_eq!(face.point_size(), 16);
        assert_eq!(face.data(), b"fake-face-bytes");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn sizes_share_the_byte_buffer() {
        let path = temp_font("share", b"shared");
        let mut cache = FontCache::new();

        cache.load(&path, 12);
        // Remove the file: the second size must come from the shared buffer.
        let _ = std::fs::remove_file(&path);
        assert!(cache.load(&path, 24).is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn missing_file_is_none() {
        let mut cache = FontCache::new();
        assert!(cache.get("/no/such/font.ttf", 16).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn unload_removes_single_size() {
        let path = temp_font("unload", b"bytes");
        let mut cache = FontCache::new();
        cache.load(&path, 16);
        cache.load(&path, 32);

        cache.unload(&path, 16);
        assert_eq!(cache.len(), 1);
        cache.unload(&path, 16); // logged no-op
        let _ = std::fs::remove_file(&path);
    }
}
