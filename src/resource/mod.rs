//=========================================================================
// Resource Subsystem
//=========================================================================
//
// Path-keyed caches for textures, sound clips and fonts, behind one
// facade.
//
// All caches share the same contract: `load` decodes and caches, `get`
// is get-or-load (a miss logs a warning and loads), failures degrade to
// `None` after logging. Nothing here panics over a missing asset — the
// game keeps running with a hole where the asset would be.
//
//=========================================================================

//=== Module Declarations =================================================

mod audio;
mod font;
mod texture;

//=== External Dependencies ===============================================

use glam::Vec2;
use thiserror::Error;

//=== Public API ==========================================================

pub use audio::{AudioCache, SoundClip};
pub use font::{FontCache, FontFace};
pub use texture::{Texture, TextureCache};

//=== ResourceError =======================================================

/// Errors produced while decoding assets.
///
/// These surface in logs; the public cache API degrades to `None`
/// instead of propagating them into the frame loop.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// File could not be read.
    #[error("asset i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Image file could not be decoded.
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// WAV file could not be decoded.
    #[error("wav decode error: {0}")]
    Wav(#[from] hound::Error),

    /// WAV file uses a sample format the engine does not decode.
    #[error("unsupported audio format in {path} (expected 16-bit integer PCM)")]
    UnsupportedAudioFormat { path: String },
}

//=== ResourceManager =====================================================

/// Facade over the texture, audio and font caches.
///
/// Owned by the shared context; components reach it every frame for
/// texture sizes and asset lookups.
pub struct ResourceManager {
    textures: TextureCache,
    audio: AudioCache,
    fonts: FontCache,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self {
            textures: TextureCache::new(),
            audio: AudioCache::new(),
            fonts: FontCache::new(),
        }
    }

    /// Drops every cached asset of every kind.
    pub fn clear(&mut self) {
        self.fonts.clear();
        self.audio.clear();
        self.textures.clear();
    }

    //--- Textures ---------------------------------------------------------

    pub fn load_texture(&mut self, path: &str) -> Option<&Texture> {
        self.textures.load(path)
    }

    pub fn get_texture(&mut self, path: &str) -> Option<&Texture> {
        self.textures.get(path)
    }

    pub fn unload_texture(&mut self, path: &str) {
        self.textures.unload(path);
    }

    /// Texture size in pixels; `(0, 0)` when the texture is unavailable.
    pub fn texture_size(&mut self, path: &str) -> Vec2 {
        self.textures.size(path)
    }

    pub fn clear_textures(&mut self) {
        self.textures.clear();
    }

    //--- Sounds -----------------------------------------------------------

    pub fn load_sound(&mut self, path: &str) -> Option<&SoundClip> {
        self.audio.load_sound(path)
    }

    pub fn get_sound(&mut self, path: &str) -> Option<&SoundClip> {
        self.audio.get_sound(path)
    }

    pub fn unload_sound(&mut self, path: &str) {
        self.audio.unload_sound(path);
    }

    pub fn clear_sounds(&mut self) {
        self.audio.clear_sounds();
    }

    //--- Music ------------------------------------------------------------

    pub fn load_music(&mut self, path: &str) -> Option<&SoundClip> {
        self.audio.load_music(path)
    }

    pub fn get_music(&mut self, path: &str) -> Option<&SoundClip> {
        self.audio.get_music(path)
    }

    pub fn unload_music(&mut self, path: &str) {
        self.audio.unload_music(path);
    }

    pub fn clear_music(&mut self) {
        self.audio.clear_music();
    }

    //--- Fonts ------------------------------------------------------------

    pub fn load_font(&mut self, path: &str, point_size: u32) -> Option<&FontFace> {
        self.fonts.load(path, point_size)
    }

    pub fn get_font(&mut self, path: &str, point_size: u32) -> Option<&FontFace> {
        self.fonts.get(path, point_size)
    }

    pub fn unload_font(&mut self, path: &str, point_size: u32) {
        self.fonts.unload(path, point_size);
    }

    pub fn clear_fonts(&mut self) {
        self.fonts.clear();
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
