//=========================================================================
// Audio Cache
//=========================================================================
//
// Loads and caches decoded sound clips keyed by file path.
//
// Two pools mirror the classic mixer split: short *sounds* (effects,
// fully decoded, fire-and-forget) and longer *music* tracks. Both decode
// to the same in-memory clip format here; streaming is an audio-backend
// concern outside this crate.
//
// Supported format: 16-bit integer PCM WAV. Anything else is reported
// (and logged) as unsupported rather than mis-decoded.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use hound::{SampleFormat, WavReader};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::ResourceError;

//=== SoundClip ===========================================================

/// A fully decoded PCM clip.
#[derive(Debug, Clone)]
pub struct SoundClip {
    sample_rate: u32,
    channels: u16,
    samples: Vec<i16>,
}

impl SoundClip {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Interleaved PCM samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Clip length in seconds.
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        let frames = self.samples.len() as f32 / f32::from(self.channels);
        frames / self.sample_rate as f32
    }
}

//=== AudioCache ==========================================================

/// Path-keyed caches of decoded sounds and music.
pub struct AudioCache {
    sounds: HashMap<String, SoundClip>,
    music: HashMap<String, SoundClip>,
}

impl AudioCache {
    pub fn new() -> Self {
        Self {
            sounds: HashMap::new(),
            music: HashMap::new(),
        }
    }

    //--- Sounds -----------------------------------------------------------

    /// Loads a sound effect, or returns the cached one.
    pub fn load_sound(&mut self, path: &str) -> Option<&SoundClip> {
        Self::load_into(&mut self.sounds, path, "sound")
    }

    /// Returns a sound effect, loading it on a miss.
    pub fn get_sound(&mut self, path: &str) -> Option<&SoundClip> {
        if !self.sounds.contains_key(path) {
            warn!("sound not cached: {}, loading it now", path);
        }
        Self::load_into(&mut self.sounds, path, "sound")
    }

    /// Drops a cached sound effect.
    pub fn unload_sound(&mut self, path: &str) {
        if self.sounds.remove(path).is_some() {
            info!("unloaded sound: {}", path);
        } else {
            warn!("sound not cached: {}, cannot unload", path);
        }
    }

    /// Drops every cached sound effect.
    pub fn clear_sounds(&mut self) {
        self.sounds.clear();
        info!("cleared all sounds");
    }

    //--- Music ------------------------------------------------------------

    /// Loads a music track, or returns the cached one.
    pub fn load_music(&mut self, path: &str) -> Option<&SoundClip> {
        Self::load_into(&mut self.music, path, "music")
    }

    /// Returns a music track, loading it on a miss.
    pub fn get_music(&mut self, path: &str) -> Option<&SoundClip> {
        if !self.music.contains_key(path) {
            warn!("music not cached: {}, loading it now", path);
        }
        Self::load_into(&mut self.music, path, "music")
    }

    /// Drops a cached music track.
    pub fn unload_music(&mut self, path: &str) {
        if self.music.remove(path).is_some() {
            info!("unloaded music: {}", path);
        } else {
            warn!("music not cached: {}, cannot unload", path);
        }
    }

    /// Drops every cached music track.
    pub fn clear_music(&mut self) {
        self.music.clear();
        info!("cleared all music");
    }

    /// Drops everything in both pools.
    pub fn clear(&mut self) {
        self.clear_sounds();
        self.clear_music();
    }

    //--- Internal Helpers -------------------------------------------------

    fn load_into<'a>(
        pool: &'a mut HashMap<String, SoundClip>,
        path: &str,
        kind: &str,
    ) -> Option<&'a SoundClip> {
        if !pool.contains_key(path) {
            match Self::decode(path) {
                Ok(clip) => {
                    info!("loaded {}: {}", kind, path);
                    pool.insert(path.to_string(), clip);
                }
                Err(e) => {
                    warn!("failed to load {} {}: {}", kind, path, e);
                    return None;
                }
            }
        }
        pool.get(path)
    }

    fn decode(path: &str) -> Result<SoundClip, ResourceError> {
        let mut reader = WavReader::open(path)?;
        let spec = reader.spec();
        if spec.sample_format != SampleFormat::Int || spec.bits_per_sample > 16 {
            return Err(ResourceError::UnsupportedAudioFormat {
                path: path.to_string(),
            });
        }
        let samples = reader
            .samples::<i16>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SoundClip {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            samples,
        })
    }
}

impl Default for AudioCache {
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

    /// Writes a mono 16-bit WAV with the given number of frames.
    fn temp_wav(name: &str, sample_rate: u32, frames: usize) -> String {
        let path = std::env::temp_dir().join(format!(
            "verdant_audio_test_{}_{}.wav",
            std::process::id(),
            name
        ));
        let path = path.to_string_lossy().into_owned();
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("create test wav");
        for i in 0..frames {
            writer.write_sample((i % 128) as i16).expect("write sample");
        }
        writer.finalize().expect("finalize test wav");
        path
    }

    #[test]
    fn load_sound_decodes_pcm() {
        let path = temp_wav("decode", 8000, 4000);
        let mut cache = AudioCache::new();

        let clip = cache.load_sound(&path).expect("wav should load");
        assert_eq!(clip.sample_rate(), 8000);
        assert_eq!(clip.channels(), 1);
        assert_eq!(clip.samples().len(), 4000);
        assert!((clip.duration_seconds() - 0.5).abs() < 1e-3);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn get_sound_loads_on_miss_and_caches() {
        let path = temp_wav("miss", 8000, 10);
        let mut cache = AudioCache::new();

        assert!(cache.get_sound(&path).is_some());
        // The file can disappear once cached.
        let _ = std::fs::remove_file(&path);
        assert!(cache.get_sound(&path).is_some());
    }

    #[test]
    fn missing_file_is_none() {
        let mut cache = AudioCache::new();
        assert!(cache.get_sound("/no/such/clip.wav").is_none());
        assert!(cache.get_music("/no/such/track.wav").is_none());
    }

    #[test]
    fn sounds_and_music_are_separate_pools() {
        let path = temp_wav("pools", 8000, 10);
        let mut cache = AudioCache::new();

        cache.load_sound(&path);
        cache.load_music(&path);

        cache.clear_sounds();
        assert!(cache.get_music(&path).is_some());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unload_missing_is_a_noop() {
        let mut cache = AudioCache::new();
        cache.unload_sound("/nope.wav");
        cache.unload_music("/nope.wav");
    }
}
