//=========================================================================
// Sprite Descriptor
//=========================================================================
//
// A lightweight visual descriptor: which texture to draw, which part of
// it, and whether to mirror it. Sprites carry no position or size —
// those come from the transform component and the draw call.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::math::Rect;

//=== Sprite ==============================================================

/// Reference to a drawable image region.
///
/// `source_rect` selects a sub-rectangle of the texture in pixels
/// (for sprite sheets); `None` draws the whole texture. `flipped`
/// mirrors horizontally, which is how walk cycles face both ways from
/// one set of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    texture_id: String,
    source_rect: Option<Rect>,
    flipped: bool,
}

impl Sprite {
    /// Creates a sprite drawing the full texture, unflipped.
    pub fn new(texture_id: impl Into<String>) -> Self {
        Self {
            texture_id: texture_id.into(),
            source_rect: None,
            flipped: false,
        }
    }

    /// Creates a sprite with an explicit source sub-rectangle and flip.
    pub fn with_source(
        texture_id: impl Into<String>,
        source_rect: Option<Rect>,
        flipped: bool,
    ) -> Self {
        Self {
            texture_id: texture_id.into(),
            source_rect,
            flipped,
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Path identifying the texture in the resource cache.
    pub fn texture_id(&self) -> &str {
        &self.texture_id
    }

    /// Source sub-rectangle in texture pixels, if any.
    pub fn source_rect(&self) -> Option<Rect> {
        self.source_rect
    }

    /// Whether the sprite is mirrored horizontally.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    //--- Mutators ---------------------------------------------------------

    pub fn set_texture_id(&mut self, texture_id: impl Into<String>) {
        self.texture_id = texture_id.into();
    }

    pub fn set_source_rect(&mut self, source_rect: Option<Rect>) {
        self.source_rect = source_rect;
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }
}
