//=========================================================================
// Sprite Component
//=========================================================================
//
// Makes a game object drawable: pairs a sprite descriptor with the
// object's transform and records a draw each render pass.
//
// Requires a TransformComponent on the same object. Without one the
// sprite logs a warning at init and renders nothing — the object keeps
// running, just invisibly.
//
// The sprite's size comes from its source sub-rectangle when one is
// set, otherwise from the texture's size in the resource cache
// (queried once at init and again whenever the texture or source
// rectangle changes).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use glam::Vec2;
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::{Component, TransformComponent};
use crate::core::Context;
use crate::math::Rect;
use crate::object::GameObject;
use crate::render::Sprite;
use crate::resource::ResourceManager;

//=== Anchor ==============================================================

/// Where the transform's position sits on the sprite.
///
/// `BottomCenter`, for example, puts the position at the sprite's feet —
/// the usual choice for characters standing on tiles. `None` leaves the
/// position at the top-left corner without any anchoring intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    None,
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Offset of the sprite's top-left corner relative to the anchored
    /// position, for a sprite of `size` drawn at `scale`.
    fn offset(self, size: Vec2, scale: Vec2) -> Vec2 {
        if size.x <= 0.0 || size.y <= 0.0 {
            return Vec2::ZERO;
        }
        let raw = match self {
            Anchor::None | Anchor::TopLeft => Vec2::ZERO,
            Anchor::TopCenter => Vec2::new(-size.x / 2.0, 0.0),
            Anchor::TopRight => Vec2::new(-size.x, 0.0),
            Anchor::CenterLeft => Vec2::new(0.0, -size.y / 2.0),
            Anchor::Center => Vec2::new(-size.x / 2.0, -size.y / 2.0),
            Anchor::CenterRight => Vec2::new(-size.x, -size.y / 2.0),
            Anchor::BottomLeft => Vec2::new(0.0, -size.y),
            Anchor::BottomCenter => Vec2::new(-size.x / 2.0, -size.y),
            Anchor::BottomRight => Vec2::new(-size.x, -size.y),
        };
        raw * scale
    }
}

//=== SpriteComponent =====================================================

/// Drawable-sprite capability.
pub struct SpriteComponent {
    sprite: Sprite,
    anchor: Anchor,
    sprite_size: Vec2,
    hidden: bool,
}

impl SpriteComponent {
    //--- Construction -----------------------------------------------------

    /// Creates a sprite drawing the whole texture, anchored at `None`.
    pub fn new(texture_id: impl Into<String>) -> Self {
        let sprite = Sprite::new(texture_id);
        trace!("sprite component created for texture {}", sprite.texture_id());
        Self {
            sprite,
            anchor: Anchor::None,
            sprite_size: Vec2::ZERO,
            hidden: false,
        }
    }

    /// Builder-style anchor assignment.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Builder-style source sub-rectangle assignment.
    pub fn with_source_rect(mut self, source_rect: Rect) -> Self {
        self.sprite.set_source_rect(Some(source_rect));
        self
    }

    /// Builder-style horizontal flip assignment.
    pub fn with_flipped(mut self, flipped: bool) -> Self {
        self.sprite.set_flipped(flipped);
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn texture_id(&self) -> &str {
        self.sprite.texture_id()
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Unscaled sprite size in world units, as resolved at init.
    pub fn sprite_size(&self) -> Vec2 {
        self.sprite_size
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_flipped(&self) -> bool {
        self.sprite.is_flipped()
    }

    //--- Mutators ---------------------------------------------------------

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.sprite.set_flipped(flipped);
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }

    /// Switches to another texture (and optional source rectangle),
    /// re-resolving the sprite size.
    pub fn set_texture(
        &mut self,
        resources: &mut ResourceManager,
        texture_id: impl Into<String>,
        source_rect: Option<Rect>,
    ) {
        self.sprite.set_texture_id(texture_id);
        self.sprite.set_source_rect(source_rect);
        self.resolve_size(resources);
    }

    /// Changes the source sub-rectangle, re-resolving the sprite size.
    pub fn set_source_rect(&mut self, resources: &mut ResourceManager, source_rect: Option<Rect>) {
        self.sprite.set_source_rect(source_rect);
        self.resolve_size(resources);
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sprite size from the source rectangle, or the texture itself.
    fn resolve_size(&mut self, resources: &mut ResourceManager) {
        self.sprite_size = match self.sprite.source_rect() {
            Some(rect) => rect.size,
            None => resources.texture_size(self.sprite.texture_id()),
        };
    }
}

impl Component for SpriteComponent {
    fn init(&mut self, owner: &mut GameObject, ctx: &mut Context) {
        if !owner.has_component::<TransformComponent>() {
            warn!(
                "'{}' needs a TransformComponent for its sprite to draw",
                owner.name()
            );
            return;
        }
        self.resolve_size(&mut ctx.resources);
    }

    fn update(&mut self, _dt: f32, _owner: &mut GameObject, _ctx: &mut Context) {}

    fn render(&mut self, owner: &mut GameObject, ctx: &mut Context) {
        if self.hidden {
            return;
        }
        let Some(transform) = owner.component::<TransformComponent>() else {
            return;
        };
        let offset = self.anchor.offset(self.sprite_size, transform.scale);
        ctx.renderer.draw_sprite(
            &ctx.camera,
            &self.sprite,
            transform.position + offset,
            self.sprite_size,
            transform.scale,
            transform.rotation,
        );
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::render::DrawCommand;

    fn ctx() -> Context {
        Context::new(&Config::default())
    }

    /// A sprite whose size comes from its source rect, so tests never
    /// touch the filesystem.
    fn sheet_sprite() -> SpriteComponent {
        SpriteComponent::new("sheet.png").with_source_rect(Rect::from_xywh(0.0, 0.0, 16.0, 24.0))
    }

    #[test]
    fn init_resolves_size_from_source_rect() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        object.add_component(TransformComponent::default(), &mut ctx);
        let sprite = object.add_component(sheet_sprite(), &mut ctx);
        assert_eq!(sprite.sprite_size(), Vec2::new(16.0, 24.0));
    }

    #[test]
    fn missing_texture_resolves_to_zero_size() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        object.add_component(TransformComponent::default(), &mut ctx);
        let sprite = object.add_component(SpriteComponent::new("/no/such.png"), &mut ctx);
        assert_eq!(sprite.sprite_size(), Vec2::ZERO);
    }

    #[test]
    fn render_records_anchored_draw() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        object.add_component(
            TransformComponent::new(Vec2::new(100.0, 100.0)),
            &mut ctx,
        );
        object.add_component(sheet_sprite().with_anchor(Anchor::BottomCenter), &mut ctx);

        object.render(&mut ctx);

        assert_eq!(ctx.renderer.commands().len(), 1);
        match &ctx.renderer.commands()[0] {
            DrawCommand::Sprite { position, size, .. } => {
                // BottomCenter: offset (-8, -24) from the anchored position.
                assert_eq!(*position, Vec2::new(92.0, 76.0));
                assert_eq!(*size, Vec2::new(16.0, 24.0));
            }
        }
    }

    #[test]
    fn render_without_transform_draws_nothing() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        object.add_component(sheet_sprite(), &mut ctx);

        object.render(&mut ctx);
        assert!(ctx.renderer.commands().is_empty());
    }

    #[test]
    fn hidden_sprite_draws_nothing() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        object.add_component(TransformComponent::default(), &mut ctx);
        object.add_component(sheet_sprite(), &mut ctx);

        object
            .component_mut::<SpriteComponent>()
            .expect("sprite attached")
            .set_hidden(true);
        object.render(&mut ctx);
        assert!(ctx.renderer.commands().is_empty());
    }

    #[test]
    fn anchor_offsets_scale_with_transform() {
        let offset = Anchor::Center.offset(Vec2::new(10.0, 20.0), Vec2::new(2.0, 2.0));
        assert_eq!(offset, Vec2::new(-10.0, -20.0));

        let zero = Anchor::Center.offset(Vec2::ZERO, Vec2::ONE);
        assert_eq!(zero, Vec2::ZERO);
    }

    #[test]
    fn set_source_rect_rescales() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        object.add_component(TransformComponent::default(), &mut ctx);
        object.add_component(sheet_sprite(), &mut ctx);

        let sprite = object
            .component_mut::<SpriteComponent>()
            .expect("sprite attached");
        sprite.set_source_rect(&mut ctx.resources, Some(Rect::from_xywh(16.0, 0.0, 8.0, 8.0)));
        assert_eq!(sprite.sprite_size(), Vec2::new(8.0, 8.0));
    }
}
