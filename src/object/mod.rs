//=========================================================================
// Game Object
//=========================================================================
//
// A composable entity: an identity (name, tag) plus at most one
// component per concrete component type.
//
// Storage is a `TypeId`-keyed map for O(1) lookup, with a side vector
// recording attach order so per-frame traversal is deterministic.
//
// Lifecycle delegation: the per-frame calls forward to every attached
// component. For each call the component is taken out of the map, the
// object itself is passed in as the owner, and the component is put
// back afterwards — this is what lets a component reach its siblings
// during its own callback without aliasing its storage slot.
//
// Removal is soft: `set_need_remove(true)` marks the object and the
// owning scene erases (and cleans) it at the next traversal boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::component::Component;
use crate::core::Context;

//=== ObjectId ============================================================

/// Process-unique identity of a [`GameObject`].
///
/// Scenes address objects by id for removal requests, which makes the
/// requests safe to hold across frames: an id whose object is gone
/// simply no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

//=== GameObject ==========================================================

/// A named entity owning a set of components.
pub struct GameObject {
    id: ObjectId,
    name: String,
    tag: String,
    components: HashMap<TypeId, Box<dyn Component>>,
    attach_order: Vec<TypeId>,
    need_remove: bool,
}

impl GameObject {
    //--- Construction -----------------------------------------------------

    /// Creates an empty object with the given name and no tag.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        trace!("game object created: {}", name);
        Self {
            id: ObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed)),
            name,
            tag: String::new(),
            components: HashMap::new(),
            attach_order: Vec::new(),
            need_remove: false,
        }
    }

    /// Builder-style tag assignment.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    //--- Identity ---------------------------------------------------------

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    //--- Soft Delete ------------------------------------------------------

    /// Marks (or unmarks) the object for removal by its owning scene.
    pub fn set_need_remove(&mut self, need_remove: bool) {
        self.need_remove = need_remove;
    }

    /// Whether the owning scene should erase this object at the next
    /// traversal boundary.
    pub fn need_remove(&self) -> bool {
        self.need_remove
    }

    //--- Component Management ---------------------------------------------

    /// Attaches a component and returns an exclusive reference to it.
    ///
    /// The component's `init` runs immediately, with this object as the
    /// owner. Attaching a component of an already-present type is a
    /// no-op that returns the existing instance — the passed value is
    /// dropped without ever being initialized.
    pub fn add_component<C: Component>(&mut self, component: C, ctx: &mut Context) -> &mut C {
        let type_id = TypeId::of::<C>();
        if self.components.contains_key(&type_id) {
            debug!(
                "'{}' already has a {}, keeping the existing one",
                self.name,
                type_name::<C>()
            );
        } else {
            let mut boxed: Box<dyn Component> = Box::new(component);
            boxed.init(self, ctx);
            self.attach_order.push(type_id);
            self.components.insert(type_id, boxed);
            trace!("'{}' added component {}", self.name, type_name::<C>());
        }
        // The entry exists and holds a C: either it pre-existed (guard
        // above) or it was just inserted.
        self.components
            .get_mut(&type_id)
            .and_then(|c| c.as_any_mut().downcast_mut::<C>())
            .expect("component table holds the type it is keyed by")
    }

    /// Returns the component of type `C`, if attached.
    pub fn component<C: Component>(&self) -> Option<&C> {
        self.components
            .get(&TypeId::of::<C>())
            .and_then(|c| c.as_any().downcast_ref::<C>())
    }

    /// Returns the component of type `C` mutably, if attached.
    pub fn component_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components
            .get_mut(&TypeId::of::<C>())
            .and_then(|c| c.as_any_mut().downcast_mut::<C>())
    }

    /// Whether a component of type `C` is attached.
    pub fn has_component<C: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<C>())
    }

    /// Detaches and destroys the component of type `C`, running its
    /// `clean` first. Absent components are a no-op.
    pub fn remove_component<C: Component>(&mut self) {
        let type_id = TypeId::of::<C>();
        if let Some(mut component) = self.components.remove(&type_id) {
            component.clean(self);
            self.attach_order.retain(|t| *t != type_id);
            trace!("'{}' removed component {}", self.name, type_name::<C>());
        }
    }

    /// Number of attached components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    //--- Per-Frame Delegation ---------------------------------------------

    /// Forwards the update to every component, in attach order.
    pub fn update(&mut self, dt: f32, ctx: &mut Context) {
        self.for_each_component(|component, owner| component.update(dt, owner, ctx));
    }

    /// Forwards the render call to every component, in attach order.
    pub fn render(&mut self, ctx: &mut Context) {
        self.for_each_component(|component, owner| component.render(owner, ctx));
    }

    /// Forwards the input call to every component, in attach order.
    pub fn handle_input(&mut self, ctx: &mut Context) {
        self.for_each_component(|component, owner| component.handle_input(owner, ctx));
    }

    /// Runs `clean` on every component and destroys them all.
    pub fn clean(&mut self) {
        trace!("cleaning game object '{}'", self.name);
        for type_id in std::mem::take(&mut self.attach_order) {
            if let Some(mut component) = self.components.remove(&type_id) {
                component.clean(self);
            }
        }
        self.components.clear();
    }

    //--- Internal Helpers -------------------------------------------------

    /// Visits each component in attach order, detaching it for the
    /// duration of its own callback.
    ///
    /// The order snapshot means components attached during the walk are
    /// first visited next frame, and components removed during the walk
    /// are skipped.
    fn for_each_component(&mut self, mut visit: impl FnMut(&mut Box<dyn Component>, &mut Self)) {
        let order = self.attach_order.clone();
        for type_id in order {
            if let Some(mut component) = self.components.remove(&type_id) {
                visit(&mut component, self);
                self.components.insert(type_id, component);
            }
        }
    }
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObject")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("components", &self.components.len())
            .field("need_remove", &self.need_remove)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::TransformComponent;
    use crate::core::Config;
    use glam::Vec2;
    use std::any::Any;
    use std::cell::Cell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    fn ctx() -> Context {
        Context::new(&Config::default())
    }

    /// Counts its lifecycle calls through shared cells.
    struct Probe {
        inits: Rc<Cell<u32>>,
        updates: Rc<Cell<u32>>,
        cleans: Rc<Cell<u32>>,
    }

    impl Probe {
        fn new() -> (Self, Rc<Cell<u32>>, Rc<Cell<u32>>, Rc<Cell<u32>>) {
            let inits = Rc::new(Cell::new(0));
            let updates = Rc::new(Cell::new(0));
            let cleans = Rc::new(Cell::new(0));
            (
                Self {
                    inits: inits.clone(),
                    updates: updates.clone(),
                    cleans: cleans.clone(),
                },
                inits,
                updates,
                cleans,
            )
        }
    }

    impl Component for Probe {
        fn init(&mut self, _owner: &mut GameObject, _ctx: &mut Context) {
            self.inits.set(self.inits.get() + 1);
        }

        fn update(&mut self, _dt: f32, _owner: &mut GameObject, _ctx: &mut Context) {
            self.updates.set(self.updates.get() + 1);
        }

        fn clean(&mut self, _owner: &mut GameObject) {
            self.cleans.set(self.cleans.get() + 1);
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    /// Marks its owner for removal on the first update.
    struct SelfDestruct;

    impl Component for SelfDestruct {
        fn update(&mut self, _dt: f32, owner: &mut GameObject, _ctx: &mut Context) {
            owner.set_need_remove(true);
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    //--- Identity Tests ---------------------------------------------------

    #[test]
    fn ids_are_unique() {
        let a = GameObject::new("a");
        let b = GameObject::new("b");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn name_and_tag() {
        let mut object = GameObject::new("hero").with_tag("player");
        assert_eq!(object.name(), "hero");
        assert_eq!(object.tag(), "player");
        object.set_name("hero2");
        object.set_tag("npc");
        assert_eq!(object.name(), "hero2");
        assert_eq!(object.tag(), "npc");
    }

    //--- Component Tests --------------------------------------------------

    #[test]
    fn add_component_inits_once_and_is_idempotent() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");

        let (probe, inits, _, _) = Probe::new();
        object.add_component(probe, &mut ctx);
        assert_eq!(inits.get(), 1);
        assert!(object.has_component::<Probe>());
        assert_eq!(object.component_count(), 1);

        // Adding a second probe keeps the first and never inits the new one.
        let (probe2, inits2, _, _) = Probe::new();
        object.add_component(probe2, &mut ctx);
        assert_eq!(object.component_count(), 1);
        assert_eq!(inits.get(), 1);
        assert_eq!(inits2.get(), 0);
    }

    #[test]
    fn duplicate_add_returns_the_existing_instance() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");

        object.add_component(TransformComponent::new(Vec2::new(1.0, 2.0)), &mut ctx);
        // The duplicate's data must not replace the original's.
        let existing = object.add_component(TransformComponent::new(Vec2::new(9.0, 9.0)), &mut ctx);
        assert_eq!(existing.position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn component_lookup_and_mutation() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        object.add_component(TransformComponent::default(), &mut ctx);

        object
            .component_mut::<TransformComponent>()
            .expect("transform attached")
            .translate(Vec2::new(5.0, 0.0));

        let transform = object.component::<TransformComponent>().expect("transform");
        assert_eq!(transform.position, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn remove_component_cleans_and_forgets() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        let (probe, _, _, cleans) = Probe::new();
        object.add_component(probe, &mut ctx);

        object.remove_component::<Probe>();
        assert_eq!(cleans.get(), 1);
        assert!(!object.has_component::<Probe>());

        // Removing again is a no-op.
        object.remove_component::<Probe>();
        assert_eq!(cleans.get(), 1);
    }

    #[test]
    fn readding_after_removal_inits_fresh_instance() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");

        let (probe, inits, _, _) = Probe::new();
        object.add_component(probe, &mut ctx);
        object.remove_component::<Probe>();
        assert!(!object.has_component::<Probe>());

        let (probe2, inits2, _, _) = Probe::new();
        object.add_component(probe2, &mut ctx);
        assert!(object.has_component::<Probe>());
        assert_eq!(inits.get(), 1);
        assert_eq!(inits2.get(), 1);
    }

    //--- Delegation Tests -------------------------------------------------

    #[test]
    fn update_reaches_every_component() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        let (probe, _, updates, _) = Probe::new();
        object.add_component(probe, &mut ctx);
        object.add_component(TransformComponent::default(), &mut ctx);

        object.update(0.016, &mut ctx);
        object.update(0.016, &mut ctx);
        assert_eq!(updates.get(), 2);
    }

    #[test]
    fn component_can_reach_siblings_during_update() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        object.add_component(TransformComponent::default(), &mut ctx);
        object.add_component(SelfDestruct, &mut ctx);

        assert!(!object.need_remove());
        object.update(0.016, &mut ctx);
        assert!(object.need_remove());
    }

    #[test]
    fn clean_destroys_all_components() {
        let mut ctx = ctx();
        let mut object = GameObject::new("obj");
        let (probe, _, _, cleans) = Probe::new();
        object.add_component(probe, &mut ctx);
        object.add_component(TransformComponent::default(), &mut ctx);

        object.clean();
        assert_eq!(cleans.get(), 1);
        assert_eq!(object.component_count(), 0);

        // Clean is idempotent.
        object.clean();
        assert_eq!(cleans.get(), 1);
    }
}
