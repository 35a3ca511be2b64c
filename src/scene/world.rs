//=========================================================================
// World — Scene Object Store
//=========================================================================
//
// The ordered collection of game objects a scene owns, plus the
// deferred-mutation machinery that makes structural changes safe while
// the collection is being traversed.
//
// Two mutation paths exist for both directions:
// - add_object / remove_object mutate immediately; only safe from
//   outside a traversal.
// - add_object_deferred buffers the object and splices it in after the
//   current update pass; remove_object_deferred just marks the target,
//   and the passes erase marked objects at the next safe point.
//
// Pass guarantees:
// - update_pass: objects marked at visit time are cleaned and erased
//   instead of updated; a final sweep then catches objects whose mark
//   was set later in the same pass (including objects marking
//   themselves), so by the time update_pass returns no marked object
//   remains. Buffered additions are spliced in last — they are never
//   visible to the pass that buffered them.
// - input_pass: purges marked objects opportunistically at visit time
//   only; buffered additions stay buffered.
// - render_pass: visits every live object in order, marked or not.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::Context;
use crate::object::{GameObject, ObjectId};

//=== World ===============================================================

/// Ordered, exclusively-owned collection of game objects.
///
/// Insertion order is render order: objects added later draw on top.
pub struct World {
    objects: Vec<GameObject>,
    pending: Vec<GameObject>,
}

impl World {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            pending: Vec::new(),
        }
    }

    //--- Object Management ------------------------------------------------

    /// Appends an object to the live sequence immediately.
    ///
    /// Must not be called from inside a traversal; game code running
    /// during a pass uses [`World::add_object_deferred`].
    pub fn add_object(&mut self, object: GameObject) -> ObjectId {
        let id = object.id();
        trace!("adding game object '{}' {}", object.name(), id);
        self.objects.push(object);
        id
    }

    /// Buffers an object for insertion after the current update pass.
    pub fn add_object_deferred(&mut self, object: GameObject) -> ObjectId {
        let id = object.id();
        trace!("buffering game object '{}' {}", object.name(), id);
        self.pending.push(object);
        id
    }

    /// Cleans and erases an object immediately.
    ///
    /// Unknown ids are logged and ignored. Must not be called from
    /// inside a traversal; use [`World::remove_object_deferred`] there.
    pub fn remove_object(&mut self, id: ObjectId) {
        match self.objects.iter().position(|o| o.id() == id) {
            Some(index) => {
                let mut object = self.objects.remove(index);
                object.clean();
                trace!("removed game object {}", id);
            }
            None => warn!("game object {} not found, cannot remove", id),
        }
    }

    /// Marks an object for removal at the next traversal boundary.
    ///
    /// Unknown ids are logged and ignored.
    pub fn remove_object_deferred(&mut self, id: ObjectId) {
        match self.objects.iter_mut().find(|o| o.id() == id) {
            Some(object) => object.set_need_remove(true),
            None => warn!("game object {} not found, cannot mark for removal", id),
        }
    }

    //--- Lookup -----------------------------------------------------------

    /// First live object with the given name.
    pub fn find_object(&self, name: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.name() == name)
    }

    /// First live object with the given name, mutably.
    pub fn find_object_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.name() == name)
    }

    /// Live object by id.
    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Live object by id, mutably.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// The live sequence, in render order.
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// Number of live objects (buffered additions excluded).
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of buffered additions awaiting the next splice.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    //--- Traversal Passes -------------------------------------------------

    /// Runs the per-frame update over the live sequence.
    pub fn update_pass(&mut self, dt: f32, ctx: &mut Context) {
        let mut index = 0;
        while index < self.objects.len() {
            if self.objects[index].need_remove() {
                let mut object = self.objects.remove(index);
                object.clean();
            } else {
                self.objects[index].update(dt, ctx);
                index += 1;
            }
        }
        // Objects marked during the pass itself (self-marks, or marks
        // aimed behind the cursor) must not survive this call.
        self.purge_marked();
        self.objects.append(&mut self.pending);
    }

    /// Runs the per-frame input pass over the live sequence.
    pub fn input_pass(&mut self, ctx: &mut Context) {
        let mut index = 0;
        while index < self.objects.len() {
            if self.objects[index].need_remove() {
                let mut object = self.objects.remove(index);
                object.clean();
            } else {
                self.objects[index].handle_input(ctx);
                index += 1;
            }
        }
    }

    /// Runs the per-frame render pass over the live sequence.
    pub fn render_pass(&mut self, ctx: &mut Context) {
        for object in &mut self.objects {
            object.render(ctx);
        }
    }

    /// Cleans and drops every object, live and buffered.
    pub fn clear(&mut self) {
        for mut object in self.objects.drain(..) {
            object.clean();
        }
        for mut object in self.pending.drain(..) {
            object.clean();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn purge_marked(&mut self) {
        let mut index = 0;
        while index < self.objects.len() {
            if self.objects[index].need_remove() {
                let mut object = self.objects.remove(index);
                object.clean();
            } else {
                index += 1;
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
