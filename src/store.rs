//! Explicit per-application state store with typed slots.

use core::fmt;

/// A named, typed accessor for one piece of application state.
///
/// Slots are declared once per model as associated constants and give the
/// [`Store`] a way to read and replace a single field without knowing the
/// rest of the model. The slot's value type is fixed at compile time, so a
/// slot can never change type over its lifetime.
///
/// # Example
///
/// ```rust
/// use oxide_apps::{Slot, Store};
///
/// #[derive(Clone)]
/// struct Model { count: i64 }
///
/// impl Model {
///     const COUNT: Slot<Model, i64> = Slot::new("count", |m| &m.count, |m| &mut m.count);
/// }
///
/// let mut store = Store::new(Model { count: 0 });
/// store.set(&Model::COUNT, 5);
/// assert_eq!(*store.get(&Model::COUNT), 5);
/// ```
pub struct Slot<Model, T> {
    name: &'static str,
    read: fn(&Model) -> &T,
    write: fn(&mut Model) -> &mut T,
}

impl<Model, T> Slot<Model, T> {
    pub const fn new(
        name: &'static str,
        read: fn(&Model) -> &T,
        write: fn(&mut Model) -> &mut T,
    ) -> Self {
        Self { name, read, write }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Borrow the slot's value out of a model.
    pub fn get<'m>(&self, model: &'m Model) -> &'m T {
        (self.read)(model)
    }

    /// Replace the slot's value in a model, returning the previous value.
    pub fn replace(&self, model: &mut Model, value: T) -> T {
        core::mem::replace((self.write)(model), value)
    }
}

impl<Model, T> Clone for Slot<Model, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Model, T> Copy for Slot<Model, T> {}

impl<Model, T> fmt::Debug for Slot<Model, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.name).finish()
    }
}

/// State store owned by one running application instance.
///
/// Every write, whether through a [`Slot`] or a whole-model
/// [`commit`](Self::commit), schedules a render pass. Writes are not compared
/// against the previous value: setting a slot to the value it already holds
/// still schedules a render that simply produces the same tree.
///
/// The store performs no validation. Action handlers are responsible for the
/// legality of the values they produce.
pub struct Store<Model> {
    model: Model,
    revision: u64,
    render_scheduled: bool,
}

impl<Model> Store<Model> {
    /// Create a store holding `model`.
    ///
    /// A render is scheduled immediately so the first drain mounts the view.
    pub fn new(model: Model) -> Self {
        Self {
            model,
            revision: 0,
            render_scheduled: true,
        }
    }

    /// Current value of a slot.
    pub fn get<T>(&self, slot: &Slot<Model, T>) -> &T {
        slot.get(&self.model)
    }

    /// Replace the value of a slot and schedule a render.
    pub fn set<T>(&mut self, slot: &Slot<Model, T>, value: T) {
        slot.replace(&mut self.model, value);
        self.touch();
        tracing::trace!(slot = slot.name(), revision = self.revision, "slot set");
    }

    /// Replace the whole model and schedule a render.
    pub fn commit(&mut self, model: Model) {
        self.model = model;
        self.touch();
        tracing::trace!(revision = self.revision, "model committed");
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Number of writes applied since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn render_scheduled(&self) -> bool {
        self.render_scheduled
    }

    /// Consume the pending render request, if any.
    ///
    /// Returns `true` exactly once per batch of writes.
    pub fn take_render_request(&mut self) -> bool {
        core::mem::replace(&mut self.render_scheduled, false)
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.render_scheduled = true;
    }
}

impl<Model: fmt::Debug> fmt::Debug for Store<Model> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("model", &self.model)
            .field("revision", &self.revision)
            .field("render_scheduled", &self.render_scheduled)
            .finish()
    }
}
