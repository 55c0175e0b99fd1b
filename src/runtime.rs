//! The MVU runtime that orchestrates event processing.

use core::fmt::Debug;
use core::marker::PhantomData;

use flume::Receiver;

use crate::{Emitter, MvuLogic, Renderer, Slot, Store};

/// The MVU runtime for one application instance.
///
/// Each processed event runs the same pipeline, synchronously and in order:
/// 1. [`MvuLogic::update`] computes the next model from the current one
/// 2. the model is committed to the [`Store`], scheduling a render
/// 3. [`MvuLogic::view`] derives a fresh tree which goes to the [`Renderer`]
/// 4. the returned [`Effect`](crate::Effect) queues any follow-up events
///
/// Events are queued through the runtime's [`Emitter`] and only processed
/// when the [`MvuDriver`] returned by [`run`](Self::run) is asked to, so one
/// event is always fully handled before the next one starts.
///
/// # Type Parameters
///
/// * `Event` - The event type for your application
/// * `Model` - The model/state type for your application
/// * `Props` - The tree type produced by the view function
/// * `Logic` - The logic implementation type (implements [`MvuLogic`])
/// * `Render` - The renderer implementation type (implements [`Renderer`])
pub struct MvuRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Event>,
    store: Store<Model>,
    emitter: Emitter<Event>,
    _props: PhantomData<Props>,
}

impl<Event, Model, Props, Logic, Render> MvuRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + Debug + 'static,
    Model: Clone,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Create a new runtime.
    ///
    /// Nothing is rendered until [`run`](Self::run) is called.
    ///
    /// # Arguments
    ///
    /// * `init_model` - The initial state
    /// * `logic` - Application logic implementing [`MvuLogic`]
    /// * `renderer` - Render target receiving every derived tree
    pub fn new(init_model: Model, logic: Logic, renderer: Render) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        MvuRuntime {
            logic,
            renderer,
            event_receiver,
            store: Store::new(init_model),
            emitter: Emitter::new(event_sender),
            _props: PhantomData,
        }
    }

    /// Seed a slot before the runtime starts.
    pub fn with_slot<T>(mut self, slot: &Slot<Model, T>, value: T) -> Self {
        self.store.set(slot, value);
        self
    }

    /// Initialize the model, render it, and hand back a driver.
    ///
    /// - Runs [`MvuLogic::init`] on the seeded model.
    /// - Renders the initial tree exactly once.
    /// - Executes the initial effect, which only queues events.
    pub fn run(mut self) -> MvuDriver<Event, Model, Props, Logic, Render> {
        let span = tracing::debug_span!("run", app = self.logic.name());
        let _enter = span.enter();

        let (init_model, init_effect) = self.logic.init(self.store.model().clone());
        self.store.commit(init_model);
        self.flush();

        tracing::debug!(queued = init_effect.len(), "runtime started");
        init_effect.execute(&self.emitter);

        MvuDriver { runtime: self }
    }

    fn step(&mut self, event: Event) {
        let span = tracing::debug_span!(
            "step",
            app = self.logic.name(),
            revision = self.store.revision()
        );
        let _enter = span.enter();
        tracing::debug!(?event, "handling event");

        let (new_model, effect) = self.logic.update(event, self.store.model());
        self.store.commit(new_model);
        self.flush();

        if !effect.is_none() {
            tracing::trace!(queued = effect.len(), "executing effect");
        }
        effect.execute(&self.emitter);
    }

    fn flush(&mut self) {
        if self.store.take_render_request() {
            let props = self.logic.view(self.store.model(), &self.emitter);
            self.renderer.render(props);
            tracing::trace!(revision = self.store.revision(), "rendered");
        }
    }
}

/// Handle for driving a started runtime.
///
/// Returned by [`MvuRuntime::run`]. Events emitted by listeners sit in the
/// queue until [`process_events`](Self::process_events) drains it.
pub struct MvuDriver<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render>,
}

impl<Event, Model, Props, Logic, Render> MvuDriver<Event, Model, Props, Logic, Render>
where
    Event: Send + Debug + 'static,
    Model: Clone,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Process queued events until the queue is empty.
    ///
    /// Events queued by effects while draining are processed in the same call.
    /// Returns the number of events handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.runtime.event_receiver.try_recv() {
            self.runtime.step(event);
            handled += 1;
        }
        handled
    }

    /// Queue an event and process everything up to and including it.
    pub fn dispatch(&mut self, event: Event) -> usize {
        self.runtime.emitter.emit(event);
        self.process_events()
    }

    /// Replace a slot's value directly and re-render.
    ///
    /// A render happens even when `value` equals the current value.
    pub fn set<T>(&mut self, slot: &Slot<Model, T>, value: T) {
        self.runtime.store.set(slot, value);
        self.runtime.flush();
    }

    pub fn get<T>(&self, slot: &Slot<Model, T>) -> &T {
        self.runtime.store.get(slot)
    }

    pub fn emitter(&self) -> Emitter<Event> {
        self.runtime.emitter.clone()
    }

    pub fn model(&self) -> &Model {
        self.runtime.store.model()
    }

    pub fn store(&self) -> &Store<Model> {
        &self.runtime.store
    }

    pub fn renderer(&self) -> &Render {
        &self.runtime.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Render {
        &mut self.runtime.renderer
    }
}
