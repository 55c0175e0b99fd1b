//! Event emitter for wiring view callbacks back into the runtime.

use flume::Sender;

use crate::view::{DomEvent, Listener};

/// Event emitter handed to the view builder.
///
/// Clone this handle into the listeners of a view tree so that user
/// interaction can queue events. `Emitter` wraps a lock-free channel sender,
/// so clones are cheap and can be moved into `Send` callbacks.
///
/// Emitting never runs the update synchronously; events are queued and
/// processed one at a time by the runtime that owns the receiving end.
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send + 'static> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Queue an event for processing.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            tracing::debug!("runtime is gone, event dropped");
        }
    }

    /// A listener that emits a copy of `event` every time it fires.
    ///
    /// ```rust
    /// use oxide_apps::{h, Emitter, EventKind, Node};
    ///
    /// #[derive(Clone)]
    /// enum Event { Increment }
    ///
    /// fn view(emitter: &Emitter<Event>) -> Node {
    ///     h("button")
    ///         .id("increment")
    ///         .on(EventKind::Click, emitter.listener(Event::Increment))
    ///         .child("+")
    ///         .into()
    /// }
    /// # let _ = view;
    /// ```
    pub fn listener(&self, event: Event) -> Listener
    where
        Event: Clone,
    {
        let emitter = self.clone();
        Box::new(move |_: &DomEvent| emitter.emit(event.clone()))
    }

    /// A listener that maps the DOM event to an application event.
    ///
    /// Returning `None` from `map` ignores the interaction.
    pub fn listener_with<F>(&self, map: F) -> Listener
    where
        F: Fn(&DomEvent) -> Option<Event> + Send + 'static,
    {
        let emitter = self.clone();
        Box::new(move |dom_event: &DomEvent| {
            if let Some(event) = map(dom_event) {
                emitter.emit(event);
            }
        })
    }
}
