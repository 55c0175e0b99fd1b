//! Declarative effects describing follow-up events.

use crate::Emitter;

enum Command<Event: Send> {
    Emit(Event),
    Run(Box<dyn FnOnce(&Emitter<Event>) + Send + 'static>),
}

/// Declarative description of follow-up work produced by an update.
///
/// Effects are returned from [`MvuLogic::init`](crate::MvuLogic::init) and
/// [`MvuLogic::update`](crate::MvuLogic::update) alongside the new model.
/// The runtime executes them after the new model has been committed and
/// rendered, so every follow-up event is queued behind the current one.
///
/// # Example
///
/// ```rust
/// use oxide_apps::Effect;
///
/// enum Event {
///     Submit,
///     Cleared,
/// }
///
/// let effect = Effect::just(Event::Submit);
///
/// let effect = Effect::batch(vec![
///     Effect::just(Event::Submit),
///     Effect::just(Event::Cleared),
/// ]);
///
/// let effect: Effect<Event> = Effect::none();
/// assert!(effect.is_none());
/// ```
pub struct Effect<Event: Send> {
    commands: Vec<Command<Event>>,
}

impl<Event: Send + 'static> Effect<Event> {
    /// An effect that does nothing.
    pub fn none() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Queue a single follow-up event.
    pub fn just(event: Event) -> Self {
        Self {
            commands: vec![Command::Emit(event)],
        }
    }

    /// Run arbitrary work with access to the emitter.
    ///
    /// ```rust
    /// use oxide_apps::Effect;
    ///
    /// enum Event { Tick(u32) }
    ///
    /// let effect = Effect::from_fn(|emitter| {
    ///     for n in 0..3 {
    ///         emitter.emit(Event::Tick(n));
    ///     }
    /// });
    /// # let _ = effect;
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce(&Emitter<Event>) + Send + 'static,
    {
        Self {
            commands: vec![Command::Run(Box::new(f))],
        }
    }

    /// Combine multiple effects, preserving their order.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self {
            commands: effects.into_iter().flat_map(|e| e.commands).collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_none()
    }

    pub fn execute(self, emitter: &Emitter<Event>) {
        for command in self.commands {
            match command {
                Command::Emit(event) => emitter.emit(event),
                Command::Run(f) => f(emitter),
            }
        }
    }
}

impl<Event: Send + 'static> Default for Effect<Event> {
    fn default() -> Self {
        Self::none()
    }
}
