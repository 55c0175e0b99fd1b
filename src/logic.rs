//! Application logic trait tying action handlers to a view builder.

use crate::{Effect, Emitter};

/// Application logic contract driven by [`MvuRuntime`](crate::MvuRuntime).
///
/// Implementations route events to pure action handlers in
/// [`update`](Self::update) and derive a renderable tree from the model in
/// [`view`](Self::view). Neither method may touch shared state: the runtime
/// owns the [`Store`](crate::Store) and passes the model in by reference.
///
/// # Example
///
/// ```rust
/// use oxide_apps::{h, Effect, Emitter, EventKind, MvuLogic, Node};
///
/// #[derive(Clone, Debug)]
/// enum Event { Increment }
///
/// #[derive(Clone)]
/// struct Model { count: i64 }
///
/// struct Counter;
///
/// impl MvuLogic<Event, Model, Node> for Counter {
///     fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
///         match event {
///             Event::Increment => (Model { count: model.count + 1 }, Effect::none()),
///         }
///     }
///
///     fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Node {
///         h("button")
///             .on(EventKind::Click, emitter.listener(Event::Increment))
///             .child(model.count.to_string())
///             .into()
///     }
/// }
/// ```
pub trait MvuLogic<Event: Send + 'static, Model, Props> {
    /// Short name used in log output.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Prepare the model the runtime starts from.
    ///
    /// Called once by [`MvuRuntime::run`](crate::MvuRuntime::run) before the
    /// first render. The default keeps the model untouched and queues nothing.
    fn init(&self, model: Model) -> (Model, Effect<Event>) {
        (model, Effect::none())
    }

    /// Reduce an event to the next model and any follow-up effect.
    ///
    /// Guarded no-ops return a model equal to the current one.
    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>);

    /// Derive the tree to render from the current model.
    ///
    /// Must be deterministic and free of side effects. The [`Emitter`] is only
    /// captured by listeners; it must not be used to emit during the call.
    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props;
}
