//! Small Model-View-Update examples: a counter, a todo list and tic-tac-toe.
//!
//! Every example runs the same pipeline:
//!
//! ```text
//! event ──→ action handler ──→ Store ──→ view builder ──→ Renderer
//!   ↑                                                        │
//!   └─────────────── listeners in the rendered tree ─────────┘
//! ```
//!
//! - [`Store`] holds the model of one running application and exposes its
//!   fields as typed [`Slot`]s. Every write schedules a render.
//! - Action handlers are plain functions `(&Model, payload) -> Model`, routed
//!   by an [`MvuLogic`] implementation.
//! - The view builder derives a plain-data [`Node`] tree. Listeners capture
//!   an [`Emitter`] and queue events when fired.
//! - A [`Renderer`] receives every tree. Mounting and reconciling is its
//!   business, not the core's.
//!
//! ## Example
//!
//! ```rust
//! use oxide_apps::apps::counter::{CounterEvent, CounterLogic, CounterModel};
//! use oxide_apps::{MvuRuntime, Node, Renderer};
//!
//! struct Discard;
//! impl Renderer<Node> for Discard {
//!     fn render(&mut self, _tree: Node) {}
//! }
//!
//! let mut driver = MvuRuntime::new(CounterModel::default(), CounterLogic, Discard).run();
//! driver.dispatch(CounterEvent::Increment);
//! driver.dispatch(CounterEvent::Increment);
//! driver.dispatch(CounterEvent::Decrement);
//!
//! assert_eq!(*driver.get(&CounterModel::COUNT), 1);
//! ```

// Module declarations
pub mod apps;
pub mod config;
mod effect;
mod emitter;
mod logic;
pub mod logging;
mod renderer;
mod runtime;
pub mod shell;
mod store;
mod view;

// Public re-exports
pub use effect::Effect;
pub use emitter::Emitter;
pub use logic::MvuLogic;
pub use renderer::{MarkupRenderer, Renderer};
pub use runtime::{MvuDriver, MvuRuntime};
pub use store::{Slot, Store};
pub use view::{h, text, DomEvent, Element, ElementRef, EventKind, Key, Listener, Node, PropValue};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
