//! Counter: increment, decrement and reset.

use crate::view::{h, EventKind, Node};
use crate::{Effect, Emitter, MvuLogic, Slot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterEvent {
    Increment,
    Decrement,
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterModel {
    pub count: i64,
}

impl CounterModel {
    pub const COUNT: Slot<CounterModel, i64> =
        Slot::new("count", |m| &m.count, |m| &mut m.count);
}

/// Saturates at `i64::MAX`.
pub fn increment(model: &CounterModel) -> CounterModel {
    CounterModel {
        count: model.count.saturating_add(1),
    }
}

/// No floor above `i64::MIN`: the count happily goes negative.
pub fn decrement(model: &CounterModel) -> CounterModel {
    CounterModel {
        count: model.count.saturating_sub(1),
    }
}

pub fn reset(_model: &CounterModel) -> CounterModel {
    CounterModel { count: 0 }
}

/// `zero`, `positive` or `negative`, used to colour the count.
pub fn sign_class(count: i64) -> &'static str {
    match count {
        0 => "zero",
        n if n > 0 => "positive",
        _ => "negative",
    }
}

pub fn view(model: &CounterModel, emitter: &Emitter<CounterEvent>) -> Node {
    h("div")
        .class("counter")
        .child(h("h1").child("Counter App"))
        .child(
            h("div")
                .id("count")
                .class(format!("count {}", sign_class(model.count)))
                .child(model.count.to_string()),
        )
        .child(
            h("div")
                .class("controls")
                .child(button("decrement", "− Decrement", emitter, CounterEvent::Decrement))
                .child(button("reset", "↻ Reset", emitter, CounterEvent::Reset))
                .child(button("increment", "+ Increment", emitter, CounterEvent::Increment)),
        )
        .into()
}

fn button(id: &str, label: &str, emitter: &Emitter<CounterEvent>, event: CounterEvent) -> Node {
    h("button")
        .id(id)
        .on(EventKind::Click, emitter.listener(event))
        .child(label)
        .into()
}

pub struct CounterLogic;

impl MvuLogic<CounterEvent, CounterModel, Node> for CounterLogic {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn update(
        &self,
        event: CounterEvent,
        model: &CounterModel,
    ) -> (CounterModel, Effect<CounterEvent>) {
        let next = match event {
            CounterEvent::Increment => increment(model),
            CounterEvent::Decrement => decrement(model),
            CounterEvent::Reset => reset(model),
        };
        (next, Effect::none())
    }

    fn view(&self, model: &CounterModel, emitter: &Emitter<CounterEvent>) -> Node {
        view(model, emitter)
    }
}
