use oxide_apps::{h, Effect, Emitter, EventKind, MvuLogic, Node, Slot};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TestEvent {
    Increment,
    Double,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestModel {
    pub(crate) count: i32,
}

impl TestModel {
    pub(crate) const COUNT: Slot<TestModel, i32> =
        Slot::new("count", |m| &m.count, |m| &mut m.count);
}

pub(crate) struct TestLogic {
    pub(crate) initial_effects: Box<dyn InitialEffectsDependency + Send>,
    pub(crate) effects: Box<dyn EffectsDependency + Send>,
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait InitialEffectsDependency {
    fn on_init(&self) -> Effect<TestEvent>;
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait EffectsDependency {
    fn on_increment_side_effect(&self) -> Effect<TestEvent>;
}

impl MvuLogic<TestEvent, TestModel, Node> for TestLogic {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn init(&self, model: TestModel) -> (TestModel, Effect<TestEvent>) {
        (model, self.initial_effects.on_init())
    }

    fn update(&self, event: TestEvent, model: &TestModel) -> (TestModel, Effect<TestEvent>) {
        match event {
            TestEvent::Increment => (
                TestModel {
                    count: model.count + 1,
                },
                self.effects.on_increment_side_effect(),
            ),
            TestEvent::Double => (
                TestModel {
                    count: model.count * 2,
                },
                Effect::none(),
            ),
        }
    }

    fn view(&self, model: &TestModel, emitter: &Emitter<TestEvent>) -> Node {
        h("button")
            .id("increment")
            .on(EventKind::Click, emitter.listener(TestEvent::Increment))
            .child(model.count.to_string())
            .into()
    }
}
