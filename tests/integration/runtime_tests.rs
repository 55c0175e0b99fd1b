use super::{build_integration_test, click, TestEvent, TestModel};
use oxide_apps::Effect;

#[test]
fn given_no_initial_event_should_render_initial_props_once() {
    let test = build_integration_test().build();

    assert_eq!(test.renders.count(), 1);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].text_content(), "0");
    });
}

#[test]
fn given_an_initial_increment_event_should_render_twice() {
    let mut test = build_integration_test()
        .given_an_initial_effect(Effect::just(TestEvent::Increment))
        .build();

    // Effects only queue events; nothing runs until the driver drains.
    assert_eq!(test.renders.count(), 1);

    assert_eq!(test.driver.process_events(), 1);

    assert_eq!(test.renders.count(), 2);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].text_content(), "0");
        assert_eq!(renders[1].text_content(), "1");
    });
}

#[test]
fn given_a_batch_of_effects_as_initial_effect_should_execute_all_effects_in_order() {
    let mut test = build_integration_test()
        .given_an_initial_effect(Effect::batch(vec![
            Effect::just(TestEvent::Increment),
            Effect::just(TestEvent::Double),
            Effect::just(TestEvent::Increment),
        ]))
        .build();

    test.driver.process_events();

    // (0 + 1) * 2 + 1
    assert_eq!(test.renders.count(), 4);
    test.renders.with_renders(|renders| {
        let counts: Vec<_> = renders.iter().map(|r| r.text_content()).collect();
        assert_eq!(counts, vec!["0", "1", "2", "3"]);
    });
}

#[test]
fn given_no_initial_event_when_listener_invoked_should_render_again() {
    let mut test = build_integration_test().build();

    click(&test.renders, "increment");
    assert_eq!(test.renders.count(), 1);

    test.driver.process_events();

    assert_eq!(test.renders.count(), 2);
    assert_eq!(test.driver.model().count, 1);
}

#[test]
fn given_an_on_increment_side_effect_when_increment_triggered_should_process_follow_up_in_same_drain() {
    let mut test = build_integration_test()
        .given_on_increment_effects(vec![Effect::just(TestEvent::Double)])
        .build();

    click(&test.renders, "increment");
    assert_eq!(test.driver.process_events(), 2);

    // 1. initial (0), 2. after increment (1), 3. after follow-up double (2)
    assert_eq!(test.renders.count(), 3);
    assert_eq!(test.driver.model().count, 2);
}

#[test]
fn given_effect_from_fn_should_emit_every_event_it_produces() {
    let mut test = build_integration_test()
        .given_an_initial_effect(Effect::from_fn(|emitter| {
            emitter.emit(TestEvent::Increment);
            emitter.emit(TestEvent::Increment);
        }))
        .build();

    assert_eq!(test.driver.process_events(), 2);
    assert_eq!(test.driver.model().count, 2);
}

#[test]
fn given_a_slot_set_to_its_current_value_should_still_render_once() {
    let mut test = build_integration_test().build();

    test.driver.set(&TestModel::COUNT, 0);

    assert_eq!(test.renders.count(), 2);
    assert_eq!(*test.driver.get(&TestModel::COUNT), 0);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].text_content(), renders[1].text_content());
    });
}

#[test]
fn given_a_slot_set_to_a_new_value_should_render_it() {
    let mut test = build_integration_test().build();

    test.driver.set(&TestModel::COUNT, 41);
    test.driver.dispatch(TestEvent::Increment);

    assert_eq!(test.renders.count(), 3);
    assert_eq!(super::latest_text(&test.renders, "increment"), "42");
    assert_eq!(test.driver.store().revision(), 3);
}

#[test]
fn given_emitter_clone_when_event_emitted_outside_view_should_queue_until_drained() {
    let mut test = build_integration_test().build();
    let emitter = test.driver.emitter();

    emitter.emit(TestEvent::Increment);
    emitter.emit(TestEvent::Increment);

    assert_eq!(test.driver.model().count, 0);
    assert_eq!(test.driver.process_events(), 2);
    assert_eq!(test.driver.model().count, 2);
}
