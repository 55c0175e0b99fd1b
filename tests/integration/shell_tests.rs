use std::io::Cursor;

use oxide_apps::apps::counter::{CounterLogic, CounterModel};
use oxide_apps::apps::todo::{TodoItem, TodoLogic, TodoModel};
use oxide_apps::shell::{self, HELP};
use oxide_apps::{MarkupRenderer, MvuRuntime};

fn session_messages(messages: Vec<u8>) -> String {
    String::from_utf8(messages).expect("messages are utf-8")
}

#[test]
fn given_click_commands_should_drive_the_counter() {
    let mut driver = MvuRuntime::new(
        CounterModel::default(),
        CounterLogic,
        MarkupRenderer::new(Vec::new()),
    )
    .run();
    let mut messages = Vec::new();

    let processed = shell::run_session(
        &mut driver,
        Cursor::new("click increment\n\nclick increment\nclick decrement\n"),
        &mut messages,
    )
    .unwrap();

    assert_eq!(processed, 3);
    assert_eq!(driver.model().count, 1);
    assert_eq!(driver.renderer().count(), 4);
    assert!(messages.is_empty());
    let tree = driver.renderer().latest().unwrap();
    assert_eq!(tree.find_by_id("count").unwrap().text_content(), "1");
}

#[test]
fn given_bad_commands_should_report_and_keep_going() {
    let mut driver = MvuRuntime::new(
        CounterModel::default(),
        CounterLogic,
        MarkupRenderer::new(Vec::new()),
    )
    .run();
    let mut messages = Vec::new();

    let processed = shell::run_session(
        &mut driver,
        Cursor::new("jump\nclick nope\nclick count\nclick\nclick reset\n"),
        &mut messages,
    )
    .unwrap();

    assert_eq!(processed, 1);
    let messages = session_messages(messages);
    let lines: Vec<_> = messages.lines().collect();
    assert_eq!(
        lines,
        vec![
            "error: unknown command 'jump' (try 'help')",
            "error: no element with id 'nope'",
            "error: element 'count' does not listen for click",
            "error: 'click' needs an element id",
        ]
    );
}

#[test]
fn given_quit_should_stop_reading_input() {
    let mut driver = MvuRuntime::new(
        CounterModel::default(),
        CounterLogic,
        MarkupRenderer::new(Vec::new()),
    )
    .run();
    let mut messages = Vec::new();

    let processed = shell::run_session(
        &mut driver,
        Cursor::new("click increment\nquit\nclick increment\n"),
        &mut messages,
    )
    .unwrap();

    assert_eq!(processed, 1);
    assert_eq!(driver.model().count, 1);
}

#[test]
fn given_help_and_show_should_print_help_and_reprint_view() {
    let mut driver = MvuRuntime::new(
        CounterModel::default(),
        CounterLogic,
        MarkupRenderer::new(Vec::new()),
    )
    .run();
    let mut messages = Vec::new();

    shell::run_session(&mut driver, Cursor::new("help\nshow\n"), &mut messages).unwrap();

    assert_eq!(session_messages(messages), format!("{HELP}\n"));
    // Reprinting writes the tree again without rendering a new one.
    assert_eq!(driver.renderer().count(), 1);
}

#[test]
fn given_typed_text_and_enter_should_add_a_todo() {
    let mut driver = MvuRuntime::new(
        TodoModel::with_todos(vec![TodoItem::new(1, "Learn React")]),
        TodoLogic::new(|| 1_000u64),
        MarkupRenderer::new(Vec::new()),
    )
    .run();
    let mut messages = Vec::new();

    let processed = shell::run_session(
        &mut driver,
        Cursor::new("input new-todo Buy milk\nkey new-todo Enter\n"),
        &mut messages,
    )
    .unwrap();

    // change, key press, and the add it triggers
    assert_eq!(processed, 3);
    assert_eq!(
        driver.model().todos.last(),
        Some(&TodoItem::new(1_000, "Buy milk"))
    );
    assert!(messages.is_empty());
}

#[test]
fn markup_shows_listeners_and_current_values() {
    let driver = MvuRuntime::new(
        CounterModel::default(),
        CounterLogic,
        MarkupRenderer::new(Vec::new()),
    )
    .run();

    let markup = driver.renderer().latest().unwrap().to_markup();

    assert!(markup.contains("<div id=\"count\" class=\"count zero\">0</div>"));
    assert!(markup.contains("<button id=\"increment\" on:click>+ Increment</button>"));
}
