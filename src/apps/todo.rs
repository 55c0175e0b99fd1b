//! Todo list with create, toggle, inline edit and delete.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::view::{h, DomEvent, EventKind, Node};
use crate::{Effect, Emitter, MvuLogic, Slot};

pub type TodoId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoModel {
    pub todos: Vec<TodoItem>,
    pub input_value: String,
    pub editing_id: Option<TodoId>,
    pub editing_text: String,
}

impl TodoModel {
    pub const TODOS: Slot<TodoModel, Vec<TodoItem>> =
        Slot::new("todos", |m| &m.todos, |m| &mut m.todos);
    pub const INPUT_VALUE: Slot<TodoModel, String> =
        Slot::new("inputValue", |m| &m.input_value, |m| &mut m.input_value);
    pub const EDITING_ID: Slot<TodoModel, Option<TodoId>> =
        Slot::new("editingId", |m| &m.editing_id, |m| &mut m.editing_id);
    pub const EDITING_TEXT: Slot<TodoModel, String> =
        Slot::new("editingText", |m| &m.editing_text, |m| &mut m.editing_text);

    pub fn with_todos(todos: Vec<TodoItem>) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn find(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoEvent {
    InputChanged(String),
    /// Key pressed in the new-todo input.
    InputKey(String),
    Add,
    Toggle(TodoId),
    StartEdit(TodoId),
    EditChanged(String),
    /// Key pressed in the edit input of a todo.
    EditKey {
        id: TodoId,
        key: String,
    },
    SaveEdit(TodoId),
    CancelEdit,
    Delete(TodoId),
}

/// Source of creation timestamps for new todo ids.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now_millis(&self) -> u64 {
        self()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Pick an id for a todo created at `now`.
///
/// Ids come from the creation timestamp, bumped past the largest existing id
/// so two todos added within the same millisecond still get distinct ids.
pub fn next_id(model: &TodoModel, now: u64) -> TodoId {
    let floor = model.todos.iter().map(|t| t.id + 1).max().unwrap_or(0);
    now.max(floor)
}

pub fn set_input(model: &TodoModel, value: String) -> TodoModel {
    TodoModel {
        input_value: value,
        ..model.clone()
    }
}

/// Append the current input as a new todo and clear the input.
///
/// Blank input is ignored. The emptiness check trims, but the stored text is
/// the raw input, surrounding whitespace included.
pub fn add_todo(model: &TodoModel, id: TodoId) -> TodoModel {
    if model.input_value.trim().is_empty() {
        return model.clone();
    }

    let mut next = model.clone();
    let text = core::mem::take(&mut next.input_value);
    next.todos.push(TodoItem::new(id, text));
    next
}

pub fn toggle_todo(model: &TodoModel, id: TodoId) -> TodoModel {
    let mut next = model.clone();
    if let Some(todo) = next.todos.iter_mut().find(|t| t.id == id) {
        todo.completed = !todo.completed;
    }
    next
}

pub fn start_editing(model: &TodoModel, id: TodoId) -> TodoModel {
    match model.find(id) {
        Some(todo) => TodoModel {
            editing_id: Some(id),
            editing_text: todo.text.clone(),
            ..model.clone()
        },
        None => model.clone(),
    }
}

pub fn set_editing_text(model: &TodoModel, value: String) -> TodoModel {
    TodoModel {
        editing_text: value,
        ..model.clone()
    }
}

/// Write the edit buffer into the todo and leave edit mode.
///
/// A blank buffer keeps edit mode open and changes nothing.
pub fn save_edit(model: &TodoModel, id: TodoId) -> TodoModel {
    if model.editing_text.trim().is_empty() {
        return model.clone();
    }

    let mut next = model.clone();
    if let Some(todo) = next.todos.iter_mut().find(|t| t.id == id) {
        todo.text = next.editing_text.clone();
    }
    next.editing_id = None;
    next.editing_text.clear();
    next
}

pub fn cancel_edit(model: &TodoModel) -> TodoModel {
    TodoModel {
        editing_id: None,
        editing_text: String::new(),
        ..model.clone()
    }
}

pub fn delete_todo(model: &TodoModel, id: TodoId) -> TodoModel {
    TodoModel {
        todos: model.todos.iter().filter(|t| t.id != id).cloned().collect(),
        ..model.clone()
    }
}

/// Enter in the new-todo input submits it.
pub fn input_key_effect(key: &str) -> Effect<TodoEvent> {
    match key {
        "Enter" => Effect::just(TodoEvent::Add),
        _ => Effect::none(),
    }
}

/// Enter saves, Escape cancels.
pub fn edit_key_effect(id: TodoId, key: &str) -> Effect<TodoEvent> {
    match key {
        "Enter" => Effect::just(TodoEvent::SaveEdit(id)),
        "Escape" => Effect::just(TodoEvent::CancelEdit),
        _ => Effect::none(),
    }
}

pub fn summary(model: &TodoModel) -> String {
    format!(
        "{} of {} completed",
        model.completed_count(),
        model.todos.len()
    )
}

pub fn view(model: &TodoModel, emitter: &Emitter<TodoEvent>) -> Node {
    h("div")
        .class("todo")
        .child(h("h1").child("Todo List"))
        .child(
            h("div")
                .class("new-todo")
                .child(
                    h("input")
                        .id("new-todo")
                        .prop("type", "text")
                        .prop("value", model.input_value.as_str())
                        .prop("placeholder", "Add a new todo...")
                        .on(
                            EventKind::Change,
                            emitter.listener_with(|e: &DomEvent| {
                                e.value.clone().map(TodoEvent::InputChanged)
                            }),
                        )
                        .on(
                            EventKind::KeyPress,
                            emitter.listener_with(|e: &DomEvent| {
                                e.key.clone().map(TodoEvent::InputKey)
                            }),
                        ),
                )
                .child(
                    h("button")
                        .id("add")
                        .on(EventKind::Click, emitter.listener(TodoEvent::Add))
                        .child("Add"),
                ),
        )
        .child(
            h("div")
                .class("todo-list")
                .children(model.todos.iter().map(|t| todo_row(model, t, emitter))),
        )
        .child(
            h("div")
                .class("stats")
                .child(h("span").id("summary").child(summary(model))),
        )
        .into()
}

fn todo_row(model: &TodoModel, todo: &TodoItem, emitter: &Emitter<TodoEvent>) -> Node {
    let id = todo.id;
    let editing = model.editing_id == Some(id);
    let row_class = if todo.completed {
        "todo-item completed"
    } else {
        "todo-item"
    };

    let checkbox = h("input")
        .id(format!("toggle-{id}"))
        .prop("type", "checkbox")
        .prop("checked", todo.completed)
        .on(EventKind::Change, emitter.listener(TodoEvent::Toggle(id)));

    let body = if editing {
        h("input")
            .id(format!("edit-input-{id}"))
            .prop("type", "text")
            .prop("value", model.editing_text.as_str())
            .prop("autofocus", true)
            .on(
                EventKind::Change,
                emitter.listener_with(|e: &DomEvent| e.value.clone().map(TodoEvent::EditChanged)),
            )
            .on(
                EventKind::KeyPress,
                emitter.listener_with(move |e: &DomEvent| {
                    e.key.clone().map(|key| TodoEvent::EditKey { id, key })
                }),
            )
    } else {
        h("span")
            .class(if todo.completed { "text completed" } else { "text" })
            .child(todo.text.as_str())
    };

    let actions = if editing {
        h("div")
            .class("actions")
            .child(action_button("save", id, "Save", emitter, TodoEvent::SaveEdit(id)))
            .child(action_button("cancel", id, "Cancel", emitter, TodoEvent::CancelEdit))
    } else {
        h("div")
            .class("actions")
            .child(action_button("edit", id, "Edit", emitter, TodoEvent::StartEdit(id)))
            .child(action_button("delete", id, "Delete", emitter, TodoEvent::Delete(id)))
    };

    h("div")
        .key(id)
        .class(row_class)
        .child(checkbox)
        .child(body)
        .child(actions)
        .into()
}

fn action_button(
    action: &str,
    id: TodoId,
    label: &str,
    emitter: &Emitter<TodoEvent>,
    event: TodoEvent,
) -> Node {
    h("button")
        .id(format!("{action}-{id}"))
        .on(EventKind::Click, emitter.listener(event))
        .child(label)
        .into()
}

pub struct TodoLogic {
    clock: Box<dyn Clock + Send>,
}

impl TodoLogic {
    pub fn new(clock: impl Clock + Send + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }
}

impl Default for TodoLogic {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl MvuLogic<TodoEvent, TodoModel, Node> for TodoLogic {
    fn name(&self) -> &'static str {
        "todo"
    }

    fn update(&self, event: TodoEvent, model: &TodoModel) -> (TodoModel, Effect<TodoEvent>) {
        match event {
            TodoEvent::InputChanged(value) => (set_input(model, value), Effect::none()),
            TodoEvent::InputKey(key) => (model.clone(), input_key_effect(&key)),
            TodoEvent::Add => {
                let id = next_id(model, self.clock.now_millis());
                (add_todo(model, id), Effect::none())
            }
            TodoEvent::Toggle(id) => (toggle_todo(model, id), Effect::none()),
            TodoEvent::StartEdit(id) => (start_editing(model, id), Effect::none()),
            TodoEvent::EditChanged(value) => (set_editing_text(model, value), Effect::none()),
            TodoEvent::EditKey { id, key } => (model.clone(), edit_key_effect(id, &key)),
            TodoEvent::SaveEdit(id) => (save_edit(model, id), Effect::none()),
            TodoEvent::CancelEdit => (cancel_edit(model), Effect::none()),
            TodoEvent::Delete(id) => (delete_todo(model, id), Effect::none()),
        }
    }

    fn view(&self, model: &TodoModel, emitter: &Emitter<TodoEvent>) -> Node {
        view(model, emitter)
    }
}
