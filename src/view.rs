//! Plain-data view trees produced by view builders.
//!
//! A view builder returns a [`Node`] describing what should be on screen.
//! Nothing here touches a real document: a [`Renderer`](crate::Renderer) is
//! responsible for mounting the tree and reconciling later trees against it,
//! using each element's [`key`](Element::key) to keep identity of repeated
//! items stable across renders.

use core::fmt::{self, Write as _};

/// Stable identity of a repeated element (todo id, board index).
pub type Key = u64;

/// Callback bound to an element event.
pub type Listener = Box<dyn Fn(&DomEvent) + Send>;

/// Interaction kinds an element can listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    KeyPress,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Change => "change",
            Self::KeyPress => "keypress",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the element that triggered an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRef {
    pub tag: &'static str,
    pub id: Option<String>,
    pub key: Option<Key>,
}

/// Event object passed to listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent {
    pub target: ElementRef,
    /// Current value of the target for change events.
    pub value: Option<String>,
    /// Key name for key-press events, e.g. `"Enter"` or `"Escape"`.
    pub key: Option<String>,
}

impl DomEvent {
    pub fn new(target: ElementRef) -> Self {
        Self {
            target,
            value: None,
            key: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Property value attached to an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropValue {
    Str(String),
    Bool(bool),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An element node: tag, optional key, properties, listeners and children.
pub struct Element {
    tag: &'static str,
    key: Option<Key>,
    props: Vec<(&'static str, PropValue)>,
    listeners: Vec<(EventKind, Listener)>,
    children: Vec<Node>,
}

/// A node in a view tree.
#[derive(Debug)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// Start building an element with the given tag.
pub fn h(tag: &'static str) -> Element {
    Element {
        tag,
        key: None,
        props: Vec::new(),
        listeners: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    pub fn key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// Set a property, replacing any earlier value under the same name.
    pub fn prop(mut self, name: &'static str, value: impl Into<PropValue>) -> Self {
        let value = value.into();
        match self.props.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.props.push((name, value)),
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.prop("id", id.into())
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.prop("class", class.into())
    }

    pub fn on(mut self, kind: EventKind, listener: Listener) -> Self {
        self.listeners.push((kind, listener));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_key(&self) -> Option<Key> {
        self.key
    }

    pub fn get_prop(&self, name: &str) -> Option<&PropValue> {
        self.props.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn get_id(&self) -> Option<&str> {
        match self.get_prop("id") {
            Some(PropValue::Str(id)) => Some(id),
            _ => None,
        }
    }

    /// `true` when the property is present as `Bool(true)`.
    pub fn is_set(&self, name: &str) -> bool {
        matches!(self.get_prop(name), Some(PropValue::Bool(true)))
    }

    pub fn has_class(&self, class: &str) -> bool {
        match self.get_prop("class") {
            Some(PropValue::Str(classes)) => classes.split_whitespace().any(|c| c == class),
            _ => false,
        }
    }

    pub fn get_children(&self) -> &[Node] {
        &self.children
    }

    pub fn listens_to(&self, kind: EventKind) -> bool {
        self.listeners.iter().any(|(k, _)| *k == kind)
    }

    pub fn element_ref(&self) -> ElementRef {
        ElementRef {
            tag: self.tag,
            id: self.get_id().map(str::to_string),
            key: self.key,
        }
    }

    /// Invoke every listener bound to `kind`, synchronously and in order.
    ///
    /// Returns `false` when nothing listens for `kind`.
    pub fn dispatch(&self, kind: EventKind, event: &DomEvent) -> bool {
        let mut fired = false;
        for (_, listener) in self.listeners.iter().filter(|(k, _)| *k == kind) {
            listener(event);
            fired = true;
        }
        fired
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: Vec<_> = self.listeners.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("key", &self.key)
            .field("props", &self.props)
            .field("listeners", &listeners)
            .field("children", &self.children)
            .finish()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(content.to_string())
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(content)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// First element in depth-first pre-order that satisfies `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.find_dyn(&predicate)
    }

    fn find_dyn(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        let element = self.as_element()?;
        if predicate(element) {
            return Some(element);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_dyn(predicate))
    }

    /// All elements satisfying `predicate`, in depth-first pre-order.
    pub fn find_all<P>(&self, predicate: P) -> Vec<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.collect_matching(&predicate, &mut found);
        found
    }

    fn collect_matching<'a>(
        &'a self,
        predicate: &dyn Fn(&Element) -> bool,
        found: &mut Vec<&'a Element>,
    ) {
        if let Node::Element(element) = self {
            if predicate(element) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_matching(predicate, found);
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|e| e.get_id() == Some(id))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(content),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Render the tree as indented, HTML-like markup.
    ///
    /// Listeners show up as `on:<kind>` attributes so the output doubles as
    /// a readable snapshot of what the user can interact with.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_markup(&mut out, 0);
        out
    }

    fn write_markup(&self, out: &mut String, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        let element = match self {
            Node::Text(content) => return writeln!(out, "{indent}{content}"),
            Node::Element(element) => element,
        };

        write!(out, "{indent}<{}", element.tag)?;
        if let Some(key) = element.key {
            write!(out, " key=\"{key}\"")?;
        }
        for (name, value) in &element.props {
            match value {
                PropValue::Bool(true) => write!(out, " {name}")?,
                PropValue::Bool(false) => {}
                other => write!(out, " {name}=\"{other}\"")?,
            }
        }
        for (kind, _) in &element.listeners {
            write!(out, " on:{kind}")?;
        }

        match element.children.as_slice() {
            [] => writeln!(out, " />"),
            [Node::Text(content)] => writeln!(out, ">{content}</{}>", element.tag),
            children => {
                writeln!(out, ">")?;
                for child in children {
                    child.write_markup(out, depth + 1)?;
                }
                writeln!(out, "{indent}</{}>", element.tag)
            }
        }
    }
}
