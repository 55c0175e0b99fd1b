//! Render targets for view trees.

use std::io;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::view::Node;

/// Render target abstraction.
///
/// Implement this trait to mount the trees produced by
/// [`MvuLogic::view`](crate::MvuLogic::view) into a real output: a document,
/// a terminal, a test buffer. [`render`](Self::render) is called once for the
/// initial mount and once per processed event afterwards. Reconciling a new
/// tree against the previous one is entirely up to the implementation.
///
/// # Example
///
/// ```rust
/// use oxide_apps::{Node, Renderer};
///
/// struct ConsoleRenderer;
///
/// impl Renderer<Node> for ConsoleRenderer {
///     fn render(&mut self, props: Node) {
///         print!("{}", props.to_markup());
///     }
/// }
/// ```
pub trait Renderer<Props> {
    fn render(&mut self, props: Props);
}

impl<Props, R: Renderer<Props> + ?Sized> Renderer<Props> for Box<R> {
    fn render(&mut self, props: Props) {
        (**self).render(props)
    }
}

/// Writes every tree as indented markup and keeps the latest one.
///
/// The retained tree is what interactive front ends dispatch user input
/// against, the same way a browser dispatches against the mounted document.
pub struct MarkupRenderer<W: io::Write> {
    out: W,
    latest: Option<Node>,
    renders: usize,
}

impl<W: io::Write> MarkupRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            latest: None,
            renders: 0,
        }
    }

    /// The most recently rendered tree.
    pub fn latest(&self) -> Option<&Node> {
        self.latest.as_ref()
    }

    /// Number of trees rendered so far.
    pub fn count(&self) -> usize {
        self.renders
    }

    /// Write the latest tree again.
    pub fn reprint(&mut self) -> io::Result<()> {
        match &self.latest {
            Some(tree) => {
                self.out.write_all(tree.to_markup().as_bytes())?;
                self.out.flush()
            }
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Renderer<Node> for MarkupRenderer<W> {
    fn render(&mut self, props: Node) {
        self.renders += 1;
        tracing::trace!(render = self.renders, "writing markup");
        let written = self
            .out
            .write_all(props.to_markup().as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(error) = written {
            tracing::warn!(%error, "failed to write rendered markup");
        }
        self.latest = Some(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures every rendered tree for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture buffer, so keep one clone in the test and
/// hand the other to the runtime.
///
/// # Example
///
/// ```rust
/// use oxide_apps::apps::counter::{CounterLogic, CounterModel};
/// use oxide_apps::{MvuRuntime, TestRenderer};
///
/// let renderer = TestRenderer::new();
/// let _driver = MvuRuntime::new(CounterModel::default(), CounterLogic, renderer.clone()).run();
///
/// renderer.with_renders(|renders| {
///     let count = renders[0].find_by_id("count").unwrap();
///     assert_eq!(count.text_content(), "0");
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// Listeners inside the captured trees may be invoked from the closure;
    /// they only queue events, so the runtime can process them afterwards.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Access the most recent render.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been rendered yet.
    pub fn with_latest<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Props) -> R,
    {
        let renders = self.renders.lock();
        f(renders.last().expect("nothing has been rendered yet"))
    }
}
