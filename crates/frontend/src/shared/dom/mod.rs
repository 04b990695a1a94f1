//! Document handle used by the mount point manager and the modal controller.
//!
//! The browser implementation is [`WebDocument`]; tests run against the
//! in-memory `FakeDocument`.

#[cfg(test)]
pub(crate) mod fake;
mod web;

pub use web::WebDocument;

use std::rc::Rc;

/// Id of a keydown listener registered on a [`DomHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u64);

/// The subset of the document API the modal needs.
pub trait DomHost: Clone + 'static {
    type Node: Clone + PartialEq + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Create a `div` with `id` and `classes` and append it to `<body>`.
    /// Returns `None` if the host could not create or attach the node.
    fn append_to_body(&self, id: &str, classes: &[&str]) -> Option<Self::Node>;

    fn detach(&self, node: &Self::Node);

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Run `callback` before the next paint. Fire-and-forget.
    fn next_frame(&self, callback: Box<dyn FnOnce()>);

    /// Register a document-level keydown listener; `handler` receives `KeyboardEvent.key`.
    fn listen_keydown(&self, handler: Rc<dyn Fn(&str)>) -> Option<ListenerId>;

    fn unlisten_keydown(&self, id: ListenerId);

    /// Whether `value` is a color this host would render
    fn accepts_color(&self, value: &str) -> bool;
}

/// Keydown listener that is removed from the document when dropped.
pub struct KeydownGuard<D: DomHost> {
    doc: D,
    id: Option<ListenerId>,
}

impl<D: DomHost> KeydownGuard<D> {
    pub fn register(doc: D, handler: impl Fn(&str) + 'static) -> Self {
        let id = doc.listen_keydown(Rc::new(handler));
        Self { doc, id }
    }

    /// Listener that only reacts to `Escape`
    pub fn on_escape(doc: D, on_escape: impl Fn() + 'static) -> Self {
        Self::register(doc, move |key| {
            if key == "Escape" {
                on_escape();
            }
        })
    }

    pub fn is_registered(&self) -> bool {
        self.id.is_some()
    }
}

impl<D: DomHost> Drop for KeydownGuard<D> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.doc.unlisten_keydown(id);
        }
    }
}
