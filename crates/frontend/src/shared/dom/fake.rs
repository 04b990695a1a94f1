//! In-memory [`DomHost`] for unit tests.

use super::{DomHost, ListenerId};
use modal_contracts::modal::color::is_valid_css_color;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeNode(u64);

struct FakeElement {
    key: u64,
    id: String,
    classes: BTreeSet<String>,
    attached: bool,
}

#[derive(Default)]
struct FakeState {
    elements: Vec<FakeElement>,
    next_key: u64,
    created: usize,
    frames: Vec<Box<dyn FnOnce()>>,
    listeners: BTreeMap<ListenerId, Rc<dyn Fn(&str)>>,
    next_listener: u64,
}

impl FakeState {
    fn element_mut(&mut self, node: &FakeNode) -> Option<&mut FakeElement> {
        self.elements.iter_mut().find(|e| e.key == node.0)
    }

    fn insert(&mut self, id: &str, classes: &[&str]) -> FakeNode {
        self.next_key += 1;
        self.elements.push(FakeElement {
            key: self.next_key,
            id: id.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attached: true,
        });
        FakeNode(self.next_key)
    }
}

#[derive(Clone, Default)]
pub struct FakeDocument {
    state: Rc<RefCell<FakeState>>,
}

impl FakeDocument {
    /// A node that exists before any modal runs, e.g. from the page markup
    pub fn insert_existing(&self, id: &str) -> FakeNode {
        self.state.borrow_mut().insert(id, &[])
    }

    /// Number of attached nodes carrying `id`
    pub fn count_with_id(&self, id: &str) -> usize {
        self.state
            .borrow()
            .elements
            .iter()
            .filter(|e| e.attached && e.id == id)
            .count()
    }

    /// Nodes created through [`DomHost::append_to_body`]
    pub fn created_count(&self) -> usize {
        self.state.borrow().created
    }

    pub fn is_attached(&self, node: &FakeNode) -> bool {
        self.state
            .borrow()
            .elements
            .iter()
            .any(|e| e.key == node.0 && e.attached)
    }

    pub fn has_class(&self, node: &FakeNode, class: &str) -> bool {
        self.state
            .borrow()
            .elements
            .iter()
            .any(|e| e.key == node.0 && e.classes.contains(class))
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Run the callbacks scheduled for the next frame
    pub fn drain_frames(&self) {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        for frame in frames {
            frame();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Dispatch a keydown to every registered listener
    pub fn press_key(&self, key: &str) {
        let handlers: Vec<_> = self.state.borrow().listeners.values().cloned().collect();
        for handler in handlers {
            handler(key);
        }
    }
}

impl DomHost for FakeDocument {
    type Node = FakeNode;

    fn element_by_id(&self, id: &str) -> Option<FakeNode> {
        self.state
            .borrow()
            .elements
            .iter()
            .find(|e| e.attached && e.id == id)
            .map(|e| FakeNode(e.key))
    }

    fn append_to_body(&self, id: &str, classes: &[&str]) -> Option<FakeNode> {
        let mut state = self.state.borrow_mut();
        state.created += 1;
        Some(state.insert(id, classes))
    }

    fn detach(&self, node: &FakeNode) {
        if let Some(element) = self.state.borrow_mut().element_mut(node) {
            element.attached = false;
        }
    }

    fn add_class(&self, node: &FakeNode, class: &str) {
        if let Some(element) = self.state.borrow_mut().element_mut(node) {
            element.classes.insert(class.to_string());
        }
    }

    fn remove_class(&self, node: &FakeNode, class: &str) {
        if let Some(element) = self.state.borrow_mut().element_mut(node) {
            element.classes.remove(class);
        }
    }

    fn next_frame(&self, callback: Box<dyn FnOnce()>) {
        self.state.borrow_mut().frames.push(callback);
    }

    fn listen_keydown(&self, handler: Rc<dyn Fn(&str)>) -> Option<ListenerId> {
        let mut state = self.state.borrow_mut();
        state.next_listener += 1;
        let id = ListenerId(state.next_listener);
        state.listeners.insert(id, handler);
        Some(id)
    }

    fn unlisten_keydown(&self, id: ListenerId) {
        self.state.borrow_mut().listeners.remove(&id);
    }

    fn accepts_color(&self, value: &str) -> bool {
        is_valid_css_color(value)
    }
}
