use super::{DomHost, ListenerId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use modal_contracts::modal::color::is_valid_css_color;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

type KeydownClosure = Closure<dyn FnMut(web_sys::Event)>;

/// [`DomHost`] backed by the browser document.
///
/// Listener closures are owned by the handle (not `forget()`-ed) so they can be
/// removed again; clones share the same registry.
#[derive(Clone)]
pub struct WebDocument {
    document: Document,
    listeners: Rc<RefCell<HashMap<ListenerId, KeydownClosure>>>,
    next_listener: Rc<Cell<u64>>,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Rc::new(RefCell::new(HashMap::new())),
            next_listener: Rc::new(Cell::new(1)),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DomHost for WebDocument {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn append_to_body(&self, id: &str, classes: &[&str]) -> Option<Element> {
        let Some(body) = self.document.body() else {
            log::warn!("modal: document has no <body>, cannot create #{id}");
            return None;
        };
        let element = match self.document.create_element("div") {
            Ok(element) => element,
            Err(err) => {
                log::warn!("modal: failed to create #{id}: {err:?}");
                return None;
            }
        };
        element.set_id(id);
        for class in classes {
            let _ = element.class_list().add_1(class);
        }
        if let Err(err) = body.append_child(&element) {
            log::warn!("modal: failed to attach #{id}: {err:?}");
            return None;
        }
        Some(element)
    }

    fn detach(&self, node: &Element) {
        node.remove();
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn next_frame(&self, callback: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            callback();
            return;
        };
        let frame = Closure::once_into_js(move || callback());
        if let Err(err) = window.request_animation_frame(frame.unchecked_ref::<js_sys::Function>()) {
            log::warn!("modal: requestAnimationFrame failed: {err:?}");
        }
    }

    fn listen_keydown(&self, handler: Rc<dyn Fn(&str)>) -> Option<ListenerId> {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                handler(&keyboard_event.key());
            }
        }) as Box<dyn FnMut(_)>);

        if let Err(err) = self
            .document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            log::warn!("modal: failed to register keydown listener: {err:?}");
            return None;
        }

        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, closure);
        Some(id)
    }

    fn unlisten_keydown(&self, id: ListenerId) {
        let Some(closure) = self.listeners.borrow_mut().remove(&id) else {
            return;
        };
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }

    /// Assigns `value` to a detached element's `style.color`; the browser
    /// leaves the property empty when it rejects the value.
    fn accepts_color(&self, value: &str) -> bool {
        let scratch = match self.document.create_element("div") {
            Ok(element) => element.unchecked_into::<HtmlElement>(),
            Err(err) => {
                log::warn!("modal: cannot check color {value:?} in the browser: {err:?}");
                return is_valid_css_color(value);
            }
        };
        let style = scratch.style();
        if style.set_property("color", value).is_err() {
            return false;
        }
        style
            .get_property_value("color")
            .is_ok_and(|color| !color.is_empty())
    }
}
