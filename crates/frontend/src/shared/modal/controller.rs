//! Open/closed state machine behind [`TriggerModal`](super::TriggerModal).
//!
//! The controller is framework agnostic: it talks to the document through a
//! [`DomHost`] and reports its mount target to an observer. The Leptos component
//! drives its lifecycle (`new` on mount, `on_config_change` from an effect,
//! `on_unmount` from cleanup).

use super::content::Content;
use crate::shared::dom::{DomHost, KeydownGuard};
use crate::shared::portal::PortalProjector;
use modal_contracts::{validate_with, ConfigurationError, ModalConfiguration};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Capability handed to render-prop content; closes the modal it came from.
///
/// Holds a weak reference, so a handle kept past the modal's lifetime is inert.
#[derive(Clone)]
pub struct CloseHandle {
    close: Rc<dyn Fn()>,
}

impl CloseHandle {
    pub fn close(&self) {
        (self.close)();
    }
}

/// Validate `config`, letting `doc` judge the background color
pub fn validate_for<D: DomHost>(
    doc: &D,
    config: &ModalConfiguration,
) -> Result<(), ConfigurationError> {
    validate_with(config, |color| doc.accepts_color(color))
}

type Observer<N> = Rc<dyn Fn(Option<N>)>;

struct ControllerState<D: DomHost> {
    doc: D,
    config: RefCell<ModalConfiguration>,
    open: Cell<bool>,
    escape: RefCell<Option<KeydownGuard<D>>>,
    portal: RefCell<Option<PortalProjector<D>>>,
    on_close: RefCell<Option<Rc<dyn Fn()>>>,
    on_change: RefCell<Option<Observer<D::Node>>>,
}

impl<D: DomHost> ControllerState<D> {
    fn mount_target(&self) -> Option<D::Node> {
        self.portal
            .borrow()
            .as_ref()
            .and_then(|portal| portal.target().cloned())
    }

    fn notify(&self) {
        let observer = self.on_change.borrow().clone();
        if let Some(observer) = observer {
            observer(self.mount_target());
        }
    }
}

pub struct ModalController<D: DomHost> {
    state: Rc<ControllerState<D>>,
}

impl<D: DomHost> Clone for ModalController<D> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<D: DomHost> ModalController<D> {
    /// Validates `config` up front; an invalid configuration never gets a controller.
    pub fn new(doc: D, config: ModalConfiguration) -> Result<Self, ConfigurationError> {
        validate_for(&doc, &config)?;
        Ok(Self {
            state: Rc::new(ControllerState {
                doc,
                config: RefCell::new(config),
                open: Cell::new(false),
                escape: RefCell::new(None),
                portal: RefCell::new(None),
                on_close: RefCell::new(None),
                on_change: RefCell::new(None),
            }),
        })
    }

    /// Called after every transition to Closed
    pub fn with_on_close(self, on_close: impl Fn() + 'static) -> Self {
        self.set_on_close(Some(Rc::new(on_close)));
        self
    }

    pub fn set_on_close(&self, on_close: Option<Rc<dyn Fn()>>) {
        *self.state.on_close.borrow_mut() = on_close;
    }

    /// Observer of the mount target: called with `Some(node)` on open and on
    /// every move to another mount point, and with `None` on close.
    pub fn set_on_change(&self, on_change: impl Fn(Option<D::Node>) + 'static) {
        *self.state.on_change.borrow_mut() = Some(Rc::new(on_change));
    }

    pub fn is_open(&self) -> bool {
        self.state.open.get()
    }

    pub fn config(&self) -> ModalConfiguration {
        self.state.config.borrow().clone()
    }

    /// Element the dialog is projected into while open
    pub fn mount_target(&self) -> Option<D::Node> {
        self.state.mount_target()
    }

    /// Closed -> Open. No-op when already open.
    pub fn open(&self) {
        let state = &self.state;
        if state.open.get() {
            return;
        }

        let weak: Weak<ControllerState<D>> = Rc::downgrade(state);
        let guard = KeydownGuard::on_escape(state.doc.clone(), move || {
            if let Some(state) = weak.upgrade() {
                ModalController { state }.close();
            }
        });
        *state.escape.borrow_mut() = Some(guard);

        let modal_id = state.config.borrow().modal_id.clone();
        *state.portal.borrow_mut() = Some(PortalProjector::activate(state.doc.clone(), &modal_id));

        state.open.set(true);
        log::debug!("modal #{modal_id}: open");
        state.notify();
    }

    /// Open -> Closed. No-op when already closed, so `on_close` runs once per transition.
    pub fn close(&self) {
        let state = &self.state;
        if !state.open.get() {
            return;
        }
        state.open.set(false);
        let escape = state.escape.borrow_mut().take();
        drop(escape);

        // observers drop the projected view before the mount point goes away
        let portal = state.portal.borrow_mut().take();
        state.notify();
        drop(portal);

        log::debug!("modal #{}: closed", state.config.borrow().modal_id);
        let on_close = state.on_close.borrow().clone();
        if let Some(on_close) = on_close {
            on_close();
        }
    }

    pub fn close_handle(&self) -> CloseHandle {
        let weak = Rc::downgrade(&self.state);
        CloseHandle {
            close: Rc::new(move || {
                if let Some(state) = weak.upgrade() {
                    ModalController { state }.close();
                }
            }),
        }
    }

    /// Resolve the dialog body; `None` while closed. Render-prop content
    /// receives a capability built from [`close_handle`](Self::close_handle).
    pub fn project<H, V>(&self, content: &Content<H, V>) -> Option<V>
    where
        H: From<CloseHandle>,
    {
        if !self.is_open() {
            return None;
        }
        Some(content.render(self.close_handle().into()))
    }

    /// Re-validate after an input change. Unchanged configurations are not re-checked.
    ///
    /// On error the previous configuration stays active. A new `modal_id` while
    /// open moves the projection to the new mount point.
    pub fn on_config_change(&self, config: ModalConfiguration) -> Result<(), ConfigurationError> {
        let state = &self.state;
        if *state.config.borrow() == config {
            return Ok(());
        }
        validate_for(&state.doc, &config)?;

        let id_changed = state.config.borrow().modal_id != config.modal_id;
        let modal_id = config.modal_id.clone();
        *state.config.borrow_mut() = config;

        if id_changed && state.open.get() {
            let next = PortalProjector::activate(state.doc.clone(), &modal_id);
            let previous = state.portal.replace(Some(next));
            log::debug!("modal #{modal_id}: moved to new mount point");
            // the observer re-projects before the old mount point is released
            state.notify();
            drop(previous);
        }
        Ok(())
    }

    /// Tear down without a dismissal: listener and mount point go, `on_close` does not run.
    pub fn on_unmount(&self) {
        let state = &self.state;
        state.open.set(false);
        let escape = state.escape.borrow_mut().take();
        drop(escape);
        let portal = state.portal.borrow_mut().take();
        drop(portal);
    }
}
