//! Modal dialog components for Leptos.
//!
//! [`TriggerModal`] owns its open state and opens from a trigger element;
//! [`Modal`] is the controlled variant driven by the caller (see [`use_modal`]).
//! Both project the dialog into a mount point element looked up by id and
//! created on demand.

#[cfg(feature = "demo")]
pub mod app;
pub mod shared;

pub use modal_contracts::{
    CloseComponentPosition, ConfigField, ConfigurationError, ModalConfiguration,
};
pub use shared::modal::{
    use_modal, CloseHandle, Content, Modal, ModalActions, ModalChildProps, ModalContent,
    ModalController, RenderModalContent, TriggerModal,
};
pub use shared::modal_frame::ModalFrame;
pub use shared::portal::{ModalPortal, PortalProjector};

#[cfg(feature = "demo")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "demo")]
#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[cfg(feature = "demo")]
#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
