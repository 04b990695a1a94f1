pub mod content;
pub mod controlled;
pub mod controller;
mod trigger_modal;

pub use content::{Content, ModalChildProps, ModalContent, RenderModalContent};
pub use controlled::{use_modal, Modal, ModalActions};
pub use controller::{CloseHandle, ModalController};
pub use trigger_modal::TriggerModal;
