pub mod enums;
pub mod modal;

pub use enums::position::{PositionX, PositionY};
pub use modal::config::{CloseComponentPosition, ModalConfiguration};
pub use modal::validator::{validate, validate_with, ConfigField, ConfigurationError};
