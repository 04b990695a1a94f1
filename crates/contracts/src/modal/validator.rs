use super::color::is_valid_css_color;
use super::config::ModalConfiguration;
use crate::enums::position::{PositionX, PositionY};
use std::fmt;
use thiserror::Error;

/// Configuration field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    BackgroundColor,
    PositionX,
    PositionY,
}

impl ConfigField {
    /// Prop name as the caller wrote it
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::BackgroundColor => "backgroundColor",
            ConfigField::PositionX => "positionX",
            ConfigField::PositionY => "positionY",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invalid modal configuration. Treated as a programming error by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid Modal {field}: {value:?}")]
pub struct ConfigurationError {
    pub field: ConfigField,
    pub value: String,
}

impl ConfigurationError {
    fn new(field: ConfigField, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Check a configuration before anything is rendered with it.
///
/// Fields are checked in order `backgroundColor`, `positionY`, `positionX`;
/// the first failure is returned. Colors go through the syntactic
/// [`is_valid_css_color`]; use [`validate_with`] to let a browser decide.
pub fn validate(config: &ModalConfiguration) -> Result<(), ConfigurationError> {
    validate_with(config, is_valid_css_color)
}

/// [`validate`] with a caller-supplied color check
pub fn validate_with(
    config: &ModalConfiguration,
    accepts_color: impl Fn(&str) -> bool,
) -> Result<(), ConfigurationError> {
    if !accepts_color(&config.background_color) {
        return Err(ConfigurationError::new(
            ConfigField::BackgroundColor,
            &config.background_color,
        ));
    }
    if PositionY::from_code(&config.position_y).is_none() {
        return Err(ConfigurationError::new(
            ConfigField::PositionY,
            &config.position_y,
        ));
    }
    if PositionX::from_code(&config.position_x).is_none() {
        return Err(ConfigurationError::new(
            ConfigField::PositionX,
            &config.position_x,
        ));
    }
    Ok(())
}
