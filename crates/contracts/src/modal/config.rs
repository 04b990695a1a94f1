use super::validator::validate;
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODAL_ID: &str = "modal";
/// Mount point id used by the externally controlled modal
pub const DEFAULT_CONTROLLED_MODAL_ID: &str = "new-modal";
pub const DEFAULT_BACKGROUND_COLOR: &str = "rgba(0, 0, 0, 0.42)";
pub const DEFAULT_CLOSE_ICON_COLOR: &str = "#1F1F1F";
pub const DEFAULT_CLOSE_OFFSET: &str = "24px";

/// Offset of the close affordance inside the dialog container.
///
/// Unset sides fall back to [`DEFAULT_CLOSE_OFFSET`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloseComponentPosition {
    pub top: Option<String>,
    pub right: Option<String>,
}

impl CloseComponentPosition {
    pub fn new(top: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            top: Some(top.into()),
            right: Some(right.into()),
        }
    }

    /// Inline style for the `closeHandler` wrapper
    pub fn style(&self) -> String {
        let top = self.top.as_deref().unwrap_or(DEFAULT_CLOSE_OFFSET);
        let right = self.right.as_deref().unwrap_or(DEFAULT_CLOSE_OFFSET);
        format!("top: {top}; right: {right};")
    }
}

/// Presentation settings of one modal instance.
///
/// Values are kept as the caller supplied them; [`validate`] decides whether
/// they are usable. Keys are camelCase in JSON so a configuration written for
/// the JS props (`modalId`, `backgroundColor`, ...) loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfiguration {
    pub modal_id: String,
    pub background_color: String,
    pub position_x: String,
    pub position_y: String,
    pub close_icon_color: String,
    pub close_component_position: CloseComponentPosition,
}

impl Default for ModalConfiguration {
    fn default() -> Self {
        Self {
            modal_id: DEFAULT_MODAL_ID.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            position_x: "center".to_string(),
            position_y: "center".to_string(),
            close_icon_color: DEFAULT_CLOSE_ICON_COLOR.to_string(),
            close_component_position: CloseComponentPosition::default(),
        }
    }
}

impl ModalConfiguration {
    /// Defaults for the externally controlled modal
    pub fn controlled() -> Self {
        Self {
            modal_id: DEFAULT_CONTROLLED_MODAL_ID.to_string(),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration and validate it
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse modal configuration")?;
        validate(&config).context("Modal configuration rejected")?;
        Ok(config)
    }

    /// `position-<y>-<x>`, e.g. `position-bottom-right`
    pub fn position_class(&self) -> String {
        format!("position-{}-{}", self.position_y, self.position_x)
    }

    pub fn backdrop_class(&self) -> String {
        format!("{} bg", self.position_class())
    }

    pub fn backdrop_style(&self) -> String {
        format!("background-color: {};", self.background_color)
    }

    pub fn close_icon_style(&self) -> String {
        format!("color: {};", self.close_icon_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::validator::ConfigField;
    use crate::ConfigurationError;

    #[test]
    fn test_defaults() {
        let config = ModalConfiguration::default();
        assert_eq!(config.modal_id, "modal");
        assert_eq!(config.background_color, "rgba(0, 0, 0, 0.42)");
        assert_eq!(config.position_class(), "position-center-center");
        assert_eq!(config.close_icon_style(), "color: #1F1F1F;");
        assert_eq!(ModalConfiguration::controlled().modal_id, "new-modal");
    }

    #[test]
    fn test_backdrop_class_and_style() {
        let config = ModalConfiguration {
            position_x: "right".into(),
            position_y: "bottom".into(),
            background_color: "rgba(255, 0, 0, 0.42)".into(),
            ..Default::default()
        };
        assert_eq!(config.backdrop_class(), "position-bottom-right bg");
        assert_eq!(config.backdrop_style(), "background-color: rgba(255, 0, 0, 0.42);");
    }

    #[test]
    fn test_close_position_style() {
        assert_eq!(
            CloseComponentPosition::default().style(),
            "top: 24px; right: 24px;"
        );
        assert_eq!(
            CloseComponentPosition::new("50px", "50px").style(),
            "top: 50px; right: 50px;"
        );
        let partial = CloseComponentPosition {
            top: Some("8px".into()),
            right: None,
        };
        assert_eq!(partial.style(), "top: 8px; right: 24px;");
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ModalConfiguration::from_json(
            r##"{"positionX": "right", "backgroundColor": "#181818", "closeIconColor": "#fff"}"##,
        )
        .unwrap();
        assert_eq!(config.position_x, "right");
        assert_eq!(config.position_y, "center");
        assert_eq!(config.modal_id, "modal");
        assert_eq!(config.background_color, "#181818");
        assert_eq!(config.close_component_position, CloseComponentPosition::default());
    }

    #[test]
    fn test_from_json_close_position() {
        let config = ModalConfiguration::from_json(
            r#"{"modalId": "x", "closeComponentPosition": {"top": "50px"}}"#,
        )
        .unwrap();
        assert_eq!(config.modal_id, "x");
        assert_eq!(
            config.close_component_position.style(),
            "top: 50px; right: 24px;"
        );
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = ModalConfiguration::from_json(r#"{"positionY": "middle"}"#).unwrap_err();
        let cause = err.downcast_ref::<ConfigurationError>().unwrap();
        assert_eq!(cause.field, ConfigField::PositionY);
        assert_eq!(cause.value, "middle");

        assert!(ModalConfiguration::from_json("{ not json").is_err());
    }
}
