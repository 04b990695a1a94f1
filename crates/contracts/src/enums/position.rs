use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal placement of the dialog inside the backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionX {
    Left,
    #[default]
    Center,
    Right,
}

impl PositionX {
    /// Code used in props and in the `position-*` CSS class
    pub fn code(&self) -> &'static str {
        match self {
            PositionX::Left => "left",
            PositionX::Center => "center",
            PositionX::Right => "right",
        }
    }

    pub fn all() -> Vec<PositionX> {
        vec![PositionX::Left, PositionX::Center, PositionX::Right]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "left" => Some(PositionX::Left),
            "center" => Some(PositionX::Center),
            "right" => Some(PositionX::Right),
            _ => None,
        }
    }
}

impl fmt::Display for PositionX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Vertical placement of the dialog inside the backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionY {
    Top,
    #[default]
    Center,
    Bottom,
}

impl PositionY {
    pub fn code(&self) -> &'static str {
        match self {
            PositionY::Top => "top",
            PositionY::Center => "center",
            PositionY::Bottom => "bottom",
        }
    }

    pub fn all() -> Vec<PositionY> {
        vec![PositionY::Top, PositionY::Center, PositionY::Bottom]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "top" => Some(PositionY::Top),
            "center" => Some(PositionY::Center),
            "bottom" => Some(PositionY::Bottom),
            _ => None,
        }
    }
}

impl fmt::Display for PositionY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
