use clap::ValueEnum;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The persisted theme choice.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Night,
    Light,
}

impl ThemeKind {
    /// The other theme, for the toggle key.
    pub fn toggled(&self) -> ThemeKind {
        match self {
            ThemeKind::Night => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Night,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Night => f.write_str("night"),
            ThemeKind::Light => f.write_str("light"),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Page and section titles
    pub title: Color,
    /// Panel border color
    pub border: Color,
    /// Dim labels (slot numbers, captions)
    pub label: Color,
    /// Focused control background
    pub focus_bg: Color,
    /// Disabled controls and locked panels
    pub disabled: Color,
    /// Status line text
    pub info: Color,
    /// Key binding hints
    pub key: Color,
    /// Accent for the active tab and the solve trigger
    pub accent: Color,
}

impl Theme {
    pub fn of(kind: ThemeKind) -> Theme {
        match kind {
            ThemeKind::Night => Theme::night(),
            ThemeKind::Light => Theme::light(),
        }
    }

    /// Night theme (default).
    pub fn night() -> Theme {
        Theme {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            title: Color::Rgb { r: 253, g: 224, b: 71 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            label: Color::Rgb { r: 140, g: 150, b: 180 },
            focus_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            disabled: Color::Rgb { r: 95, g: 100, b: 115 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            accent: Color::Rgb { r: 80, g: 180, b: 255 },
        }
    }

    /// Light theme.
    pub fn light() -> Theme {
        Theme {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            title: Color::Rgb { r: 180, g: 110, b: 20 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            label: Color::Rgb { r: 110, g: 110, b: 130 },
            focus_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            disabled: Color::Rgb { r: 170, g: 170, b: 185 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            accent: Color::Rgb { r: 30, g: 100, b: 200 },
        }
    }
}

/// Terminal color for a puzzle color's swatch, decoded from its hex value.
pub fn swatch(color: sunvale_core::Color) -> Color {
    use sunvale_core::Color as Puzzle;
    match color {
        Puzzle::Red => Color::Rgb { r: 0xef, g: 0x44, b: 0x44 },
        Puzzle::Orange => Color::Rgb { r: 0xf5, g: 0x9e, b: 0x42 },
        Puzzle::Yellow => Color::Rgb { r: 0xfd, g: 0xe0, b: 0x47 },
        Puzzle::Green => Color::Rgb { r: 0x22, g: 0xc5, b: 0x5e },
        Puzzle::Blue => Color::Rgb { r: 0x3b, g: 0x82, b: 0xf6 },
        Puzzle::Violet => Color::Rgb { r: 0xa7, g: 0x8b, b: 0xfa },
        Puzzle::White => Color::Rgb { r: 0xf9, g: 0xfa, b: 0xfb },
        Puzzle::Black => Color::Rgb { r: 0x18, g: 0x18, b: 0x1b },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeKind::Night.toggled(), ThemeKind::Light);
        assert_eq!(ThemeKind::Light.toggled(), ThemeKind::Night);
    }

    #[test]
    fn test_default_is_night() {
        assert_eq!(ThemeKind::default(), ThemeKind::Night);
    }

    #[test]
    fn test_swatch_matches_hex() {
        // Spot check that the terminal swatch tracks the canonical hex.
        assert_eq!(sunvale_core::Color::Red.hex(), "#ef4444");
        assert_eq!(
            swatch(sunvale_core::Color::Red),
            Color::Rgb { r: 0xef, g: 0x44, b: 0x44 }
        );
    }
}
