use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight puzzle colors.
///
/// Every color carries a fixed value in `1..=8`; the arithmetic of the
/// whole puzzle runs on these values. The discriminant order below is the
/// enumeration order the solver scans candidates in, so it must stay
/// sorted by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    White,
    Black,
}

impl Color {
    /// All colors in value order.
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::White,
        Color::Black,
    ];

    /// The numeric value of this color, in `1..=8`.
    pub fn value(&self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Orange => 2,
            Color::Yellow => 3,
            Color::Green => 4,
            Color::Blue => 5,
            Color::Violet => 6,
            Color::White => 7,
            Color::Black => 8,
        }
    }

    /// Look a color up by its value. Values outside `1..=8` have no color.
    pub fn from_value(value: u8) -> Option<Color> {
        match value {
            1 => Some(Color::Red),
            2 => Some(Color::Orange),
            3 => Some(Color::Yellow),
            4 => Some(Color::Green),
            5 => Some(Color::Blue),
            6 => Some(Color::Violet),
            7 => Some(Color::White),
            8 => Some(Color::Black),
            _ => None,
        }
    }

    /// Display name of the color.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Violet => "Violet",
            Color::White => "White",
            Color::Black => "Black",
        }
    }

    /// Hex swatch used by every frontend.
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red => "#ef4444",
            Color::Orange => "#f59e42",
            Color::Yellow => "#fde047",
            Color::Green => "#22c55e",
            Color::Blue => "#3b82f6",
            Color::Violet => "#a78bfa",
            Color::White => "#f9fafb",
            Color::Black => "#18181b",
        }
    }

    /// Next color in value order, wrapping from Black back to Red.
    pub fn next(&self) -> Color {
        let idx = (self.value() as usize) % 8;
        Color::ALL[idx]
    }

    /// Previous color in value order, wrapping from Red back to Black.
    pub fn prev(&self) -> Color {
        let idx = (self.value() as usize + 6) % 8;
        Color::ALL[idx]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bijection() {
        for color in Color::ALL {
            assert_eq!(Color::from_value(color.value()), Some(color));
        }
    }

    #[test]
    fn test_from_value_bounds() {
        assert_eq!(Color::from_value(0), None);
        assert_eq!(Color::from_value(9), None);
    }

    #[test]
    fn test_all_is_sorted_by_value() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.value() as usize, i + 1);
        }
    }

    #[test]
    fn test_order_matches_value() {
        assert!(Color::Red < Color::Black);
        assert!(Color::Green < Color::Blue);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Violet.to_string(), "Violet");
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Color::Black.next(), Color::Red);
        assert_eq!(Color::Red.prev(), Color::Black);
        assert_eq!(Color::Yellow.next(), Color::Green);
        assert_eq!(Color::Green.prev(), Color::Yellow);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Color::Blue).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Blue);
    }
}
