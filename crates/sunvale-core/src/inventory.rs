use crate::Color;
use serde::{Deserialize, Serialize};

/// Default supply of each color in a fresh inventory.
pub const DEFAULT_SUPPLY: u32 = 10;

/// The player's supply of placeable colors.
///
/// The solver treats counts purely as availability gates: a color with a
/// zero count is never considered, but counts are not decremented when a
/// placement is accepted. Depletion is deliberately out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u32; 8],
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory {
            counts: [DEFAULT_SUPPLY; 8],
        }
    }
}

impl Inventory {
    /// A fresh inventory with [`DEFAULT_SUPPLY`] of every color.
    pub fn new() -> Inventory {
        Inventory::default()
    }

    /// An inventory with the same count of every color.
    pub fn uniform(count: u32) -> Inventory {
        Inventory { counts: [count; 8] }
    }

    /// Available count for one color.
    pub fn count(&self, color: Color) -> u32 {
        self.counts[color.value() as usize - 1]
    }

    /// Set the count for one color.
    pub fn set_count(&mut self, color: Color, count: u32) {
        self.counts[color.value() as usize - 1] = count;
    }

    /// Iterate `(color, count)` pairs in color value order. The solver
    /// relies on this order for its tie-breaking.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL.iter().map(move |&color| (color, self.count(color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_supply() {
        let inventory = Inventory::new();
        for color in Color::ALL {
            assert_eq!(inventory.count(color), 10);
        }
    }

    #[test]
    fn test_set_count() {
        let mut inventory = Inventory::new();
        inventory.set_count(Color::Blue, 0);
        assert_eq!(inventory.count(Color::Blue), 0);
        assert_eq!(inventory.count(Color::Green), 10);
    }

    #[test]
    fn test_iter_in_value_order() {
        let inventory = Inventory::uniform(3);
        let colors: Vec<Color> = inventory.iter().map(|(c, _)| c).collect();
        assert_eq!(colors, Color::ALL.to_vec());
        assert!(inventory.iter().all(|(_, n)| n == 3));
    }
}
