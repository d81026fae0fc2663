use crate::Color;
use serde::{Deserialize, Serialize};

/// The ordered slot sequence of a puzzle.
///
/// A board always holds at least one slot. Slots are indexed from 0 on
/// the left; display surfaces number them from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    slots: Vec<Color>,
}

/// Wire shape of a board; deserialization funnels through [`Board::new`]
/// so an empty slot list is rejected rather than admitted.
#[derive(Deserialize)]
struct BoardRepr {
    slots: Vec<Color>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = String;

    fn try_from(repr: BoardRepr) -> Result<Board, String> {
        Board::new(repr.slots).ok_or_else(|| "a board needs at least one slot".to_string())
    }
}

impl Board {
    /// Create a board from a slot list. Returns `None` for an empty list.
    pub fn new(slots: Vec<Color>) -> Option<Board> {
        if slots.is_empty() {
            return None;
        }
        Some(Board { slots })
    }

    /// Append a slot at the end.
    pub fn push(&mut self, color: Color) {
        self.slots.push(color);
    }

    /// Remove the last slot. A single-slot board keeps its slot and
    /// returns `None`.
    pub fn pop(&mut self) -> Option<Color> {
        if self.slots.len() <= 1 {
            return None;
        }
        self.slots.pop()
    }

    /// The color at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.slots.get(index).copied()
    }

    /// Set the color at `index`. Returns false when out of range.
    pub fn set(&mut self, index: usize, color: Color) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Number of slots, always >= 1.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// A board is never empty; provided for clippy's sake.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The slots as a slice, left to right.
    pub fn slots(&self) -> &[Color] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(Board::new(Vec::new()).is_none());
    }

    #[test]
    fn test_pop_keeps_one_slot() {
        let mut board = Board::new(vec![Color::Red, Color::Blue]).unwrap();
        assert_eq!(board.pop(), Some(Color::Blue));
        assert_eq!(board.pop(), None);
        assert_eq!(board.len(), 1);
        assert_eq!(board.get(0), Some(Color::Red));
    }

    #[test]
    fn test_deserialize_rejects_empty_slots() {
        let result = serde_json::from_str::<Board>(r#"{"slots":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let board = Board::new(vec![Color::Red, Color::Green]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_push_and_set() {
        let mut board = Board::new(vec![Color::Red]).unwrap();
        board.push(Color::Black);
        assert_eq!(board.len(), 2);
        assert!(board.set(1, Color::Green));
        assert_eq!(board.get(1), Some(Color::Green));
        assert!(!board.set(2, Color::Green));
        assert_eq!(board.get(2), None);
    }
}
