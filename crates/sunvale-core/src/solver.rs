use crate::{Board, Color, Inventory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single solution step: place `color` on the slot numbered `slot`.
///
/// `slot` is 1-based to match the display convention ("Slot 1" is board
/// index 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub slot: usize,
    pub color: Color,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot {}: {}", self.slot, self.color)
    }
}

/// Greedy single-pass search for a placement sequence that leaves slot 0
/// showing `target`.
///
/// Slots are processed from the last index down to 0. A slot that already
/// shows the target is skipped. For any other slot, candidate colors are
/// scanned in value order and the first available one whose sum lands on
/// the target is taken; its overflow carry, if any, is pushed into the
/// slot to the left before that slot is processed. There is no
/// backtracking: a slot no candidate reaches is left as-is, and success is
/// judged solely by slot 0 after the pass. An empty result means "no
/// solution found under this strategy", not a proof of unsolvability.
///
/// Inventory counts gate candidates but are never decremented; a color
/// with a positive count may appear in the result any number of times.
pub fn find_solution(target: Color, board: &Board, inventory: &Inventory) -> Vec<Placement> {
    let target_value = target.value();
    let mut values: Vec<u8> = board.slots().iter().map(Color::value).collect();
    let mut solution = Vec::new();

    for i in (0..values.len()).rev() {
        let current = values[i];
        if current == target_value {
            continue;
        }

        for (color, count) in inventory.iter() {
            if count == 0 {
                continue;
            }

            let mut new_value = current + color.value();
            let mut carry = 0;
            if new_value > 8 {
                carry = 1;
                new_value -= 8;
            } else if new_value == 8 {
                // Landing exactly on 8 still overflows, but the value
                // itself stays 8.
                carry = 1;
            }

            if new_value == target_value {
                solution.push(Placement { slot: i + 1, color });
                values[i] = new_value;
                cascade_carry(&mut values, i.checked_sub(1), carry);
                break;
            }
        }
    }

    if values[0] != target_value {
        return Vec::new();
    }
    solution
}

/// Push an overflow carry into the slot at `index`, wrapping past 8.
///
/// A carry off the left edge of the board (`index` of `None`) is dropped.
/// The cascade is a single level: wrapping here never generates a further
/// carry.
fn cascade_carry(values: &mut [u8], index: Option<usize>, carry: u8) {
    let index = match index {
        Some(index) if carry != 0 => index,
        _ => return,
    };
    values[index] += carry;
    if values[index] > 8 {
        values[index] -= 8;
    }
}
