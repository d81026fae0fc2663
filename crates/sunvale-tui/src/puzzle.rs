use rand::Rng;
use sunvale_core::{find_solution, Board, Color, Inventory, Placement};

/// Slot count of a freshly randomized puzzle.
pub const INITIAL_SLOTS: usize = 4;

/// Color appended by the Add Slot control.
pub const NEW_SLOT_COLOR: Color = Color::Black;

/// The puzzle as the view sees it: target, board, inventory, and the
/// outcome of the last solve. `solution` stays `None` until the first
/// solve so the results panel can show a placeholder.
pub struct PuzzleState {
    target: Color,
    board: Board,
    inventory: Inventory,
    solution: Option<Vec<Placement>>,
}

impl PuzzleState {
    /// A randomized puzzle with `slot_count` slots (at least one).
    pub fn random(slot_count: usize) -> PuzzleState {
        let mut rng = rand::thread_rng();
        let slots = (0..slot_count.max(1))
            .map(|_| random_color(&mut rng))
            .collect();
        PuzzleState {
            target: random_color(&mut rng),
            board: Board::new(slots).expect("slot count is at least one"),
            inventory: Inventory::new(),
            solution: None,
        }
    }

    /// Re-roll slots and target; the solution panel goes back to its
    /// placeholder.
    pub fn randomize(&mut self) {
        let count = self.board.len();
        let fresh = PuzzleState::random(count);
        self.target = fresh.target;
        self.board = fresh.board;
        self.solution = None;
    }

    pub fn target(&self) -> Color {
        self.target
    }

    pub fn set_target(&mut self, color: Color) {
        self.target = color;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn slot_count(&self) -> usize {
        self.board.len()
    }

    /// Append a new slot showing [`NEW_SLOT_COLOR`].
    pub fn add_slot(&mut self) {
        self.board.push(NEW_SLOT_COLOR);
    }

    /// Remove the last slot. Returns false when the board is already at
    /// its single-slot minimum.
    pub fn remove_slot(&mut self) -> bool {
        self.board.pop().is_some()
    }

    pub fn set_slot(&mut self, index: usize, color: Color) -> bool {
        self.board.set(index, color)
    }

    /// Run the solver and store the outcome.
    pub fn solve(&mut self) {
        self.solution = Some(find_solution(self.target, &self.board, &self.inventory));
    }

    /// Steps from the last solve, or `None` before the first one. An
    /// empty slice means the solver found nothing.
    pub fn solution(&self) -> Option<&[Placement]> {
        self.solution.as_deref()
    }
}

fn random_color(rng: &mut impl Rng) -> Color {
    Color::ALL[rng.gen_range(0..Color::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_respects_slot_count() {
        let puzzle = PuzzleState::random(6);
        assert_eq!(puzzle.slot_count(), 6);
        assert!(puzzle.solution().is_none());
    }

    #[test]
    fn test_random_clamps_to_one_slot() {
        let puzzle = PuzzleState::random(0);
        assert_eq!(puzzle.slot_count(), 1);
    }

    #[test]
    fn test_add_slot_appends_black() {
        let mut puzzle = PuzzleState::random(2);
        puzzle.add_slot();
        assert_eq!(puzzle.slot_count(), 3);
        assert_eq!(puzzle.board().get(2), Some(Color::Black));
    }

    #[test]
    fn test_remove_slot_keeps_minimum() {
        let mut puzzle = PuzzleState::random(2);
        assert!(puzzle.remove_slot());
        assert!(!puzzle.remove_slot());
        assert_eq!(puzzle.slot_count(), 1);
    }

    #[test]
    fn test_solve_stores_outcome() {
        let mut puzzle = PuzzleState::random(1);
        puzzle.set_target(Color::Green);
        puzzle.set_slot(0, Color::Red);
        puzzle.solve();
        let steps = puzzle.solution().expect("solved at least once");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].color, Color::Yellow);
    }

    #[test]
    fn test_solution_survives_edits_until_next_solve() {
        // The results panel reflects the last solve, not the live board.
        let mut puzzle = PuzzleState::random(1);
        puzzle.set_target(Color::Green);
        puzzle.set_slot(0, Color::Red);
        puzzle.solve();
        puzzle.set_slot(0, Color::Blue);
        assert!(puzzle.solution().is_some());
        puzzle.randomize();
        assert!(puzzle.solution().is_none());
    }
}
