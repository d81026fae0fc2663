use crate::prefs::{self, Preferences};
use crate::puzzle::PuzzleState;
use crate::theme::{Theme, ThemeKind};
use crossterm::event::{KeyCode, KeyEvent};
use sunvale_core::Color;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// The playable color puzzle
    ColorPuzzle,
    /// Placeholder screen; the parser has no logic behind it yet
    CartographyParser,
}

/// Focusable controls on the puzzle tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Target,
    Slot(usize),
    AddSlot,
    RemoveSlot,
    Solve,
}

/// The main application state
pub struct App {
    /// Puzzle view model
    pub puzzle: PuzzleState,
    /// Active tab
    pub tab: Tab,
    /// Focused control on the puzzle tab
    pub focus: Focus,
    /// Current theme choice
    pub theme_kind: ThemeKind,
    /// Resolved theme palette
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
}

impl App {
    /// Create a new app with a randomized puzzle.
    pub fn new(slot_count: usize, theme_kind: ThemeKind) -> App {
        App {
            puzzle: PuzzleState::random(slot_count),
            tab: Tab::ColorPuzzle,
            focus: Focus::Target,
            theme_kind,
            theme: Theme::of(theme_kind),
            message: None,
            message_timer: 0,
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Focusable controls in traversal order. The Remove Slot control is
    /// hidden while the board is at its single-slot minimum, matching the
    /// original layout.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Target];
        for i in 0..self.puzzle.slot_count() {
            order.push(Focus::Slot(i));
        }
        order.push(Focus::AddSlot);
        if self.puzzle.slot_count() > 1 {
            order.push(Focus::RemoveSlot);
        }
        order.push(Focus::Solve);
        order
    }

    fn move_focus(&mut self, delta: i32) {
        let order = self.focus_order();
        let len = order.len() as i32;
        let current = order
            .iter()
            .position(|&f| f == self.focus)
            .unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = order[next];
    }

    /// Put the focus back on a control that still exists after a slot
    /// count change.
    fn clamp_focus(&mut self) {
        let count = self.puzzle.slot_count();
        match self.focus {
            Focus::Slot(i) if i >= count => self.focus = Focus::Slot(count - 1),
            Focus::RemoveSlot if count <= 1 => self.focus = Focus::AddSlot,
            _ => {}
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.tab {
            Tab::ColorPuzzle => self.handle_puzzle_key(key),
            Tab::CartographyParser => self.handle_parser_key(key),
        }
    }

    fn handle_puzzle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            KeyCode::Tab | KeyCode::BackTab => {
                self.tab = Tab::CartographyParser;
            }

            // Focus traversal
            KeyCode::Left | KeyCode::Char('h') => self.move_focus(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(1),

            // Cycle the focused selector
            KeyCode::Up | KeyCode::Char('k') => self.cycle_focused(1),
            KeyCode::Down | KeyCode::Char('j') => self.cycle_focused(-1),

            // Direct color entry on the focused selector
            KeyCode::Char(c @ '1'..='8') => {
                let value = c.to_digit(10).unwrap() as u8;
                if let Some(color) = Color::from_value(value) {
                    self.set_focused_color(color);
                }
            }

            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),

            KeyCode::Char('a') => self.add_slot(),
            KeyCode::Char('x') => self.remove_slot(),
            KeyCode::Char('s') => self.puzzle.solve(),

            KeyCode::Char('r') => {
                self.puzzle.randomize();
                self.clamp_focus();
                self.show_message("New puzzle");
            }

            KeyCode::Char('t') => self.toggle_theme(),

            // The inventory is displayed but locked in this build
            KeyCode::Char('i') => {
                self.show_message("Inventory editing is disabled");
            }

            _ => {}
        }

        AppAction::Continue
    }

    fn handle_parser_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {
                self.tab = Tab::ColorPuzzle;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.show_message("The cartography parser is not implemented yet");
            }
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
        AppAction::Continue
    }

    fn cycle_focused(&mut self, delta: i32) {
        match self.focus {
            Focus::Target => {
                let target = self.puzzle.target();
                let next = if delta >= 0 { target.next() } else { target.prev() };
                self.puzzle.set_target(next);
            }
            Focus::Slot(i) => {
                if let Some(current) = self.puzzle.board().get(i) {
                    let next = if delta >= 0 { current.next() } else { current.prev() };
                    self.puzzle.set_slot(i, next);
                }
            }
            Focus::AddSlot | Focus::RemoveSlot | Focus::Solve => {}
        }
    }

    fn set_focused_color(&mut self, color: Color) {
        match self.focus {
            Focus::Target => self.puzzle.set_target(color),
            Focus::Slot(i) => {
                self.puzzle.set_slot(i, color);
            }
            Focus::AddSlot | Focus::RemoveSlot | Focus::Solve => {}
        }
    }

    fn activate_focused(&mut self) {
        match self.focus {
            // Selectors step forward, like clicking through a select
            Focus::Target | Focus::Slot(_) => self.cycle_focused(1),
            Focus::AddSlot => self.add_slot(),
            Focus::RemoveSlot => self.remove_slot(),
            Focus::Solve => self.puzzle.solve(),
        }
    }

    fn add_slot(&mut self) {
        self.puzzle.add_slot();
        self.show_message(&format!("Slot {} added", self.puzzle.slot_count()));
    }

    fn remove_slot(&mut self) {
        if self.puzzle.remove_slot() {
            self.clamp_focus();
        } else {
            self.show_message("At least one slot is required");
        }
    }

    fn toggle_theme(&mut self) {
        self.theme_kind = self.theme_kind.toggled();
        self.theme = Theme::of(self.theme_kind);
        let prefs = Preferences {
            theme: self.theme_kind,
        };
        match prefs::save(&prefs) {
            Ok(()) => self.show_message(&format!("{} theme", self.theme_kind)),
            Err(_) => self.show_message("Failed to save theme preference"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(4, ThemeKind::Night)
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Target);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.focus, Focus::Solve);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.focus, Focus::Target);
    }

    #[test]
    fn test_focus_order_hides_remove_at_minimum() {
        let app = App::new(1, ThemeKind::Night);
        assert!(!app.focus_order().contains(&Focus::RemoveSlot));
        let app = App::new(2, ThemeKind::Night);
        assert!(app.focus_order().contains(&Focus::RemoveSlot));
    }

    #[test]
    fn test_digit_sets_target_color() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.puzzle.target(), Color::Green);
    }

    #[test]
    fn test_digit_sets_slot_color() {
        let mut app = app();
        app.focus = Focus::Slot(2);
        app.handle_key(key(KeyCode::Char('7')));
        assert_eq!(app.puzzle.board().get(2), Some(Color::White));
    }

    #[test]
    fn test_cycle_target() {
        let mut app = app();
        app.puzzle.set_target(Color::Black);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.puzzle.target(), Color::Red);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.puzzle.target(), Color::Black);
    }

    #[test]
    fn test_add_and_remove_slots() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.puzzle.slot_count(), 5);
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.puzzle.slot_count(), 4);
    }

    #[test]
    fn test_remove_refused_at_minimum() {
        let mut app = App::new(1, ThemeKind::Night);
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.puzzle.slot_count(), 1);
        assert_eq!(
            app.message.as_deref(),
            Some("At least one slot is required")
        );
    }

    #[test]
    fn test_focus_clamped_after_removal() {
        let mut app = App::new(2, ThemeKind::Night);
        app.focus = Focus::Slot(1);
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.focus, Focus::Slot(0));

        let mut app = App::new(2, ThemeKind::Night);
        app.focus = Focus::RemoveSlot;
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.focus, Focus::AddSlot);
    }

    #[test]
    fn test_solve_key_fills_results() {
        let mut app = App::new(1, ThemeKind::Night);
        app.puzzle.set_target(Color::Green);
        app.puzzle.set_slot(0, Color::Red);
        assert!(app.puzzle.solution().is_none());
        app.handle_key(key(KeyCode::Char('s')));
        let steps = app.puzzle.solution().expect("solved");
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_tab_switching() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::CartographyParser);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::ColorPuzzle);
    }

    #[test]
    fn test_parser_tab_is_inert() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.message.as_deref(),
            Some("The cartography parser is not implemented yet")
        );
        // No puzzle state was touched.
        assert_eq!(app.puzzle.slot_count(), 4);
        assert!(app.puzzle.solution().is_none());
    }

    #[test]
    fn test_inventory_edits_rejected() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('i')));
        assert_eq!(
            app.message.as_deref(),
            Some("Inventory editing is disabled")
        );
    }

    #[test]
    fn test_message_expires_on_tick() {
        let mut app = app();
        app.show_message("hello");
        for _ in 0..30 {
            app.tick();
        }
        assert!(app.message.is_none());
    }
}
