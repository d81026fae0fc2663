use crate::app::{App, Focus, Tab};
use crate::theme::{swatch, Theme};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use sunvale_core::{Color, Inventory};

// Left column is fixed-width; the solution panel hangs off its right edge.
const LEFT_WIDTH: u16 = 58;
const SLOT_CARD_WIDTH: u16 = 11;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.theme.bg),
        Clear(ClearType::All)
    )?;

    render_tab_bar(stdout, app)?;

    match app.tab {
        Tab::ColorPuzzle => render_puzzle_tab(stdout, app)?,
        Tab::CartographyParser => render_parser_tab(stdout, app)?,
    }

    render_footer(stdout, app, term_height)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width, term_height)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_tab_bar(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    execute!(
        stdout,
        MoveTo(2, 1),
        SetForegroundColor(theme.title),
        Print("Sun Vale")
    )?;

    let tabs = [
        (Tab::ColorPuzzle, "Color Puzzle"),
        (Tab::CartographyParser, "Treasure Cartography Parser"),
    ];
    let mut x = 14;
    for (tab, label) in tabs {
        let color = if app.tab == tab {
            theme.accent
        } else {
            theme.label
        };
        let marker = if app.tab == tab { "▸ " } else { "  " };
        execute!(
            stdout,
            MoveTo(x, 1),
            SetForegroundColor(color),
            Print(format!("{}{}", marker, label))
        )?;
        x += label.len() as u16 + 5;
    }

    execute!(
        stdout,
        MoveTo(2, 2),
        SetForegroundColor(theme.border),
        Print("─".repeat(LEFT_WIDTH as usize + 26))
    )?;
    Ok(())
}

fn render_puzzle_tab(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    render_target(stdout, app, 2, 4)?;
    render_slots(stdout, app, 2, 7)?;
    render_buttons(stdout, app, 2, 12)?;
    render_inventory(stdout, app, 2, 14)?;
    render_solution(stdout, app, LEFT_WIDTH + 2, 4)?;
    Ok(())
}

fn render_target(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let target = app.puzzle.target();
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.label),
        Print("Target Color")
    )?;

    let focused = app.focus == Focus::Target;
    execute!(
        stdout,
        MoveTo(x, y + 1),
        SetForegroundColor(swatch(target)),
        Print("██ ")
    )?;
    render_selector(stdout, theme, target.name(), focused)?;
    Ok(())
}

fn render_slots(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.label),
        Print("Slots")
    )?;

    for (i, &color) in app.puzzle.board().slots().iter().enumerate() {
        let card_x = x + i as u16 * SLOT_CARD_WIDTH;
        let focused = app.focus == Focus::Slot(i);

        execute!(
            stdout,
            MoveTo(card_x, y + 1),
            SetForegroundColor(theme.label),
            Print(format!("Slot {}", i + 1))
        )?;
        execute!(
            stdout,
            MoveTo(card_x, y + 2),
            SetForegroundColor(swatch(color)),
            Print("██")
        )?;
        execute!(stdout, MoveTo(card_x, y + 3))?;
        render_selector(stdout, theme, color.name(), focused)?;
    }
    Ok(())
}

fn render_buttons(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let mut x = x;

    x = render_button(
        stdout,
        theme,
        x,
        y,
        "Add Slot",
        app.focus == Focus::AddSlot,
        true,
    )?;

    // Hidden at the single-slot minimum, like the original's conditional
    // Remove button.
    if app.puzzle.slot_count() > 1 {
        x = render_button(
            stdout,
            theme,
            x,
            y,
            "Remove Slot",
            app.focus == Focus::RemoveSlot,
            true,
        )?;
    }

    render_button(stdout, theme, x, y, "Solve", app.focus == Focus::Solve, true)?;
    Ok(())
}

fn render_inventory(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.label),
        Print("Inventory"),
        SetForegroundColor(theme.disabled),
        Print("  (editing disabled)")
    )?;

    let mut item_x = x;
    for (color, count) in visible_entries(app.puzzle.inventory()) {
        execute!(
            stdout,
            MoveTo(item_x, y + 1),
            SetForegroundColor(swatch(color)),
            Print("██"),
            SetForegroundColor(theme.disabled),
            Print(format!(" {:>2}", count))
        )?;
        item_x += 7;
    }
    Ok(())
}

/// Inventory entries worth drawing: out-of-stock colors are hidden, as in
/// the original inventory display.
fn visible_entries(inventory: &Inventory) -> impl Iterator<Item = (Color, u32)> + '_ {
    inventory.iter().filter(|&(_, count)| count > 0)
}

fn render_solution(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.title),
        Print("Solution")
    )?;

    match app.puzzle.solution() {
        None => {
            execute!(
                stdout,
                MoveTo(x, y + 2),
                SetForegroundColor(theme.info),
                Print("Press s to generate solution steps.")
            )?;
        }
        Some([]) => {
            execute!(
                stdout,
                MoveTo(x, y + 2),
                SetForegroundColor(theme.info),
                Print("No solution found for the current setup.")
            )?;
        }
        Some(steps) => {
            for (i, step) in steps.iter().enumerate() {
                execute!(
                    stdout,
                    MoveTo(x, y + 2 + i as u16),
                    SetForegroundColor(theme.fg),
                    Print(format!("{}. ", i + 1)),
                    SetForegroundColor(swatch(step.color)),
                    Print("██ "),
                    SetForegroundColor(theme.fg),
                    Print(step.to_string())
                )?;
            }
        }
    }
    Ok(())
}

fn render_parser_tab(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    execute!(
        stdout,
        MoveTo(2, 4),
        SetForegroundColor(theme.title),
        Print("Treasure Cartography Parser")
    )?;
    execute!(
        stdout,
        MoveTo(2, 6),
        SetForegroundColor(theme.info),
        Print("Chart dig sites from a treasure map transcript.")
    )?;
    render_button(stdout, theme, 2, 8, "Parse", false, false)?;
    execute!(
        stdout,
        MoveTo(2, 10),
        SetForegroundColor(theme.disabled),
        Print("This tool is not wired up yet.")
    )?;
    Ok(())
}

/// Draw a select-style control; focused controls get the focus background.
fn render_selector(
    stdout: &mut io::Stdout,
    theme: &Theme,
    label: &str,
    focused: bool,
) -> io::Result<()> {
    if focused {
        execute!(stdout, SetBackgroundColor(theme.focus_bg))?;
    }
    execute!(
        stdout,
        SetForegroundColor(theme.fg),
        Print(format!("{:<8}", label)),
        SetBackgroundColor(theme.bg)
    )?;
    Ok(())
}

/// Draw a button; returns the x position just past it.
fn render_button(
    stdout: &mut io::Stdout,
    theme: &Theme,
    x: u16,
    y: u16,
    label: &str,
    focused: bool,
    enabled: bool,
) -> io::Result<u16> {
    let fg = if !enabled {
        theme.disabled
    } else if focused {
        theme.fg
    } else {
        theme.accent
    };
    if focused {
        execute!(stdout, SetBackgroundColor(theme.focus_bg))?;
    }
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(fg),
        Print(format!("[ {} ]", label)),
        SetBackgroundColor(theme.bg)
    )?;
    Ok(x + label.len() as u16 + 6)
}

fn render_footer(stdout: &mut io::Stdout, app: &App, term_height: u16) -> io::Result<()> {
    let theme = &app.theme;
    let y = term_height.saturating_sub(2);
    let hints = match app.tab {
        Tab::ColorPuzzle => {
            "←/→ focus  ↑/↓ color  1-8 set  a add  x remove  s solve  r randomize  t theme  Tab parser  q quit"
        }
        Tab::CartographyParser => "Tab puzzle  t theme  q quit",
    };
    execute!(
        stdout,
        MoveTo(2, y),
        SetForegroundColor(theme.key),
        Print(hints)
    )?;
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let y = term_height.saturating_sub(1);
    let x = (term_width.saturating_sub(msg.len() as u16)) / 2;
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.accent),
        Print(msg)
    )?;
    Ok(())
}
