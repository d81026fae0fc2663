mod app;
mod prefs;
mod puzzle;
mod render;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::Duration;
use theme::ThemeKind;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Terminal edition of the Sun Vale color puzzle.
#[derive(Parser)]
#[command(name = "sunvale", version, about)]
struct Cli {
    /// Number of slots to start with (minimum 1)
    #[arg(long, default_value_t = puzzle::INITIAL_SLOTS)]
    slots: usize,

    /// Override the saved theme for this session
    #[arg(long, value_enum)]
    theme: Option<ThemeKind>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let theme = cli.theme.unwrap_or_else(|| prefs::load().theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, cli.slots.max(1), theme);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, slots: usize, theme: ThemeKind) -> io::Result<()> {
    let mut app = App::new(slots, theme);

    loop {
        render::render(stdout, &app)?;
        stdout.flush()?;

        // Handle input with a timeout so the message timer keeps moving
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        app.tick();
    }

    Ok(())
}
