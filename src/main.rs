use std::error::Error;
use std::io;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use human_panic::setup_panic;
use log::info;
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use dnazap::{App, Config, logging, ui::render_ui};

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();

    let config = Config::from_env();
    logging::init_logging(&config)?;
    logging::log_system_info(&config);

    enable_raw_mode()?;
    let result = with_restore(|| run_terminal(&config), restore_terminal);

    if let Err(e) = &result {
        logging::log_critical_error(&e.to_string(), Some("terminal session"));
    }
    logging::log_shutdown();
    result
}

/// Run `body`, then `restore` whether or not `body` failed.
///
/// The body's error wins over a restore error.
fn with_restore<T, B, R>(body: B, restore: R) -> Result<T, Box<dyn Error>>
where
    B: FnOnce() -> Result<T, Box<dyn Error>>,
    R: FnOnce() -> Result<(), Box<dyn Error>>,
{
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}

fn run_terminal(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    run(&mut terminal, &mut app)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    while app.is_running() {
        terminal.draw(|f| render_ui(f, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    info!("Interrupted with Ctrl-C");
                    app.exit();
                }
                KeyCode::Char(c) => app.on_key(c),
                KeyCode::Backspace => app.on_backspace(),
                KeyCode::Enter => app.on_enter(),
                KeyCode::Esc => app.on_escape(),
                _ => {}
            }
        }
    }

    Ok(())
}
