use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use dayboard::app::App;
use dayboard::board::{Board, view};
use dayboard::config::Config;
use dayboard::event::{AppEvent, EventHandler};
use dayboard::store::JsonFileStorage;
use dayboard::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "dayboard",
    version,
    about = "Daily mission board: one thing to learn, create and move"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Directory holding board.json")]
    data_dir: Option<PathBuf>,

    #[arg(short, long, help = "Print the board in print-friendly form and exit")]
    print: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}; using default config");
        Config::default()
    });
    let themes = Theme::available_themes();
    if let Some(theme) = cli.theme {
        if !themes.contains(&theme) {
            bail!("Unknown theme '{theme}' (available: {})", themes.join(", "));
        }
        config.theme = theme;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.to_string_lossy().to_string();
    }
    config.validate(&themes);

    let storage = JsonFileStorage::with_base_dir(config.data_dir())?;

    if cli.print {
        init_logging(None);
        let board = Board::open(Box::new(storage));
        print!("{}", view::print_view(board.state(), Local::now().date_naive()));
        return Ok(());
    }

    init_logging(Some(storage.base_dir()));
    log::info!("board file: {}", storage.path().display());

    let theme = Theme::load(&config.theme).unwrap_or_default();
    let board = Board::open(Box::new(storage));
    let mut app = App::new(board, config, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(app.config.tick_rate());

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("{err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Logging is off unless RUST_LOG is set. The TUI owns the terminal, so
/// interactive runs log to `dayboard.log` in the data directory.
fn init_logging(log_dir: Option<&Path>) {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let mut builder = env_logger::Builder::from_default_env();
    builder.format_timestamp_millis();
    if let Some(dir) = log_dir {
        let path = dir.join("dayboard.log");
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))
        {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Warning: {e:#}; logging disabled");
                return;
            }
        }
    }
    builder.init();
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| dayboard::ui::render(frame, app))?;

        let event = events.next()?;
        let now = Instant::now();
        match event {
            AppEvent::Key(key) => dayboard::input::handle_key(app, key, now),
            AppEvent::Tick | AppEvent::Resize => {}
        }
        // Steady typing starves Tick events, so advance timers on every event.
        app.on_tick(now);

        if app.should_quit {
            return Ok(());
        }
    }
}
