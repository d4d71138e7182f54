mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod ticker;
mod timer;
mod ui;

use app::AppState;
use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Day;
use persistence::{ensure_data_dir, init_local_data_dir, load_metadata, meta_file, TaskRecords};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "dayboard")]
#[command(about = "A terminal weekly task board with per-task countdown timers", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .dayboard, then ~/.dayboard
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Day tab to open on start (Monday..Saturday)
    #[arg(long)]
    day: Option<Day>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .dayboard directory in the current directory
    Init,
    /// Print the saved tasks of one day, or of the whole week
    List {
        /// Day to print. Defaults to every day.
        day: Option<Day>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            println!("Initialized dayboard directory: {}", data_dir.display());
            println!();
            println!("Dayboard will now use this local directory for task storage.");
            println!("Run 'dayboard' to start tracking tasks.");
            Ok(())
        }
        Some(Commands::List { day }) => {
            let records = TaskRecords::new(ensure_data_dir(cli.dir.as_deref())?);
            let days = match day {
                Some(day) => vec![day],
                None => Day::ALL.to_vec(),
            };
            for day in days {
                println!("{}", day);
                for name in records.load(day)? {
                    println!("  - {}", name);
                }
            }
            Ok(())
        }
        None => run_tui(cli.dir, cli.day),
    }
}

/// Pick the tab to open: explicit choice, today, last session, Monday
fn starting_day(requested: Option<Day>, today: Option<Day>, last_active: Option<Day>) -> Day {
    requested.or(today).or(last_active).unwrap_or(Day::Monday)
}

fn run_tui(dir: Option<PathBuf>, requested_day: Option<Day>) -> Result<()> {
    let data_dir = ensure_data_dir(dir.as_deref())?;

    // Logging is best effort; the board works without it
    let _logger = match logging::init_logging(&data_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let last_active = match load_metadata(meta_file(&data_dir)) {
        Ok(metadata) => metadata.last_active_day,
        Err(e) => {
            log::warn!("ignoring unreadable metadata: {:#}", e);
            None
        }
    };
    let active_day = starting_day(requested_day, Day::today(), last_active);

    let mut app = AppState::load(TaskRecords::new(&data_dir), active_day)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.save_metadata() {
        log::warn!("failed to save metadata: {:#}", e);
        eprintln!("Error saving state: {}", e);
    }

    if let Err(err) = &result {
        log::error!("dayboard stopped: {:#}", err);
    }
    log::info!("dayboard exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up early when a countdown step is due sooner than the poll rate
        let timeout = app
            .timers
            .next_due()
            .map(|due| due.saturating_duration_since(Instant::now()).min(tick_rate))
            .unwrap_or(tick_rate);

        // Handle events with timeout for ticking
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Step any countdown that came due
        app.tick(Instant::now());
    }
}
