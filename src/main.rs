mod app;
mod config;
mod domain;
mod error;
mod input;
mod logging;
mod opener;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use opener::SystemOpener;
use persistence::{atomic_write, config_file, ensure_data_dir, get_data_dir, init_local_data_dir, JsonStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "pomodesk")]
#[command(about = "A terminal pomodoro timer with a task list, progress view and study resources", long_about = None)]
struct Cli {
    /// Config file. Defaults to config.toml in the data directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Data file. Overrides storage.data_file from the config.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomodesk directory in the current directory
    Init,
    /// Print a Markdown report of tasks, progress and resources
    Report {
        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init) => {
            let dir = init_local_data_dir()?;
            Config::default()
                .save_to_file(&config_file(&dir))
                .context("Failed to write default config")?;
            println!("Initialized pomodesk directory: {}", dir.display());
            println!();
            println!("Pomodesk will now keep its data in this local directory.");
            println!("Run 'pomodesk' to start a session.");
            Ok(())
        }
        Some(Commands::Report { output }) => {
            let dir = get_data_dir()?;
            let config = load_config(&cli, &dir);
            let store = JsonStore::new(data_path(&cli, &config, &dir));
            let data = store.load()?;

            let report = report::generate_report(&data, chrono::Local::now().date_naive());
            match output {
                Some(path) => {
                    atomic_write(path, &report)?;
                    println!("Report generated: {}", path.display());
                }
                None => print!("{}", report),
            }
            Ok(())
        }
        None => run_tui(&cli),
    }
}

/// Config from `--config` or the data directory; problems fall back to defaults
fn load_config(cli: &Cli, data_dir: &Path) -> Config {
    let path = cli.config.clone().unwrap_or_else(|| config_file(data_dir));
    let load = Config::load_with_fallback(&path);
    if let Some(err) = &load.error {
        warn!(path = %path.display(), error = %err, "using default config");
        eprintln!("Warning: {}", err);
    }
    load.config
}

fn data_path(cli: &Cli, config: &Config, data_dir: &Path) -> PathBuf {
    cli.data
        .clone()
        .unwrap_or_else(|| config.data_file_in(data_dir))
}

fn run_tui(cli: &Cli) -> Result<()> {
    let data_dir = ensure_data_dir()?;
    logging::init(&data_dir)?;
    info!(dir = %data_dir.display(), "starting pomodesk");

    let config = load_config(cli, &data_dir);
    let store = JsonStore::new(data_path(cli, &config, &data_dir));
    let mut app = AppState::open(store, &config, Box::new(SystemOpener));

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

    // Save on exit
    if let Err(e) = app.save_on_exit() {
        error!(error = %e, "save on exit failed");
        eprintln!("Error saving data: {}", e);
    }

    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
    }
    info!(pomodoros = app.data.pomodoro_count, "exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let refresh = ticker::refresh_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Sleep until the next tick is due or the UI needs a refresh
        if event::poll(app.wait_budget(Instant::now(), refresh))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        let result = app.poll_timer(Instant::now());
        app.report(result);
    }
}
