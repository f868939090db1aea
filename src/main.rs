//! Granary - a terminal-based viewer of COVID-19 case rates and food insecurity.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use granary::app::App;
use granary::data::{build_all_countries, build_selected, load_confirmed_cases, FoodInsecurity};
use granary::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "granary")]
#[command(
    about = "A terminal-based viewer of COVID-19 case rates vs food insecurity",
    long_about = None
)]
struct Args {
    /// Path to the exported food-security JSON feed
    #[arg(long, value_name = "FILE", default_value = "datasets/food_security.json")]
    food_security: PathBuf,

    /// Path to the confirmed-cases CSV dataset
    #[arg(long, value_name = "FILE", default_value = "datasets/confirmed_cases.csv")]
    confirmed_cases: PathBuf,

    /// Countries for the selected-series view (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "Canada,United States,Japan,Australia,United Kingdom"
    )]
    countries: Vec<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Granary");
    }

    for path in [&args.food_security, &args.confirmed_cases] {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    // Load and join before touching the terminal. A configured country that
    // is missing from the joined data must surface as a plain process error,
    // never a half-drawn screen.
    let food_insecurity = FoodInsecurity::from_json(&args.food_security)?;
    let confirmed_cases = load_confirmed_cases(&args.confirmed_cases)?;
    let all = build_all_countries(&food_insecurity.percentages, &confirmed_cases);
    let selected = build_selected(&all, &args.countries)?;
    tracing::info!(
        "Joined {} countries, {} selected",
        all.len(),
        selected.len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(all, selected);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Granary exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Search mode - handle separately
                if app.search.is_active() {
                    match key.code {
                        KeyCode::Enter => app.submit_search(),
                        KeyCode::Esc => app.search.cancel(),
                        KeyCode::Backspace => app.search.backspace(),
                        KeyCode::Char(c) => app.search.input(c),
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Series toggle
                    (KeyModifiers::NONE, KeyCode::Tab)
                    | (KeyModifiers::NONE, KeyCode::Char('t')) => {
                        app.toggle_view();
                    },

                    // Fit line
                    (KeyModifiers::NONE, KeyCode::Char('f')) => {
                        app.toggle_fit();
                    },

                    // Point cursor
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.cursor_left();
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.cursor_right();
                    },

                    // Vim navigation
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        if pending_g {
                            app.cursor_first();
                            pending_g = false;
                        } else {
                            pending_g = true;
                        }
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        app.cursor_last();
                    },

                    // Search
                    (KeyModifiers::NONE, KeyCode::Char('/')) => {
                        app.search.start();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('n')) => {
                        app.next_match();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('N')) => {
                        app.prev_match();
                    },

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.copy_series();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_point();
                    },

                    // Theme and help
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.show_help();
                    },

                    // Escape - clear the search highlight
                    (KeyModifiers::NONE, KeyCode::Esc) => {
                        app.search.cancel();
                    },

                    _ => {
                        pending_g = false;
                    },
                }
            }
        }
    }
}
