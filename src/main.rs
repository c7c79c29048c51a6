//! People TUI - edit a library patron from the terminal
//!
//! A Ratatui front end for the library's people endpoint. The edit form is
//! submitted as `PATCH /people/{id}`; success returns to the people listing,
//! failures are shown in a modal alert.

mod app;
mod config;
mod people;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use people::{PeopleClient, PersonId};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::PersonEditForm;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use submission::FormInterceptor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Opts {
    /// Identifier of the person to edit.
    id: PersonId,

    /// Current name, prefilled into the form.
    #[arg(long)]
    name: Option<String>,

    /// Current year of birth, prefilled into the form.
    #[arg(long)]
    year_of_birth: Option<i64>,

    /// Base URL of the library server.
    #[arg(long, env = "PEOPLE_TUI_BASE_URL")]
    base_url: Option<String>,

    /// Store the effective base URL in the config file.
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "people_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let opts = Opts::parse();

    let mut config = TuiConfig::load()?;
    let base_url = config.resolve_base_url(opts.base_url.as_deref());
    let client = PeopleClient::new(&base_url)?;
    tracing::info!(base_url = %client.base_url(), person_id = %opts.id, "Starting");

    if opts.save_config {
        config.base_url = Some(base_url);
        config.save()?;
    }

    let form = PersonEditForm::with_values(opts.name, opts.year_of_birth);
    let mut app = App::new(opts.id, form, FormInterceptor::new(Arc::new(client)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Handlers of resolved requests run on this loop, between input events
        app.poll_pending().await;

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a request is in flight so its outcome shows promptly
        let poll_duration = if app.pending_count() > 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key);
            }
        }

        // Let spawned requests make progress
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
