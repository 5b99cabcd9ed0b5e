use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokedeck_core::{
    client::PokeApiClient,
    settings::{Settings, CONFIG_FILE},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{stdout, Stdout};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
mod ui;
use ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let (settings, settings_error) = match Settings::new() {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    setup_tracing(&settings.log_file)?;
    if let Some(e) = settings_error {
        warn!(error = %e, "failed to load settings, using defaults");
    }
    info!(base_url = %settings.api_base_url, "starting pokedeck");

    let client = Arc::new(PokeApiClient::new(
        &settings.api_base_url,
        settings.request_timeout(),
    )?);

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, CONFIG_FILE, client);

    let result = app.run(&mut terminal).await;

    restore_terminal(&mut terminal)?;
    info!("pokedeck shut down");

    result
}

/// The terminal belongs to the UI, so logs go to a file.
fn setup_tracing(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pokedeck=info,pokedeck_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
