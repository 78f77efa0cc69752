mod app;
mod config;
mod error;
mod ui;

use std::fs;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config.log_path)?;

    let mut app = app::App::new(config)?;
    app.run()
}

/// Logs go to a file: stdout belongs to the alternate screen.
fn init_tracing(log_path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(log_path).parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kopilka_tui=info,engine=info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
