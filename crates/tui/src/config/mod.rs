use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/kopilka.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the ledger blob lives.
    pub data_path: String,
    pub log_path: String,
    /// IANA timezone used for displaying record dates.
    pub timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: "config/expenses.json".to_string(),
            log_path: "config/kopilka.log".to_string(),
            timezone: "Europe/Moscow".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses the configured timezone, falling back to the default when the
    /// name is unknown.
    pub fn tz(&self) -> chrono_tz::Tz {
        match self.timezone.parse() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!(timezone = %self.timezone, "unknown timezone, using Europe/Moscow");
                chrono_tz::Europe::Moscow
            }
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "kopilka_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the ledger file path.
    #[arg(long)]
    data_path: Option<String>,
    /// Override the log file path.
    #[arg(long)]
    log_path: Option<String>,
    /// Override the display timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("KOPILKA"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(data_path) = args.data_path {
        settings.data_path = data_path;
    }
    if let Some(log_path) = args.log_path {
        settings.log_path = log_path;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }

    Ok(settings)
}
