use std::path::PathBuf;

use clap::Parser;
use ideas_gateway::GatewaySettings;

use super::history::Location;
use super::logging::LogDestination;

/// Browse the ideas listing from a terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "ideas", version, about)]
pub struct AppConfig {
    /// Base URL of the content service.
    #[arg(long, env = "IDEAS_API_BASE_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Listing endpoint path, resolved against the base URL.
    #[arg(long, env = "IDEAS_API_ENDPOINT", default_value = "/api/ideas")]
    pub endpoint: String,

    /// Location to open, e.g. `/ideas?page=2&pageSize=20&sort=Oldest`.
    #[arg(long)]
    pub location: Option<String>,

    /// Directory for the session file and the log file.
    #[arg(long, env = "IDEAS_STATE_DIR", default_value = ".")]
    pub state_dir: PathBuf,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Ignore the location saved by the previous session.
    #[arg(long)]
    pub no_restore: bool,
}

impl AppConfig {
    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.base_url.clone(),
            endpoint: self.endpoint.clone(),
            ..GatewaySettings::default()
        }
    }

    /// Explicit `--location` wins over the restored one, which wins over the listing root.
    pub fn initial_location(&self, restored: Option<Location>) -> Location {
        if let Some(raw) = self.location.as_deref() {
            return Location::parse(raw);
        }
        if self.no_restore {
            return Location::listing_root();
        }
        restored.unwrap_or_else(Location::listing_root)
    }
}
