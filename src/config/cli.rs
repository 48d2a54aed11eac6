use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gpt-sync")]
#[command(about = "Command-line client for the gpt-api-sync management backend")]
pub struct CliConfig {
    /// Backend base URL (falls back to GPT_SYNC_BASE_URL, the config file, then http://localhost:7000)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to a TOML client config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// GET /
    Info,
    /// GET /status
    Status,
    /// GET /api/gpt-load
    GptLoad,
    /// GET /api/new-api
    NewApi,
    /// GET /config
    GetConfig,
    /// POST /config/reload
    ReloadConfig,
    /// PUT /config with the JSON document read from --file ("-" reads stdin)
    UpdateConfig {
        #[arg(long)]
        file: PathBuf,
    },
    /// POST /sync
    Sync,
}

impl Command {
    pub fn route(&self) -> (&'static str, &'static str) {
        match self {
            Command::Info => ("GET", "/"),
            Command::Status => ("GET", "/status"),
            Command::GptLoad => ("GET", "/api/gpt-load"),
            Command::NewApi => ("GET", "/api/new-api"),
            Command::GetConfig => ("GET", "/config"),
            Command::ReloadConfig => ("POST", "/config/reload"),
            Command::UpdateConfig { .. } => ("PUT", "/config"),
            Command::Sync => ("POST", "/sync"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from([
            "gpt-sync",
            "status",
            "--base-url",
            "http://127.0.0.1:7100",
            "--verbose",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Status));
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:7100"));
        assert!(cli.verbose);
        assert!(!cli.json_logs);
    }

    #[test]
    fn update_config_requires_file() {
        assert!(CliConfig::try_parse_from(["gpt-sync", "update-config"]).is_err());

        let cli =
            CliConfig::try_parse_from(["gpt-sync", "update-config", "--file", "config.json"])
                .unwrap();
        match cli.command {
            Command::UpdateConfig { file } => assert_eq!(file, PathBuf::from("config.json")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn routes_match_backend() {
        assert_eq!(Command::ReloadConfig.route(), ("POST", "/config/reload"));
        assert_eq!(Command::Sync.route(), ("POST", "/sync"));
        assert_eq!(Command::NewApi.route(), ("GET", "/api/new-api"));
    }
}
