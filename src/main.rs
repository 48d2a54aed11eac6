use clap::Parser;
use gpt_sync_client::config::toml_config::LogFormat;
use gpt_sync_client::utils::logger;
use gpt_sync_client::{
    ClientConfig, ClientError, CliConfig, Command, ConfigData, Result, SyncApiClient,
};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match ClientConfig::load(cli.base_url.clone(), cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    let verbose = cli.verbose || config.verbose;
    if cli.json_logs || config.log_format == LogFormat::Json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("Client config: {:?}", config);

    let client = SyncApiClient::from_config(&config);
    let (method, path) = cli.command.route();
    tracing::info!("{} {}{}", method, client.base_url(), path);

    match run(&client, &cli.command).await {
        Ok(body) => match serde_json::to_string_pretty(&body) {
            Ok(pretty) => println!("{}", pretty),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::error!("❌ {} {} failed: {}", method, path, e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(client: &SyncApiClient, command: &Command) -> Result<Value> {
    match command {
        Command::Info => client.get_service_info().await,
        Command::Status => client.get_service_status().await,
        Command::GptLoad => client.get_gpt_load_info().await,
        Command::NewApi => client.get_new_api_info().await,
        Command::GetConfig => client.get_config().await,
        Command::ReloadConfig => client.reload_config().await,
        Command::UpdateConfig { file } => {
            let document = read_json_document(file)?;
            if ConfigData::from_value(document.clone()).is_ok_and(|c| c.has_masked_secrets()) {
                tracing::info!("Masked secrets found; the backend keeps their stored values");
            }
            client.update_config(&document).await
        }
        Command::Sync => client.sync_channels().await,
    }
}

fn read_json_document(path: &Path) -> Result<Value> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    serde_json::from_str(&content).map_err(|e| ClientError::ConfigError {
        message: format!("{} is not valid JSON: {}", path.display(), e),
    })
}
