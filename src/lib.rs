pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::ClientConfig;
pub use crate::core::{handle_response, SyncApiClient, DEFAULT_BASE_URL};
pub use domain::model::{ConfigData, MASKED_SECRET};
pub use utils::error::{ClientError, Result};
