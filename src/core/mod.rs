pub mod client;

pub use crate::utils::error::Result;
pub use client::{handle_response, SyncApiClient, DEFAULT_BASE_URL};
