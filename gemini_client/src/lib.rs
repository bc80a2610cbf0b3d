pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::Client;
pub use config::Config;
pub use error::{GeminiError, Result};
