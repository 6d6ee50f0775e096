//! `wxjson` - JSON weather exchange over HTTP
//!
//! A client posts a [`Location`] as JSON, the server answers with a
//! [`WeatherReport`]. The library provides the wire models, the codec,
//! both exchange roles and an in-process demo that runs them together.

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod models;
pub mod server;

// Re-export core types for public API
pub use client::WeatherClient;
pub use config::WxJsonConfig;
pub use error::WxJsonError;
pub use exchange::{Exchange, run_demo};
pub use models::{Location, WeatherReport, WindInfo};
pub use server::{RunningServer, WeatherServer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WxJsonError>;
