//! rotnot-server: HTTP surface for food detection and recipe generation

pub mod config;
pub mod http;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
