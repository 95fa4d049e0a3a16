pub mod api;
pub mod command;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod samples;
pub mod state;
pub mod ui;
pub mod view;

pub use api::{AnalyzeEndpoint, HistoryEndpoint, HttpApi};
pub use config::ClientConfig;
pub use controller::{ClientController, HistoryRefresh};
pub use errors::{ClientError, ConfigError};
pub use ui::{RenderSurface, TerminalSurface};
