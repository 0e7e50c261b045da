// ABOUTME: Multiboard configuration library
// ABOUTME: Environment variable names plus typed route and API settings loaded from them

pub mod constants;
pub mod settings;

pub use settings::{ApiSettings, ConfigError, ConfigResult, RouteSettings};
