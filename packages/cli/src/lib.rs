// ABOUTME: Shared pieces of the multiboard binary
// ABOUTME: Logging setup, the terminal notifier, and construction of the router and user service

pub mod context;
pub mod logging;
pub mod notifier;

pub use context::AppContext;
pub use notifier::TerminalNotifier;
