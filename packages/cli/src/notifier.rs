// ABOUTME: Terminal implementation of the user-facing notification surface
// ABOUTME: Prints each message as a highlighted block on stdout

use colored::*;
use multiboard_client::Notifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

/// Render a notification the way the terminal shows it
pub fn render(message: &str) -> String {
    if message.trim().is_empty() {
        return format!("{}", "📣 (no message)".dimmed());
    }

    message
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{} {}", "📣".bold(), line.bold())
            } else {
                format!("   {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("{}", render(message));
    }
}
