// ABOUTME: CLI commands for the client-side route table
// ABOUTME: Lists the registered routes and resolves locations against them

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use multiboard_cli::AppContext;

#[derive(Subcommand)]
pub enum RoutesCommands {
    /// List every registered route in match order
    List,
    /// Show which view a location resolves to
    Resolve {
        /// Browser location, including the history base
        location: String,
    },
}

impl RoutesCommands {
    pub fn execute(&self, context: &AppContext) -> Result<()> {
        match self {
            RoutesCommands::List => list_routes(context),
            RoutesCommands::Resolve { location } => resolve_location(context, location),
        }
    }
}

fn list_routes(context: &AppContext) -> Result<()> {
    let router = context.router();

    let base = match router.history().base() {
        "" => "/",
        base => base,
    };
    println!("{} {}", "History base:".bold(), base);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["#", "Path", "Name"]);

    for (index, route) in router.routes().iter().enumerate() {
        let path = if route.path().is_empty() {
            "(unset)".to_string()
        } else {
            route.path().to_string()
        };
        table.add_row(vec![(index + 1).to_string(), path, route.name().to_string()]);
    }

    println!("{table}");
    Ok(())
}

fn resolve_location(context: &AppContext, location: &str) -> Result<()> {
    let router = context.router();

    let Some(matched) = router.resolve(location) else {
        bail!("No route matches '{}'", location);
    };

    println!(
        "{} {} {}",
        "✓".green().bold(),
        matched.route.name().bold(),
        format!("({})", matched.route.path()).dimmed()
    );
    for (name, value) in &matched.params {
        println!("  {} = {}", name.cyan(), value);
    }
    Ok(())
}
