// ABOUTME: CLI commands for user authentication against the board API
// ABOUTME: Supports signup, login, duplicate-id checks and session status

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::*;
use inquire::{Password, PasswordDisplayMode, Text};
use multiboard_cli::AppContext;
use multiboard_client::{ClientError, LoginRequest, Notifier, SignupRequest};
use std::process;
use std::sync::Arc;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and store its session token
    Signup {
        /// Account id (prompted when omitted)
        #[arg(long)]
        user_id: Option<String>,

        /// Display name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Password, prompted for twice when omitted
        #[arg(long)]
        password: Option<String>,

        /// Send the request even if it fails local validation
        #[arg(long)]
        skip_validation: bool,
    },

    /// Log in and store the session token
    Login {
        /// Account id (prompted when omitted)
        #[arg(long)]
        user_id: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Check whether an account id is already taken
    CheckId {
        user_id: String,
    },

    /// Ask the server whether the stored session is still valid
    Status,
}

impl AuthCommands {
    pub async fn execute(&self, context: &AppContext, notifier: Arc<dyn Notifier>) -> Result<()> {
        match self {
            AuthCommands::Signup {
                user_id,
                name,
                password,
                skip_validation,
            } => {
                signup_command(
                    context,
                    notifier,
                    user_id.clone(),
                    name.clone(),
                    password.clone(),
                    *skip_validation,
                )
                .await
            }
            AuthCommands::Login { user_id, password } => {
                login_command(context, notifier, user_id.clone(), password.clone()).await
            }
            AuthCommands::CheckId { user_id } => check_id_command(context, notifier, user_id).await,
            AuthCommands::Status => status_command(context, notifier).await,
        }
    }
}

fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Text::new(prompt).prompt()?),
    }
}

fn password_prompt(prompt: &str) -> Result<String> {
    Ok(Password::new(prompt)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?)
}

async fn signup_command(
    context: &AppContext,
    notifier: Arc<dyn Notifier>,
    user_id: Option<String>,
    name: Option<String>,
    password: Option<String>,
    skip_validation: bool,
) -> Result<()> {
    let user_id = text_or_prompt(user_id, "ID:")?;
    let name = text_or_prompt(name, "Name:")?;
    let (password, confirm_password) = match password {
        Some(p) => (p.clone(), p),
        None => (
            password_prompt("Password:")?,
            password_prompt("Confirm password:")?,
        ),
    };

    let request = SignupRequest {
        user_id,
        password,
        confirm_password,
        name,
    };

    if !skip_validation {
        if let Err(errors) = request.validate() {
            for error in &errors {
                eprintln!("{} {}", "✗".red().bold(), error);
            }
            bail!("Signup request is invalid ({} problems)", errors.len());
        }
    }

    let service = context.user_service(notifier).await?;
    match service.signup_user(&request).await {
        Ok(data) => {
            println!("{} Signed up as {}", "✓".green().bold(), request.user_id.bold());
            if !data.extra.is_empty() {
                println!("{}", serde_json::to_string_pretty(&data.extra)?);
            }
            Ok(())
        }
        // Already shown to the user by the notifier
        Err(_) => process::exit(1),
    }
}

async fn login_command(
    context: &AppContext,
    notifier: Arc<dyn Notifier>,
    user_id: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let user_id = text_or_prompt(user_id, "ID:")?;
    let password = match password {
        Some(p) => p,
        None => password_prompt("Password:")?,
    };

    let service = context.user_service(notifier).await?;
    let request = LoginRequest { user_id, password };
    match service.login_user(&request).await {
        Ok(_) => {
            println!("{} Logged in as {}", "✓".green().bold(), request.user_id.bold());
            Ok(())
        }
        Err(_) => process::exit(1),
    }
}

async fn check_id_command(
    context: &AppContext,
    notifier: Arc<dyn Notifier>,
    user_id: &str,
) -> Result<()> {
    let service = context.user_service(notifier).await?;
    match service.check_duplicate_id(user_id).await {
        Ok(_) => Ok(()),
        Err(_) => process::exit(1),
    }
}

async fn status_command(context: &AppContext, notifier: Arc<dyn Notifier>) -> Result<()> {
    let service = context.user_service(notifier).await?;
    match service.get_jwt_auth_status().await {
        Ok(payload) => {
            println!("{} Session is valid", "✓".green().bold());
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        // The expired-session notice has already been shown
        Err(ClientError::SessionExpired) => process::exit(1),
        Err(e) if e.is_auth_error() => {
            eprintln!("{} Not logged in. Run 'multiboard auth login' first.", "✗".red().bold());
            process::exit(1);
        }
        Err(e) if e.is_network_error() => {
            eprintln!("{} {}", "✗".red().bold(), e.user_message());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} Session check failed: {}", "✗".red().bold(), e);
            process::exit(1);
        }
    }
}
