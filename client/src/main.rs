//! Command-line front-end for the user service client.
//!
//! ```bash
//! client --base-url http://localhost:8000 user alice
//! client friends --username alice
//! USER_SERVICE_CSRF_TOKEN=... USER_SERVICE_SESSION_ID=... client accept 7
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use client::debug::{init_logger, LogConfig};
use client::{ClientConfig, UserServiceClient};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "client", version, about = "User service API client")]
struct Cli {
    /// Backend origin (overrides USER_SERVICE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// CSRF token cookie value (overrides USER_SERVICE_CSRF_TOKEN)
    #[arg(long, global = true)]
    csrf_token: Option<String>,

    /// Session cookie value (overrides USER_SERVICE_SESSION_ID)
    #[arg(long, global = true)]
    session_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a user by username
    User { username: String },
    /// Send a friend request
    SendRequest { receiver_id: i64 },
    /// List friends
    Friends {
        #[arg(long, default_value = "")]
        username: String,
    },
    /// List incoming friend requests
    Requests,
    /// Accept a friend request
    Accept { request_id: i64 },
    /// Reject a friend request
    Reject { request_id: i64 },
    /// Update name and email
    UpdateInfo { name: String, email: String },
    /// Update password
    UpdatePassword { password1: String, password2: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let _guard = init_logger(&LogConfig::from_env());

    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = ClientConfig::from_env_with_base_url(cli.base_url.as_deref())
        .context("loading client configuration")?;
    if let Some(token) = cli.csrf_token {
        config = config.with_csrf_token(token);
    }
    if let Some(session_id) = cli.session_id {
        config = config.with_session_id(session_id);
    }

    let api = UserServiceClient::new(config)?;

    match cli.command {
        Command::User { username } => print_json(&api.get_user_by_username(&username).await?)?,
        Command::SendRequest { receiver_id } => return Ok(print_flag(api.send_friend_request(receiver_id).await)),
        Command::Friends { username } => print_json(&api.get_friends(&username).await?)?,
        Command::Requests => print_json(&api.get_friend_requests().await?)?,
        Command::Accept { request_id } => return Ok(print_flag(api.accept_friend_request(request_id).await)),
        Command::Reject { request_id } => return Ok(print_flag(api.reject_friend_request(request_id).await)),
        Command::UpdateInfo { name, email } => print_json(&api.update_general_info(&name, &email).await?)?,
        Command::UpdatePassword { password1, password2 } => {
            return Ok(print_flag(api.update_password(&password1, &password2).await))
        }
    }

    Ok(true)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_flag(ok: bool) -> bool {
    println!("{}", ok);
    ok
}
