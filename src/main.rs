//! Leise - A Discord bot for sending and editing custom messages and embeds.
//!
//! This is the main entry point for the Leise bot, which lets server members
//! compose messages and rich embeds through chat commands and deliver them
//! to any channel the bot can post in.
//!
//! # Overview
//!
//! Leise turns a chat message like
//! `!create-message message="Welcome!" channel=<#123> footer="the team"`
//! into a delivered message or embed. Messages sent by the bot can later be
//! reworked in place with `!edit-message`, which merges the supplied fields
//! over the previous content.
//!
//! # Features
//!
//! - **Plain messages**: `message` alone sends plain text
//! - **Rich embeds**: `link`, `link_text`, `thumbnail` and `footer` fields
//!   upgrade the message to an embed
//! - **Channel targeting**: send to the current channel or mention another
//! - **In-place edits**: edit any message the bot previously sent, by link
//! - **Quoted values**: shell-style quoting for values containing spaces
//! - **YAML configuration**: simple config file with environment overrides
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! discord:
//!   token: "your-bot-token"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the
//! `LEISE_` prefix:
//!
//! ```bash
//! export LEISE_DISCORD__TOKEN="your-bot-token"
//! ```
//!
//! # Usage
//!
//! ```bash
//! leise --config config.yaml
//! ```
//!
//! # Bot Commands
//!
//! - `!create-message message="..." [channel=<#id>] [link=...] [link_text=...] [thumbnail=...] [footer=...]`
//! - `!edit-message <message link> [fields...]`
//!
//! # Architecture
//!
//! The bot consists of several modules:
//!
//! - [`bot`] - Gateway event handling and command dispatch
//! - [`commands`] - Command parsing, rendering and execution
//! - [`config`] - YAML configuration structures and loading
//! - [`discord`] - The platform capability trait and its REST implementation
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//!   - Set to `debug` for verbose output
//!   - Set to `warn` or `error` for minimal logging

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod discord;

/// Command-line arguments for the Leise bot.
///
/// The only argument is the path to the YAML configuration file; everything
/// else is configured through the file or environment variables.
///
/// # Examples
///
/// ```bash
/// leise --config config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// See the [`config`] module for the expected format. Values can be
    /// overridden with `LEISE_`-prefixed environment variables:
    ///
    /// ```bash
    /// export LEISE_DISCORD__TOKEN="your-bot-token"
    /// leise --config config.yaml
    /// ```
    #[arg(short, long)]
    config: String,
}

/// Main entry point for the Leise bot.
///
/// Initializes logging, parses command-line arguments, loads the
/// configuration and runs the gateway loop until the process terminates.
///
/// Configuration and startup errors are logged and cause a clean early
/// return rather than a panic.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting leise {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from YAML file with environment variable overrides
    let config: Config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Launch bot
    let bot = match Bot::new(config).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };
    if let Err(e) = bot.start().await {
        error!("Gateway connection failed: {}", e);
    }
}
