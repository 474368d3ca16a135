//! Bot module connecting the Discord gateway to the command pipeline.
//!
//! This module provides the main [`Bot`] implementation. It owns the serenity
//! gateway client and routes every incoming message through the
//! [`Commander`]: parse, then execute against a [`DiscordMessenger`] bound to
//! the gateway's HTTP client.
//!
//! # Command Processing Flow
//!
//! ```text
//! Discord Message → Parse Command → Execute Pipeline → Reply (if any)
//! ```
//!
//! Each message is handled in its own task so a slow REST call never blocks
//! the gateway event loop. Messages from bots (including the bot itself) are
//! ignored before parsing.
//!
//! # Example
//!
//! ```no_run
//! # use leise::bot::Bot;
//! # use leise::config::Config;
//! # async fn run() -> Result<(), anyhow::Error> {
//! let config = Config::load("config.yaml")?;
//!
//! let bot = Bot::new(config).await?;
//! bot.start().await?; // Runs until process termination
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{error, info};
use serenity::async_trait;
use serenity::client::{Client, Context, EventHandler};
use serenity::model::channel::Message;
use serenity::model::gateway::{GatewayIntents, Ready};

use crate::commands::{CommandContext, CommandParseError, Commander};
use crate::config::Config;
use crate::discord::DiscordMessenger;

/// Gateway event handler routing messages into the command pipeline.
struct Handler {
    /// Command parser and executor. Stateless and safely shared.
    commander: Arc<Commander>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        // Never react to other bots, or to our own deliveries
        if msg.author.bot {
            return;
        }

        // Parse body to extract command
        let command = match self.commander.parse(&msg.content) {
            Ok(command) => command,
            Err(error) => match error {
                // Return silently if the command is not for the bot
                CommandParseError::NotForBot => return,
                // Send error message if the command is invalid
                CommandParseError::InvalidCommand(message) => {
                    if let Err(error) = msg.reply(&ctx.http, message).await {
                        error!("failed to send parse error reply: {}", error);
                    }
                    return;
                }
            },
        };

        let context = CommandContext {
            origin_channel_id: msg.channel_id.get(),
            bot_user_id: ctx.cache.current_user().id.get(),
        };

        let commander = Arc::clone(&self.commander);
        let http = Arc::clone(&ctx.http);

        // Handle the command in its own task so the event loop stays free
        tokio::spawn(async move {
            let messenger = DiscordMessenger::new(Arc::clone(&http));
            if let Some(response) = commander.execute(&command, &context, &messenger).await {
                if let Err(error) = msg.reply(&http, response).await {
                    error!("failed to send command reply: {}", error);
                }
            }
        });
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("connected to discord as {}", ready.user.name);
    }
}

/// Main bot structure owning the Discord gateway client.
///
/// The bot listens for messages in guild channels and direct messages and
/// processes the `!create-message` and `!edit-message` commands. All command
/// state lives within a single invocation; the bot keeps nothing between
/// messages.
pub struct Bot {
    /// Serenity gateway client with the command handler installed.
    client: Client,
}

impl Bot {
    /// Creates a new Bot instance from the loaded configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration containing the Discord bot token
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway client cannot be constructed, for
    /// example when the token is malformed.
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        // Message content is a privileged intent; it must also be enabled in
        // the Discord developer portal
        let intents = GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let handler = Handler {
            commander: Arc::new(Commander::new()),
        };

        let client = Client::builder(&config.discord.token, intents)
            .event_handler(handler)
            .await?;

        Ok(Bot { client })
    }

    /// Starts the bot and processes gateway events until termination.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway connection fails irrecoverably.
    pub async fn start(mut self) -> Result<(), anyhow::Error> {
        self.client.start().await?;
        Ok(())
    }
}
