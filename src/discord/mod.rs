//! Discord integration for the bot.
//!
//! This module connects the command pipeline to Discord:
//!
//! - **Capability trait**: the [`messenger::Messenger`] trait describes the
//!   platform operations the pipeline needs (channel lookup, message fetch,
//!   send and edit) without depending on a concrete transport.
//! - **Client**: [`DiscordMessenger`] implements the trait over the Discord
//!   REST API.
//!
//! The gateway side (receiving messages, dispatching commands) lives in the
//! bot module; everything here is outbound.

mod client;
pub mod messenger;

pub use crate::discord::client::DiscordMessenger;
