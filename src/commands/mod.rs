//! Bot command parsing and execution.
//!
//! This module provides the complete command processing pipeline for the
//! Leise bot, letting Discord users compose, send and edit messages and
//! rich embeds through chat commands.
//!
//! # Overview
//!
//! The commands module handles the entire lifecycle of bot commands:
//! 1. **Parsing** - Converting chat messages into structured commands
//! 2. **Tokenizing** - Shell-style splitting of the argument string
//! 3. **Validation** - Building the field map and checking its invariants
//! 4. **Rendering** - Producing a plain-text or embed output
//! 5. **Delivery** - Sending or editing through the injected [`Messenger`]
//!
//! [`Messenger`]: crate::discord::messenger::Messenger
//!
//! # Architecture
//!
//! ```text
//! Discord Message
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + execute()
//! └─────────────┘
//!      │
//!      ├── parse() ──────────► Command (Create / Edit)
//!      │
//!      └── execute() ─────────┐
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │  tokenizer          │
//!                  │  field_map          │
//!                  │  channel / reference│
//!                  │  render             │
//!                  └─────────────────────┘
//!                             │
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │  Messenger          │
//!                  │  - send             │
//!                  │  - edit             │
//!                  └─────────────────────┘
//! ```
//!
//! # Command Structure
//!
//! Arguments are `key=value` pairs; values containing spaces are quoted.
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `!create-message` | `message=... [channel=...] [link=...] [link_text=...] [thumbnail=...] [footer=...]` | Send a message or embed |
//! | `!edit-message` | `<message link> [fields...]` | Edit a previously sent message |
//!
//! A message with only the `message` field is sent as plain text. Any of
//! `link`, `link_text`, `thumbnail` or `footer` turns it into an embed.
//! Edits merge the supplied fields over the previous state of the target
//! message.
//!
//! # Error Handling
//!
//! The module distinguishes between two error categories:
//!
//! - **Silent errors** ([`CommandParseError::NotForBot`]): messages that are
//!   not commands or belong to a different bot. These never generate
//!   responses.
//! - **User errors** ([`CommandParseError::InvalidCommand`] and execution
//!   failures): invalid syntax or a violated precondition. These carry a
//!   short user-facing message naming the condition.
//!
//! # Module Organization
//!
//! - [`commander`] - Main orchestrator for parsing and executing commands
//! - [`command`] - Command enum definition and command-word parsing
//! - [`tokenizer`] - Quote-aware argument splitting
//! - [`field_map`] - `key=value` pair extraction
//! - [`channel`] - Destination channel resolution
//! - [`reference`] - Edit-target message reference parsing
//! - [`render`] - Plain-text and embed rendering, create and edit semantics
//! - [`responses`] - User-facing confirmation and error strings

mod channel;
mod command;
mod commander;
mod field_map;
mod reference;
pub mod render;
mod responses;
mod tokenizer;

pub use crate::commands::command::Command;
pub use crate::commands::commander::Commander;

/// Runtime context for command execution.
///
/// Carries the invocation metadata the handlers need: where the command was
/// issued and which user the bot itself is.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    /// Channel the command message was posted in.
    pub origin_channel_id: u64,
    /// The bot's own user ID, used to gate edits to its own messages.
    pub bot_user_id: u64,
}

/// Errors that can occur during command parsing.
///
/// This enum distinguishes between errors that should produce user-facing
/// messages and those that should be silently ignored.
#[derive(Debug)]
pub enum CommandParseError {
    /// Message is not for this bot (silent error)
    NotForBot,
    /// Invalid command syntax with error message
    InvalidCommand(String),
}
