//! Command parsing and classification.
//!
//! This module converts a raw chat message into a structured [`Command`].
//! Only the leading command word and, for edits, the message reference are
//! split off here; the remaining argument string is kept verbatim so the
//! quote-aware tokenizer can process it untouched.

use log::debug;

use crate::commands::responses::format_invalid_reference;

/// Command word for sending a new message.
pub const CREATE_COMMAND: &str = "!create-message";
/// Command word for editing a previously sent message.
pub const EDIT_COMMAND: &str = "!edit-message";

/// Represents a parsed bot command.
///
/// The argument strings are carried raw; tokenization happens during
/// execution so quoting errors can be reported per invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Send a new message or embed.
    ///
    /// # Fields
    ///
    /// * `String` - Raw argument string
    Create(String),
    /// Edit a previously sent message in place.
    ///
    /// # Fields
    ///
    /// * `String` - Message reference (link or `channels/{cid}/{mid}` path)
    /// * `String` - Raw argument string
    Edit(String, String),
}

/// Errors that can occur during command parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParsingError {
    /// The message is not a command at all (no `!` prefix).
    UnableToParse,
    /// The command word belongs to a different bot.
    NotLeise,
    /// The edit command is missing its message reference.
    MissingReference,
}

impl Command {
    /// Parses a message body into a [`Command`].
    ///
    /// # Arguments
    ///
    /// * `body` - The raw chat message text
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - If the message is one of this bot's commands
    /// * `Err(CommandParsingError)` - If it is not, or its shape is invalid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The message has no command prefix - [`CommandParsingError::UnableToParse`]
    /// - The command word is another bot's - [`CommandParsingError::NotLeise`]
    /// - An edit carries no reference - [`CommandParsingError::MissingReference`]
    pub fn parse(body: &str) -> Result<Self, CommandParsingError> {
        let body = body.trim();
        if !body.starts_with('!') {
            return Err(CommandParsingError::UnableToParse);
        }

        let (name, rest) = match body.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (body, ""),
        };

        match name {
            CREATE_COMMAND => {
                debug!("parsed create command, args: {:?}", rest);
                Ok(Command::Create(rest.to_owned()))
            }
            EDIT_COMMAND => {
                let (reference, args) = match rest.split_once(char::is_whitespace) {
                    Some((reference, args)) => (reference, args.trim_start()),
                    None => (rest, ""),
                };
                if reference.is_empty() {
                    return Err(CommandParsingError::MissingReference);
                }

                debug!(
                    "parsed edit command, reference: {}, args: {:?}",
                    reference, args
                );
                Ok(Command::Edit(reference.to_owned(), args.to_owned()))
            }
            _ => Err(CommandParsingError::NotLeise),
        }
    }
}

/// Formats a command parsing error into a user-friendly message.
///
/// Only shape errors of this bot's own commands produce a response;
/// non-command messages and other bots' commands return `None` so the bot
/// stays silent.
pub fn format_command_error(error: CommandParsingError) -> Option<String> {
    match error {
        CommandParsingError::MissingReference => Some(format_invalid_reference()),
        _ => None,
    }
}
