//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, the main entry point for
//! processing bot commands. It follows a two-phase model:
//!
//! 1. **Parsing phase** - [`Commander::parse`] classifies raw message text
//!    into a structured [`Command`], or decides the bot should stay silent.
//! 2. **Execution phase** - [`Commander::execute`] runs the full pipeline
//!    (tokenize, build the field map, resolve the channel, render, deliver)
//!    against the injected [`Messenger`] capability and produces an optional
//!    user-facing reply.
//!
//! Every error is terminal for the current invocation: there are no partial
//! sends and no retries, and each failure surfaces as a short response
//! naming the violated condition.

use crate::commands::{
    CommandContext, CommandParseError,
    channel::{ChannelError, resolve_channel},
    command::{Command, format_command_error},
    field_map::FieldMap,
    reference::MessageReference,
    render::{PreviousRenderState, RenderError, render_create, render_edit},
    responses::{
        format_channel_not_found, format_dangling_link_text, format_delivery_error,
        format_invalid_channel, format_invalid_reference, format_message_edited,
        format_message_not_found, format_message_sent, format_missing_message,
        format_not_authored, format_permission_denied, format_quote_error,
        format_read_permission_denied,
    },
    tokenizer::tokenize,
};
use crate::discord::messenger::{DeliveryError, FetchError, MessageHandle, Messenger};

/// Command orchestrator for parsing and executing bot commands.
///
/// The Commander is stateless and can be safely shared across concurrently
/// processed invocations; all platform interaction goes through the
/// [`Messenger`] passed to [`Commander::execute`].
pub struct Commander;

impl Commander {
    /// Creates a new Commander instance.
    pub fn new() -> Self {
        Commander
    }

    /// Parses a chat message body into a structured command.
    ///
    /// # Arguments
    ///
    /// * `body` - The raw message text
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - Successfully parsed command
    /// * `Err(CommandParseError::NotForBot)` - Message is not a command or
    ///   belongs to a different bot; the bot must stay silent
    /// * `Err(CommandParseError::InvalidCommand)` - Command shape is invalid,
    ///   carries the user-facing error message
    pub fn parse(&self, body: &str) -> Result<Command, CommandParseError> {
        match Command::parse(body) {
            Ok(command) => Ok(command),
            Err(error) => {
                // Return silently if the command is not for the bot,
                // otherwise surface an error message
                match format_command_error(error) {
                    Some(message) => Err(CommandParseError::InvalidCommand(message)),
                    None => Err(CommandParseError::NotForBot),
                }
            }
        }
    }

    /// Executes a parsed command and returns the reply to send, if any.
    ///
    /// A create into the origin channel returns `None`: the delivered
    /// message is its own feedback. Explicit channel sends, edits and every
    /// failure produce a reply.
    ///
    /// # Arguments
    ///
    /// * `command` - The parsed command to execute
    /// * `context` - Invocation metadata (origin channel, bot identity)
    /// * `messenger` - The injected platform capability
    pub async fn execute<M: Messenger>(
        &self,
        command: &Command,
        context: &CommandContext,
        messenger: &M,
    ) -> Option<String> {
        match command {
            Command::Create(args) => Self::handle_create(args, context, messenger).await,
            Command::Edit(reference, args) => {
                Self::handle_edit(reference, args, context, messenger).await
            }
        }
    }

    /// Runs the create pipeline: tokenize, render, resolve, deliver.
    async fn handle_create<M: Messenger>(
        args: &str,
        context: &CommandContext,
        messenger: &M,
    ) -> Option<String> {
        let tokens = match tokenize(args) {
            Ok(tokens) => tokens,
            Err(_) => return Some(format_quote_error()),
        };
        let field_map = FieldMap::from_tokens(&tokens);

        let output = match render_create(&field_map) {
            Ok(output) => output,
            Err(error) => return Some(Self::format_render_error(error)),
        };

        let target = match resolve_channel(&field_map, context.origin_channel_id, messenger).await {
            Ok(target) => target,
            Err(ChannelError::InvalidFormat(_)) => return Some(format_invalid_channel()),
            Err(ChannelError::NotFound(raw)) => return Some(format_channel_not_found(&raw)),
        };

        match messenger.send(&target, &output).await {
            Ok(_) => target
                .is_explicit()
                .then(|| format_message_sent(target.id())),
            Err(DeliveryError::Forbidden) => Some(format_permission_denied(target.id())),
            Err(DeliveryError::Failed(detail)) => Some(format_delivery_error(&detail)),
        }
    }

    /// Runs the edit pipeline: fetch the previous render, merge, deliver.
    async fn handle_edit<M: Messenger>(
        reference: &str,
        args: &str,
        context: &CommandContext,
        messenger: &M,
    ) -> Option<String> {
        let reference = match MessageReference::parse(reference) {
            Some(reference) => reference,
            None => return Some(format_invalid_reference()),
        };

        let tokens = match tokenize(args) {
            Ok(tokens) => tokens,
            Err(_) => return Some(format_quote_error()),
        };
        let field_map = FieldMap::from_tokens(&tokens);

        let fetched = match messenger
            .fetch_message(reference.channel_id, reference.message_id)
            .await
        {
            Ok(fetched) => fetched,
            Err(FetchError::NotFound) => return Some(format_message_not_found()),
            Err(FetchError::Forbidden) => return Some(format_read_permission_denied()),
        };

        // Only messages produced by this bot may be rewritten
        if fetched.author_id != context.bot_user_id {
            return Some(format_not_authored());
        }

        let previous = PreviousRenderState::from_message(&fetched);
        let output = match render_edit(&field_map, &previous) {
            Ok(output) => output,
            Err(error) => return Some(Self::format_render_error(error)),
        };

        let handle = MessageHandle {
            channel_id: reference.channel_id,
            message_id: reference.message_id,
        };

        match messenger.edit(&handle, &output).await {
            Ok(()) => Some(format_message_edited()),
            Err(DeliveryError::Forbidden) => Some(format_permission_denied(reference.channel_id)),
            Err(DeliveryError::Failed(detail)) => Some(format_delivery_error(&detail)),
        }
    }

    /// Maps a render validation error to its user-facing message.
    fn format_render_error(error: RenderError) -> String {
        match error {
            RenderError::MissingMessage => format_missing_message(),
            RenderError::DanglingLinkText => format_dangling_link_text(),
        }
    }
}
