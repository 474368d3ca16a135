//! Discord REST implementation of the [`Messenger`] capability.
//!
//! Wraps the serenity HTTP client. Renders are translated into serenity
//! builders here; permission failures (HTTP 403) are separated from other
//! transport errors so handlers can phrase their responses accordingly.

use std::sync::Arc;

use log::debug;
use serenity::Error as SerenityError;
use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage};
use serenity::http::{Http, HttpError};
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, MessageId};

use crate::commands::render::{EMBED_COLOR, RenderedOutput};
use crate::discord::messenger::{
    ChannelTarget, DeliveryError, EmbedSnapshot, FetchError, FetchedMessage, MessageHandle,
    Messenger,
};

/// Messenger backed by the Discord REST API.
pub struct DiscordMessenger {
    http: Arc<Http>,
}

impl DiscordMessenger {
    /// Creates a messenger over an existing HTTP client.
    ///
    /// # Arguments
    ///
    /// * `http` - The serenity HTTP client shared with the gateway
    pub fn new(http: Arc<Http>) -> Self {
        DiscordMessenger { http }
    }
}

impl Messenger for DiscordMessenger {
    async fn lookup_channel(&self, channel_id: u64) -> Option<ChannelTarget> {
        // ChannelId::new panics on zero
        if channel_id == 0 {
            return None;
        }

        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(_) => Some(ChannelTarget::Explicit(channel_id)),
            Err(error) => {
                debug!("channel lookup failed for {}: {}", channel_id, error);
                None
            }
        }
    }

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<FetchedMessage, FetchError> {
        // Id constructors panic on zero
        if channel_id == 0 || message_id == 0 {
            return Err(FetchError::NotFound);
        }

        match self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
        {
            Ok(message) => Ok(to_fetched_message(&message)),
            Err(error) => {
                debug!(
                    "message fetch failed for {}/{}: {}",
                    channel_id, message_id, error
                );
                match status_code(&error) {
                    Some(403) => Err(FetchError::Forbidden),
                    _ => Err(FetchError::NotFound),
                }
            }
        }
    }

    async fn send(
        &self,
        target: &ChannelTarget,
        output: &RenderedOutput,
    ) -> Result<MessageHandle, DeliveryError> {
        let channel_id = ChannelId::new(target.id());
        match channel_id
            .send_message(&self.http, build_create(output))
            .await
        {
            Ok(message) => Ok(MessageHandle {
                channel_id: target.id(),
                message_id: message.id.get(),
            }),
            Err(error) => Err(to_delivery_error(error)),
        }
    }

    async fn edit(
        &self,
        handle: &MessageHandle,
        output: &RenderedOutput,
    ) -> Result<(), DeliveryError> {
        let channel_id = ChannelId::new(handle.channel_id);
        match channel_id
            .edit_message(
                &self.http,
                MessageId::new(handle.message_id),
                build_edit(output),
            )
            .await
        {
            Ok(_) => Ok(()),
            Err(error) => Err(to_delivery_error(error)),
        }
    }
}

/// Builds the embed shared by create and edit deliveries.
fn build_embed(
    description: &str,
    thumbnail_url: &Option<String>,
    footer_text: &Option<String>,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .description(description)
        .color(EMBED_COLOR);
    if let Some(url) = thumbnail_url {
        embed = embed.thumbnail(url);
    }
    if let Some(text) = footer_text {
        embed = embed.footer(CreateEmbedFooter::new(text));
    }
    embed
}

/// Translates a render into a create-message builder.
fn build_create(output: &RenderedOutput) -> CreateMessage {
    match output {
        RenderedOutput::PlainText { content } => CreateMessage::new().content(content),
        RenderedOutput::Embed {
            description,
            thumbnail_url,
            footer_text,
        } => CreateMessage::new().embed(build_embed(description, thumbnail_url, footer_text)),
    }
}

/// Translates a render into an edit-message builder.
///
/// A plain-text render strips any previous embed; an embed render clears the
/// plain content so the two shapes never coexist on an edited message.
fn build_edit(output: &RenderedOutput) -> EditMessage {
    match output {
        RenderedOutput::PlainText { content } => {
            EditMessage::new().content(content).embeds(Vec::new())
        }
        RenderedOutput::Embed {
            description,
            thumbnail_url,
            footer_text,
        } => EditMessage::new()
            .content("")
            .embed(build_embed(description, thumbnail_url, footer_text)),
    }
}

/// Reads the first embed of a message back into the pipeline's shape.
fn to_fetched_message(message: &Message) -> FetchedMessage {
    let embed = message.embeds.first().map(|embed| EmbedSnapshot {
        description: embed.description.clone().unwrap_or_default(),
        thumbnail_url: embed
            .thumbnail
            .as_ref()
            .map(|thumbnail| thumbnail.url.clone()),
        footer_text: embed.footer.as_ref().map(|footer| footer.text.clone()),
    });

    FetchedMessage {
        author_id: message.author.id.get(),
        content: message.content.clone(),
        embed,
    }
}

/// Extracts the HTTP status code of an unsuccessful request, if any.
fn status_code(error: &SerenityError) -> Option<u16> {
    match error {
        SerenityError::Http(HttpError::UnsuccessfulRequest(response)) => {
            Some(response.status_code.as_u16())
        }
        _ => None,
    }
}

fn to_delivery_error(error: SerenityError) -> DeliveryError {
    match status_code(&error) {
        Some(403) => DeliveryError::Forbidden,
        _ => DeliveryError::Failed(error.to_string()),
    }
}
