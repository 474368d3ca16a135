//! Platform capability abstraction for channel lookup and message delivery.
//!
//! The command pipeline never talks to Discord directly: it goes through the
//! [`Messenger`] trait, injected per invocation. This keeps the core pure and
//! lets tests run against a [`MockMessenger`].

use mockall::automock;

use crate::commands::render::RenderedOutput;

/// Destination of a render for a single invocation.
///
/// Produced by the channel resolver; not cached across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelTarget {
    /// The channel the command was issued in.
    Origin(u64),
    /// A channel explicitly requested through a mention and confirmed by lookup.
    Explicit(u64),
}

impl ChannelTarget {
    /// The numeric channel identifier of the target.
    pub fn id(&self) -> u64 {
        match self {
            ChannelTarget::Origin(id) | ChannelTarget::Explicit(id) => *id,
        }
    }

    /// Whether the target was explicitly requested rather than defaulted.
    ///
    /// Explicit sends get a confirmation reply; sends into the origin channel
    /// are their own feedback.
    pub fn is_explicit(&self) -> bool {
        matches!(self, ChannelTarget::Explicit(_))
    }
}

/// Handle to a delivered message, sufficient to edit it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle {
    /// Channel the message lives in.
    pub channel_id: u64,
    /// The message identifier.
    pub message_id: u64,
}

/// Snapshot of an embed on a fetched message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSnapshot {
    /// The embed description text.
    pub description: String,
    /// The embed thumbnail URL, if set.
    pub thumbnail_url: Option<String>,
    /// The embed footer text, if set.
    pub footer_text: Option<String>,
}

/// A previously sent message as read back from the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedMessage {
    /// Numeric user ID of the message author.
    pub author_id: u64,
    /// Plain text content of the message.
    pub content: String,
    /// The first embed of the message, if any.
    pub embed: Option<EmbedSnapshot>,
}

/// Errors from fetching a previously sent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// The message does not exist or is unreachable.
    NotFound,
    /// The bot is not allowed to read the message.
    Forbidden,
}

/// Errors from delivering or editing a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The bot is not allowed to post in the target channel.
    Forbidden,
    /// Generic transport failure, carries the underlying detail text.
    Failed(String),
}

/// Injected platform capabilities consumed by the command pipeline.
///
/// One implementation exists per platform; see
/// [`DiscordMessenger`](crate::discord::DiscordMessenger). All operations are
/// expected to be idempotent per invocation; retries and timeouts are the
/// transport's responsibility, not the caller's.
#[automock]
pub trait Messenger {
    /// Resolves a numeric channel ID to a sendable target; `None` on a miss.
    async fn lookup_channel(&self, channel_id: u64) -> Option<ChannelTarget>;

    /// Fetches an existing message so its render state can be read back.
    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<FetchedMessage, FetchError>;

    /// Delivers a render to a channel, returning a handle to the new message.
    async fn send(
        &self,
        target: &ChannelTarget,
        output: &RenderedOutput,
    ) -> Result<MessageHandle, DeliveryError>;

    /// Replaces the content of a previously delivered message.
    async fn edit(&self, handle: &MessageHandle, output: &RenderedOutput)
    -> Result<(), DeliveryError>;
}
