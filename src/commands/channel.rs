//! Destination channel resolution.
//!
//! Resolves the optional `channel` field of an invocation to a concrete
//! [`ChannelTarget`]: the origin channel when absent, or an explicitly
//! mentioned channel confirmed through the injected lookup capability.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::commands::field_map::FieldMap;
use crate::discord::messenger::{ChannelTarget, Messenger};

/// Mention syntax for a channel: angle bracket, hash, digits, close bracket.
static MENTION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<#(\d+)>$").unwrap());

/// Errors that can occur while resolving the destination channel.
#[derive(Debug, PartialEq, Eq)]
pub enum ChannelError {
    /// The `channel` value does not match the `<#digits>` mention shape.
    ///
    /// Carries the raw input for a user-facing message.
    InvalidFormat(String),
    /// The mentioned channel could not be resolved by the platform.
    ///
    /// Carries the raw input for a user-facing message.
    NotFound(String),
}

/// Resolves the destination channel for an invocation.
///
/// When no `channel` field is present the origin channel (the one the
/// command was issued in) is used. Otherwise the value must be an exact
/// channel mention (`<#123456789>`), whose numeric ID is resolved through
/// the injected lookup; anything else is an [`ChannelError::InvalidFormat`],
/// and a lookup miss is a [`ChannelError::NotFound`]. Resolution is
/// performed once per invocation, with no retries and no caching.
///
/// # Arguments
///
/// * `field_map` - The parsed invocation fields
/// * `origin_channel_id` - The channel the command was issued in
/// * `messenger` - The injected platform capability used for the lookup
pub async fn resolve_channel<M: Messenger>(
    field_map: &FieldMap,
    origin_channel_id: u64,
    messenger: &M,
) -> Result<ChannelTarget, ChannelError> {
    let raw = match field_map.channel() {
        None => return Ok(ChannelTarget::Origin(origin_channel_id)),
        Some(raw) => raw,
    };

    let captures = MENTION_PATTERN
        .captures(raw)
        .ok_or_else(|| ChannelError::InvalidFormat(raw.to_owned()))?;
    let channel_id = captures[1]
        .parse::<u64>()
        .map_err(|_| ChannelError::InvalidFormat(raw.to_owned()))?;

    match messenger.lookup_channel(channel_id).await {
        Some(target) => Ok(target),
        None => Err(ChannelError::NotFound(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discord::messenger::MockMessenger;

    fn field_map(tokens: &[&str]) -> FieldMap {
        let tokens: Vec<String> = tokens.iter().map(|s| (*s).to_owned()).collect();
        FieldMap::from_tokens(&tokens)
    }

    #[tokio::test]
    async fn test_resolve_channel_absent_returns_origin() {
        let messenger = MockMessenger::new();
        let target = resolve_channel(&field_map(&["message=hi"]), 42, &messenger)
            .await
            .unwrap();
        assert_eq!(target, ChannelTarget::Origin(42));
    }

    #[tokio::test]
    async fn test_resolve_channel_mention_resolved() {
        let mut messenger = MockMessenger::new();
        messenger
            .expect_lookup_channel()
            .with(mockall::predicate::eq(12345u64))
            .times(1)
            .returning(|id| Some(ChannelTarget::Explicit(id)));

        let target = resolve_channel(&field_map(&["channel=<#12345>"]), 42, &messenger)
            .await
            .unwrap();
        assert_eq!(target, ChannelTarget::Explicit(12345));
    }

    #[tokio::test]
    async fn test_resolve_channel_invalid_format() {
        let messenger = MockMessenger::new();
        let result = resolve_channel(&field_map(&["channel=#general"]), 42, &messenger).await;
        assert_eq!(
            result,
            Err(ChannelError::InvalidFormat("#general".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_resolve_channel_partial_mention_is_invalid() {
        let messenger = MockMessenger::new();
        let result = resolve_channel(&field_map(&["channel=<#12345"]), 42, &messenger).await;
        assert_eq!(result, Err(ChannelError::InvalidFormat("<#12345".to_owned())));
    }

    #[tokio::test]
    async fn test_resolve_channel_not_found() {
        let mut messenger = MockMessenger::new();
        messenger
            .expect_lookup_channel()
            .with(mockall::predicate::eq(99999u64))
            .times(1)
            .returning(|_| None);

        let result = resolve_channel(&field_map(&["channel=<#99999>"]), 42, &messenger).await;
        assert_eq!(result, Err(ChannelError::NotFound("<#99999>".to_owned())));
    }
}
