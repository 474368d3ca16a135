//! Message reference parsing for the edit command.
//!
//! An edit invocation identifies its target through a reference string that
//! carries both a channel ID and a message ID in a
//! `channels/{channelId}/{messageId}` path shape. A full Discord message
//! link (`https://discord.com/channels/<guild>/<channel>/<message>`) also
//! matches: the last two numeric segments after `channels/` are taken.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Matches the trailing channel and message IDs of a `channels/...` path,
/// tolerating a leading guild segment.
static REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"channels/(?:\d+/)*(\d+)/(\d+)").unwrap());

/// The channel and message identifiers extracted from an edit reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageReference {
    /// Channel the target message lives in.
    pub channel_id: u64,
    /// The target message identifier.
    pub message_id: u64,
}

impl MessageReference {
    /// Extracts a message reference from a raw string.
    ///
    /// Returns `None` when no `channels/{channelId}/{messageId}` shape can
    /// be found, which the caller surfaces as an invalid-reference error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use leise::commands::reference::MessageReference;
    /// let reference =
    ///     MessageReference::parse("https://discord.com/channels/1/2/3").unwrap();
    /// assert_eq!(reference.channel_id, 2);
    /// assert_eq!(reference.message_id, 3);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let captures = REFERENCE_PATTERN.captures(raw)?;
        let channel_id = captures[1].parse::<u64>().ok()?;
        let message_id = captures[2].parse::<u64>().ok()?;

        Some(MessageReference {
            channel_id,
            message_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_path() {
        let reference = MessageReference::parse("channels/123/456").unwrap();
        assert_eq!(reference.channel_id, 123);
        assert_eq!(reference.message_id, 456);
    }

    #[test]
    fn test_parse_full_discord_link() {
        let reference =
            MessageReference::parse("https://discord.com/channels/111/222/333").unwrap();
        assert_eq!(reference.channel_id, 222);
        assert_eq!(reference.message_id, 333);
    }

    #[test]
    fn test_parse_no_channels_path() {
        assert_eq!(MessageReference::parse("https://example.com/123/456"), None);
    }

    #[test]
    fn test_parse_single_segment() {
        assert_eq!(MessageReference::parse("channels/123"), None);
    }

    #[test]
    fn test_parse_non_numeric_segments() {
        assert_eq!(MessageReference::parse("channels/abc/def"), None);
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(MessageReference::parse(""), None);
    }

    #[test]
    fn test_parse_overflowing_id() {
        assert_eq!(
            MessageReference::parse("channels/99999999999999999999999999/1"),
            None
        );
    }
}
