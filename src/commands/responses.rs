//! User-facing response formatters.
//!
//! Every success confirmation and failure condition the bot reports to its
//! users is formatted here, so responses stay consistent across handlers.
//! Failure responses are short strings naming the violated condition.

/// Formats the error for malformed quoting in the argument string.
pub fn format_quote_error() -> String {
    "`Error:` Could not parse arguments. Please check your quotes.".to_owned()
}

/// Formats the error for a create invocation without a `message` field.
pub fn format_missing_message() -> String {
    "`Error:` You must provide a `message` argument. Example: `!create-message message=\"Hello world\"`"
        .to_owned()
}

/// Formats the error for a `link_text` supplied without a `link`.
pub fn format_dangling_link_text() -> String {
    "`Error:` You provided `link_text` but no `link`.".to_owned()
}

/// Formats the error for a `channel` value that is not a channel mention.
pub fn format_invalid_channel() -> String {
    "`Error:` Invalid channel format. Please mention the channel (e.g. `#general`).".to_owned()
}

/// Formats the error for a mentioned channel the platform does not know.
///
/// # Arguments
///
/// * `raw` - The raw `channel` value as the user typed it
pub fn format_channel_not_found(raw: &str) -> String {
    format!("`Error:` Could not find the channel {}.", raw)
}

/// Formats the error for an edit reference that carries no channel/message IDs.
pub fn format_invalid_reference() -> String {
    "`Error:` Invalid message reference. Use a message link like `https://discord.com/channels/<guild>/<channel>/<message>`."
        .to_owned()
}

/// Formats the error for an edit target message that does not exist.
pub fn format_message_not_found() -> String {
    "`Error:` Could not find that message.".to_owned()
}

/// Formats the error for an edit target message the bot cannot read.
pub fn format_read_permission_denied() -> String {
    "`Error:` I don't have permission to access that message.".to_owned()
}

/// Formats the error for an edit target not authored by the bot.
pub fn format_not_authored() -> String {
    "`Error:` I can only edit messages that I sent.".to_owned()
}

/// Formats the error for a channel the bot cannot post in.
///
/// # Arguments
///
/// * `channel_id` - The numeric ID of the rejected channel
pub fn format_permission_denied(channel_id: u64) -> String {
    format!(
        "`Error:` I don't have permission to send messages in <#{}>.",
        channel_id
    )
}

/// Formats a generic delivery failure with the underlying detail text.
///
/// # Arguments
///
/// * `detail` - The transport's own description of the failure
pub fn format_delivery_error(detail: &str) -> String {
    format!("`Error:` Failed to deliver the message. Details: {}", detail)
}

/// Formats the confirmation for a message sent to an explicit channel.
///
/// # Arguments
///
/// * `channel_id` - The numeric ID of the destination channel
pub fn format_message_sent(channel_id: u64) -> String {
    format!("Message sent to <#{}>!", channel_id)
}

/// Formats the confirmation for a successful edit.
pub fn format_message_edited() -> String {
    "Message edited.".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quote_error() {
        assert_eq!(
            format_quote_error(),
            "`Error:` Could not parse arguments. Please check your quotes."
        );
    }

    #[test]
    fn test_format_missing_message() {
        assert!(format_missing_message().contains("`message` argument"));
    }

    #[test]
    fn test_format_dangling_link_text() {
        assert_eq!(
            format_dangling_link_text(),
            "`Error:` You provided `link_text` but no `link`."
        );
    }

    #[test]
    fn test_format_invalid_channel() {
        assert!(format_invalid_channel().contains("Invalid channel format"));
    }

    #[test]
    fn test_format_channel_not_found() {
        assert_eq!(
            format_channel_not_found("<#99999>"),
            "`Error:` Could not find the channel <#99999>."
        );
    }

    #[test]
    fn test_format_invalid_reference() {
        assert!(format_invalid_reference().contains("Invalid message reference"));
    }

    #[test]
    fn test_format_message_not_found() {
        assert_eq!(
            format_message_not_found(),
            "`Error:` Could not find that message."
        );
    }

    #[test]
    fn test_format_not_authored() {
        assert_eq!(
            format_not_authored(),
            "`Error:` I can only edit messages that I sent."
        );
    }

    #[test]
    fn test_format_permission_denied() {
        assert_eq!(
            format_permission_denied(42),
            "`Error:` I don't have permission to send messages in <#42>."
        );
    }

    #[test]
    fn test_format_delivery_error() {
        assert_eq!(
            format_delivery_error("bad thumbnail URL"),
            "`Error:` Failed to deliver the message. Details: bad thumbnail URL"
        );
    }

    #[test]
    fn test_format_message_sent() {
        assert_eq!(format_message_sent(12345), "Message sent to <#12345>!");
    }

    #[test]
    fn test_format_message_edited() {
        assert_eq!(format_message_edited(), "Message edited.");
    }
}
