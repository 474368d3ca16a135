//! Field map construction from tokenized arguments.
//!
//! This module converts the token sequence produced by
//! [`tokenizer::tokenize`](crate::commands::tokenizer::tokenize) into a
//! key/value map. The conversion is purely mechanical: validation of
//! required fields belongs to the render engine, not to this stage.

use std::collections::HashMap;

/// Field name for the message body.
pub const FIELD_MESSAGE: &str = "message";
/// Field name for the destination channel mention.
pub const FIELD_CHANNEL: &str = "channel";
/// Field name for the link target URL.
pub const FIELD_LINK: &str = "link";
/// Field name for the visible link text.
pub const FIELD_LINK_TEXT: &str = "link_text";
/// Field name for the embed thumbnail URL.
pub const FIELD_THUMBNAIL: &str = "thumbnail";
/// Field name for the embed footer text.
pub const FIELD_FOOTER: &str = "footer";

/// Parsed key/value fields of a command invocation.
///
/// Built from shell-style tokens with [`FieldMap::from_tokens`]. Keys are
/// lower-cased; values are kept verbatim. Unknown keys are retained but
/// ignored by the render engine, so new fields can be introduced without
/// breaking old invocations.
///
/// # Examples
///
/// ```
/// # use leise::commands::field_map::FieldMap;
/// let tokens = vec!["message=hello".to_owned(), "footer=bye".to_owned()];
/// let map = FieldMap::from_tokens(&tokens);
/// assert_eq!(map.message(), Some("hello"));
/// assert_eq!(map.footer(), Some("bye"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    /// Builds a field map from a sequence of tokens.
    ///
    /// Each token is split at the first `=`:
    /// - the key is normalized to lower case,
    /// - the value is kept verbatim, including any embedded `=` beyond the
    ///   first,
    /// - tokens without `=` are silently dropped (stray words are tolerated,
    ///   not errors),
    /// - on duplicate keys the later occurrence replaces the earlier one.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut fields = HashMap::new();

        for token in tokens {
            if let Some((key, value)) = token.split_once('=') {
                fields.insert(key.to_lowercase(), value.to_owned());
            }
        }

        FieldMap { fields }
    }

    /// Returns the raw value for an arbitrary field name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the `message` field, the base text of the render.
    pub fn message(&self) -> Option<&str> {
        self.get(FIELD_MESSAGE)
    }

    /// Returns the `channel` field, a raw channel mention.
    pub fn channel(&self) -> Option<&str> {
        self.get(FIELD_CHANNEL)
    }

    /// Returns the `link` field, the link target URL.
    pub fn link(&self) -> Option<&str> {
        self.get(FIELD_LINK)
    }

    /// Returns the `link_text` field, the visible link text.
    pub fn link_text(&self) -> Option<&str> {
        self.get(FIELD_LINK_TEXT)
    }

    /// Returns the `thumbnail` field, the embed thumbnail URL.
    pub fn thumbnail(&self) -> Option<&str> {
        self.get(FIELD_THUMBNAIL)
    }

    /// Returns the `footer` field, the embed footer text.
    pub fn footer(&self) -> Option<&str> {
        self.get(FIELD_FOOTER)
    }
}
