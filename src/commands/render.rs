//! Message render engine: plain text vs. embed construction and merge.
//!
//! This module is the heart of the bot. It maps a parsed [`FieldMap`] (and,
//! for edits, a snapshot of the previous render) to a concrete
//! [`RenderedOutput`], deciding between a plain text message and a rich
//! embed, composing the description with an optional link line, and applying
//! the override-or-inherit merge rules for edits.
//!
//! # Create vs. edit
//!
//! - [`render_create`] requires a `message` field and renders from scratch.
//! - [`render_edit`] merges the supplied fields with a
//!   [`PreviousRenderState`]: explicitly supplied fields override, omitted
//!   fields fall back to whatever the previous render held. Links are the
//!   exception: they are edit-fresh and never inherited.

use crate::commands::field_map::FieldMap;
use crate::discord::messenger::FetchedMessage;

/// Fixed accent colour applied to every embed, rgb(112, 161, 224).
pub const EMBED_COLOR: u32 = 0x70A1E0;

/// Marker preceding the link line appended to an embed description.
///
/// Used as the split point to recover the original base text when editing.
/// Known limitation: a user message that legitimately contains this exact
/// substring will be truncated at it during base-text recovery.
pub const LINK_MARKER: &str = "\n\n**[";

/// The decided output form for a single command invocation.
///
/// Exactly one variant is produced per invocation. Embeds additionally carry
/// the fixed [`EMBED_COLOR`] when delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedOutput {
    /// A plain text message.
    PlainText {
        /// The message content.
        content: String,
    },
    /// A rich embed.
    Embed {
        /// Description text, base message plus an optional link line.
        description: String,
        /// Thumbnail URL, attached verbatim without validation.
        thumbnail_url: Option<String>,
        /// Footer text, attached verbatim.
        footer_text: Option<String>,
    },
}

/// Validation errors produced by the render engine.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The mandatory `message` field is absent on the create path.
    MissingMessage,
    /// A `link_text` was supplied without a `link` to point at.
    DanglingLinkText,
}

/// Snapshot of a previously sent message, used to fill gaps during an edit.
///
/// Extracted once at the start of the edit flow from the platform's message
/// object; read-only input, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousRenderState {
    /// Whether the previous render was an embed.
    pub is_embed: bool,
    /// The previous base text, with any appended link line stripped.
    pub base_text: String,
    /// The previous embed thumbnail URL, if any.
    pub thumbnail_url: Option<String>,
    /// The previous embed footer text, if any.
    pub footer_text: Option<String>,
}

impl PreviousRenderState {
    /// Extracts the render state from a fetched platform message.
    ///
    /// For an embed, the stored base text is the description with any
    /// appended link line stripped at the [`LINK_MARKER`] split point. For a
    /// plain message, the base text is the content as-is and no embed fields
    /// are carried.
    pub fn from_message(message: &FetchedMessage) -> Self {
        match &message.embed {
            Some(embed) => {
                let base_text = match embed.description.split_once(LINK_MARKER) {
                    Some((base, _)) => base.to_owned(),
                    None => embed.description.clone(),
                };

                PreviousRenderState {
                    is_embed: true,
                    base_text,
                    thumbnail_url: embed.thumbnail_url.clone(),
                    footer_text: embed.footer_text.clone(),
                }
            }
            None => PreviousRenderState {
                is_embed: false,
                base_text: message.content.clone(),
                thumbnail_url: None,
                footer_text: None,
            },
        }
    }
}

/// Composes the markdown link line appended to an embed description.
///
/// Returns `Ok(None)` when no link is requested, `Ok(Some(line))` with the
/// bold `**[text](url)**` construct when a `link` is present (falling back
/// to the URL itself as visible text), and [`RenderError::DanglingLinkText`]
/// when a `link_text` has nothing to point at.
fn link_line(link: Option<&str>, link_text: Option<&str>) -> Result<Option<String>, RenderError> {
    match (link, link_text) {
        (Some(link), Some(text)) => Ok(Some(format!("\n\n**[{}]({})**", text, link))),
        (Some(link), None) => Ok(Some(format!("\n\n**[{}]({})**", link, link))),
        (None, Some(_)) => Err(RenderError::DanglingLinkText),
        (None, None) => Ok(None),
    }
}

/// Renders a brand-new message from a field map.
///
/// The `message` field is mandatory. When none of `link`, `link_text`,
/// `thumbnail` or `footer` are present the output is plain text; otherwise
/// an embed is composed per the link line rules.
///
/// # Errors
///
/// * [`RenderError::MissingMessage`] - no `message` field was supplied
/// * [`RenderError::DanglingLinkText`] - `link_text` without `link`
///
/// # Examples
///
/// ```
/// # use leise::commands::field_map::FieldMap;
/// # use leise::commands::render::{render_create, RenderedOutput};
/// let tokens = vec!["message=hi".to_owned()];
/// let map = FieldMap::from_tokens(&tokens);
/// let output = render_create(&map).unwrap();
/// assert_eq!(output, RenderedOutput::PlainText { content: "hi".to_owned() });
/// ```
pub fn render_create(field_map: &FieldMap) -> Result<RenderedOutput, RenderError> {
    let message = field_map.message().ok_or(RenderError::MissingMessage)?;

    // Just a simple message: no embed field present at all
    if field_map.link().is_none()
        && field_map.link_text().is_none()
        && field_map.thumbnail().is_none()
        && field_map.footer().is_none()
    {
        return Ok(RenderedOutput::PlainText {
            content: message.to_owned(),
        });
    }

    let mut description = message.to_owned();
    if let Some(line) = link_line(field_map.link(), field_map.link_text())? {
        description.push_str(&line);
    }

    Ok(RenderedOutput::Embed {
        description,
        thumbnail_url: field_map.thumbnail().map(ToOwned::to_owned),
        footer_text: field_map.footer().map(ToOwned::to_owned),
    })
}

/// Renders an edit by merging supplied fields with the previous render.
///
/// Merge policy:
/// - base text: the supplied `message` overrides, otherwise the previous
///   base text is kept,
/// - links: built from the current invocation only, never resurrected from
///   the previous render,
/// - thumbnail and footer: supplied values override, otherwise inherited
///   from a previous embed,
/// - the output stays plain text only when no embed field resolves to a
///   value and the previous render was not an embed.
///
/// # Errors
///
/// * [`RenderError::DanglingLinkText`] - `link_text` without `link`, same
///   condition as on the create path
pub fn render_edit(
    field_map: &FieldMap,
    previous: &PreviousRenderState,
) -> Result<RenderedOutput, RenderError> {
    let base_text = field_map.message().unwrap_or(&previous.base_text);

    let link_line = link_line(field_map.link(), field_map.link_text())?;

    let thumbnail_url = field_map
        .thumbnail()
        .map(ToOwned::to_owned)
        .or_else(|| previous.thumbnail_url.clone());
    let footer_text = field_map
        .footer()
        .map(ToOwned::to_owned)
        .or_else(|| previous.footer_text.clone());

    if link_line.is_none() && thumbnail_url.is_none() && footer_text.is_none() && !previous.is_embed
    {
        return Ok(RenderedOutput::PlainText {
            content: base_text.to_owned(),
        });
    }

    let mut description = base_text.to_owned();
    if let Some(line) = link_line {
        description.push_str(&line);
    }

    Ok(RenderedOutput::Embed {
        description,
        thumbnail_url,
        footer_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discord::messenger::EmbedSnapshot;

    fn field_map(tokens: &[&str]) -> FieldMap {
        let tokens: Vec<String> = tokens.iter().map(|s| (*s).to_owned()).collect();
        FieldMap::from_tokens(&tokens)
    }

    fn plain_previous(content: &str) -> PreviousRenderState {
        PreviousRenderState {
            is_embed: false,
            base_text: content.to_owned(),
            thumbnail_url: None,
            footer_text: None,
        }
    }

    fn embed_previous(
        base_text: &str,
        thumbnail_url: Option<&str>,
        footer_text: Option<&str>,
    ) -> PreviousRenderState {
        PreviousRenderState {
            is_embed: true,
            base_text: base_text.to_owned(),
            thumbnail_url: thumbnail_url.map(ToOwned::to_owned),
            footer_text: footer_text.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn test_render_create_plain_text() {
        let output = render_create(&field_map(&["message=hi"])).unwrap();
        assert_eq!(
            output,
            RenderedOutput::PlainText {
                content: "hi".to_owned()
            }
        );
    }

    #[test]
    fn test_render_create_missing_message() {
        let result = render_create(&field_map(&[]));
        assert_eq!(result, Err(RenderError::MissingMessage));
    }

    #[test]
    fn test_render_create_missing_message_with_other_fields() {
        let result = render_create(&field_map(&["footer=hello"]));
        assert_eq!(result, Err(RenderError::MissingMessage));
    }

    #[test]
    fn test_render_create_link_with_text() {
        let output =
            render_create(&field_map(&["message=hi", "link=http://x", "link_text=X"])).unwrap();
        assert_eq!(
            output,
            RenderedOutput::Embed {
                description: "hi\n\n**[X](http://x)**".to_owned(),
                thumbnail_url: None,
                footer_text: None,
            }
        );
    }

    #[test]
    fn test_render_create_link_without_text_uses_url_as_text() {
        let output = render_create(&field_map(&["message=hi", "link=http://x"])).unwrap();
        assert_eq!(
            output,
            RenderedOutput::Embed {
                description: "hi\n\n**[http://x](http://x)**".to_owned(),
                thumbnail_url: None,
                footer_text: None,
            }
        );
    }

    #[test]
    fn test_render_create_dangling_link_text() {
        let result = render_create(&field_map(&["message=hi", "link_text=X"]));
        assert_eq!(result, Err(RenderError::DanglingLinkText));
    }

    #[test]
    fn test_render_create_thumbnail_and_footer() {
        let output = render_create(&field_map(&[
            "message=hi",
            "thumbnail=http://img",
            "footer=sent via leise",
        ]))
        .unwrap();
        assert_eq!(
            output,
            RenderedOutput::Embed {
                description: "hi".to_owned(),
                thumbnail_url: Some("http://img".to_owned()),
                footer_text: Some("sent via leise".to_owned()),
            }
        );
    }

    #[test]
    fn test_render_create_unknown_fields_ignored() {
        let output = render_create(&field_map(&["message=hi", "color=red"])).unwrap();
        assert_eq!(
            output,
            RenderedOutput::PlainText {
                content: "hi".to_owned()
            }
        );
    }

    #[test]
    fn test_render_create_is_idempotent() {
        let map = field_map(&["message=hi", "link=http://x", "footer=f"]);
        assert_eq!(render_create(&map), render_create(&map));
    }

    #[test]
    fn test_render_edit_inherits_thumbnail_overrides_footer() {
        let previous = embed_previous("hi", Some("t"), None);
        let output = render_edit(&field_map(&["footer=new"]), &previous).unwrap();
        assert_eq!(
            output,
            RenderedOutput::Embed {
                description: "hi".to_owned(),
                thumbnail_url: Some("t".to_owned()),
                footer_text: Some("new".to_owned()),
            }
        );
    }

    #[test]
    fn test_render_edit_plain_text_stays_plain() {
        let previous = plain_previous("hi");
        let output = render_edit(&field_map(&["message=bye"]), &previous).unwrap();
        assert_eq!(
            output,
            RenderedOutput::PlainText {
                content: "bye".to_owned()
            }
        );
    }

    #[test]
    fn test_render_edit_empty_fields_keep_previous_text() {
        let previous = plain_previous("hi");
        let output = render_edit(&field_map(&[]), &previous).unwrap();
        assert_eq!(
            output,
            RenderedOutput::PlainText {
                content: "hi".to_owned()
            }
        );
    }

    #[test]
    fn test_render_edit_does_not_resurrect_previous_link() {
        // The previous embed carried a link line; an edit that omits both
        // link fields must not bring it back
        let previous = embed_previous("hi", None, Some("f"));
        let output = render_edit(&field_map(&["message=updated"]), &previous).unwrap();
        assert_eq!(
            output,
            RenderedOutput::Embed {
                description: "updated".to_owned(),
                thumbnail_url: None,
                footer_text: Some("f".to_owned()),
            }
        );
    }

    #[test]
    fn test_render_edit_previous_embed_stays_embed() {
        let previous = embed_previous("hi", None, None);
        let output = render_edit(&field_map(&["message=bye"]), &previous).unwrap();
        assert_eq!(
            output,
            RenderedOutput::Embed {
                description: "bye".to_owned(),
                thumbnail_url: None,
                footer_text: None,
            }
        );
    }

    #[test]
    fn test_render_edit_upgrades_plain_text_to_embed() {
        let previous = plain_previous("hi");
        let output = render_edit(&field_map(&["thumbnail=http://img"]), &previous).unwrap();
        assert_eq!(
            output,
            RenderedOutput::Embed {
                description: "hi".to_owned(),
                thumbnail_url: Some("http://img".to_owned()),
                footer_text: None,
            }
        );
    }

    #[test]
    fn test_render_edit_new_link_is_applied() {
        let previous = embed_previous("hi", None, None);
        let output =
            render_edit(&field_map(&["link=http://x", "link_text=X"]), &previous).unwrap();
        assert_eq!(
            output,
            RenderedOutput::Embed {
                description: "hi\n\n**[X](http://x)**".to_owned(),
                thumbnail_url: None,
                footer_text: None,
            }
        );
    }

    #[test]
    fn test_render_edit_dangling_link_text() {
        let previous = plain_previous("hi");
        let result = render_edit(&field_map(&["link_text=X"]), &previous);
        assert_eq!(result, Err(RenderError::DanglingLinkText));
    }

    #[test]
    fn test_previous_render_state_from_plain_message() {
        let message = FetchedMessage {
            author_id: 1,
            content: "hello".to_owned(),
            embed: None,
        };
        let state = PreviousRenderState::from_message(&message);
        assert!(!state.is_embed);
        assert_eq!(state.base_text, "hello");
        assert_eq!(state.thumbnail_url, None);
        assert_eq!(state.footer_text, None);
    }

    #[test]
    fn test_previous_render_state_strips_link_line() {
        let message = FetchedMessage {
            author_id: 1,
            content: String::new(),
            embed: Some(EmbedSnapshot {
                description: "hi\n\n**[X](http://x)**".to_owned(),
                thumbnail_url: Some("t".to_owned()),
                footer_text: None,
            }),
        };
        let state = PreviousRenderState::from_message(&message);
        assert!(state.is_embed);
        assert_eq!(state.base_text, "hi");
        assert_eq!(state.thumbnail_url, Some("t".to_owned()));
    }

    #[test]
    fn test_previous_render_state_embed_without_link_line() {
        let message = FetchedMessage {
            author_id: 1,
            content: String::new(),
            embed: Some(EmbedSnapshot {
                description: "just text".to_owned(),
                thumbnail_url: None,
                footer_text: Some("f".to_owned()),
            }),
        };
        let state = PreviousRenderState::from_message(&message);
        assert_eq!(state.base_text, "just text");
        assert_eq!(state.footer_text, Some("f".to_owned()));
    }

    #[test]
    fn test_previous_render_state_marker_in_user_text_truncates() {
        // Documented limitation: base text containing the marker is cut there
        let message = FetchedMessage {
            author_id: 1,
            content: String::new(),
            embed: Some(EmbedSnapshot {
                description: "before\n\n**[not a link line".to_owned(),
                thumbnail_url: None,
                footer_text: None,
            }),
        };
        let state = PreviousRenderState::from_message(&message);
        assert_eq!(state.base_text, "before");
    }
}
