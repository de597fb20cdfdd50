//! Parser for the legacy inline video header.
//!
//! Older backends announce a video by prefixing the text response:
//!
//! ```text
//! VIDEO_RESPONSE_TYPE=embedded|VIDEO_ID=dQw4w9WgXcQ|Here is your video
//! ```
//!
//! The header runs up to and including the second `|`; the rest is the
//! cleaned body.

use crate::{
    artifact::{LegacyVideo, VideoKind},
    error::{BullsError, Result},
};

pub(crate) const MARKER: &str = "VIDEO_RESPONSE_TYPE=";
const TYPE_KEY: &str = MARKER;
const ID_KEY: &str = "VIDEO_ID=";

pub(crate) fn has_header(text: &str) -> bool {
    text.starts_with(MARKER)
}

/// Split `text` at the end of its header. Returns `(header, body)`.
fn split_header(text: &str) -> Option<(&str, &str)> {
    let first = text.find('|')?;
    let second = first + 1 + text[first + 1..].find('|')?;
    Some(text.split_at(second + 1))
}

/// Value of `key` inside `header`, up to the next `|`. Empty values count as
/// absent.
fn header_value<'h>(header: &'h str, key: &str) -> Option<&'h str> {
    let start = header.find(key)? + key.len();
    let rest = &header[start..];
    let value = rest.split('|').next().unwrap_or(rest);
    (!value.is_empty()).then_some(value)
}

fn malformed(reason: impl Into<String>, header: &str) -> BullsError {
    BullsError::MalformedHeader {
        reason: reason.into(),
        header: header.to_owned(),
    }
}

pub(crate) fn parse(text: &str) -> Result<LegacyVideo> {
    let (header, body) =
        split_header(text).ok_or_else(|| malformed("header is not terminated by a second `|`", text))?;

    let kind = header_value(header, TYPE_KEY).ok_or_else(|| malformed("missing VIDEO_RESPONSE_TYPE", header))?;
    let video_id = header_value(header, ID_KEY).ok_or_else(|| malformed("missing VIDEO_ID", header))?;
    let kind = VideoKind::parse(kind)
        .ok_or_else(|| malformed(format!("unknown video type `{kind}`"), header))?;

    Ok(LegacyVideo {
        video_id: video_id.to_owned(),
        kind,
        cleaned_body: body.to_owned(),
        header: header.to_owned(),
    })
}
