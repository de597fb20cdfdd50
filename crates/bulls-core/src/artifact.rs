//! Typed response artifacts handed to the display layer.
//!
//! An artifact is created once per backend call and never mutated.
//! Enrichment produces a new artifact instead of patching the old one.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::error::{BullsError, Result};

/// Classified content of a single backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseArtifact {
    Text { body: String },
    StructuredVideo(StructuredVideo),
    LegacyVideo(LegacyVideo),
    Image(ImageArtifact),
}

impl ResponseArtifact {
    /// Text to show next to (or instead of) any media.
    pub fn body(&self) -> &str {
        match self {
            ResponseArtifact::Text { body } => body,
            ResponseArtifact::StructuredVideo(video) => video.caption.as_deref().unwrap_or(""),
            ResponseArtifact::LegacyVideo(video) => &video.cleaned_body,
            ResponseArtifact::Image(image) => &image.body,
        }
    }
}

/// A video with ready-to-embed player markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredVideo {
    pub video_id: String,
    pub embed_markup: String,
    /// Response text shown alongside the player, if any.
    pub caption: Option<String>,
}

/// How a legacy header says the video should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// Needs an embed fetch before it can be played inline.
    Embedded,
    /// Stored by the backend; playable by reference only.
    Downloaded,
    /// Link to the video on its host; playable by reference only.
    Reference,
}

impl VideoKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            VideoKind::Embedded => "embedded",
            VideoKind::Downloaded => "downloaded",
            VideoKind::Reference => "reference",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value {
            "embedded" => Some(VideoKind::Embedded),
            "downloaded" => Some(VideoKind::Downloaded),
            "reference" => Some(VideoKind::Reference),
            _ => None,
        }
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A video announced through the legacy inline text header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyVideo {
    pub video_id: String,
    pub kind: VideoKind,
    /// Response text with the header stripped.
    pub cleaned_body: String,
    /// The header exactly as received, up to and including its second `|`.
    pub header: String,
}

impl LegacyVideo {
    /// Whether [`crate::materialize_legacy_video`] applies to this video.
    pub fn needs_enrichment(&self) -> bool {
        self.kind == VideoKind::Embedded
    }

    /// The original response text, header included.
    pub fn raw_text(&self) -> String {
        format!("{}{}", self.header, self.cleaned_body)
    }
}

/// A generated image delivered inline as base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    pub body: String,
    pub image_base64: String,
}

impl ImageArtifact {
    /// Decode the image bytes. A leading `data:<mime>;base64,` prefix is accepted.
    pub fn decode_image(&self) -> Result<Vec<u8>> {
        let payload = match self.image_base64.split_once(";base64,") {
            Some((prefix, data)) if prefix.starts_with("data:") => data,
            _ => self.image_base64.as_str(),
        };
        STANDARD
            .decode(payload.trim())
            .map_err(|err| BullsError::Invalid(format!("image payload is not valid base64: {err}")))
    }
}

/// Size of the embedded video player in pixels, always within
/// `[MIN_SIDE, MAX_SIDE]` on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDimensions {
    width: u32,
    height: u32,
}

impl PlayerDimensions {
    pub const MIN_SIDE: u32 = 200;
    pub const MAX_SIDE: u32 = 1200;

    /// Create dimensions, clamping each side into the range the embed
    /// endpoint accepts.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.clamp(Self::MIN_SIDE, Self::MAX_SIDE),
            height: height.clamp(Self::MIN_SIDE, Self::MAX_SIDE),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for PlayerDimensions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(payload: &str) -> ImageArtifact {
        ImageArtifact {
            body: "Generated the image from prompt: a cat".into(),
            image_base64: payload.into(),
        }
    }

    #[test]
    fn decodes_plain_and_data_url_payloads() {
        assert_eq!(image("aGVsbG8=").decode_image().unwrap(), b"hello");
        assert_eq!(
            image("data:image/png;base64,aGVsbG8=").decode_image().unwrap(),
            b"hello"
        );
    }

    #[test]
    fn rejects_garbage_payload() {
        assert!(matches!(
            image("not base64 at all!").decode_image(),
            Err(BullsError::Invalid(_))
        ));
    }

    #[test]
    fn player_dimensions_are_clamped() {
        let dimensions = PlayerDimensions::new(100, 5000);
        assert_eq!((dimensions.width(), dimensions.height()), (200, 1200));
        assert_eq!(PlayerDimensions::new(200, 1200), dimensions);
        assert_eq!(PlayerDimensions::default(), PlayerDimensions::new(640, 360));
    }

    #[test]
    fn only_embedded_videos_need_enrichment() {
        let mut video = LegacyVideo {
            video_id: "xyz".into(),
            kind: VideoKind::Embedded,
            cleaned_body: "Here".into(),
            header: "VIDEO_RESPONSE_TYPE=embedded|VIDEO_ID=xyz|".into(),
        };
        assert!(video.needs_enrichment());
        video.kind = VideoKind::Downloaded;
        assert!(!video.needs_enrichment());
    }
}
