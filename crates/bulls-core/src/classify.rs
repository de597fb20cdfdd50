//! Response content classifier.
//!
//! [`classify()`] inspects a [`RawResponse`] in a fixed precedence order, and
//! the first match wins:
//!
//! 1. a complete `video_embed` field → [`ResponseArtifact::StructuredVideo`]
//! 2. a text body starting with `VIDEO_RESPONSE_TYPE=` →
//!    [`ResponseArtifact::LegacyVideo`]
//! 3. a `success` flag: `true` with an `image` → [`ResponseArtifact::Image`],
//!    `false` → [`BullsError::GenerationFailed`]
//! 4. anything else → [`ResponseArtifact::Text`]
//!
//! Ambiguity never fails; only a malformed legacy header or a reported
//! generation failure does.

use crate::{
    artifact::{ImageArtifact, ResponseArtifact, StructuredVideo},
    backend::{RawResponse, RawVideoEmbed},
    error::{BullsError, Result},
    legacy,
};

/// Classify a backend reply into a displayable artifact.
pub fn classify(raw: RawResponse) -> Result<ResponseArtifact> {
    let RawResponse {
        response,
        video_embed,
        success,
        image,
    } = raw;

    if let Some(RawVideoEmbed {
        video_id: Some(video_id),
        embed_html: Some(embed_markup),
    }) = video_embed
    {
        log_event!(debug, video_id = %video_id, "classified structured video");
        return Ok(ResponseArtifact::StructuredVideo(StructuredVideo {
            video_id,
            embed_markup,
            caption: response,
        }));
    }

    let body = response.unwrap_or_default();

    if legacy::has_header(&body) {
        return match legacy::parse(&body) {
            Ok(video) => {
                log_event!(debug, video_id = %video.video_id, kind = %video.kind, "classified legacy video");
                Ok(ResponseArtifact::LegacyVideo(video))
            }
            Err(err) => {
                log_event!(warn, error = %err, "legacy video header rejected");
                Err(err)
            }
        };
    }

    match (success, image) {
        (Some(false), _) => {
            log_event!(warn, message = %body, "image generation failed");
            Err(BullsError::GenerationFailed(body))
        }
        (Some(true), Some(image_base64)) => {
            log_event!(debug, bytes = image_base64.len(), "classified generated image");
            Ok(ResponseArtifact::Image(ImageArtifact { body, image_base64 }))
        }
        _ => Ok(ResponseArtifact::Text { body }),
    }
}
