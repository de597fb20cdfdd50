//! Enrichment of legacy video references.
//!
//! A [`LegacyVideo`] of kind `embedded` only names a video. Turning it into
//! a playable [`StructuredVideo`] takes one embed fetch against the backend.
//! The fetch is attempted once; on failure the caller shows the cleaned body
//! alone.

use crate::{
    artifact::{LegacyVideo, PlayerDimensions, StructuredVideo},
    backend::{EmbedBackend, EmbedRequest},
    error::{BullsError, Result},
};

/// Fetch the embed markup for `video` and produce a new structured video
/// captioned with the cleaned response text. Wrap it in
/// [`crate::ResponseArtifact::StructuredVideo`] to hand it to the display
/// layer.
///
/// # Errors
///
/// * [`BullsError::EnrichmentNotApplicable`] – the video is not `embedded`.
/// * [`BullsError::EmbedFetch`] – the backend call failed or reported
///   `success: false`.
pub async fn materialize_legacy_video<B>(
    video: &LegacyVideo,
    dimensions: PlayerDimensions,
    backend: &B,
) -> Result<StructuredVideo>
where
    B: EmbedBackend + ?Sized,
{
    if !video.needs_enrichment() {
        return Err(BullsError::EnrichmentNotApplicable(video.kind));
    }

    log_event!(
        debug,
        video_id = %video.video_id,
        width = dimensions.width(),
        height = dimensions.height(),
        "fetching video embed"
    );

    let request = EmbedRequest {
        video_id: video.video_id.clone(),
        dimensions,
    };

    let response = backend.fetch_embed(request).await.map_err(|err| match err {
        BullsError::EmbedFetch(_) => err,
        other => BullsError::EmbedFetch(other.to_string()),
    })?;

    match response.embed_html {
        Some(embed_markup) if response.success => Ok(StructuredVideo {
            video_id: video.video_id.clone(),
            embed_markup,
            caption: Some(video.cleaned_body.clone()),
        }),
        _ => {
            let reason = response
                .error
                .unwrap_or_else(|| "backend returned no embed markup".to_owned());
            log_event!(warn, video_id = %video.video_id, reason = %reason, "video embed rejected");
            Err(BullsError::EmbedFetch(reason))
        }
    }
}
