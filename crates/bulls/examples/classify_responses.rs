use bulls::{BullsError, ResponseArtifact, backend::RawResponse, classify};

/// # Classifying canned backend replies
///
/// Runs a handful of reply bodies, as the backend would send them, through
/// the classifier and prints what the display layer would receive. No
/// network access needed:
///
/// ```bash
/// cargo run -p bulls --example classify_responses
/// ```
fn main() -> anyhow::Result<()> {
    let replies = [
        r#"{"response": "hello world"}"#,
        r#"{"response": "Enjoy!", "video_embed": {"video_id": "abc", "embed_html": "<iframe></iframe>"}}"#,
        r#"{"response": "VIDEO_RESPONSE_TYPE=embedded|VIDEO_ID=xyz|Here is your video"}"#,
        r#"{"response": "VIDEO_RESPONSE_TYPE=embedded|MISSING_ID|text"}"#,
        r#"{"success": true, "response": "Generated the image from prompt: a cat", "image": "aGVsbG8="}"#,
        r#"{"success": false, "response": "quota exceeded"}"#,
    ];

    for reply in replies {
        let raw = RawResponse::from_json(reply.as_bytes())?;
        match classify(raw) {
            Ok(ResponseArtifact::Text { body }) => println!("text:    {body}"),
            Ok(ResponseArtifact::StructuredVideo(video)) => {
                println!("video:   {} ({})", video.video_id, video.embed_markup)
            }
            Ok(ResponseArtifact::LegacyVideo(video)) => {
                println!("legacy:  {} [{}] {}", video.video_id, video.kind, video.cleaned_body)
            }
            Ok(ResponseArtifact::Image(image)) => {
                println!("image:   {} bytes", image.decode_image()?.len())
            }
            Err(err @ (BullsError::MalformedHeader { .. } | BullsError::GenerationFailed(_))) => {
                println!("error:   {}", err.display_text())
            }
            Err(other) => return Err(other.into()),
        }
    }

    Ok(())
}
