use bulls::{
    BullsError, ResponseArtifact, StructuredVideo, VideoKind,
    backend::RawResponse,
    classify,
};
use serde_json::json;

fn classify_json(value: serde_json::Value) -> bulls::Result<ResponseArtifact> {
    classify(serde_json::from_value::<RawResponse>(value)?)
}

#[test]
fn structured_video_field() {
    let artifact = classify_json(json!({
        "video_embed": {"video_id": "abc", "embed_html": "<iframe...>"}
    }))
    .unwrap();
    assert_eq!(
        artifact,
        ResponseArtifact::StructuredVideo(StructuredVideo {
            video_id: "abc".into(),
            embed_markup: "<iframe...>".into(),
            caption: None,
        })
    );
}

#[test]
fn legacy_header_and_round_trip() {
    let raw = "VIDEO_RESPONSE_TYPE=embedded|VIDEO_ID=xyz|Here is your video";
    let ResponseArtifact::LegacyVideo(video) = classify_json(json!({ "response": raw })).unwrap() else {
        panic!("expected a legacy video");
    };
    assert_eq!(video.video_id, "xyz");
    assert_eq!(video.kind, VideoKind::Embedded);
    assert_eq!(video.cleaned_body, "Here is your video");
    assert_eq!(video.raw_text(), raw);
}

#[test]
fn malformed_header() {
    let err = classify_json(json!({"response": "VIDEO_RESPONSE_TYPE=embedded|MISSING_ID|text"})).unwrap_err();
    assert!(matches!(err, BullsError::MalformedHeader { .. }));
}

#[test]
fn generation_failure() {
    let err = classify_json(json!({"success": false, "response": "quota exceeded"})).unwrap_err();
    assert!(matches!(err, BullsError::GenerationFailed(ref message) if message == "quota exceeded"));
}

#[test]
fn plain_text() {
    assert_eq!(
        classify_json(json!({"response": "hello world"})).unwrap(),
        ResponseArtifact::Text {
            body: "hello world".into()
        }
    );
}
