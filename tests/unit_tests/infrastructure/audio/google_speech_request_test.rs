use ghana_names::domain::AudioClip;
use ghana_names::infrastructure::audio::{GoogleSpeechEngine, RecognizeResponse};

#[test]
fn given_default_engine_when_building_request_then_serializes_expected_shape() {
    let engine = GoogleSpeechEngine::new("key", None);
    let clip = AudioClip::new(b"hi".to_vec(), Some("audio/webm;codecs=opus"), None);

    let body = serde_json::to_value(engine.build_request(&clip)).unwrap();

    assert_eq!(body["config"]["encoding"], "WEBM_OPUS");
    assert_eq!(body["config"]["sampleRateHertz"], 48_000);
    assert_eq!(body["config"]["languageCode"], "en-US");
    assert_eq!(
        body["config"]["alternativeLanguageCodes"],
        serde_json::json!(["en-GH", "en-NG", "en-GB"])
    );
    assert_eq!(body["config"]["enableAutomaticPunctuation"], true);
    assert_eq!(body["config"]["model"], "latest_long");
    assert_eq!(body["config"]["useEnhanced"], true);
    assert_eq!(body["audio"]["content"], "aGk=");
}

#[test]
fn given_wav_clip_when_building_request_then_sample_rate_is_omitted() {
    let engine = GoogleSpeechEngine::new("key", None);
    let clip = AudioClip::new(vec![0u8; 16], Some("audio/wav"), None);

    let body = serde_json::to_value(engine.build_request(&clip)).unwrap();

    assert_eq!(body["config"]["encoding"], "LINEAR16");
    assert!(body["config"].get("sampleRateHertz").is_none());
}

#[test]
fn given_custom_languages_when_building_request_then_they_are_sent() {
    let engine = GoogleSpeechEngine::new("key", None)
        .with_languages("en-GH", vec!["tw-GH".to_string()])
        .with_model("default");
    let clip = AudioClip::new(vec![1u8], None, None);

    let body = serde_json::to_value(engine.build_request(&clip)).unwrap();

    assert_eq!(body["config"]["languageCode"], "en-GH");
    assert_eq!(body["config"]["alternativeLanguageCodes"], serde_json::json!(["tw-GH"]));
    assert_eq!(body["config"]["model"], "default");
}

#[test]
fn given_multiple_results_when_reading_transcript_then_joins_top_alternatives() {
    let response: RecognizeResponse = serde_json::from_value(serde_json::json!({
        "results": [
            { "alternatives": [ { "transcript": " my son was born " }, { "transcript": "ignored" } ] },
            { "alternatives": [] },
            { "alternatives": [ { "transcript": "on a Friday" } ] }
        ]
    }))
    .unwrap();

    assert_eq!(response.transcript(), "my son was born on a Friday");
}

#[test]
fn given_no_results_when_reading_transcript_then_returns_empty() {
    let response: RecognizeResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response.transcript(), "");
}
