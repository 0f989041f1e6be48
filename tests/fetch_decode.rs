use viewer_overlay::fetch::decode_viewer_count;

#[test]
fn live_stream_reports_its_viewers() {
    let body = r#"{
        "data": [
            {
                "id": "41375541868",
                "user_login": "museun",
                "type": "live",
                "viewer_count": 4712,
                "started_at": "2026-08-25T16:00:00Z"
            }
        ],
        "pagination": {}
    }"#;
    assert_eq!(decode_viewer_count(body).expect("payload should decode"), 4712);
}

#[test]
fn offline_channel_counts_as_zero() {
    let body = r#"{"data": [], "pagination": {}}"#;
    assert_eq!(decode_viewer_count(body).expect("payload should decode"), 0);
}

#[test]
fn missing_data_field_counts_as_zero() {
    assert_eq!(decode_viewer_count("{}").expect("payload should decode"), 0);
}

#[test]
fn first_stream_wins_when_several_are_listed() {
    let body = r#"{"data": [{"viewer_count": 10}, {"viewer_count": 99}]}"#;
    assert_eq!(decode_viewer_count(body).expect("payload should decode"), 10);
}

#[test]
fn garbage_payload_is_an_error() {
    assert!(decode_viewer_count("<html>offline</html>").is_err());
    assert!(decode_viewer_count(r#"{"data": [{"user_login": "x"}]}"#).is_err());
}
