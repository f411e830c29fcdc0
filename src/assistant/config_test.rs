use super::*;

#[test]
fn default_points_at_local_backend() {
    let cfg = AssistantConfig::default();
    assert_eq!(cfg.endpoint, "http://127.0.0.1:8000/chat");
    assert_eq!(cfg.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn with_endpoint_trims_trailing_slashes() {
    let cfg = AssistantConfig::default().with_endpoint("https://example.test/chat//");
    assert_eq!(cfg.endpoint, "https://example.test/chat");
}

#[test]
fn with_connect_timeout_overrides_default() {
    let cfg = AssistantConfig::default().with_connect_timeout_secs(3);
    assert_eq!(cfg.connect_timeout_secs, 3);
    assert_eq!(cfg.endpoint, DEFAULT_ASSISTANT_ENDPOINT);
}
