use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_and_rejects_garbage() {
    assert_eq!(parse_port(Some("8081")), Ok(8081));
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() }));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn backend_url_defaults_and_trims_trailing_slash() {
    assert_eq!(normalize_backend_url(None).as_deref(), Ok(DEFAULT_BACKEND_URL));
    assert_eq!(normalize_backend_url(Some("https://api.test/")).as_deref(), Ok("https://api.test"));
    assert_eq!(normalize_backend_url(Some(" http://10.0.0.2:8080// ")).as_deref(), Ok("http://10.0.0.2:8080"));
}

#[test]
fn backend_url_requires_http_scheme() {
    assert_eq!(
        normalize_backend_url(Some("localhost:8080")),
        Err(ConfigError::BackendScheme("localhost:8080".to_owned()))
    );
}

#[test]
fn unset_timeouts_fall_back_to_defaults() {
    assert_eq!(env_parse_u64("__SCORELY_TEST_UNSET_TIMEOUT_41__", 30), 30);
}

#[test]
fn zero_timeouts_fall_back_to_defaults() {
    let key = "__SCORELY_TEST_ZERO_TIMEOUT_77__";
    unsafe { std::env::set_var(key, "0") };
    assert_eq!(env_parse_u64(key, 5), 5);
    unsafe { std::env::set_var(key, " 12 ") };
    assert_eq!(env_parse_u64(key, 5), 12);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn timeouts_convert_to_durations() {
    let timeouts = BackendTimeouts { request_secs: 30, connect_secs: 5 };
    assert_eq!(timeouts.request(), std::time::Duration::from_secs(30));
    assert_eq!(timeouts.connect(), std::time::Duration::from_secs(5));
}
