// File: tests/config_defaults.rs
use taskscribe::config::Config;

#[test]
fn test_absent_keys_fall_back_to_defaults() {
    let config: Config = toml::from_str("api_key = \"k\"").expect("minimal config parses");

    assert_eq!(config.api_key, "k");
    assert_eq!(config.model, "gemini-2.0-flash");
    assert!(config.endpoint.contains("generativelanguage.googleapis.com"));
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_config_roundtrips_through_toml() {
    let config = Config {
        api_key: "secret".to_string(),
        model: "gemini-2.0-pro".to_string(),
        ..Config::default()
    };

    let serialized = toml::to_string_pretty(&config).expect("serializes");
    let parsed: Config = toml::from_str(&serialized).expect("parses back");

    assert_eq!(parsed.api_key, "secret");
    assert_eq!(parsed.model, "gemini-2.0-pro");
    assert_eq!(parsed.endpoint, config.endpoint);
}
