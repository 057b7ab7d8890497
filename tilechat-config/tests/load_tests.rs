use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;
use tilechat_config::{ConfigLoad, ConfigSource, WidgetConfig};
use tilechat_core::{AspectRatio, WrapMode};

fn lookup_from(
    pairs: &[(&str, String)],
) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let load = ConfigLoad::load_with(&lookup_from(&[]), dir.path()).unwrap();
    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config, WidgetConfig::default());
}

#[test]
fn env_path_wins_over_default_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tilechat.toml"),
        "api_base_url = \"https://default-file.example\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("explicit.json");
    fs::write(
        &explicit,
        r#"{"api_base_url": "https://explicit.example",
            "tiles": {"page_size": 5}}"#,
    )
    .unwrap();

    let lookup = lookup_from(&[(
        "TILECHAT_CONFIG_PATH",
        explicit.display().to_string(),
    )]);
    let load = ConfigLoad::load_with(&lookup, dir.path()).unwrap();
    assert_eq!(load.source, ConfigSource::EnvPath(explicit));
    assert_eq!(load.config.api_base_url, "https://explicit.example");
    assert_eq!(load.config.tiles.page_size, 5);
}

#[test]
fn inline_json_is_used_without_path() {
    let dir = TempDir::new().unwrap();
    let lookup = lookup_from(&[(
        "TILECHAT_CONFIG_JSON",
        r#"{"suggested_options": {"wrap_mode": "infinite"}}"#.to_string(),
    )]);
    let load = ConfigLoad::load_with(&lookup, dir.path()).unwrap();
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.suggested_options.wrap_mode, WrapMode::Infinite);
    assert_eq!(
        load.config.suggested_options.aspect_ratio,
        AspectRatio::STANDARD
    );
}

#[test]
fn default_file_in_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/tilechat.toml");
    fs::write(
        &path,
        "request_timeout_secs = 5\n\n[tiles]\ntick_interval_ms = 2500\n",
    )
    .unwrap();

    let load = ConfigLoad::load_with(&lookup_from(&[]), dir.path()).unwrap();
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.request_timeout_secs, 5);
    assert_eq!(load.config.tiles.tick_interval_ms, 2500);
}

#[test]
fn extensionless_file_accepts_either_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("widget.conf");
    fs::write(&path, r#"{"request_timeout_secs": 7}"#).unwrap();
    let lookup =
        lookup_from(&[("TILECHAT_CONFIG_PATH", path.display().to_string())]);
    let load = ConfigLoad::load_with(&lookup, dir.path()).unwrap();
    assert_eq!(load.config.request_timeout_secs, 7);
}

#[test]
fn api_url_override_applies_after_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tilechat.json"),
        r#"{"api_base_url": "https://from-file.example"}"#,
    )
    .unwrap();
    let lookup = lookup_from(&[(
        "TILECHAT_API_URL",
        "https://override.example".to_string(),
    )]);
    let load = ConfigLoad::load_with(&lookup, dir.path()).unwrap();
    assert_eq!(load.config.api_base_url, "https://override.example");
}

#[test]
fn schemeless_api_url_is_normalized_before_validation() {
    let dir = TempDir::new().unwrap();
    let lookup =
        lookup_from(&[("TILECHAT_API_URL", "localhost:8000/".to_string())]);
    let load = ConfigLoad::load_with(&lookup, dir.path()).unwrap();
    assert_eq!(load.config.api_base_url, "http://localhost:8000");
}

#[test]
fn invalid_values_are_rejected_with_source() {
    let dir = TempDir::new().unwrap();
    let lookup = lookup_from(&[(
        "TILECHAT_CONFIG_JSON",
        r#"{"tiles": {"tick_interval_ms": 0}}"#.to_string(),
    )]);
    let err = ConfigLoad::load_with(&lookup, dir.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("TILECHAT_CONFIG_JSON"), "{message}");
    assert!(message.contains("tiles.tick_interval_ms"), "{message}");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let lookup = lookup_from(&[(
        "TILECHAT_CONFIG_PATH",
        dir.path().join("nope.toml").display().to_string(),
    )]);
    assert!(ConfigLoad::load_with(&lookup, dir.path()).is_err());
}

#[test]
fn malformed_toml_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tilechat.toml");
    fs::write(&path, "tiles = [not toml").unwrap();
    let err = ConfigLoad::load_with(&lookup_from(&[]), dir.path()).unwrap_err();
    assert!(err.to_string().contains("tilechat.toml"));
}
