use super::{apply_env, apply_file, load_settings, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_dir(label: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("course_admin_{label}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    dir
}

#[test]
fn defaults_point_at_local_json_server() {
    let settings = Settings::default();
    assert_eq!(settings.api_url, "http://localhost:3000");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_overrides_known_keys_only() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        "api_url = \"http://courses.internal:8080\"\nunused = \"x\"\n",
    )
    .expect("parse");
    assert_eq!(settings.api_url, "http://courses.internal:8080");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "api_url = [").is_err());
}

#[test]
fn app_prefixed_env_wins_over_short_name() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("COURSE_API_URL", "http://short:1"),
        ("APP__API_URL", "http://prefixed:2"),
        ("COURSE_ADMIN_LOG", "debug"),
    ]);
    let mut settings = Settings::default();
    apply_env(&mut settings, |key| env.get(key).map(|v| v.to_string()));
    assert_eq!(settings.api_url, "http://prefixed:2");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn explicit_config_file_is_loaded() {
    let dir = temp_dir("explicit");
    let path = dir.join("custom.toml");
    fs::write(&path, "log_filter = \"client_core=debug\"\n").expect("write");

    let settings = load_settings(Some(path.as_path())).expect("load");
    if env::var("COURSE_ADMIN_LOG").is_err() && env::var("APP__LOG_FILTER").is_err() {
        assert_eq!(settings.log_filter, "client_core=debug");
    }

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let dir = temp_dir("missing");
    let err = load_settings(Some(dir.join("absent.toml").as_path())).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config file"));
    fs::remove_dir_all(dir).expect("cleanup");
}
