use std::fs;
use std::path::PathBuf;
use van_deemter_toolbox::config::{load_or_default_at, Config, ConfigError};
use van_deemter_toolbox::deemter::SamplingDomain;

fn temp_config(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("van_deemter_toolbox_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = temp_config("created.toml");
    let cfg = load_or_default_at(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    let again = load_or_default_at(&path).expect("reload");
    assert_eq!(again, cfg);
}

#[test]
fn saved_settings_survive_reload() {
    let path = temp_config("saved.toml");
    let mut cfg = Config::default();
    cfg.language = "de".into();
    cfg.precision = 4;
    cfg.domain = SamplingDomain::new(0.5, 50.0, 1000).unwrap();
    cfg.save_to(&path).expect("save");
    let loaded = load_or_default_at(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn invalid_domain_in_file_is_rejected() {
    let path = temp_config("invalid.toml");
    fs::write(&path, "[domain]\nu_min = 0.0\nu_max = 200.0\nsamples = 400\n").unwrap();
    assert!(matches!(load_or_default_at(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = temp_config("malformed.toml");
    fs::write(&path, "precision = \"two\"\n").unwrap();
    assert!(matches!(load_or_default_at(&path), Err(ConfigError::Parse(_))));
}
