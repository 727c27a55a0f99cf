use naxsi_wl_domain::config::{CliOverrides, Config, ConfigError, OutputFormat};
use std::io::Write;

#[test]
fn test_defaults_without_file() {
    let config = Config::load(None, CliOverrides::default()).unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.links.template, "/rules/view/{sid}");
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.rules.known_ids.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[logging]
level = "debug"

[rules]
known_ids = [1000, 1001]
rules_file = "/etc/nginx/naxsi_core.rules"

[links]
template = "https://waf.example/rules/{{sid}}"

[output]
format = "json"
"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let config = Config::load(Some(path), CliOverrides::default()).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.rules.known_ids, vec![1000, 1001]);
    assert_eq!(
        config.rules.rules_file.as_deref(),
        Some("/etc/nginx/naxsi_core.rules")
    );
    assert_eq!(config.links.render("1000"), "https://waf.example/rules/1000");
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_cli_overrides_win() {
    let config = Config::from_toml("[logging]\nlevel = \"error\"\n").unwrap();
    assert_eq!(config.logging.level, "error");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"error\"").unwrap();
    let path = file.path().to_str().unwrap();

    let config = Config::load(
        Some(path),
        CliOverrides {
            log_level: Some("trace".to_string()),
            output_format: Some(OutputFormat::Json),
            rules_file: Some("core.rules".to_string()),
        },
    )
    .unwrap();

    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.rules.rules_file.as_deref(), Some("core.rules"));
}

#[test]
fn test_missing_file_is_read_error() {
    let result = Config::load(Some("/nonexistent/naxsi-wl.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nformat = \"yaml\"").unwrap();
    let path = file.path().to_str().unwrap();

    let result = Config::load(Some(path), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLogLevel(_))
    ));

    let mut config = Config::default();
    config.links.template = "/rules/view".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLinkTemplate(_))
    ));
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("xml".parse::<OutputFormat>().is_err());
}
