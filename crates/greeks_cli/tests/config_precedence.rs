//! Configuration layering: file < environment < command line.

use std::io::Write;

use greeks_cli::commands;
use greeks_cli::config::{
    build_config_with, env, CliArgs, CliConfig, ConfigError, InputsSection, LogLevel,
    OutputFormat,
};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn no_env(_: &str) -> Option<String> {
    None
}

const FILE_CONFIG: &str = r#"
log_level = "warn"
format = "csv"
precision = 3

[inputs]
spot = 100.0
strike = 95.0
expiry = 0.25
rate = 0.01
volatility = 0.3
"#;

#[test]
fn test_file_values_loaded() {
    let file = config_file(FILE_CONFIG);
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..CliArgs::default()
    };

    let config = build_config_with(&cli, no_env).unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.format, OutputFormat::Csv);
    assert_eq!(config.precision, 3);

    let inputs = config.pricing_inputs().unwrap();
    assert_eq!(inputs.spot(), 100.0);
    assert_eq!(inputs.volatility(), 0.3);
}

#[test]
fn test_env_overrides_file() {
    let file = config_file(FILE_CONFIG);
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..CliArgs::default()
    };

    let config = build_config_with(&cli, |key| match key {
        env::FORMAT => Some("json".to_string()),
        env::SPOT => Some("101.5".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.inputs.spot, Some(101.5));
    // Untouched keys keep the file value
    assert_eq!(config.precision, 3);
    assert_eq!(config.inputs.strike, Some(95.0));
}

#[test]
fn test_cli_overrides_env_and_file() {
    let file = config_file(FILE_CONFIG);
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        format: Some("table".to_string()),
        inputs: InputsSection {
            spot: Some(99.0),
            ..InputsSection::default()
        },
        ..CliArgs::default()
    };

    let config = build_config_with(&cli, |key| match key {
        env::FORMAT => Some("json".to_string()),
        env::SPOT => Some("101.5".to_string()),
        env::RATE => Some("0.02".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.format, OutputFormat::Table);
    assert_eq!(config.inputs.spot, Some(99.0));
    assert_eq!(config.inputs.rate, Some(0.02));
    assert_eq!(config.inputs.volatility, Some(0.3));
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = config_file("precision = \"six\"\n");
    let err = CliConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FileError(_)));

    let file = config_file("precision = 40\n");
    let err = CliConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPrecision(_)));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cli = CliArgs {
        config_file: Some(dir.path().join("absent.toml")),
        ..CliArgs::default()
    };
    assert!(matches!(
        build_config_with(&cli, no_env),
        Err(ConfigError::FileError(_))
    ));
}

#[test]
fn test_file_inputs_drive_evaluation() {
    let file = config_file(FILE_CONFIG);
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..CliArgs::default()
    };
    let config = build_config_with(&cli, no_env).unwrap();

    let mut out = Vec::new();
    commands::evaluate::run(&config, false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "greek,call,put");

    let delta: Vec<f64> = lines[1]
        .split(',')
        .skip(1)
        .map(|v| v.parse().unwrap())
        .collect();
    // In the money: call delta above one half
    assert!(delta[0] > 0.5);
    approx::assert_relative_eq!(delta[0] - delta[1], 1.0, epsilon = 2e-3);
}
