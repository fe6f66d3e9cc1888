use anyhow::Result;
use std::process::Command;
use tempfile::TempDir;

const FIXTURE_INPUT: &str = include_str!("fixtures/postgis_config.h");
const FIXTURE_EXPECTED: &str = include_str!("fixtures/festival_config.h");

fn festival_config() -> Command {
    Command::new(env!("CARGO_BIN_EXE_festival-config"))
}

#[test]
fn test_missing_argument_is_usage_error_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = festival_config().current_dir(temp_dir.path()).output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("POSTGIS_CONFIG_H"));
    assert!(!temp_dir.path().join("festival_config.h").exists());
    Ok(())
}

#[test]
fn test_writes_festival_config_in_current_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("postgis_config.h"), FIXTURE_INPUT)?;

    let output = festival_config()
        .current_dir(temp_dir.path())
        .arg("postgis_config.h")
        .output()?;

    assert!(output.status.success());
    let generated = std::fs::read_to_string(temp_dir.path().join("festival_config.h"))?;
    assert_eq!(generated, FIXTURE_EXPECTED);
    Ok(())
}

#[test]
fn test_missing_input_exits_with_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = festival_config()
        .current_dir(temp_dir.path())
        .arg("nowhere/postgis_config.h")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot find"));
    assert!(!temp_dir.path().join("festival_config.h").exists());
    Ok(())
}

#[test]
fn test_dry_run_prints_header_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("postgis_config.h"), FIXTURE_INPUT)?;

    let output = festival_config()
        .current_dir(temp_dir.path())
        .args(["postgis_config.h", "--dry-run"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, FIXTURE_EXPECTED);
    assert!(!temp_dir.path().join("festival_config.h").exists());
    Ok(())
}

#[test]
fn test_settings_file_and_output_flag_precedence() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("postgis_config.h"), FIXTURE_INPUT)?;
    std::fs::write(
        temp_dir.path().join("festival.toml"),
        "[output]\npath = \"from_file.h\"\n\n[header]\nguard = \"FROM_FILE_H\"\n",
    )?;

    let output = festival_config()
        .current_dir(temp_dir.path())
        .args(["postgis_config.h", "-c", "festival.toml"])
        .output()?;
    assert!(output.status.success());
    let generated = std::fs::read_to_string(temp_dir.path().join("from_file.h"))?;
    assert!(generated.contains("#ifndef FROM_FILE_H\n"));
    assert!(generated.ends_with("#endif /* FROM_FILE_H */"));

    let output = festival_config()
        .current_dir(temp_dir.path())
        .args(["postgis_config.h", "-c", "festival.toml", "-o", "from_flag.h"])
        .output()?;
    assert!(output.status.success());
    assert!(temp_dir.path().join("from_flag.h").exists());
    Ok(())
}

#[test]
fn test_invalid_guard_in_settings_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("postgis_config.h"), FIXTURE_INPUT)?;
    std::fs::write(
        temp_dir.path().join("festival.toml"),
        "[header]\nguard = \"bad guard\"\n",
    )?;

    let output = festival_config()
        .current_dir(temp_dir.path())
        .args(["postgis_config.h", "--config", "festival.toml"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("festival_config.h").exists());
    Ok(())
}

#[test]
fn test_missing_settings_file_is_configuration_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("postgis_config.h"), FIXTURE_INPUT)?;

    let output = festival_config()
        .current_dir(temp_dir.path())
        .args(["postgis_config.h", "-c", "missing.toml"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read settings file missing.toml"));
    assert!(!stderr.contains("postgis_config.h; run PostGIS configure"));
    assert!(!temp_dir.path().join("festival_config.h").exists());
    Ok(())
}
