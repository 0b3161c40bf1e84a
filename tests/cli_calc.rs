//! Tests for the non-interactive `calc` subcommand, run against the built binary.

use std::process::{Command, Output};

fn calc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bmi-tui"))
        .args(["--config", "/nonexistent/bmi-tui/config.toml"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_calc() {
    let output = Command::new(env!("CARGO_BIN_EXE_bmi-tui"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calc"));
    assert!(stdout.contains("--locale"));
}

#[test]
fn test_calc_prints_result() {
    let output = calc(&["calc", "--height", "170", "--weight", "70"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ваш BMI: 24.2"));
    assert!(stdout.contains("Нормальный вес"));
}

#[test]
fn test_calc_english_locale() {
    let output = calc(&["--locale", "en", "calc", "--height", "180", "--weight", "50"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Your BMI: 15.4"));
    assert!(stdout.contains("Underweight"));
}

#[test]
fn test_calc_json() {
    let output = calc(&["calc", "--height", "160", "--weight", "90", "--json"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["bmi"], 35.2);
    assert_eq!(report["category"], "obese");
    assert_eq!(report["label"], "Ожирение");
    let position = report["scale_position"].as_f64().unwrap();
    assert!((position - 0.88).abs() < 1e-9);
}

#[test]
fn test_calc_height_out_of_range() {
    let output = calc(&["calc", "--height", "99", "--weight", "70"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Рост должен быть от 100 до 250 см"));
}

#[test]
fn test_calc_weight_out_of_range() {
    let output = calc(&["calc", "--height", "170", "--weight", "301"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Вес должен быть от 30 до 300 кг"));
}

#[test]
fn test_calc_negative_height_is_out_of_range() {
    let output = calc(&["calc", "--height", "-170", "--weight", "70"]);
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(target_os = "linux")]
#[test]
fn test_calc_reads_default_config_location() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("bmi-tui");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[ui]\nlocale = \"en\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bmi-tui"))
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["calc", "--height", "170", "--weight", "70"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Your BMI: 24.2"), "got: {stdout}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_explicit_config_overrides_default_location() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("bmi-tui");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[ui]\nlocale = \"en\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bmi-tui"))
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["--config", "/nonexistent/bmi-tui/config.toml"])
        .args(["calc", "--height", "170", "--weight", "70"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ваш BMI: 24.2"), "got: {stdout}");
}
