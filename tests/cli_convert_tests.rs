//! End-to-end tests for `huepick convert` and argument handling.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the huepick binary
fn huepick_bin() -> String {
    std::env::var("CARGO_BIN_EXE_huepick").unwrap_or_else(|_| "target/release/huepick".to_string())
}

fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    Command::new(huepick_bin())
        .env("HUEPICK_CONFIG_DIR", dir.path())
        .env_remove("HUEPICK_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_convert_hex_human_readable() {
    let output = run(&["convert", "#336699"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hex:     336699"));
    assert!(stdout.contains("Decimal: 3368601"));
    assert!(stdout.contains("RGBA:    rgba(51, 102, 153, 255)"));
    assert!(stdout.contains("HSB:     hsb(210, 67%, 60%)"));
    assert!(stdout.contains("CMYK:    cmyk(67%, 33%, 0%, 40%)"));
}

#[test]
fn test_convert_decimal_json() {
    let output = run(&["convert", "16744448", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["hex"], "FF8000");
    assert_eq!(result["decimal"], 16_744_448);
    assert_eq!(result["rgba"]["r"], 255);
    assert_eq!(result["rgba"]["a"], 255);
    assert_eq!(result["hsb"]["hue"], 30);
}

#[test]
fn test_convert_keeps_alpha() {
    let output = run(&["convert", "#80FF0000", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["hex"], "80FF0000");
    assert_eq!(result["rgba"]["a"], 128);
    // Decimal drops alpha
    assert_eq!(result["decimal"], 0x00FF_0000);
}

#[test]
fn test_convert_short_hex() {
    let output = run(&["convert", "f80", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["hex"], "FF8800");
}

#[test]
fn test_convert_invalid_color() {
    for color in ["zzzzzz", "#12345", "16777216"] {
        let output = run(&["convert", color]);
        assert_eq!(
            output.status.code(),
            Some(2),
            "'{color}' should be rejected"
        );
        assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
    }
}

#[test]
fn test_picker_rejects_invalid_starting_color() {
    // Validation happens before the terminal is touched
    let output = run(&["not-a-color"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_format_flag() {
    let output = run(&["#FFFFFF", "--format", "yaml"]);
    // clap usage errors
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_version() {
    let output = run(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
