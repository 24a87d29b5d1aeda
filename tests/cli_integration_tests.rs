//! Integration tests for the xfce4-terminal-themes binary
//!
//! Each test builds a throwaway config directory and points the binary at it
//! through `XDG_HOME` or `HOME`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to read a test fixture
fn read_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}", name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
}

fn terminal_dir(base: &Path) -> PathBuf {
    base.join("xfce4").join("terminal")
}

/// Creates a base dir holding the given terminalrc and themes files
fn setup(terminalrc: Option<&str>, themes: Option<&str>) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = terminal_dir(temp_dir.path());
    fs::create_dir_all(&dir).unwrap();

    if let Some(content) = terminalrc {
        fs::write(dir.join("terminalrc"), content).unwrap();
    }
    if let Some(content) = themes {
        fs::write(dir.join("themes"), content).unwrap();
    }

    temp_dir
}

fn setup_fixtures() -> TempDir {
    setup(
        Some(&read_fixture("terminalrc")),
        Some(&read_fixture("themes")),
    )
}

fn command(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("xfce4-terminal-themes").unwrap();
    cmd.env("XDG_HOME", base)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn read_terminalrc(base: &Path) -> String {
    fs::read_to_string(terminal_dir(base).join("terminalrc")).unwrap()
}

#[test]
fn test_list_themes() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .arg("--themes")
        .assert()
        .success()
        .stdout("Dark\nLight\nSolarized Dark\n");
}

#[test]
fn test_list_themes_short_flag() {
    let temp_dir = setup(Some("[Configuration]\n"), Some("[Light]\na=1\n[Dark]\na=2\n"));

    command(temp_dir.path())
        .arg("-l")
        .assert()
        .success()
        .stdout("Dark\nLight\n");
}

#[test]
fn test_list_themes_empty_catalog() {
    let temp_dir = setup(Some("[Configuration]\n"), Some(""));

    command(temp_dir.path())
        .arg("-l")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_list_themes_jsonl() {
    let temp_dir = setup_fixtures();

    let output = command(temp_dir.path())
        .args(["--format", "jsonl", "-l"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let names: Vec<String> = text
        .lines()
        .map(|line| {
            let record: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(record["type"], "theme");
            record["name"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(names, vec!["Dark", "Light", "Solarized Dark"]);
}

#[test]
fn test_current_theme() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .arg("--current")
        .assert()
        .success()
        .stdout("Theme name: Zenburn\nFont name: Monospace 10\n");
}

#[test]
fn test_current_theme_missing_keys() {
    let temp_dir = setup(Some("[Configuration]\nMiscBell=FALSE\n"), Some(""));

    command(temp_dir.path())
        .arg("-c")
        .assert()
        .success()
        .stdout("Theme name: \nFont name: \n");
}

#[test]
fn test_current_theme_jsonl() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .args(["-c", "--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"current""#))
        .stdout(predicate::str::contains(r#""theme_name":"Zenburn""#))
        .stdout(predicate::str::contains(r#""font_name":"Monospace 10""#));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();

    command(temp_dir.path())
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" 0.1.0\n"))
        .stdout(predicate::str::contains("xfce4-terminal-themes"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_program_name() {
    use assert_cmd::assert::OutputAssertExt;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::process::CommandExt;

    let temp_dir = setup_fixtures();
    let bin = assert_cmd::cargo::cargo_bin("xfce4-terminal-themes");

    for args in [&["-V"][..], &["-h"][..], &["Dark"][..]] {
        std::process::Command::new(&bin)
            .arg0(OsStr::from_bytes(b"themes\xff"))
            .env("XDG_HOME", temp_dir.path())
            .env_remove("RUST_LOG")
            .args(args)
            .assert()
            .success();
    }

    std::process::Command::new(&bin)
        .arg0(OsStr::from_bytes(b"themes\xff"))
        .arg("-V")
        .assert()
        .success()
        .stdout("themes\u{fffd} 0.1.0\n");

    assert!(read_terminalrc(temp_dir.path()).contains("ThemeName=Dark\n"));
}

#[test]
fn test_help_goes_to_stderr() {
    let temp_dir = TempDir::new().unwrap();

    command(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("[OPTIONS|THEME NAME]"))
        .stderr(predicate::str::contains("-l, --themes"));
}

#[test]
fn test_help_wins_over_other_flags() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .args(["-l", "-h", "Dark"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Usage:"));

    assert_eq!(read_terminalrc(temp_dir.path()), read_fixture("terminalrc"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("--current"));
}

#[test]
fn test_apply_theme() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .arg("Dark")
        .assert()
        .success()
        .stdout("");

    let config = read_terminalrc(temp_dir.path());
    assert!(config.contains("ColorForeground=#ffffff\n"));
    assert!(config.contains("ColorBackground=#000000\n"));
    assert!(config.contains("FontName=Hack 11\n"));
    assert!(config.contains("ThemeName=Dark\n"));
    // Keys the theme does not mention stay
    assert!(config.contains("MiscDefaultGeometry=80x24\n"));
    assert!(config.contains(
        "ColorPalette=#3f3f3f;#705050;#60b48a;#dfaf8f;#9ab8d7;#dc8cc3;#8cd0d3;#dcdcdc\n"
    ));

    command(temp_dir.path())
        .arg("-c")
        .assert()
        .success()
        .stdout("Theme name: Dark\nFont name: Hack 11\n");
}

#[test]
fn test_apply_multi_word_theme() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .args(["Solarized", "Dark"])
        .assert()
        .success();

    let config = read_terminalrc(temp_dir.path());
    assert!(config.contains("ThemeName=Solarized Dark\n"));
    assert!(config.contains(
        "ColorPalette=#073642;#dc322f;#859900;#b58900;#268bd2;#d33682;#2aa198;#eee8d5\n"
    ));
}

#[test]
fn test_apply_twice_is_idempotent() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path()).arg("Light").assert().success();
    let once = read_terminalrc(temp_dir.path());

    command(temp_dir.path()).arg("Light").assert().success();
    let twice = read_terminalrc(temp_dir.path());

    assert_eq!(once, twice);
}

#[test]
fn test_apply_unknown_theme() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .arg("Nope")
        .assert()
        .success()
        .stdout("")
        .stderr("");

    assert_eq!(read_terminalrc(temp_dir.path()), read_fixture("terminalrc"));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = setup(None, Some(&read_fixture("themes")));

    command(temp_dir.path())
        .arg("Dark")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Failed to read file:"))
        .stdout(predicate::str::contains("terminalrc"));

    assert!(!terminal_dir(temp_dir.path()).join("terminalrc").exists());
}

#[test]
fn test_missing_themes_file() {
    let temp_dir = setup(Some(&read_fixture("terminalrc")), None);

    command(temp_dir.path())
        .arg("-l")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Failed to read file:"))
        .stdout(predicate::str::contains("themes"));
}

#[test]
fn test_malformed_themes_file() {
    let temp_dir = setup(Some(&read_fixture("terminalrc")), Some("[Dark\n"));

    command(temp_dir.path())
        .arg("-c")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unclosed section header"));
}

#[test]
fn test_home_fallback() {
    let home = TempDir::new().unwrap();
    let base = home.path().join(".config");
    let dir = terminal_dir(&base);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("terminalrc"), read_fixture("terminalrc")).unwrap();
    fs::write(dir.join("themes"), read_fixture("themes")).unwrap();

    Command::cargo_bin("xfce4-terminal-themes")
        .unwrap()
        .env_remove("XDG_HOME")
        .env("HOME", home.path())
        .arg("-c")
        .assert()
        .success()
        .stdout("Theme name: Zenburn\nFont name: Monospace 10\n");

    Command::cargo_bin("xfce4-terminal-themes")
        .unwrap()
        .env("XDG_HOME", "")
        .env("HOME", home.path())
        .arg("-l")
        .assert()
        .success()
        .stdout("Dark\nLight\nSolarized Dark\n");
}

#[test]
fn test_unknown_flag_is_rejected() {
    let temp_dir = setup_fixtures();

    command(temp_dir.path())
        .arg("--bogus")
        .assert()
        .failure()
        .code(2);
}
