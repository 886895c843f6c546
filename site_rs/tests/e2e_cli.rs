//! End-to-end CLI tests for riscv-site

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get path to test fixtures
fn fixture_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/libriscv/site.toml")
}

fn riscv_site() -> Command {
    cargo_bin_cmd!("riscv-site")
}

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("site.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        riscv_site()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("catalog"));
    }

    #[test]
    fn shows_version() {
        riscv_site()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        riscv_site()
            .arg("check")
            .arg("--config")
            .arg(temp.path().join("nope.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read site config"));
    }
}

// ============================================
// Rendering
// ============================================

mod rendering {
    use super::*;

    #[test]
    fn render_prints_full_page() {
        riscv_site()
            .arg("render")
            .arg("--config")
            .arg(fixture_config())
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("RISC-V userspace emulator library"))
            .stdout(predicate::str::contains("href=\"/docs/intro\""))
            .stdout(predicate::str::contains("Lowest possible latency"));
    }

    #[test]
    fn render_honours_base_url_override() {
        riscv_site()
            .args(["render", "--base-url", "/libriscv/", "--config"])
            .arg(fixture_config())
            .assert()
            .success()
            .stdout(predicate::str::contains("href=\"/libriscv/docs/intro\""));
    }

    #[test]
    fn render_is_stable_across_runs() {
        let first = riscv_site()
            .arg("render")
            .arg("--config")
            .arg(fixture_config())
            .output()
            .expect("first run");
        let second = riscv_site()
            .arg("render")
            .arg("--config")
            .arg(fixture_config())
            .output()
            .expect("second run");

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }
}

// ============================================
// Validation
// ============================================

mod validation {
    use super::*;

    #[test]
    fn check_accepts_fixture() {
        riscv_site()
            .arg("check")
            .arg("--config")
            .arg(fixture_config())
            .assert()
            .success()
            .stdout(predicate::str::contains("OK: \"libriscv\" with 6 features"));
    }

    #[test]
    fn check_rejects_missing_tagline() {
        let temp = TempDir::new().expect("temp dir");
        let config = write_config(&temp, "title = \"libriscv\"\n");

        riscv_site()
            .arg("check")
            .arg("--config")
            .arg(config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing `tagline`"));
    }

    #[test]
    fn check_rejects_feature_without_title() {
        let temp = TempDir::new().expect("temp dir");
        let config = write_config(
            &temp,
            r#"
title = "libriscv"
tagline = "t"

[[features]]
title = ""
illustration = "img/x.svg"
description = "body"
"#,
        );

        riscv_site()
            .arg("check")
            .arg("--config")
            .arg(config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("`title` must not be empty"));
    }
}

// ============================================
// Catalog listing
// ============================================

mod catalog {
    use super::*;

    #[test]
    fn lists_titles_in_order() {
        let output = riscv_site()
            .arg("catalog")
            .arg("--config")
            .arg(fixture_config())
            .output()
            .expect("run");
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).expect("utf8");
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(
            lines,
            vec![
                " 1. Lowest possible latency",
                " 2. Cross-platform support",
                " 3. Secure Sandbox",
                " 4. Godot Addon",
                " 5. JIT-compiled languages",
                " 6. Tiny memory footprint",
            ]
        );
    }

    #[test]
    fn json_output_is_an_ordered_array() {
        let output = riscv_site()
            .args(["catalog", "--json", "--config"])
            .arg(fixture_config())
            .output()
            .expect("run");
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        let titles: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|r| r["title"].as_str())
            .collect();
        assert_eq!(titles.len(), 6);
        assert_eq!(titles[2], "Secure Sandbox");
        assert_eq!(
            value[0]["illustration"].as_str(),
            Some("img/undraw_to_the_stars_re_wq2x.svg")
        );
    }

    #[test]
    fn configured_features_replace_builtin_list() {
        let temp = TempDir::new().expect("temp dir");
        let config = write_config(
            &temp,
            r#"
title = "libriscv"
tagline = "t"

[[features]]
title = "Only feature"
illustration = "img/only.svg"
description = "body"
"#,
        );

        riscv_site()
            .arg("catalog")
            .arg("--config")
            .arg(config)
            .assert()
            .success()
            .stdout(predicate::str::contains("1. Only feature"))
            .stdout(predicate::str::contains("Secure Sandbox").not());
    }
}

// ============================================
// Build
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_index_and_copies_available_assets() {
        let out = TempDir::new().expect("out");

        riscv_site()
            .arg("build")
            .arg("--config")
            .arg(fixture_config())
            .arg("--out")
            .arg(out.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("6 features"))
            .stdout(predicate::str::contains("1 assets copied, 6 missing"));

        let index = std::fs::read_to_string(out.path().join("index.html")).expect("index");
        assert!(index.contains("Godot Addon"));
        assert!(out.path().join("img/undraw_safe_re_kiil.svg").is_file());
        assert!(!out.path().join("img/libriscv.gif").exists());
    }

    #[test]
    fn missing_assets_are_logged_not_fatal() {
        let out = TempDir::new().expect("out");

        riscv_site()
            .arg("build")
            .arg("--config")
            .arg(fixture_config())
            .arg("--out")
            .arg(out.path())
            .env("RUST_LOG", "warn")
            .assert()
            .success()
            .stderr(predicate::str::contains("img/libriscv.gif"));
    }
}
