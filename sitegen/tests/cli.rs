//! End-to-End CLI Tests for brainwave

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Get a command pointing to the brainwave binary
fn brainwave() -> Command {
    cargo_bin_cmd!("brainwave")
}

fn content_json(ids: &[&str]) -> String {
    let items: Vec<String> = ids
        .iter()
        .enumerate()
        .map(|(n, id)| {
            format!(
                r#"{{"id":"{id}","title":"Tile {n}","text":"Body {n}","icon":"benefits/icon-1.svg"}}"#
            )
        })
        .collect();
    format!(
        r##"{{
            "navigation": [{{"id":"0","title":"Features","url":"#features"}}],
            "benefits": {{ "heading": {{"title":"Chat Smarter"}}, "items": [{}] }},
            "services": {{
                "spotlight": {{ "title": "Smartest AI", "text": "s", "image": "services/service-1.png" }},
                "photo": {{ "title": "Photo editing", "text": "p", "image": "services/service-2.png" }},
                "video": {{ "title": "Video generation", "text": "v", "image": "services/service-3.png" }}
            }}
        }}"##,
        items.join(",")
    )
}

fn write(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write fixture");
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        brainwave()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        brainwave()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn content_prints_built_in_json() {
        brainwave()
            .arg("content")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"benefits\""))
            .stdout(predicate::str::contains("\"navigation\""));
    }
}

// ============================================
// Rendering
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_built_in_page_to_default_location() {
        let temp = TempDir::new().expect("temp dir");

        brainwave()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("dist/index.html")).expect("output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"features\""));
        assert!(html.contains("id=\"how-to-use\""));
    }

    #[test]
    fn renders_custom_content_with_asset_base() {
        let temp = TempDir::new().expect("temp dir");
        write(temp.path(), "site.json", &content_json(&["a", "b"]));

        brainwave()
            .current_dir(temp.path())
            .args([
                "render",
                "--content",
                "site.json",
                "--out",
                "public/page.html",
                "--asset-base",
                "https://cdn.example.com",
            ])
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("public/page.html")).expect("output");
        assert!(html.contains("Chat Smarter"));
        assert!(html.contains("src=\"https://cdn.example.com/benefits/icon-1.svg\""));
        assert_eq!(html.matches("<div data-key=").count(), 2);
    }

    #[test]
    fn duplicate_ids_fail_without_dedupe() {
        let temp = TempDir::new().expect("temp dir");
        write(temp.path(), "site.json", &content_json(&["a", "a"]));

        brainwave()
            .current_dir(temp.path())
            .args(["render", "--content", "site.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate content id"));

        assert!(!temp.path().join("dist/index.html").exists());
    }

    #[test]
    fn dedupe_keeps_first_tile() {
        let temp = TempDir::new().expect("temp dir");
        write(temp.path(), "site.json", &content_json(&["a", "a"]));

        brainwave()
            .current_dir(temp.path())
            .args(["render", "--content", "site.json", "--dedupe"])
            .assert()
            .success()
            .stderr(predicate::str::contains("dropping repeated content item"));

        let html = std::fs::read_to_string(temp.path().join("dist/index.html")).expect("output");
        assert!(html.contains("Tile 0"));
        assert!(!html.contains("Tile 1"));
    }

    #[test]
    fn config_file_is_picked_up_and_cli_wins() {
        let temp = TempDir::new().expect("temp dir");
        write(
            temp.path(),
            "brainwave.toml",
            r#"
output = "from-config.html"

[page]
title = "Configured title"
"#,
        );

        brainwave()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success();
        let html = std::fs::read_to_string(temp.path().join("from-config.html")).expect("output");
        assert!(html.contains("<title>Configured title</title>"));

        brainwave()
            .current_dir(temp.path())
            .args(["render", "--out", "from-cli.html"])
            .assert()
            .success();
        assert!(temp.path().join("from-cli.html").exists());
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");

        brainwave()
            .current_dir(temp.path())
            .args(["render", "--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("config file not found"));
    }
}

// ============================================
// Validation
// ============================================

mod check {
    use super::*;

    #[test]
    fn built_in_content_is_valid() {
        brainwave().arg("check").assert().success();
    }

    #[test]
    fn rejects_malformed_json() {
        let temp = TempDir::new().expect("temp dir");
        write(temp.path(), "site.json", "{ not json");

        brainwave()
            .current_dir(temp.path())
            .args(["check", "--content", "site.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid content JSON"));
    }

    #[test]
    fn content_output_round_trips_through_check() {
        let temp = TempDir::new().expect("temp dir");
        let output = brainwave().arg("content").output().expect("run content");
        std::fs::write(temp.path().join("site.json"), &output.stdout).expect("write");

        brainwave()
            .current_dir(temp.path())
            .args(["check", "--content", "site.json"])
            .assert()
            .success();
    }
}
