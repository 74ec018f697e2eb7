//! Integration tests for the `sitecraft` binary.
//!
//! Every run gets its own working directory and config home, so nothing
//! from the developer's machine leaks in.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::write::{SimpleFileOptions, ZipWriter};

fn sitecraft(workdir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("sitecraft");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("Materialize"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_help_shows_switch_pairs() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--color"))
        .stdout(predicate::str::contains("--section"))
        .stdout(predicate::str::contains("--no-jquery"))
        .stdout(predicate::str::contains("--no-sitemap"));
}

#[test]
fn unknown_flag_exits_with_usage_error() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["new", "demo", "--framework", "bootstrap"])
        .assert()
        .code(2);
}

// ── new: failures before any work ─────────────────────────────────────────────

#[test]
fn existing_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();

    sitecraft(temp.path())
        .args(["new", "demo", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_dir(temp.path().join("demo")).unwrap().count(), 0);
}

#[test]
fn invalid_name_is_refused() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["new", ".hidden", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn invalid_colour_creates_nothing() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["new", "demo", "-y", "-c", "not-a-colour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not-a-colour"));

    assert!(!temp.path().join("demo").exists());
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn bash_completions_mention_binary() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sitecraft"));
}

// ── config / init ─────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_defaults_and_env() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["config", "get", "presets.lang"])
        .assert()
        .success()
        .stdout("en\n");

    sitecraft(temp.path())
        .env("SITECRAFT__PRESETS__LANG", "fr")
        .args(["config", "get", "presets.lang"])
        .assert()
        .success()
        .stdout("fr\n");
}

#[test]
fn config_get_unknown_key_is_not_found() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["config", "get", "presets.nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn missing_explicit_config_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn config_path_is_under_config_home() {
    let temp = TempDir::new().unwrap();
    sitecraft(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sitecraft"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn init_local_writes_once() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join(".sitecraft.toml");

    sitecraft(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    let written = fs::read_to_string(&file).unwrap();
    assert!(written.contains("[presets]"));

    fs::write(&file, "[presets]\nlang = \"de\"\n").unwrap();
    sitecraft(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "[presets]\nlang = \"de\"\n"
    );

    // The local file is picked up without --config.
    sitecraft(temp.path())
        .args(["config", "get", "presets.lang"])
        .assert()
        .success()
        .stdout("de\n");
}

// ── new: full run against a local asset server ────────────────────────────────

fn framework_zip() -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in [
        ("materialize-src/js/bin/materialize.js", "/* full */"),
        ("materialize-src/js/bin/materialize.min.js", "/* min */"),
        ("materialize-src/sass/materialize.scss", "// entry"),
        ("materialize-src/README.md", "# readme"),
    ] {
        writer.start_file(name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

async fn asset_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/materialize.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(framework_zip()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jquery.min.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string("/*! jQuery */"))
        .mount(&server)
        .await;
    server
}

fn with_assets(mut cmd: Command, server: &MockServer) -> Command {
    cmd.env(
        "SITECRAFT__ASSETS__ARCHIVE_URL",
        format!("{}/materialize.zip", server.uri()),
    )
    .env(
        "SITECRAFT__ASSETS__SCRIPT_URL",
        format!("{}/jquery.min.js", server.uri()),
    );
    cmd
}

// The binary blocks this thread; the mock server needs another one.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn new_scaffolds_the_demo_site() {
    let server = asset_server().await;
    let temp = TempDir::new().unwrap();

    with_assets(sitecraft(temp.path()), &server)
        .args([
            "--output-format",
            "plain",
            "new",
            "demo",
            "-y",
            "-c",
            "#ff0000",
            "-s",
            "intro",
            "contact",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color red added (#ff0000)"))
        .stdout(predicate::str::contains("js/materialize/bin/materialize.min.js"))
        .stdout(predicate::str::contains("Website created"));

    let root = temp.path().join("demo");
    for file in [
        "index.html",
        "sass/main.scss",
        "js/main.js",
        "js/jquery-3.4.1.min.js",
        "js/materialize/bin/materialize.min.js",
        "sass/materialize/materialize.scss",
        ".htaccess",
        "robots.txt",
        "sitemap.xml",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    assert!(!root.join("js/materialize/bin/materialize.js").exists());

    let css = fs::read_to_string(root.join("sass/main.scss")).unwrap();
    assert!(css.contains("$red: #ff0000;"));
    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert_eq!(html.matches("<section ").count(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn json_output_is_the_report() {
    let server = asset_server().await;
    let temp = TempDir::new().unwrap();

    let assert = with_assets(sitecraft(temp.path()), &server)
        .args([
            "--output-format",
            "json",
            "new",
            "site",
            "-y",
            "--no-jquery",
            "--no-htaccess",
            "--no-robots",
            "--no-sitemap",
        ])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 10);
    let skipped = steps
        .iter()
        .filter(|s| s["status"] == "skipped")
        .count();
    assert_eq!(skipped, 5);
    assert_eq!(report["archive"]["written"], 2);
    assert!(!temp.path().join("site/js/jquery-3.4.1.min.js").exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn download_failure_exits_with_one_and_keeps_files() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();

    with_assets(sitecraft(temp.path()), &server)
        .args(["new", "demo", "-y"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("retrieve-framework"));

    assert!(temp.path().join("demo/sass").is_dir());
}
