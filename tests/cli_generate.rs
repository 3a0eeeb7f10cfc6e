//! CLI integration tests for the generate and init commands

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the svgicons binary inside `dir` with an isolated XDG config home.
fn svgicons(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svgicons"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .output()
        .expect("Failed to execute svgicons")
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let icons = temp.path().join("icons");
    fs::create_dir_all(&icons).unwrap();
    for (name, content) in files {
        fs::write(icons.join(name), content).unwrap();
    }
    temp
}

#[test]
fn test_generate_with_defaults() {
    let temp = project(&[("home.svg", r#"<svg title="Home" viewBox="0 0 24 24"/>"#)]);

    let output = svgicons(temp.path(), &["generate"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let artifact = fs::read_to_string(temp.path().join("src/components/icons.jsx")).unwrap();
    assert!(artifact.contains("function Home("));
    assert!(artifact.ends_with("export { Home };\n"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[generate]"));
    assert!(stderr.contains("[done]"));
}

#[test]
fn test_generate_positional_paths() {
    let temp = project(&[("bell.svg", r#"<svg title="Bell"/>"#)]);

    let output = svgicons(temp.path(), &["generate", "icons", "dist"]);
    assert!(output.status.success());
    assert!(temp.path().join("dist/icons.jsx").exists());
}

#[test]
fn test_generate_flags_override_config() {
    let temp = project(&[("arrow.svg", "<svg/>")]);
    fs::write(
        temp.path().join("icons.toml"),
        "[project]\nout = \"web\"\n\n[generate]\ndefault_width = \"10px\"\n",
    )
    .unwrap();

    let output = svgicons(
        temp.path(),
        &["generate", "--format", "tsx", "--suffix", "Icon", "--use-file-names", "--height", "2em"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let artifact = fs::read_to_string(temp.path().join("web/icons.tsx")).unwrap();
    assert!(artifact.contains("function ArrowIcon({ height = \"2em\", width = \"10px\""));
    assert!(artifact.contains(": IconProps"));
}

#[test]
fn test_generate_dry_run_prints_module() {
    let temp = project(&[("home.svg", r#"<svg title="Home"/>"#)]);

    let output = svgicons(temp.path(), &["generate", "--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("function Home("));
    assert!(stdout.ends_with("export { Home };\n"));
    assert!(!temp.path().join("src/components").exists());
}

#[test]
fn test_generate_json_progress() {
    let temp = project(&[("home.svg", r#"<svg title="Home"/>"#), ("bad.svg", "")]);

    let output = svgicons(temp.path(), &["generate", "--json"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let events: Vec<serde_json::Value> =
        stderr.lines().map(|l| serde_json::from_str(l).expect("valid JSON line")).collect();
    assert_eq!(events.first().unwrap()["event"], "started");
    assert!(events.iter().any(|e| e["event"] == "failed" && e["file"] == "bad.svg"));
    let last = events.last().unwrap();
    assert_eq!(last["event"], "finished");
    assert_eq!(last["processed"], 1);
    assert_eq!(last["failed"], 1);
}

#[test]
fn test_generate_strict_fails_on_bad_icon() {
    let temp = project(&[("home.svg", r#"<svg title="Home"/>"#), ("bad.svg", "")]);

    let lenient = svgicons(temp.path(), &["generate"]);
    assert_eq!(lenient.status.code(), Some(0));

    let strict = svgicons(temp.path(), &["generate", "--strict"]);
    assert_eq!(strict.status.code(), Some(1));
    // The artifact is still written with the good icons
    let artifact = fs::read_to_string(temp.path().join("src/components/icons.jsx")).unwrap();
    assert!(artifact.contains("export { Home };"));
}

#[test]
fn test_generate_missing_input_exits_with_error() {
    let temp = TempDir::new().unwrap();

    let output = svgicons(temp.path(), &["generate", "nowhere"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("input directory not found"));
}

#[test]
fn test_generate_invalid_config_exit_code() {
    let temp = project(&[]);
    fs::write(temp.path().join("icons.toml"), "[generate]\nidentifier_suffix = \"my-icon\"\n")
        .unwrap();

    let output = svgicons(temp.path(), &["generate"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("identifier_suffix"));
}

#[test]
fn test_generate_invalid_flag_value() {
    let temp = project(&[]);
    let output = svgicons(temp.path(), &["generate", "--format", "vue"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_init_writes_config_once() {
    let temp = TempDir::new().unwrap();

    let first = svgicons(temp.path(), &["init"]);
    assert!(first.status.success());
    let config = fs::read_to_string(temp.path().join("icons.toml")).unwrap();
    assert!(config.contains("[generate]"));

    let second = svgicons(temp.path(), &["init"]);
    assert_eq!(second.status.code(), Some(1));

    let forced = svgicons(temp.path(), &["init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn test_init_then_generate() {
    let temp = project(&[("star.svg", "<svg><title>Star</title></svg>")]);

    assert!(svgicons(temp.path(), &["init"]).status.success());
    let output = svgicons(temp.path(), &["generate"]);
    assert!(output.status.success());

    let artifact = fs::read_to_string(temp.path().join("src/components/icons.jsx")).unwrap();
    assert!(artifact.contains("export { Star };"));
}
