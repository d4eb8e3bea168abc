// CLI integration tests for guess-toc

use std::io::Write;
use std::process::Command;

fn run(path: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_guess-toc"))
        .arg(path)
        .output()
        .expect("failed to execute guess-toc")
}

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("guess-toc-test-{name}-{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("failed to create temp file");
    file.write_all(contents.as_bytes()).expect("failed to write temp file");
    path
}

#[test]
fn help_flag_shows_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_guess-toc"))
        .arg("--help")
        .output()
        .expect("failed to execute guess-toc");

    assert!(output.status.success(), "--help should exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("guess-toc"), "help should mention the program name. Got: {stdout}");
}

#[test]
fn missing_file_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_guess-toc"))
        .arg("/nonexistent/path/does-not-exist.txt")
        .output()
        .expect("failed to execute guess-toc");

    assert!(!output.status.success(), "missing file should exit with failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "Got: {stderr}");
}

#[test]
fn empty_article_prints_null() {
    let path = write_temp("empty", "");
    let output = run(&path);
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "null");
}

#[test]
fn numbered_chapters_print_a_json_toc() {
    let mut text = String::new();
    for n in 1..=20 {
        text.push_str(&format!("Chapter {n}. A Title\n"));
        text.push_str(&"body text here. ".repeat(30));
        text.push('\n');
    }
    let path = write_temp("chapters", &text);
    let output = run(&path);
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(value["content"].as_array().unwrap().len(), 20);
    assert!(value["beauty"].as_f64().unwrap() > 0.0);
}
