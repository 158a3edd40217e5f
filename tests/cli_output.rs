//! Runs the generator binary in a scratch directory and checks its output.

use std::process::Command;

#[test]
fn test_stdout_carries_only_usage_text() {
    let dir = std::env::temp_dir().join(format!("knob_filmstrip_cli_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_create-filmstrip"))
        .current_dir(&dir)
        .output()
        .unwrap();
    let written = image::open(dir.join("example_knob_filmstrip.png")).map(|img| img.into_rgba8());
    std::fs::remove_dir_all(&dir).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("✅ Filmstrip created: example_knob_filmstrip.png"));
    assert!(stdout.contains("100x6400 (64 frames)"));
    assert!(!stdout.contains("INFO"), "log line leaked to stdout: {}", stdout);

    // Diagnostics still go out, on stderr
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("filmstrip written"));

    assert_eq!(written.unwrap().dimensions(), (100, 6400));
}
