//! Tests for `ftpush status`

mod common;

use common::*;

#[test]
fn status_json_reports_profile_and_tools() {
    let env = TestEnv::new();
    env.write_profile(&with_records(static_profile(), records(2)));

    let result = env.run(&["--json", "status"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let doc = result.json();
    assert_eq!(doc["project_name"], "brochure");
    assert_eq!(doc["project_type"], "static");
    assert_eq!(doc["records"], 2);
    assert!(doc["repository"].is_null());
    assert_eq!(doc["tools"].as_array().unwrap().len(), 6);
    assert_eq!(doc["last_deployment"]["user"], "dana");
    assert!(doc["target"].as_str().unwrap().starts_with("ftp://ftp.example.com"));
    assert!(!result.stdout.contains("hunter2"));
}

#[test]
fn status_marks_missing_git() {
    let env = TestEnv::new();
    env.write_profile(&static_profile());

    let result = env.run(&["status"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("not a repository"));
    assert!(result.stdout.contains("git - not found"));
    assert!(result.stdout.contains("ncftpput - available"));
    assert!(!result.stdout.contains("hunter2"));
}

#[test]
fn status_shows_environment_overrides() {
    let env = TestEnv::new();
    env.write_profile(&static_profile());

    let result = env.run_with_env(
        &["--json", "status"],
        &[("FTPUSH_FTP_HOST", "staging.example.com")],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    let doc = result.json();
    assert!(doc["target"].as_str().unwrap().contains("staging.example.com"));
    assert_eq!(doc["overrides"][0], "FTPUSH_FTP_HOST");
    // Overrides never reach the file
    assert!(env.read_profile_raw().contains("ftp.example.com"));
}

#[test]
fn invalid_profile_fails() {
    let env = TestEnv::new();
    env.write_project_file(".ftpush.json", "{ \"project\": ");

    let result = env.run(&["status"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid deployment profile"));
}
