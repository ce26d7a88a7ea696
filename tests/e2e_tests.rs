//! End-to-end tests for pyreq2rpm CLI
//!
//! These tests verify:
//! - Text and JSON output for requirement files and stdin
//! - Prefix selection via flag and environment
//! - Exit codes for malformed input and unreadable files

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Command for the compiled binary with a clean prefix environment
fn pyreq2rpm() -> Command {
    let mut cmd = cargo_bin_cmd!("pyreq2rpm");
    cmd.env_remove("PYREQ2RPM_PYTHON");
    cmd
}

/// Write a requires.txt into a fresh temp directory
fn write_requires(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("requires.txt");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

mod text_output {
    use super::*;

    #[test]
    fn test_file_to_stdout() {
        let (_dir, path) = write_requires("six<2dev,>=1.6.1\ngoogle-auth>=1.4.1\n");

        pyreq2rpm()
            .arg(&path)
            .assert()
            .success()
            .stdout("python3-six < 2dev\npython3-six >= 1.6.1\npython3-google-auth >= 1.4.1\n");
    }

    #[test]
    fn test_stdin_when_no_files() {
        pyreq2rpm()
            .write_stdin("someshit~=0.0.4\n[extra]\nignored>=1\n")
            .assert()
            .success()
            .stdout("python3-someshit >= 0.0.4\n");
    }

    #[test]
    fn test_dash_reads_stdin() {
        pyreq2rpm()
            .arg("-")
            .write_stdin("Babel\n")
            .assert()
            .success()
            .stdout("python3-babel\n");
    }

    #[test]
    fn test_extras_marker_is_per_file() {
        let (_a, first) = write_requires("six\n[test]\npytest\n");
        let (_b, second) = write_requires("requests\n");

        pyreq2rpm()
            .arg(&first)
            .arg(&second)
            .assert()
            .success()
            .stdout("python3-six\npython3-requests\n");
    }

    #[test]
    fn test_python2_flag() {
        let (_dir, path) = write_requires("six\n");

        pyreq2rpm()
            .args(["--python", "2"])
            .arg(&path)
            .assert()
            .success()
            .stdout("python2-six\n");
    }

    #[test]
    fn test_prefix_from_environment() {
        pyreq2rpm()
            .env("PYREQ2RPM_PYTHON", "python2")
            .write_stdin("dnspython\n")
            .assert()
            .success()
            .stdout("python2-dns\n");
    }

    #[test]
    fn test_mangle_mode() {
        pyreq2rpm()
            .args(["-m", "pyasn1-modules", "-m", "PySocks", "-m", "pyyaml"])
            .assert()
            .success()
            .stdout("python3-pyasn1-modules\npython3-pysocks\npython3-yaml\n");
    }

    #[test]
    fn test_empty_input() {
        pyreq2rpm().write_stdin("").assert().success().stdout("");
    }
}

mod json_output {
    use super::*;

    #[test]
    fn test_json_schema() {
        let output = pyreq2rpm()
            .arg("--json")
            .write_stdin("six<2dev\nrequests\n")
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {
                    "name": "python3-six",
                    "operator": "<",
                    "version": "2dev",
                    "requires": "python3-six < 2dev"
                },
                {"name": "python3-requests", "requires": "python3-requests"}
            ])
        );
    }

    #[test]
    fn test_json_mangle_mode() {
        let output = pyreq2rpm()
            .args(["--json", "--mangle", "Jinja2"])
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value, serde_json::json!(["python3-jinja2"]));
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_malformed_requirement_fails_without_output() {
        let (_dir, path) = write_requires("six\nidna>=\n");

        pyreq2rpm()
            .arg(&path)
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("without a version"))
            .stderr(predicate::str::contains("requires.txt"));
    }

    #[test]
    fn test_missing_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        pyreq2rpm()
            .arg(temp_dir.path().join("nope.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read"));
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        pyreq2rpm()
            .args(["--python", "ruby"])
            .write_stdin("six\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid language prefix"));
    }

    #[test]
    fn test_version_flag() {
        pyreq2rpm()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("pyreq2rpm "));
    }
}
