//! End-to-end checks on the `persona` binary's output streams.

use std::process::{Command, Output};

fn run_persona(envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_persona"));
    for key in [
        "PERSONA_NAME",
        "PERSONA_AGE",
        "PERSONA_SECRET",
        "PERSONA_NEW_SECRET",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd.envs(envs.iter().copied());
    cmd.output().unwrap()
}

#[test]
fn stdout_is_exactly_the_rotated_secret() {
    let output = run_persona(&[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "5678\n");
}

#[test]
fn logs_go_to_stderr_only() {
    let output = run_persona(&[]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Running scenario"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Running scenario"));
}

#[test]
fn overrides_change_the_printed_value() {
    let output = run_persona(&[("PERSONA_NEW_SECRET", "abcd")]);

    assert_eq!(String::from_utf8_lossy(&output.stdout), "abcd\n");
}

#[test]
fn invalid_age_fails_without_stdout() {
    let output = run_persona(&[("PERSONA_AGE", "old")]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PERSONA_AGE"));
}
