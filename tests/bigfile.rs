use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(bin: &str, dir: &Path) -> Output {
    Command::new(bin)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn reports_digest_time_and_throughput() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bigfile"), b"123456789").unwrap();

    let output = run_in(env!("CARGO_BIN_EXE_bigfile_crc64"), dir.path());
    let log = stderr(&output);

    assert!(output.status.success(), "{}", log);
    assert!(log.contains("hex digest: AE8B14860A799888"), "{}", log);
    assert!(log.contains("time elapsed: "), "{}", log);
    assert!(log.contains("ms"), "{}", log);
    assert!(log.contains("GB/s: "), "{}", log);
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_bigfile() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bigfile"), b"").unwrap();

    let output = run_in(env!("CARGO_BIN_EXE_bigfile_crc64"), dir.path());
    let log = stderr(&output);

    assert!(output.status.success(), "{}", log);
    assert!(log.contains("hex digest: 0000000000000000"), "{}", log);
}

#[test]
fn repeated_runs_agree() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(dir.path().join("bigfile"), data).unwrap();

    let digest_line = |output: &Output| {
        stderr(output)
            .lines()
            .find_map(|line| line.split("hex digest: ").nth(1).map(str::to_owned))
            .unwrap()
    };

    let first = run_in(env!("CARGO_BIN_EXE_bigfile_crc64"), dir.path());
    let second = run_in(env!("CARGO_BIN_EXE_bigfile_crc64"), dir.path());
    assert_eq!(digest_line(&first), digest_line(&second));
    assert_eq!(digest_line(&first).len(), 16);
}

#[test]
fn missing_bigfile_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(env!("CARGO_BIN_EXE_bigfile_crc64"), dir.path());
    let log = stderr(&output);

    assert!(!output.status.success());
    assert!(log.contains("open bigfile"), "{}", log);
    assert!(!log.contains("hex digest"), "{}", log);
}

#[test]
fn compare_engines_agree() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<u8> = (0..300_000u32).map(|i| (i * 7 % 256) as u8).collect();
    fs::write(dir.path().join("bigfile"), data).unwrap();

    let output = run_in(env!("CARGO_BIN_EXE_crc64_compare"), dir.path());
    let log = stderr(&output);

    assert!(output.status.success(), "{}", log);
    assert!(log.contains("crc"), "{}", log);
    assert!(log.contains("slice-by-8"), "{}", log);
    assert!(!log.contains("differs"), "{}", log);
}

#[test]
fn compare_without_bigfile_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(env!("CARGO_BIN_EXE_crc64_compare"), dir.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("open bigfile"));
}

#[test]
fn build_table_prints_byte_table() {
    let output = Command::new(env!("CARGO_BIN_EXE_build_table"))
        .arg("0")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.starts_with("static TABLE_0: [u64; 256] = ["));
    assert!(stdout.contains("0x9a6c9329ac4bc9b5,"));
    assert_eq!(stdout.lines().count(), 258);
}

#[test]
fn build_table_rejects_bad_id() {
    for arg in ["8", "x"] {
        let output = Command::new(env!("CARGO_BIN_EXE_build_table"))
            .arg(arg)
            .output()
            .unwrap();
        assert!(!output.status.success());
    }
}
