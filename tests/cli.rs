// tests/cli.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn tinyls() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tinyls"));
    cmd.env_remove("TINYLS_LOG");
    cmd
}

fn fixture() -> TempDir {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("b.txt"), vec![b'x'; 3]).expect("write b");
    fs::write(dir.path().join("A.txt"), vec![b'x'; 2048]).expect("write A");
    fs::write(dir.path().join("c.txt"), b"").expect("write c");
    dir
}

#[test]
fn shows_help_on_long_flag_only() {
    tinyls()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tinyls"))
        .stdout(predicate::str::contains("-h"));
}

#[test]
fn lists_directory_by_name() {
    let dir = fixture();
    tinyls().arg(dir.path()).assert().success().stdout("A.txt    b.txt    c.txt\n");
}

#[test]
fn long_human_size_sorted_listing() {
    let dir = fixture();
    tinyls()
        .arg("-lhS")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("A.txt 2.0K\nb.txt 3\nc.txt 0\n");
}

#[test]
fn reverse_flag_flips_the_order() {
    let dir = fixture();
    tinyls()
        .args(["-l", "-S", "-r"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("c.txt 0\nb.txt 3\nA.txt 2048\n");
}

#[test]
fn file_targets_print_before_directories() {
    let dir = fixture();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).expect("create sub");
    fs::write(sub.join("inner"), b"").expect("write inner");

    tinyls()
        .current_dir(dir.path())
        .args(["sub", "b.txt"])
        .assert()
        .success()
        .stdout("b.txtinner\n");
}

#[test]
fn multiple_directories_get_headers() {
    let dir = tempdir().expect("create temp dir");
    fs::create_dir(dir.path().join("dira")).expect("create dira");
    fs::create_dir(dir.path().join("dirb")).expect("create dirb");
    fs::write(dir.path().join("dirb").join("c"), b"").expect("write c");
    fs::create_dir(dir.path().join("dirb").join("d")).expect("create d");

    tinyls()
        .current_dir(dir.path())
        .args(["dira", "dirb"])
        .assert()
        .success()
        .stdout("\n\ndira:\n\n\n\ndirb:\n\nc    d\n");
}

#[test]
fn defaults_to_current_directory() {
    let dir = fixture();
    tinyls().current_dir(dir.path()).assert().success().stdout("A.txt    b.txt    c.txt\n");
}

#[test]
fn missing_target_fails_without_partial_output() {
    let dir = fixture();
    tinyls()
        .current_dir(dir.path())
        .args(["b.txt", "does-not-exist"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("tinyls:"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = fixture();
    tinyls()
        .arg("-vv")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("A.txt    b.txt    c.txt\n")
        .stderr(predicate::str::contains("[debug]"));
}

#[test]
fn log_env_directive_selects_one_crate() {
    let dir = fixture();
    tinyls()
        .env("TINYLS_LOG", "tinyls_infra=debug")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("A.txt    b.txt    c.txt\n")
        .stderr(predicate::str::contains("[debug] read_dir"))
        .stderr(predicate::str::contains("is_dir=").not());
}
