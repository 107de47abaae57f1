use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn myrtle() -> Command {
    let mut cmd = Command::cargo_bin("myrtle").unwrap();
    cmd.env("MYRTLE_CONFIG", "/nonexistent/myrtle.toml")
        .env_remove("MYRTLE_ROWS")
        .env_remove("MYRTLE_COLS");
    cmd
}

fn status(code: i32) -> impl Predicate<i32> {
    predicate::in_iter([code, code & 0xff])
}

fn program_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn help_prints_version_and_usage() {
    myrtle()
        .arg("-h")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Myrtle (the Turtle) Ver").and(predicate::str::contains("-i file")));
}

#[test]
fn version_prints_and_exits() {
    myrtle()
        .arg("-v")
        .assert()
        .code(0)
        .stdout(predicate::str::diff(format!(
            "Myrtle (the Turtle) Ver {} -- (c) 2011 Kevin R. Burger\n",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("Usage").not());
}

#[test]
fn unknown_flag_is_a_command_line_error() {
    myrtle()
        .arg("-x")
        .write_stdin("pendown")
        .assert()
        .code(status(-2))
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage").and(predicate::str::contains("Invalid command line")));
}

#[test]
fn input_flag_reads_program_file() {
    let tf = program_file("pendown\npenchar !\nhyper 0 5\n");
    let assert = myrtle().arg("-i").arg(tf.path()).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(out.lines().next().unwrap(), format!("     !{}", " ".repeat(44)));
}

#[test]
fn missing_input_file_is_an_input_error() {
    myrtle()
        .arg("-i")
        .arg("/definitely/not/here.myr")
        .assert()
        .code(status(-1))
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot open input file '/definitely/not/here.myr'"));
}

#[test]
fn output_flag_writes_canvas_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("canvas.txt");
    myrtle()
        .arg("-o")
        .arg(&out_path)
        .write_stdin("pendown penchar @ forward 1")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(written.lines().count(), 50);
    assert!(written.starts_with(" @ "));
}

#[test]
fn unwritable_output_is_an_output_error() {
    let dir = tempfile::tempdir().unwrap();
    myrtle()
        .arg("-o")
        .arg(dir.path())
        .write_stdin("stop")
        .assert()
        .code(status(-3))
        .stderr(predicate::str::contains("Cannot open output file"));
}

#[test]
fn verbose_echoes_commands_on_stderr() {
    myrtle()
        .arg("-V")
        .write_stdin("left forward 2 stop")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Performing command: left")
                .and(predicate::str::contains("Performing command: forward"))
                .and(predicate::str::contains("Performing command: stop"))
                .and(predicate::str::contains("Performing command: 2").not()),
        )
        .stdout(predicate::str::contains("Performing").not());
}

#[test]
fn input_and_output_flags_combine() {
    let tf = program_file("right pendown penchar | forward 2");
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.txt");
    myrtle()
        .args(["-V", "-i"])
        .arg(tf.path())
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out_path).unwrap();
    let rows: Vec<&str> = written.lines().collect();
    assert!(rows[0].starts_with(' '));
    assert!(rows[1].starts_with('|'));
    assert!(rows[2].starts_with('|'));
}

#[test]
fn config_file_sets_canvas_size() {
    let cfg = program_file("[canvas]\nrows = 2\ncols = 4\n");
    myrtle()
        .env("MYRTLE_CONFIG", cfg.path())
        .write_stdin("pendown penchar x forward 1")
        .assert()
        .success()
        .stdout(predicate::str::diff(" x  \n    \n"));
}

#[test]
fn help_before_a_bad_argument_still_succeeds() {
    myrtle()
        .args(["-h", "-x"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Usage"))
        .stderr(predicate::str::is_empty());

    myrtle()
        .args(["-x", "-h"])
        .assert()
        .code(status(-2))
        .stdout(predicate::str::is_empty());
}

#[test]
fn repeated_input_flag_uses_the_last_file() {
    let first = program_file("pendown penchar 1 forward 1");
    let second = program_file("pendown penchar 2 forward 1");
    let assert = myrtle()
        .arg("-i")
        .arg(first.path())
        .arg("-i")
        .arg(second.path())
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(out.starts_with(" 2 "));
}
