use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn myrtle() -> Command {
    let mut cmd = Command::cargo_bin("myrtle").unwrap();
    cmd.timeout(Duration::from_secs(2))
        .env("MYRTLE_CONFIG", "/nonexistent/myrtle.toml")
        .env_remove("MYRTLE_ROWS")
        .env_remove("MYRTLE_COLS");
    cmd
}

// Negative statuses surface as their low byte on Unix.
fn status(code: i32) -> impl Predicate<i32> {
    predicate::in_iter([code, code & 0xff])
}

fn blank_row() -> String {
    " ".repeat(50)
}

fn canvas_with_row0(row0: &str) -> String {
    let mut out = format!("{row0}\n");
    for _ in 1..50 {
        out.push_str(&blank_row());
        out.push('\n');
    }
    out
}

#[test]
fn pendown_forward_three_draws_three_glyphs() {
    myrtle()
        .write_stdin("pendown penchar * forward 3 stop")
        .assert()
        .code(0)
        .stdout(predicate::str::diff(canvas_with_row0(&format!(" ***{}", " ".repeat(46)))))
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_input_emits_blank_canvas() {
    let assert = myrtle().write_stdin("").assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = out.split_terminator('\n').collect();
    assert_eq!(lines.len(), 50);
    assert!(lines.iter().all(|l| *l == blank_row()));
    assert!(out.ends_with('\n'));
}

#[test]
fn unknown_command_exits_without_canvas() {
    myrtle()
        .write_stdin("bogus")
        .assert()
        .failure()
        .code(status(-4))
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown command 'bogus' on line 1"));
}

#[test]
fn unknown_command_reports_its_line() {
    myrtle()
        .write_stdin("pendown\nforward 2\nright\nForward 3\n")
        .assert()
        .code(status(-4))
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown command 'Forward' on line 4"));
}

#[test]
fn hyper_clamps_to_far_corner() {
    let mut expected = String::new();
    for r in 0..50 {
        if r == 49 {
            expected.push_str(&format!("{}X\n", " ".repeat(49)));
        } else {
            expected.push_str(&blank_row());
            expected.push('\n');
        }
    }
    myrtle()
        .write_stdin("pendown penchar X hyper 100 100")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn stop_ignores_everything_after_it() {
    myrtle()
        .write_stdin("pendown penchar # forward 1 stop bogus forward 5")
        .assert()
        .success()
        .stdout(predicate::str::diff(canvas_with_row0(&format!(" #{}", " ".repeat(48)))));
}

#[test]
fn missing_argument_is_fatal() {
    myrtle()
        .write_stdin("pendown forward")
        .assert()
        .code(status(-5))
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing argument for 'forward' on line 2"));
}

#[test]
fn square_outline() {
    let program = "hyper 1 1 pendown penchar o forward 3 right forward 3 right forward 3 right forward 3";
    let assert = myrtle().write_stdin(program).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(&rows[1][..6], " oooo ");
    assert_eq!(&rows[2][..6], " o  o ");
    assert_eq!(&rows[3][..6], " o  o ");
    assert_eq!(&rows[4][..6], " oooo ");
}

#[test]
fn environment_resizes_canvas() {
    myrtle()
        .env("MYRTLE_ROWS", "2")
        .env("MYRTLE_COLS", "3")
        .write_stdin("pendown penchar + right forward 9")
        .assert()
        .success()
        .stdout(predicate::str::diff("   \n+  \n"));
}

#[test]
fn huge_forward_count_stops_at_the_edge() {
    myrtle()
        .write_stdin("pendown penchar * forward 99999999999999999999")
        .assert()
        .success()
        .stdout(predicate::str::diff(canvas_with_row0(&format!(" {}", "*".repeat(49)))));
}

#[test]
fn oversized_environment_dimension_is_ignored() {
    myrtle()
        .env("MYRTLE_ROWS", "18446744073709551615")
        .env("MYRTLE_COLS", "2")
        .write_stdin("pendown penchar # forward 1")
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring MYRTLE_ROWS"))
        .stdout(predicate::str::diff(format!(" #\n{}", "  \n".repeat(49))));
}
