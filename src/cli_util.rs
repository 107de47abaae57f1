use std::error::Error;
use std::io::{self, Write};

use crate::{theme, MyrtleError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Report a fatal error on stderr as `<program>: <message>[: <cause>]. Terminating.`
pub fn print_fatal(program: &str, err: &MyrtleError) {
    eprintln!("{}", theme::error(&fatal_message(program, err)));
    let _ = io::stderr().flush();
}

fn fatal_message(program: &str, err: &MyrtleError) -> String {
    let mut msg = format!("{program}: {err}");
    // Read/Write already embed their cause in the display text.
    if matches!(err, MyrtleError::InputFile { .. } | MyrtleError::OutputFile { .. }) {
        if let Some(cause) = err.source() {
            msg.push_str(&format!(": {cause}"));
        }
    }
    msg.push_str(". Terminating.");
    msg
}

pub fn version_line() -> String {
    format!("Myrtle (the Turtle) Ver {VERSION} -- (c) 2011 Kevin R. Burger")
}

/// Print usage and terminate with `code`.
///
/// A requested help (`code == 0`) goes to stdout after the version line;
/// otherwise the usage text goes to stderr.
pub fn usage_and_exit(program: &str, code: i32) -> ! {
    if code == 0 {
        println!("{}", version_line());
        println!("{}", usage(program));
        let _ = io::stdout().flush();
    } else {
        eprintln!("{}", usage(program));
        let _ = io::stderr().flush();
    }
    std::process::exit(code);
}

pub fn usage(program: &str) -> String {
    format!(
        r#"A Myrtle programming language interpreter.
Usage: {0} [options]

If there are no command line options, then Myrtle reads commands from
stdin and performs them and writes the output to stdout.

Options:
  -i file    Reads commands from 'file'.
  -o file    Sends output to 'file'.
  -h         Displays this help message and terminates.
  -V         Verbose mode. Displays commands (on stderr) as they are performed.
  -v         Displays the version of the Myrtle interpreter and terminates.

Commands:
  forward n      backward n     left           right
  penup          pendown        penchar c      hyper row col
  stop

Environment:
  MYRTLE_ROWS, MYRTLE_COLS   Override the canvas size (default 50x50)
  MYRTLE_CONFIG              Config file (default <config home>/myrtle.toml)
"#,
        program
    )
}
