use clap::Parser;
use myrtle::cli_util::{print_fatal, usage_and_exit, version_line};
use myrtle::commands::run::{self, RunArgs};
use myrtle::{ExitStatus, MyrtleError};
use std::env;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "myrtle", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

fn main() {
    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("myrtle"));
    let argv: Vec<String> = env::args().skip(1).collect();

    match leading_info_flag(&argv) {
        Some(InfoFlag::Help) => usage_and_exit(&program, ExitStatus::Normal.code()),
        Some(InfoFlag::Version) => {
            println!("{}", version_line());
            let _ = io::stdout().flush();
            std::process::exit(ExitStatus::Normal.code());
        }
        None => {}
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let err = MyrtleError::CommandLine { message: first_line(&e.to_string()) };
            print_fatal(&program, &err);
            usage_and_exit(&program, err.exit_status().code());
        }
    };

    let code = run::run(&program, cli.args);
    std::process::exit(code);
}

#[derive(Debug, PartialEq, Eq)]
enum InfoFlag {
    Help,
    Version,
}

/// Options act left to right: a `-h` or `-v` reached before any bad
/// argument terminates successfully, even if clap would reject the line.
fn leading_info_flag(argv: &[String]) -> Option<InfoFlag> {
    let mut args = argv.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-i" | "-o" => {
                args.next()?;
            }
            "-V" => {}
            "-h" => return Some(InfoFlag::Help),
            "-v" => return Some(InfoFlag::Version),
            _ => return None,
        }
    }
    None
}

/// clap errors are multi-line; keep the summary without its `error: ` tag.
fn first_line(msg: &str) -> String {
    let line = msg.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
