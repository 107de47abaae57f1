use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use crate::cli_util::{print_fatal, usage_and_exit, version_line};
use crate::{Config, ExitStatus, Interpreter, MyrtleError, Tokens};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Reads commands from FILE instead of stdin
    #[arg(short = 'i', overrides_with = "input", value_name = "FILE")]
    pub input: Option<String>,

    /// Sends the canvas to FILE instead of stdout
    #[arg(short = 'o', overrides_with = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Verbose mode: echo each command as it is performed
    #[arg(short = 'V', overrides_with = "verbose", action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Print the version and exit
    #[arg(short = 'v', overrides_with = "version", action = clap::ArgAction::SetTrue)]
    pub version: bool,

    /// Show this help
    #[arg(short = 'h', overrides_with = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: RunArgs) -> i32 {
    if args.help {
        usage_and_exit(program, ExitStatus::Normal.code());
    }

    if args.version {
        println!("{}", version_line());
        let _ = io::stdout().flush();
        return ExitStatus::Normal.code();
    }

    match interpret(&args) {
        Ok(()) => ExitStatus::Normal.code(),
        Err(err) => {
            print_fatal(program, &err);
            err.exit_status().code()
        }
    }
}

fn interpret(args: &RunArgs) -> Result<(), MyrtleError> {
    let input = open_input(args.input.as_deref())?;
    let mut output = open_output(args.output.as_deref())?;

    let mut interpreter = Interpreter::new(Config::load());
    interpreter.set_verbose(args.verbose);

    let mut tokens = Tokens::new(input);
    interpreter.run(&mut tokens, &mut output)?;
    Ok(())
}

fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>, MyrtleError> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(path) => File::open(path)
            .map(|f| Box::new(BufReader::new(f)) as Box<dyn BufRead>)
            .map_err(|source| MyrtleError::InputFile { path: path.to_string(), source }),
    }
}

fn open_output(path: Option<&str>) -> Result<Box<dyn Write>, MyrtleError> {
    match path {
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Some(path) => File::create(path)
            .map(|f| Box::new(BufWriter::new(f)) as Box<dyn Write>)
            .map_err(|source| MyrtleError::OutputFile { path: path.to_string(), source }),
    }
}
