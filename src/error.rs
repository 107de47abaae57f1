use std::io;

/// Process exit statuses reported by the `myrtle` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitStatus {
    Normal = 0,
    InputFile = -1,
    CommandLine = -2,
    OutputFile = -3,
    UnknownCommand = -4,
    MissingArgument = -5,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Everything that can end a Myrtle run early.
///
/// Every variant is fatal; the binary maps it to an [`ExitStatus`] and
/// terminates without writing the canvas.
#[derive(Debug, thiserror::Error)]
pub enum MyrtleError {
    /// The `-i` path could not be opened for reading.
    #[error("Cannot open input file '{path}'")]
    InputFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The `-o` path could not be opened for writing.
    #[error("Cannot open output file '{path}'")]
    OutputFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid command line: {message}")]
    CommandLine { message: String },

    /// A leading token did not name any command.
    #[error("Unknown command '{name}' on line {line}")]
    UnknownCommand { name: String, line: usize },

    /// The command stream ended while a command was still collecting arguments.
    #[error("Missing argument for '{command}' on line {line}")]
    MissingArgument { command: &'static str, line: usize },

    #[error("Failed reading commands: {source}")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("Failed writing canvas: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

impl MyrtleError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            MyrtleError::InputFile { .. } | MyrtleError::Read { .. } => ExitStatus::InputFile,
            MyrtleError::OutputFile { .. } | MyrtleError::Write { .. } => ExitStatus::OutputFile,
            MyrtleError::CommandLine { .. } => ExitStatus::CommandLine,
            MyrtleError::UnknownCommand { .. } => ExitStatus::UnknownCommand,
            MyrtleError::MissingArgument { .. } => ExitStatus::MissingArgument,
        }
    }
}
