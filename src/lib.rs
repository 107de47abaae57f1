//! An interpreter for the Myrtle turtle language.
//!
//! Myrtle lives on a fixed grid (50 x 50 by default). A program is a stream
//! of whitespace-separated words; each command word may consume a fixed
//! number of argument words after it:
//!
//! - `forward n` / `backward n`: move `n` squares one at a time, drawing on
//!   each square entered while the pen is down. Backward never turns Myrtle.
//! - `left` / `right`: turn 90 degrees.
//! - `penup` / `pendown`: lift or lower the pen.
//! - `penchar c`: draw with the first character of `c`.
//! - `hyper row col`: jump straight to `(row, col)`, drawing once on arrival.
//! - `stop`: finish now and emit the canvas.
//!
//! Moves never fail: positions outside the grid saturate at the nearest edge.
//! Numeric arguments are parsed leniently, so `forward abc` is `forward 0`.
//! An unknown command word aborts the run.

pub mod canvas;
pub mod cli_util;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod theme;
pub mod tokens;
pub mod turtle;

pub use canvas::Canvas;
pub use command::{Command, CommandKind};
pub use config::Config;
pub use error::{ExitStatus, MyrtleError};
pub use interpreter::{Halt, Interpreter};
pub use tokens::{TokenSource, Tokens};
pub use turtle::{Heading, Pen, Position, Turtle};
