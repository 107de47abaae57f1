//! The Myrtle interpreter loop.
//!
//! Quick start:
//!
//! ```
//! use std::io::Cursor;
//! use myrtle::{Config, Interpreter, Tokens};
//!
//! let mut tokens = Tokens::new(Cursor::new("pendown penchar * forward 3 stop"));
//! let mut out = Vec::new();
//! Interpreter::new(Config::default()).run(&mut tokens, &mut out).expect("program should run");
//! assert!(String::from_utf8(out).unwrap().starts_with(" ***"));
//! ```

use std::io::{self, Write};

use crate::canvas::Canvas;
use crate::command::Command;
use crate::config::Config;
use crate::tokens::TokenSource;
use crate::turtle::{Step, Turtle};
use crate::MyrtleError;

/// Why a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The token source ran dry.
    EndOfInput,
    /// A `stop` command was executed.
    Stopped,
}

enum Flow {
    Continue,
    Stop,
}

/// Owns the turtle and canvas for one run.
pub struct Interpreter {
    turtle: Turtle,
    canvas: Canvas,
    verbose: bool,
    echo_sink: Option<Box<dyn Fn(&str)>>,
}

impl Interpreter {
    /// Fresh turtle and blank canvas sized by `config`.
    pub fn new(config: Config) -> Self {
        Self {
            turtle: Turtle::new(config.rows, config.cols),
            canvas: Canvas::new(config.rows, config.cols),
            verbose: false,
            echo_sink: None,
        }
    }

    /// Echo each command name before it runs.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Where verbose echoes go. Without a sink they are written to stderr.
    pub fn set_echo_sink<F>(&mut self, sink: F)
    where
        F: Fn(&str) + 'static,
    {
        self.echo_sink = Some(Box::new(sink));
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Interpret every command from `source`, then write the canvas to `out`.
    ///
    /// Nothing is written if interpretation fails.
    pub fn run<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<Halt, MyrtleError>
    where
        S: TokenSource,
        W: Write,
    {
        let halt = self.execute(source)?;
        self.canvas
            .write_to(out)
            .map_err(|source| MyrtleError::Write { source })?;
        Ok(halt)
    }

    /// Interpret commands until end-of-input or `stop`, leaving the canvas in place.
    pub fn execute<S: TokenSource>(&mut self, source: &mut S) -> Result<Halt, MyrtleError> {
        loop {
            let Some(name) = source.next_token().map_err(|source| MyrtleError::Read { source })? else {
                return Ok(Halt::EndOfInput);
            };

            if self.verbose {
                self.echo(&name);
            }

            let command = Command::read(&name, source, self.turtle.line())?;
            let flow = self.apply(command);
            self.turtle.advance_line();

            if let Flow::Stop = flow {
                return Ok(Halt::Stopped);
            }
        }
    }

    fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Forward(n) => self.walk(n, Step::Forward),
            Command::Backward(n) => self.walk(n, Step::Backward),
            Command::Left => self.turtle.turn_left(),
            Command::Right => self.turtle.turn_right(),
            Command::PenUp => self.turtle.pen_up(),
            Command::PenDown => self.turtle.pen_down(),
            Command::PenChar(c) => self.turtle.set_glyph(c),
            Command::Hyper { row, col } => {
                self.turtle.teleport(row, col);
                self.draw();
            }
            Command::Stop => return Flow::Stop,
        }
        Flow::Continue
    }

    /// Move `squares` single steps, drawing on each square entered.
    ///
    /// After `max(rows, cols)` steps the turtle is pinned to an edge and every
    /// further step redraws the same cell, so the walk stops there.
    fn walk(&mut self, squares: i64, direction: Step) {
        let span = self.canvas.rows().max(self.canvas.cols()) as i64;
        for _ in 0..squares.clamp(0, span) {
            self.turtle.step(direction);
            self.draw();
        }
    }

    fn draw(&mut self) {
        let pen = self.turtle.pen();
        if pen.down {
            let pos = self.turtle.position();
            self.canvas.draw_at(pos.row, pos.col, pen.glyph);
        }
    }

    fn echo(&self, name: &str) {
        let line = format!("Performing command: {name}");
        match self.echo_sink.as_ref() {
            Some(sink) => (sink)(&line),
            None => {
                eprintln!("{}", crate::theme::echo(&line));
                let _ = io::stderr().flush();
            }
        }
    }
}
