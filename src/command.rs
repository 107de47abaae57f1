use crate::tokens::TokenSource;
use crate::MyrtleError;

/// The nine command names Myrtle understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Backward,
    Forward,
    Hyper,
    Left,
    PenChar,
    PenDown,
    PenUp,
    Right,
    Stop,
}

/// Name lookup table; matching is exact and case-sensitive.
const COMMAND_TABLE: [(&str, CommandKind); 9] = [
    ("backward", CommandKind::Backward),
    ("forward", CommandKind::Forward),
    ("hyper", CommandKind::Hyper),
    ("left", CommandKind::Left),
    ("penchar", CommandKind::PenChar),
    ("pendown", CommandKind::PenDown),
    ("penup", CommandKind::PenUp),
    ("right", CommandKind::Right),
    ("stop", CommandKind::Stop),
];

impl CommandKind {
    pub fn lookup(name: &str) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
    }

    pub fn name(self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|(_, k)| *k == self)
            .map(|(n, _)| *n)
            .unwrap_or_default()
    }

    /// How many further tokens the command consumes.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Forward | CommandKind::Backward | CommandKind::PenChar => 1,
            CommandKind::Hyper => 2,
            CommandKind::Left
            | CommandKind::Right
            | CommandKind::PenUp
            | CommandKind::PenDown
            | CommandKind::Stop => 0,
        }
    }
}

/// A fully resolved command with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Backward(i64),
    Left,
    Right,
    PenUp,
    PenDown,
    PenChar(char),
    Hyper { row: i64, col: i64 },
    Stop,
}

impl Command {
    /// Resolve `name` and pull its arguments from `source`.
    ///
    /// `line` is only used to label errors.
    pub fn read<S: TokenSource>(name: &str, source: &mut S, line: usize) -> Result<Self, MyrtleError> {
        let kind = CommandKind::lookup(name).ok_or_else(|| MyrtleError::UnknownCommand {
            name: name.to_string(),
            line,
        })?;

        let mut args = Vec::with_capacity(kind.arity());
        for _ in 0..kind.arity() {
            let token = source
                .next_token()
                .map_err(|source| MyrtleError::Read { source })?
                .ok_or(MyrtleError::MissingArgument { command: kind.name(), line })?;
            args.push(token);
        }

        Ok(match kind {
            CommandKind::Forward => Command::Forward(parse_int(&args[0])),
            CommandKind::Backward => Command::Backward(parse_int(&args[0])),
            CommandKind::Left => Command::Left,
            CommandKind::Right => Command::Right,
            CommandKind::PenUp => Command::PenUp,
            CommandKind::PenDown => Command::PenDown,
            // Tokens are never empty, so there is always a first character.
            CommandKind::PenChar => Command::PenChar(args[0].chars().next().unwrap_or(' ')),
            CommandKind::Hyper => Command::Hyper {
                row: parse_int(&args[0]),
                col: parse_int(&args[1]),
            },
            CommandKind::Stop => Command::Stop,
        })
    }
}

/// Lenient integer parse: optional leading whitespace and sign, then as many
/// decimal digits as are present. Anything unparseable is 0 and overflow
/// saturates.
pub fn parse_int(token: &str) -> i64 {
    let s = token.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(d);
    }
    if negative { -value } else { value }
}
