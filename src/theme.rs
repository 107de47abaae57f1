use std::io::{self, IsTerminal};

use nu_ansi_term::Style;

pub mod catppuccin {
    use nu_ansi_term::Color;
    pub struct Mocha;
    impl Mocha {
        pub const SURFACE2: Color = Color::Rgb(108, 112, 134);

        pub const RED: Color = Color::Rgb(243, 139, 168);
        pub const YELLOW: Color = Color::Rgb(249, 226, 175);
    }
}

use catppuccin::Mocha;

// Diagnostics are only styled when a human is watching stderr.
fn paint(style: Style, text: &str) -> String {
    if io::stderr().is_terminal() {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Fatal error lines.
pub fn error(text: &str) -> String {
    paint(Mocha::RED.bold(), text)
}

/// Verbose command echoes.
pub fn echo(text: &str) -> String {
    paint(Mocha::SURFACE2.normal(), text)
}

/// Non-fatal notices, such as an ignored config value.
pub fn notice(text: &str) -> String {
    paint(Mocha::YELLOW.normal(), text)
}
