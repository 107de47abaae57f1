use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A lazy supplier of whitespace-delimited words.
///
/// `Ok(None)` signals end-of-stream. Each call hands out a fresh owned token.
pub trait TokenSource {
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Token source over any buffered reader, pulling one line at a time.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> TokenSource for Tokens<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            // Invalid UTF-8 is replaced rather than rejected; it can only ever
            // end up as an unknown command or a glyph.
            let text = String::from_utf8_lossy(&self.line);
            self.pending.extend(text.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}

/// Tokens from an in-memory list, mostly useful in tests and embedding.
impl TokenSource for VecDeque<String> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}
