use std::fmt;
use std::io::{self, Write};

/// The grid Myrtle draws on.
///
/// Cells live in one contiguous buffer indexed by `row * cols + col`. The
/// canvas performs no pen logic of its own: callers decide when to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Create a blank canvas of `rows` x `cols` space characters.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut canvas = Self {
            rows,
            cols,
            cells: vec![' '; rows * cols],
        };
        canvas.clear();
        canvas
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reset every cell to a space.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Write `glyph` at (`row`, `col`).
    ///
    /// Panics if the coordinate lies outside the canvas; the turtle keeps
    /// its position clamped so interpreter draws are always in range.
    pub fn draw_at(&mut self, row: usize, col: usize, glyph: char) {
        assert!(row < self.rows && col < self.cols, "draw outside canvas at ({row}, {col})");
        self.cells[row * self.cols + col] = glyph;
    }

    /// The character at (`row`, `col`), or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Rows in order, each exactly `cols` characters, without terminators.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).map(move |r| self.cells[r * self.cols..(r + 1) * self.cols].iter().collect())
    }

    /// Serialize every row followed by `\n`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.render() {
            out.write_all(row.as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
