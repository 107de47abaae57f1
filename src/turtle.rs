//! Myrtle's own state: where she is, which way she faces, and her pen.

/// One of the four compass directions Myrtle can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Rotate 90 degrees clockwise.
    pub fn right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// `(row, col)` delta of a single forward step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Pen state. Nothing is drawn while the pen is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub down: bool,
    pub glyph: char,
}

impl Default for Pen {
    fn default() -> Self {
        Self { down: false, glyph: ' ' }
    }
}

/// Direction of a single step relative to the current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Myrtle's full state for one run.
///
/// The position is kept inside `rows` x `cols` at all times: any move or
/// teleport that would leave the grid saturates at the nearest edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turtle {
    heading: Heading,
    position: Position,
    pen: Pen,
    line: usize,
    rows: usize,
    cols: usize,
}

impl Turtle {
    /// A turtle at (0, 0) facing East with the pen up, bounded by `rows` x `cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            heading: Heading::East,
            position: Position::default(),
            pen: Pen::default(),
            line: 1,
            rows,
            cols,
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Diagnostic line counter: 1 for the first command, +1 per command.
    pub fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn advance_line(&mut self) {
        self.line += 1;
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    pub fn pen_up(&mut self) {
        self.pen.down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen.down = true;
    }

    pub fn set_glyph(&mut self, glyph: char) {
        self.pen.glyph = glyph;
    }

    /// Move exactly one square and return the square entered.
    ///
    /// Backward steps negate the delta; the heading never changes.
    pub fn step(&mut self, direction: Step) -> Position {
        let (mut dr, mut dc) = self.heading.delta();
        if direction == Step::Backward {
            dr = -dr;
            dc = -dc;
        }
        let row = self.position.row as i64 + dr;
        let col = self.position.col as i64 + dc;
        self.teleport(row, col)
    }

    /// Jump straight to (`row`, `col`), clamped into the grid.
    pub fn teleport(&mut self, row: i64, col: i64) -> Position {
        self.position = Position {
            row: clamp(row, self.rows),
            col: clamp(col, self.cols),
        };
        self.position
    }
}

fn clamp(value: i64, limit: usize) -> usize {
    value.clamp(0, limit.saturating_sub(1) as i64) as usize
}
