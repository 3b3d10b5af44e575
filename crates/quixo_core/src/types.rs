use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the grid.
pub const SIZE: usize = 5;
/// Number of cells on the grid.
pub const CELLS: usize = SIZE * SIZE;
/// Last row/column index.
pub const EDGE: u8 = (SIZE - 1) as u8;

/// One of the two opposing marks. `X` is side A and moves first by convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::X, Symbol::O];

    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Symbol::X => 0,
            Symbol::O => 1,
        }
    }
    pub fn to_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'X' | 'x' => Some(Symbol::X),
            'O' | 'o' => Some(Symbol::O),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Sense in which a line is shifted. The mover's mark is reinserted at the
/// border the direction points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Generation order used by the move generator.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub fn to_char(self) -> char {
        match self {
            Direction::Right => 'R',
            Direction::Left => 'L',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }
}

/// A cell coordinate, row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const CENTER: Pos = Pos { row: 2, col: 2 };

    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn idx(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    #[inline]
    pub fn from_idx(idx: usize) -> Self {
        Self {
            row: (idx / SIZE) as u8,
            col: (idx % SIZE) as u8,
        }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        self.row <= EDGE && self.col <= EDGE
    }

    /// True for the 16 boundary cells, the only legal move origins.
    #[inline]
    pub fn is_perimeter(self) -> bool {
        self.in_bounds()
            && (self.row == 0 || self.row == EDGE || self.col == 0 || self.col == EDGE)
    }

    pub fn manhattan(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Withdraw the piece at `from` and slide its line in direction `dir`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub dir: Direction,
    pub from: Pos,
}

impl Move {
    pub const fn new(dir: Direction, from: Pos) -> Self {
        Self { dir, from }
    }

    /// Cell that receives the mover's mark: the far border in `dir`.
    pub fn destination(self) -> Pos {
        match self.dir {
            Direction::Right => Pos::new(self.from.row, EDGE),
            Direction::Left => Pos::new(self.from.row, 0),
            Direction::Up => Pos::new(0, self.from.col),
            Direction::Down => Pos::new(EDGE, self.from.col),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.dir.to_char())
    }
}
