use std::fmt::{self, Display, Formatter};

/// The number of columns on the board.
pub const WIDTH: usize = 7;
/// The number of rows on the board.
pub const HEIGHT: usize = 6;

/// The middle column, the most valuable one to control.
pub const CENTER_COLUMN: usize = WIDTH / 2;

/// One of the two sides playing a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    X,
    O,
}

/// A side paired with its opponent, the perspective used by scoring and search.
/// Holds no board state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pov {
    pub own: Side,
    pub opponent: Side,
}

/// The absolute result of a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    WonBy(Side),
    Draw,
}

/// Error returned by [Board::place_mark].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlaceError {
    /// The column index is outside `0..WIDTH`.
    InvalidColumn,
    /// The column has no empty cell left.
    ColumnFull,
}

/// The Connect Four board: a 7x6 grid of cells, row 0 at the top.
///
/// Within a column the occupied cells are always contiguous from the bottom,
/// [Board::place_mark] only ever appends to the lowest empty row.
/// `Clone` is a deep value copy, which is what the search engine uses to
/// explore hypothetical moves without touching the live board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    columns: [[Option<Side>; HEIGHT]; WIDTH],
}

/// The four direction vectors `(dc, dr)` a line can run in:
/// right, down, down-right and down-left. They are distinct vectors,
/// so a single physical line is never counted twice.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

impl Side {
    pub const BOTH: [Side; 2] = [Side::X, Side::O];

    pub fn other(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Side::X => 'x',
            Side::O => 'o',
        }
    }
}

impl Pov {
    pub fn of(own: Side) -> Pov {
        Pov {
            own,
            opponent: own.other(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            columns: [[None; HEIGHT]; WIDTH],
        }
    }
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// The cell at the given position, `None` when empty.
    /// Panics if the position is outside the grid.
    pub fn cell(&self, col: usize, row: usize) -> Option<Side> {
        self.columns[col][row]
    }

    /// Whether a mark can be dropped into `col`,
    /// ie. whether the topmost cell of `col` is empty.
    /// Returns `false` for out-of-range columns.
    pub fn legal_move(&self, col: usize) -> bool {
        col < WIDTH && self.columns[col][0].is_none()
    }

    /// Iterator over the legal columns, in ascending order.
    pub fn available_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&col| self.legal_move(col))
    }

    /// Drop a mark for `side` into `col`, onto the lowest empty row.
    /// Returns `Ok(true)` iff this placement completes a winning line for `side`.
    pub fn place_mark(&mut self, side: Side, col: usize) -> Result<bool, PlaceError> {
        if col >= WIDTH {
            return Err(PlaceError::InvalidColumn);
        }
        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.columns[col][row].is_none())
            .ok_or(PlaceError::ColumnFull)?;
        self.columns[col][row] = Some(side);
        Ok(self.is_winner(side))
    }

    pub fn is_winner(&self, side: Side) -> bool {
        self.count_lines(side, 4) >= 1
    }

    /// Whether the board is full. A full board can simultaneously contain a
    /// winning line, so callers must check [Board::is_winner] first.
    pub fn is_draw(&self) -> bool {
        (0..WIDTH).all(|col| !self.legal_move(col))
    }

    /// Count the 4-cell windows in which `side` occupies at least `n` cells
    /// and the remaining cells are empty. Windows containing an opposing mark
    /// never count, and neither do windows that run off the board.
    pub fn count_lines(&self, side: Side, n: usize) -> usize {
        let mut lines = 0;

        for col in 0..WIDTH as isize {
            for row in 0..HEIGHT as isize {
                'directions: for &(dc, dr) in &DIRECTIONS {
                    let mut own = 0;

                    for i in 0..4 {
                        let c = col + i * dc;
                        let r = row + i * dr;
                        let in_bounds = (0..WIDTH as isize).contains(&c) && (0..HEIGHT as isize).contains(&r);
                        if !in_bounds {
                            continue 'directions;
                        }

                        match self.columns[c as usize][r as usize] {
                            Some(s) if s == side => own += 1,
                            Some(_) => continue 'directions,
                            None => {}
                        }
                    }

                    if own >= n {
                        lines += 1;
                    }
                }
            }
        }

        lines
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let c = match self.columns[col][row] {
                    Some(side) => side.to_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Display for PlaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::InvalidColumn => write!(f, "column index out of range"),
            PlaceError::ColumnFull => write!(f, "column is already full"),
        }
    }
}

impl std::error::Error for PlaceError {}
