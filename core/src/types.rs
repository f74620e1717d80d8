use std::fmt;

/// Represents one of the two players.
/// Black starts on rows 0-2 and moves toward row 7; White the opposite.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Returns the opposite side.
    pub const fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Returns the row delta of a forward step for this side.
    pub const fn forward(self) -> i8 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    /// Returns the row on which men of this side are crowned.
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::Black => 7,
            Side::White => 0,
        }
    }

    /// Returns true if `row` lies in this side's advanced half of the board.
    pub const fn is_advanced(self, row: i8) -> bool {
        match self {
            Side::Black => row > 3,
            Side::White => row < 4,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "BLACK"),
            Side::White => write!(f, "WHITE"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// A checker with both kind and side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    pub const fn man(side: Side) -> Self {
        Self::new(PieceKind::Man, side)
    }

    pub const fn king(side: Side) -> Self {
        Self::new(PieceKind::King, side)
    }

    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Returns the crowned version of this piece. Kings stay kings.
    pub const fn crowned(self) -> Self {
        Self::king(self.side)
    }

    /// Parses a board character: `b`/`B` for black, `w`/`W` for white,
    /// upper case meaning king.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Piece::man(Side::Black)),
            'B' => Some(Piece::king(Side::Black)),
            'w' => Some(Piece::man(Side::White)),
            'W' => Some(Piece::king(Side::White)),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match (self.side, self.kind) {
            (Side::Black, PieceKind::Man) => 'b',
            (Side::Black, PieceKind::King) => 'B',
            (Side::White, PieceKind::Man) => 'w',
            (Side::White, PieceKind::King) => 'W',
        }
    }
}

/// Returns the side owning a cell's content, if any.
pub fn color_of(cell: Option<Piece>) -> Option<Side> {
    cell.map(|p| p.side)
}

/// A playable (dark) square, identified by its serial index 1-32.
/// Serial 1 is row 0, column 1; numbering runs left to right, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from a serial index.
    /// Returns None if the index is outside 1-32.
    pub const fn new(serial: u8) -> Option<Self> {
        if serial >= 1 && serial <= 32 {
            Some(Square(serial))
        } else {
            None
        }
    }

    /// Returns the square at the given grid coordinates.
    /// Returns None for light squares and coordinates off the board.
    pub const fn from_grid(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row > 7 || col < 0 || col > 7 || (row + col) % 2 == 0 {
            return None;
        }
        Some(Square(serial_of(row, col)))
    }

    pub const fn serial(self) -> u8 {
        self.0
    }

    /// Returns (row, col) with row 0 at the top of the board.
    pub const fn grid(self) -> (i8, i8) {
        grid_of(self.0)
    }

    pub const fn row(self) -> i8 {
        self.grid().0
    }

    pub const fn col(self) -> i8 {
        self.grid().1
    }

    /// Iterates all 32 playable squares in serial order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=32).map(Square)
    }
}

impl fmt::Display for Square {
    /// Writes the square in file/rank form (e.g. `b6`), rank 8 being row 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.grid();
        write!(f, "{}{}", (b'a' + col as u8) as char, 8 - row)
    }
}

/// Converts a serial index (1-32) to (row, col).
pub const fn grid_of(serial: u8) -> (i8, i8) {
    let s = serial as i8 - 1;
    let row = s / 4;
    (row, 2 * (s % 4) + 1 - row % 2)
}

/// Converts dark-square grid coordinates to a serial index (1-32).
pub const fn serial_of(row: i8, col: i8) -> u8 {
    (4 * row + col / 2 + 1) as u8
}

/// One hop of a move, from one square to the next.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Leg {
    pub from: Square,
    pub to: Square,
}

impl Leg {
    /// A leg skipping two rows is a capture.
    pub fn is_capture(self) -> bool {
        (self.from.row() - self.to.row()).abs() == 2
    }

    /// Returns the square jumped over by a capture leg.
    pub fn captured_square(self) -> Option<Square> {
        if !self.is_capture() {
            return None;
        }
        let (r1, c1) = self.from.grid();
        let (r2, c2) = self.to.grid();
        Square::from_grid((r1 + r2) / 2, (c1 + c2) / 2)
    }
}

/// A move: the starting square followed by every landing square.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    path: Vec<Square>,
}

impl Move {
    /// Creates a move from its path.
    /// Returns None when the path does not contain at least two squares.
    pub fn new(path: Vec<Square>) -> Option<Self> {
        if path.len() < 2 {
            None
        } else {
            Some(Self { path })
        }
    }

    /// Creates a move from serial indices.
    /// Returns None if any index is out of range or the path is too short.
    pub fn from_serials(serials: &[u8]) -> Option<Self> {
        let path = serials
            .iter()
            .map(|&s| Square::new(s))
            .collect::<Option<Vec<_>>>()?;
        Self::new(path)
    }

    pub(crate) fn simple(from: Square, to: Square) -> Self {
        Self {
            path: vec![from, to],
        }
    }

    pub fn from(&self) -> Square {
        self.path[0]
    }

    pub fn to(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    pub fn path(&self) -> &[Square] {
        &self.path
    }

    pub fn serials(&self) -> Vec<u8> {
        self.path.iter().map(|s| s.serial()).collect()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn legs(&self) -> impl Iterator<Item = Leg> + '_ {
        self.path
            .windows(2)
            .map(|w| Leg { from: w[0], to: w[1] })
    }

    /// Returns true if the first leg is a jump.
    pub fn is_capture(&self) -> bool {
        self.legs().next().map_or(false, Leg::is_capture)
    }

    /// Number of capture legs in this move.
    pub fn capture_count(&self) -> usize {
        self.legs().filter(|l| l.is_capture()).count()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        for (i, square) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "{sep}")?;
            }
            write!(f, "{square}")?;
        }
        Ok(())
    }
}
