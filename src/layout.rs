use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

use crate::{
    color::Color,
    piece::{InvalidLayoutChar, Piece, PieceKind},
    square::Square,
};

const STARTING_CONFIGURATION: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseLayoutError {
    #[error("{0}")]
    InvalidChar(#[from] InvalidLayoutChar),
    #[error("layout has {0} squares, 64 were expected")]
    WrongLength(usize),
}

/// Board occupancy as a flat 64 character string.
///
/// The text reads rank 8 down to rank 1, each rank from the a-file to the
/// h-file. Uppercase letters are white, lowercase are black and `.` is vacant.
/// Whitespace and `/` are skipped when parsing so ranks may be split up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout([Piece; 64]);

impl Layout {
    pub fn empty() -> Self {
        Layout([Piece::Blank; 64])
    }
    pub fn standard() -> Self {
        let mut layout = Layout::empty();
        for (file, kind) in (0..).zip(STARTING_CONFIGURATION) {
            layout.set(Square::new(file, 0), Piece::new(Color::White, kind));
            layout.set(Square::new(file, 1), Piece::new(Color::White, PieceKind::Pawn));
            layout.set(Square::new(file, 6), Piece::new(Color::Black, PieceKind::Pawn));
            layout.set(Square::new(file, 7), Piece::new(Color::Black, kind));
        }
        layout
    }
    pub fn get(&self, square: Square) -> Piece {
        self.0[square.index()]
    }
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.0[square.index()] = piece;
    }
    pub fn ranks(&self) -> impl Iterator<Item = String> + '_ {
        (0..8).rev().map(|rank| {
            (0..8)
                .map(|file| self.get(Square::new(file, rank)).layout_char())
                .collect()
        })
    }
}
impl Default for Layout {
    fn default() -> Self {
        Layout::standard()
    }
}
impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<_> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(Piece::from_layout_char)
            .collect::<Result<_, _>>()?;
        if cells.len() != 64 {
            return Err(ParseLayoutError::WrongLength(cells.len()));
        }
        let mut layout = Layout::empty();
        for (i, piece) in (0..64u8).zip(cells) {
            layout.set(Square::new(i % 8, 7 - i / 8), piece);
        }
        Ok(layout)
    }
}
impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in self.ranks() {
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}
