use std::{
    fmt::{self, Display, Formatter},
    ops::{Mul, Sub},
    str::FromStr,
};

use thiserror::Error;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseSquareError {
    #[error("found `{0}`, characters from `a` to `h` were expected instead")]
    InvalidFile(char),
    #[error("found `{0}`, characters from `1` to `8` were expected instead")]
    InvalidRank(char),
    #[error("provided string have length of {0} characters, 2 were expected")]
    WrongLength(usize),
}

/// A square address. `file` 0 is the a-file and `rank` 0 is the first rank,
/// so white pawns advance towards higher ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}
impl Square {
    pub(crate) const fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8);
        debug_assert!(rank < 8);
        Square { rank, file }
    }
    pub const fn new_checked(file: u8, rank: u8) -> Option<Self> {
        if file >= 8 || rank >= 8 {
            None
        } else {
            Some(Square::new(file, rank))
        }
    }
    /// Case-insensitive two byte parse usable in const context, see [`square!`](crate::square!).
    pub const fn from_ascii(bytes: &[u8]) -> Option<Self> {
        let [file, rank] = bytes else {
            return None;
        };
        let file = file.to_ascii_lowercase();
        if file < b'a' || file > b'h' || *rank < b'1' || *rank > b'8' {
            return None;
        }
        Some(Square::new(file - b'a', *rank - b'1'))
    }
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParseSquareError> {
        let file = match file.to_ascii_lowercase() {
            x @ 'a'..='h' => x as u8 - b'a',
            _ => return Err(ParseSquareError::InvalidFile(file)),
        };
        let rank = match rank {
            '1'..='8' => rank as u8 - b'1',
            _ => return Err(ParseSquareError::InvalidRank(rank)),
        };
        Ok(Square::new(file, rank))
    }
    pub fn file(self) -> u8 {
        self.file
    }
    pub fn rank(self) -> u8 {
        self.rank
    }
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square::new(file, rank)))
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::new_checked(
            self.file.checked_add_signed(movement.file)?,
            self.rank.checked_add_signed(movement.rank)?,
        )
    }
    pub fn line(self, direction: Vector, start: i8) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (start..).map_while(move |difference| self.move_by(direction * difference))
    }
    pub fn line_exclusive(self, direction: Vector) -> impl Iterator<Item = Self> {
        self.line(direction, 1)
    }
}
pub fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}
pub fn pawn_promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = (self.file + b'A') as char;
        let rank = self.rank + 1;
        write!(f, "{file}{rank}")?;
        Ok(())
    }
}
impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::from_chars(file, rank),
            _ => Err(ParseSquareError::WrongLength(s.chars().count())),
        }
    }
}
impl Sub<Self> for Square {
    type Output = Vector;

    #[allow(clippy::cast_possible_wrap, reason = "both coordinates are < 8")]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            file: self.file as i8 - rhs.file as i8,
            rank: self.rank as i8 - rhs.rank as i8,
        }
    }
}
#[macro_export]
macro_rules! square {
    ($name:literal) => {{
        const SQUARE: $crate::square::Square =
            match $crate::square::Square::from_ascii($name.as_bytes()) {
                Some(square) => square,
                None => panic!("invalid square literal"),
            };
        SQUARE
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub file: i8,
    pub rank: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { file: 0, rank: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { file: -1, rank: -2 },
        Vector { file: 1, rank: -2 },
        Vector { file: -1, rank: 2 },
        Vector { file: 1, rank: 2 },
        Vector { file: -2, rank: -1 },
        Vector { file: 2, rank: -1 },
        Vector { file: -2, rank: 1 },
        Vector { file: 2, rank: 1 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { file: -1, rank: -1 },
        Vector { file: 0, rank: -1 },
        Vector { file: 1, rank: -1 },
        Vector { file: -1, rank: 0 },
        Vector { file: 1, rank: 0 },
        Vector { file: -1, rank: 1 },
        Vector { file: 0, rank: 1 },
        Vector { file: 1, rank: 1 },
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { file: -1, rank: 0 },
        Vector { file: 1, rank: 0 },
        Vector { file: 0, rank: -1 },
        Vector { file: 0, rank: 1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { file: -1, rank: -1 },
        Vector { file: 1, rank: -1 },
        Vector { file: -1, rank: 1 },
        Vector { file: 1, rank: 1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Vector::KING_MOVES;

    pub fn pawn_single_move(color: Color) -> Self {
        Vector {
            file: 0,
            rank: pawn_direction(color),
        }
    }
    pub fn pawn_double_move(color: Color) -> Self {
        Vector::pawn_single_move(color) * 2
    }
    pub fn pawn_attacks(color: Color) -> [Self; 2] {
        [-1, 1].map(|file| Vector {
            file,
            rank: pawn_direction(color),
        })
    }
}
pub fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            file: self.file * rhs,
            rank: self.rank * rhs,
        }
    }
}
