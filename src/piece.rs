use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const PROMOTION_CHOICES: [Self; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
    pub fn uppercase(self) -> char {
        self.lowercase().to_ascii_uppercase()
    }
    pub fn lowercase(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
    pub fn from_char(c: char) -> Option<Self> {
        let piece = match c {
            'p' | 'P' => PieceKind::Pawn,
            'n' | 'N' => PieceKind::Knight,
            'b' | 'B' => PieceKind::Bishop,
            'r' | 'R' => PieceKind::Rook,
            'q' | 'Q' => PieceKind::Queen,
            'k' | 'K' => PieceKind::King,
            _ => return None,
        };
        Some(piece)
    }
    /// Letters accepted after a move's destination square.
    pub fn from_promotion_char(c: char) -> Result<Self, InvalidPromotionChar> {
        Self::from_char(c)
            .filter(|piece| Self::PROMOTION_CHOICES.contains(piece))
            .ok_or(InvalidPromotionChar(c))
    }
    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTION_CHOICES.contains(&self)
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub color: Color,
    pub kind: PieceKind,
}
impl ColoredPiece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        ColoredPiece { color, kind }
    }
    pub fn layout_char(self) -> char {
        match self.color {
            Color::White => self.kind.uppercase(),
            Color::Black => self.kind.lowercase(),
        }
    }
}
impl Display for ColoredPiece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}

/// What a square holds. Vacant squares hold [`Piece::Blank`] rather than nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Blank,
    Colored(ColoredPiece),
}
impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece::Colored(ColoredPiece::new(color, kind))
    }
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::Blank => None,
            Piece::Colored(piece) => Some(piece.color),
        }
    }
    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Blank => None,
            Piece::Colored(piece) => Some(piece.kind),
        }
    }
    pub fn is_blank(self) -> bool {
        self == Piece::Blank
    }
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self == Piece::new(color, kind)
    }
    pub fn is_opponent_of(self, color: Color) -> bool {
        self.color().is_some_and(|other| other != color)
    }
    pub fn layout_char(self) -> char {
        match self {
            Piece::Blank => '.',
            Piece::Colored(piece) => piece.layout_char(),
        }
    }
    pub fn from_layout_char(c: char) -> Result<Self, InvalidLayoutChar> {
        if c == '.' {
            return Ok(Piece::Blank);
        }
        let kind = PieceKind::from_char(c).ok_or(InvalidLayoutChar(c))?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece::new(color, kind))
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Blank => write!(f, "blank")?,
            Piece::Colored(piece) => write!(f, "{piece}")?,
        }
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("found `{0}`, expected one of `q`, `r`, `b`, `n`, or uppercase forms of these letters")]
pub struct InvalidPromotionChar(pub char);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error(
    "found `{0}`, expected `.` or one of `p`, `n`, `b`, `r`, `k`, `q`, or uppercase forms of these letters"
)]
pub struct InvalidLayoutChar(pub char);
