use std::{
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use thiserror::Error;

use crate::{
    piece::{InvalidPromotionChar, PieceKind},
    square::{ParseSquareError, Square},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Move,
    Take,
    TakeEnPassant,
    /// Never generated, castling is not supported.
    Castle,
    /// Never generated, check is not detected while moving.
    Check,
    /// Never generated, checkmate is not detected while moving.
    Checkmate,
    Promotion,
}
impl Display for MoveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Move => write!(f, "move")?,
            MoveKind::Take => write!(f, "take")?,
            MoveKind::TakeEnPassant => write!(f, "take en passant")?,
            MoveKind::Castle => write!(f, "castle")?,
            MoveKind::Check => write!(f, "check")?,
            MoveKind::Checkmate => write!(f, "checkmate")?,
            MoveKind::Promotion => write!(f, "promotion")?,
        }
        Ok(())
    }
}

/// Equality ignores the promotion choice.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub promotion: Option<PieceKind>,
}
impl Move {
    pub fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move {
            from,
            to,
            kind,
            promotion: None,
        }
    }
    pub fn promoting(from: Square, to: Square, piece: PieceKind) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Promotion,
            promotion: Some(piece),
        }
    }
    pub fn is_capture(self) -> bool {
        matches!(self.kind, MoveKind::Take | MoveKind::TakeEnPassant)
    }
    pub fn as_lan(self) -> Lan {
        Lan {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.kind == other.kind
    }
}
impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.kind.hash(state);
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_lan())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseMoveError {
    #[error("{0}")]
    Square(#[from] ParseSquareError),
    #[error("{0}")]
    Promotion(#[from] InvalidPromotionChar),
    #[error("provided string is too short to be a move")]
    TooShort,
    #[error("unexpected `{0}`")]
    Unexpected(char),
}

/// A move as typed by a player, `d2d4`, `D2-D4` or `a7-a8q`. It names squares
/// only; [`Board::resolve`](crate::board::Board::resolve) finds the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lan {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}
impl Display for Lan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.uppercase())?;
        }
        Ok(())
    }
}
impl FromStr for Lan {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().fuse();
        let mut next = || chars.next().ok_or(ParseMoveError::TooShort);

        let from = Square::from_chars(next()?, next()?)?;
        let mut file = next()?;
        if file == '-' {
            file = next()?;
        }
        let to = Square::from_chars(file, next()?)?;
        let promotion = chars
            .next()
            .map(PieceKind::from_promotion_char)
            .transpose()?;

        if let Some(c) = chars.next() {
            return Err(ParseMoveError::Unexpected(c));
        }
        Ok(Lan {
            from,
            to,
            promotion,
        })
    }
}
#[cfg(test)]
mod test {
    use crate::{
        movement::{Lan, Move, MoveKind, ParseMoveError},
        piece::{InvalidPromotionChar, PieceKind},
        square,
        square::ParseSquareError,
    };

    #[test]
    fn dash_is_optional() {
        let expected = Lan {
            from: square!("d2"),
            to: square!("d4"),
            promotion: None,
        };
        assert_eq!("D2-D4".parse(), Ok(expected));
        assert_eq!("d2d4".parse(), Ok(expected));
    }
    #[test]
    fn reads_promotion_letter() {
        let lan: Lan = "a7-a8N".parse().unwrap();
        assert_eq!(lan.promotion, Some(PieceKind::Knight));
    }
    #[test]
    fn rejects_malformed_moves() {
        assert_eq!("d2".parse::<Lan>(), Err(ParseMoveError::TooShort));
        assert_eq!(
            "d2-d9".parse::<Lan>(),
            Err(ParseMoveError::Square(ParseSquareError::InvalidRank('9')))
        );
        assert_eq!(
            "a7a8k".parse::<Lan>(),
            Err(ParseMoveError::Promotion(InvalidPromotionChar('k')))
        );
        assert_eq!("a7a8qq".parse::<Lan>(), Err(ParseMoveError::Unexpected('q')));
    }
    #[test]
    fn equality_ignores_promotion_choice() {
        let queen = Move::promoting(square!("a7"), square!("a8"), PieceKind::Queen);
        let rook = Move::promoting(square!("a7"), square!("a8"), PieceKind::Rook);
        let advance = Move::new(square!("a7"), square!("a8"), MoveKind::Move);
        assert_eq!(queen, rook);
        assert_ne!(queen, advance);
    }
    #[test]
    fn displays_with_dash() {
        let movement = Move::new(square!("d2"), square!("d4"), MoveKind::Move);
        assert_eq!(movement.to_string(), "D2-D4");
    }
}
