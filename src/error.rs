use thiserror::Error;

use crate::{
    color::Color,
    movement::{Lan, ParseMoveError},
    square::Square,
};

/// Why a move was refused. The board is left untouched whenever one of these
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MoveError {
    #[error("invalid move notation: {0}")]
    Notation(#[from] ParseMoveError),
    #[error("it is {to_play}'s turn, {square} does not hold a {to_play} piece")]
    IncorrectPlayer { square: Square, to_play: Color },
    #[error("{0} is not a legal move")]
    IllegalMove(Lan),
    #[error("{0} reaches the last rank, a promotion piece (q, r, b or n) is required")]
    MissingPromotion(Lan),
    #[error("{0} must promote to a queen, rook, bishop or knight")]
    InvalidPromotion(Lan),
    #[error("no piece on {0} to generate moves for")]
    UnsupportedPiece(Square),
}
