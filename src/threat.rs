//! Attack and defence relationships derived from a board snapshot.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{board::Board, color::Color, movegen, movement::Move, square::Square};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Threats {
    pub threats: Vec<Move>,
    pub covers: Vec<Move>,
}
impl Threats {
    pub fn is_threatened(&self) -> bool {
        !self.threats.is_empty()
    }
    pub fn is_covered(&self) -> bool {
        !self.covers.is_empty()
    }
}

/// The analyser borrows the board it was built from, so it can not outlive a
/// move played on that board.
#[derive(Debug, Clone)]
pub struct ThreatAnalyser<'a> {
    board: &'a Board,
    white: FxHashMap<Square, Vec<Move>>,
    black: FxHashMap<Square, Vec<Move>>,
}
impl<'a> ThreatAnalyser<'a> {
    pub fn new(board: &'a Board) -> Self {
        let mut white = FxHashMap::<Square, Vec<Move>>::default();
        let mut black = FxHashMap::<Square, Vec<Move>>::default();
        for piece in board.pieces() {
            let bucket = match piece.piece().color() {
                Some(Color::White) => &mut white,
                Some(Color::Black) => &mut black,
                None => continue,
            };
            for movement in movegen::attacks(board, piece.square()) {
                bucket.entry(movement.to).or_default().push(movement);
            }
        }
        trace!(
            white = white.len(),
            black = black.len(),
            "threat analyser built"
        );
        ThreatAnalyser {
            board,
            white,
            black,
        }
    }
    pub fn attacks_on(&self, square: Square, by: Color) -> &[Move] {
        let bucket = match by {
            Color::White => &self.white,
            Color::Black => &self.black,
        };
        bucket.get(&square).map(Vec::as_slice).unwrap_or_default()
    }
    pub fn for_square(&self, color: Color, square: Square) -> Threats {
        Threats {
            threats: self.attacks_on(square, !color).to_vec(),
            covers: self.attacks_on(square, color).to_vec(),
        }
    }
    pub fn is_threatened(&self, color: Color, square: Square) -> bool {
        !self.attacks_on(square, !color).is_empty()
    }
    pub fn attacks_from(&self, origin: Square) -> Vec<Move> {
        let Some(color) = self.board[origin].piece().color() else {
            return Vec::new();
        };
        let bucket = match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        };
        let mut moves: Vec<_> = bucket
            .values()
            .flatten()
            .filter(|movement| movement.from == origin)
            .copied()
            .collect();
        moves.sort_by_key(|movement| movement.to);
        moves
    }
}
