//! Cross-checks move generation against the `chess` crate over random games.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    movement::{Lan, Move, MoveKind},
    piece::PieceKind,
    square::Square,
    threat::ThreatAnalyser,
};

impl From<chess::Piece> for PieceKind {
    fn from(value: chess::Piece) -> Self {
        match value {
            chess::Piece::Pawn => PieceKind::Pawn,
            chess::Piece::Knight => PieceKind::Knight,
            chess::Piece::Bishop => PieceKind::Bishop,
            chess::Piece::Rook => PieceKind::Rook,
            chess::Piece::Queen => PieceKind::Queen,
            chess::Piece::King => PieceKind::King,
        }
    }
}
impl From<chess::Square> for Square {
    fn from(value: chess::Square) -> Self {
        Square::new(
            value.get_file().to_index().try_into().unwrap(),
            value.get_rank().to_index().try_into().unwrap(),
        )
    }
}
impl From<chess::ChessMove> for Lan {
    fn from(value: chess::ChessMove) -> Self {
        Lan {
            from: value.get_source().into(),
            to: value.get_dest().into(),
            promotion: value.get_promotion().map(Into::into),
        }
    }
}
fn is_castling(board: &chess::Board, movement: chess::ChessMove) -> bool {
    board.piece_on(movement.get_source()) == Some(chess::Piece::King)
        && movement
            .get_source()
            .get_file()
            .to_index()
            .abs_diff(movement.get_dest().get_file().to_index())
            == 2
}
fn leaves_own_king_threatened(board: &Board, movement: Move) -> bool {
    let Some(color) = board[movement.from].piece().color() else {
        return false;
    };
    let movement = match movement.kind {
        MoveKind::Promotion => Move {
            promotion: Some(PieceKind::Queen),
            ..movement
        },
        _ => movement,
    };
    let mut after = board.clone();
    after.make_move(movement).unwrap();
    let Some(king) = after
        .pieces()
        .find(|piece| piece.piece().is(color, PieceKind::King))
    else {
        return false;
    };
    ThreatAnalyser::new(&after).is_threatened(color, king.square())
}
#[test]
fn candidates_agree_with_legal_moves() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut board = Board::new_game();
    let mut oracle = chess::Board::default();
    for _ in 0..3000 {
        let legal: Vec<_> = chess::MoveGen::new_legal(&oracle)
            .filter(|movement| !is_castling(&oracle, *movement))
            .collect();
        if legal.is_empty() || board.history().len() > 150 {
            board = Board::new_game();
            oracle = chess::Board::default();
            continue;
        }
        let expected: FxHashSet<(Square, Square)> = legal
            .iter()
            .map(|movement| {
                let lan = Lan::from(*movement);
                (lan.from, lan.to)
            })
            .collect();
        let candidates = board.candidate_moves();
        let found: FxHashSet<(Square, Square)> = candidates
            .iter()
            .map(|movement| (movement.from, movement.to))
            .collect();
        if let Some((from, to)) = expected.difference(&found).next() {
            panic!("{from}-{to} not found\n{board}");
        }
        for movement in candidates {
            if !expected.contains(&(movement.from, movement.to)) {
                assert!(
                    leaves_own_king_threatened(&board, movement),
                    "found {movement} but it's not a legal move\n{board}"
                );
            }
        }
        let movement = legal[rng.random_range(0..legal.len())];
        board.make_move_lan(movement.into()).unwrap();
        oracle = oracle.make_move_new(movement);
    }
}
