//! Candidates respect occupancy and board edges but not the safety of the
//! mover's own king.

use tracing::trace;

use crate::{
    board::Board,
    color::Color,
    error::MoveError,
    movement::{Move, MoveKind},
    piece::{Piece, PieceKind},
    square::{Square, Vector, pawn_home_rank},
    validator::{self, ADVANCE, CAPTURE, EN_PASSANT, PROMOTION_ADVANCE, PROMOTION_CAPTURE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reach {
    Moves,
    /// Squares the piece could capture on, whatever occupies them. Every
    /// candidate is tagged [`MoveKind::Take`].
    Attacks,
}

pub type Generator = fn(&Board, Square, Color, Reach) -> Vec<Move>;

pub fn generator_for(kind: PieceKind) -> Generator {
    match kind {
        PieceKind::Pawn => pawn_moves,
        PieceKind::Knight => knight_moves,
        PieceKind::Bishop => bishop_moves,
        PieceKind::Rook => rook_moves,
        PieceKind::Queen => queen_moves,
        PieceKind::King => king_moves,
    }
}
pub fn generate(board: &Board, origin: Square) -> Result<Vec<Move>, MoveError> {
    generate_with(board, origin, Reach::Moves)
}
pub fn attacks(board: &Board, origin: Square) -> Vec<Move> {
    generate_with(board, origin, Reach::Attacks).unwrap_or_default()
}
fn generate_with(board: &Board, origin: Square, reach: Reach) -> Result<Vec<Move>, MoveError> {
    let Piece::Colored(piece) = board[origin].piece() else {
        return Err(MoveError::UnsupportedPiece(origin));
    };
    let moves = generator_for(piece.kind)(board, origin, piece.color, reach);
    trace!(%origin, ?reach, count = moves.len(), "generated {}", piece.kind);
    Ok(moves)
}
fn target(board: &Board, color: Color, destination: Square, reach: Reach) -> Option<MoveKind> {
    match (board[destination].piece(), reach) {
        (_, Reach::Attacks) => Some(MoveKind::Take),
        (Piece::Blank, Reach::Moves) => Some(MoveKind::Move),
        (piece, Reach::Moves) => piece.is_opponent_of(color).then_some(MoveKind::Take),
    }
}
fn step_moves(
    board: &Board,
    origin: Square,
    color: Color,
    reach: Reach,
    moves: &[Vector],
) -> Vec<Move> {
    moves
        .iter()
        .filter_map(|movement| origin.move_by(*movement))
        .filter_map(|destination| {
            target(board, color, destination, reach)
                .map(|kind| Move::new(origin, destination, kind))
        })
        .collect()
}
fn directional_moves(
    board: &Board,
    origin: Square,
    color: Color,
    reach: Reach,
    direction: Vector,
) -> impl Iterator<Item = Move> {
    let mut resume = true;
    origin.line_exclusive(direction).map_while(move |destination| {
        if !resume {
            return None;
        }
        resume = board.is_empty_at(destination);
        target(board, color, destination, reach).map(|kind| Move::new(origin, destination, kind))
    })
}
fn all_directional_moves(
    board: &Board,
    origin: Square,
    color: Color,
    reach: Reach,
    directions: &[Vector],
) -> Vec<Move> {
    directions
        .iter()
        .flat_map(|direction| directional_moves(board, origin, color, reach, *direction))
        .collect()
}
fn knight_moves(board: &Board, origin: Square, color: Color, reach: Reach) -> Vec<Move> {
    step_moves(board, origin, color, reach, &Vector::KNIGHT_MOVES)
}
fn king_moves(board: &Board, origin: Square, color: Color, reach: Reach) -> Vec<Move> {
    step_moves(board, origin, color, reach, &Vector::KING_MOVES)
}
fn bishop_moves(board: &Board, origin: Square, color: Color, reach: Reach) -> Vec<Move> {
    all_directional_moves(board, origin, color, reach, &Vector::BISHOP_DIRECTIONS)
}
fn rook_moves(board: &Board, origin: Square, color: Color, reach: Reach) -> Vec<Move> {
    all_directional_moves(board, origin, color, reach, &Vector::ROOK_DIRECTIONS)
}
fn queen_moves(board: &Board, origin: Square, color: Color, reach: Reach) -> Vec<Move> {
    all_directional_moves(board, origin, color, reach, &Vector::QUEEN_DIRECTIONS)
}
fn pawn_moves(board: &Board, origin: Square, color: Color, reach: Reach) -> Vec<Move> {
    let diagonals = Vector::pawn_attacks(color)
        .into_iter()
        .filter_map(|movement| origin.move_by(movement));
    if reach == Reach::Attacks {
        return diagonals
            .map(|destination| Move::new(origin, destination, MoveKind::Take))
            .collect();
    }
    let forward_jumps = if origin.rank() == pawn_home_rank(color) {
        2
    } else {
        1
    };
    let mut moves: Vec<_> = origin
        .line_exclusive(Vector::pawn_single_move(color))
        .take(forward_jumps)
        .map(|destination| Move::new(origin, destination, MoveKind::Move))
        .take_while(|movement| validator::validate(ADVANCE, *movement, board))
        .collect();
    moves.extend(diagonals.filter_map(|destination| {
        [MoveKind::Take, MoveKind::TakeEnPassant]
            .into_iter()
            .map(|kind| Move::new(origin, destination, kind))
            .find(|movement| match movement.kind {
                MoveKind::Take => validator::validate(CAPTURE, *movement, board),
                _ => validator::validate(EN_PASSANT, *movement, board),
            })
    }));
    for movement in &mut moves {
        let promotes = match movement.kind {
            MoveKind::Move => validator::validate(PROMOTION_ADVANCE, *movement, board),
            MoveKind::Take => validator::validate(PROMOTION_CAPTURE, *movement, board),
            _ => false,
        };
        if promotes {
            movement.kind = MoveKind::Promotion;
        }
    }
    moves
}
#[cfg(test)]
mod test {
    use rustc_hash::FxHashSet;

    use crate::{
        board::Board,
        color::Color,
        error::MoveError,
        movegen::{attacks, generate},
        movement::{Move, MoveKind},
        square,
        square::Square,
    };

    fn board(ranks: [&str; 8], to_play: Color) -> Board {
        Board::custom(&ranks.concat(), to_play).unwrap()
    }
    fn destinations(moves: &[Move]) -> FxHashSet<Square> {
        moves.iter().map(|movement| movement.to).collect()
    }

    #[test]
    fn pawn_cannot_take_piece_directly_ahead() {
        let board = board(
            [
                "rnbqkbnr", "pppppppp", "........", "........", "........", "p.......",
                "PPPPPPPP", "RNBQKBNR",
            ],
            Color::White,
        );
        assert_eq!(generate(&board, square!("a2")), Ok(Vec::new()));
    }
    #[test]
    fn pawn_cannot_jump_piece_two_squares_ahead() {
        let board = board(
            [
                "rnbqkbnr", "pppppppp", "........", "........", "p.......", "........",
                "PPPPPPPP", "RNBQKBNR",
            ],
            Color::White,
        );
        assert_eq!(
            generate(&board, square!("a2")),
            Ok(vec![Move::new(square!("a2"), square!("a3"), MoveKind::Move)])
        );
    }
    #[test]
    fn pawn_takes_diagonally() {
        let board = board(
            [
                "rnbqkbnr", "pppppppp", "........", "........", "........", ".p.p....",
                "PPPPPPPP", "RNBQKBNR",
            ],
            Color::White,
        );
        let moves = generate(&board, square!("c2")).unwrap();
        let takes: Vec<_> = moves
            .iter()
            .filter(|movement| movement.kind == MoveKind::Take)
            .collect();
        assert_eq!(takes.len(), 2);
        assert_eq!(
            destinations(&moves),
            FxHashSet::from_iter([square!("c3"), square!("c4"), square!("b3"), square!("d3")])
        );
    }
    #[test]
    fn pawn_takes_en_passant() {
        let mut board = board(
            [
                "rnbqkbnr", "pppppppp", "........", "........", "...p....", "........",
                "PPPPPPPP", "RNBQKBNR",
            ],
            Color::White,
        );
        board.move_notation("c2c4").unwrap();
        let moves = generate(&board, square!("d4")).unwrap();
        assert_eq!(
            destinations(&moves),
            FxHashSet::from_iter([square!("d3"), square!("c3")])
        );
        assert!(moves.contains(&Move::new(
            square!("d4"),
            square!("c3"),
            MoveKind::TakeEnPassant
        )));
    }
    #[test]
    fn en_passant_expires_after_one_ply() {
        let mut board = board(
            [
                "....k...", "........", "........", "........", "...p....", "........",
                "..P.....", "....K...",
            ],
            Color::White,
        );
        board.move_notation("c2c4").unwrap();
        board.move_notation("e8e7").unwrap();
        board.move_notation("e1e2").unwrap();
        let moves = generate(&board, square!("d4")).unwrap();
        assert_eq!(moves, [Move::new(square!("d4"), square!("d3"), MoveKind::Move)]);
    }
    #[test]
    fn pawn_promotes_on_advance_and_capture() {
        let board = board(
            [
                ".r......", "P.......", "........", "........", "........", "........",
                "........", "........",
            ],
            Color::White,
        );
        let moves = generate(&board, square!("a7")).unwrap();
        assert_eq!(moves.len(), 2);
        assert!(
            moves
                .iter()
                .all(|movement| movement.kind == MoveKind::Promotion)
        );
    }
    #[test]
    fn black_pawn_moves_down() {
        let board = Board::new_game();
        let moves = generate(&board, square!("e7")).unwrap();
        assert_eq!(
            destinations(&moves),
            FxHashSet::from_iter([square!("e6"), square!("e5")])
        );
    }
    #[test]
    fn rook_stops_before_own_pieces() {
        let board = board(
            [
                "........", "...p....", "........", "........", "........", "........",
                "...P....", "...R....",
            ],
            Color::White,
        );
        assert_eq!(generate(&board, square!("d1")).unwrap().len(), 7);
    }
    #[test]
    fn rook_stops_on_opposing_pieces() {
        let board = board(
            [
                "........", "...p....", "........", "........", "...R....", "........",
                "........", "........",
            ],
            Color::White,
        );
        let moves = generate(&board, square!("d4")).unwrap();
        assert_eq!(moves.len(), 13);
        assert!(moves.contains(&Move::new(square!("d4"), square!("d7"), MoveKind::Take)));
        assert!(
            !moves
                .iter()
                .any(|movement| movement.to == square!("d8"))
        );
    }
    #[test]
    fn knights_jump_and_kings_step() {
        let board = Board::new_game();
        assert_eq!(
            destinations(&generate(&board, square!("g1")).unwrap()),
            FxHashSet::from_iter([square!("f3"), square!("h3")])
        );
        assert_eq!(generate(&board, square!("e1")), Ok(Vec::new()));
    }
    #[test]
    fn queen_and_bishop_slide_diagonally() {
        let board = board(
            [
                "........", "........", "........", "........", "...Q....", "........",
                "........", "b.......",
            ],
            Color::White,
        );
        assert_eq!(generate(&board, square!("d4")).unwrap().len(), 27);
        assert_eq!(generate(&board, square!("a1")).unwrap().len(), 3);
    }
    #[test]
    fn vacant_square_has_no_generator() {
        let board = Board::new_game();
        assert_eq!(
            generate(&board, square!("e4")),
            Err(MoveError::UnsupportedPiece(square!("e4")))
        );
        assert!(attacks(&board, square!("e4")).is_empty());
    }
    #[test]
    fn attacks_include_defended_pieces() {
        let board = Board::new_game();
        let reach = destinations(&attacks(&board, square!("c1")));
        assert_eq!(reach, FxHashSet::from_iter([square!("b2"), square!("d2")]));
        let reach = destinations(&attacks(&board, square!("e2")));
        assert_eq!(reach, FxHashSet::from_iter([square!("d3"), square!("f3")]));
    }
}
