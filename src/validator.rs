//! Single-rule checks over a candidate move and the board it would be played
//! on. Rules hold no state; a move passes a rule set when every rule agrees.

use crate::{
    board::Board,
    color::Color,
    movement::Move,
    piece::PieceKind,
    square::{Square, Vector, pawn_promotion_rank},
};

pub type Validator = fn(Move, &Board) -> bool;

pub const ADVANCE: &[Validator] = &[destination_is_empty];
pub const CAPTURE: &[Validator] = &[destination_holds_opponent];
pub const EN_PASSANT: &[Validator] = &[destination_is_empty, passed_pawn_just_double_moved];
pub const PROMOTION_ADVANCE: &[Validator] = &[promotion_destination];
pub const PROMOTION_CAPTURE: &[Validator] = &[destination_holds_opponent, destination_is_far_rank];

pub fn validate(validators: &[Validator], movement: Move, board: &Board) -> bool {
    validators
        .iter()
        .all(|validator| validator(movement, board))
}
fn mover(movement: Move, board: &Board) -> Option<Color> {
    board[movement.from].piece().color()
}
pub fn destination_is_empty(movement: Move, board: &Board) -> bool {
    board.is_empty_at(movement.to)
}
pub fn destination_holds_opponent(movement: Move, board: &Board) -> bool {
    mover(movement, board).is_some_and(|color| board[movement.to].piece().is_opponent_of(color))
}
pub fn destination_is_far_rank(movement: Move, board: &Board) -> bool {
    mover(movement, board).is_some_and(|color| movement.to.rank() == pawn_promotion_rank(color))
}
pub fn promotion_destination(movement: Move, board: &Board) -> bool {
    destination_is_far_rank(movement, board) && destination_is_empty(movement, board)
}
/// The pawn beside the origin, on the destination's file, arrived there by a
/// double advance on the ply just played.
pub fn passed_pawn_just_double_moved(movement: Move, board: &Board) -> bool {
    let Some(color) = mover(movement, board) else {
        return false;
    };
    let passed = Square::new(movement.to.file(), movement.from.rank());
    board[passed].piece().is(!color, PieceKind::Pawn)
        && board.last_move().is_some_and(|last| {
            last.to == passed && last.to - last.from == Vector::pawn_double_move(!color)
        })
}
