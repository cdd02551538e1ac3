#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    reason = "mostly plain queries"
)]

pub mod board;
pub mod color;
pub mod error;
#[cfg(test)]
mod fuzz;
pub mod layout;
pub mod movegen;
pub mod movement;
pub mod piece;
pub mod square;
pub mod threat;
pub mod validator;

pub use board::{Board, BoardPiece, MoveResult};
pub use color::Color;
pub use error::MoveError;
pub use layout::Layout;
pub use movement::{Lan, Move, MoveKind};
pub use piece::{Piece, PieceKind};
pub use square::Square;
pub use threat::{ThreatAnalyser, Threats};
