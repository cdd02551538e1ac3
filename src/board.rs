use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
};

use tracing::debug;

use crate::{
    color::Color,
    error::MoveError,
    layout::{Layout, ParseLayoutError},
    movegen,
    movement::{Lan, Move, MoveKind},
    piece::Piece,
    square::Square,
};

/// A square's occupant. Its history travels with it when it moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardPiece {
    square: Square,
    piece: Piece,
    history: Vec<Move>,
}
impl BoardPiece {
    fn new(square: Square, piece: Piece) -> Self {
        BoardPiece {
            square,
            piece,
            history: Vec::new(),
        }
    }
    fn blank(square: Square) -> Self {
        BoardPiece::new(square, Piece::Blank)
    }
    pub fn square(&self) -> Square {
        self.square
    }
    pub fn piece(&self) -> Piece {
        self.piece
    }
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    pub fn has_moved(&self) -> bool {
        !self.history.is_empty()
    }
}
impl Display for BoardPiece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.piece, self.square)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // rank-major, see `Square::index`
    squares: [BoardPiece; 64],
    to_play: Color,
    history: Vec<Move>,
}
impl Board {
    pub fn new_game() -> Self {
        Board::with_layout(&Layout::standard(), Color::White)
    }
    pub fn custom(layout: &str, to_play: Color) -> Result<Self, ParseLayoutError> {
        Ok(Board::with_layout(&layout.parse::<Layout>()?, to_play))
    }
    #[allow(clippy::cast_possible_truncation, reason = "index is below 64")]
    pub fn with_layout(layout: &Layout, to_play: Color) -> Self {
        let board = Board {
            squares: std::array::from_fn(|index| {
                let square = Square::new((index % 8) as u8, (index / 8) as u8);
                BoardPiece::new(square, layout.get(square))
            }),
            to_play,
            history: Vec::new(),
        };
        debug!(%to_play, pieces = board.pieces().count(), "board created");
        board
    }
    pub fn to_play(&self) -> Color {
        self.to_play
    }
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }
    pub fn piece_at(&self, square: Square) -> Piece {
        self[square].piece
    }
    pub fn is_empty_at(&self, square: Square) -> bool {
        self[square].piece.is_blank()
    }
    pub fn is_occupied_at(&self, square: Square) -> bool {
        !self.is_empty_at(square)
    }
    pub fn squares(&self) -> impl Iterator<Item = &BoardPiece> {
        self.squares.iter()
    }
    pub fn pieces(&self) -> impl Iterator<Item = &BoardPiece> {
        self.squares.iter().filter(|piece| !piece.piece.is_blank())
    }
    /// The a-file to h-file squares of `rank`, counted from 0. `None` when
    /// `rank` is off the board.
    pub fn rank(&self, rank: u8) -> Option<&[BoardPiece]> {
        (rank < 8).then(|| {
            let start = rank as usize * 8;
            &self.squares[start..start + 8]
        })
    }
    pub fn ranks(&self) -> impl Iterator<Item = &[BoardPiece]> {
        self.squares.chunks(8)
    }
    pub fn file(&self, file: u8) -> Option<impl Iterator<Item = &BoardPiece>> {
        (file < 8).then(|| self.squares.iter().skip(file as usize).step_by(8))
    }
    pub fn files(&self) -> impl Iterator<Item = impl Iterator<Item = &BoardPiece>> {
        (0..8).filter_map(move |file| self.file(file))
    }
    pub fn layout(&self) -> Layout {
        let mut layout = Layout::empty();
        for piece in self.pieces() {
            layout.set(piece.square, piece.piece);
        }
        layout
    }
    pub fn legal_moves_from(&self, square: Square) -> Result<Vec<Move>, MoveError> {
        movegen::generate(self, square)
    }
    pub fn candidate_moves(&self) -> Vec<Move> {
        self.pieces()
            .filter(|piece| piece.piece.color() == Some(self.to_play))
            .flat_map(|piece| movegen::generate(self, piece.square).unwrap_or_default())
            .collect()
    }
    /// Finds the candidate `lan` names. The promotion choice is carried over
    /// but not checked here.
    pub fn resolve(&self, lan: Lan) -> Result<Move, MoveError> {
        self.check_player(lan.from)?;
        let candidate = movegen::generate(self, lan.from)?
            .into_iter()
            .find(|candidate| candidate.to == lan.to)
            .ok_or(MoveError::IllegalMove(lan))?;
        Ok(Move {
            promotion: lan.promotion,
            ..candidate
        })
    }
    pub fn move_notation(&mut self, notation: &str) -> Result<Move, MoveError> {
        let lan = notation
            .trim()
            .parse::<Lan>()
            .inspect_err(|err| debug!(%err, notation, "move rejected"))?;
        self.make_move_lan(lan)
    }
    pub fn make_move_lan(&mut self, lan: Lan) -> Result<Move, MoveError> {
        let movement = self
            .resolve(lan)
            .inspect_err(|err| debug!(%err, "move rejected"))?;
        self.make_move(movement)
    }
    /// Plays `movement` if it is one of the candidates of the piece it moves.
    /// The board is untouched on error.
    pub fn make_move(&mut self, movement: Move) -> Result<Move, MoveError> {
        let movement = self
            .check(movement)
            .inspect_err(|err| debug!(%err, "move rejected"))?;
        self.apply(movement);
        debug!(%movement, kind = %movement.kind, to_play = %self.to_play, "move applied");
        Ok(movement)
    }
    fn check_player(&self, square: Square) -> Result<(), MoveError> {
        if self[square].piece.color() == Some(self.to_play) {
            Ok(())
        } else {
            Err(MoveError::IncorrectPlayer {
                square,
                to_play: self.to_play,
            })
        }
    }
    fn check(&self, movement: Move) -> Result<Move, MoveError> {
        self.check_player(movement.from)?;
        let lan = movement.as_lan();
        let candidate = movegen::generate(self, movement.from)?
            .into_iter()
            .find(|candidate| *candidate == movement)
            .ok_or(MoveError::IllegalMove(lan))?;
        match (candidate.kind, movement.promotion) {
            (MoveKind::Promotion, None) => Err(MoveError::MissingPromotion(lan)),
            (MoveKind::Promotion, Some(piece)) if !piece.is_promotion_choice() => {
                Err(MoveError::InvalidPromotion(lan))
            }
            (MoveKind::Promotion, Some(_)) => Ok(movement),
            (_, Some(_)) => Err(MoveError::IllegalMove(lan)),
            (_, None) => Ok(candidate),
        }
    }
    fn apply(&mut self, movement: Move) {
        let Move { from, to, .. } = movement;
        let mut mover = std::mem::replace(&mut self.squares[from.index()], BoardPiece::blank(from));
        if movement.kind == MoveKind::TakeEnPassant {
            let passed = Square::new(to.file(), from.rank());
            self.squares[passed.index()] = BoardPiece::blank(passed);
        }
        if let (Some(kind), Some(color)) = (movement.promotion, mover.piece.color()) {
            mover.piece = Piece::new(color, kind);
        }
        mover.square = to;
        mover.history.push(movement);
        self.squares[to.index()] = mover;
        self.history.push(movement);
        self.to_play = !self.to_play;
    }
}
impl Default for Board {
    fn default() -> Self {
        Board::new_game()
    }
}
impl Index<Square> for Board {
    type Output = BoardPiece;

    fn index(&self, index: Square) -> &Self::Output {
        &self.squares[index.index()]
    }
}
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in self.layout().ranks() {
            writeln!(f, "{rank}")?;
        }
        Ok(())
    }
}

/// Outcome of a move attempt in the shape a user interface reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveResult(Result<Move, MoveError>);

impl MoveResult {
    pub fn succeeded(&self) -> bool {
        self.0.is_ok()
    }
    pub fn kind(&self) -> Option<MoveKind> {
        self.movement().map(|movement| movement.kind)
    }
    pub fn movement(&self) -> Option<Move> {
        self.0.ok()
    }
    pub fn error(&self) -> Option<MoveError> {
        self.0.err()
    }
    pub fn message(&self) -> Option<String> {
        self.0.as_ref().err().map(ToString::to_string)
    }
}
impl From<Result<Move, MoveError>> for MoveResult {
    fn from(value: Result<Move, MoveError>) -> Self {
        MoveResult(value)
    }
}
impl Display for MoveResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(movement) => write!(f, "{movement} ({})", movement.kind)?,
            Err(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
