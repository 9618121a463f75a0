// Copyright 2025 The chess-rules Authors
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::castling;
use super::material::{Piece, PieceKind};
use super::position::{Position, PositionError};
use super::Board;

use PieceKind::*;

/// Why a move request was turned down. Every rejection is a value a
/// caller can show and retry from; none of them is a panic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game has ended")]
    GameOver,
    #[error("position is off the board")]
    OutOfBounds,
    #[error("no piece on the source square")]
    EmptySource,
    #[error("that piece does not belong to the player to move")]
    WrongColor,
    #[error("not a legal move for this piece")]
    IllegalForPiece,
    #[error("cannot capture your own piece")]
    OwnCapture,
    #[error("pawn promotion requires a piece choice")]
    PromotionRequired,
    #[error("invalid promotion piece")]
    InvalidPromotion,
    #[error("this move would leave your king in check")]
    SelfCheck,
}

pub type MoveResult = Result<Move, MoveError>;

/// Callers building squares from raw coordinates can `?` straight into
/// a [`MoveResult`].
impl From<PositionError> for MoveError {
    fn from(_: PositionError) -> Self {
        Self::OutOfBounds
    }
}

impl Piece {
    /// Movement geometry and capture rules for this piece, ignoring
    /// whether the mover's own king ends up in check. King safety is a
    /// cross-cutting concern the game evaluates once per move.
    ///
    /// Takes the board mutably because the king's castling branch
    /// simulates the king on each square of its path; the board is
    /// restored before this returns.
    pub fn is_pseudo_legal_move(&self, from: Position, to: Position, board: &mut Board) -> bool {
        let row_diff = (to.row() as i8 - from.row() as i8).abs();
        let col_diff = (to.column() as i8 - from.column() as i8).abs();
        if self.kind() == King && row_diff == 0 && col_diff == 2 && !self.has_moved() {
            return castling::is_castling_move(self, from, to, board);
        }
        self.attacks(from, to, board)
    }

    /// The same movement rules minus the king's castling branch; a pure
    /// read. This is the predicate the check scanner sweeps with: a
    /// castle can never deliver a capture, so leaving it out changes
    /// nothing the scanner can observe, and it keeps two facing kings
    /// from recursing through each other's castling tests.
    pub fn attacks(&self, from: Position, to: Position, board: &Board) -> bool {
        if from == to {
            return false;
        }
        let row_diff = (to.row() as i8 - from.row() as i8).abs();
        let col_diff = (to.column() as i8 - from.column() as i8).abs();
        match self.kind() {
            Pawn => self.pawn_attacks(from, to, board),
            Rook => {
                is_straight_line(from, to)
                    && path_is_clear(from, to, board)
                    && self.destination_ok(to, board)
            }
            Bishop => {
                is_diagonal_line(from, to)
                    && path_is_clear(from, to, board)
                    && self.destination_ok(to, board)
            }
            Queen => {
                (is_straight_line(from, to) || is_diagonal_line(from, to))
                    && path_is_clear(from, to, board)
                    && self.destination_ok(to, board)
            }
            Knight => {
                let jumps = (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2);
                jumps && self.destination_ok(to, board)
            }
            King => row_diff <= 1 && col_diff <= 1 && self.destination_ok(to, board),
        }
    }

    fn pawn_attacks(&self, from: Position, to: Position, board: &Board) -> bool {
        let direction = self.color().forward();
        // single step forward onto an empty square
        if to.column() == from.column() && to.row() as i8 == from.row() as i8 + direction {
            return board.piece_at(to).is_none();
        }
        // double step from the starting rank, both squares empty
        if !self.has_moved()
            && from.row() == self.color().pawn_start_rank()
            && to.column() == from.column()
            && to.row() as i8 == from.row() as i8 + 2 * direction
        {
            let intermediate = from.offset(direction, 0);
            return intermediate.map_or(false, |p| board.piece_at(p).is_none())
                && board.piece_at(to).is_none();
        }
        // diagonal capture onto an occupied enemy square
        if (to.column() as i8 - from.column() as i8).abs() == 1
            && to.row() as i8 == from.row() as i8 + direction
        {
            return board
                .piece_at(to)
                .map_or(false, |target| target.color() != self.color());
        }
        false
    }

    /// En passant: a diagonal pawn move onto an *empty* square, with
    /// the capturer on its fifth rank (fourth for Black) and the enemy
    /// pawn beside it on the square recorded as the last double step.
    pub fn is_en_passant_capture(
        &self,
        from: Position,
        to: Position,
        board: &Board,
        last_double_move: Option<Position>,
    ) -> bool {
        if self.kind() != Pawn {
            return false;
        }
        let Some(marker) = last_double_move else {
            return false;
        };
        let direction = self.color().forward();
        if from.row() != self.color().en_passant_rank() {
            return false;
        }
        if (to.column() as i8 - from.column() as i8).abs() != 1
            || to.row() as i8 != from.row() as i8 + direction
        {
            return false;
        }
        if board.piece_at(to).is_some() {
            return false;
        }
        // the passed pawn sits beside the capturer, on the destination file
        let Ok(enemy_square) = Position::new(from.row(), to.column()) else {
            return false;
        };
        match board.piece_at(enemy_square) {
            Some(enemy) if enemy.kind() == Pawn && enemy.color() != self.color() => {
                enemy_square == marker
            }
            _ => false,
        }
    }

    /// Does this pawn reach its farthest rank at `to`?
    pub fn is_promotion_move(&self, to: Position) -> bool {
        self.kind() == Pawn && to.row() == self.color().promotion_rank()
    }

    /// Is this a pawn's initial two-square advance?
    pub fn is_double_move(&self, from: Position, to: Position) -> bool {
        self.kind() == Pawn
            && !self.has_moved()
            && from.row() == self.color().pawn_start_rank()
            && to.column() == from.column()
            && to.row() as i8 == from.row() as i8 + 2 * self.color().forward()
    }

    /// Destination must be empty or hold an enemy piece.
    fn destination_ok(&self, to: Position, board: &Board) -> bool {
        board
            .piece_at(to)
            .map_or(true, |target| target.color() != self.color())
    }
}

fn is_straight_line(from: Position, to: Position) -> bool {
    from.row() == to.row() || from.column() == to.column()
}

fn is_diagonal_line(from: Position, to: Position) -> bool {
    (to.row() as i8 - from.row() as i8).abs() == (to.column() as i8 - from.column() as i8).abs()
}

/// Every square strictly between the endpoints must be empty. Shared
/// by rook, bishop and queen; callers have already established the
/// endpoints lie on a common line.
fn path_is_clear(from: Position, to: Position, board: &Board) -> bool {
    let row_step = (to.row() as i8 - from.row() as i8).signum();
    let col_step = (to.column() as i8 - from.column() as i8).signum();

    let mut row = from.row() as i8 + row_step;
    let mut column = from.column() as i8 + col_step;
    while (row, column) != (to.row() as i8, to.column() as i8) {
        if !Board::in_bounds(row, column) {
            return false;
        }
        if board.piece_at_coords(row, column).is_some() {
            return false;
        }
        row += row_step;
        column += col_step;
    }
    true
}

/// The immutable record of one executed ply: built from the pre-move
/// board state, then finished by the game with the flags its notation
/// derives from. A `Move` holds piece snapshots, never board
/// ownership, and it never mutates anything.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub(crate) from: Position,
    pub(crate) to: Position,
    pub(crate) piece: Piece,
    pub(crate) captured: Option<Piece>,
    pub(crate) is_castling: bool,
    pub(crate) is_promotion: bool,
    pub(crate) promoted_to: Option<PieceKind>,
    pub(crate) is_en_passant: bool,
    pub(crate) is_check: bool,
    pub(crate) is_checkmate: bool,
}

impl Move {
    pub(crate) fn new(from: Position, to: Position, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            is_castling: false,
            is_promotion: false,
            promoted_to: None,
            is_en_passant: false,
            is_check: false,
            is_checkmate: false,
        }
    }

    #[inline]
    pub fn from(&self) -> Position {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Position {
        self.to
    }

    /// Snapshot of the moving piece as it stood before the move.
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.is_castling
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    #[inline]
    pub fn promoted_to(&self) -> Option<PieceKind> {
        self.promoted_to
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }
}
