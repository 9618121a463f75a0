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

//! Chess board state and the rules that read it.
//!
//! A _board_ is an 8-by-8 grid in which every cell holds at most one
//! piece. It is deliberately dumb: the only mutation primitive is
//! [`Board::place_piece_at`], which unconditionally overwrites a cell.
//! Every higher-level effect (a capture, the rook's leg of a castle,
//! the removal of an en-passant victim) is a sequence of placements
//! issued by the game orchestrator in [`crate::game`].
//!
//! Some of the key abstractions include:
//!
//! * A [`Position`] is a coordinate with two representations: numeric
//!   row/column in 1..=8, and the algebraic two-character form
//!   (`a1` .. `h8`). Both are validated on construction, so a
//!   `Position` held by a caller is always on the board.
//!
//! * A [`Piece`] pairs a [`Color`] with a [`PieceKind`] and a
//!   has-moved flag. Movement is a closed dispatch over the six kinds:
//!   [`Piece::is_pseudo_legal_move`] answers geometric and capture
//!   validity while ignoring king safety, which is evaluated once,
//!   centrally, by the check scanner in [`check`] rather than being
//!   duplicated in every piece's rules.
//!
//! * [`Board::with_simulation`] applies a short list of placements,
//!   runs a closure against the resulting board, and restores the
//!   displaced occupants before returning. The self-check guard, the
//!   castling through-check test and the checkmate search all ride on
//!   it; none of them can leave the board mutated, early return or
//!   not.
//!
//! * A [`Move`] is the immutable record of one executed ply: squares,
//!   piece snapshots, and the flags (capture, castling, promotion,
//!   en passant, check, checkmate) its algebraic notation derives
//!   from. Rejections are [`MoveError`] values, never panics.

use once_cell::sync::Lazy;

mod castling;
mod check;
mod material;
mod moves;
mod notation;
mod position;

pub use check::*;
pub use material::*;
pub use moves::*;
pub use notation::*;
pub use position::*;

pub(crate) use castling::{rook_home_column, rook_landing_column};

/// Standard 32-piece starting layout, built once.
static STARTING_SQUARES: Lazy<[Option<Piece>; 64]> = Lazy::new(|| {
    use PieceKind::*;

    const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

    let mut squares = [None; 64];
    for (i, kind) in BACK_RANK.into_iter().enumerate() {
        let column = i as u8 + 1;
        squares[cell_index(1, column)] = Some(Piece::new(Color::White, kind));
        squares[cell_index(8, column)] = Some(Piece::new(Color::Black, kind));
    }
    for column in 1..=8 {
        squares[cell_index(2, column)] = Some(Piece::new(Color::White, Pawn));
        squares[cell_index(7, column)] = Some(Piece::new(Color::Black, Pawn));
    }
    squares
});

#[inline]
const fn cell_index(row: u8, column: u8) -> usize {
    ((row - 1) * 8 + (column - 1)) as usize
}

/// An 8x8 grid of optional pieces. Owns every piece in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board holding the standard starting position.
    pub fn new() -> Self {
        Self {
            squares: *STARTING_SQUARES,
        }
    }

    /// A board with no pieces at all. Degenerate by the one-king-per-
    /// color invariant; the check scanner treats a missing king as not
    /// in check.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[cell_index(position.row(), position.column())]
    }

    /// Defensive read over raw coordinates: off-board reads yield
    /// `None` rather than failing. Path scanners step through raw
    /// coordinates before committing to a `Position`.
    #[inline]
    pub fn piece_at_coords(&self, row: i8, column: i8) -> Option<Piece> {
        if !Self::in_bounds(row, column) {
            return None;
        }
        self.squares[cell_index(row as u8, column as u8)]
    }

    /// Unconditionally overwrite a cell. The sole mutation primitive.
    #[inline]
    pub fn place_piece_at(&mut self, piece: Option<Piece>, position: Position) {
        self.squares[cell_index(position.row(), position.column())] = piece;
    }

    #[inline]
    pub const fn in_bounds(row: i8, column: i8) -> bool {
        1 <= row && row <= 8 && 1 <= column && column <= 8
    }

    /// Apply `effects` in order, run `f` against the resulting board,
    /// then restore the displaced occupants in reverse order. The
    /// restore is structural: it happens on every path out of this
    /// function, so a simulation can never leak into real state.
    pub(crate) fn with_simulation<R>(
        &mut self,
        effects: &[(Position, Option<Piece>)],
        f: impl FnOnce(&Self) -> R,
    ) -> R {
        let saved: Vec<(Position, Option<Piece>)> = effects
            .iter()
            .map(|&(position, _)| (position, self.piece_at(position)))
            .collect();
        for &(position, occupant) in effects {
            self.place_piece_at(occupant, position);
        }
        let result = f(self);
        for &(position, occupant) in saved.iter().rev() {
            self.place_piece_at(occupant, position);
        }
        result
    }
}
