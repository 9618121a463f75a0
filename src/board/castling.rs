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

use super::check;
use super::material::{Piece, PieceKind};
use super::position::Position;
use super::Board;

/// Column the castling rook starts on: h-file kingside, a-file
/// queenside.
pub(crate) const fn rook_home_column(kingside: bool) -> u8 {
    if kingside {
        8
    } else {
        1
    }
}

/// Column the rook lands on, immediately beside the king's
/// destination.
pub(crate) const fn rook_landing_column(king_to_column: u8, kingside: bool) -> u8 {
    if kingside {
        king_to_column - 1
    } else {
        king_to_column + 1
    }
}

/// Eligibility for an unmoved king moving exactly two columns: the
/// matching rook must exist, share the king's color and be unmoved;
/// every square strictly between them must be empty; and the king may
/// not start in, pass through, or land on check. Each square of the
/// king's path is tested by temporarily placing the king there; the
/// board is restored before every return.
pub(crate) fn is_castling_move(
    king: &Piece,
    from: Position,
    to: Position,
    board: &mut Board,
) -> bool {
    let kingside = to.column() > from.column();
    let rook_column = rook_home_column(kingside);
    let step: i8 = if kingside { 1 } else { -1 };

    let Ok(rook_square) = Position::new(from.row(), rook_column) else {
        return false;
    };
    match board.piece_at(rook_square) {
        Some(rook)
            if rook.kind() == PieceKind::Rook
                && rook.color() == king.color()
                && !rook.has_moved() => {}
        _ => return false,
    }

    // lane between king and rook must be empty
    let mut column = from.column() as i8 + step;
    while column != rook_column as i8 {
        if board.piece_at_coords(from.row() as i8, column).is_some() {
            return false;
        }
        column += step;
    }

    if check::is_king_in_check(board, king.color()) {
        return false;
    }

    // the in-check guard above covered the king's own square; test the
    // squares it passes through and lands on
    let mut column = (from.column() as i8 + step) as u8;
    loop {
        let Ok(square) = Position::new(from.row(), column) else {
            return false;
        };
        let attacked = board.with_simulation(&[(square, Some(*king)), (from, None)], |b| {
            check::is_king_in_check(b, king.color())
        });
        if attacked {
            return false;
        }
        if column == to.column() {
            break;
        }
        column = (column as i8 + step) as u8;
    }
    true
}
