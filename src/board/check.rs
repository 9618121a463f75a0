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

//! Check and checkmate scanning over a board this module does not own.
//!
//! Both scans are exhaustive rather than clever: a full-board king
//! lookup, an attack sweep over every enemy piece, and for checkmate a
//! simulate-and-revert pass over every candidate move of every
//! friendly piece. Cost is bounded by the 8x8 board, never by input
//! size. Neither function errors: an absent king or an otherwise
//! degenerate board degrades to `false`.

use super::material::{Color, PieceKind};
use super::position::Position;
use super::Board;

/// Is `color`'s king attacked by any enemy piece?
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_square) = find_king(board, color) else {
        return false;
    };
    Position::all().any(|square| match board.piece_at(square) {
        Some(piece) => piece.color() != color && piece.attacks(square, king_square, board),
        None => false,
    })
}

fn find_king(board: &Board, color: Color) -> Option<Position> {
    Position::all().find(|&square| match board.piece_at(square) {
        Some(piece) => piece.kind() == PieceKind::King && piece.color() == color,
        None => false,
    })
}

/// Is `color` checkmated? False unless the king is already in check;
/// otherwise every pseudo-legal `(from, to)` candidate of every
/// friendly piece is simulated, the check scan re-run, and the board
/// restored before the next candidate, whatever the outcome. One
/// escaping move anywhere on the board is enough to answer `false`.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    if !is_king_in_check(board, color) {
        return false;
    }
    for from in Position::all() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.color() != color {
            continue;
        }
        for to in Position::all() {
            if !piece.is_pseudo_legal_move(from, to, board) {
                continue;
            }
            let escapes = board.with_simulation(&[(to, Some(piece)), (from, None)], |b| {
                !is_king_in_check(b, color)
            });
            if escapes {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use Color::*;
    use PieceKind::*;

    fn at(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    fn place(board: &mut Board, name: &str, color: Color, kind: PieceKind) {
        board.place_piece_at(Some(Piece::new(color, kind)), at(name));
    }

    #[test]
    fn test_starting_position_no_check() {
        let board = Board::new();
        assert!(!is_king_in_check(&board, White));
        assert!(!is_king_in_check(&board, Black));
    }

    #[test]
    fn test_rook_delivers_check_along_open_file() {
        let mut board = Board::empty();
        place(&mut board, "e1", White, King);
        place(&mut board, "e8", Black, Rook);
        assert!(is_king_in_check(&board, White));
        // a blocker on the file lifts the check
        place(&mut board, "e4", White, Pawn);
        assert!(!is_king_in_check(&board, White));
    }

    #[test]
    fn test_pawn_checks_diagonally_not_forward() {
        let mut board = Board::empty();
        place(&mut board, "e4", White, King);
        place(&mut board, "d5", Black, Pawn);
        assert!(is_king_in_check(&board, White));

        let mut board = Board::empty();
        place(&mut board, "e4", White, King);
        place(&mut board, "e5", Black, Pawn);
        assert!(!is_king_in_check(&board, White));
    }

    #[test]
    fn test_knight_check_ignores_blockers() {
        let mut board = Board::empty();
        place(&mut board, "e1", White, King);
        place(&mut board, "d3", Black, Knight);
        place(&mut board, "d2", White, Pawn);
        place(&mut board, "e2", White, Pawn);
        assert!(is_king_in_check(&board, White));
    }

    #[test]
    fn test_absent_king_is_not_in_check() {
        let board = Board::empty();
        assert!(!is_king_in_check(&board, White));
        let mut board = Board::empty();
        place(&mut board, "a1", Black, Queen);
        assert!(!is_king_in_check(&board, White));
    }

    #[test]
    fn test_checkmate_in_the_corner() {
        // king boxed in on a8: queen on b7 guarded by the white king
        let mut board = Board::empty();
        place(&mut board, "a8", Black, King);
        place(&mut board, "b7", White, Queen);
        place(&mut board, "c6", White, King);
        assert!(is_king_in_check(&board, Black));
        assert!(is_checkmate(&mut board, Black));
    }

    #[test]
    fn test_one_defender_undoes_checkmate() {
        // same position, but a rook on h7 can capture the queen
        let mut board = Board::empty();
        place(&mut board, "a8", Black, King);
        place(&mut board, "b7", White, Queen);
        place(&mut board, "c6", White, King);
        place(&mut board, "h7", Black, Rook);
        assert!(is_king_in_check(&board, Black));
        assert!(!is_checkmate(&mut board, Black));
    }

    #[test]
    fn test_check_with_escape_square_is_not_mate() {
        let mut board = Board::empty();
        place(&mut board, "e1", White, King);
        place(&mut board, "e8", Black, Rook);
        place(&mut board, "a2", Black, King);
        assert!(is_king_in_check(&board, White));
        // d1, d2, f1, f2 are all free
        assert!(!is_checkmate(&mut board, White));
    }

    #[test]
    fn test_blocking_piece_undoes_checkmate() {
        // back-rank mate pattern, then give White a blocking rook
        let mut board = Board::empty();
        place(&mut board, "g1", White, King);
        place(&mut board, "f2", White, Pawn);
        place(&mut board, "g2", White, Pawn);
        place(&mut board, "h2", White, Pawn);
        place(&mut board, "e1", Black, Rook);
        place(&mut board, "e8", Black, King);
        assert!(is_checkmate(&mut board, White));

        place(&mut board, "g3", White, Knight);
        // Ng3-f1 interposes
        assert!(!is_checkmate(&mut board, White));
    }

    #[test]
    fn test_not_in_check_is_never_checkmate() {
        let mut board = Board::new();
        assert!(!is_checkmate(&mut board, White));
        assert!(!is_checkmate(&mut board, Black));
    }

    #[test]
    fn test_checkmate_scan_leaves_board_unchanged() {
        let mut board = Board::empty();
        place(&mut board, "g1", White, King);
        place(&mut board, "f2", White, Pawn);
        place(&mut board, "g2", White, Pawn);
        place(&mut board, "h2", White, Pawn);
        place(&mut board, "e1", Black, Rook);
        place(&mut board, "e8", Black, King);
        place(&mut board, "g3", White, Knight);
        let before = board.clone();
        let _ = is_checkmate(&mut board, White);
        assert_eq!(board, before);
    }
}
