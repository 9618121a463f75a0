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

//! Full-game orchestration: whose turn it is, whether a requested move
//! is legal, what it did to the board, and where the game stands.
//!
//! [`ChessGame::attempt_move`] is the single entry point for play. It
//! either executes the move and returns the finished [`Move`] record,
//! or rejects it with a [`MoveError`] and leaves every piece exactly
//! where it was.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::board::{
    is_checkmate, is_king_in_check, rook_home_column, rook_landing_column, Board, Color, Move,
    MoveError, MoveResult, Piece, PieceKind, Position,
};

use Color::*;

/// Where a game stands after the latest move. The check and mate
/// variants name the color whose king is under attack, not the side
/// that delivered it.
#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    WhiteCheck,
    BlackCheck,
    WhiteCheckMate,
    BlackCheckMate,
    Stalemate,
    Draw,
}

impl GameStatus {
    /// Check is a warning, not an ending; play continues through it.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::InProgress | Self::WhiteCheck | Self::BlackCheck
        )
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        matches!(self, Self::WhiteCheckMate | Self::BlackCheckMate)
    }
}

/// One game of chess from the starting position. White moves first.
#[derive(Debug, Clone)]
pub struct ChessGame {
    board: Board,
    current_player: Color,
    status: GameStatus,
    move_history: Vec<Move>,
    last_pawn_double_move: Option<Position>,
    white_player: String,
    black_player: String,
    start_time: SystemTime,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::with_players("White", "Black")
    }

    pub fn with_players(white_player: impl Into<String>, black_player: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            current_player: White,
            status: GameStatus::InProgress,
            move_history: Vec::new(),
            last_pawn_double_move: None,
            white_player: white_player.into(),
            black_player: black_player.into(),
            start_time: SystemTime::now(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    #[inline]
    pub fn white_player(&self) -> &str {
        &self.white_player
    }

    #[inline]
    pub fn black_player(&self) -> &str {
        &self.black_player
    }

    #[inline]
    pub fn start_time(&self) -> SystemTime {
        self.start_time
    }

    /// The kinds a pawn reaching its last rank may become.
    #[inline]
    pub fn promotion_options(&self) -> &'static [PieceKind] {
        &PieceKind::PROMOTION_CHOICES
    }

    /// The destination square of the most recent pawn double step, if
    /// it is still capturable en passant.
    #[inline]
    pub fn last_pawn_double_move(&self) -> Option<Position> {
        self.last_pawn_double_move
    }

    /// Override the en passant marker. Intended for restoring a game
    /// from an external record; normal play maintains the marker
    /// itself.
    pub fn set_last_pawn_double_move(&mut self, marker: Option<Position>) {
        self.last_pawn_double_move = marker;
    }

    /// Validate and, if legal, execute one move for the player to move.
    ///
    /// Validation runs in order: the game must still be active, the
    /// source square must hold a piece of the mover's color, the
    /// destination must not hold a friend, the piece's movement rules
    /// must allow the step, a promotion choice must be present and
    /// valid when a pawn reaches its last rank, and the mover's own
    /// king must be safe afterwards. The king-safety test plays the
    /// move out on the real board and reverts it, so a rejected move
    /// leaves no trace.
    pub fn attempt_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> MoveResult {
        if !self.status.is_active() {
            return Err(MoveError::GameOver);
        }
        let Some(piece) = self.board.piece_at(from) else {
            return Err(MoveError::EmptySource);
        };
        if piece.color() != self.current_player {
            return Err(MoveError::WrongColor);
        }

        // En passant is the one capture whose victim is not on the
        // destination square, so it bypasses the geometric checks.
        let en_passant_victim = if piece.is_en_passant_capture(
            from,
            to,
            &self.board,
            self.last_pawn_double_move,
        ) {
            Position::new(from.row(), to.column()).ok()
        } else {
            None
        };
        if en_passant_victim.is_none() {
            if !piece.is_pseudo_legal_move(from, to, &mut self.board) {
                return Err(MoveError::IllegalForPiece);
            }
            // second guard on ownership; movement rules already refuse
            // landing on a friend
            if let Some(target) = self.board.piece_at(to) {
                if target.color() == piece.color() {
                    return Err(MoveError::OwnCapture);
                }
            }
        }

        if let Some(choice) = promotion {
            if !choice.is_promotion_choice() {
                return Err(MoveError::InvalidPromotion);
            }
        }
        let promoting = piece.is_promotion_move(to);
        if promoting && promotion.is_none() {
            return Err(MoveError::PromotionRequired);
        }

        let placed = match promotion {
            Some(choice) if promoting => Piece::new(piece.color(), choice),
            _ => piece,
        };
        let mut effects = vec![(to, Some(placed)), (from, None)];
        if let Some(victim) = en_passant_victim {
            effects.push((victim, None));
        }
        let mover = self.current_player;
        let safe = self
            .board
            .with_simulation(&effects, |board| !is_king_in_check(board, mover));
        if !safe {
            return Err(MoveError::SelfCheck);
        }

        Ok(self.execute_move(from, to, piece, promotion.filter(|_| promoting), en_passant_victim))
    }

    /// Apply a fully validated move to the board and finish its record.
    fn execute_move(
        &mut self,
        from: Position,
        to: Position,
        piece: Piece,
        promotion: Option<PieceKind>,
        en_passant_victim: Option<Position>,
    ) -> Move {
        let is_castling = piece.kind().is_king()
            && (to.column() as i8 - from.column() as i8).abs() == 2;
        let captured = match en_passant_victim {
            Some(victim) => self.board.piece_at(victim),
            None => self.board.piece_at(to),
        };
        let mut record = Move::new(from, to, piece, captured);
        record.is_castling = is_castling;
        record.is_en_passant = en_passant_victim.is_some();

        if let Some(victim) = en_passant_victim {
            self.board.place_piece_at(None, victim);
        }
        // Reads the pre-move double-step flags, so it runs before the
        // piece is marked as moved.
        self.update_last_pawn_double_move(piece, from, to);

        let occupant = match promotion {
            Some(choice) => {
                record.is_promotion = true;
                record.promoted_to = Some(choice);
                // the promoted piece begins an unmoved career
                Piece::new(piece.color(), choice)
            }
            None => {
                let mut moved = piece;
                moved.mark_moved();
                moved
            }
        };
        self.board.place_piece_at(Some(occupant), to);
        self.board.place_piece_at(None, from);
        if is_castling {
            self.move_castling_rook(from, to);
        }

        record.is_check = is_king_in_check(&self.board, !self.current_player);
        self.current_player = !self.current_player;
        self.update_game_status();
        record.is_checkmate = self.status.is_checkmate();
        self.move_history.push(record);
        record
    }

    /// Bring the rook across once the king's two-square step has been
    /// played. Eligibility was settled during validation.
    fn move_castling_rook(&mut self, king_from: Position, king_to: Position) {
        let kingside = king_to.column() > king_from.column();
        let home = Position::new(king_from.row(), rook_home_column(kingside)).ok();
        let landing =
            Position::new(king_from.row(), rook_landing_column(king_to.column(), kingside)).ok();
        let (Some(home), Some(landing)) = (home, landing) else {
            return;
        };
        if let Some(mut rook) = self.board.piece_at(home) {
            rook.mark_moved();
            self.board.place_piece_at(None, home);
            self.board.place_piece_at(Some(rook), landing);
        }
    }

    /// A pawn double step arms the marker; every other move disarms
    /// it. The capture window lasts exactly one ply.
    fn update_last_pawn_double_move(&mut self, piece: Piece, from: Position, to: Position) {
        if piece.is_double_move(from, to) {
            self.last_pawn_double_move = Some(to);
        } else {
            self.last_pawn_double_move = None;
        }
    }

    /// Re-derive the status from the board alone. Stalemate and draws
    /// are never concluded here; a draw arrives only through
    /// [`ChessGame::declare_draw`].
    fn update_game_status(&mut self) {
        self.status = GameStatus::InProgress;
        for color in Color::iter() {
            if is_checkmate(&mut self.board, color) {
                self.status = match color {
                    White => GameStatus::WhiteCheckMate,
                    Black => GameStatus::BlackCheckMate,
                };
                return;
            }
            if is_king_in_check(&self.board, color) {
                self.status = match color {
                    White => GameStatus::WhiteCheck,
                    Black => GameStatus::BlackCheck,
                };
            }
        }
    }

    /// End an active game as a draw, whatever the players' reasons.
    pub fn declare_draw(&mut self) {
        if self.status.is_active() {
            self.status = GameStatus::Draw;
        }
    }

    /// Set up the starting position again with the same players and a
    /// fresh clock.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = White;
        self.status = GameStatus::InProgress;
        self.move_history.clear();
        self.last_pawn_double_move = None;
        self.start_time = SystemTime::now();
    }

    /// The move history as numbered full-move lines, one string per
    /// White/Black pair: `"1. e4 e5"`. A line in progress carries only
    /// White's ply.
    pub fn formatted_move_history(&self) -> Vec<String> {
        self.move_history
            .chunks(2)
            .enumerate()
            .map(|(index, pair)| {
                let mut line = format!("{}. {}", index + 1, pair[0].to_algebraic_notation());
                if let Some(reply) = pair.get(1) {
                    line.push(' ');
                    line.push_str(&reply.to_algebraic_notation());
                }
                line
            })
            .collect()
    }

    /// The PGN result tag for the current status; `"*"` while the game
    /// is undecided.
    pub fn pgn_result(&self) -> &'static str {
        match self.status {
            GameStatus::WhiteCheckMate => "1-0",
            GameStatus::BlackCheckMate => "0-1",
            GameStatus::Stalemate | GameStatus::Draw => "1/2-1/2",
            _ => "*",
        }
    }

    /// Serialize the position as a FEN record, the form an external
    /// analysis engine takes its input in. Halfmove clocks are not
    /// tracked, so that field is always `0`.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in (1..=8).rev() {
            if row < 8 {
                fen.push('/');
            }
            let mut empty_run = 0;
            for column in 1..=8 {
                match self.board.piece_at_coords(row, column) {
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
        }
        fen.push(' ');
        fen.push(match self.current_player {
            White => 'w',
            Black => 'b',
        });
        fen.push(' ');
        fen.push_str(&self.castling_rights());
        fen.push(' ');
        match self.en_passant_square() {
            Some(square) => fen.push_str(&square.to_string()),
            None => fen.push('-'),
        }
        fen.push_str(" 0 ");
        fen.push_str(&(self.move_history.len() / 2 + 1).to_string());
        fen
    }

    fn castling_rights(&self) -> String {
        let mut rights = String::new();
        for (color, kingside, letter) in [
            (White, true, 'K'),
            (White, false, 'Q'),
            (Black, true, 'k'),
            (Black, false, 'q'),
        ] {
            if self.side_may_castle(color, kingside) {
                rights.push(letter);
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }
        rights
    }

    /// FEN-level castling rights: king and rook still sit unmoved on
    /// their home squares. Transient obstacles do not matter here.
    fn side_may_castle(&self, color: Color, kingside: bool) -> bool {
        let row = color.back_rank() as i8;
        let king = self.board.piece_at_coords(row, 5);
        let rook = self
            .board
            .piece_at_coords(row, rook_home_column(kingside) as i8);
        matches!(
            king,
            Some(piece) if piece.kind().is_king() && piece.color() == color && !piece.has_moved()
        ) && matches!(
            rook,
            Some(piece) if piece.kind() == PieceKind::Rook
                && piece.color() == color
                && !piece.has_moved()
        )
    }

    /// The square a capturing pawn would land on, one rank behind the
    /// marked double-stepper.
    fn en_passant_square(&self) -> Option<Position> {
        let marker = self.last_pawn_double_move?;
        let pawn = self.board.piece_at(marker)?;
        marker.offset(-pawn.color().forward(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    fn play(game: &mut ChessGame, from: &str, to: &str) -> Move {
        game.attempt_move(at(from), at(to), None).unwrap()
    }

    #[test]
    fn test_opening_moves_alternate_players() {
        let mut game = ChessGame::new();
        assert_eq!(game.current_player(), White);

        play(&mut game, "e2", "e4");
        assert_eq!(game.current_player(), Black);

        play(&mut game, "e7", "e5");
        assert_eq!(game.current_player(), White);
        assert_eq!(game.move_history().len(), 2);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_empty_source_and_wrong_color() {
        let mut game = ChessGame::new();
        assert_eq!(
            game.attempt_move(at("e4"), at("e5"), None),
            Err(MoveError::EmptySource)
        );
        assert_eq!(
            game.attempt_move(at("e7"), at("e5"), None),
            Err(MoveError::WrongColor)
        );
    }

    #[test]
    fn test_moves_onto_friends_rejected_as_illegal() {
        let mut game = ChessGame::new();
        // geometry holds, destination holds a friend
        assert_eq!(
            game.attempt_move(at("d1"), at("d2"), None),
            Err(MoveError::IllegalForPiece)
        );
        // geometry fails too; same rejection, not an ownership one
        assert_eq!(
            game.attempt_move(at("a1"), at("b2"), None),
            Err(MoveError::IllegalForPiece)
        );
    }

    #[test]
    fn test_move_history_formatting() {
        let mut game = ChessGame::new();
        play(&mut game, "e2", "e4");
        assert_eq!(game.formatted_move_history(), vec!["1. e4"]);

        play(&mut game, "e7", "e5");
        play(&mut game, "g1", "f3");
        play(&mut game, "b8", "c6");
        assert_eq!(
            game.formatted_move_history(),
            vec!["1. e4 e5", "2. Nf3 Nc6"]
        );
    }

    #[test]
    fn test_self_check_rejected_and_board_untouched() {
        let mut game = ChessGame::new();
        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        play(&mut game, "d1", "h5");
        play(&mut game, "b8", "c6");
        let sortie = play(&mut game, "h5", "f7");
        assert!(sortie.is_check());
        assert_eq!(game.status(), GameStatus::BlackCheck);

        // a knight move ignores the check and is refused outright
        let before = game.board().clone();
        assert_eq!(
            game.attempt_move(at("g8"), at("f6"), None),
            Err(MoveError::SelfCheck)
        );
        assert_eq!(*game.board(), before);

        // taking the queen resolves it
        let rescue = play(&mut game, "e8", "f7");
        assert!(rescue.is_capture());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_fools_mate_ends_the_game() {
        let mut game = ChessGame::new();
        play(&mut game, "f2", "f3");
        play(&mut game, "e7", "e5");
        play(&mut game, "g2", "g4");
        let mate = play(&mut game, "d8", "h4");

        assert!(mate.is_check());
        assert!(mate.is_checkmate());
        assert_eq!(mate.to_algebraic_notation(), "Qh4#");
        assert_eq!(game.status(), GameStatus::WhiteCheckMate);
        assert_eq!(game.pgn_result(), "1-0");
        assert_eq!(
            game.attempt_move(at("a2"), at("a3"), None),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_en_passant_capture() {
        let mut game = ChessGame::new();
        play(&mut game, "d2", "d4");
        play(&mut game, "a7", "a6");
        play(&mut game, "d4", "d5");
        play(&mut game, "e7", "e5");
        assert_eq!(game.last_pawn_double_move(), Some(at("e5")));

        let capture = play(&mut game, "d5", "e6");
        assert!(capture.is_en_passant());
        assert!(capture.is_capture());
        assert_eq!(capture.to_algebraic_notation(), "dxe6 e.p.");
        assert!(game.board().piece_at(at("e5")).is_none());
        assert_eq!(
            game.board().piece_at(at("e6")).map(|p| p.kind()),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn test_en_passant_window_closes() {
        let mut game = ChessGame::new();
        play(&mut game, "d2", "d4");
        play(&mut game, "a7", "a6");
        play(&mut game, "d4", "d5");
        play(&mut game, "e7", "e5");
        play(&mut game, "g1", "f3");
        assert_eq!(game.last_pawn_double_move(), None);

        play(&mut game, "a6", "a5");
        assert_eq!(
            game.attempt_move(at("d5"), at("e6"), None),
            Err(MoveError::IllegalForPiece)
        );
    }

    #[test]
    fn test_single_pawn_step_disarms_marker() {
        let mut game = ChessGame::new();
        play(&mut game, "d2", "d4");
        assert_eq!(game.last_pawn_double_move(), Some(at("d4")));

        play(&mut game, "a7", "a6");
        assert_eq!(game.last_pawn_double_move(), None);
    }

    #[test]
    fn test_en_passant_rejected_after_intervening_pawn_steps() {
        let mut game = ChessGame::new();
        play(&mut game, "e2", "e4");
        play(&mut game, "a7", "a6");
        play(&mut game, "e4", "e5");
        play(&mut game, "d7", "d5");
        assert_eq!(game.last_pawn_double_move(), Some(at("d5")));

        // single pawn steps by both sides close the one-ply window
        play(&mut game, "h2", "h3");
        play(&mut game, "h7", "h6");
        assert_eq!(
            game.attempt_move(at("e5"), at("d6"), None),
            Err(MoveError::IllegalForPiece)
        );
        assert_eq!(
            game.board().piece_at(at("d5")).map(|p| p.kind()),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn test_promotion_requires_a_valid_choice() {
        let mut game = ChessGame::new();
        play(&mut game, "a2", "a4");
        play(&mut game, "b7", "b5");
        play(&mut game, "a4", "b5");
        play(&mut game, "a7", "a6");
        play(&mut game, "b5", "a6");
        play(&mut game, "d7", "d6");
        play(&mut game, "a6", "a7");
        play(&mut game, "d6", "d5");

        assert_eq!(
            game.attempt_move(at("a7"), at("b8"), None),
            Err(MoveError::PromotionRequired)
        );
        assert_eq!(
            game.attempt_move(at("a7"), at("b8"), Some(PieceKind::King)),
            Err(MoveError::InvalidPromotion)
        );
        assert_eq!(
            game.attempt_move(at("a7"), at("b8"), Some(PieceKind::Pawn)),
            Err(MoveError::InvalidPromotion)
        );

        let crowning = game
            .attempt_move(at("a7"), at("b8"), Some(PieceKind::Queen))
            .unwrap();
        assert!(crowning.is_promotion());
        assert_eq!(crowning.to_algebraic_notation(), "axb8=Q");
        let queen = game.board().piece_at(at("b8")).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.color(), White);
    }

    #[test]
    fn test_kingside_castling() {
        let mut game = ChessGame::new();
        play(&mut game, "g1", "f3");
        play(&mut game, "a7", "a6");
        play(&mut game, "e2", "e3");
        play(&mut game, "b7", "b6");
        play(&mut game, "f1", "e2");
        play(&mut game, "c7", "c6");

        let castle = play(&mut game, "e1", "g1");
        assert!(castle.is_castling());
        assert_eq!(castle.to_algebraic_notation(), "O-O");
        assert_eq!(
            game.board().piece_at(at("g1")).map(|p| p.kind()),
            Some(PieceKind::King)
        );
        assert_eq!(
            game.board().piece_at(at("f1")).map(|p| p.kind()),
            Some(PieceKind::Rook)
        );
        assert!(game.board().piece_at(at("h1")).is_none());
        assert!(game.board().piece_at(at("f1")).unwrap().has_moved());
    }

    #[test]
    fn test_queenside_castling() {
        let mut game = ChessGame::new();
        play(&mut game, "d2", "d4");
        play(&mut game, "a7", "a6");
        play(&mut game, "c1", "f4");
        play(&mut game, "b7", "b6");
        play(&mut game, "b1", "c3");
        play(&mut game, "c7", "c6");
        play(&mut game, "d1", "d2");
        play(&mut game, "d7", "d6");

        let castle = play(&mut game, "e1", "c1");
        assert!(castle.is_castling());
        assert_eq!(castle.to_algebraic_notation(), "O-O-O");
        assert_eq!(
            game.board().piece_at(at("c1")).map(|p| p.kind()),
            Some(PieceKind::King)
        );
        let rook = game.board().piece_at(at("d1")).unwrap();
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert!(rook.has_moved());
        assert!(game.board().piece_at(at("a1")).is_none());
        assert!(game.board().piece_at(at("b1")).is_none());
    }

    #[test]
    fn test_castling_needs_a_clear_lane() {
        let mut game = ChessGame::new();
        assert_eq!(
            game.attempt_move(at("e1"), at("g1"), None),
            Err(MoveError::IllegalForPiece)
        );
    }

    #[test]
    fn test_castling_denied_after_king_returns_home() {
        let mut game = ChessGame::new();
        play(&mut game, "g1", "f3");
        play(&mut game, "a7", "a6");
        play(&mut game, "e2", "e3");
        play(&mut game, "b7", "b6");
        play(&mut game, "f1", "e2");
        play(&mut game, "c7", "c6");
        play(&mut game, "e1", "f1");
        play(&mut game, "d7", "d6");
        play(&mut game, "f1", "e1");
        play(&mut game, "e7", "e6");

        assert_eq!(
            game.attempt_move(at("e1"), at("g1"), None),
            Err(MoveError::IllegalForPiece)
        );
    }

    #[test]
    fn test_fen_output() {
        let mut game = ChessGame::new();
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );

        play(&mut game, "e2", "e4");
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn test_fen_castling_rights_shrink() {
        let mut game = ChessGame::new();
        play(&mut game, "h2", "h4");
        play(&mut game, "a7", "a6");
        play(&mut game, "h1", "h3");
        play(&mut game, "b7", "b6");
        assert!(game.to_fen().contains(" Qkq "));
    }

    #[test]
    fn test_declare_draw_and_reset() {
        let mut game = ChessGame::new();
        play(&mut game, "e2", "e4");
        game.declare_draw();
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.pgn_result(), "1/2-1/2");
        assert_eq!(
            game.attempt_move(at("e7"), at("e5"), None),
            Err(MoveError::GameOver)
        );

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), White);
        assert!(game.move_history().is_empty());
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_players_survive_a_reset() {
        let mut game = ChessGame::with_players("Anderssen", "Kieseritzky");
        play(&mut game, "e2", "e4");
        game.reset();
        assert_eq!(game.white_player(), "Anderssen");
        assert_eq!(game.black_player(), "Kieseritzky");
    }

    #[test]
    fn test_promotion_options() {
        let game = ChessGame::new();
        let options = game.promotion_options();
        assert_eq!(options.len(), 4);
        assert!(options.contains(&PieceKind::Queen));
        assert!(!options.contains(&PieceKind::King));
    }

    #[test]
    fn test_pgn_result_undecided() {
        let game = ChessGame::new();
        assert_eq!(game.pgn_result(), "*");
    }
}
