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

//! A chess rules engine: board representation, full move legality
//! including castling, en passant and promotion, check and checkmate
//! detection, and game orchestration with an annotated move history.
//!
//! ```
//! use chess_rules::{ChessGame, GameStatus, Position};
//!
//! let mut game = ChessGame::new();
//! let opening = game.attempt_move(
//!     Position::from_algebraic("e2")?,
//!     Position::from_algebraic("e4")?,
//!     None,
//! )?;
//! assert_eq!(opening.to_algebraic_notation(), "e4");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod board;
pub mod game;

pub use board::*;
pub use game::*;
