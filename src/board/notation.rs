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

//! Textual renderings of a [`Move`]: algebraic notation for the move
//! history, and the engine-protocol coordinate form for the external
//! evaluation collaborator.

use anyhow::{bail, Context, Result};

use super::material::PieceKind;
use super::moves::Move;
use super::position::Position;

impl Move {
    /// Algebraic notation derived from the move's flags, recomputed on
    /// every call rather than stored.
    ///
    /// Castling renders `O-O` when the king moved toward the h-file and
    /// `O-O-O` otherwise, decided purely by comparing columns. Two
    /// identical pieces able to reach the same square are not
    /// disambiguated.
    pub fn to_algebraic_notation(&self) -> String {
        let mut text = if self.is_castling() {
            if self.to().column() > self.from().column() {
                String::from("O-O")
            } else {
                String::from("O-O-O")
            }
        } else if self.piece().kind() == PieceKind::Pawn {
            let mut text = String::new();
            if self.is_capture() {
                text.push(self.from().column_letter());
                text.push('x');
            }
            text.push_str(&self.to().to_string());
            if let Some(kind) = self.promoted_to() {
                text.push('=');
                text.push_str(kind.symbol());
            }
            if self.is_en_passant() {
                text.push_str(" e.p.");
            }
            text
        } else {
            let mut text = String::from(self.piece().kind().symbol());
            if self.is_capture() {
                text.push('x');
            }
            text.push_str(&self.to().to_string());
            text
        };
        if self.is_checkmate() {
            text.push('#');
        } else if self.is_check() {
            text.push('+');
        }
        text
    }

    /// Engine-protocol coordinate form: `<from><to>` with a lowercase
    /// promotion letter appended when one applies, e.g. `e7e8q`.
    pub fn to_uci(&self) -> String {
        let mut text = format!("{}{}", self.from(), self.to());
        if let Some(kind) = self.promoted_to() {
            text.push(promotion_letter(kind));
        }
        text
    }
}

fn promotion_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        _ => 'q',
    }
}

/// Parse an engine-protocol move like `"e2e4"` or `"e7e8q"` into its
/// squares and optional promotion choice. This is the boundary through
/// which an evaluation collaborator's best-move reply comes back in.
pub fn from_uci(text: &str) -> Result<(Position, Position, Option<PieceKind>)> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        bail!("expected a move like \"e2e4\" or \"e7e8q\", got {text:?}");
    }
    let from = Position::from_algebraic(&text[0..2])
        .with_context(|| format!("bad source square in {text:?}"))?;
    let to = Position::from_algebraic(&text[2..4])
        .with_context(|| format!("bad destination square in {text:?}"))?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some('q') => Some(PieceKind::Queen),
        Some('r') => Some(PieceKind::Rook),
        Some('b') => Some(PieceKind::Bishop),
        Some('n') => Some(PieceKind::Knight),
        Some(other) => bail!("unknown promotion piece {other:?} in {text:?}"),
    };
    Ok((from, to, promotion))
}
