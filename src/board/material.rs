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
use std::ops::Not;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Color {
    White,
    Black,
}

use Color::{Black, White};

impl Color {
    /// Row delta for a pawn advancing one square.
    #[inline]
    pub const fn forward(&self) -> i8 {
        match self {
            White => 1,
            Black => -1,
        }
    }

    #[inline]
    pub const fn back_rank(&self) -> u8 {
        match self {
            White => 1,
            Black => 8,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(&self) -> u8 {
        match self {
            White => 2,
            Black => 7,
        }
    }

    /// Row a pawn must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(&self) -> u8 {
        match self {
            White => 5,
            Black => 4,
        }
    }

    #[inline]
    pub const fn promotion_rank(&self) -> u8 {
        match self {
            White => 8,
            Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            White => Black,
            Black => White,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// The four kinds a pawn may promote to.
    pub const PROMOTION_CHOICES: [Self; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    /// Algebraic-notation letter. Pawns have none; the knight uses "N"
    /// because "K" belongs to the king.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Pawn => "",
            Self::Rook => "R",
            Self::Knight => "N",
            Self::Bishop => "B",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    #[inline]
    pub fn is_promotion_choice(&self) -> bool {
        Self::PROMOTION_CHOICES.contains(self)
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        matches!(*self, Self::King)
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        matches!(*self, Self::Pawn)
    }
}

/// A piece in play: color, kind, and whether it has physically moved.
/// The flag gates castling and the pawn double step; it is set exactly
/// once, on the piece's first move (including the rook's leg of a
/// castle).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub const fn fen_char(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            White => c.to_ascii_uppercase(),
            Black => c,
        }
    }
}
