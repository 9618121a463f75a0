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
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("position off the board: row {row}, column {column}")]
    OutOfRange { row: i32, column: i32 },
    #[error("invalid algebraic square {0:?}, expected a form like \"e4\"")]
    BadAlgebraic(String),
}

/// A board coordinate. `row` runs 1..=8 starting from White's side,
/// `column` 1..=8 starting from the a-file. Both are guaranteed in
/// range: construction fails otherwise.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    pub fn new(row: u8, column: u8) -> Result<Self, PositionError> {
        if !(1..=8).contains(&row) || !(1..=8).contains(&column) {
            return Err(PositionError::OutOfRange {
                row: row as i32,
                column: column as i32,
            });
        }
        Ok(Self { row, column })
    }

    /// Parse a two-character square like `"e4"`. The file letter may be
    /// upper or lower case.
    pub fn from_algebraic(name: &str) -> Result<Self, PositionError> {
        let mut chars = name.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(PositionError::BadAlgebraic(name.to_string())),
        };
        let column = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a' + 1,
            _ => return Err(PositionError::BadAlgebraic(name.to_string())),
        };
        let row = match rank {
            r @ '1'..='8' => r as u8 - b'0',
            _ => return Err(PositionError::BadAlgebraic(name.to_string())),
        };
        Self::new(row, column)
    }

    #[inline]
    pub const fn row(&self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(&self) -> u8 {
        self.column
    }

    /// File letter (`'a'..='h'`), used for pawn-capture notation.
    #[inline]
    pub const fn column_letter(&self) -> char {
        (b'a' + self.column - 1) as char
    }

    /// Step by a signed delta; `None` when the result leaves the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_col;
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, a1 through h8.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=8).flat_map(|row| (1..=8).map(move |column| Self { row, column }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        let pos = Position::new(4, 5).unwrap();
        assert_eq!(pos.row(), 4);
        assert_eq!(pos.column(), 5);
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(Position::new(0, 5).is_err());
        assert!(Position::new(9, 5).is_err());
        assert!(Position::new(5, 0).is_err());
        assert!(Position::new(5, 9).is_err());
    }

    #[test]
    fn test_from_algebraic() {
        let pos = Position::from_algebraic("e4").unwrap();
        assert_eq!(pos.row(), 4);
        assert_eq!(pos.column(), 5);
        assert_eq!(
            Position::from_algebraic("A1").unwrap(),
            Position::new(1, 1).unwrap()
        );
        assert_eq!(
            Position::from_algebraic("h8").unwrap(),
            Position::new(8, 8).unwrap()
        );
    }

    #[test]
    fn test_from_algebraic_rejects_malformed() {
        assert!(Position::from_algebraic("").is_err());
        assert!(Position::from_algebraic("e").is_err());
        assert!(Position::from_algebraic("e44").is_err());
        assert!(Position::from_algebraic("i4").is_err());
        assert!(Position::from_algebraic("e9").is_err());
        assert!(Position::from_algebraic("44").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for pos in Position::all() {
            let text = pos.to_string();
            assert_eq!(text.parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(Position::new(1, 1).unwrap().column_letter(), 'a');
        assert_eq!(Position::new(8, 8).unwrap().column_letter(), 'h');
    }

    #[test]
    fn test_offset() {
        let e4 = Position::from_algebraic("e4").unwrap();
        assert_eq!(
            e4.offset(1, 0),
            Some(Position::from_algebraic("e5").unwrap())
        );
        assert_eq!(
            e4.offset(-1, -1),
            Some(Position::from_algebraic("d3").unwrap())
        );
        let a1 = Position::from_algebraic("a1").unwrap();
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn test_all_covers_board() {
        assert_eq!(Position::all().count(), 64);
    }

    #[test]
    fn test_value_equality() {
        use std::collections::HashSet;
        let a = Position::new(3, 3).unwrap();
        let b = Position::from_algebraic("c3").unwrap();
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
