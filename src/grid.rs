//! Coordinates and the validation-only playing grid.

use crate::common::GameError;
use crate::config::GRID_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single cell address. Rows are letters starting at `A`, columns are
/// numbers starting at 1; the canonical text form is `RowLetter||Column`
/// with no separator, e.g. `A1` or `J10`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coordinate {
    /// 0-based row index (0 = row `A`).
    row: u8,
    /// 1-based column number.
    col: u8,
}

impl Coordinate {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row as its letter form, `A` for index 0.
    pub fn row_letter(self) -> char {
        (b'A' + self.row) as char
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col)
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    /// Strict parse of the canonical form: one uppercase letter followed by
    /// a number without leading zeros. Grid membership is checked
    /// separately by [`Grid::is_valid_coordinate`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCoordinate(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || digits.starts_with('0') {
            return Err(invalid());
        }
        let col: u8 = digits.parse().map_err(|_| invalid())?;
        Ok(Coordinate::new(letter as u8 - b'A', col))
    }
}

/// Immutable grid dimensions. The grid only answers coordinate membership;
/// occupancy lives on fleets and their ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: u8,
}

impl Grid {
    pub fn new(size: u8) -> Self {
        Self { size }
    }

    pub fn size(self) -> u8 {
        self.size
    }

    /// `true` iff the row letter and column number both fall inside the
    /// configured dimensions. No side effects.
    pub fn is_valid_coordinate(self, coord: Coordinate) -> bool {
        coord.row() < self.size && coord.col() >= 1 && coord.col() <= self.size
    }

    /// Normalize raw input (trim, uppercase) and parse it into a coordinate
    /// on this grid. Rejects anything that does not name a cell.
    pub fn parse_coordinate(self, raw: &str) -> Result<Coordinate, GameError> {
        let normalized = raw.trim().to_ascii_uppercase();
        let coord: Coordinate = normalized.parse()?;
        if !self.is_valid_coordinate(coord) {
            return Err(GameError::InvalidCoordinate(normalized));
        }
        Ok(coord)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_roundtrip() {
        for text in ["A1", "B7", "J10"] {
            let coord: Coordinate = text.parse().unwrap();
            assert_eq!(coord.to_string(), text);
        }
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for text in ["", "A", "10", "a1", "A0", "A01", "A100", "AA1", "1A"] {
            assert!(text.parse::<Coordinate>().is_err(), "accepted {:?}", text);
        }
    }

    #[test]
    fn grid_membership() {
        let grid = Grid::default();
        assert!(grid.is_valid_coordinate(Coordinate::new(0, 1)));
        assert!(grid.is_valid_coordinate(Coordinate::new(9, 10)));
        assert!(!grid.is_valid_coordinate(Coordinate::new(10, 1)));
        assert!(!grid.is_valid_coordinate(Coordinate::new(0, 0)));
        assert!(!grid.is_valid_coordinate(Coordinate::new(0, 11)));
    }

    #[test]
    fn parse_coordinate_normalizes_and_checks_bounds() {
        let grid = Grid::default();
        assert_eq!(grid.parse_coordinate(" a1 ").unwrap(), Coordinate::new(0, 1));
        assert_eq!(grid.parse_coordinate("j10").unwrap(), Coordinate::new(9, 10));
        assert!(grid.parse_coordinate("K1").is_err());
        assert!(grid.parse_coordinate("A11").is_err());
    }
}
