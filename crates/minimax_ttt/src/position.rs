//! Named cell coordinates on the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board, in row-major order (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Parses console input: `"row col"` (0-based), a cell number `1`-`9`,
    /// or a label such as `"center"`.
    #[instrument]
    pub fn parse_input(s: &str) -> Option<Position> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [row, col] => {
                let row = row.parse::<usize>().ok()?;
                let col = col.parse::<usize>().ok()?;
                Self::from_row_col(row, col)
            }
            [single] => {
                if let Ok(num) = single.parse::<usize>() {
                    return num.checked_sub(1).and_then(Self::from_index);
                }
                let lower = single.to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|pos| pos.label().to_lowercase() == lower)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
    }

    #[test]
    fn test_iter_matches_all() {
        let iterated: Vec<Position> = <Position as strum::IntoEnumIterator>::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
    }

    #[test]
    fn test_parse_input_forms() {
        assert_eq!(Position::parse_input("2 0"), Some(Position::BottomLeft));
        assert_eq!(Position::parse_input("1,2"), Some(Position::MiddleRight));
        assert_eq!(Position::parse_input("5"), Some(Position::Center));
        assert_eq!(Position::parse_input("top-left"), Some(Position::TopLeft));
        assert_eq!(Position::parse_input("0"), None);
        assert_eq!(Position::parse_input("10"), None);
        assert_eq!(Position::parse_input("3 3"), None);
        assert_eq!(Position::parse_input(""), None);
    }
}
