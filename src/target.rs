//! Parsing and formatting of `A1`-style target tokens.

use core::fmt;
use core::str::FromStr;

use crate::common::TargetError;
use crate::config::COLUMN_LABELS;

/// A coordinate fired at, as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub row: usize,
    pub col: usize,
}

impl Target {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl FromStr for Target {
    type Err = TargetError;

    /// A token is a column letter `A`-`J` (either case) followed by a single
    /// row digit `0`-`9`. One extra digit is tolerated and ignored, so the
    /// row is always read from exactly one character.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = input.chars().collect();
        if chars.is_empty() {
            return Err(TargetError::Empty);
        }
        if chars.len() < 2 || chars.len() > 3 {
            return Err(TargetError::BadLength(chars.len()));
        }
        let col_ch = chars[0].to_ascii_uppercase();
        let col = COLUMN_LABELS
            .iter()
            .position(|&label| label == col_ch)
            .ok_or(TargetError::BadColumn(chars[0]))?;
        let row = chars[1]
            .to_digit(10)
            .ok_or(TargetError::BadRow(chars[1]))? as usize;
        if let Some(&extra) = chars.get(2) {
            if !extra.is_ascii_digit() {
                return Err(TargetError::BadTrailing(extra));
            }
        }
        Ok(Target { row, col })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMN_LABELS.get(self.col) {
            Some(label) => write!(f, "{}{}", label, self.row),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
