use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed is empty")]
    Empty,

    #[error("only 1 and 0 allowed in seed, found '{ch}' at position {position}")]
    InvalidChar { ch: char, position: usize },
}

/// The initial row of the automaton. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    cells: Vec<Cell>,
}

impl Seed {
    /// Parse a seed string made of `'0'` and `'1'`.
    ///
    /// Trailing line breaks are stripped first (`\n` as well as `\r\n`), so a line read from
    /// stdin or a file with a final newline can be passed as-is. Any other character, including
    /// inner whitespace, is rejected.
    pub fn parse(s: &str) -> Result<Self, SeedError> {
        let s = strip_line_breaks(s);

        let cells = s
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                ch => Err(SeedError::InvalidChar { ch, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }

    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, SeedError> {
        if cells.is_empty() {
            return Err(SeedError::Empty);
        }

        Ok(Self { cells })
    }

    /// Width of every row grown from this seed.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

fn strip_line_breaks(s: &str) -> &str {
    let mut s = s;

    while let Some(rest) = s.strip_suffix('\n') {
        s = rest.strip_suffix('\r').unwrap_or(rest);
    }

    s
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            f.write_str(if cell { "1" } else { "0" })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let seed = Seed::parse("00100").unwrap();

        assert_eq!(seed.width(), 5);
        assert_eq!(seed.cells(), &[false, false, true, false, false]);
        assert_eq!(seed.to_string(), "00100");
    }

    #[test]
    fn strips_trailing_newlines() {
        assert_eq!(Seed::parse("101\n").unwrap().to_string(), "101");
        assert_eq!(Seed::parse("101\r\n").unwrap().to_string(), "101");
        assert_eq!(Seed::parse("101\n\n").unwrap().to_string(), "101");
    }

    #[test]
    fn leading_newline_is_not_stripped() {
        assert_eq!(
            Seed::parse("\n0110\n"),
            Err(SeedError::InvalidChar {
                ch: '\n',
                position: 0
            })
        );
    }

    #[test]
    fn rejects_other_digits() {
        assert_eq!(
            Seed::parse("102"),
            Err(SeedError::InvalidChar {
                ch: '2',
                position: 2
            })
        );
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert_eq!(
            Seed::parse("1 0"),
            Err(SeedError::InvalidChar {
                ch: ' ',
                position: 1
            })
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Seed::parse(""), Err(SeedError::Empty));
        assert_eq!(Seed::parse("\n"), Err(SeedError::Empty));
        assert_eq!(Seed::from_cells(vec![]), Err(SeedError::Empty));
    }
}
