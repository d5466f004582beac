use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Cell;

/// Chaotic, used for pseudo-random generation.
pub const RULE_30: Rule = Rule::new(30);

/// XOR of both neighbors. Grows a Sierpinski triangle from a single live cell.
pub const RULE_90: Rule = Rule::new(90);

/// Turing complete.
pub const RULE_110: Rule = Rule::new(110);

/// Traffic flow: every live cell moves right when the cell ahead is empty.
pub const RULE_184: Rule = Rule::new(184);

/// # Representation
/// An elementary rule is a Wolfram rule number, read as an 8 entry lookup table.
///
/// A neighborhood of three cells `(left, center, right)` is packed into a 3 bit index
/// ```notrust
/// num = left << 2 | center << 1 | right
/// ```
/// and the next state of the center cell is bit `num` of the rule.
///
/// # Examples
/// ```notrust
/// neighborhood: 111 110 101 100 011 010 001 000
/// rule 90:        0   1   0   1   1   0   1   0   (0b0101_1010)
/// rule 30:        0   0   0   1   1   1   1   0   (0b0001_1110)
/// ```
///
/// See: https://mathworld.wolfram.com/ElementaryCellularAutomaton.html
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    rule: u8,
}

impl Rule {
    pub const fn new(rule: u8) -> Self {
        Self { rule }
    }

    /// The Wolfram number of this rule.
    pub const fn number(&self) -> u8 {
        self.rule
    }

    /// Next state of a cell given its neighborhood on the previous row.
    #[inline]
    pub const fn next(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        let num = (left as u8) << 2 | (center as u8) << 1 | right as u8;

        (self.rule >> num) & 1 == 1
    }

    /// Compute the lookup table for this rule.
    ///
    /// Indexing into it with a packed neighborhood `num` yields the next state of the center
    /// cell, i.e. entry `i` is `(rule >> i) & 1`.
    pub fn table(&self) -> [Cell; 8] {
        let mut table = [false; 8];

        for (num, next) in table.iter_mut().enumerate() {
            *next = (self.rule >> num) & 1 == 1;
        }

        table
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.rule)
    }
}

impl From<u8> for Rule {
    fn from(rule: u8) -> Self {
        Self::new(rule)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule has to be between 0 and 255, got {0}")]
    OutOfRange(i64),

    #[error("rule \"{0}\" is not an integer")]
    NotANumber(String),
}

impl TryFrom<i64> for Rule {
    type Error = RuleError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u8::try_from(n)
            .map(Rule::new)
            .map_err(|_| RuleError::OutOfRange(n))
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let Ok(n) = s.parse::<i64>() else {
            return Err(RuleError::NotANumber(s.to_string()));
        };

        Rule::try_from(n)
    }
}
