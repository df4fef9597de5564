//! Binary operators reified as values, for dispatch chosen at runtime.

use std::{fmt, str::FromStr};

#[cfg(feature = "clap")]
use clap::{builder::PossibleValue, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trinary::{Compare, Trinary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    And,
    Or,
    Xor,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Lt => "lt",
            Operator::Le => "le",
            Operator::Gt => "gt",
            Operator::Ge => "ge",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Xor => "^",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// Returns `true` for operators that only accept `Trinary` or `bool`
    /// operands. Equality and inequality are total over any pair of values.
    #[must_use]
    pub const fn is_restricted(self) -> bool {
        !matches!(self, Operator::Eq | Operator::Ne)
    }

    /// The ordinary boolean meaning of the operator.
    #[must_use]
    pub const fn evaluate(self, a: bool, b: bool) -> bool {
        match self {
            Operator::And => a & b,
            Operator::Or => a | b,
            Operator::Xor => a ^ b,
            Operator::Eq => a == b,
            Operator::Ne => a != b,
            Operator::Lt => !a & b,
            Operator::Le => !a | b,
            Operator::Gt => a & !b,
            Operator::Ge => a | !b,
        }
    }

    #[must_use]
    pub fn apply(self, lhs: Trinary, rhs: Trinary) -> Trinary {
        match self {
            Operator::And => lhs & rhs,
            Operator::Or => lhs | rhs,
            Operator::Xor => lhs ^ rhs,
            Operator::Eq => lhs.equals(rhs),
            Operator::Ne => lhs.not_equals(rhs),
            Operator::Lt => lhs.less_than(rhs),
            Operator::Le => lhs.less_equal(rhs),
            Operator::Gt => lhs.greater_than(rhs),
            Operator::Ge => lhs.greater_equal(rhs),
        }
    }

    #[must_use]
    pub fn truth_table(self) -> TruthTable {
        let entries = Trinary::ALL
            .into_iter()
            .flat_map(|lhs| {
                Trinary::ALL.into_iter().map(move |rhs| Entry {
                    lhs,
                    rhs,
                    result: self.apply(lhs, rhs),
                })
            })
            .collect();
        TruthTable {
            operator: self,
            entries,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator: {0:?}")]
pub struct ParseError(String);

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Operator, ParseError> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == s || op.symbol() == s)
            .ok_or_else(|| ParseError(s.to_string()))
    }
}

#[cfg(feature = "clap")]
impl ValueEnum for Operator {
    fn value_variants<'a>() -> &'a [Self] {
        &Operator::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()).alias(self.symbol()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub lhs: Trinary,
    pub rhs: Trinary,
    pub result: Trinary,
}

/// Every result of an operator, row-major over `Trinary::ALL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    operator: Operator,
    entries: Vec<Entry>,
}

impl TruthTable {
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, lhs: Trinary, rhs: Trinary) -> Option<Trinary> {
        self.entries
            .iter()
            .find(|e| e.lhs == lhs && e.rhs == rhs)
            .map(|e| e.result)
    }
}

const CELL: usize = 7;

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = Trinary::ALL.len();
        write!(f, "{:<CELL$} |", self.operator)?;
        write_row(f, Trinary::ALL.iter())?;
        writeln!(f)?;
        write!(f, "{}+{}", "-".repeat(CELL + 1), "-".repeat((CELL + 1) * cols))?;
        for row in self.entries.chunks(cols) {
            writeln!(f)?;
            write!(f, "{:<CELL$} |", row[0].lhs)?;
            write_row(f, row.iter().map(|e| &e.result))?;
        }
        Ok(())
    }
}

// The last cell is left unpadded so rows carry no trailing whitespace.
fn write_row<'a>(
    f: &mut fmt::Formatter<'_>,
    cells: impl ExactSizeIterator<Item = &'a Trinary>,
) -> fmt::Result {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.enumerate() {
        if i == last {
            write!(f, " {cell}")?;
        } else {
            write!(f, " {cell:<CELL$}")?;
        }
    }
    Ok(())
}
