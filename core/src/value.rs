//! Dynamically typed operands.
//!
//! Statically typed code gets the operator domain checked by the compiler.
//! [`Value`] is for data whose type is only known at runtime, typically JSON:
//! the restricted operators check their operands and fail with
//! [`Error::UnsupportedOperand`] instead of coercing.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    operator::Operator,
    trinary::{CastError, Compare, Trinary},
    truthy::Truthy,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported operand type(s) for {operator}: '{lhs}' and '{rhs}'")]
    UnsupportedOperand {
        operator: Operator,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("bad operand type for unary !: '{0}'")]
    UnsupportedNegation(&'static str),

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error("invalid value: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An operand whose type is only known at runtime.
///
/// Build values with `From<serde_json::Value>` or `FromStr`, which lift JSON
/// booleans into `Logic`. A hand-built `Other(Bool(_))` is still treated as a
/// logic value, by the operators and by `==`.
#[derive(Debug, Clone)]
pub enum Value {
    Logic(Trinary),
    Other(serde_json::Value),
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self.as_trinary(), other.as_trinary()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => match (self, other) {
                (Value::Other(a), Value::Other(b)) => a == b,
                _ => false,
            },
            _ => false,
        }
    }
}

impl Value {
    #[must_use]
    pub fn as_trinary(&self) -> Option<Trinary> {
        match self {
            Value::Logic(t) => Some(*t),
            Value::Other(serde_json::Value::Bool(b)) => Some(Trinary::from(*b)),
            Value::Other(_) => None,
        }
    }

    /// Returns `true` for `True`, `False` and `Unknown`.
    #[must_use]
    pub fn is_logic(&self) -> bool {
        self.as_trinary().is_some()
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        use serde_json::Value as Json;

        match self {
            Value::Logic(_) | Value::Other(Json::Bool(_)) => "Trinary",
            Value::Other(Json::Null) => "null",
            Value::Other(Json::Number(_)) => "number",
            Value::Other(Json::String(_)) => "string",
            Value::Other(Json::Array(_)) => "array",
            Value::Other(Json::Object(_)) => "object",
        }
    }

    /// Applies a binary operator.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperand` if `op` is restricted and either operand
    /// is not a logic value.
    pub fn apply(&self, op: Operator, rhs: &Value) -> Result<Trinary, Error> {
        match (op, self.as_trinary(), rhs.as_trinary()) {
            (_, Some(a), Some(b)) => Ok(op.apply(a, b)),
            (Operator::Eq, _, _) => Ok(self.equals(rhs)),
            (Operator::Ne, _, _) => Ok(self.not_equals(rhs)),
            _ => Err(Error::UnsupportedOperand {
                operator: op,
                lhs: self.type_name(),
                rhs: rhs.type_name(),
            }),
        }
    }

    /// Kleene equality between logic values, plain equality otherwise.
    #[must_use]
    pub fn equals(&self, rhs: &Value) -> Trinary {
        match (self.as_trinary(), rhs.as_trinary()) {
            (Some(a), Some(b)) => a.equals(b),
            _ => Trinary::from(self == rhs),
        }
    }

    #[must_use]
    pub fn not_equals(&self, rhs: &Value) -> Trinary {
        !self.equals(rhs)
    }

    /// # Errors
    ///
    /// Returns `UnsupportedNegation` for anything but a logic value.
    pub fn negate(&self) -> Result<Trinary, Error> {
        self.as_trinary()
            .map(|t| !t)
            .ok_or_else(|| Error::UnsupportedNegation(self.type_name()))
    }

    /// Direct boolean cast.
    ///
    /// # Errors
    ///
    /// Returns `Cast` for `Unknown`; use [`strictly`](crate::strictly) or
    /// [`weakly`](crate::weakly) to decide it.
    pub fn to_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Logic(t) => bool::try_from(*t).map_err(Into::into),
            Value::Other(json) => Ok(crate::strictly(json)),
        }
    }
}

impl From<Trinary> for Value {
    fn from(t: Trinary) -> Value {
        Value::Logic(t)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Logic(Trinary::from(b))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Bool(b) => Value::from(b),
            other => Value::Other(other),
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Value, Error> {
        if let Ok(t) = s.parse::<Trinary>() {
            return Ok(Value::Logic(t));
        }
        let json: serde_json::Value = serde_json::from_str(s)?;
        Ok(Value::from(json))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Logic(t) => fmt::Display::fmt(t, f),
            Value::Other(json) => fmt::Display::fmt(json, f),
        }
    }
}

impl Truthy for Value {
    fn truthiness(&self) -> Option<bool> {
        match self {
            Value::Logic(t) => t.truthiness(),
            Value::Other(json) => json.truthiness(),
        }
    }
}
