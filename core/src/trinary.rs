//! Kleene's three-valued logic: scalar type and its operator algebra.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;


/// A single Kleene truth value.
///
/// Uses `#[repr(u8)]` with discriminants encoding the set of booleans the
/// value may resolve to, `(false_bit << 1) | true_bit`:
///
/// | true | false | bits   | variant   |
/// |------|-------|--------|-----------|
/// | 1    | 0     | `0b01` | `True`    |
/// | 0    | 1     | `0b10` | `False`   |
/// | 1    | 1     | `0b11` | `Unknown` |
///
/// There is no implicit conversion to `bool`:
///
/// ```compile_fail
/// use trinary::Trinary;
///
/// let value = Trinary::Unknown;
/// if value {}
/// ```
///
/// Resolve with [`Trinary::to_bool`], `bool::try_from`, or one of
/// [`strictly`](crate::strictly) and [`weakly`](crate::weakly).
///
/// Connectives are only defined between `Trinary` and `bool` operands:
///
/// ```compile_fail
/// use trinary::Trinary;
///
/// let _ = Trinary::Unknown & 1;
/// ```
///
/// ```compile_fail
/// use trinary::{Compare, Trinary};
///
/// let _ = Trinary::Unknown.less_than("yes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::EnumIter))]
#[repr(u8)]
pub enum Trinary {
    True = 0b01,    // may be true
    False = 0b10,   // may be false
    Unknown = 0b11, // may be either
}

const TRUE_BIT: u8 = 0b01;
const FALSE_BIT: u8 = 0b10;

const FROM_BITS: [Trinary; 4] = [
    Trinary::Unknown, // 0b00: empty set, impossible for a lifted result
    Trinary::True,    // 0b01
    Trinary::False,   // 0b10
    Trinary::Unknown, // 0b11
];

#[inline]
const fn outcome_bit(b: bool) -> u8 {
    if b {
        TRUE_BIT
    } else {
        FALSE_BIT
    }
}

impl Trinary {
    pub const ALL: [Trinary; 3] = [Trinary::True, Trinary::False, Trinary::Unknown];

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !self.is_unknown()
    }

    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Trinary::Unknown)
    }

    #[must_use]
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Trinary::True => Some(true),
            Trinary::False => Some(false),
            Trinary::Unknown => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Trinary::True => "True",
            Trinary::False => "False",
            Trinary::Unknown => "Unknown",
        }
    }

    /// Returns `true` if `b` is one of the values this may resolve to.
    #[inline]
    #[must_use]
    pub const fn contains(self, b: bool) -> bool {
        self as u8 & outcome_bit(b) != 0
    }

    /// The booleans this value may resolve to, `true` first.
    pub fn outcomes(self) -> impl Iterator<Item = bool> {
        [true, false].into_iter().filter(move |&b| self.contains(b))
    }

    /// Collapses a set of possible outcomes. Returns `None` for the empty set.
    pub fn from_outcomes<I>(outcomes: I) -> Option<Trinary>
    where
        I: IntoIterator<Item = bool>,
    {
        let bits = outcomes
            .into_iter()
            .fold(0, |acc, b| acc | outcome_bit(b));
        if bits == 0 {
            None
        } else {
            Some(FROM_BITS[bits as usize])
        }
    }

    /// Applies a boolean function to every possible outcome and collapses the image.
    #[must_use]
    pub fn lift<F>(self, f: F) -> Trinary
    where
        F: Fn(bool) -> bool,
    {
        let bits = self.outcomes().fold(0, |acc, a| acc | outcome_bit(f(a)));
        FROM_BITS[bits as usize]
    }

    /// Binary form of [`Trinary::lift`], over the product of both outcome sets.
    #[must_use]
    pub fn lift2<F>(self, rhs: Trinary, f: F) -> Trinary
    where
        F: Fn(bool, bool) -> bool,
    {
        let mut bits = 0;
        for a in self.outcomes() {
            for b in rhs.outcomes() {
                bits |= outcome_bit(f(a, b));
            }
        }
        FROM_BITS[bits as usize]
    }

    #[must_use]
    pub fn implies(self, rhs: impl Into<Trinary>) -> Trinary {
        (!self) | rhs.into()
    }
}

impl fmt::Display for Trinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid trinary value: {0:?}")]
pub struct ParseError(String);

impl FromStr for Trinary {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Trinary, ParseError> {
        match s {
            "True" | "true" => Ok(Trinary::True),
            "False" | "false" => Ok(Trinary::False),
            "Unknown" | "unknown" => Ok(Trinary::Unknown),
            _ => Err(ParseError(s.to_string())),
        }
    }
}

/// Returned when `Unknown` is cast directly to a `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown can't cast to a bool. Use strictly() or weakly().")]
pub struct CastError;

impl TryFrom<Trinary> for bool {
    type Error = CastError;

    fn try_from(value: Trinary) -> Result<bool, CastError> {
        value.to_bool().ok_or(CastError)
    }
}

impl From<bool> for Trinary {
    fn from(b: bool) -> Trinary {
        if b {
            Trinary::True
        } else {
            Trinary::False
        }
    }
}

impl From<Option<bool>> for Trinary {
    fn from(b: Option<bool>) -> Trinary {
        b.map_or(Trinary::Unknown, Trinary::from)
    }
}

impl From<Trinary> for Option<bool> {
    fn from(t: Trinary) -> Option<bool> {
        t.to_bool()
    }
}

impl PartialEq<bool> for Trinary {
    fn eq(&self, other: &bool) -> bool {
        self.to_bool() == Some(*other)
    }
}

impl PartialEq<Trinary> for bool {
    fn eq(&self, other: &Trinary) -> bool {
        other == self
    }
}

impl Serialize for Trinary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_bool().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Trinary {
    fn deserialize<D>(deserializer: D) -> Result<Trinary, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<bool>::deserialize(deserializer).map(Trinary::from)
    }
}

impl std::ops::Not for Trinary {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Trinary::True => Trinary::False,
            Trinary::False => Trinary::True,
            Trinary::Unknown => Trinary::Unknown,
        }
    }
}

impl std::ops::BitAnd for Trinary {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Trinary::True, b) => b,
            (Trinary::False, _) | (Trinary::Unknown, Trinary::False) => Trinary::False,
            (Trinary::Unknown, _) => Trinary::Unknown,
        }
    }
}

impl std::ops::BitOr for Trinary {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Trinary::False, b) => b,
            (Trinary::True, _) | (Trinary::Unknown, Trinary::True) => Trinary::True,
            (Trinary::Unknown, _) => Trinary::Unknown,
        }
    }
}

impl std::ops::BitXor for Trinary {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Trinary::Unknown, _) | (_, Trinary::Unknown) => Trinary::Unknown,
            (a, b) => Trinary::from(a != b),
        }
    }
}

macro_rules! impl_bool_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl std::ops::$trait<bool> for Trinary {
            type Output = Trinary;

            fn $method(self, rhs: bool) -> Trinary {
                std::ops::$trait::$method(self, Trinary::from(rhs))
            }
        }

        impl std::ops::$trait<Trinary> for bool {
            type Output = Trinary;

            fn $method(self, rhs: Trinary) -> Trinary {
                std::ops::$trait::$method(Trinary::from(self), rhs)
            }
        }

        impl<Rhs: Into<Trinary>> std::ops::$assign_trait<Rhs> for Trinary {
            fn $assign_method(&mut self, rhs: Rhs) {
                *self = std::ops::$trait::$method(*self, rhs.into());
            }
        }
    };
}

impl_bool_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bool_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bool_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

/// Kleene equality and ordering.
///
/// `==` on [`Trinary`] is structural: `Trinary::Unknown == Trinary::Unknown`
/// holds because both sides are the same variant. The methods here are the
/// logical operators and answer in [`Trinary`], so `Unknown.equals(Unknown)`
/// is `Unknown`. `False < True` is the only strict ordering between
/// definite values.
pub trait Compare<Rhs = Self> {
    fn equals(self, rhs: Rhs) -> Trinary;

    fn not_equals(self, rhs: Rhs) -> Trinary;

    fn less_than(self, rhs: Rhs) -> Trinary;

    fn less_equal(self, rhs: Rhs) -> Trinary;

    fn greater_than(self, rhs: Rhs) -> Trinary;

    fn greater_equal(self, rhs: Rhs) -> Trinary;
}

impl Compare for Trinary {
    fn equals(self, rhs: Trinary) -> Trinary {
        match (self, rhs) {
            (Trinary::Unknown, _) | (_, Trinary::Unknown) => Trinary::Unknown,
            (a, b) => Trinary::from(a == b),
        }
    }

    fn not_equals(self, rhs: Trinary) -> Trinary {
        self ^ rhs
    }

    fn less_than(self, rhs: Trinary) -> Trinary {
        match (self, rhs) {
            (Trinary::True, _) | (_, Trinary::False) => Trinary::False,
            (Trinary::False, Trinary::True) => Trinary::True,
            _ => Trinary::Unknown,
        }
    }

    fn less_equal(self, rhs: Trinary) -> Trinary {
        match (self, rhs) {
            (Trinary::False, _) | (_, Trinary::True) => Trinary::True,
            (Trinary::True, Trinary::False) => Trinary::False,
            _ => Trinary::Unknown,
        }
    }

    fn greater_than(self, rhs: Trinary) -> Trinary {
        rhs.less_than(self)
    }

    fn greater_equal(self, rhs: Trinary) -> Trinary {
        rhs.less_equal(self)
    }
}

macro_rules! impl_bool_compare {
    ($lhs:ty, $rhs:ty) => {
        impl Compare<$rhs> for $lhs {
            fn equals(self, rhs: $rhs) -> Trinary {
                Trinary::from(self).equals(Trinary::from(rhs))
            }

            fn not_equals(self, rhs: $rhs) -> Trinary {
                Trinary::from(self).not_equals(Trinary::from(rhs))
            }

            fn less_than(self, rhs: $rhs) -> Trinary {
                Trinary::from(self).less_than(Trinary::from(rhs))
            }

            fn less_equal(self, rhs: $rhs) -> Trinary {
                Trinary::from(self).less_equal(Trinary::from(rhs))
            }

            fn greater_than(self, rhs: $rhs) -> Trinary {
                Trinary::from(self).greater_than(Trinary::from(rhs))
            }

            fn greater_equal(self, rhs: $rhs) -> Trinary {
                Trinary::from(self).greater_equal(Trinary::from(rhs))
            }
        }
    };
}

impl_bool_compare!(Trinary, bool);
impl_bool_compare!(bool, Trinary);
