//! Collapsing possibly indeterminate values to a definite `bool`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::trinary::Trinary;

/// A value with a notion of truthiness.
///
/// `None` means the value is indeterminate and only [`strictly`] or
/// [`weakly`] may decide it. Containers and strings are truthy when
/// non-empty, numbers when non-zero.
pub trait Truthy {
    fn truthiness(&self) -> Option<bool>;
}

/// Unknown -> false
///
/// ```
/// use trinary::{strictly, Trinary};
///
/// assert!(!strictly(&Trinary::Unknown));
/// assert!(strictly(&Trinary::True));
/// assert!(strictly(&vec![0]));
/// ```
#[must_use]
pub fn strictly<T: Truthy + ?Sized>(value: &T) -> bool {
    value.truthiness().unwrap_or(false)
}

/// Unknown -> true
///
/// ```
/// use trinary::{weakly, Trinary};
///
/// assert!(weakly(&Trinary::Unknown));
/// assert!(!weakly(&Trinary::False));
/// assert!(!weakly(""));
/// ```
#[must_use]
pub fn weakly<T: Truthy + ?Sized>(value: &T) -> bool {
    value.truthiness().unwrap_or(true)
}

impl Truthy for Trinary {
    fn truthiness(&self) -> Option<bool> {
        self.to_bool()
    }
}

impl Truthy for bool {
    fn truthiness(&self) -> Option<bool> {
        Some(*self)
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn truthiness(&self) -> Option<bool> {
        match self {
            Some(value) => value.truthiness(),
            None => Some(false),
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthiness(&self) -> Option<bool> {
        (**self).truthiness()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn truthiness(&self) -> Option<bool> {
        (**self).truthiness()
    }
}

macro_rules! impl_truthy_nonzero {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn truthiness(&self) -> Option<bool> {
                    Some(*self != 0)
                }
            }
        )*
    };
}

impl_truthy_nonzero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn truthiness(&self) -> Option<bool> {
        Some(*self != 0.0)
    }
}

impl Truthy for f64 {
    fn truthiness(&self) -> Option<bool> {
        Some(*self != 0.0)
    }
}

macro_rules! impl_truthy_nonempty {
    ($(impl<$($g:ident),*> for $t:ty;)*) => {
        $(
            impl<$($g),*> Truthy for $t {
                fn truthiness(&self) -> Option<bool> {
                    Some(!self.is_empty())
                }
            }
        )*
    };
}

impl_truthy_nonempty! {
    impl<> for str;
    impl<> for String;
    impl<T> for [T];
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T, S> for HashSet<T, S>;
    impl<T> for BTreeSet<T>;
}

impl<T, const N: usize> Truthy for [T; N] {
    fn truthiness(&self) -> Option<bool> {
        Some(N != 0)
    }
}

impl Truthy for serde_json::Value {
    fn truthiness(&self) -> Option<bool> {
        use serde_json::Value;

        Some(match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        })
    }
}
