//! Kleene's three-valued logic.
//!
//! [`Trinary`] is `True`, `False` or `Unknown`, where `Unknown` stands for a
//! value that could be either. Every operator is defined by treating `True`
//! as the set `{true}`, `False` as `{false}` and `Unknown` as
//! `{true, false}`, applying the boolean operator pointwise and collapsing
//! the image back.
//!
//! ```
//! use trinary::{strictly, weakly, Compare, Trinary::*};
//!
//! assert_eq!(Unknown & True, Unknown);
//! assert_eq!(Unknown | True, True);
//! assert_eq!(Unknown.equals(False), Unknown);
//! assert_eq!(Unknown.equals(Unknown), Unknown);
//! assert_eq!(Unknown.less_equal(False), Unknown);
//! assert_eq!(!Unknown, Unknown);
//!
//! // Unknown can't be cast to a bool since it could be either.
//! assert!(bool::try_from(Unknown).is_err());
//! assert!(!strictly(&Unknown));
//! assert!(weakly(&Unknown));
//! assert!(!weakly(&false));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_in_result)]

pub mod operator;
pub mod trinary;
pub mod truthy;
pub mod value;

pub use operator::{Operator, TruthTable};
pub use trinary::{CastError, Compare, Trinary};
pub use truthy::{strictly, weakly, Truthy};
pub use value::Value;
