//! Concrete validators for common inputs.
//!
//! All of these are declared with the [`validator!`](crate::validator)
//! macro and are the building blocks the engine's built-in rules are
//! assembled from.

pub mod format;
pub mod length;
pub mod pattern;
pub mod value;

pub use format::{Digits, Email, Guid, digits, email, guid, login};
pub use length::{ExactLength, MaxLength, MinLength, exact_length, max_length, min_length};
pub use pattern::{Alphanumeric, Contains, Matches, alphanumeric, contains, matches};
pub use value::{BoolStr, NotEmpty, bool_str, not_empty};
