//! Compile-time capability detection.
//!
//! - [`probe!`](crate::probe) / [`is_detected!`](crate::is_detected): does an
//!   [`Operation`] apply to some arguments, and what type does it form.
//! - [`is_specialization_of!`](crate::is_specialization_of): is a type an
//!   instantiation of a [`Family`].
//! - [`is_template_base_of!`](crate::is_template_base_of) and
//!   [`as_template_base`]: does a type hold a base instantiation of a family,
//!   and a view of it in the caller's ownership mode.
//!
//! Negative answers are values, never compile errors. Naming
//! [`DetectedT`] for an ill-formed application, or calling
//! [`as_template_base`] on a type without a base, is a hard error.

mod detect;
mod family;

pub use detect::*;
pub use family::*;
