//! # Domain Models
//!
//! Immutable value objects with construction-time validation.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Currency`] | Three-letter currency code with amount formatting |
//! | [`PointInTime`] | Past-or-present UTC instant with display formatting |
//!
//! Both types are independent of each other. Construction either yields a
//! value whose invariants hold or a [`ValidationError`](crate::ValidationError);
//! nothing mutates a value afterwards.

mod currency;
mod point_in_time;

pub use currency::Currency;
pub use point_in_time::PointInTime;
