//! # Valor Locale
//!
//! The locale-formatting capability consumed by `valor-core`.
//!
//! ## Overview
//!
//! - **Locale resolution** of BCP 47 tags against a curated locale table
//! - **Currency amounts** with locale grouping, decimal and symbol placement
//! - **Date/time fields** in locale order with the locale's hour cycle
//! - **Timestamp parsing** for RFC 3339, ISO 8601 and RFC 2822 text
//! - **Time sources** so "now" can be injected
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`clock`] | `Clock` trait, system and fixed clocks |
//! | [`data`] | Static locale and currency symbol data |
//! | [`date_time`] | Date/time field selection and rendering |
//! | [`error`] | Locale and parse errors |
//! | [`formatter`] | `LocaleFormatter` trait and builtin implementation |
//! | [`parse`] | Text to instant parsing |
//!
//! ## Quick Start
//!
//! ```rust
//! use valor_locale::{BuiltinLocaleFormatter, LocaleFormatter};
//!
//! let text = BuiltinLocaleFormatter
//!     .format_currency_amount(1234.5, "USD", "en-US", 2, 2)
//!     .expect("en-US and USD are supported");
//! assert_eq!(text, "$1,234.50");
//! ```
//!
//! All formatting renders in UTC; no timezone conversion is performed.

pub mod clock;
pub mod data;
pub mod date_time;
pub mod error;
pub mod formatter;
mod number;
pub mod parse;
mod tag;

pub use clock::{instant_from_system_time, Clock, FixedClock, SystemClock};
pub use data::{supported_tags, LocaleData};
pub use date_time::{DateTimeFields, FieldStyle};
pub use error::{LocaleError, ParseError};
pub use formatter::{BuiltinLocaleFormatter, LocaleFormatter};
pub use number::MAX_FRACTION_DIGITS;
pub use parse::parse_date_time;
pub use tag::resolve_locale;
