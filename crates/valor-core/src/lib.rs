//! # Valor Core
//!
//! Currency and point-in-time value objects.
//!
//! ## Overview
//!
//! - [`Currency`] wraps a validated three-letter code and formats amounts
//!   with exactly two fraction digits in a given locale
//! - [`PointInTime`] wraps an instant that is never in the future, renders a
//!   canonical ISO 8601 string, and formats for display in a given locale
//!
//! Locale work is delegated to a [`LocaleFormatter`]; "now" comes from a
//! [`Clock`]. Both are re-exported from `valor-locale` and can be injected
//! through the `*_with` constructors and methods.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Locale configuration |
//! | [`domain`] | Value objects |
//! | [`error`] | Core error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use valor_core::{Currency, PointInTime};
//!
//! let usd = Currency::new("USD")?;
//! assert_eq!(usd.for_amount_default(1234.5)?, "$1,234.50");
//!
//! let when = PointInTime::parse("2023-10-05T14:48:00.000Z")?;
//! assert_eq!(when.to_string(), "2023-10-05T14:48:00.000Z");
//! assert_eq!(when.format("en-GB")?, "05/10/2023, 14:48:00");
//! # Ok::<(), valor_core::CoreError>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use valor_core::{PointInTime, ValidationError};
//!
//! match PointInTime::parse("2999-01-01T00:00:00.000Z") {
//!     Err(ValidationError::FutureTimestampRejected { value, .. }) => {
//!         assert_eq!(value, "2999-01-01T00:00:00.000Z");
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;

pub use config::{ConfigError, FormatConfig, DEFAULT_LOCALE, LOCALE_ENV_VAR};
pub use domain::{Currency, PointInTime};
pub use error::{CoreError, FormatError, ValidationError};

pub use valor_locale::{
    BuiltinLocaleFormatter, Clock, DateTimeFields, FieldStyle, FixedClock, LocaleError,
    LocaleFormatter, SystemClock,
};
