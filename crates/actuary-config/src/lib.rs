//! Actuary Configuration Layer
//!
//! This crate describes instruments declaratively so that annuities and bonds
//! can be loaded from JSON or TOML documents, validated field by field, and
//! built into live values from `actuary-core` and `actuary-bonds`.
//!
//! # Features
//!
//! - **Annuity Configuration**: kind, interest rate and term
//! - **Bond Configuration**: par, redemption, coupon, yield and term, with par defaults
//! - **Validation**: every problem is reported with its field path
//! - **Loading**: JSON and TOML parsing with validation on load
//!
//! # Example
//!
//! ```rust
//! use actuary_config::{from_toml_str, InstrumentSet};
//!
//! let set: InstrumentSet = from_toml_str(r#"
//!     [[instruments]]
//!     type = "annuity"
//!     kind = "immediate"
//!     interest = 0.1
//!     periods = 10
//!
//!     [[instruments]]
//!     type = "bond"
//!     coupon_rate = 0.05
//!     yield_rate = 0.1
//!     periods = 100
//! "#).unwrap();
//!
//! let instruments = set.build().unwrap();
//! let annuity_pv = instruments[0].present_value().unwrap();
//! assert!((annuity_pv - 6.1446).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod instruments;
pub mod loader;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use instruments::{AnnuityConfig, BondConfig, Instrument, InstrumentConfig, InstrumentSet};
pub use loader::{from_json_str, from_toml_str, to_json_string, to_toml_string};
