//! # Actuary Core
//!
//! Core types, traits, and annuity valuation for the Actuary library.
//!
//! This crate provides the foundational building blocks used throughout Actuary:
//!
//! - **Types**: [`RateState`](types::RateState), the interest / periods / discount triple
//! - **Traits**: [`Annuity`](traits::Annuity), the capability set of every annuity
//! - **Annuities**: ordinary annuities, annuities-due and perpetuities
//! - **Errors**: [`ActuaryError`], separating rejected inputs from undefined arithmetic
//!
//! ## Design Philosophy
//!
//! - **Validated State**: Invalid rates and terms are rejected when set, not when priced
//! - **Derived Discounting**: The discount factor always follows the interest rate
//! - **Explicit Absence**: Values that do not exist are `None`, never `NaN`
//!
//! ## Example
//!
//! ```rust
//! use actuary_core::prelude::*;
//!
//! let mut annuity = ImmediateAnnuity::new(0.1, 10).unwrap();
//! let pv = annuity.present_value().unwrap();
//! assert!((pv - 6.1446).abs() < 1e-4);
//!
//! annuity.set_interest(0.0).unwrap();
//! assert!(annuity.present_value().unwrap_err().is_arithmetic_undefined());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod annuities;
pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::annuities::{AnnuityVariant, DueAnnuity, ImmediateAnnuity, ImmediatePerpetuity};
    pub use crate::error::{ActuaryError, ActuaryResult};
    pub use crate::traits::Annuity;
    pub use crate::types::{AnnuityKind, DiscountFactor, Rate, RateState};
}

// Re-export commonly used types at crate root
pub use error::{ActuaryError, ActuaryResult};
pub use traits::Annuity;
pub use types::{AnnuityKind, RateState};
