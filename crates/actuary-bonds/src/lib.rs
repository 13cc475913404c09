//! # Actuary Bonds
//!
//! Bond pricing for the Actuary library.
//!
//! A [`Bond`](instruments::Bond) owns an annuity-due at its yield rate and
//! prices its coupon leg through it. The redemption amount is discounted over
//! the full term with the standard factor `(1 + y)^(-n)`.
//!
//! ## Example
//!
//! ```rust
//! use actuary_bonds::prelude::*;
//!
//! let bond = BondBuilder::new()
//!     .coupon_rate(0.05)
//!     .yield_rate(0.05)
//!     .periods(20)
//!     .build()
//!     .unwrap();
//!
//! // Coupons paid in advance lift the price above par when yield equals coupon.
//! assert!(bond.price().unwrap() > 100.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod instruments;

/// Prelude module for convenient imports.
pub mod prelude {
    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::{Bond, BondBuilder};
}

pub use error::{BondError, BondResult};
pub use instruments::{validate_amount, validate_yield_rate, Bond, BondBuilder};
