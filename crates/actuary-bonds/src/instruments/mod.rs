//! Bond instruments.

mod bond;

pub use bond::{validate_amount, validate_yield_rate, Bond, BondBuilder};
