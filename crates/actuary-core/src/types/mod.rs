//! Domain types for annuity valuation.

mod annuity_kind;
mod rate_state;

pub use annuity_kind::AnnuityKind;
pub use rate_state::{validate_interest, validate_periods, RateState};
pub(crate) use rate_state::interest_for_discount;

/// An effective rate per period, expressed as a decimal (0.05 = 5%).
pub type Rate = f64;

/// A single-period discount factor, `1 / (1 + rate)`.
pub type DiscountFactor = f64;
