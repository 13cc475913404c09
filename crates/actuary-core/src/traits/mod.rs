//! Core traits for the Actuary library.
//!
//! - [`Annuity`]: the capability set shared by every annuity variant

use crate::error::ActuaryResult;
use crate::types::{interest_for_discount, AnnuityKind, DiscountFactor, Rate};

/// Trait for annuities of level unit payments.
///
/// Values are per unit payment: multiply by the payment amount to value a
/// concrete cash-flow stream.
///
/// The discount factor is always derived from the interest rate. Mutating the
/// rate through [`Annuity::set_interest`] or [`Annuity::set_discount`] keeps
/// both in step.
pub trait Annuity {
    /// Returns the variant tag.
    fn kind(&self) -> AnnuityKind;

    /// Present value of the payment stream.
    ///
    /// # Errors
    ///
    /// Returns `ActuaryError::ArithmeticUndefined` when the formula divides by
    /// a zero rate or produces a non-finite value.
    fn present_value(&self) -> ActuaryResult<f64>;

    /// Accumulated value at the end of the term.
    ///
    /// Returns `Ok(None)` when the variant has no future value.
    fn future_value(&self) -> ActuaryResult<Option<f64>>;

    /// Returns the interest rate per period.
    fn interest(&self) -> Rate;

    /// Sets the interest rate per period.
    fn set_interest(&mut self, interest: Rate) -> ActuaryResult<()>;

    /// Returns the number of periods, `None` when the term is unbounded.
    fn periods(&self) -> Option<u32>;

    /// Sets the number of periods.
    fn set_periods(&mut self, periods: i64) -> ActuaryResult<()>;

    /// Returns the single-period discount factor.
    fn discount(&self) -> DiscountFactor;

    /// Sets the discount factor by adjusting the interest rate.
    ///
    /// The implied rate `1 / discount - 1` goes through
    /// [`Annuity::set_interest`], so variant-specific rate rules still apply.
    fn set_discount(&mut self, discount: DiscountFactor) -> ActuaryResult<()> {
        let interest = interest_for_discount(discount)?;
        self.set_interest(interest)
    }
}
