//! Perpetuity-immediate.

use log::{debug, warn};
use serde::Serialize;

use crate::error::{ensure_finite, ActuaryError, ActuaryResult};
use crate::traits::Annuity;
use crate::types::{validate_interest, AnnuityKind, DiscountFactor, Rate, RateState};

/// A perpetuity-immediate: one unit paid at the end of every period, forever.
///
/// `a(∞) = 1 / i`. The geometric series only converges for `i > 0`, so the
/// rate is validated more strictly than for finite annuities.
///
/// A perpetuity has no finite horizon. Any call to
/// [`Annuity::set_periods`] discards its argument and clears the period
/// count, after which [`Annuity::periods`] reports `None`. The future value
/// is never defined.
///
/// # Example
///
/// ```rust
/// use actuary_core::prelude::*;
///
/// let mut perpetuity = ImmediatePerpetuity::new(0.1, 10).unwrap();
/// assert_eq!(perpetuity.present_value().unwrap(), 10.0);
/// assert_eq!(perpetuity.future_value().unwrap(), None);
///
/// perpetuity.set_periods(5).unwrap();
/// assert_eq!(perpetuity.periods(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImmediatePerpetuity {
    state: RateState,
}

impl ImmediatePerpetuity {
    /// Creates a perpetuity.
    ///
    /// The period count is kept until the first call to `set_periods`.
    ///
    /// # Errors
    ///
    /// Returns `ActuaryError::InvalidParameter` if `interest <= 0` or
    /// `periods` is negative.
    pub fn new(interest: Rate, periods: i64) -> ActuaryResult<Self> {
        Self::validate_interest(interest)?;
        let state = RateState::new(interest, periods)?;
        debug!("Created perpetuity ({state})");
        Ok(Self { state })
    }

    /// Creates a perpetuity with no period count at all.
    ///
    /// # Errors
    ///
    /// Returns `ActuaryError::InvalidParameter` if `interest <= 0`.
    pub fn unbounded(interest: Rate) -> ActuaryResult<Self> {
        let mut perpetuity = Self::new(interest, 0)?;
        perpetuity.state.clear_periods();
        Ok(perpetuity)
    }

    /// Checks that `interest` is a finite, strictly positive rate.
    pub fn validate_interest(interest: Rate) -> ActuaryResult<()> {
        validate_interest(interest)?;
        if interest <= 0.0 {
            return Err(ActuaryError::invalid_parameter(
                "interest",
                interest,
                "perpetuity requires a strictly positive rate to converge",
            ));
        }
        Ok(())
    }

    /// Returns the underlying rate state.
    #[must_use]
    pub fn state(&self) -> &RateState {
        &self.state
    }
}

impl Annuity for ImmediatePerpetuity {
    fn kind(&self) -> AnnuityKind {
        AnnuityKind::Perpetuity
    }

    fn present_value(&self) -> ActuaryResult<f64> {
        ensure_finite("perpetuity present value", 1.0 / self.state.interest())
    }

    fn future_value(&self) -> ActuaryResult<Option<f64>> {
        Ok(None)
    }

    fn interest(&self) -> Rate {
        self.state.interest()
    }

    fn set_interest(&mut self, interest: Rate) -> ActuaryResult<()> {
        Self::validate_interest(interest)?;
        self.state.set_interest(interest)
    }

    fn periods(&self) -> Option<u32> {
        self.state.periods()
    }

    fn set_periods(&mut self, periods: i64) -> ActuaryResult<()> {
        warn!("Perpetuity has no finite term; discarding periods = {periods}");
        self.state.clear_periods();
        Ok(())
    }

    fn discount(&self) -> DiscountFactor {
        self.state.discount()
    }
}
