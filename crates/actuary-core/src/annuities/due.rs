//! Annuity-due (payments in advance).

use log::{debug, trace};
use serde::Serialize;

use crate::error::{ensure_finite, ensure_nonzero_rate, ActuaryResult};
use crate::traits::Annuity;
use crate::types::{AnnuityKind, DiscountFactor, Rate, RateState};

/// An annuity-due: one unit paid at the start of each of `n` periods.
///
/// ```text
/// ä(n) = (1 - v^n) / (i·v)
/// s̈(n) = ((1 + i)^n - 1) / (i·v)
/// ```
///
/// Each payment is one period earlier than in the ordinary annuity, so
/// `ä(n) = (1 + i)·a(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DueAnnuity {
    state: RateState,
}

impl DueAnnuity {
    /// Creates an annuity-due.
    ///
    /// # Errors
    ///
    /// Returns `ActuaryError::InvalidParameter` for `interest <= -1` or
    /// negative `periods`.
    pub fn new(interest: Rate, periods: i64) -> ActuaryResult<Self> {
        let state = RateState::new(interest, periods)?;
        debug!("Created annuity-due ({state})");
        Ok(Self { state })
    }

    /// Returns the underlying rate state.
    #[must_use]
    pub fn state(&self) -> &RateState {
        &self.state
    }

    /// `i·v`, the effective rate of discount.
    fn divisor(&self) -> f64 {
        self.state.interest() * self.state.discount()
    }
}

impl Annuity for DueAnnuity {
    fn kind(&self) -> AnnuityKind {
        AnnuityKind::Due
    }

    fn present_value(&self) -> ActuaryResult<f64> {
        const OP: &str = "annuity-due present value";
        ensure_nonzero_rate(OP, self.state.interest())?;
        let n = self.state.finite_periods(OP)?;
        let pv = ensure_finite(OP, (1.0 - self.state.term_discount(n)) / self.divisor())?;
        trace!("ä({n}) at {} = {pv}", self.state.interest());
        Ok(pv)
    }

    fn future_value(&self) -> ActuaryResult<Option<f64>> {
        const OP: &str = "annuity-due future value";
        ensure_nonzero_rate(OP, self.state.interest())?;
        let n = self.state.finite_periods(OP)?;
        let fv = ensure_finite(OP, (self.state.accumulation(n) - 1.0) / self.divisor())?;
        trace!("s̈({n}) at {} = {fv}", self.state.interest());
        Ok(Some(fv))
    }

    fn interest(&self) -> Rate {
        self.state.interest()
    }

    fn set_interest(&mut self, interest: Rate) -> ActuaryResult<()> {
        self.state.set_interest(interest)
    }

    fn periods(&self) -> Option<u32> {
        self.state.periods()
    }

    fn set_periods(&mut self, periods: i64) -> ActuaryResult<()> {
        self.state.set_periods(periods)
    }

    fn discount(&self) -> DiscountFactor {
        self.state.discount()
    }
}
