//! Ordinary annuity (payments in arrears).

use log::{debug, trace};
use serde::Serialize;

use crate::error::{ensure_finite, ensure_nonzero_rate, ActuaryResult};
use crate::traits::Annuity;
use crate::types::{AnnuityKind, DiscountFactor, Rate, RateState};

/// An annuity-immediate: one unit paid at the end of each of `n` periods.
///
/// ```text
/// a(n) = (1 - v^n) / i
/// s(n) = ((1 + i)^n - 1) / i
/// ```
///
/// # Example
///
/// ```rust
/// use actuary_core::prelude::*;
///
/// let annuity = ImmediateAnnuity::new(0.1, 10).unwrap();
/// let pv = annuity.present_value().unwrap();
/// assert!((pv - 6.144567).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImmediateAnnuity {
    state: RateState,
}

impl ImmediateAnnuity {
    /// Creates an ordinary annuity.
    ///
    /// # Errors
    ///
    /// Returns `ActuaryError::InvalidParameter` for `interest <= -1` or
    /// negative `periods`.
    pub fn new(interest: Rate, periods: i64) -> ActuaryResult<Self> {
        let state = RateState::new(interest, periods)?;
        debug!("Created immediate annuity ({state})");
        Ok(Self { state })
    }

    /// Returns the underlying rate state.
    #[must_use]
    pub fn state(&self) -> &RateState {
        &self.state
    }
}

impl Annuity for ImmediateAnnuity {
    fn kind(&self) -> AnnuityKind {
        AnnuityKind::Immediate
    }

    fn present_value(&self) -> ActuaryResult<f64> {
        const OP: &str = "immediate annuity present value";
        let i = self.state.interest();
        ensure_nonzero_rate(OP, i)?;
        let n = self.state.finite_periods(OP)?;
        let pv = ensure_finite(OP, (1.0 - self.state.term_discount(n)) / i)?;
        trace!("a({n}) at {i} = {pv}");
        Ok(pv)
    }

    fn future_value(&self) -> ActuaryResult<Option<f64>> {
        const OP: &str = "immediate annuity future value";
        let i = self.state.interest();
        ensure_nonzero_rate(OP, i)?;
        let n = self.state.finite_periods(OP)?;
        let fv = ensure_finite(OP, (self.state.accumulation(n) - 1.0) / i)?;
        trace!("s({n}) at {i} = {fv}");
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
