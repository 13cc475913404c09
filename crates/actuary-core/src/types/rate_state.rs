//! The interest / periods / discount triple shared by every annuity.

use serde::Serialize;
use std::fmt;

use super::{DiscountFactor, Rate};
use crate::error::{ActuaryError, ActuaryResult};

/// Rate state of an annuity.
///
/// Holds the effective per-period interest rate `i`, the number of periods `n`
/// and the single-period discount factor `v = 1 / (1 + i)`.
///
/// The discount factor is derived from the interest rate and is recomputed on
/// every mutation of the rate, so the two can never disagree.
///
/// # Example
///
/// ```rust
/// use actuary_core::types::RateState;
///
/// let mut state = RateState::new(0.25, 4).unwrap();
/// assert_eq!(state.discount(), 0.8);
///
/// state.set_interest(1.0).unwrap();
/// assert_eq!(state.discount(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateState {
    /// Effective rate per period (0.05 = 5%).
    interest: Rate,
    /// Number of periods, `None` once the horizon has been cleared.
    periods: Option<u32>,
    /// `1 / (1 + interest)`.
    discount: DiscountFactor,
}

impl RateState {
    /// Creates a rate state, validating both inputs.
    ///
    /// # Errors
    ///
    /// Returns `ActuaryError::InvalidParameter` if `interest` is not finite or
    /// is `<= -1`, or if `periods` is negative or does not fit in a `u32`.
    pub fn new(interest: Rate, periods: i64) -> ActuaryResult<Self> {
        validate_interest(interest)?;
        let periods = validate_periods(periods)?;
        Ok(Self {
            interest,
            periods: Some(periods),
            discount: discount_for(interest),
        })
    }

    /// Returns the interest rate per period.
    #[must_use]
    pub fn interest(&self) -> Rate {
        self.interest
    }

    /// Returns the number of periods, or `None` for an unbounded horizon.
    #[must_use]
    pub fn periods(&self) -> Option<u32> {
        self.periods
    }

    /// Returns the single-period discount factor.
    #[must_use]
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }

    /// Sets the interest rate and refreshes the discount factor.
    pub fn set_interest(&mut self, interest: Rate) -> ActuaryResult<()> {
        validate_interest(interest)?;
        self.interest = interest;
        self.discount = discount_for(interest);
        Ok(())
    }

    /// Sets the number of periods.
    pub fn set_periods(&mut self, periods: i64) -> ActuaryResult<()> {
        self.periods = Some(validate_periods(periods)?);
        Ok(())
    }

    /// Clears the horizon so that [`RateState::periods`] reports `None`.
    pub fn clear_periods(&mut self) {
        self.periods = None;
    }

    /// Sets the discount factor by back-solving the interest rate.
    ///
    /// `interest = 1 / discount - 1`, so any positive finite discount factor
    /// maps to a rate above -1.
    ///
    /// # Errors
    ///
    /// Returns `ActuaryError::InvalidParameter` if `discount` is not finite or
    /// not strictly positive.
    pub fn set_discount(&mut self, discount: DiscountFactor) -> ActuaryResult<()> {
        self.set_interest(interest_for_discount(discount)?)
    }

    /// Returns the number of periods or fails for an unbounded horizon.
    pub(crate) fn finite_periods(&self, operation: &'static str) -> ActuaryResult<u32> {
        self.periods.ok_or_else(|| {
            ActuaryError::arithmetic_undefined(operation, "annuity has no finite horizon")
        })
    }

    /// Accumulation factor over the full term, `(1 + i)^n`.
    pub(crate) fn accumulation(&self, periods: u32) -> f64 {
        (1.0 + self.interest).powf(f64::from(periods))
    }

    /// Discount factor over the full term, `v^n`.
    pub(crate) fn term_discount(&self, periods: u32) -> f64 {
        self.discount.powf(f64::from(periods))
    }
}

impl fmt::Display for RateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.periods {
            Some(n) => write!(f, "i={:.6} n={} v={:.6}", self.interest, n, self.discount),
            None => write!(f, "i={:.6} n=inf v={:.6}", self.interest, self.discount),
        }
    }
}

fn discount_for(interest: Rate) -> DiscountFactor {
    1.0 / (1.0 + interest)
}

/// Converts a discount factor back to the interest rate it implies.
pub(crate) fn interest_for_discount(discount: DiscountFactor) -> ActuaryResult<Rate> {
    if !discount.is_finite() || discount <= 0.0 {
        return Err(ActuaryError::invalid_parameter(
            "discount",
            discount,
            "must be finite and greater than 0",
        ));
    }
    Ok(1.0 / discount - 1.0)
}

/// Checks that `interest` is finite and greater than -1.
pub fn validate_interest(interest: Rate) -> ActuaryResult<()> {
    if !interest.is_finite() {
        return Err(ActuaryError::invalid_parameter(
            "interest",
            interest,
            "must be finite",
        ));
    }
    if interest <= -1.0 {
        return Err(ActuaryError::invalid_parameter(
            "interest",
            interest,
            "must be greater than -1 for the discount factor to exist",
        ));
    }
    Ok(())
}

/// Checks that `periods` is non-negative and fits a `u32`, returning it as one.
pub fn validate_periods(periods: i64) -> ActuaryResult<u32> {
    if periods < 0 {
        return Err(ActuaryError::invalid_parameter(
            "periods",
            periods as f64,
            "must be non-negative",
        ));
    }
    u32::try_from(periods).map_err(|_| {
        ActuaryError::invalid_parameter("periods", periods as f64, "exceeds u32::MAX")
    })
}
