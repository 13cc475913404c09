//! Level-coupon bond priced off an annuity-due.

use log::{debug, trace};
use serde::Serialize;

use actuary_core::error::ensure_finite;
use actuary_core::prelude::*;
use actuary_core::types::validate_periods;

use crate::error::{BondError, BondResult};

/// A bond paying a level coupon for `periods` periods and a redemption amount
/// at the end of the term.
///
/// The coupon leg is valued as an annuity-due at the yield rate, and the
/// redemption amount is discounted over the full term:
///
/// ```text
/// P = F·c·ä(n) + C·v^n,    v = 1 / (1 + y)
/// ```
///
/// where `F` is the par value, `c` the coupon rate per period, `C` the
/// redemption value and `y` the yield rate per period.
///
/// All fields are fixed at construction.
///
/// # Example
///
/// ```rust
/// use actuary_bonds::prelude::*;
///
/// let bond = Bond::new(100.0, 100.0, 0.05, 0.1, 100).unwrap();
/// let price = bond.price().unwrap();
/// assert!((price - 55.003265).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bond {
    /// Face amount on which coupons accrue.
    par_value: f64,

    /// Amount repaid at the end of the term.
    redemption_value: f64,

    /// Coupon rate per period as decimal (0.05 = 5%).
    coupon_rate: f64,

    /// Yield rate per period as decimal.
    yield_rate: f64,

    /// Number of coupon periods.
    periods: u32,

    /// Coupon annuity at the yield rate.
    #[serde(skip)]
    annuity: DueAnnuity,
}

impl Bond {
    /// Creates a bond.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if an amount or the coupon rate is negative or not
    ///   finite, if `yield_rate < -1` or is not finite, or if `periods` is negative
    /// - `ArithmeticUndefined` if `yield_rate == -1`, which has no discount factor
    pub fn new(
        par_value: f64,
        redemption_value: f64,
        coupon_rate: f64,
        yield_rate: f64,
        periods: i64,
    ) -> BondResult<Self> {
        validate_amount("par_value", par_value)?;
        validate_amount("redemption_value", redemption_value)?;
        validate_amount("coupon_rate", coupon_rate)?;
        validate_yield_rate(yield_rate)?;
        let periods = validate_periods(periods)?;

        let annuity = DueAnnuity::new(yield_rate, i64::from(periods))?;

        debug!(
            "Created bond: par={par_value}, redemption={redemption_value}, \
             coupon={coupon_rate}, yield={yield_rate}, periods={periods}"
        );

        Ok(Self {
            par_value,
            redemption_value,
            coupon_rate,
            yield_rate,
            periods,
            annuity,
        })
    }

    /// Returns the par value.
    #[must_use]
    pub fn par_value(&self) -> f64 {
        self.par_value
    }

    /// Returns the redemption value.
    #[must_use]
    pub fn redemption_value(&self) -> f64 {
        self.redemption_value
    }

    /// Returns the coupon rate per period.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the yield rate per period.
    #[must_use]
    pub fn yield_rate(&self) -> f64 {
        self.yield_rate
    }

    /// Returns the number of coupon periods.
    #[must_use]
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// Returns the coupon amount paid each period.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.par_value * self.coupon_rate
    }

    /// Present value of the coupon leg, `F·c·ä(n)`.
    ///
    /// A bond without coupons has a coupon leg worth zero at any yield.
    pub fn coupon_value(&self) -> BondResult<f64> {
        let coupon = self.coupon();
        if coupon == 0.0 {
            return Ok(0.0);
        }
        Ok(coupon * self.annuity.present_value()?)
    }

    /// Present value of the redemption amount, `C·(1 + y)^(-n)`.
    pub fn redemption_present_value(&self) -> BondResult<f64> {
        let term_discount = self.annuity.discount().powf(f64::from(self.periods));
        Ok(ensure_finite(
            "bond redemption value",
            self.redemption_value * term_discount,
        )?)
    }

    /// Price of the bond at its yield rate.
    pub fn price(&self) -> BondResult<f64> {
        let coupons = self.coupon_value()?;
        let redemption = self.redemption_present_value()?;
        trace!("coupon leg = {coupons}, redemption leg = {redemption}");

        let price = ensure_finite("bond price", coupons + redemption)?;
        debug!("Priced bond at yield {}: {price}", self.yield_rate);
        Ok(price)
    }
}

/// Checks that a bond amount or coupon rate is finite and non-negative.
pub fn validate_amount(name: &'static str, value: f64) -> ActuaryResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ActuaryError::invalid_parameter(
            name,
            value,
            "must be finite and non-negative",
        ));
    }
    Ok(())
}

/// Checks that a yield rate has a discount factor.
///
/// A yield of exactly -1 is `ArithmeticUndefined`; anything below it, or
/// non-finite, is `InvalidParameter`.
pub fn validate_yield_rate(yield_rate: f64) -> ActuaryResult<()> {
    if yield_rate == -1.0 {
        return Err(ActuaryError::arithmetic_undefined(
            "bond discount factor",
            "1 / (1 + yield_rate) is undefined at a yield of -100%",
        ));
    }
    if !yield_rate.is_finite() || yield_rate < -1.0 {
        return Err(ActuaryError::invalid_parameter(
            "yield_rate",
            yield_rate,
            "must be finite and greater than -1",
        ));
    }
    Ok(())
}

/// Builder for bonds.
///
/// Par and redemption values default to 100.
#[derive(Debug, Clone)]
pub struct BondBuilder {
    par_value: f64,
    redemption_value: f64,
    coupon_rate: Option<f64>,
    yield_rate: Option<f64>,
    periods: Option<i64>,
}

impl Default for BondBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BondBuilder {
    /// Creates a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            par_value: 100.0,
            redemption_value: 100.0,
            coupon_rate: None,
            yield_rate: None,
            periods: None,
        }
    }

    /// Sets the par value.
    #[must_use]
    pub fn par_value(mut self, par_value: f64) -> Self {
        self.par_value = par_value;
        self
    }

    /// Sets the redemption value.
    #[must_use]
    pub fn redemption_value(mut self, redemption_value: f64) -> Self {
        self.redemption_value = redemption_value;
        self
    }

    /// Sets the coupon rate per period.
    #[must_use]
    pub fn coupon_rate(mut self, coupon_rate: f64) -> Self {
        self.coupon_rate = Some(coupon_rate);
        self
    }

    /// Sets the yield rate per period.
    #[must_use]
    pub fn yield_rate(mut self, yield_rate: f64) -> Self {
        self.yield_rate = Some(yield_rate);
        self
    }

    /// Sets the number of coupon periods.
    #[must_use]
    pub fn periods(mut self, periods: i64) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Builds the bond.
    pub fn build(self) -> BondResult<Bond> {
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let yield_rate = self
            .yield_rate
            .ok_or_else(|| BondError::missing_field("yield_rate"))?;
        let periods = self
            .periods
            .ok_or_else(|| BondError::missing_field("periods"))?;

        Bond::new(
            self.par_value,
            self.redemption_value,
            coupon_rate,
            yield_rate,
            periods,
        )
    }
}
