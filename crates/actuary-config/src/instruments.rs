//! Instrument configuration types.
//!
//! These are the deserializable descriptions of instruments. Each one
//! validates its fields with [`Validate`] and turns into a live instrument
//! with `build()`.

use log::debug;
use serde::{Deserialize, Serialize};

use actuary_bonds::{validate_amount, validate_yield_rate, Bond, BondBuilder};
use actuary_core::prelude::*;
use actuary_core::types::{validate_interest, validate_periods};

use crate::error::{ConfigResult, Validate, ValidationError};

// =============================================================================
// ANNUITY CONFIGURATION
// =============================================================================

/// Annuity configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnuityConfig {
    /// Payment timing.
    pub kind: AnnuityKind,

    /// Effective interest rate per period.
    pub interest: f64,

    /// Number of periods. Only a perpetuity may leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<i64>,
}

impl AnnuityConfig {
    /// Creates an annuity configuration.
    pub fn new(kind: AnnuityKind, interest: f64, periods: i64) -> Self {
        Self {
            kind,
            interest,
            periods: Some(periods),
        }
    }

    /// Creates a perpetuity configuration without a period count.
    pub fn perpetuity(interest: f64) -> Self {
        Self {
            kind: AnnuityKind::Perpetuity,
            interest,
            periods: None,
        }
    }

    /// Validates and builds the annuity.
    pub fn build(&self) -> ConfigResult<AnnuityVariant> {
        self.validate_or_error()?;
        let annuity = match self.periods {
            Some(periods) => AnnuityVariant::new(self.kind, self.interest, periods)?,
            None => ImmediatePerpetuity::unbounded(self.interest)?.into(),
        };
        debug!("Built {} annuity from configuration", self.kind);
        Ok(annuity)
    }
}

impl Validate for AnnuityConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let interest = if self.kind == AnnuityKind::Perpetuity {
            ImmediatePerpetuity::validate_interest(self.interest)
        } else {
            validate_interest(self.interest)
        };
        record(&mut errors, "interest", interest);

        match self.periods {
            Some(periods) => record(&mut errors, "periods", validate_periods(periods)),
            None if self.kind.is_finite() => errors.push(ValidationError::new(
                "periods",
                "required for finite annuities",
            )),
            None => {}
        }
        errors
    }
}

// =============================================================================
// BOND CONFIGURATION
// =============================================================================

/// Bond configuration.
///
/// Par and redemption values default to 100 when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondConfig {
    /// Optional label for the bond.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Par value.
    #[serde(default = "default_face")]
    pub par_value: f64,

    /// Redemption value.
    #[serde(default = "default_face")]
    pub redemption_value: f64,

    /// Coupon rate per period.
    pub coupon_rate: f64,

    /// Yield rate per period.
    pub yield_rate: f64,

    /// Number of coupon periods.
    pub periods: i64,
}

fn default_face() -> f64 {
    100.0
}

impl BondConfig {
    /// Creates a bond configuration with par and redemption of 100.
    pub fn new(coupon_rate: f64, yield_rate: f64, periods: i64) -> Self {
        Self {
            name: None,
            par_value: default_face(),
            redemption_value: default_face(),
            coupon_rate,
            yield_rate,
            periods,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the par value.
    #[must_use]
    pub fn with_par_value(mut self, par_value: f64) -> Self {
        self.par_value = par_value;
        self
    }

    /// Sets the redemption value.
    #[must_use]
    pub fn with_redemption_value(mut self, redemption_value: f64) -> Self {
        self.redemption_value = redemption_value;
        self
    }

    /// Validates and builds the bond.
    pub fn build(&self) -> ConfigResult<Bond> {
        self.validate_or_error()?;
        let bond = BondBuilder::new()
            .par_value(self.par_value)
            .redemption_value(self.redemption_value)
            .coupon_rate(self.coupon_rate)
            .yield_rate(self.yield_rate)
            .periods(self.periods)
            .build()?;
        debug!(
            "Built bond {} from configuration",
            self.name.as_deref().unwrap_or("<unnamed>")
        );
        Ok(bond)
    }
}

impl Validate for BondConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("par_value", self.par_value),
            ("redemption_value", self.redemption_value),
            ("coupon_rate", self.coupon_rate),
        ] {
            record(&mut errors, field, validate_amount(field, value));
        }
        record(&mut errors, "yield_rate", validate_yield_rate(self.yield_rate));
        record(&mut errors, "periods", validate_periods(self.periods));
        errors
    }
}

/// Records the rejection, if any, under `field`.
fn record<T>(errors: &mut Vec<ValidationError>, field: &str, result: ActuaryResult<T>) {
    if let Err(err) = result {
        errors.push(ValidationError::from_rejection(field, &err));
    }
}

// =============================================================================
// INSTRUMENTS
// =============================================================================

/// Configuration of any supported instrument, tagged by `type`.
///
/// ```json
/// { "type": "annuity", "kind": "due", "interest": 0.05, "periods": 10 }
/// { "type": "bond", "coupon_rate": 0.05, "yield_rate": 0.04, "periods": 20 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstrumentConfig {
    /// An annuity.
    Annuity(AnnuityConfig),
    /// A bond.
    Bond(BondConfig),
}

impl InstrumentConfig {
    /// Validates and builds the instrument.
    pub fn build(&self) -> ConfigResult<Instrument> {
        Ok(match self {
            Self::Annuity(config) => Instrument::Annuity(config.build()?),
            Self::Bond(config) => Instrument::Bond(config.build()?),
        })
    }
}

impl Validate for InstrumentConfig {
    fn validate(&self) -> Vec<ValidationError> {
        match self {
            Self::Annuity(config) => config.validate(),
            Self::Bond(config) => config.validate(),
        }
    }
}

impl From<AnnuityConfig> for InstrumentConfig {
    fn from(config: AnnuityConfig) -> Self {
        Self::Annuity(config)
    }
}

impl From<BondConfig> for InstrumentConfig {
    fn from(config: BondConfig) -> Self {
        Self::Bond(config)
    }
}

/// A list of instrument configurations.
///
/// In TOML each entry is an `[[instruments]]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSet {
    /// The configured instruments, in file order.
    #[serde(default)]
    pub instruments: Vec<InstrumentConfig>,
}

impl InstrumentSet {
    /// Validates every entry and builds the instruments in order.
    pub fn build(&self) -> ConfigResult<Vec<Instrument>> {
        self.validate_or_error()?;
        self.instruments.iter().map(InstrumentConfig::build).collect()
    }
}

impl Validate for InstrumentSet {
    fn validate(&self) -> Vec<ValidationError> {
        self.instruments
            .iter()
            .enumerate()
            .flat_map(|(index, config)| {
                let prefix = format!("instruments[{index}]");
                config
                    .validate()
                    .into_iter()
                    .map(move |err| err.nested(&prefix))
            })
            .collect()
    }
}

/// A live instrument built from configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Instrument {
    /// An annuity.
    Annuity(AnnuityVariant),
    /// A bond.
    Bond(Bond),
}

impl Instrument {
    /// Present value: the annuity value per unit payment, or the bond price.
    pub fn present_value(&self) -> ConfigResult<f64> {
        match self {
            Self::Annuity(annuity) => Ok(annuity.present_value()?),
            Self::Bond(bond) => Ok(bond.price()?),
        }
    }
}
