//! Tagged annuity variant.

use serde::Serialize;

use super::{DueAnnuity, ImmediateAnnuity, ImmediatePerpetuity};
use crate::error::ActuaryResult;
use crate::traits::Annuity;
use crate::types::{AnnuityKind, DiscountFactor, Rate};

/// An annuity whose variant is selected at construction time.
///
/// Callers that only know the kind at runtime (for example from a
/// configuration file) hold an `AnnuityVariant` and use it through the
/// [`Annuity`] trait.
///
/// ```rust
/// use actuary_core::prelude::*;
///
/// let annuity = AnnuityVariant::new(AnnuityKind::Due, 0.1, 10).unwrap();
/// assert_eq!(annuity.kind(), AnnuityKind::Due);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnuityVariant {
    /// Ordinary annuity.
    Immediate(ImmediateAnnuity),
    /// Annuity-due.
    Due(DueAnnuity),
    /// Perpetuity-immediate.
    Perpetuity(ImmediatePerpetuity),
}

impl AnnuityVariant {
    /// Builds the variant named by `kind`.
    pub fn new(kind: AnnuityKind, interest: Rate, periods: i64) -> ActuaryResult<Self> {
        Ok(match kind {
            AnnuityKind::Immediate => Self::Immediate(ImmediateAnnuity::new(interest, periods)?),
            AnnuityKind::Due => Self::Due(DueAnnuity::new(interest, periods)?),
            AnnuityKind::Perpetuity => {
                Self::Perpetuity(ImmediatePerpetuity::new(interest, periods)?)
            }
        })
    }

    fn as_annuity(&self) -> &dyn Annuity {
        match self {
            Self::Immediate(a) => a,
            Self::Due(a) => a,
            Self::Perpetuity(a) => a,
        }
    }

    fn as_annuity_mut(&mut self) -> &mut dyn Annuity {
        match self {
            Self::Immediate(a) => a,
            Self::Due(a) => a,
            Self::Perpetuity(a) => a,
        }
    }
}

impl From<ImmediateAnnuity> for AnnuityVariant {
    fn from(annuity: ImmediateAnnuity) -> Self {
        Self::Immediate(annuity)
    }
}

impl From<DueAnnuity> for AnnuityVariant {
    fn from(annuity: DueAnnuity) -> Self {
        Self::Due(annuity)
    }
}

impl From<ImmediatePerpetuity> for AnnuityVariant {
    fn from(annuity: ImmediatePerpetuity) -> Self {
        Self::Perpetuity(annuity)
    }
}

impl Annuity for AnnuityVariant {
    fn kind(&self) -> AnnuityKind {
        self.as_annuity().kind()
    }

    fn present_value(&self) -> ActuaryResult<f64> {
        self.as_annuity().present_value()
    }

    fn future_value(&self) -> ActuaryResult<Option<f64>> {
        self.as_annuity().future_value()
    }

    fn interest(&self) -> Rate {
        self.as_annuity().interest()
    }

    fn set_interest(&mut self, interest: Rate) -> ActuaryResult<()> {
        self.as_annuity_mut().set_interest(interest)
    }

    fn periods(&self) -> Option<u32> {
        self.as_annuity().periods()
    }

    fn set_periods(&mut self, periods: i64) -> ActuaryResult<()> {
        self.as_annuity_mut().set_periods(periods)
    }

    fn discount(&self) -> DiscountFactor {
        self.as_annuity().discount()
    }
}
