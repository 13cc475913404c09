//! Annuity payment timing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which annuity variant a value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnuityKind {
    /// Payments at the end of each period (ordinary annuity).
    Immediate,
    /// Payments at the start of each period.
    Due,
    /// End-of-period payments that never stop.
    Perpetuity,
}

impl AnnuityKind {
    /// Returns true if the variant has a finite term and a future value.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        !matches!(self, Self::Perpetuity)
    }
}

impl fmt::Display for AnnuityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Immediate => "Immediate",
            Self::Due => "Due",
            Self::Perpetuity => "Perpetuity",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite() {
        assert!(AnnuityKind::Immediate.is_finite());
        assert!(AnnuityKind::Due.is_finite());
        assert!(!AnnuityKind::Perpetuity.is_finite());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&AnnuityKind::Due).unwrap();
        assert_eq!(json, "\"due\"");
        let kind: AnnuityKind = serde_json::from_str("\"perpetuity\"").unwrap();
        assert_eq!(kind, AnnuityKind::Perpetuity);
    }
}
