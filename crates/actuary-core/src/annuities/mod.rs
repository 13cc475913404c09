//! Annuity variants.
//!
//! - [`ImmediateAnnuity`]: payments at the end of each period
//! - [`DueAnnuity`]: payments at the start of each period
//! - [`ImmediatePerpetuity`]: end-of-period payments without a final period
//! - [`AnnuityVariant`]: one of the above, chosen by [`AnnuityKind`](crate::types::AnnuityKind)

mod due;
mod immediate;
mod perpetuity;
mod variant;

pub use due::DueAnnuity;
pub use immediate::ImmediateAnnuity;
pub use perpetuity::ImmediatePerpetuity;
pub use variant::AnnuityVariant;
