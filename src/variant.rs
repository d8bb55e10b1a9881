//! Variant code generation
//!
//! Produces the canonical identifier string for a configuration snapshot:
//! service subtype, vehicle class, film tier, and (when a distinct
//! windshield tier is active) the windshield tier, upper-cased and joined
//! with `__`.
//!
//! The code is a cosmetic/debug identifier only. Pricing and gating never
//! consult it, and unset inputs simply produce empty segments.

use crate::types::{FilmTier, ServiceSubtype, VehicleClass};

/// Separator between variant code segments.
pub const SEGMENT_SEPARATOR: &str = "__";

/// Generate the variant code for a configuration snapshot.
///
/// `windshield_tier` is the distinct windshield grade and should only be
/// passed when windshield coverage is selected with its own tier; it
/// appends a fourth segment.
pub fn generate(
    service_subtype: Option<ServiceSubtype>,
    class: Option<VehicleClass>,
    tier: Option<FilmTier>,
    windshield_tier: Option<FilmTier>,
) -> String {
    let mut segments = vec![
        service_subtype.map(|s| s.to_string()).unwrap_or_default(),
        class.map(|c| c.to_string()).unwrap_or_default(),
        tier.map(|t| t.to_string()).unwrap_or_default(),
    ];
    if let Some(ws) = windshield_tier {
        segments.push(ws.to_string());
    }
    segments.join(SEGMENT_SEPARATOR).to_uppercase()
}
