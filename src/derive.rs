//! Derivation engine
//!
//! A single pure recompute step run after every mutation touching the
//! vehicle, coverage, or film state. Derived fields are never set
//! directly; whatever is read must equal what [`recompute`] produces from
//! the current snapshot, so the aggregate stays consistent by
//! construction.

use serde::{Deserialize, Serialize};

use crate::booking::{FilmSelection, VehicleProfile};
use crate::pricing;
use crate::types::{CoverageTag, FilmTier, ServiceSubtype};
use crate::variant;

/// Outputs of the derivation engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Derived {
    /// Service subtype classified from the coverage set
    pub service_subtype: Option<ServiceSubtype>,
    /// Membership flag: sun strip selected
    pub has_sun_strip: bool,
    /// Membership flag: windshield selected
    pub has_windshield: bool,
    /// Estimated total in whole USD; zero while the quote is incomplete
    pub estimated_price: u32,
    /// Canonical configuration identifier (cosmetic only)
    pub variant_code: String,
}

/// Recompute all derived fields from a model snapshot.
pub fn recompute(
    vehicle: &VehicleProfile,
    coverage: &[CoverageTag],
    film: &FilmSelection,
) -> Derived {
    let service_subtype = classify_service(coverage);
    let has_sun_strip = coverage.contains(&CoverageTag::SunStrip);
    let has_windshield = coverage.contains(&CoverageTag::Windshield);

    let estimated_price = estimate_price(vehicle, coverage, film);

    // The windshield segment only participates when windshield coverage is
    // selected with its own distinct grade
    let active_windshield_tier = if has_windshield { film.windshield_tier } else { None };
    let variant_code = variant::generate(
        service_subtype,
        vehicle.class,
        film.tier,
        active_windshield_tier,
    );

    Derived {
        service_subtype,
        has_sun_strip,
        has_windshield,
        estimated_price,
        variant_code,
    }
}

/// Classify the service subtype from the coverage set.
///
/// Full tint requires both front-door coverage and sides/rear coverage;
/// a lone windshield is its own service; any other non-empty set is a
/// partial tint.
pub fn classify_service(coverage: &[CoverageTag]) -> Option<ServiceSubtype> {
    let has_front = coverage.iter().any(|t| t.is_front_coverage());
    let has_rear = coverage.iter().any(|t| t.is_rear_coverage());

    if has_front && has_rear {
        Some(ServiceSubtype::FullTint)
    } else if coverage == [CoverageTag::Windshield] {
        Some(ServiceSubtype::WindshieldOnly)
    } else if !coverage.is_empty() {
        Some(ServiceSubtype::PartialTint)
    } else {
        None
    }
}

/// Sum the price-book contribution of every selected tag.
///
/// The windshield tag uses the distinct windshield tier when one was
/// chosen; everything else uses the primary tier. Misses contribute zero.
pub fn estimate_price(
    vehicle: &VehicleProfile,
    coverage: &[CoverageTag],
    film: &FilmSelection,
) -> u32 {
    let Some(class) = vehicle.class else {
        return 0;
    };

    coverage
        .iter()
        .map(|&tag| {
            let tier = applicable_tier(tag, film);
            pricing::contribution(tag, class, vehicle.subtype, tier)
        })
        .sum()
}

/// The film tier that applies to a given tag under the current selection.
fn applicable_tier(tag: CoverageTag, film: &FilmSelection) -> Option<FilmTier> {
    if tag == CoverageTag::Windshield {
        film.windshield_tier.or(film.tier)
    } else {
        film.tier
    }
}

/// Estimated service duration in minutes for scheduling hints.
pub fn service_duration_min(coverage: &[CoverageTag]) -> u32 {
    let mut minutes = 0;
    if coverage.contains(&CoverageTag::SidesRear) {
        minutes += 90;
    }
    if coverage.contains(&CoverageTag::Windshield) {
        minutes += 60;
    }
    if coverage.contains(&CoverageTag::SunStrip) {
        minutes += 15;
    }
    minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{VehicleClass, VehicleSubtype};

    fn sedan() -> VehicleProfile {
        let mut v = VehicleProfile::default();
        v.class = Some(VehicleClass::Car);
        v.subtype = Some(VehicleSubtype::Sedan);
        v
    }

    fn film(tier: Option<FilmTier>) -> FilmSelection {
        FilmSelection {
            tier,
            ..FilmSelection::default()
        }
    }

    #[test]
    fn test_empty_set_derives_nothing() {
        let d = recompute(&sedan(), &[], &film(None));
        assert_eq!(d.service_subtype, None);
        assert_eq!(d.estimated_price, 0);
        assert!(!d.has_sun_strip);
        assert!(!d.has_windshield);
    }

    #[test]
    fn test_windshield_only_classification() {
        assert_eq!(
            classify_service(&[CoverageTag::Windshield]),
            Some(ServiceSubtype::WindshieldOnly)
        );
        // Windshield plus anything else is partial
        assert_eq!(
            classify_service(&[CoverageTag::Windshield, CoverageTag::SunStrip]),
            Some(ServiceSubtype::PartialTint)
        );
    }

    #[test]
    fn test_full_tint_requires_front_and_rear() {
        assert_eq!(
            classify_service(&[
                CoverageTag::FactoryMatchFrontDoors,
                CoverageTag::SidesRear
            ]),
            Some(ServiceSubtype::FullTint)
        );
        // Standard-cab split pair also counts as full coverage
        assert_eq!(
            classify_service(&[CoverageTag::SideWindows, CoverageTag::RearGlass]),
            Some(ServiceSubtype::FullTint)
        );
        assert_eq!(
            classify_service(&[CoverageTag::SidesRear]),
            Some(ServiceSubtype::PartialTint)
        );
    }

    #[test]
    fn test_price_example_from_rate_card() {
        let d = recompute(&sedan(), &[CoverageTag::SidesRear], &film(Some(FilmTier::Xr)));
        assert_eq!(d.estimated_price, 399);

        let d = recompute(
            &sedan(),
            &[CoverageTag::SidesRear],
            &film(Some(FilmTier::XrPlus)),
        );
        assert_eq!(d.estimated_price, 599);
    }

    #[test]
    fn test_sun_strip_prices_without_tier() {
        let d = recompute(&sedan(), &[CoverageTag::SunStrip], &film(None));
        assert_eq!(d.estimated_price, 75);
        assert!(d.has_sun_strip);
    }

    #[test]
    fn test_windshield_uses_distinct_tier_when_set() {
        let mut f = film(Some(FilmTier::Cs));
        f.windshield_tier = Some(FilmTier::XrPlus);
        let d = recompute(
            &sedan(),
            &[CoverageTag::SidesRear, CoverageTag::Windshield],
            &f,
        );
        // 299 sides/rear at CS + 349 windshield at XR_PLUS
        assert_eq!(d.estimated_price, 299 + 349);
        assert!(d.variant_code.ends_with("__XR_PLUS"));
    }

    #[test]
    fn test_windshield_tier_ignored_when_windshield_unselected() {
        let mut f = film(Some(FilmTier::Cs));
        f.windshield_tier = Some(FilmTier::XrPlus);
        let d = recompute(&sedan(), &[CoverageTag::SidesRear], &f);
        assert_eq!(d.variant_code, "PARTIAL_TINT__CAR__CS");
    }

    #[test]
    fn test_price_with_no_vehicle_class_is_zero() {
        let d = recompute(
            &VehicleProfile::default(),
            &[CoverageTag::SidesRear],
            &film(Some(FilmTier::Xr)),
        );
        assert_eq!(d.estimated_price, 0);
    }

    #[test]
    fn test_duration_hint_sums_regions() {
        let minutes = service_duration_min(&[
            CoverageTag::SidesRear,
            CoverageTag::Windshield,
            CoverageTag::SunStrip,
        ]);
        assert_eq!(minutes, 165);
        assert_eq!(service_duration_min(&[]), 0);
    }
}
