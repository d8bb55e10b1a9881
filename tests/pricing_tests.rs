//! Price book integration tests
//!
//! Exercises the published rate card through the full derivation path:
//! tag → vehicle key (specific, then class fallback) → tier → amount,
//! with silent zero on every miss.

use tintbook::booking::BookingConfig;
use tintbook::pricing;
use tintbook::types::{CoverageTag, FilmTier, VehicleClass, VehicleSubtype};

fn booking(class: VehicleClass, subtype: Option<VehicleSubtype>) -> BookingConfig {
    let mut cfg = BookingConfig::new();
    cfg.set_vehicle_class(class);
    if let Some(sub) = subtype {
        cfg.set_vehicle_subtype(sub);
    }
    cfg
}

#[test]
fn test_sedan_rate_card_examples() {
    let mut cfg = booking(VehicleClass::Car, Some(VehicleSubtype::Sedan));
    cfg.toggle_coverage(CoverageTag::SidesRear);

    cfg.set_film_tier(FilmTier::Xr);
    assert_eq!(cfg.derived().estimated_price, 399);

    // Switching only the tier moves the estimate along the card
    cfg.set_film_tier(FilmTier::XrPlus);
    assert_eq!(cfg.derived().estimated_price, 599);
}

#[test]
fn test_specific_key_beats_class_fallback() {
    let mut convertible = booking(VehicleClass::Car, Some(VehicleSubtype::Convertible));
    convertible.toggle_coverage(CoverageTag::SidesRear);
    convertible.set_film_tier(FilmTier::XrPlus);
    assert_eq!(convertible.derived().estimated_price, 499);

    let mut coupe = booking(VehicleClass::Car, Some(VehicleSubtype::Coupe));
    coupe.toggle_coverage(CoverageTag::SidesRear);
    coupe.set_film_tier(FilmTier::XrPlus);
    assert_eq!(coupe.derived().estimated_price, 599);
}

#[test]
fn test_truck_cab_pricing_spread() {
    let mut standard = booking(VehicleClass::Truck, Some(VehicleSubtype::StandardCab));
    standard.toggle_coverage(CoverageTag::SideWindows);
    standard.set_film_tier(FilmTier::Cs);
    // The split options carry no list price yet
    assert_eq!(standard.derived().estimated_price, 0);

    let mut crew = booking(VehicleClass::Truck, Some(VehicleSubtype::CrewCab));
    crew.toggle_coverage(CoverageTag::SidesRear);
    crew.set_film_tier(FilmTier::Cs);
    assert_eq!(crew.derived().estimated_price, 299);
}

#[test]
fn test_van_full_package() {
    let mut cfg = booking(VehicleClass::Van, Some(VehicleSubtype::Minivan));
    // Vans are auto factory-tinted, so the pair is exclusive
    cfg.toggle_coverage(CoverageTag::SidesRear);
    cfg.toggle_coverage(CoverageTag::Windshield);
    cfg.set_film_tier(FilmTier::Xr);
    assert_eq!(cfg.derived().estimated_price, 549 + 299);
}

#[test]
fn test_addons_price_independent_of_vehicle() {
    for (class, subtype) in [
        (VehicleClass::Car, Some(VehicleSubtype::Sedan)),
        (VehicleClass::Suv, None),
        (VehicleClass::Van, Some(VehicleSubtype::CargoVan)),
    ] {
        let mut cfg = booking(class, subtype);
        cfg.toggle_coverage(CoverageTag::SunStrip);
        cfg.set_film_tier(FilmTier::Xr);
        assert_eq!(cfg.derived().estimated_price, 99, "class {class}");
    }
}

#[test]
fn test_sunroof_pair_pricing() {
    let mut cfg = booking(VehicleClass::Suv, None);
    cfg.toggle_coverage(CoverageTag::SingleSunroof);
    cfg.set_film_tier(FilmTier::XrPlus);
    assert_eq!(cfg.derived().estimated_price, 149);

    // Swapping to dual replaces, never stacks
    cfg.toggle_coverage(CoverageTag::DualSunroof);
    assert_eq!(cfg.derived().estimated_price, 249);
}

#[test]
fn test_estimate_is_sum_of_independent_lookups() {
    let mut cfg = booking(VehicleClass::Suv, None);
    cfg.set_factory_tint(true);
    cfg.clear_coverage();
    cfg.toggle_coverage(CoverageTag::FactoryMatchFrontDoors);
    cfg.toggle_coverage(CoverageTag::Windshield);
    cfg.toggle_coverage(CoverageTag::SunStrip);
    cfg.set_film_tier(FilmTier::Xr);
    cfg.set_windshield_tier(Some(FilmTier::XrPlus));

    let expected: u32 = cfg
        .coverage()
        .iter()
        .map(|&tag| {
            let tier = if tag == CoverageTag::Windshield {
                cfg.film().windshield_tier.or(cfg.film().tier)
            } else {
                cfg.film().tier
            };
            pricing::contribution(tag, VehicleClass::Suv, cfg.vehicle().subtype, tier)
        })
        .sum();

    assert_eq!(cfg.derived().estimated_price, expected);
    assert_eq!(expected, 199 + 349 + 99);
}

#[test]
fn test_transient_states_price_at_zero_without_error() {
    // Tag selected before any tier: a miss, not an error
    let mut cfg = booking(VehicleClass::Car, Some(VehicleSubtype::Sedan));
    cfg.toggle_coverage(CoverageTag::SidesRear);
    assert_eq!(cfg.derived().estimated_price, 0);

    // Truck before cab style: class fallback misses too
    let mut truck = BookingConfig::new();
    truck.set_vehicle_class(VehicleClass::Truck);
    truck.toggle_coverage(CoverageTag::SidesRear);
    truck.set_film_tier(FilmTier::Xr);
    assert_eq!(truck.derived().estimated_price, 0);
}

#[test]
fn test_clear_all_zeroes_estimate_regardless_of_tier() {
    let mut cfg = booking(VehicleClass::Car, Some(VehicleSubtype::Sedan));
    cfg.toggle_coverage(CoverageTag::SidesRear);
    cfg.toggle_coverage(CoverageTag::SunStrip);
    cfg.set_film_tier(FilmTier::XrPlus);
    assert!(cfg.derived().estimated_price > 0);

    cfg.clear_coverage();
    assert_eq!(cfg.derived().estimated_price, 0);
    assert_eq!(cfg.derived().service_subtype, None);
}

#[test]
fn test_starting_price_floor_for_coverage_preview() {
    let tags = [CoverageTag::SidesRear, CoverageTag::Windshield];
    assert_eq!(
        pricing::starting_price(&tags, VehicleClass::Car, Some(VehicleSubtype::Sedan)),
        299 + 199
    );
}
