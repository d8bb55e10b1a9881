//! Booking document round-trip tests
//!
//! Covers the save/load surface the CLI uses, including the rule that
//! derived outputs are never persisted and always re-derived on load.

use tempfile::tempdir;

use tintbook::booking::BookingConfig;
use tintbook::types::{ContactChannel, CoverageTag, FilmTier, VehicleClass, VehicleSubtype};

fn full_booking() -> BookingConfig {
    let mut cfg = BookingConfig::new();
    cfg.set_vehicle_class(VehicleClass::Suv);
    cfg.set_factory_tint(true);
    cfg.clear_coverage();
    cfg.toggle_coverage(CoverageTag::FactoryMatchFrontDoors);
    cfg.toggle_coverage(CoverageTag::SunStrip);
    cfg.set_film_tier(FilmTier::Xr);
    cfg.set_vehicle_year(Some(2024));
    cfg.set_vehicle_make("Toyota");
    cfg.set_vehicle_model("RAV4");
    cfg.set_vehicle_color("Silver");
    cfg.set_attendee_name("Grace", "Hopper");
    cfg.set_email("grace@example.com");
    cfg.set_phone("5558675309");
    cfg.set_contact_channel(ContactChannel::Email);
    cfg.set_notes("gate code 4411");
    cfg
}

#[test]
fn test_document_roundtrip_preserves_inputs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("suv.json");

    let original = full_booking();
    original.save_to_file(&path).unwrap();
    let loaded = BookingConfig::load_from_file(&path).unwrap();

    assert_eq!(loaded.vehicle(), original.vehicle());
    assert_eq!(loaded.coverage(), original.coverage());
    assert_eq!(loaded.film(), original.film());
    assert_eq!(loaded.attendee(), original.attendee());
    assert_eq!(loaded.contact(), original.contact());
}

#[test]
fn test_load_rederives_rather_than_trusting_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("suv.json");

    let original = full_booking();
    original.save_to_file(&path).unwrap();

    let loaded = BookingConfig::load_from_file(&path).unwrap();
    // 199 factory match (SUV, XR) + 99 sun strip (XR)
    assert_eq!(loaded.derived().estimated_price, 199 + 99);
    assert_eq!(loaded.derived(), original.derived());
}

#[test]
fn test_blank_document_loads_with_open_gates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.json");

    BookingConfig::new().save_to_file(&path).unwrap();
    let loaded = BookingConfig::load_from_file(&path).unwrap();

    assert_eq!(loaded.derived().estimated_price, 0);
    assert_eq!(loaded.validation_issues().len(), 5);
}

#[test]
fn test_garbage_file_fails_gracefully() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = BookingConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse booking JSON"));
}

#[test]
fn test_subtype_strings_survive_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("truck.json");

    let mut cfg = BookingConfig::new();
    cfg.set_vehicle_class(VehicleClass::Truck);
    cfg.set_vehicle_subtype(VehicleSubtype::CrewCab);
    cfg.save_to_file(&path).unwrap();

    let loaded = BookingConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.vehicle().subtype, Some(VehicleSubtype::CrewCab));
}
