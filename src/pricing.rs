//! Price book for coverage options
//!
//! Three-level lookup: coverage tag → vehicle key → film tier → amount.
//! Vehicle-key resolution tries the specific `{class}_{subtype}` entry first
//! and falls back to the bare class entry. A missing entry resolves to a
//! zero contribution, never an error: transient states (tag selected before
//! a tier is chosen, trucks before a cab style is chosen) are expected to
//! miss.
//!
//! Add-on tags (sun strip, sunroofs) ignore the vehicle entirely and key on
//! tier alone, pricing at the base grade until a tier is chosen.

use crate::types::{CoverageTag, FilmTier, VehicleClass, VehicleSubtype};

/// Amounts for one table entry across the three film grades, in whole USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPrices {
    cs: u32,
    xr: u32,
    xr_plus: u32,
}

impl TierPrices {
    const fn new(cs: u32, xr: u32, xr_plus: u32) -> Self {
        Self { cs, xr, xr_plus }
    }

    /// Amount for the given film grade.
    pub const fn amount(self, tier: FilmTier) -> u32 {
        match tier {
            FilmTier::Cs => self.cs,
            FilmTier::Xr => self.xr,
            FilmTier::XrPlus => self.xr_plus,
        }
    }

    /// Cheapest grade in this entry, used for "starts at" estimates.
    pub const fn min(self) -> u32 {
        let mut min = self.cs;
        if self.xr < min {
            min = self.xr;
        }
        if self.xr_plus < min {
            min = self.xr_plus;
        }
        min
    }
}

/// Entry for a specific `{class}_{subtype}` vehicle key.
///
/// Only combinations the shop actually prices differently appear here;
/// everything else resolves through [`class_entry`].
const fn specific_entry(
    tag: CoverageTag,
    class: VehicleClass,
    subtype: VehicleSubtype,
) -> Option<TierPrices> {
    use CoverageTag::*;
    use VehicleClass::*;
    use VehicleSubtype::*;

    match (tag, class, subtype) {
        // Convertibles run cheaper at the top grade (less rear glass)
        (SidesRear, Car, Convertible) => Some(TierPrices::new(299, 399, 499)),
        (SidesRear, Truck, StandardCab) => Some(TierPrices::new(249, 349, 549)),
        (SidesRear, Truck, ExtendedCab) => Some(TierPrices::new(299, 399, 599)),
        (SidesRear, Truck, CrewCab) => Some(TierPrices::new(299, 399, 599)),
        (FactoryMatchFrontDoors, Truck, ExtendedCab) => Some(TierPrices::new(149, 199, 299)),
        (FactoryMatchFrontDoors, Truck, CrewCab) => Some(TierPrices::new(149, 199, 299)),
        _ => None,
    }
}

/// Entry for a bare vehicle class key.
const fn class_entry(tag: CoverageTag, class: VehicleClass) -> Option<TierPrices> {
    use CoverageTag::*;
    use VehicleClass::*;

    match (tag, class) {
        (SidesRear, Car) => Some(TierPrices::new(299, 399, 599)),
        (SidesRear, Suv) => Some(TierPrices::new(399, 499, 699)),
        (SidesRear, Van) => Some(TierPrices::new(449, 549, 749)),
        // Trucks price per cab style only; no bare-class fallback
        (SidesRear, Truck) => None,

        (FactoryMatchFrontDoors, Suv) => Some(TierPrices::new(149, 199, 299)),
        (FactoryMatchFrontDoors, Van) => Some(TierPrices::new(149, 199, 299)),
        (FactoryMatchFrontDoors, Car) | (FactoryMatchFrontDoors, Truck) => None,

        (Windshield, _) => Some(TierPrices::new(199, 299, 349)),

        // Standard-cab split options carry no list price yet
        (SideWindows, _) | (RearGlass, _) => None,

        // Add-ons are priced by addon_entry, not by vehicle key
        (SunStrip, _) | (SingleSunroof, _) | (DualSunroof, _) => None,
    }
}

/// Entry for a vehicle-independent add-on tag.
const fn addon_entry(tag: CoverageTag) -> Option<TierPrices> {
    match tag {
        CoverageTag::SunStrip => Some(TierPrices::new(75, 99, 149)),
        CoverageTag::SingleSunroof => Some(TierPrices::new(89, 119, 149)),
        CoverageTag::DualSunroof => Some(TierPrices::new(149, 199, 249)),
        _ => None,
    }
}

/// Resolve the table entry for a tag against the vehicle key, trying the
/// specific `{class}_{subtype}` entry before the bare class entry.
pub fn resolve_entry(
    tag: CoverageTag,
    class: VehicleClass,
    subtype: Option<VehicleSubtype>,
) -> Option<TierPrices> {
    if tag.is_addon() {
        return addon_entry(tag);
    }
    if let Some(sub) = subtype {
        if let Some(entry) = specific_entry(tag, class, sub) {
            return Some(entry);
        }
    }
    class_entry(tag, class)
}

/// Look up the amount for one selected tag.
///
/// Returns `None` on any miss: unknown vehicle key, or a tier-dependent tag
/// with no tier chosen. Add-on tags never miss on tier; they fall back to
/// the base grade.
pub fn lookup(
    tag: CoverageTag,
    class: VehicleClass,
    subtype: Option<VehicleSubtype>,
    tier: Option<FilmTier>,
) -> Option<u32> {
    let entry = resolve_entry(tag, class, subtype)?;
    let tier = if tag.is_addon() {
        tier.unwrap_or(FilmTier::base())
    } else {
        tier?
    };
    Some(entry.amount(tier))
}

/// Contribution of one selected tag to the estimated price. Misses are zero.
pub fn contribution(
    tag: CoverageTag,
    class: VehicleClass,
    subtype: Option<VehicleSubtype>,
    tier: Option<FilmTier>,
) -> u32 {
    lookup(tag, class, subtype, tier).unwrap_or(0)
}

/// Lowest possible total for a coverage set before a tier is chosen, for
/// "starts at" displays.
pub fn starting_price(
    tags: &[CoverageTag],
    class: VehicleClass,
    subtype: Option<VehicleSubtype>,
) -> u32 {
    tags.iter()
        .filter_map(|&tag| resolve_entry(tag, class, subtype))
        .map(TierPrices::min)
        .sum()
}
