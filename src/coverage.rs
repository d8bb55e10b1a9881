//! Coverage selection rules
//!
//! Toggle semantics over the ordered coverage set, mutual-exclusivity
//! resolution for conflicting tag pairs, and the offered-options filter
//! deciding which tags a given vehicle is shown at all.
//!
//! Two pairs conflict:
//! - `{SidesRear, FactoryMatchFrontDoors}` when the vehicle carries factory
//!   tint: the regions overlap, so the pair behaves as a two-way exclusive
//!   choice rather than independent checkboxes.
//! - `{SingleSunroof, DualSunroof}` always: panel count is a single
//!   physical attribute.

use strum::IntoEnumIterator;
use tracing::debug;

use crate::types::{CoverageTag, VehicleSubtype};

/// Apply a toggle request for `tag` to the selection, resolving exclusivity.
///
/// Returns `true` when the tag ended up selected, `false` when it was
/// toggled off.
pub fn toggle(selected: &mut Vec<CoverageTag>, tag: CoverageTag, factory_tint: bool) -> bool {
    if let Some(pos) = selected.iter().position(|&t| t == tag) {
        // Plain toggle-off, no other effects
        selected.remove(pos);
        return false;
    }

    if factory_tint
        && matches!(
            tag,
            CoverageTag::SidesRear | CoverageTag::FactoryMatchFrontDoors
        )
    {
        let other = if tag == CoverageTag::SidesRear {
            CoverageTag::FactoryMatchFrontDoors
        } else {
            CoverageTag::SidesRear
        };
        selected.retain(|&t| t != other);
        selected.push(tag);
    } else if tag.is_sunroof() {
        let other = if tag == CoverageTag::SingleSunroof {
            CoverageTag::DualSunroof
        } else {
            CoverageTag::SingleSunroof
        };
        selected.retain(|&t| t != other);
        selected.push(tag);
    } else {
        // Ordinary multi-select
        selected.push(tag);
    }
    true
}

/// Whether a tag is offered as a selectable option for the vehicle.
///
/// Mirrors what the booking surface shows:
/// - FactoryMatchFrontDoors only exists with factory tint to match, and
///   standard-cab trucks have no factory-tinted rear doors.
/// - Sunroof panels are not offered for convertibles or standard/extended
///   cab trucks.
/// - Standard cabs see the SideWindows/RearGlass split instead of the
///   combined SidesRear package; every other vehicle sees the reverse.
pub fn is_offered(
    tag: CoverageTag,
    subtype: Option<VehicleSubtype>,
    factory_tint: Option<bool>,
) -> bool {
    let standard_cab = subtype == Some(VehicleSubtype::StandardCab);

    match tag {
        CoverageTag::FactoryMatchFrontDoors => factory_tint == Some(true) && !standard_cab,
        CoverageTag::SingleSunroof | CoverageTag::DualSunroof => !matches!(
            subtype,
            Some(VehicleSubtype::Convertible)
                | Some(VehicleSubtype::StandardCab)
                | Some(VehicleSubtype::ExtendedCab)
        ),
        CoverageTag::SidesRear => !standard_cab,
        CoverageTag::SideWindows | CoverageTag::RearGlass => standard_cab,
        CoverageTag::Windshield | CoverageTag::SunStrip => true,
    }
}

/// All tags offered for the vehicle, in presentation order.
pub fn offered_tags(
    subtype: Option<VehicleSubtype>,
    factory_tint: Option<bool>,
) -> Vec<CoverageTag> {
    CoverageTag::iter()
        .filter(|&tag| is_offered(tag, subtype, factory_tint))
        .collect()
}

/// Drop selections that are no longer offered after a vehicle or
/// factory-tint change.
pub fn retain_offered(
    selected: &mut Vec<CoverageTag>,
    subtype: Option<VehicleSubtype>,
    factory_tint: Option<bool>,
) {
    let before = selected.len();
    selected.retain(|&tag| is_offered(tag, subtype, factory_tint));
    if selected.len() != before {
        debug!(
            dropped = before - selected.len(),
            "pruned coverage selections no longer offered"
        );
    }
}
