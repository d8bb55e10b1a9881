//! Type-safe configuration vocabulary for tintbook
//!
//! This module replaces stringly-typed wizard values with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Vehicle body class selected on the first wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum VehicleClass {
    #[strum(serialize = "CAR")]
    Car,
    #[strum(serialize = "SUV")]
    Suv,
    #[strum(serialize = "TRUCK")]
    Truck,
    #[strum(serialize = "VAN")]
    Van,
}

impl VehicleClass {
    /// Classes whose pricing depends on a cab/body style require an
    /// explicit subtype before the vehicle step can complete.
    pub const fn requires_subtype(self) -> bool {
        matches!(self, Self::Truck | Self::Suv)
    }

    /// Subtypes offered for this class. An empty slice means the class
    /// carries an implicit subtype (SUVs) assigned automatically.
    pub const fn subtypes(self) -> &'static [VehicleSubtype] {
        match self {
            Self::Car => &[
                VehicleSubtype::Sedan,
                VehicleSubtype::Coupe,
                VehicleSubtype::Convertible,
            ],
            Self::Suv => &[],
            Self::Truck => &[
                VehicleSubtype::StandardCab,
                VehicleSubtype::ExtendedCab,
                VehicleSubtype::CrewCab,
            ],
            Self::Van => &[VehicleSubtype::CargoVan, VehicleSubtype::Minivan],
        }
    }

    /// The subtype auto-assigned when the class has no selectable subtypes.
    pub const fn implicit_subtype(self) -> Option<VehicleSubtype> {
        match self {
            Self::Suv => Some(VehicleSubtype::Suv),
            _ => None,
        }
    }
}

/// Cab style / body style refinement of a [`VehicleClass`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum VehicleSubtype {
    #[strum(serialize = "sedan")]
    Sedan,
    #[strum(serialize = "coupe")]
    Coupe,
    #[strum(serialize = "convertible")]
    Convertible,
    /// Implicit subtype for the SUV class
    #[strum(serialize = "suv")]
    Suv,
    #[strum(serialize = "standard cab")]
    StandardCab,
    #[strum(serialize = "extended cab")]
    ExtendedCab,
    #[strum(serialize = "crew cab")]
    CrewCab,
    #[strum(serialize = "cargo van")]
    CargoVan,
    #[strum(serialize = "minivan")]
    Minivan,
}

/// Physical glass region selected for tinting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum CoverageTag {
    #[strum(serialize = "SIDES_REAR")]
    SidesRear,
    #[strum(serialize = "FACTORY_MATCH_FRONT_DOORS")]
    FactoryMatchFrontDoors,
    #[strum(serialize = "SIDE_WINDOWS")]
    SideWindows,
    #[strum(serialize = "REAR_GLASS")]
    RearGlass,
    #[strum(serialize = "WINDSHIELD")]
    Windshield,
    #[strum(serialize = "SUN_STRIP")]
    SunStrip,
    #[strum(serialize = "SINGLE_SUNROOF")]
    SingleSunroof,
    #[strum(serialize = "DUAL_SUNROOF")]
    DualSunroof,
}

impl CoverageTag {
    /// Glass regions this tag covers on the vehicle silhouette.
    pub const fn regions(self) -> &'static [GlassRegion] {
        match self {
            Self::SidesRear => &[
                GlassRegion::FrontSides,
                GlassRegion::RearSides,
                GlassRegion::RearGlass,
            ],
            Self::FactoryMatchFrontDoors => &[GlassRegion::FrontSides],
            Self::SideWindows => &[GlassRegion::FrontSides],
            Self::RearGlass => &[GlassRegion::RearGlass],
            Self::Windshield => &[GlassRegion::WindshieldFull],
            Self::SunStrip => &[GlassRegion::SunBrow],
            Self::SingleSunroof => &[GlassRegion::Sunroof],
            Self::DualSunroof => &[GlassRegion::Sunroof],
        }
    }

    /// Tags that count as front-door coverage when deriving the service
    /// subtype.
    pub const fn is_front_coverage(self) -> bool {
        matches!(self, Self::FactoryMatchFrontDoors | Self::SideWindows)
    }

    /// Tags that count as sides/rear coverage when deriving the service
    /// subtype.
    pub const fn is_rear_coverage(self) -> bool {
        matches!(self, Self::SidesRear | Self::RearGlass)
    }

    pub const fn is_sunroof(self) -> bool {
        matches!(self, Self::SingleSunroof | Self::DualSunroof)
    }

    /// Secondary add-on tags presented apart from the main coverage list.
    pub const fn is_addon(self) -> bool {
        matches!(self, Self::SunStrip | Self::SingleSunroof | Self::DualSunroof)
    }
}

/// Glass region on the vehicle silhouette (presentation contract only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum GlassRegion {
    FrontSides,
    RearSides,
    RearGlass,
    WindshieldFull,
    SunBrow,
    Sunroof,
}

/// Film quality grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum FilmTier {
    #[strum(serialize = "CS")]
    Cs,
    #[strum(serialize = "XR")]
    Xr,
    #[strum(serialize = "XR_PLUS")]
    XrPlus,
}

impl FilmTier {
    /// The entry-level tier; tier-independent add-ons price at this grade
    /// until a tier is chosen.
    pub const fn base() -> Self {
        Self::Cs
    }
}

/// Service subtype derived from the coverage set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum ServiceSubtype {
    #[strum(serialize = "FULL_TINT")]
    FullTint,
    #[strum(serialize = "PARTIAL_TINT")]
    PartialTint,
    #[strum(serialize = "WINDSHIELD_ONLY")]
    WindshieldOnly,
}

/// Preferred contact channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ContactChannel {
    #[default]
    #[strum(serialize = "SMS")]
    Sms,
    #[strum(serialize = "PHONE")]
    Phone,
    #[strum(serialize = "EMAIL")]
    Email,
}

/// Visible light transmission percentage for the chosen film
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum TintLevel {
    /// Darkest legal
    #[strum(serialize = "5")]
    Vlt5,
    #[strum(serialize = "20")]
    Vlt20,
    #[strum(serialize = "35")]
    Vlt35,
    #[strum(serialize = "50")]
    Vlt50,
    #[strum(serialize = "70")]
    Vlt70,
}
