use crate::convert::context::ConversionContext;
use crate::convert::engine::convert;
use crate::units::kind::UnitKind;
use serde::Serialize;

/// Named pixel sizes that come up constantly in stylesheets
const COMMON_SIZES_PX: [(&str, f64); 10] = [
    ("Base font size", 16.0),
    ("Small text", 12.0),
    ("Large text", 24.0),
    ("Heading", 32.0),
    ("Border thin", 1.0),
    ("Border medium", 2.0),
    ("Border thick", 4.0),
    ("Margin/Padding small", 8.0),
    ("Margin/Padding medium", 16.0),
    ("Margin/Padding large", 24.0),
];

/// Units listed in the physical equivalents table
pub const PHYSICAL_UNITS: [UnitKind; 5] = [
    UnitKind::In,
    UnitKind::Cm,
    UnitKind::Mm,
    UnitKind::Pt,
    UnitKind::Pc,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceSize {
    pub name: &'static str,
    pub px: f64,
    pub rem: f64,
    pub em: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicalEquivalent {
    /// One of this unit...
    pub unit: UnitKind,
    /// ...expressed in px followed by every physical unit
    pub values: Vec<(UnitKind, f64)>,
}

/// Common reference sizes with their font-relative equivalents
pub fn common_references() -> Vec<ReferenceSize> {
    // Font-relative units ignore the viewport
    let ctx = ConversionContext::default();
    COMMON_SIZES_PX
        .iter()
        .map(|&(name, px)| ReferenceSize {
            name,
            px,
            rem: convert(px, UnitKind::Px, UnitKind::Rem, &ctx),
            em: convert(px, UnitKind::Px, UnitKind::Em, &ctx),
        })
        .collect()
}

/// One of each physical unit expressed in px and in every other physical unit
pub fn physical_equivalents() -> Vec<PhysicalEquivalent> {
    let ctx = ConversionContext::default();
    PHYSICAL_UNITS
        .iter()
        .map(|&unit| PhysicalEquivalent {
            unit,
            values: std::iter::once(UnitKind::Px)
                .chain(PHYSICAL_UNITS)
                .map(|to| (to, convert(1.0, unit, to, &ctx)))
                .collect(),
        })
        .collect()
}
