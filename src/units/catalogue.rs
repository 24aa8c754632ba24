// Static metadata for every supported unit.
// Table order follows UnitKind declaration order, so a unit indexes its own entry.

use crate::units::kind::UnitKind;
use serde::Serialize;

/// Editorial metadata describing a unit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDescriptor {
    pub unit: UnitKind,
    /// Display label (e.g. "Root EM")
    pub name: &'static str,
    pub description: &'static str,
    /// Usage tags this unit suits, most important first
    pub best_for: &'static [&'static str],
    pub avoid: &'static [&'static str],
    /// 1-5, 5 = adapts best to viewport and user preference changes
    pub responsive_rating: u8,
    /// 1-5, 5 = universally supported
    pub browser_support_rating: u8,
}

const PRINT_BEST_FOR: &[&str] = &["Print layouts", "Physical dimension references"];
const PRINT_AVOID: &[&str] = &["Screen layouts", "Responsive designs"];

static CATALOGUE: [UnitDescriptor; 13] = [
    UnitDescriptor {
        unit: UnitKind::Px,
        name: "Pixels",
        description: "Pixels (px) are a fixed-size unit that corresponds to actual pixels on the screen.",
        best_for: &[
            "Borders",
            "Shadows",
            "Small, fixed-size elements",
            "Precise positioning",
        ],
        avoid: &["Text sizing", "Responsive layouts", "Container widths"],
        responsive_rating: 1,
        browser_support_rating: 5,
    },
    UnitDescriptor {
        unit: UnitKind::Rem,
        name: "Root EM",
        description: "Relative to the font-size of the root element (html). 1rem equals the font-size of the html element.",
        best_for: &[
            "Text sizing",
            "Responsive layouts",
            "Component sizing",
            "Margins and padding",
        ],
        avoid: &["When you need pixel-precise measurements"],
        responsive_rating: 5,
        browser_support_rating: 5,
    },
    UnitDescriptor {
        unit: UnitKind::Em,
        name: "EM",
        description: "Relative to the font-size of the parent element. Creates a compounding effect when nested.",
        best_for: &[
            "Text sizing",
            "Element sizing relative to text",
            "Component internal spacing",
        ],
        avoid: &["Deep nested elements", "When you need predictable sizing"],
        responsive_rating: 4,
        browser_support_rating: 5,
    },
    UnitDescriptor {
        unit: UnitKind::Vh,
        name: "Viewport Height",
        description: "1vh is equal to 1% of the viewport height.",
        best_for: &[
            "Full-height layouts",
            "Vertical spacing relative to screen",
            "Hero sections",
        ],
        avoid: &[
            "Mobile layouts (due to address bar issues)",
            "When height depends on content",
        ],
        responsive_rating: 4,
        browser_support_rating: 4,
    },
    UnitDescriptor {
        unit: UnitKind::Vw,
        name: "Viewport Width",
        description: "1vw is equal to 1% of the viewport width.",
        best_for: &[
            "Full-width layouts",
            "Responsive typography",
            "Horizontal spacing",
        ],
        avoid: &[
            "Text sizing (accessibility issues)",
            "When width depends on content",
        ],
        responsive_rating: 4,
        browser_support_rating: 4,
    },
    UnitDescriptor {
        unit: UnitKind::Percent,
        name: "Percentage",
        description: "Relative to the parent element's size.",
        best_for: &["Fluid layouts", "Responsive columns", "Padding and margin"],
        avoid: &["When parent size is unknown or variable"],
        responsive_rating: 4,
        browser_support_rating: 5,
    },
    UnitDescriptor {
        unit: UnitKind::Vmin,
        name: "Viewport Minimum",
        description: "1vmin is equal to 1% of the viewport's smaller dimension (height or width).",
        best_for: &[
            "Responsive elements that should scale with the smaller dimension",
            "Maintaining aspect ratios",
        ],
        avoid: &["When you need explicit control over horizontal/vertical scaling"],
        responsive_rating: 4,
        browser_support_rating: 4,
    },
    UnitDescriptor {
        unit: UnitKind::Vmax,
        name: "Viewport Maximum",
        description: "1vmax is equal to 1% of the viewport's larger dimension (height or width).",
        best_for: &[
            "Elements that should scale with the larger dimension",
            "Full-screen layouts",
        ],
        avoid: &[
            "Mobile interfaces (can cause overflow)",
            "When size predictability is important",
        ],
        responsive_rating: 3,
        browser_support_rating: 4,
    },
    UnitDescriptor {
        unit: UnitKind::Cm,
        name: "Centimeters",
        description: "Physical unit of measurement, primarily for print.",
        best_for: PRINT_BEST_FOR,
        avoid: PRINT_AVOID,
        responsive_rating: 1,
        browser_support_rating: 3,
    },
    UnitDescriptor {
        unit: UnitKind::Mm,
        name: "Millimeters",
        description: "Physical unit of measurement, primarily for print.",
        best_for: PRINT_BEST_FOR,
        avoid: PRINT_AVOID,
        responsive_rating: 1,
        browser_support_rating: 3,
    },
    UnitDescriptor {
        unit: UnitKind::In,
        name: "Inches",
        description: "Physical unit of measurement, primarily for print.",
        best_for: PRINT_BEST_FOR,
        avoid: PRINT_AVOID,
        responsive_rating: 1,
        browser_support_rating: 3,
    },
    UnitDescriptor {
        unit: UnitKind::Pt,
        name: "Points",
        description: "1pt is equal to 1/72 of an inch. Used in print and sometimes for text sizing.",
        best_for: &["Print layouts", "Text in emails"],
        avoid: &["Web layouts", "Responsive designs"],
        responsive_rating: 1,
        browser_support_rating: 4,
    },
    UnitDescriptor {
        unit: UnitKind::Pc,
        name: "Picas",
        description: "1pc is equal to 12 points or 1/6 of an inch. Used in typography and print.",
        best_for: &["Print layouts", "Traditional typography"],
        avoid: &["Web layouts", "Responsive designs"],
        responsive_rating: 1,
        browser_support_rating: 3,
    },
];

/// The supported units in declaration order
pub fn list_units() -> &'static [UnitKind] {
    &UnitKind::ALL
}

/// Look up the metadata for a unit
pub fn describe(unit: UnitKind) -> &'static UnitDescriptor {
    &CATALOGUE[unit as usize]
}

/// All descriptors in declaration order
pub fn descriptors() -> &'static [UnitDescriptor] {
    &CATALOGUE
}
