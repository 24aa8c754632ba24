// Per-context editorial ratings for every unit.
// Each table follows UnitKind declaration order: px rem em vh vw % vmin vmax cm mm in pt pc.

use crate::convert::context::ConversionContext;
use crate::convert::engine::convert;
use crate::suggest::heuristic::suggest;
use crate::suggest::usage::UsageContext;
use crate::units::kind::UnitKind;
use serde::Serialize;

/// How well a unit suits a usage context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub unit: UnitKind,
    /// 1-5, 5 = best fit for the context
    pub rating: u8,
    pub reason: &'static str,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    HighlyRecommended,
    Acceptable,
    NotIdeal,
}

impl Verdict {
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            4.. => Verdict::HighlyRecommended,
            3 => Verdict::Acceptable,
            _ => Verdict::NotIdeal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::HighlyRecommended => "Highly Recommended",
            Verdict::Acceptable => "Acceptable",
            Verdict::NotIdeal => "Not Ideal",
        }
    }
}

struct AdviceTable {
    title: &'static str,
    entries: [(u8, &'static str); 13],
}

const PRINT_ONLY: &str = "Print-specific, not for screen";

static TYPOGRAPHY: AdviceTable = AdviceTable {
    title: "Typography Recommendations",
    entries: [
        (2, "Pixels don't scale with user preferences, poor accessibility"),
        (5, "Scales with root font size, best for accessibility"),
        (4, "Good for relative sizing, but can compound when nested"),
        (2, "Not ideal for text, as it relates to viewport height, not font size"),
        (3, "Can be used for fluid typography, but accessibility concerns"),
        (3, "Works for responsive text, but less predictable than rem/em"),
        (3, "Can be good for maintaining readable text on various screens"),
        (2, "Less predictable for typography"),
        (1, "Print-specific, not for screen typography"),
        (1, "Print-specific, not for screen typography"),
        (1, "Print-specific, not for screen typography"),
        (2, "Traditional print unit, not ideal for web"),
        (1, "Print-specific, not for screen typography"),
    ],
};

static BORDERS: AdviceTable = AdviceTable {
    title: "Border Recommendations",
    entries: [
        (5, "Perfect for borders - precise and consistent across devices"),
        (3, "Can scale with user preference, but may be too precise for most borders"),
        (2, "Depends on parent font size, usually not needed for borders"),
        (1, "Not suitable for borders"),
        (1, "Not suitable for borders"),
        (1, "Percentage of parent - unpredictable for borders"),
        (1, "Not suitable for borders"),
        (1, "Not suitable for borders"),
        (1, PRINT_ONLY),
        (1, PRINT_ONLY),
        (1, PRINT_ONLY),
        (2, "Print unit, use px instead"),
        (1, PRINT_ONLY),
    ],
};

static SPACING: AdviceTable = AdviceTable {
    title: "Spacing Recommendations",
    entries: [
        (3, "Good for small, precise gaps but doesn't scale with preferences"),
        (5, "Best for consistent spacing that respects user font-size preferences"),
        (4, "Good for spacing related to text size in component"),
        (3, "Useful for vertical spacing related to viewport height"),
        (3, "Useful for horizontal spacing related to viewport width"),
        (4, "Excellent for fluid layouts and responsive spacing"),
        (3, "Good for maintaining proportional spacing on extreme screens"),
        (2, "Less predictable for spacing"),
        (1, PRINT_ONLY),
        (1, PRINT_ONLY),
        (1, PRINT_ONLY),
        (1, "Print unit, use rem instead"),
        (1, PRINT_ONLY),
    ],
};

static LAYOUT: AdviceTable = AdviceTable {
    title: "Layout Recommendations",
    entries: [
        (2, "Fixed sizes don't adapt to screen size or user preferences"),
        (4, "Good for layouts that should respect user's font preferences"),
        (3, "Can be unpredictable in deeply nested layouts"),
        (4, "Excellent for full-height sections and vertical layouts"),
        (4, "Excellent for full-width sections and horizontal layouts"),
        (5, "Perfect for responsive layouts that adapt to parent containers"),
        (4, "Good for maintaining proportions on various screen orientations"),
        (3, "Can cause overflow on small screens"),
        (1, "Print-specific, not for screen layouts"),
        (1, "Print-specific, not for screen layouts"),
        (1, "Print-specific, not for screen layouts"),
        (1, "Print unit, not for screen layouts"),
        (1, "Print-specific, not for screen layouts"),
    ],
};

fn table_for(context: &UsageContext) -> &'static AdviceTable {
    match context {
        UsageContext::Typography => &TYPOGRAPHY,
        UsageContext::Layout => &LAYOUT,
        UsageContext::Spacing => &SPACING,
        UsageContext::Borders => &BORDERS,
        // Unknown contexts are judged as typography
        UsageContext::Other(_) => &TYPOGRAPHY,
    }
}

/// Heading shown above the advice for a context
pub fn advice_title(context: &UsageContext) -> &'static str {
    table_for(context).title
}

/// Rate `unit` for use in `context`
pub fn advise(context: &UsageContext, unit: UnitKind) -> Advice {
    let (rating, reason) = table_for(context).entries[unit as usize];
    Advice {
        unit,
        rating,
        reason,
        verdict: Verdict::from_rating(rating),
    }
}

/// Everything a recommendation panel shows for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub context: UsageContext,
    pub title: &'static str,
    pub current: Advice,
    pub suggested: Advice,
    /// The input re-expressed in the suggested unit
    pub suggested_value: f64,
}

impl Recommendation {
    /// Whether switching units is actually being proposed
    pub fn suggests_change(&self) -> bool {
        self.current.unit != self.suggested.unit
    }
}

/// Suggest a unit for `value` of `current` and explain both choices
pub fn recommend(
    context: &UsageContext,
    value: f64,
    current: UnitKind,
    ctx: &ConversionContext,
) -> Recommendation {
    let suggested = suggest(context, value, current);
    Recommendation {
        context: context.clone(),
        title: advice_title(context),
        current: advise(context, current),
        suggested: advise(context, suggested),
        suggested_value: convert(value, current, suggested, ctx),
    }
}
