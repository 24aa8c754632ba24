use crate::suggest::usage::UsageContext;
use crate::units::kind::UnitKind;

/// Candidates for contexts without a dedicated rule, best first
pub const FALLBACK_ORDER: [UnitKind; 5] = [
    UnitKind::Rem,
    UnitKind::Em,
    UnitKind::Vh,
    UnitKind::Vw,
    UnitKind::Percent,
];

/// Recommend a unit for `value` used in `context`.
///
/// Advisory only. `from` does not influence any current rule.
pub fn suggest(context: &UsageContext, value: f64, _from: UnitKind) -> UnitKind {
    match context {
        UsageContext::Typography => UnitKind::Rem,
        UsageContext::Layout => {
            if value < 10.0 {
                UnitKind::Rem
            } else if value > 100.0 {
                UnitKind::Percent
            } else {
                UnitKind::Rem
            }
        }
        UsageContext::Spacing => UnitKind::Rem,
        UsageContext::Borders => UnitKind::Px,
        UsageContext::Other(_) => FALLBACK_ORDER[0],
    }
}
