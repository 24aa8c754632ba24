use crate::units::kind::UnitKind;

/// Decimal places used when displaying a value in the given unit
pub fn precision(unit: UnitKind) -> usize {
    match unit {
        UnitKind::Rem | UnitKind::Em => 3,
        UnitKind::Vw | UnitKind::Vh | UnitKind::Vmin | UnitKind::Vmax | UnitKind::Percent => 2,
        UnitKind::Cm | UnitKind::Mm | UnitKind::In => 2,
        UnitKind::Px | UnitKind::Pt | UnitKind::Pc => 0,
    }
}

/// Render a value with unit-specific precision followed by the unit suffix
/// (e.g. `format(1.0, UnitKind::Rem)` -> "1.000rem").
/// Ties round away from zero, so 0.0625rem shows as "0.063rem".
pub fn format(value: f64, unit: UnitKind) -> String {
    let digits = precision(unit);
    format!("{:.*}{}", digits, round_half_away(value, digits), unit.suffix())
}

// `{:.*}` alone rounds ties to even
fn round_half_away(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
