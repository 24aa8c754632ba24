use crate::convert::context::ConversionContext;
use crate::convert::engine::convert;
use crate::units::kind::UnitKind;
use serde::Serialize;

/// Units shown in the conversion matrix unless configured otherwise
pub const DEFAULT_MATRIX_UNITS: [UnitKind; 6] = [
    UnitKind::Px,
    UnitKind::Rem,
    UnitKind::Em,
    UnitKind::Percent,
    UnitKind::Vh,
    UnitKind::Vw,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixCell {
    pub to: UnitKind,
    /// `value` of the row unit expressed in `to`
    pub value: f64,
    /// Set when either side is parent-relative (em, %) and the number is
    /// only the engine's approximation of what a browser would compute
    pub approximate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub from: UnitKind,
    pub cells: Vec<MatrixCell>,
}

/// Convert `value` of every unit in `units` into every other unit in `units`
pub fn conversion_matrix(
    units: &[UnitKind],
    value: f64,
    ctx: &ConversionContext,
) -> Vec<MatrixRow> {
    units
        .iter()
        .map(|&from| MatrixRow {
            from,
            cells: units
                .iter()
                .map(|&to| MatrixCell {
                    to,
                    value: convert(value, from, to, ctx),
                    approximate: from != to
                        && (from.is_parent_relative() || to.is_parent_relative()),
                })
                .collect(),
        })
        .collect()
}
