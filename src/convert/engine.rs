// Two-stage conversion through pixels as the canonical unit.
// Percent is taken relative to the viewport width: there is no parent size to measure against.

use crate::convert::context::ConversionContext;
use crate::units::kind::UnitKind;

/// Root font size in pixels, used for both rem and em
pub const BASE_FONT_SIZE_PX: f64 = 16.0;

// Physical units at 96 DPI
pub const PX_PER_CM: f64 = 37.8;
pub const PX_PER_MM: f64 = 3.78;
pub const PX_PER_IN: f64 = 96.0;
pub const PX_PER_PT: f64 = 1.33;
pub const PX_PER_PC: f64 = 16.0;

/// Express `value` of `unit` in pixels
pub fn to_px(value: f64, unit: UnitKind, ctx: &ConversionContext) -> f64 {
    match unit {
        UnitKind::Px => value,
        UnitKind::Rem | UnitKind::Em => value * BASE_FONT_SIZE_PX,
        UnitKind::Vh => (value / 100.0) * ctx.viewport_height_px,
        UnitKind::Vw | UnitKind::Percent => (value / 100.0) * ctx.viewport_width_px,
        UnitKind::Vmin => (value / 100.0) * ctx.viewport_min_px(),
        UnitKind::Vmax => (value / 100.0) * ctx.viewport_max_px(),
        UnitKind::Cm => value * PX_PER_CM,
        UnitKind::Mm => value * PX_PER_MM,
        UnitKind::In => value * PX_PER_IN,
        UnitKind::Pt => value * PX_PER_PT,
        UnitKind::Pc => value * PX_PER_PC,
    }
}

/// Express a pixel quantity in `unit`
pub fn from_px(px: f64, unit: UnitKind, ctx: &ConversionContext) -> f64 {
    match unit {
        UnitKind::Px => px,
        UnitKind::Rem | UnitKind::Em => px / BASE_FONT_SIZE_PX,
        UnitKind::Vh => (px / ctx.viewport_height_px) * 100.0,
        UnitKind::Vw | UnitKind::Percent => (px / ctx.viewport_width_px) * 100.0,
        UnitKind::Vmin => (px / ctx.viewport_min_px()) * 100.0,
        UnitKind::Vmax => (px / ctx.viewport_max_px()) * 100.0,
        UnitKind::Cm => px / PX_PER_CM,
        UnitKind::Mm => px / PX_PER_MM,
        UnitKind::In => px / PX_PER_IN,
        UnitKind::Pt => px / PX_PER_PT,
        UnitKind::Pc => px / PX_PER_PC,
    }
}

/// Convert `value` from one unit to another.
///
/// Every pair of units is accepted. Converting a unit to itself returns the
/// input unchanged; NaN and infinite inputs pass straight through the formulas.
pub fn convert(value: f64, from: UnitKind, to: UnitKind, ctx: &ConversionContext) -> f64 {
    if from == to {
        return value;
    }
    from_px(to_px(value, from, ctx), to, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_font_relative_fixed_points() {
        let ctx = ConversionContext::default();
        assert_eq!(convert(16.0, UnitKind::Px, UnitKind::Rem, &ctx), 1.0);
        assert_eq!(convert(1.0, UnitKind::Rem, UnitKind::Px, &ctx), 16.0);
        assert_eq!(convert(2.0, UnitKind::Em, UnitKind::Rem, &ctx), 2.0);
    }

    #[test]
    fn test_physical_fixed_points() {
        let ctx = ConversionContext::default();
        assert_eq!(convert(96.0, UnitKind::Px, UnitKind::In, &ctx), 1.0);
        assert_relative_eq!(
            convert(1.0, UnitKind::In, UnitKind::Pt, &ctx),
            96.0 / PX_PER_PT,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert(1.0, UnitKind::In, UnitKind::Pt, &ctx),
            72.18,
            epsilon = 0.01
        );
        assert_relative_eq!(
            convert(1.0, UnitKind::Cm, UnitKind::Mm, &ctx),
            10.0,
            max_relative = 1e-12
        );
        assert_eq!(convert(1.0, UnitKind::Pc, UnitKind::Px, &ctx), 16.0);
    }

    #[test]
    fn test_viewport_dependence() {
        let ctx = ConversionContext::new(1280.0, 800.0);
        assert_eq!(convert(50.0, UnitKind::Vh, UnitKind::Px, &ctx), 400.0);

        let taller = ConversionContext::new(1280.0, 1000.0);
        assert_eq!(convert(50.0, UnitKind::Vh, UnitKind::Px, &taller), 500.0);
    }

    #[test]
    fn test_viewport_extremes() {
        let ctx = ConversionContext::new(1280.0, 800.0);
        assert_relative_eq!(
            convert(10.0, UnitKind::Vmin, UnitKind::Px, &ctx),
            80.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert(10.0, UnitKind::Vmax, UnitKind::Px, &ctx),
            128.0,
            max_relative = 1e-12
        );

        let portrait = ConversionContext::new(400.0, 900.0);
        assert_relative_eq!(
            convert(10.0, UnitKind::Vmin, UnitKind::Px, &portrait),
            40.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert(10.0, UnitKind::Vmax, UnitKind::Px, &portrait),
            90.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_percent_follows_viewport_width() {
        let ctx = ConversionContext::new(1280.0, 800.0);
        assert_eq!(
            convert(25.0, UnitKind::Percent, UnitKind::Px, &ctx),
            convert(25.0, UnitKind::Vw, UnitKind::Px, &ctx)
        );
        assert_eq!(convert(640.0, UnitKind::Px, UnitKind::Percent, &ctx), 50.0);
    }

    #[test]
    fn test_zero_viewport_yields_sentinel() {
        let ctx = ConversionContext::new(0.0, 0.0);
        assert!(convert(10.0, UnitKind::Px, UnitKind::Vw, &ctx).is_infinite());
        assert!(convert(0.0, UnitKind::Px, UnitKind::Vh, &ctx).is_nan());
        assert_eq!(convert(10.0, UnitKind::Vw, UnitKind::Px, &ctx), 0.0);
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        let ctx = ConversionContext::default();
        assert!(convert(f64::NAN, UnitKind::Px, UnitKind::Rem, &ctx).is_nan());
        assert_eq!(
            convert(f64::INFINITY, UnitKind::Cm, UnitKind::Px, &ctx),
            f64::INFINITY
        );
        assert!(convert(f64::NAN, UnitKind::Vh, UnitKind::Vh, &ctx).is_nan());
    }
}
