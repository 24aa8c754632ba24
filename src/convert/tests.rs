#[cfg(test)]
mod tests {
    use super::super::context::ConversionContext;
    use super::super::engine::convert;
    use crate::units::formatter::format;
    use crate::units::kind::UnitKind;
    use approx::relative_eq;
    use proptest::prelude::*;

    fn any_unit() -> impl Strategy<Value = UnitKind> {
        proptest::sample::select(UnitKind::ALL.to_vec())
    }

    fn any_context() -> impl Strategy<Value = ConversionContext> {
        (100.0f64..4000.0, 100.0f64..4000.0)
            .prop_map(|(width, height)| ConversionContext::new(width, height))
    }

    proptest! {
        #[test]
        fn round_trip_returns_original(
            value in -1.0e6f64..1.0e6,
            from in any_unit(),
            to in any_unit(),
            ctx in any_context(),
        ) {
            let there = convert(value, from, to, &ctx);
            let back = convert(there, to, from, &ctx);
            prop_assert!(
                relative_eq!(back, value, epsilon = 1e-9, max_relative = 1e-6),
                "{} {} -> {} {} -> {} {}", value, from, there, to, back, from
            );
        }

        #[test]
        fn identity_is_exact(value in proptest::num::f64::ANY, unit in any_unit(), ctx in any_context()) {
            let converted = convert(value, unit, unit, &ctx);
            if value.is_nan() {
                prop_assert!(converted.is_nan());
            } else {
                prop_assert_eq!(converted, value);
            }
        }

        #[test]
        fn finite_inputs_give_finite_outputs(
            value in -1.0e6f64..1.0e6,
            from in any_unit(),
            to in any_unit(),
            ctx in any_context(),
        ) {
            prop_assert!(convert(value, from, to, &ctx).is_finite());
        }
    }

    #[test]
    fn test_px_to_rem_scenario() {
        let ctx = ConversionContext::new(1280.0, 800.0);
        let rem = convert(16.0, UnitKind::Px, UnitKind::Rem, &ctx);
        assert_eq!(rem, 1.0);
        assert_eq!(format(rem, UnitKind::Rem), "1.000rem");
    }

    #[test]
    fn test_all_pairs_round_trip_on_common_viewports() {
        let viewports = [
            ConversionContext::new(1280.0, 800.0),
            ConversionContext::new(375.0, 812.0),
            ConversionContext::new(1920.0, 1080.0),
        ];
        for ctx in &viewports {
            for from in UnitKind::ALL {
                for to in UnitKind::ALL {
                    let back = convert(convert(42.5, from, to, ctx), to, from, ctx);
                    assert!(
                        relative_eq!(back, 42.5, max_relative = 1e-6),
                        "{} -> {} on {:?}",
                        from,
                        to,
                        ctx
                    );
                }
            }
        }
    }
}
