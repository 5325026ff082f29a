//! Property tests over arbitrary flows.
use abacus::prelude::*;
use proptest::prelude::*;
use proptest::sample::select;

prop_compose! {
    fn arb_counts()(
        sources in 1u32..60,
        targets in 1u32..60,
        transformations in 0u32..120,
        max_transcodifications in 0u32..120,
        max_rules in 0u32..200,
    ) -> (u32, u32, u32, u32, u32) {
        (sources, targets, transformations, max_transcodifications, max_rules)
    }
}

prop_compose! {
    fn arb_flow()(
        (sources, targets, transformations, max_transcodifications, max_rules) in arb_counts(),
        complexity in select(Complexity::ALL),
        user_level in select(UserLevel::ALL),
        frequency in select(Frequency::ALL),
        environment in select(Environment::ALL),
        flow_type in select(FlowType::ALL),
        data_volume in 0.0f64..1e9,
        flags in any::<[bool; 5]>(),
    ) -> FlowAttributes {
        FlowAttributes {
            sources,
            targets,
            transformations,
            complexity,
            user_level,
            data_volume,
            frequency,
            environment,
            flow_type,
            max_transcodifications,
            max_rules,
            architecture_pivot: flags[0],
            messaging_queue: flags[1],
            technical_error_handling: flags[2],
            functional_error_handling: flags[3],
            log_handling: flags[4],
        }
    }
}

/// Increments the count selected by `field`.
fn bump(flow: &FlowAttributes, field: usize, by: u32) -> FlowAttributes {
    let mut bumped = flow.clone();
    match field {
        0 => bumped.sources += by,
        1 => bumped.targets += by,
        2 => bumped.transformations += by,
        3 => bumped.max_transcodifications += by,
        _ => bumped.max_rules += by,
    }
    bumped
}

proptest! {
    #[test]
    fn prop_deterministic(flow in arb_flow()) {
        let calculator = CostCalculator::new();
        prop_assert_eq!(calculator.calculate_cost(&flow), calculator.calculate_cost(&flow));
    }

    #[test]
    fn prop_total_days_bounded(flow in arb_flow()) {
        let result = calculate_cost(&flow);
        prop_assert!((1..=100).contains(&result.total_days));
    }

    #[test]
    fn prop_monotonic_in_counts(flow in arb_flow(), field in 0usize..5, by in 1u32..20) {
        let before = calculate_cost(&flow).total_days;
        let after = calculate_cost(&bump(&flow, field, by)).total_days;
        prop_assert!(after >= before, "{} -> {} after bumping field {}", before, after, field);
    }

    #[test]
    fn prop_breakdown_covers_total(flow in arb_flow()) {
        let result = calculate_cost(&flow);
        let sum = result.breakdown.sum();
        prop_assert!(sum >= result.total_days);
        prop_assert!(sum <= result.total_days + 3);
        prop_assert_eq!(result.weeks, result.total_days.div_ceil(5));
    }

    #[test]
    fn prop_recommendations_not_empty(flow in arb_flow(), locale in select(vec![Locale::En, Locale::Fr])) {
        let result = CostCalculator::with_locale(locale).calculate_cost(&flow);
        prop_assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn prop_locale_does_not_change_figures(flow in arb_flow()) {
        let en = CostCalculator::with_locale(Locale::En).calculate_cost(&flow);
        let fr = CostCalculator::with_locale(Locale::Fr).calculate_cost(&flow);
        prop_assert_eq!(en.total_days, fr.total_days);
        prop_assert_eq!(en.breakdown, fr.breakdown);
        prop_assert_eq!(en.recommendations.len(), fr.recommendations.len());
    }
}
