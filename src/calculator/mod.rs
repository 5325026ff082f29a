//! The effort estimation formula.
//!
//! An estimate is a weighted sum of day components (counts, option bonuses and
//! a saturating data-volume term), scaled by one factor per qualitative
//! attribute, rounded half away from zero and clamped to `[1, 100]` days.
pub mod breakdown;
pub mod factors;
pub mod recommendation;
pub mod result;

pub use breakdown::PhaseBreakdown;
pub use factors::{Adjustments, DayComponents};
pub use recommendation::Recommendation;
pub use result::CalculationResult;

use crate::flow::FlowAttributes;
use crate::locale::Locale;
use tracing::{trace, warn};

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 100;

/// Estimates the effort of a flow.
///
/// The calculator holds no state besides the output language; it can be
/// copied freely and shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostCalculator {
    locale: Locale,
}

impl CostCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Computes the estimate for `flow`. Deterministic and infallible.
    pub fn calculate_cost(&self, flow: &FlowAttributes) -> CalculationResult {
        if flow.data_volume.is_nan() || flow.data_volume < 0.0 {
            warn!(data_volume = flow.data_volume, "data volume is not a positive number, ignoring it");
        }

        let raw_days = DayComponents::of(flow).total();
        let adjusted_days = Adjustments::of(flow).apply(raw_days);
        let total_days = clamp_days(adjusted_days);

        let recommendations = Recommendation::evaluate(flow, total_days)
            .into_iter()
            .map(|rec| rec.message(self.locale).to_string())
            .collect();

        trace!(raw_days, adjusted_days, total_days, "flow estimated");

        CalculationResult {
            total_days,
            breakdown: PhaseBreakdown::from_total(total_days),
            weeks: breakdown::weeks(total_days),
            time_estimate: breakdown::time_label(total_days, self.locale),
            complexity: flow.complexity,
            recommendations,
        }
    }
}

/// Estimates `flow` with the default (English) calculator.
pub fn calculate_cost(flow: &FlowAttributes) -> CalculationResult {
    CostCalculator::new().calculate_cost(flow)
}

/// Rounds half away from zero, then clamps to `[MIN_DAYS, MAX_DAYS]`.
fn clamp_days(days: f64) -> u32 {
    days.round().clamp(f64::from(MIN_DAYS), f64::from(MAX_DAYS)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(clamp_days(2.5), 3);
        assert_eq!(clamp_days(2.4999), 2);
        assert_eq!(clamp_days(0.2), 1);
        assert_eq!(clamp_days(250.0), 100);
        assert_eq!(clamp_days(f64::INFINITY), 100);
    }

    #[test]
    fn locale_applies_to_label_and_recommendations() {
        let flow = FlowAttributes::default();
        let fr = CostCalculator::with_locale(Locale::Fr).calculate_cost(&flow);
        let en = CostCalculator::new().calculate_cost(&flow);
        assert_eq!(fr.total_days, en.total_days);
        assert!(fr.time_estimate.contains("sem."));
        assert_eq!(fr.recommendations, vec!["Configuration optimale détectée"]);
        assert_eq!(en.recommendations, vec!["Optimal configuration detected"]);
    }
}
