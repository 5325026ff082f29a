use crate::flow::{Complexity, FlowAttributes, Frequency, UserLevel};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// Qualitative advice attached to an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ConsolidateSources,
    SimplifyTransformations,
    PhasedDelivery,
    OptimizeDailyVolume,
    SeniorMentoring,
    ExpertOptimization,
    /// Emitted alone, when no other rule applies.
    OptimalConfiguration,
}

const MAX_SOURCES: u32 = 5;
const MAX_TRANSFORMATIONS: u32 = 20;
const PHASED_DELIVERY_DAYS: u32 = 25;
const LARGE_DAILY_VOLUME: f64 = 1000.0;

impl Recommendation {
    /// Evaluates every rule against a flow and its final (clamped) day count.
    ///
    /// Rules are independent and reported in a fixed order; the result is
    /// never empty.
    pub fn evaluate(flow: &FlowAttributes, total_days: u32) -> Vec<Recommendation> {
        let complex = flow.complexity == Complexity::Complex;
        let rules = [
            (flow.sources > MAX_SOURCES, Recommendation::ConsolidateSources),
            (
                flow.transformations > MAX_TRANSFORMATIONS,
                Recommendation::SimplifyTransformations,
            ),
            (
                complex && total_days > PHASED_DELIVERY_DAYS,
                Recommendation::PhasedDelivery,
            ),
            (
                flow.frequency == Frequency::Daily && flow.data_volume > LARGE_DAILY_VOLUME,
                Recommendation::OptimizeDailyVolume,
            ),
            (
                flow.user_level == UserLevel::Junior && complex,
                Recommendation::SeniorMentoring,
            ),
            (
                flow.user_level == UserLevel::Expert && flow.complexity == Complexity::Simple,
                Recommendation::ExpertOptimization,
            ),
        ];

        let mut matched: Vec<_> = rules
            .into_iter()
            .filter_map(|(applies, rec)| applies.then_some(rec))
            .collect();
        if matched.is_empty() {
            matched.push(Recommendation::OptimalConfiguration);
        }
        matched
    }

    pub fn message(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Recommendation::ConsolidateSources, Locale::En) => {
                "Consider consolidating data sources"
            }
            (Recommendation::ConsolidateSources, Locale::Fr) => {
                "Considérez la consolidation des sources de données"
            }
            (Recommendation::SimplifyTransformations, Locale::En) => {
                "Consider simplifying transformations"
            }
            (Recommendation::SimplifyTransformations, Locale::Fr) => {
                "Évaluez la possibilité de simplifier les transformations"
            }
            (Recommendation::PhasedDelivery, Locale::En) => {
                "Consider phased delivery to reduce risk"
            }
            (Recommendation::PhasedDelivery, Locale::Fr) => {
                "Envisagez un découpage en phases pour réduire les risques"
            }
            (Recommendation::OptimizeDailyVolume, Locale::En) => {
                "Optimize performance for large daily volumes"
            }
            (Recommendation::OptimizeDailyVolume, Locale::Fr) => {
                "Optimisez les performances pour les gros volumes quotidiens"
            }
            (Recommendation::SeniorMentoring, Locale::En) => {
                "Plan senior mentoring for this junior developer"
            }
            (Recommendation::SeniorMentoring, Locale::Fr) => {
                "Prévoyez un accompagnement senior pour ce développeur junior"
            }
            (Recommendation::ExpertOptimization, Locale::En) => {
                "This expert could further optimize this simple flow"
            }
            (Recommendation::ExpertOptimization, Locale::Fr) => {
                "Ce développeur expert pourrait optimiser davantage ce flux simple"
            }
            (Recommendation::OptimalConfiguration, Locale::En) => "Optimal configuration detected",
            (Recommendation::OptimalConfiguration, Locale::Fr) => "Configuration optimale détectée",
        }
    }
}
