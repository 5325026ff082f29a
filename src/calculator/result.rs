use super::breakdown::PhaseBreakdown;
use crate::flow::Complexity;
use serde::{Deserialize, Serialize};

/// Outcome of estimating a single flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Estimated effort in person-days, within `[1, 100]`. This is the value
    /// stored as `estimated_days`.
    pub total_days: u32,
    pub breakdown: PhaseBreakdown,
    /// Working weeks, `total_days / 5` rounded up.
    pub weeks: u32,
    /// Localized label such as `12j (3 sem.)`.
    pub time_estimate: String,
    pub complexity: Complexity,
    /// Ordered advice, never empty.
    pub recommendations: Vec<String>,
}
