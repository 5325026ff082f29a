//! Batch estimation of stored flows, with reference costs and per-project totals.
pub mod formatter;

pub use formatter::ReportFormatter;

use crate::calculator::{CalculationResult, CostCalculator};
use crate::config::AbacusConfig;
use crate::error::{FlowConversionError, ReportError};
use crate::flow::{FlowKind, FlowRecord, IntoFlowAttributes, Tech};
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Project name used for flows that do not belong to any project.
pub const UNASSIGNED_PROJECT: &str = "unassigned";

/// How far an estimate can be trusted, derived from how complete the
/// interface contract of the flow is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

impl Confidence {
    pub fn from_completeness(percent: f64) -> Self {
        if percent >= 80.0 {
            Confidence::High
        } else if percent >= 50.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// A single estimated flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEstimate {
    pub name: String,
    pub project: Option<String>,
    pub system: Option<String>,
    pub tech: Option<Tech>,
    pub kind: Option<FlowKind>,
    pub result: CalculationResult,
    /// `total_days` times the configured daily rate.
    pub cost_eur: u64,
    pub contract_completeness: f64,
    pub confidence: Confidence,
}

impl FlowEstimate {
    pub fn from_record(
        record: &FlowRecord,
        calculator: &CostCalculator,
        config: &AbacusConfig,
    ) -> Result<Self, ReportError> {
        let name = record.display_name().to_string();
        let wrap = |source: FlowConversionError| ReportError::Conversion {
            flow: name.clone(),
            source,
        };

        let attributes = record.into_flow_attributes().map_err(wrap)?;
        let result = calculator.calculate_cost(&attributes);
        let completeness = record.contract_completeness().map_err(wrap)?;

        // The stored estimate is informational; an unreadable one never blocks the report.
        match record.stored_estimate() {
            Ok(Some(stored)) if stored != result.total_days => {
                debug!(flow = %name, stored, computed = result.total_days, "stored estimate is stale");
            }
            Err(e) => debug!(flow = %name, error = %e, "ignoring unreadable stored estimate"),
            _ => {}
        }

        Ok(Self {
            cost_eur: u64::from(result.total_days) * u64::from(config.daily_rate),
            tech: record.tech().map_err(wrap)?,
            kind: record.flow_kind().map_err(wrap)?,
            project: record.project.clone(),
            system: record.system.clone(),
            contract_completeness: completeness,
            confidence: Confidence::from_completeness(completeness),
            result,
            name,
        })
    }
}

/// Totals for all flows of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTotal {
    pub project: String,
    pub flows: usize,
    pub total_days: u64,
    pub cost_eur: u64,
}

/// Estimates of a batch of flows, in input order, with per-project totals
/// sorted by project name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub estimates: Vec<FlowEstimate>,
    pub projects: Vec<ProjectTotal>,
    pub total_days: u64,
    pub cost_eur: u64,
}

impl EstimateReport {
    /// Estimates every record. The first record that cannot be converted
    /// aborts the report.
    pub fn from_records(
        records: &[FlowRecord],
        calculator: &CostCalculator,
        config: &AbacusConfig,
    ) -> Result<Self, ReportError> {
        let estimates = records
            .iter()
            .map(|record| FlowEstimate::from_record(record, calculator, config))
            .collect::<Result<Vec<_>, _>>()?;

        let mut by_project: AHashMap<&str, ProjectTotal> = AHashMap::new();
        for estimate in &estimates {
            let project = estimate.project.as_deref().unwrap_or(UNASSIGNED_PROJECT);
            let total = by_project.entry(project).or_insert_with(|| ProjectTotal {
                project: project.to_string(),
                flows: 0,
                total_days: 0,
                cost_eur: 0,
            });
            total.flows += 1;
            total.total_days += u64::from(estimate.result.total_days);
            total.cost_eur += estimate.cost_eur;
        }

        let projects: Vec<ProjectTotal> = by_project
            .into_values()
            .sorted_by(|a, b| a.project.cmp(&b.project))
            .collect();

        Ok(Self {
            total_days: projects.iter().map(|p| p.total_days).sum(),
            cost_eur: projects.iter().map(|p| p.cost_eur).sum(),
            projects,
            estimates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_thresholds() {
        assert_eq!(Confidence::from_completeness(100.0), Confidence::High);
        assert_eq!(Confidence::from_completeness(80.0), Confidence::High);
        assert_eq!(Confidence::from_completeness(79.9), Confidence::Medium);
        assert_eq!(Confidence::from_completeness(50.0), Confidence::Medium);
        assert_eq!(Confidence::from_completeness(49.0), Confidence::Low);
    }

    #[test]
    fn confidence_displays_like_its_json_label() {
        for confidence in [Confidence::High, Confidence::Medium, Confidence::Low] {
            let json = serde_json::to_value(confidence).unwrap();
            assert_eq!(json, confidence.to_string());
        }
    }
}
