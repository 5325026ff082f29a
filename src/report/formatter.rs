use super::{EstimateReport, FlowEstimate};
use crate::calculator::CalculationResult;
use std::fmt::Write;

/// Renders estimates as plain text for terminals and logs.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Formats a single calculation: total, phases and recommendations.
    pub fn format_result(result: &CalculationResult) -> String {
        let mut out = String::new();
        let parts = &result.breakdown;
        let _ = writeln!(out, "  Estimate:     {} ({})", result.time_estimate, result.complexity);
        let _ = writeln!(
            out,
            "  Phases:       development {} / testing {} / deployment {} / maintenance {}",
            parts.development, parts.testing, parts.deployment, parts.maintenance
        );
        for recommendation in &result.recommendations {
            let _ = writeln!(out, "  -> {}", recommendation);
        }
        out
    }

    /// Formats one flow estimate with its heading, cost and confidence.
    pub fn format_estimate(estimate: &FlowEstimate) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", estimate.name);
        if let Some(project) = &estimate.project {
            let _ = write!(out, " [{}]", project);
        }
        if let Some(tech) = estimate.tech {
            let _ = write!(out, " ({})", tech);
        }
        out.push('\n');
        out.push_str(&Self::format_result(&estimate.result));
        let _ = writeln!(
            out,
            "  Cost:         {} EUR, confidence {} ({}% contract)",
            estimate.cost_eur, estimate.confidence, estimate.contract_completeness
        );
        out
    }

    /// Formats every estimate followed by the per-project summary.
    pub fn format_report(report: &EstimateReport) -> String {
        let mut out = String::new();
        for estimate in &report.estimates {
            out.push_str(&Self::format_estimate(estimate));
            out.push('\n');
        }

        out.push_str("--- Project Summary ---\n");
        for project in &report.projects {
            let _ = writeln!(
                out,
                "{:<24} {:>3} flow(s) {:>5} days {:>9} EUR",
                project.project, project.flows, project.total_days, project.cost_eur
            );
        }
        let _ = writeln!(
            out,
            "{:<24} {:>3} flow(s) {:>5} days {:>9} EUR",
            "TOTAL",
            report.estimates.len(),
            report.total_days,
            report.cost_eur
        );
        out
    }
}
