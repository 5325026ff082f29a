//! Common test utilities for building flows and records.
use abacus::flow::RawNumber;
use abacus::prelude::*;

/// The smallest possible flow: one source, one target, nothing else, built by
/// an expert in development.
///
/// Expected: 4.0 raw days x 0.576 = 2.304, so 2 days.
#[allow(dead_code)]
pub fn minimal_flow() -> FlowAttributes {
    FlowAttributes {
        sources: 1,
        targets: 1,
        transformations: 0,
        complexity: Complexity::Simple,
        user_level: UserLevel::Expert,
        data_volume: 0.0,
        frequency: Frequency::Once,
        environment: Environment::Dev,
        flow_type: FlowType::Synchronous,
        max_transcodifications: 0,
        max_rules: 0,
        architecture_pivot: false,
        messaging_queue: false,
        technical_error_handling: false,
        functional_error_handling: false,
        log_handling: false,
    }
}

/// A typical production flow with most options enabled.
///
/// Expected: 17.3 raw days x 1.452 = 25.1196, so 25 days.
#[allow(dead_code)]
pub fn sample_flow() -> FlowAttributes {
    FlowAttributes {
        sources: 3,
        targets: 2,
        transformations: 5,
        complexity: Complexity::Moderate,
        user_level: UserLevel::Intermediate,
        data_volume: 10_000.0,
        frequency: Frequency::Daily,
        environment: Environment::Prod,
        flow_type: FlowType::Asynchronous,
        max_transcodifications: 3,
        max_rules: 10,
        architecture_pivot: true,
        messaging_queue: false,
        technical_error_handling: true,
        functional_error_handling: true,
        log_handling: true,
    }
}

/// A flow maximizing every additive term and every factor.
#[allow(dead_code)]
pub fn oversized_flow() -> FlowAttributes {
    FlowAttributes {
        sources: 20,
        targets: 20,
        transformations: 50,
        complexity: Complexity::Complex,
        user_level: UserLevel::Junior,
        data_volume: 0.0,
        frequency: Frequency::Daily,
        environment: Environment::Prod,
        flow_type: FlowType::Asynchronous,
        max_transcodifications: 100,
        max_rules: 100,
        architecture_pivot: true,
        messaging_queue: true,
        technical_error_handling: true,
        functional_error_handling: true,
        log_handling: true,
    }
}

/// A stored record, as the web application would persist it.
#[allow(dead_code)]
pub fn stored_record(name: &str, project: Option<&str>, sources: u32) -> FlowRecord {
    FlowRecord {
        name: Some(name.to_string()),
        project: project.map(str::to_string),
        tech: Some("Talend".to_string()),
        sources: Some(sources.into()),
        targets: Some(1u32.into()),
        complexity: Some("simple".to_string()),
        user_level: Some("expert".to_string()),
        data_volume: Some(RawNumber::Number(0.0)),
        frequency: Some("unique".to_string()),
        environment: Some("dev".to_string()),
        flow_type: Some("synchrone".to_string()),
        ..FlowRecord::default()
    }
}
