//! Unit tests for labels, errors and configuration.
mod common;
use abacus::prelude::*;
use common::*;

#[test]
fn test_enum_display() {
    assert_eq!(format!("{}", Complexity::Complex), "complex");
    assert_eq!(format!("{}", UserLevel::Intermediate), "intermediate");
    assert_eq!(format!("{}", FlowKind::DataService), "data service");
    assert_eq!(format!("{}", Locale::Fr), "fr");
}

#[test]
fn test_error_display() {
    let err = FlowConversionError::UnknownVariant {
        field: "complexity".to_string(),
        value: "extreme".to_string(),
    };
    assert!(err.to_string().contains("complexity"));
    assert!(err.to_string().contains("extreme"));

    let err = FlowConversionError::InvalidNumber {
        field: "sources".to_string(),
        value: "a few".to_string(),
    };
    assert!(err.to_string().contains("expects a number"));

    let err = ConfigError::InvalidValue {
        key: "ABACUS_DAILY_RATE".to_string(),
        value: "0".to_string(),
        reason: "must be greater than zero".to_string(),
    };
    assert!(err.to_string().contains("ABACUS_DAILY_RATE"));
}

#[test]
fn test_report_error_keeps_source() {
    use std::error::Error;

    let err = ReportError::Conversion {
        flow: "orders".to_string(),
        source: FlowConversionError::JsonParseError("eof".to_string()),
    };
    assert!(err.to_string().starts_with("Flow 'orders'"));
    assert!(err.source().is_some());
}

#[test]
fn test_attributes_round_trip_through_json() {
    let flow = sample_flow();
    let json = serde_json::to_string(&flow).unwrap();
    assert!(json.contains("\"flow_type\":\"asynchronous\""));
    let parsed: FlowAttributes = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, flow);
}

#[test]
fn test_attributes_reject_unknown_labels() {
    let json = r#"{"sources":1,"targets":1,"transformations":0,"complexity":"huge",
        "user_level":"expert","data_volume":0,"frequency":"once","environment":"dev",
        "flow_type":"synchronous","max_transcodifications":0,"max_rules":0,
        "architecture_pivot":false,"messaging_queue":false,"technical_error_handling":false,
        "functional_error_handling":false,"log_handling":false}"#;
    let err = serde_json::from_str::<FlowAttributes>(json).unwrap_err();
    assert!(err.to_string().contains("huge"));
}

#[test]
fn test_locale_parsing() {
    assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
    assert_eq!("english".parse::<Locale>().unwrap(), Locale::En);
    assert!("de".parse::<Locale>().is_err());
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let calculator = CostCalculator::new();
    let flow = sample_flow();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let flow = flow.clone();
            std::thread::spawn(move || calculator.calculate_cost(&flow).total_days)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 25);
    }
}
