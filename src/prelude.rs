//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the abacus crate.
//!
//! # Example
//!
//! ```rust
//! use abacus::prelude::*;
//!
//! let record = FlowRecord::from_json(r#"{"sources": 2, "complexity": "complexe"}"#)?;
//! let flow = record.into_flow_attributes()?;
//! let result = CostCalculator::new().calculate_cost(&flow);
//! assert!((1..=100).contains(&result.total_days));
//! # Ok::<(), FlowConversionError>(())
//! ```

// Core calculation
pub use crate::calculator::{
    CalculationResult, CostCalculator, PhaseBreakdown, Recommendation, calculate_cost,
};

// Flow model and conversion
pub use crate::flow::{
    Complexity, Environment, FlowAttributes, FlowKind, FlowRecord, FlowType, Frequency,
    IntoFlowAttributes, Tech, UserLevel,
};

// Reporting and configuration
pub use crate::config::AbacusConfig;
pub use crate::locale::Locale;
pub use crate::report::{Confidence, EstimateReport, FlowEstimate, ReportFormatter};

// Error types
pub use crate::error::{ConfigError, FlowConversionError, ReportError};
