//! # Abacus - Effort Estimation for Data-Integration Flows
//!
//! **Abacus** estimates, in person-days, the effort needed to build an ETL/ESB
//! flow from a handful of attributes: source and target counts, transformations,
//! business rules, qualitative complexity, developer experience, data volume,
//! run frequency and error-handling options.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the flow**: build a [`flow::FlowAttributes`] directly, or load a
//!     stored [`flow::FlowRecord`] and convert it with [`flow::IntoFlowAttributes`].
//! 2.  **Estimate**: call [`calculator::CostCalculator::calculate_cost`]. The
//!     calculation is pure and deterministic, so it can be repeated whenever an
//!     attribute changes.
//! 3.  **Report** (optional): [`report::EstimateReport`] estimates a batch of
//!     records, adds a reference cost and groups totals per project.
//!
//! ## Quick Start
//!
//! ```rust
//! use abacus::prelude::*;
//!
//! let flow = FlowAttributes {
//!     sources: 3,
//!     targets: 2,
//!     transformations: 5,
//!     complexity: Complexity::Moderate,
//!     user_level: UserLevel::Intermediate,
//!     data_volume: 10_000.0,
//!     frequency: Frequency::Daily,
//!     environment: Environment::Prod,
//!     flow_type: FlowType::Asynchronous,
//!     max_transcodifications: 3,
//!     max_rules: 10,
//!     architecture_pivot: true,
//!     messaging_queue: false,
//!     technical_error_handling: true,
//!     functional_error_handling: true,
//!     log_handling: true,
//! };
//!
//! let result = CostCalculator::with_locale(Locale::Fr).calculate_cost(&flow);
//! assert_eq!(result.total_days, 25);
//! assert_eq!(result.time_estimate, "25j (5 sem.)");
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod flow;
pub mod locale;
pub mod prelude;
pub mod report;

#[cfg(feature = "python-bindings")]
mod python;
