//! Weights of the estimation formula.
//!
//! Additive terms are expressed in days; adjustment factors are pure
//! multipliers applied to the summed days.
use crate::flow::{Complexity, Environment, FlowAttributes, FlowType, Frequency, UserLevel};

/// Fixed minimum effort of any flow.
pub const BASE_DAYS: f64 = 2.0;
pub const DAYS_PER_SOURCE: f64 = 0.8;
pub const DAYS_PER_TARGET: f64 = 1.2;
pub const DAYS_PER_TRANSFORMATION: f64 = 0.3;
pub const DAYS_PER_TRANSCODIFICATION: f64 = 0.5;
pub const DAYS_PER_RULE: f64 = 0.25;
pub const ARCHITECTURE_PIVOT_DAYS: f64 = 1.5;
pub const MESSAGING_QUEUE_DAYS: f64 = 1.0;
pub const TECHNICAL_ERROR_DAYS: f64 = 0.5;
pub const FUNCTIONAL_ERROR_DAYS: f64 = 0.5;
pub const LOG_HANDLING_DAYS: f64 = 0.5;
/// Upper bound of the data volume contribution.
pub const MAX_VOLUME_DAYS: f64 = 2.0;

impl Complexity {
    pub fn factor(self) -> f64 {
        match self {
            Complexity::Simple => 0.8,
            Complexity::Moderate => 1.0,
            Complexity::Complex => 1.4,
        }
    }
}

impl Environment {
    pub fn factor(self) -> f64 {
        match self {
            Environment::Dev => 0.9,
            Environment::Test => 1.0,
            Environment::Prod => 1.1,
        }
    }
}

impl Frequency {
    pub fn factor(self) -> f64 {
        match self {
            Frequency::Once => 1.0,
            Frequency::Daily => 1.1,
            Frequency::Weekly => 1.05,
            Frequency::Monthly => 1.02,
        }
    }
}

impl UserLevel {
    pub fn factor(self) -> f64 {
        match self {
            UserLevel::Junior => 1.5,
            UserLevel::Intermediate => 1.0,
            UserLevel::Expert => 0.8,
        }
    }
}

impl FlowType {
    pub fn factor(self) -> f64 {
        match self {
            FlowType::Synchronous => 1.0,
            FlowType::Asynchronous => 1.2,
        }
    }
}

/// Logarithmic contribution of the data volume, saturating at
/// [`MAX_VOLUME_DAYS`]. Negative or NaN volumes contribute nothing.
pub fn volume_impact(data_volume: f64) -> f64 {
    let volume = data_volume.max(0.0);
    (volume / 100.0 + 1.0).log10().min(MAX_VOLUME_DAYS)
}

fn bonus(enabled: bool, days: f64) -> f64 {
    if enabled { days } else { 0.0 }
}

/// The additive day terms of one flow, before adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayComponents {
    pub base: f64,
    pub sources: f64,
    pub targets: f64,
    pub transformations: f64,
    pub transcodifications: f64,
    pub rules: f64,
    pub architecture_pivot: f64,
    pub messaging_queue: f64,
    pub technical_errors: f64,
    pub functional_errors: f64,
    pub logs: f64,
    pub volume: f64,
}

impl DayComponents {
    pub fn of(flow: &FlowAttributes) -> Self {
        Self {
            base: BASE_DAYS,
            sources: f64::from(flow.sources) * DAYS_PER_SOURCE,
            targets: f64::from(flow.targets) * DAYS_PER_TARGET,
            transformations: f64::from(flow.transformations) * DAYS_PER_TRANSFORMATION,
            transcodifications: f64::from(flow.max_transcodifications) * DAYS_PER_TRANSCODIFICATION,
            rules: f64::from(flow.max_rules) * DAYS_PER_RULE,
            architecture_pivot: bonus(flow.architecture_pivot, ARCHITECTURE_PIVOT_DAYS),
            messaging_queue: bonus(flow.messaging_queue, MESSAGING_QUEUE_DAYS),
            technical_errors: bonus(flow.technical_error_handling, TECHNICAL_ERROR_DAYS),
            functional_errors: bonus(flow.functional_error_handling, FUNCTIONAL_ERROR_DAYS),
            logs: bonus(flow.log_handling, LOG_HANDLING_DAYS),
            volume: volume_impact(flow.data_volume),
        }
    }

    /// Sum of all terms, accumulated in declaration order so results are
    /// bit-for-bit reproducible.
    pub fn total(&self) -> f64 {
        self.base
            + self.sources
            + self.targets
            + self.transformations
            + self.transcodifications
            + self.rules
            + self.architecture_pivot
            + self.messaging_queue
            + self.technical_errors
            + self.functional_errors
            + self.logs
            + self.volume
    }
}

/// The multiplicative adjustments of one flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustments {
    pub complexity: f64,
    pub environment: f64,
    pub frequency: f64,
    pub user_level: f64,
    pub flow_type: f64,
}

impl Adjustments {
    pub fn of(flow: &FlowAttributes) -> Self {
        Self {
            complexity: flow.complexity.factor(),
            environment: flow.environment.factor(),
            frequency: flow.frequency.factor(),
            user_level: flow.user_level.factor(),
            flow_type: flow.flow_type.factor(),
        }
    }

    /// Applies every factor to `days`, one after the other.
    pub fn apply(&self, days: f64) -> f64 {
        days * self.complexity * self.environment * self.frequency * self.user_level * self.flow_type
    }
}
