use crate::error::FlowConversionError;
use serde::{Deserialize, Serialize};

/// A number as it arrives from a form or a stored row: either a JSON number or
/// its textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<u32> for RawNumber {
    fn from(value: u32) -> Self {
        RawNumber::Number(f64::from(value))
    }
}

/// A flow as stored by the surrounding application.
///
/// Field names follow the stored columns (`user_level`, `gestion_logs`, ...),
/// with camelCase and English aliases accepted. Every field is optional and
/// loosely typed; [`crate::flow::IntoFlowAttributes`] applies the defaults and
/// validation needed to obtain `FlowAttributes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowRecord {
    // --- Descriptive metadata (not used by the calculation) ---
    pub id: Option<String>,
    pub name: Option<String>,
    pub client: Option<String>,
    pub tech: Option<String>,
    #[serde(alias = "typeFlux")]
    pub type_flux: Option<String>,
    pub project: Option<String>,
    pub system: Option<String>,
    #[serde(alias = "contractCompleteness")]
    pub contract_completeness: Option<RawNumber>,
    pub comments: Option<String>,
    #[serde(alias = "estimatedDays")]
    pub estimated_days: Option<RawNumber>,

    // --- Estimation inputs ---
    pub sources: Option<RawNumber>,
    pub targets: Option<RawNumber>,
    pub transformations: Option<RawNumber>,
    pub complexity: Option<String>,
    #[serde(alias = "userLevel")]
    pub user_level: Option<String>,
    #[serde(alias = "dataVolume")]
    pub data_volume: Option<RawNumber>,
    pub frequency: Option<String>,
    pub environment: Option<String>,
    #[serde(alias = "flowType")]
    pub flow_type: Option<String>,
    #[serde(alias = "maxTranscodifications")]
    pub max_transcodifications: Option<RawNumber>,
    #[serde(alias = "maxRules")]
    pub max_rules: Option<RawNumber>,
    #[serde(alias = "architecturePivot")]
    pub architecture_pivot: Option<bool>,
    #[serde(alias = "messagingQueue")]
    pub messaging_queue: Option<bool>,
    #[serde(
        alias = "technical_error_handling",
        alias = "technicalErrorHandling",
        alias = "gestionErreursTechniques",
        alias = "gestionErreurstechniques"
    )]
    pub gestion_erreurs_techniques: Option<bool>,
    #[serde(
        alias = "functional_error_handling",
        alias = "functionalErrorHandling",
        alias = "gestionErreursFonctionnelles"
    )]
    pub gestion_erreurs_fonctionnelles: Option<bool>,
    #[serde(alias = "log_handling", alias = "logHandling", alias = "gestionLogs")]
    pub gestion_logs: Option<bool>,
}

/// A JSON document holding either one record or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<FlowRecord>),
    One(Box<FlowRecord>),
}

impl FlowRecord {
    /// Parses a single record from JSON.
    pub fn from_json(json: &str) -> Result<Self, FlowConversionError> {
        serde_json::from_str(json).map_err(|e| FlowConversionError::JsonParseError(e.to_string()))
    }

    /// Parses a JSON document that is either one record or an array of records.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, FlowConversionError> {
        let parsed: OneOrMany = serde_json::from_str(json)
            .map_err(|e| FlowConversionError::JsonParseError(e.to_string()))?;
        Ok(match parsed {
            OneOrMany::Many(records) => records,
            OneOrMany::One(record) => vec![*record],
        })
    }

    /// The name shown for this flow, falling back to its id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("unnamed flow")
    }
}
