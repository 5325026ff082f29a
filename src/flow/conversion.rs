use super::attributes::{FlowAttributes, FlowKind, Tech};
use super::record::{FlowRecord, RawNumber};
use crate::error::FlowConversionError;
use std::str::FromStr;
use tracing::debug;

/// A trait for data models that can be turned into validated `FlowAttributes`.
///
/// This is the seam between the surrounding application (forms, stored rows,
/// imported files) and the cost calculator. The calculator itself never
/// validates: anything implementing this trait is responsible for defaults and
/// for rejecting values that cannot be represented.
///
/// # Example
///
/// ```rust
/// use abacus::prelude::*;
/// use abacus::error::FlowConversionError;
///
/// struct Spreadsheet { sources: u32, complexity: String }
///
/// impl IntoFlowAttributes for Spreadsheet {
///     fn into_flow_attributes(self) -> Result<FlowAttributes, FlowConversionError> {
///         Ok(FlowAttributes {
///             sources: self.sources.max(1),
///             complexity: self.complexity.parse()?,
///             ..FlowAttributes::default()
///         })
///     }
/// }
///
/// let flow = Spreadsheet { sources: 2, complexity: "complexe".into() }
///     .into_flow_attributes()
///     .unwrap();
/// assert_eq!(flow.complexity, Complexity::Complex);
/// ```
pub trait IntoFlowAttributes {
    /// Consumes the value and produces the attributes the calculator works on.
    fn into_flow_attributes(self) -> Result<FlowAttributes, FlowConversionError>;
}

impl IntoFlowAttributes for FlowAttributes {
    fn into_flow_attributes(self) -> Result<FlowAttributes, FlowConversionError> {
        Ok(self)
    }
}

impl IntoFlowAttributes for FlowRecord {
    fn into_flow_attributes(self) -> Result<FlowAttributes, FlowConversionError> {
        (&self).into_flow_attributes()
    }
}

impl IntoFlowAttributes for &FlowRecord {
    fn into_flow_attributes(self) -> Result<FlowAttributes, FlowConversionError> {
        let defaults = FlowAttributes::default();

        Ok(FlowAttributes {
            sources: count("sources", self.sources.as_ref(), defaults.sources)?,
            targets: count("targets", self.targets.as_ref(), defaults.targets)?,
            transformations: count(
                "transformations",
                self.transformations.as_ref(),
                defaults.transformations,
            )?,
            complexity: label(self.complexity.as_deref())?.unwrap_or(defaults.complexity),
            user_level: label(self.user_level.as_deref())?.unwrap_or(defaults.user_level),
            data_volume: volume("data_volume", self.data_volume.as_ref(), defaults.data_volume)?,
            frequency: label(self.frequency.as_deref())?.unwrap_or(defaults.frequency),
            environment: label(self.environment.as_deref())?.unwrap_or(defaults.environment),
            flow_type: label(self.flow_type.as_deref())?.unwrap_or(defaults.flow_type),
            max_transcodifications: count(
                "max_transcodifications",
                self.max_transcodifications.as_ref(),
                defaults.max_transcodifications,
            )?,
            max_rules: count("max_rules", self.max_rules.as_ref(), defaults.max_rules)?,
            architecture_pivot: self.architecture_pivot.unwrap_or(false),
            messaging_queue: self.messaging_queue.unwrap_or(false),
            technical_error_handling: self.gestion_erreurs_techniques.unwrap_or(false),
            functional_error_handling: self.gestion_erreurs_fonctionnelles.unwrap_or(false),
            log_handling: self.gestion_logs.unwrap_or(false),
        })
    }
}

impl FlowRecord {
    /// The integration platform, if the record names one.
    pub fn tech(&self) -> Result<Option<Tech>, FlowConversionError> {
        label(self.tech.as_deref())
    }

    /// The artifact kind, if the record names one.
    pub fn flow_kind(&self) -> Result<Option<FlowKind>, FlowConversionError> {
        label(self.type_flux.as_deref())
    }

    /// Interface contract completeness in percent, clamped to `[0, 100]`.
    /// A missing value counts as a complete contract.
    pub fn contract_completeness(&self) -> Result<f64, FlowConversionError> {
        let raw = number("contract_completeness", self.contract_completeness.as_ref())?;
        Ok(raw.map_or(100.0, |value| value.clamp(0.0, 100.0)))
    }

    /// The day estimate saved alongside the record, rounded to whole days.
    pub fn stored_estimate(&self) -> Result<Option<u32>, FlowConversionError> {
        let raw = number("estimated_days", self.estimated_days.as_ref())?;
        Ok(raw
            .filter(|days| *days >= 0.0)
            .map(|days| days.round().min(f64::from(u32::MAX)) as u32))
    }
}

/// Parses an optional label; blank labels count as missing.
fn label<T>(raw: Option<&str>) -> Result<Option<T>, FlowConversionError>
where
    T: FromStr<Err = FlowConversionError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Reads a number, treating null, blank and non-finite values as missing.
fn number(field: &str, raw: Option<&RawNumber>) -> Result<Option<f64>, FlowConversionError> {
    let value = match raw {
        None => return Ok(None),
        Some(RawNumber::Number(n)) => *n,
        Some(RawNumber::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            let invalid = || FlowConversionError::InvalidNumber {
                field: field.to_string(),
                value: text.clone(),
            };
            if is_grouped_thousands(trimmed) {
                return Err(invalid());
            }
            trimmed.replace(',', ".").parse::<f64>().map_err(|_| invalid())?
        }
    };
    Ok(value.is_finite().then_some(value))
}

/// A comma followed by exactly three digits (`1,000`) is ambiguous between a
/// thousands group and a decimal part.
fn is_grouped_thousands(text: &str) -> bool {
    text.split_once(',')
        .is_some_and(|(_, tail)| tail.len() == 3 && tail.bytes().all(|b| b.is_ascii_digit()))
}

/// Reads a count. Fractions are truncated; missing, negative and zero values
/// fall back to `default`, so a zero never overrides a default of one.
fn count(field: &str, raw: Option<&RawNumber>, default: u32) -> Result<u32, FlowConversionError> {
    let counted = number(field, raw)?
        .map(f64::trunc)
        .filter(|n| *n >= 1.0)
        .map(|n| n.min(f64::from(u32::MAX)) as u32);

    Ok(counted.unwrap_or_else(|| {
        if raw.is_some() {
            debug!(field, default, "count is missing or not positive, using default");
        }
        default
    }))
}

/// Reads the data volume. Zero is a valid volume; negative values fall back
/// to `default`.
fn volume(field: &str, raw: Option<&RawNumber>, default: f64) -> Result<f64, FlowConversionError> {
    let measured = number(field, raw)?.filter(|n| *n >= 0.0);
    Ok(measured.unwrap_or_else(|| {
        if raw.is_some() {
            debug!(field, default, "volume is missing or negative, using default");
        }
        default
    }))
}
