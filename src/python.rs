use crate::calculator::{CalculationResult, CostCalculator};
use crate::config::AbacusConfig;
use crate::flow::{FlowRecord, IntoFlowAttributes};
use crate::locale::Locale;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for CalculationResult {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let breakdown = PyDict::new(py);
        breakdown.set_item("development", self.breakdown.development)?;
        breakdown.set_item("testing", self.breakdown.testing)?;
        breakdown.set_item("deployment", self.breakdown.deployment)?;
        breakdown.set_item("maintenance", self.breakdown.maintenance)?;

        let dict = PyDict::new(py);
        dict.set_item("total_days", self.total_days)?;
        dict.set_item("breakdown", breakdown)?;
        dict.set_item("weeks", self.weeks)?;
        dict.set_item("time_estimate", self.time_estimate)?;
        dict.set_item("complexity", self.complexity.as_str())?;
        dict.set_item("recommendations", self.recommendations)?;

        Ok(dict)
    }
}

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Effort estimation for data-integration flows.
///
/// The instance only remembers the output language; `calculate_cost` can be
/// called any number of times, from any thread.
#[pyclass(name = "Abacus")]
struct AbacusPy {
    calculator: CostCalculator,
    config: AbacusConfig,
}

#[pymethods]
impl AbacusPy {
    /// Creates an estimator.
    ///
    /// Args:
    ///     locale (str, optional): "en" (default) or "fr".
    ///     daily_rate (int, optional): euros per person-day (default 600).
    ///
    /// Raises:
    ///     ValueError: If the locale is unknown or the rate is zero.
    #[new]
    #[pyo3(signature = (locale=None, daily_rate=None))]
    fn new(locale: Option<&str>, daily_rate: Option<u32>) -> PyResult<Self> {
        let mut config = AbacusConfig::default();
        if let Some(locale) = locale {
            config = config.with_locale(locale.parse::<Locale>().map_err(value_error)?);
        }
        if let Some(rate) = daily_rate {
            config = config.with_daily_rate(rate).map_err(value_error)?;
        }

        Ok(Self {
            calculator: config.calculator(),
            config,
        })
    }

    /// Estimates one flow.
    ///
    /// Args:
    ///     record_json (str): The flow as a JSON object, using the stored
    ///         field names (`sources`, `user_level`, `gestion_logs`, ...).
    ///
    /// Returns:
    ///     dict: `total_days`, `breakdown`, `weeks`, `time_estimate`,
    ///         `complexity` and `recommendations`.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or a field holds an
    ///         unknown value.
    fn calculate_cost(&self, record_json: &str) -> PyResult<CalculationResult> {
        let flow = FlowRecord::from_json(record_json)
            .and_then(IntoFlowAttributes::into_flow_attributes)
            .map_err(value_error)?;
        Ok(self.calculator.calculate_cost(&flow))
    }

    /// Reference cost in euros of an estimate of `total_days`.
    fn cost_eur(&self, total_days: u32) -> u64 {
        u64::from(total_days) * u64::from(self.config.daily_rate)
    }
}

/// Effort estimation for ETL/ESB data-integration flows.
#[pymodule]
fn abacus(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<AbacusPy>()?;
    Ok(())
}
