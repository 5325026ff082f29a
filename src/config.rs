//! Runtime configuration.
use crate::calculator::CostCalculator;
use crate::error::ConfigError;
use crate::locale::Locale;
use std::env;
use std::str::FromStr;

/// Reference daily rate of the desktop prototype, in euros.
pub const DEFAULT_DAILY_RATE: u32 = 600;

/// Settings shared by the reporting layer and the tools.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbacusConfig {
    /// Euros per person-day, used for the reference cost of an estimate.
    pub daily_rate: u32,
    pub locale: Locale,
}

impl Default for AbacusConfig {
    fn default() -> Self {
        Self {
            daily_rate: DEFAULT_DAILY_RATE,
            locale: Locale::default(),
        }
    }
}

impl AbacusConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ABACUS_DAILY_RATE` - Daily rate in euros (default: 600, must be positive)
    /// - `ABACUS_LOCALE` - `en` or `fr` (default: en)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AbacusConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rate) = read_var::<u32, _>(&lookup, "ABACUS_DAILY_RATE")? {
            config = config.with_daily_rate(rate)?;
        }
        if let Some(locale) = lookup("ABACUS_LOCALE") {
            config.locale = locale.parse().map_err(|e| match e {
                ConfigError::InvalidValue { value, reason, .. } => ConfigError::InvalidValue {
                    key: "ABACUS_LOCALE".to_string(),
                    value,
                    reason,
                },
            })?;
        }

        Ok(config)
    }

    pub fn with_daily_rate(mut self, daily_rate: u32) -> Result<Self, ConfigError> {
        if daily_rate == 0 {
            return Err(ConfigError::InvalidValue {
                key: "daily_rate".to_string(),
                value: daily_rate.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        self.daily_rate = daily_rate;
        Ok(self)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// A calculator producing text in the configured language.
    pub fn calculator(&self) -> CostCalculator {
        CostCalculator::with_locale(self.locale)
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.clone(),
            reason: "not a valid number".to_string(),
        })
}
