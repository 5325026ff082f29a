use crate::error::FlowConversionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declares a closed set of labels for one flow field.
///
/// Every variant has a canonical lowercase English label (used for display and
/// serialization) and may accept extra labels when parsing, such as the French
/// names stored by older records. Parsing is case-insensitive and an unknown
/// label is reported with the field name instead of being silently defaulted.
macro_rules! flow_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $canonical:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Name of the record field this value is read from.
            pub const FIELD: &'static str = $field;

            /// The canonical label of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $canonical,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FlowConversionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($canonical $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(FlowConversionError::UnknownVariant {
                        field: $field.to_string(),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

flow_enum! {
    /// Qualitative size tier of a flow.
    Complexity, field = "complexity" {
        Simple => "simple",
        #[default]
        Moderate => "moderate" | "modérée" | "moderee" | "modéré",
        Complex => "complex" | "complexe",
    }
}

flow_enum! {
    /// Experience level of the developer building the flow.
    UserLevel, field = "user_level" {
        /// 0 to 2 years of experience.
        Junior => "junior",
        /// 2 to 5 years of experience, the reference level.
        #[default]
        Intermediate => "intermediate" | "confirmé" | "confirme",
        /// More than 5 years of experience.
        Expert => "expert",
    }
}

flow_enum! {
    /// How often the flow runs once deployed.
    Frequency, field = "frequency" {
        Once => "once" | "unique",
        #[default]
        Daily => "daily" | "quotidien",
        Weekly => "weekly" | "hebdomadaire",
        Monthly => "monthly" | "mensuel",
    }
}

flow_enum! {
    /// Target environment of the delivery.
    Environment, field = "environment" {
        Dev => "dev" | "development",
        Test => "test",
        #[default]
        Prod => "prod" | "production",
    }
}

flow_enum! {
    /// Execution model of the flow.
    FlowType, field = "flow_type" {
        #[default]
        Synchronous => "synchronous" | "synchrone" | "sync",
        Asynchronous => "asynchronous" | "asynchrone" | "async",
    }
}

flow_enum! {
    /// Integration platform the flow is built on.
    Tech, field = "tech" {
        #[default]
        Talend => "talend",
        Blueway => "blueway",
    }
}

flow_enum! {
    /// Kind of artifact the flow is delivered as.
    FlowKind, field = "type_flux" {
        #[default]
        JobEtl => "job etl" | "job_etl" | "etl",
        Route => "route",
        DataService => "data service" | "data_service",
        Joblet => "joblet",
    }
}

/// The validated attributes of a single flow, as consumed by the cost calculator.
///
/// Enumerated fields are closed Rust enums, so an unknown complexity or
/// frequency cannot reach the calculation. Numeric ranges (`sources >= 1`,
/// `data_volume >= 0`) are the caller's responsibility; see
/// [`crate::flow::FlowRecord`] for the lenient conversion used on stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowAttributes {
    pub sources: u32,
    pub targets: u32,
    pub transformations: u32,
    pub complexity: Complexity,
    pub user_level: UserLevel,
    /// Arbitrary volume unit, typically megabytes.
    pub data_volume: f64,
    pub frequency: Frequency,
    pub environment: Environment,
    pub flow_type: FlowType,
    pub max_transcodifications: u32,
    pub max_rules: u32,
    pub architecture_pivot: bool,
    pub messaging_queue: bool,
    pub technical_error_handling: bool,
    pub functional_error_handling: bool,
    pub log_handling: bool,
}

impl Default for FlowAttributes {
    /// The values a freshly created flow starts with.
    fn default() -> Self {
        Self {
            sources: 1,
            targets: 1,
            transformations: 0,
            complexity: Complexity::default(),
            user_level: UserLevel::default(),
            data_volume: 100.0,
            frequency: Frequency::default(),
            environment: Environment::default(),
            flow_type: FlowType::default(),
            max_transcodifications: 0,
            max_rules: 0,
            architecture_pivot: false,
            messaging_queue: false,
            technical_error_handling: false,
            functional_error_handling: false,
            log_handling: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_french_labels() {
        assert_eq!("complexe".parse::<Complexity>(), Ok(Complexity::Complex));
        assert_eq!("Modérée".parse::<Complexity>(), Ok(Complexity::Moderate));
        assert_eq!(" QUOTIDIEN ".parse::<Frequency>(), Ok(Frequency::Daily));
        assert_eq!("confirmé".parse::<UserLevel>(), Ok(UserLevel::Intermediate));
        assert_eq!("asynchrone".parse::<FlowType>(), Ok(FlowType::Asynchronous));
        assert_eq!("job ETL".parse::<FlowKind>(), Ok(FlowKind::JobEtl));
    }

    #[test]
    fn unknown_label_names_the_field() {
        let err = "stage".parse::<Environment>().unwrap_err();
        assert_eq!(
            err,
            FlowConversionError::UnknownVariant {
                field: "environment".to_string(),
                value: "stage".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Unknown value 'stage' for field 'environment'");
    }

    #[test]
    fn serializes_as_canonical_label() {
        let json = serde_json::to_string(&Frequency::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
        let parsed: Frequency = serde_json::from_str("\"hebdomadaire\"").unwrap();
        assert_eq!(parsed, Frequency::Weekly);
    }

    #[test]
    fn all_lists_every_variant_once() {
        assert_eq!(Complexity::ALL.len(), 3);
        assert_eq!(Frequency::ALL.len(), 4);
        for level in UserLevel::ALL {
            assert_eq!(level.as_str().parse::<UserLevel>(), Ok(*level));
        }
    }
}
