use abacus::prelude::*;
use clap::{Parser, ValueEnum};
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use tracing::info;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleCli {
    En,
    Fr,
}

impl From<LocaleCli> for Locale {
    fn from(locale: LocaleCli) -> Self {
        match locale {
            LocaleCli::En => Locale::En,
            LocaleCli::Fr => Locale::Fr,
        }
    }
}

/// Estimate the effort of ETL/ESB data-integration flows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON file holding one flow record or an array of records
    flows_path: Option<String>,

    /// Daily rate in euros used for the reference cost
    #[arg(long)]
    daily_rate: Option<u32>,

    /// Language of labels and recommendations
    #[arg(short, long, value_enum)]
    locale: Option<LocaleCli>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    if cli.human {
        run_interactive(&config);
    } else {
        run_non_interactive(cli, &config);
    }
}

/// Environment first, then command line overrides.
fn load_config(cli: &Cli) -> AbacusConfig {
    let mut config = AbacusConfig::from_env()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid configuration: {}", e)));
    if let Some(rate) = cli.daily_rate {
        config = config
            .with_daily_rate(rate)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }
    if let Some(locale) = cli.locale {
        config = config.with_locale(locale.into());
    }
    config
}

fn run_report(records: Vec<FlowRecord>, config: &AbacusConfig, as_json: bool) {
    let calculator = config.calculator();
    let report = EstimateReport::from_records(&records, &calculator, config)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    info!(
        flows = report.estimates.len(),
        total_days = report.total_days,
        "estimation finished"
    );

    if as_json {
        let json = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize report: {}", e)));
        println!("{}", json);
    } else {
        print!("{}", ReportFormatter::format_report(&report));
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli, config: &AbacusConfig) {
    let flows_path = cli.flows_path.unwrap_or_else(|| {
        exit_with_error("A flows file is required in non-interactive mode.");
    });
    let json = fs::read_to_string(&flows_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flows file '{}': {}", flows_path, e))
    });
    let records = FlowRecord::list_from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load '{}': {}", flows_path, e)));

    run_report(records, config, cli.json);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(config: &AbacusConfig) {
    println!("--- Abacus Interactive Mode ---");

    let mut fields = Map::new();
    let text_prompts = [
        ("name", "Flow name", "unnamed flow"),
        ("project", "Project", ""),
        ("sources", "Number of sources", "1"),
        ("targets", "Number of targets", "1"),
        ("transformations", "Number of transformations", "0"),
        ("complexity", "Complexity (simple/moderate/complex)", "moderate"),
        ("user_level", "Developer level (junior/intermediate/expert)", "intermediate"),
        ("data_volume", "Data volume (MB)", "100"),
        ("frequency", "Frequency (once/daily/weekly/monthly)", "daily"),
        ("environment", "Environment (dev/test/prod)", "prod"),
        ("flow_type", "Flow type (synchronous/asynchronous)", "synchronous"),
        ("max_transcodifications", "Transcodifications", "0"),
        ("max_rules", "Business rules", "0"),
        ("contract_completeness", "Contract completeness (%)", "100"),
    ];
    for (key, prompt, default) in text_prompts {
        let answer = loop {
            let answer = prompt_for_input(prompt, Some(default));
            match check_answer(key, &answer) {
                Ok(()) => break answer,
                Err(e) => println!("{}. Please try again.", e),
            }
        };
        if !answer.is_empty() {
            fields.insert(key.to_string(), Value::String(answer));
        }
    }

    let flag_prompts = [
        ("architecture_pivot", "Architecture pivot"),
        ("messaging_queue", "Messaging queue"),
        ("gestion_erreurs_techniques", "Technical error handling"),
        ("gestion_erreurs_fonctionnelles", "Functional error handling"),
        ("gestion_logs", "Log handling"),
    ];
    for (key, prompt) in flag_prompts {
        let enabled = loop {
            match prompt_for_input(&format!("{} (y/n)", prompt), Some("n"))
                .to_lowercase()
                .as_str()
            {
                "y" | "yes" | "o" | "oui" => break true,
                "n" | "no" | "non" => break false,
                _ => println!("Please answer y or n."),
            }
        };
        fields.insert(key.to_string(), Value::Bool(enabled));
    }

    let record: FlowRecord = serde_json::from_value(Value::Object(fields))
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid flow: {}", e)));

    println!();
    run_report(vec![record], config, false);
}

/// Checks one interactive answer the way the full record will be checked,
/// so a typo can be corrected instead of ending the session.
fn check_answer(key: &str, answer: &str) -> Result<(), FlowConversionError> {
    let mut field = Map::new();
    field.insert(key.to_string(), Value::String(answer.to_string()));
    let record: FlowRecord = serde_json::from_value(Value::Object(field))
        .map_err(|e| FlowConversionError::JsonParseError(e.to_string()))?;

    (&record).into_flow_attributes()?;
    record.contract_completeness()?;
    Ok(())
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout()
        .flush()
        .and_then(|_| io::stdin().read_line(&mut line))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read input: {}", e)));
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_labels_are_caught_per_answer() {
        let err = check_answer("complexity", "extreme").unwrap_err();
        assert!(err.to_string().contains("extreme"));
        assert!(check_answer("frequency", "hourly").is_err());
        assert!(check_answer("complexity", "complexe").is_ok());
        assert!(check_answer("user_level", "Expert").is_ok());
    }

    #[test]
    fn numbers_and_free_text_answers() {
        assert!(check_answer("sources", "3").is_ok());
        assert!(check_answer("data_volume", "many").is_err());
        assert!(check_answer("contract_completeness", "abc").is_err());
        assert!(check_answer("name", "anything goes").is_ok());
        assert!(check_answer("project", "").is_ok());
    }
}
