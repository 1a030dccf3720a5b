//! Planner CLI - Command-line interface for the wellday planner
//!
//! Commands:
//! - generate: Build a daily planner from a request file
//! - templates: List the planner template catalog
//! - validate: Check a request for problems the generator would absorb
//! - schema: Print request/response schema information
//! - doctor: Diagnose configuration and environment

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wellday_planner::{
    find_template, list_templates, validate_request, PlannerConfig, PlannerError,
    PlannerGenerator, PlannerRequest, PlannerTemplate, ValidationReport, PLANNER_VERSION,
    PRODUCER_NAME,
};

/// Planner - Daily planner generator for workplace wellbeing
#[derive(Parser)]
#[command(name = "planner")]
#[command(version = PLANNER_VERSION)]
#[command(about = "Generate daily plans with breaks and wellbeing reminders", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a planner from a request
    Generate {
        /// Request file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Generator configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Plan date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List planner templates
    Templates {
        /// Show a single template
        #[arg(long)]
        id: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a planner request
    Validate {
        /// Request file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,

        /// Output as JSON schema
        #[arg(long)]
        json_schema: bool,
    },

    /// Diagnose configuration and environment
    Doctor {
        /// Check a configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Planner request
    Input,
    /// Planner response
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<(), PlannerCliError> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            format,
            config,
            date,
        } => cmd_generate(&input, &output, format, config.as_deref(), date),

        Commands::Templates { id, json } => cmd_templates(id.as_deref(), json),

        Commands::Validate { input, json } => cmd_validate(&input, json),

        Commands::Schema {
            schema_type,
            json_schema,
        } => cmd_schema(schema_type, json_schema),

        Commands::Doctor { config, json } => cmd_doctor(config.as_deref(), json),
    }
}

fn cmd_generate(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    config: Option<&Path>,
    date: Option<NaiveDate>,
) -> Result<(), PlannerCliError> {
    let request: PlannerRequest = serde_json::from_str(&read_input(input)?)?;

    let generator = match config {
        Some(path) => PlannerGenerator::with_config(load_config(path)?)?,
        None => PlannerGenerator::new(),
    };

    let planner = match date {
        Some(date) => generator.generate_on(&request, date),
        None => generator.generate(&request),
    };

    let output_data = match format {
        OutputFormat::Json => serde_json::to_string(&planner)? + "\n",
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&planner)? + "\n",
    };

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_templates(id: Option<&str>, json: bool) -> Result<(), PlannerCliError> {
    let templates: Vec<PlannerTemplate> = match id {
        Some(id) => vec![find_template(id)
            .ok_or_else(|| PlannerCliError::UnknownTemplate(id.to_string()))?],
        None => list_templates(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
    } else {
        println!("Planner Templates");
        println!("=================");
        for template in &templates {
            println!(
                "  {:<14} {:<16} {}",
                template.id, template.name, template.description
            );
        }
    }

    Ok(())
}

fn cmd_validate(input: &Path, json: bool) -> Result<(), PlannerCliError> {
    let request: PlannerRequest = serde_json::from_str(&read_input(input)?)?;
    let report = ValidationReport::from_issues(validate_request(&request));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Template: {}", request.template_id());
        println!("Tasks:    {}", request.tasks.len());
        println!(
            "Prompts:  {} of 3 enabled",
            request.wellbeing_prompts.enabled_count()
        );

        if report.issues.is_empty() {
            println!("\nNo issues found");
        } else {
            println!("\nIssues:");
            for issue in &report.issues {
                println!("  - {}: {}", issue.field, issue.message);
            }
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err(PlannerCliError::ValidationFailed(report.issues.len()))
    }
}

fn cmd_schema(schema_type: SchemaType, json_schema: bool) -> Result<(), PlannerCliError> {
    match schema_type {
        SchemaType::Input => {
            if json_schema {
                println!("{}", get_input_json_schema());
            } else {
                println!("Input: planner request");
                println!();
                println!("- work_start: HH:MM, places both breaks");
                println!("- work_end: HH:MM, echoed in work_hours");
                println!("- tasks: array of strings, echoed verbatim");
                println!("- break_duration: integer minutes, applied to both breaks");
                println!("- wellbeing_prompts: {{ hydration, stretch, outdoor }} (default true)");
                println!("- template: professional | creative | minimal | wellness (optional)");
            }
        }
        SchemaType::Output => {
            if json_schema {
                println!("{}", get_output_json_schema());
            } else {
                println!("Output: daily planner");
                println!();
                println!("- date: long date, e.g. \"Monday, January 15, 2024\"");
                println!("- work_hours: \"<work_start> - <work_end>\"");
                println!("- tasks: request tasks, unchanged");
                println!("- breaks: [{{ time, duration, type }}] x2 (Morning Break, Afternoon Break)");
                println!("- wellbeing: [{{ time, prompt, icon, enabled }}] per enabled prompt");
                println!("- planner_id: UUID v4");
            }
        }
    }

    Ok(())
}

fn cmd_doctor(config: Option<&Path>, json: bool) -> Result<(), PlannerCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "planner_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Planner version {}", PLANNER_VERSION),
    });

    checks.push(DoctorCheck {
        name: "templates".to_string(),
        status: CheckStatus::Ok,
        message: format!("{} templates available", list_templates().len()),
    });

    if let Some(config_path) = config {
        if config_path.exists() {
            let check = match load_config(config_path) {
                Ok(config) => DoctorCheck {
                    name: "config".to_string(),
                    status: CheckStatus::Ok,
                    message: format!(
                        "Config valid (fallback breaks {} / {})",
                        config.fallback_morning, config.fallback_afternoon
                    ),
                },
                Err(e) => DoctorCheck {
                    name: "config".to_string(),
                    status: CheckStatus::Error,
                    message: CliError::from(e).message,
                },
            };
            checks.push(check);
        } else {
            checks.push(DoctorCheck {
                name: "config".to_string(),
                status: CheckStatus::Warning,
                message: "Config file does not exist".to_string(),
            });
        }
    }

    let stdin_check = if atty::is(atty::Stream::Stdin) {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a TTY (pass requests with -i <file>)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a pipe (-i - ready)".to_string(),
        }
    };
    checks.push(stdin_check);

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: PLANNER_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Planner Doctor Report");
        println!("=====================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(PlannerCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

// Helper functions

fn read_input(input: &Path) -> Result<String, PlannerCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn load_config(path: &Path) -> Result<PlannerConfig, PlannerCliError> {
    let json = fs::read_to_string(path)?;
    Ok(PlannerConfig::from_json(&json)?)
}

fn get_input_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "planner.request",
        "type": "object",
        "required": ["work_start", "work_end", "tasks", "break_duration"],
        "properties": {
            "work_start": { "type": "string", "pattern": "^\\s*[+-]?\\d+\\s*:\\s*[+-]?\\d+\\s*$" },
            "work_end": { "type": "string" },
            "tasks": { "type": "array", "items": { "type": "string" } },
            "break_duration": { "type": "integer" },
            "wellbeing_prompts": {
                "type": "object",
                "properties": {
                    "hydration": { "type": "boolean", "default": true },
                    "stretch": { "type": "boolean", "default": true },
                    "outdoor": { "type": "boolean", "default": true }
                }
            },
            "template": {
                "type": ["string", "null"],
                "default": "professional"
            }
        }
    })
    .to_string()
}

fn get_output_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "planner.response",
        "type": "object",
        "required": ["date", "work_hours", "tasks", "breaks", "wellbeing", "planner_id"],
        "properties": {
            "date": { "type": "string" },
            "work_hours": { "type": "string" },
            "tasks": { "type": "array", "items": { "type": "string" } },
            "breaks": {
                "type": "array",
                "minItems": 2,
                "maxItems": 2,
                "items": {
                    "type": "object",
                    "properties": {
                        "time": { "type": "string" },
                        "duration": { "type": "integer" },
                        "type": { "enum": ["Morning Break", "Afternoon Break"] }
                    }
                }
            },
            "wellbeing": {
                "type": "array",
                "maxItems": 3,
                "items": {
                    "type": "object",
                    "properties": {
                        "time": { "type": "string" },
                        "prompt": { "type": "string" },
                        "icon": { "type": "string" },
                        "enabled": { "type": "boolean" }
                    }
                }
            },
            "planner_id": { "type": "string", "format": "uuid" }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum PlannerCliError {
    Io(io::Error),
    Planner(PlannerError),
    Json(serde_json::Error),
    UnknownTemplate(String),
    ValidationFailed(usize),
    DoctorFailed,
}

impl From<io::Error> for PlannerCliError {
    fn from(e: io::Error) -> Self {
        PlannerCliError::Io(e)
    }
}

impl From<PlannerError> for PlannerCliError {
    fn from(e: PlannerError) -> Self {
        PlannerCliError::Planner(e)
    }
}

impl From<serde_json::Error> for PlannerCliError {
    fn from(e: serde_json::Error) -> Self {
        PlannerCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<PlannerCliError> for CliError {
    fn from(e: PlannerCliError) -> Self {
        match e {
            PlannerCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            PlannerCliError::Planner(PlannerError::ConfigError(msg)) => CliError {
                code: "CONFIG_ERROR".to_string(),
                message: msg,
                hint: Some("Run 'planner doctor --config <file>' for details".to_string()),
            },
            PlannerCliError::Planner(e) => CliError {
                code: "PLANNER_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            PlannerCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'planner schema input' for the request format".to_string()),
            },
            PlannerCliError::UnknownTemplate(id) => CliError {
                code: "UNKNOWN_TEMPLATE".to_string(),
                message: format!("No template with id {}", id),
                hint: Some("Run 'planner templates' to list ids".to_string()),
            },
            PlannerCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} issues found in request", count),
                hint: Some("Fix the reported fields and retry".to_string()),
            },
            PlannerCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}
