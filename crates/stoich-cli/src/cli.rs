use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "stoich - validate chemical formulas, check that reaction equations are balanced, and look up elements.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the largest subscript accepted after an element symbol.
    #[arg(long, global = true, value_name = "INT")]
    pub max_count: Option<u32>,

    /// Override the largest stoichiometric coefficient accepted in front of a formula.
    #[arg(long, global = true, value_name = "INT")]
    pub max_coefficient: Option<u32>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S limits.max-count=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON reports with camelCase keys.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more chemical formulas and show their composition and molar mass.
    Formula(FormulaArgs),
    /// Validate a reaction equation and check that it is balanced.
    Equation(EquationArgs),
    /// Validate every reaction record in a JSON, TOML or CSV file.
    Check(CheckArgs),
    /// Look up an element by symbol or atomic number.
    Element(ElementArgs),
}

/// Arguments for the `formula` subcommand.
#[derive(Args, Debug)]
pub struct FormulaArgs {
    /// Formulas to validate (e.g., H2O NaCl C6H12O6).
    #[arg(required = true, value_name = "FORMULA")]
    pub formulas: Vec<String>,
}

/// Arguments for the `equation` subcommand.
#[derive(Args, Debug)]
pub struct EquationArgs {
    /// The equation to validate, quoted (e.g., "2H2 + O2 -> 2H2O").
    #[arg(required = true, value_name = "EQUATION")]
    pub equation: String,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the reaction library file (.json, .toml or .csv).
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Also list records that passed validation.
    #[arg(long)]
    pub show_valid: bool,
}

/// Arguments for the `element` subcommand.
#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Element symbol (e.g., Na) or atomic number (e.g., 11).
    #[arg(value_name = "SYMBOL_OR_Z", required_unless_present = "all")]
    pub query: Option<String>,

    /// List every element in periodic-table order.
    #[arg(long, conflicts_with = "query")]
    pub all: bool,
}
