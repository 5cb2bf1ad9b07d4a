use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use sift_lang::cli::{self, CheckOptions, CheckResult, CliError, RulesOptions};
use std::fs;
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sift")]
#[command(about = "Sift - evaluate boolean filter expressions against JSON records")]
#[command(version)]
struct Cli {
    /// Logging verbosity (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and evaluate a filter expression
    Check {
        /// The filter expression to evaluate
        expression: String,

        /// JSON record (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the tokens of an expression
    Tokens {
        expression: String,
    },

    /// Print the parsed expression with explicit grouping
    Parse {
        expression: String,
    },

    /// Evaluate the rules in a JSON file against a record
    Rules {
        /// Path to a JSON array of {"id", "name", "expression"} objects
        file: String,

        /// JSON record (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Only evaluate the rule with this id
        #[arg(short, long)]
        rule: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'sift docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let result = match cli.command {
        Commands::Check {
            expression,
            input,
            pretty,
            syntax_only,
        } => run_check(expression, input, pretty, syntax_only),
        Commands::Tokens { expression } => {
            println!("{}", cli::render_tokens(&expression));
            Ok(())
        }
        Commands::Parse { expression } => {
            cli::render_tree(&expression).map(|tree| println!("{}", tree))
        }
        Commands::Rules {
            file,
            input,
            rule,
            pretty,
        } => run_rules(file, input, rule, pretty),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => {
            cli::get_doc_category(&category).map(|content| print!("{}", content))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

fn read_input(input: Option<String>) -> Result<Option<String>, CliError> {
    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn print_json(value: &impl serde::Serialize, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    println!("{}", json);
    Ok(())
}

fn run_check(
    expression: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = if syntax_only { None } else { read_input(input)? };

    let options = CheckOptions {
        expression,
        input,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(result) => print_json(&result, pretty)?,
    }
    Ok(())
}

fn run_rules(
    file: String,
    input: Option<String>,
    rule: Option<String>,
    pretty: bool,
) -> Result<(), CliError> {
    log::debug!("Reading rules from {}", file);
    let rules = fs::read_to_string(&file)?;

    let options = RulesOptions {
        rules,
        input: read_input(input)?,
        rule,
    };

    let output = cli::execute_rules(&options)?;
    print_json(&output, pretty)
}
