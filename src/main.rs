use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use samplecalc::config::DemoConfig;
use samplecalc::diagnostics::{render_config_error, render_parse_error, ParseError};
use samplecalc::demo::{self, DemoReport};

#[derive(Parser)]
#[command(name = "samplecalc", version, about = "Sample arithmetic, string, and validation helpers")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print sample invocations of every helper
    Demo {
        /// TOML file overriding the sample inputs
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format: "text" (default) or "json"
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Subtract B from A
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Multiply two integers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Divide A by B (prints 0 when B is zero)
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Square root of X
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// BASE raised to EXP
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exp: f64,
    },
    /// Nth Fibonacci number (naive recursion)
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Whether N is prime
    Prime {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Sum comma-separated integers
    Sum {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Join words with a separator
    Join {
        /// Separator placed between words
        #[arg(long, default_value = " ")]
        sep: String,
        words: Vec<String>,
    },
    /// Reverse a string by character
    Reverse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Shallow email check
    Email {
        #[arg(allow_hyphen_values = true)]
        address: String,
    },
}

#[derive(Clone, Copy)]
enum Format {
    Text,
    Json,
}

fn parse_format(s: &str) -> Result<Format, String> {
    match s {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => Err(format!("unknown format '{}'; expected 'text' or 'json'", other)),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

/// Only the `sum` sample can fail, so errors are rendered against it.
fn render_sum_error(config: &DemoConfig, err: &ParseError) -> String {
    render_parse_error(config.sum.as_deref().unwrap_or_default(), err)
}

fn run_demo(config: Option<PathBuf>, format: Format) -> Result<(), String> {
    let config = match config {
        Some(path) => DemoConfig::load(&path).map_err(|e| render_config_error(&e))?,
        None => DemoConfig::default(),
    };
    tracing::info!(?config, "running demo");

    match format {
        Format::Text => {
            let lines = demo::report_lines(&config).map_err(|e| render_sum_error(&config, &e))?;
            for line in lines {
                println!("{line}");
            }
        }
        Format::Json => {
            let report = DemoReport::build(&config).map_err(|e| render_sum_error(&config, &e))?;
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("error: failed to encode report: {e}\n"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { config, format } => {
            let format = match parse_format(&format) {
                Ok(format) => format,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            if let Err(rendered) = run_demo(config, format) {
                eprint!("{rendered}");
                std::process::exit(1);
            }
        }
        Commands::Add { a, b } => println!("{}", samplecalc::add(a, b)),
        Commands::Subtract { a, b } => println!("{}", samplecalc::subtract(a, b)),
        Commands::Multiply { a, b } => println!("{}", samplecalc::multiply(a, b)),
        Commands::Divide { a, b } => {
            if b == 0.0 {
                tracing::info!(a, "division by zero, returning 0");
            }
            println!("{}", samplecalc::divide(a, b));
        }
        Commands::Sqrt { x } => println!("{}", samplecalc::sqrt(x)),
        Commands::Power { base, exp } => println!("{}", samplecalc::power(base, exp)),
        Commands::Fib { n } => println!("{}", samplecalc::fibonacci(n)),
        Commands::Prime { n } => println!("{}", samplecalc::is_prime(n)),
        Commands::Sum { input } => match samplecalc::parse_and_sum(&input) {
            Ok(sum) => println!("{sum}"),
            Err(err) => {
                eprint!("{}", render_parse_error(&input, &err));
                std::process::exit(1);
            }
        },
        Commands::Join { sep, words } => println!("{}", samplecalc::join_strings(&words, &sep)),
        Commands::Reverse { text } => println!("{}", samplecalc::reverse_string(&text)),
        Commands::Email { address } => println!("{}", samplecalc::is_valid_email(&address)),
    }
}
