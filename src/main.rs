use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use phpexpr::ast::Expression;
use phpexpr::driver::{parse_expression_with_config, ParseSession};
use phpexpr::lexer::{format_tokens, tokenize};
use phpexpr::parser::{ParserConfig, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(name = "phpexpr")]
#[command(author, version, about = "Parse PHP expressions into an AST", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum expression nesting depth
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject `$a{0}` style array lookups
    #[arg(long, global = true)]
    no_curly_lookup: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Canonical PHP source (default)
    #[value(name = "source")]
    Source,
    /// AST as JSON
    #[value(name = "json")]
    Json,
    /// AST in Rust debug notation
    #[value(name = "debug")]
    Debug,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every `;`-terminated expression of a file and print it
    Parse {
        /// The source file to parse (`-` for stdin)
        input: PathBuf,

        /// How to print each expression
        #[arg(short, long, value_enum, default_value = "source")]
        format: OutputFormat,
    },

    /// Check a source file for syntax errors
    Check {
        /// The source file to check
        input: PathBuf,
    },

    /// Dump the token stream of a source file
    Tokens {
        /// The source file to tokenize
        input: PathBuf,
    },

    /// Start an interactive REPL
    Repl {
        /// How to print each expression
        #[arg(short, long, value_enum, default_value = "debug")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let config = ParserConfig::default()
        .with_max_depth(cli.max_depth)
        .with_curly_lookup(!cli.no_curly_lookup);

    let result = match cli.command {
        Commands::Parse { input, format } => parse(&input, format, config),
        Commands::Check { input } => check(&input, config),
        Commands::Tokens { input } => tokens(&input),
        Commands::Repl { format } => repl(format, config),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<(String, String)> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(("<stdin>".to_string(), source));
    }
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read source file: {:?}", input))?;
    Ok((input.display().to_string(), source))
}

fn render(expr: &Expression, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Source => expr.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(expr)?,
        OutputFormat::Debug => format!("{:#?}", expr),
    })
}

fn parse(input: &Path, format: OutputFormat, config: ParserConfig) -> Result<()> {
    let (name, source) = read_input(input)?;
    let mut session = ParseSession::from_string(&name, source).with_config(config);
    let expressions = session.parse();

    for expr in &expressions {
        match format {
            OutputFormat::Source => println!("{};", render(expr, format)?),
            _ => println!("{}", render(expr, format)?),
        }
    }

    session.report_diagnostics()?;
    if session.has_errors() {
        anyhow::bail!("{} error(s) while parsing {}", session.error_count(), name);
    }
    Ok(())
}

fn check(input: &Path, config: ParserConfig) -> Result<()> {
    log::info!("Checking {:?}", input);

    let (name, source) = read_input(input)?;
    let mut session = ParseSession::from_string(&name, source).with_config(config);
    let expressions = session.parse();

    session.report_diagnostics()?;
    if session.has_errors() {
        anyhow::bail!("{} error(s) found", session.error_count());
    }

    println!(
        "{}: {} expression(s), no errors found",
        "success".green().bold(),
        expressions.len()
    );
    Ok(())
}

fn tokens(input: &Path) -> Result<()> {
    let (_, source) = read_input(input)?;
    let tokens = tokenize(&source)?;
    println!("{}", "=== Tokens ===".blue().bold());
    println!("{}", format_tokens(&tokens));
    Ok(())
}

fn repl(format: OutputFormat, config: ParserConfig) -> Result<()> {
    println!("{}", "phpexpr REPL".blue().bold());
    println!("Type ':quit' or ':q' to exit, ':help' for help\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line_number = 1;

    loop {
        print!("php:{:03}> ", line_number);
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            ":quit" | ":q" => {
                println!("Goodbye!");
                break;
            }
            ":help" | ":h" => {
                println!("REPL commands:");
                println!("  :quit, :q    Exit the REPL");
                println!("  :help, :h    Show this help message");
                println!("\nEnter a PHP expression to see its syntax tree.");
                continue;
            }
            "" => continue,
            _ => {}
        }

        match parse_expression_with_config(input, config) {
            Ok(expr) => {
                println!("{}: {}", "source".green(), expr);
                if !matches!(format, OutputFormat::Source) {
                    println!("{}", render(&expr, format)?);
                }
            }
            Err(e) => eprintln!("{}: {}", "error".red(), e),
        }

        line_number += 1;
    }

    Ok(())
}
