use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use defc::lexer::tokenize;
use defc::{parse_source, translate, TranslateError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(ClapParser)]
#[command(name = "defc")]
#[command(about = "Translate `define ... end` sources to JavaScript", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input file and print tokens
    Lex {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Parse the input file and print the tree
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Translate the input file
    Translate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Lex { file } => lex_file(&file)?,
        Commands::Parse { file } => parse_file(&file)?,
        Commands::Translate { file, output } => translate_file(&file, output.as_deref())?,
    }

    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path.display()))
}

/// Attach the failing stage and file to a pipeline error
fn stage_error(path: &Path, err: TranslateError) -> anyhow::Error {
    let stage = match &err {
        TranslateError::Lexer(_) => "tokenize",
        TranslateError::Parser(_) => "parse",
    };
    anyhow::Error::new(err).context(format!("failed to {stage} '{}'", path.display()))
}

fn lex_file(path: &Path) -> Result<()> {
    let input = read_source(path)?;

    let tokens = tokenize(input)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    for token in &tokens {
        println!(
            "{}:{}:{} {} {}",
            path.display(),
            token.pos.line,
            token.pos.column,
            token.kind,
            token.lexeme
        );
    }

    println!("\nTotal tokens: {}", tokens.len());

    Ok(())
}

fn parse_file(path: &Path) -> Result<()> {
    let input = read_source(path)?;

    let definition = parse_source(&input).map_err(|err| stage_error(path, err))?;

    println!("{definition}");

    Ok(())
}

fn translate_file(path: &Path, output: Option<&Path>) -> Result<()> {
    let input = read_source(path)?;

    let code = translate(&input).map_err(|err| stage_error(path, err))?;

    if let Some(output_path) = output {
        fs::write(output_path, format!("{code}\n"))
            .with_context(|| format!("failed to write output to '{}'", output_path.display()))?;
        tracing::info!(output = %output_path.display(), "wrote translation");
    } else {
        println!("{code}");
    }

    Ok(())
}
