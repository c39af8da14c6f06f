//! lexis - token-stream analyser
//!
//! Usage:
//!   lexis <FILE>                 Analyse a file, every phase
//!   lexis -e <CODE>              Analyse inline source
//!   lexis -p <PHASE> <FILE>      Run one phase: tokens, tree, semantic, ir, optimized
//!   lexis -o <FORMAT> <FILE>     Output format: text (default), json, dot
//!   cat file | lexis             Read source from stdin

mod output;

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{bail, Context};
use clap::Parser;

use lexis::{
    analysis::{Analysis, AnalysisConfig},
    lexer::tokens::ReservedWords,
    render_error,
    semantic::semantic::ReportPolicy,
};
use output::{format_dot, format_json, format_text, OutputFormat, Phase};

#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(version, about = "Scans source text and runs the token-stream passes", long_about = None)]
struct Args {
    /// The source file to analyse (optional if using -e or stdin)
    file: Option<PathBuf>,

    /// Analyse inline source
    #[arg(short = 'e', long = "eval", conflicts_with = "file")]
    eval: Option<String>,

    /// Which phase to print
    #[arg(short = 'p', long = "phase", value_enum, default_value_t = Phase::All)]
    phase: Phase,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Name shown on the root of the syntax tree
    #[arg(long = "program-name")]
    program_name: Option<String>,

    /// Comma separated reserved words, replacing the default set
    #[arg(long = "keywords", value_delimiter = ',')]
    keywords: Option<Vec<String>>,

    /// Report every occurrence of an undefined identifier
    #[arg(long = "report-every")]
    report_every: bool,

    /// JSON file with analysis settings
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    if args.output == OutputFormat::Dot && args.phase != Phase::Tree {
        bail!("dot output is only available for the tree phase");
    }

    let config = build_config(&args)?;
    let (source, file_name) = read_source(&args)?;

    let start = Instant::now();
    let analysis = match Analysis::new(source, &config) {
        Ok(analysis) => analysis,
        Err(error) => {
            eprint!("{}", render_error(&error, "", &file_name));
            return Ok(ExitCode::FAILURE);
        }
    };

    log::info!("Tokenized {} in {:?}", file_name, start.elapsed());

    for error in analysis.lexical_errors() {
        eprint!("{}", render_error(&error, analysis.source(), &file_name));
    }

    let rendered = match args.output {
        OutputFormat::Text => format_text(&analysis, args.phase),
        OutputFormat::Json => format_json(&analysis, args.phase)?,
        OutputFormat::Dot => format_dot(&analysis),
    };

    log::info!("Total time: {:?}", start.elapsed());
    print!("{}", rendered);

    Ok(ExitCode::SUCCESS)
}

fn build_config(args: &Args) -> anyhow::Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(name) = &args.program_name {
        config.program_name = name.clone();
    }

    if let Some(keywords) = &args.keywords {
        config.reserved_words = ReservedWords::new(keywords.iter().map(|word| word.trim()));
    }

    if args.report_every {
        config.report_policy = ReportPolicy::EveryOccurrence;
    }

    Ok(config)
}

fn read_source(args: &Args) -> anyhow::Result<(String, String)> {
    if let Some(code) = &args.eval {
        return Ok((code.clone(), String::from("<eval>")));
    }

    if let Some(path) = &args.file {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok((source, path.display().to_string()));
    }

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;

    Ok((source, String::from("<stdin>")))
}
