use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use lumi_converter::converter::{ConversionResult, Converter};
use lumi_converter::utils::config::Config;
use lumi_converter::utils::files::script_files;
use lumi_converter::{detect_syntax, report, sample, Syntax};

#[derive(Parser)]
#[command(name = "lumi-converter")]
#[command(author = "NL Team")]
#[command(version = "0.1.0")]
#[command(about = "Convert Selenium WebDriver scripts to Playwright", long_about = None)]
struct Cli {
    /// Log every rule that fires
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a script, or every script under a directory
    Convert {
        /// Source file, directory, or `-` for stdin
        path: PathBuf,

        /// Target syntax (java, python, javascript, typescript, csharp)
        #[arg(short, long)]
        to: Syntax,

        /// Output file (single input only)
        #[arg(short, long, conflicts_with = "out_dir")]
        output: Option<PathBuf>,

        /// Output directory; required when converting a directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a conversion report (json, text)
        #[arg(short, long)]
        report: Option<String>,
    },

    /// Guess the syntax a Selenium script is written in
    Detect {
        /// Source file or `-` for stdin
        path: PathBuf,
    },

    /// Print the bundled Selenium sample for a syntax
    Sample { syntax: Syntax },

    /// List the rules applied for a target syntax, in order
    Rules { syntax: Syntax },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "lumi_converter=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match cli.command {
        Commands::Convert {
            path,
            to,
            output,
            out_dir,
            config,
            report,
        } => {
            let config = match config {
                Some(ref p) => Config::load(p)
                    .with_context(|| format!("Failed to load config: {}", p.display()))?,
                None => Config::default(),
            };
            let converter = Converter::new(to, &config)?;

            if path.is_dir() {
                let out_dir = out_dir.context("--out-dir is required when converting a directory")?;
                convert_dir(&converter, &path, &out_dir, report.as_deref())?;
            } else {
                let source = read_input(&path)?;
                let result = converter.convert_with_report(&source);
                let target = match (output, out_dir) {
                    (Some(file), _) => Some(file),
                    (None, Some(dir)) => Some(dir.join(to.output_file_name(&config.output_stem))),
                    (None, None) => None,
                };
                write_output(&result, target.as_deref())?;
                print_report(&result, report.as_deref())?;
            }
        }

        Commands::Detect { path } => {
            let source = read_input(&path)?;
            println!("{}", detect_syntax(&source));
        }

        Commands::Sample { syntax } => {
            println!("{}", sample(syntax));
        }

        Commands::Rules { syntax } => {
            let converter = Converter::new(syntax, &Config::default())?;
            println!(
                "{} {} rules for {}",
                "■".blue().bold(),
                converter.rules().len(),
                syntax.label().cyan()
            );
            for (i, (category, name)) in converter.rules().rules().enumerate() {
                println!("  {:>3}. {:<10} {}", i + 1, format!("{:?}", category).dimmed(), name);
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn write_output(result: &ConversionResult, path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        print!("{}", result.output_text);
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, &result.output_text)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    eprintln!(
        "{} {} → {}",
        "✓".green().bold(),
        result.report.target.label(),
        path.display().to_string().cyan()
    );
    Ok(())
}

fn print_report(result: &ConversionResult, format: Option<&str>) -> anyhow::Result<()> {
    if let Some(format) = format {
        eprint!("{}", report::generate_report(&result.report, format)?);
        if format == "json" {
            eprintln!();
        }
    }
    Ok(())
}

/// Convert every file with a known script extension under `dir`, mirroring
/// the directory layout under `out_dir` with the target extension.
fn convert_dir(
    converter: &Converter,
    dir: &Path,
    out_dir: &Path,
    format: Option<&str>,
) -> anyhow::Result<()> {
    let target = converter.target();
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;
    let files = script_files(dir, Some(out_dir))?;

    for relative in &files {
        let dest = out_dir.join(relative).with_extension(target.extension());
        let source = read_input(&dir.join(relative))?;
        let result = converter.convert_with_report(&source);
        write_output(&result, Some(&dest))?;
        print_report(&result, format)?;
    }

    println!(
        "{} Converted {} file(s) to {}",
        "■".blue().bold(),
        files.len().to_string().green(),
        target.label().cyan()
    );
    Ok(())
}
