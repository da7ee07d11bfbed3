//! paperstruct CLI - clean and structure text extracted from academic PDFs

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use paperstruct::render::{self, HeaderSummary, JsonFormat};
use paperstruct::{
    FileSource, NormalizeOptions, NormalizePreset, Paperstruct, Pipeline, PipelineOutput,
    StructureBuilder, TextSource,
};

#[derive(Parser)]
#[command(name = "paperstruct")]
#[command(version)]
#[command(about = "Clean PDF-extracted academic text and rebuild its section tree", long_about = None)]
struct Cli {
    /// Input text file (extracted from a PDF)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Normalization preset
    #[arg(long, value_enum)]
    preset: Option<PresetLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize raw text and report what was removed
    Clean {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Normalization preset
        #[arg(long, value_enum)]
        preset: Option<PresetLevel>,

        /// Keep the original letter case
        #[arg(long)]
        keep_case: bool,
    },

    /// Build the document tree (title, authors, sections)
    Structure {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long, conflicts_with = "markdown")]
        compact: bool,

        /// Output Markdown instead of JSON
        #[arg(long)]
        markdown: bool,

        /// Normalization preset
        #[arg(long, value_enum)]
        preset: Option<PresetLevel>,

        /// Keep the original letter case
        #[arg(long)]
        keep_case: bool,

        /// Lines scanned for title and authors
        #[arg(long, default_value = "15", env = "PAPERSTRUCT_TITLE_SCAN")]
        title_scan: usize,
    },

    /// List section headers of one or more documents
    Headers {
        /// Input text files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Show subsections and line counts as an outline
        #[arg(long, conflicts_with = "json")]
        outline: bool,

        /// Output headers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the label assigned to each line of already-normalized text
    Labels {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PresetLevel {
    /// Unicode cleanup, margins and paragraph rebuild; case kept
    Minimal,
    /// Full academic cleanup (default)
    Standard,
    /// Standard plus removal of garbage characters
    Aggressive,
}

impl From<PresetLevel> for NormalizePreset {
    fn from(level: PresetLevel) -> Self {
        match level {
            PresetLevel::Minimal => NormalizePreset::Minimal,
            PresetLevel::Standard => NormalizePreset::Standard,
            PresetLevel::Aggressive => NormalizePreset::Aggressive,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Clean {
            input,
            output,
            preset,
            keep_case,
        }) => cmd_clean(&input, output.as_deref(), preset, keep_case),
        Some(Commands::Structure {
            input,
            output,
            compact,
            markdown,
            preset,
            keep_case,
            title_scan,
        }) => {
            let pipeline = build_pipeline(preset, keep_case, title_scan);
            cmd_structure(&input, output.as_deref(), &pipeline, compact, markdown)
        }
        Some(Commands::Headers {
            inputs,
            outline,
            json,
        }) => cmd_headers(&inputs, outline, json),
        Some(Commands::Labels { input }) => cmd_labels(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: structure if input is provided
            if let Some(input) = cli.input {
                let pipeline = build_pipeline(cli.preset, false, 15);
                cmd_structure(&input, None, &pipeline, false, false)
            } else {
                println!("{}", "Usage: paperstruct <FILE>".yellow());
                println!("       paperstruct --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_pipeline(preset: Option<PresetLevel>, keep_case: bool, title_scan: usize) -> Pipeline {
    let mut builder = Paperstruct::new().with_title_scan_limit(title_scan);
    if let Some(level) = preset {
        builder = builder.with_preset(level.into());
    }
    if keep_case {
        builder = builder.fold_case(false);
    }
    builder.build()
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_warnings(output: &PipelineOutput) {
    for warning in output.warnings() {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }
}

fn cmd_clean(
    input: &Path,
    output: Option<&Path>,
    preset: Option<PresetLevel>,
    keep_case: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = preset
        .map(|level| NormalizeOptions::from_preset(level.into()))
        .unwrap_or_default();
    if keep_case {
        options = options.fold_case(false);
    }

    let pipeline = Paperstruct::new().with_normalize_options(options).build();
    let result = pipeline.process_source(&FileSource::new(input))?;

    print_warnings(&result);

    write_or_print(output, &result.cleaned_text)
}

fn cmd_structure(
    input: &Path,
    output: Option<&Path>,
    pipeline: &Pipeline,
    compact: bool,
    markdown: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading text...");
    let raw = FileSource::new(input).read_text()?;
    pb.inc(1);

    pb.set_message("Normalizing...");
    let normalized = pipeline.normalizer().run(&raw);
    if normalized.is_empty() {
        pb.finish_and_clear();
        return Err(paperstruct::Error::EmptyAfterCleanup.into());
    }
    pb.inc(1);

    pb.set_message("Building sections...");
    let document = pipeline.builder().process(&normalized.text);
    pb.inc(1);
    pb.finish_and_clear();

    debug!(
        "{}: {} nodes, {} headers",
        input.display(),
        document.sections.len(),
        document.headers().len()
    );

    if document.is_unstructured() {
        eprintln!(
            "{} no numbered or recognized sections found",
            "Warning:".yellow().bold()
        );
    }

    let content = if markdown {
        render::to_markdown(&document)
    } else {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        render::to_json(&document, format)?
    };

    write_or_print(output, &content)
}

fn cmd_headers(
    inputs: &[PathBuf],
    outline: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = Pipeline::default();
    let sources: Vec<FileSource> = inputs.iter().map(FileSource::new).collect();
    debug!("extracting headers from {} files", sources.len());
    let results = pipeline.structure_sources(&sources);

    let mut failures = 0;
    let mut entries = Vec::new();
    for (source, result) in sources.iter().zip(results) {
        let output = match result {
            Ok(output) => output,
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "Error".red().bold(), source.name(), e);
                continue;
            }
        };

        if json {
            entries.push(HeaderSummary::new(source.name(), output.headers()));
            continue;
        }

        if inputs.len() > 1 {
            println!("{}", source.name().cyan().bold());
        }
        if outline {
            println!("{}", render::to_outline(&output.document));
        } else {
            println!("{}", render::to_header_list(&output.document));
        }
    }

    if json {
        println!("{}", render::serialize(&entries, JsonFormat::Pretty)?);
    }

    if failures > 0 {
        let message = format!("{} of {} files failed", failures, inputs.len());
        return Err(paperstruct::Error::Other(message).into());
    }
    Ok(())
}

fn cmd_labels(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = FileSource::new(input).read_text()?;
    let builder = StructureBuilder::default();

    for line in paperstruct::structure::prepare_lines(&text) {
        let label = builder.classifier().classify(line);
        println!("{:>14} {} {}", label.as_str().cyan(), "│".dimmed(), line);
    }

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "paperstruct".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Academic PDF text cleanup and structuring tool");
    println!();
    println!("License: MIT");
}
