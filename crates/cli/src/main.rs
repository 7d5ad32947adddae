use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use codemin_code_chunker::{
    Chunker, ChunkerConfig, CodeChunk, ContextSplitter, ContextTurns, SplitterConfig,
};
use codemin_minifier::{partition_supported, BatchMinifier};
use config::CliConfig;
use report::MinifyOutput;
use scanner::{confined_join, is_binary_path, DirResolver, FileScanner};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod report;
mod scanner;

#[derive(Parser)]
#[command(name = "codemin")]
#[command(about = "Minify source files and chunk them for model context", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// TOML config file ([chunker], [splitter], [scan])
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Minify files into one banner-delimited text
    Minify(MinifyArgs),

    /// Split files into line-bounded chunks for embedding
    Chunk(ChunkArgs),

    /// Split one text into overlapping context-window chunks
    Split(SplitArgs),
}

#[derive(Args)]
struct MinifyArgs {
    /// Project root
    root: PathBuf,

    /// Paths relative to the root (default: every text file under it)
    paths: Vec<String>,

    /// Write the result to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Output the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ChunkArgs {
    /// Project root
    root: PathBuf,

    /// Paths relative to the root
    #[arg(required = true, num_args = 1..)]
    paths: Vec<String>,

    /// Maximum chunk size in bytes
    #[arg(long)]
    max_chars: Option<usize>,
}

#[derive(Args)]
struct SplitArgs {
    /// Text file to split
    file: PathBuf,

    /// Maximum chunk size in bytes
    #[arg(long)]
    max_chunk_size: Option<usize>,

    /// Bytes shared between adjacent chunks
    #[arg(long)]
    overlap: Option<usize>,

    /// Render chunks as numbered conversation turns
    #[arg(long)]
    turns: bool,
}

#[derive(Serialize)]
struct TurnsOutput {
    preamble: String,
    turns: Vec<String>,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // JSON commands keep stdout clean
    let json_output = match &cli.command {
        Commands::Minify(args) => args.json,
        Commands::Chunk(_) | Commands::Split(_) => true,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Minify(args) => run_minify(args, &config)?,
        Commands::Chunk(args) => run_chunk(args, &config)?,
        Commands::Split(args) => run_split(args, &config)?,
    }

    Ok(())
}

fn run_minify(args: MinifyArgs, config: &CliConfig) -> Result<()> {
    let root = args.root.canonicalize().context("Invalid project path")?;

    let paths = if args.paths.is_empty() {
        FileScanner::new(&root, config.scan).scan()
    } else {
        args.paths
    };
    let (_, skipped) = partition_supported(&paths);

    let resolver = DirResolver::new(&root, config.scan.max_file_bytes);
    let report = BatchMinifier::new()
        .minify_files(&paths, &resolver)
        .with_context(|| format!("Nothing to minify under {}", root.display()))?;

    let output = MinifyOutput::new(report, skipped);
    let body = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        log::info!("{}", report::render_summary(&output));
        output.content
    };

    emit(&body, args.output.as_deref())
}

fn run_chunk(args: ChunkArgs, config: &CliConfig) -> Result<()> {
    let root = args.root.canonicalize().context("Invalid project path")?;
    let chunker = Chunker::new(ChunkerConfig {
        max_chunk_chars: args
            .max_chars
            .unwrap_or(config.chunker.max_chunk_chars),
    })?;

    let mut chunks: Vec<CodeChunk> = Vec::new();
    for path in &args.paths {
        let relative = path.replace('\\', "/");
        if is_binary_path(Path::new(&relative)) {
            log::debug!("Skipping binary file: {relative}");
            continue;
        }
        let Some(full) = confined_join(&root, &relative) else {
            log::warn!("Skipping {relative}: path leaves the project root");
            continue;
        };
        let content = match fs::read_to_string(&full) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Skipping {relative}: {e}");
                continue;
            }
        };
        chunks.extend(chunker.chunk_file(&relative, &content));
    }

    log::debug!("{}", Chunker::get_stats(&chunks));
    println!("{}", serde_json::to_string_pretty(&chunks)?);
    Ok(())
}

fn run_split(args: SplitArgs, config: &CliConfig) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let splitter = ContextSplitter::new(SplitterConfig {
        max_chunk_size: args
            .max_chunk_size
            .unwrap_or(config.splitter.max_chunk_size),
        overlap_size: args.overlap.unwrap_or(config.splitter.overlap_size),
    })?;

    let chunks = splitter.split(&text);
    let body = if args.turns {
        let turns = ContextTurns::from_chunks(chunks);
        serde_json::to_string_pretty(&TurnsOutput {
            preamble: turns.preamble(),
            turns: turns.render(),
        })?
    } else {
        serde_json::to_string_pretty(&chunks)?
    };

    println!("{body}");
    Ok(())
}

fn emit(body: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{body}"),
    }
    Ok(())
}
