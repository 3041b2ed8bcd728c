use std::path::{Path, PathBuf};

use colored::Colorize;
use copione_core::roster::{build_roster, RosterEntry};
use copione_core::Block;
use pdf::{ExtractionError, LopdfExtractor, TextExtractor};

use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Parse a script into speaker/utterance blocks (JSON)
    Parse(ParseOptions),
    /// List the characters that speak in a script
    Characters(CharactersOptions),
    /// Print document metadata
    Info {
        /// Path to the PDF file
        path: PathBuf,
    },
}

#[derive(Debug, clap::Args, Clone)]
pub struct SourceOptions {
    /// Path to the script: a PDF, or UTF-8 text when --plain is set
    path: PathBuf,

    /// Treat the input as already extracted UTF-8 text
    #[arg(long, env = "COPIONE_PLAIN")]
    plain: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ParseOptions {
    #[clap(flatten)]
    source: SourceOptions,

    /// Write the blocks to this file instead of stdout
    #[arg(short, long, env = "COPIONE_OUTPUT")]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct CharactersOptions {
    #[clap(flatten)]
    source: SourceOptions,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(command: Commands, global: crate::Global) -> Result<()> {
    match command {
        Commands::Parse(options) => parse(options, global).await,
        Commands::Characters(options) => characters(options, global).await,
        Commands::Info { path } => info(path).await,
    }
}

async fn parse(options: ParseOptions, global: crate::Global) -> Result<()> {
    let blocks = load_blocks_blocking(options.source.clone()).await?;

    if global.verbose {
        print_summary(&options.source.path, &blocks);
    }

    let json = render_blocks(&blocks, !options.compact)?;
    match options.output {
        Some(out) => {
            std::fs::write(&out, json)
                .wrap_err_with(|| f!("Failed to write {}", out.display()))?;
            if global.verbose {
                eprintln!("{} {}", "Wrote".green(), out.display());
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}

async fn characters(options: CharactersOptions, global: crate::Global) -> Result<()> {
    let blocks = load_blocks_blocking(options.source.clone()).await?;

    if global.verbose {
        print_summary(&options.source.path, &blocks);
    }

    let roster = build_roster(&blocks);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
    } else {
        print_roster(&roster);
    }

    Ok(())
}

async fn info(path: PathBuf) -> Result<()> {
    let meta = tokio::task::spawn_blocking(move || -> Result<pdf::DocumentMetadata> {
        let bytes =
            std::fs::read(&path).wrap_err_with(|| f!("Failed to read {}", path.display()))?;
        Ok(pdf::info(&bytes).map_err(Error::from)?)
    })
    .await??;

    println!("{}", serde_json::to_string_pretty(&meta)?);
    Ok(())
}

/// Extract page text with `extractor` and parse it into blocks.
///
/// Extraction failures are returned as-is and the parser never runs.
pub fn parse_document(
    extractor: &impl TextExtractor,
    bytes: &[u8],
) -> std::result::Result<Vec<Block>, ExtractionError> {
    let pages = extractor.extract_pages(bytes)?;
    log::debug!("extractor returned {} pages", pages.len());
    Ok(copione_core::parse_pages(&pages))
}

/// Read and parse a script from disk.
pub fn load_blocks(source: &SourceOptions) -> Result<Vec<Block>> {
    let bytes = std::fs::read(&source.path)
        .wrap_err_with(|| f!("Failed to read {}", source.path.display()))?;

    if source.plain {
        let text = String::from_utf8(bytes).map_err(Error::from)?;
        return Ok(copione_core::parse_text(&text));
    }

    Ok(parse_document(&LopdfExtractor, &bytes).map_err(Error::from)?)
}

// lopdf and the parser are synchronous.
async fn load_blocks_blocking(source: SourceOptions) -> Result<Vec<Block>> {
    tokio::task::spawn_blocking(move || load_blocks(&source)).await?
}

fn render_blocks(blocks: &[Block], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(blocks)?
    } else {
        serde_json::to_string(blocks)?
    };
    Ok(json)
}

fn print_summary(path: &Path, blocks: &[Block]) {
    let scenes = blocks.iter().filter(|b| b.is_scene()).count();
    eprintln!(
        "{} {}: {} blocks ({} dialogue, {} scene)",
        "Parsed".green(),
        path.display().to_string().cyan(),
        blocks.len(),
        blocks.len() - scenes,
        scenes
    );
}

fn print_roster(roster: &[RosterEntry]) {
    if roster.is_empty() {
        eprintln!("{}", "No characters found".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Character", "Blocks"]);
    for entry in roster {
        table.add_row(prettytable::row![entry.name, entry.blocks]);
    }
    table.printstd();
}
