//! layout2md CLI - Markdown from PDF layout dumps

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use layout2md::{Document, FontHistogram, HeaderMap, PageSelection, PageStream, RenderOptions};

#[derive(Parser)]
#[command(name = "layout2md")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert PDF page layouts to Markdown", long_about = None)]
struct Cli {
    /// Input layout file (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Page range (e.g., "1-10", "1,3,5", "5-N")
    #[arg(long)]
    pages: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a layout file to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5", "5-N")
        #[arg(long)]
        pages: Option<String>,

        /// Font size of body text (detected if not specified)
        #[arg(long, value_name = "SIZE")]
        body_size: Option<f32>,

        /// Render pages on a single thread
        #[arg(long)]
        sequential: bool,

        /// Print extraction statistics
        #[arg(long)]
        stats: bool,
    },

    /// Show font sizes and heading levels of a layout file
    Info {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Markdown {
            input,
            output,
            pages,
            body_size,
            sequential,
            stats,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            pages.as_deref(),
            body_size,
            sequential,
            stats,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.pages.as_deref())
            } else {
                println!("{}", "Usage: layout2md <FILE> [--pages RANGE]".yellow());
                println!("       layout2md --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load(
    input: &Path,
    pages: Option<&str>,
) -> Result<(Document, PageSelection), Box<dyn std::error::Error>> {
    let doc = Document::from_path(input)?;
    let selection = match pages {
        Some(spec) => PageSelection::parse(spec, doc.page_count())?,
        None => PageSelection::All,
    };
    Ok((doc, selection))
}

fn progress_bar(len: usize) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Render through a page stream, advancing the progress bar per page.
fn render_with_progress(
    doc: &Document,
    options: RenderOptions,
) -> Result<(String, layout2md::ExtractionStats), Box<dyn std::error::Error>> {
    let stream = PageStream::new(doc, options)?;
    let pb = progress_bar(stream.remaining())?;

    let mut markdown = String::new();
    let mut stats = layout2md::ExtractionStats::new();
    for page in stream {
        pb.set_message(format!("page {}", page.number));
        markdown.push_str(&page.markdown);
        stats.merge(&page.stats);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok((markdown, stats))
}

fn cmd_convert(input: &Path, pages: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let (doc, selection) = load(input, pages)?;

    let options = RenderOptions::new().with_pages(selection);
    let (markdown, _) = render_with_progress(&doc, options)?;

    let output = input.with_extension("md");
    fs::write(&output, &markdown)?;

    let elapsed = started.elapsed();
    log::info!("markdown created in {:.3?}", elapsed);
    println!(
        "{} {} ({:.2} sec)",
        "Saved to".green(),
        output.display(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
    body_size: Option<f32>,
    sequential: bool,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let (doc, selection) = load(input, pages)?;

    let mut options = RenderOptions::new()
        .with_pages(selection)
        .with_parallel(!sequential)
        .with_stats(stats);
    if let Some(size) = body_size {
        options = options.with_body_size(size);
    }

    let (markdown, extraction) = if output.is_some() {
        render_with_progress(&doc, options)?
    } else {
        let result = layout2md::render::to_markdown_with_stats(&doc, &options)?;
        (result.content, result.stats)
    };
    log::info!("markdown created in {:.3?}", started.elapsed());

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", markdown);
    }

    if stats {
        print_stats(&extraction);
    }

    Ok(())
}

fn print_stats(stats: &layout2md::ExtractionStats) {
    eprintln!();
    eprintln!("{}", "Extraction Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}: {}", "Pages".bold(), stats.page_count);
    eprintln!("{}: {}", "Text regions".bold(), stats.text_region_count);
    eprintln!("{}: {}", "Tables".bold(), stats.table_count);
    eprintln!("{}: {}", "Headings".bold(), stats.heading_count);
    eprintln!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    eprintln!("{}: {}", "Links".bold(), stats.link_count);
    eprintln!("{}: {}", "Words".bold(), stats.word_count);
    eprintln!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_path(input)?;
    let histogram = FontHistogram::from_pages(&doc.pages);
    let headers = HeaderMap::build(&histogram, None);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref name) = doc.name {
        println!("{}: {}", "Name".bold(), name);
    }
    println!("{}: {}", "Pages".bold(), doc.page_count());

    let tables: usize = doc.pages.iter().map(|p| p.tables.len()).sum();
    let links: usize = doc.pages.iter().map(|p| p.uri_links().len()).sum();
    println!("{}: {}", "Tables".bold(), tables);
    println!("{}: {}", "Links".bold(), links);

    println!();
    println!("{}", "Font Sizes".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if histogram.is_empty() {
        println!("{}", "No text found".yellow());
        return Ok(());
    }

    let mut sizes = histogram.entries().to_vec();
    sizes.sort_by(|a, b| b.0.cmp(&a.0));
    for (size, chars) in sizes {
        let role = match headers.level(size) {
            Some(level) => format!("{} (h{})", "#".repeat(level), level),
            None if headers.body_size().map(|b| b.round_ties_even() as i32) == Some(size) => "body".to_string(),
            None => String::new(),
        };
        println!("{:>5}: {:>8} chars  {}", size, chars, role.dimmed());
    }

    if let Some(body) = headers.body_size() {
        println!();
        println!("{}: {}", "Body size".bold(), body);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "layout2md".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown from PDF page layouts");
    println!();
    println!("License: MIT");
}
