mod logger;

use anyhow::{Context, Result, bail};
use clap::Parser;
use logger::CliLogger;
use pdf_booklet::constants::PAGES_PER_SHEET;
use pdf_booklet::{BookletError, BookletOptions};
use std::path::{Path, PathBuf};

/// Reorder and join pages from a PDF file for printing in booklets
#[derive(Parser)]
#[command(name = "makebook", version)]
struct Cli {
    /// The path of the source PDF file
    path: PathBuf,

    /// Number of sheets per section (each sheet will contain 4 pages from the PDF).
    /// Reordering is skipped when this is absent, 0 or negative.
    #[arg(short, long, allow_negative_numbers = true)]
    section_size: Option<i64>,

    /// Number of blank pages to add at the start of the PDF [default: 2].
    /// Only applied when --section-size is given.
    #[arg(short, long)]
    padding: Option<usize>,

    /// Join pairs of pages into single landscape pages double the width of the original
    #[arg(short, long)]
    join: bool,

    /// Output PDF file [default: <path minus extension>_book.pdf]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON options file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show what would be done without writing a PDF
    #[arg(long)]
    plan_only: bool,

    /// Verbose logging on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Options from the config file (or defaults) with command-line overrides applied
    async fn options(&self) -> Result<BookletOptions> {
        let mut options = match &self.config {
            Some(path) => BookletOptions::load(path)
                .await
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => BookletOptions::default(),
        };

        if let Some(section_size) = self.section_size {
            // Non-positive sizes switch reordering off
            options.section_size = usize::try_from(section_size).unwrap_or(0);
        }
        if let Some(padding) = self.padding {
            options.start_padding = padding;
        }
        if self.join {
            options.join = true;
        }

        Ok(options)
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| pdf_booklet::default_output_path(&self.path))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.verbose).init()?;

    let options = cli.options().await?;
    match options.validate() {
        Err(BookletError::NothingToDo) => {
            println!("No flags given. Nothing happened. See 'makebook -h' for usage.");
            std::process::exit(1);
        }
        other => other?,
    }

    let output = cli.output_path();
    if same_file(&cli.path, &output) {
        bail!(
            "Output path {} would overwrite the source file",
            output.display()
        );
    }

    let document = pdf_booklet::load_pdf(&cli.path)
        .await
        .with_context(|| format!("Failed to load {}", cli.path.display()))?;

    if cli.plan_only {
        let stats = pdf_booklet::calculate_statistics(&document, &options)?;
        println!("Booklet plan:");
        println!("  Source pages: {}", stats.source_pages);
        if let Some(reorder) = stats.reorder {
            println!("  Sections: {}", reorder.num_sections);
            println!(
                "  Pages per section: {}",
                reorder.section_size * PAGES_PER_SHEET
            );
            println!("  Blank pages at start: {}", reorder.start_padding);
            println!("  Blank pages at end: {}", reorder.end_padding);
        }
        println!("  Join into pairs: {}", if stats.join { "yes" } else { "no" });
        println!("  Output pages: {}", stats.output_pages);
        return Ok(());
    }

    let (booklet, report) = pdf_booklet::make_booklet(document, &options).await?;

    if let Some(reorder) = report.reorder {
        println!("{}", reorder);
    }
    if let Some(join) = report.join {
        println!("{}", join);
    }

    pdf_booklet::save_pdf(booklet, &output)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Wrote {}", output.display());

    Ok(())
}

/// Whether two paths name the same file (canonically, when both exist)
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
