//! docuflow CLI - markup rendering tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use docuflow::render::{self, DocumentStats};
use docuflow::{
    collect_citations, generate_bibliography, parse, CoverPage, Document, JsonFormat,
    RenderOptions, StandaloneFormat, Theme,
};

#[derive(Parser)]
#[command(name = "docuflow")]
#[command(version)]
#[command(about = "Render lightweight markup to themed HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Presentation theme
    #[arg(long, global = true, value_enum, env = "DOCUFLOW_THEME", default_value = "academic")]
    theme: ThemeArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render to HTML
    Html {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Wrap the fragment in a complete document
        #[arg(long, value_enum)]
        standalone: Option<ExportFormat>,

        /// Document title for standalone output
        #[arg(long)]
        title: Option<String>,

        /// Append a reference list built from cited links
        #[arg(short, long)]
        bibliography: bool,

        #[command(flatten)]
        cover: CoverArgs,

        /// Emit spaces instead of <br/> for line breaks
        #[arg(long)]
        no_line_breaks: bool,
    },

    /// Render to plain text
    Text {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Append a reference list built from cited links
        #[arg(short, long)]
        bibliography: bool,
    },

    /// Dump the parsed document as JSON
    Json {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show word count, reading time, and block counts
    Stats {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List the links a bibliography would cite
    Refs {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List available themes
    Themes,

    /// Show version information
    Version,
}

#[derive(clap::Args, Default)]
struct CoverArgs {
    /// Add a cover page
    #[arg(long)]
    cover: bool,

    /// Cover page institution
    #[arg(long, value_name = "NAME")]
    cover_institution: Option<String>,

    /// Cover page course
    #[arg(long, value_name = "NAME")]
    cover_course: Option<String>,

    /// Cover page title
    #[arg(long, value_name = "TEXT")]
    cover_title: Option<String>,

    /// Cover page author
    #[arg(long, value_name = "NAME")]
    cover_author: Option<String>,

    /// Cover page date
    #[arg(long, value_name = "DATE")]
    cover_date: Option<String>,
}

impl CoverArgs {
    /// Build a cover page if any cover option was given.
    fn to_cover(&self) -> Option<CoverPage> {
        let fields = [
            &self.cover_institution,
            &self.cover_course,
            &self.cover_title,
            &self.cover_author,
            &self.cover_date,
        ];
        if !self.cover && fields.iter().all(|f| f.is_none()) {
            return None;
        }

        let mut cover = CoverPage::new();
        if let Some(ref v) = self.cover_institution {
            cover = cover.with_institution(v);
        }
        if let Some(ref v) = self.cover_course {
            cover = cover.with_course(v);
        }
        if let Some(ref v) = self.cover_title {
            cover = cover.with_title(v);
        }
        if let Some(ref v) = self.cover_author {
            cover = cover.with_author(v);
        }
        if let Some(ref v) = self.cover_date {
            cover = cover.with_date(v);
        }
        Some(cover)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Sans-serif with indigo accents
    Modern,
    /// Serif, justified, monochrome
    Academic,
    /// Bold headings with violet accents
    Creative,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Modern => Theme::Modern,
            ThemeArg::Academic => Theme::Academic,
            ThemeArg::Creative => Theme::Creative,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    /// Minimal HTML page
    Html,
    /// Word-compatible HTML
    Word,
}

impl From<ExportFormat> for StandaloneFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Html => StandaloneFormat::Html,
            ExportFormat::Word => StandaloneFormat::Word,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let theme = Theme::from(cli.theme);
    log::debug!("using theme {}", theme);

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            standalone,
            title,
            bibliography,
            cover,
            no_line_breaks,
        }) => {
            let options = RenderOptions::new()
                .with_theme(theme)
                .with_line_breaks(!no_line_breaks);
            cmd_html(
                &input,
                output.as_deref(),
                standalone,
                title.as_deref(),
                bibliography,
                cover.to_cover(),
                &options,
            )
        }
        Some(Commands::Text {
            input,
            output,
            bibliography,
        }) => cmd_text(&input, output.as_deref(), bibliography),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Stats { input }) => cmd_stats(&input),
        Some(Commands::Refs { input }) => cmd_refs(&input),
        Some(Commands::Themes) => {
            cmd_themes(theme);
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: docuflow <COMMAND> <FILE>".yellow());
            println!("       docuflow --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read input text from a file, or from stdin when the path is `-`.
fn read_input(path: &Path) -> io::Result<String> {
    log::debug!("reading input from {}", path.display());
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Append a bibliography, reporting a missing-citations notice instead of failing.
fn append_bibliography(doc: &mut Document) -> Result<(), docuflow::Error> {
    match generate_bibliography(doc) {
        Ok(bib) => {
            eprintln!("{} {} references", "Bibliography generated:".green(), bib.len());
            Ok(())
        }
        Err(e) if e.is_advisory() => {
            log::info!("bibliography skipped: {}", e);
            eprintln!("{}", e.to_string().yellow());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Title for exported documents: the first heading, or "Untitled".
fn document_title(doc: &Document) -> String {
    doc.iter()
        .find(|block| block.is_heading())
        .map(|block| render::to_text(&Document::from_blocks(vec![block.clone()])))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "Untitled".to_string())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    standalone: Option<ExportFormat>,
    title: Option<&str>,
    bibliography: bool,
    cover: Option<CoverPage>,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let mut doc = parse(&text);

    if bibliography {
        append_bibliography(&mut doc)?;
    }
    let title = title.map(str::to_string).unwrap_or_else(|| document_title(&doc));
    if let Some(cover) = cover {
        doc.insert_cover_page(cover);
    }

    let html = match standalone {
        Some(format) => render::to_standalone(&doc, &title, format.into(), options)?,
        None => render::to_html(&doc, options)?,
    };

    write_output(output, &html)?;
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    bibliography: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let mut doc = parse(&text);

    if bibliography {
        append_bibliography(&mut doc)?;
    }

    write_output(output, &render::to_text(&doc))?;
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse(&read_input(input)?);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;
    write_output(output, &json)?;
    Ok(())
}

fn cmd_stats(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = parse(&text);
    let stats = DocumentStats::collect(&text, &doc);

    println!("{}", "Document Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {} min", "Reading time".bold(), stats.reading_minutes);

    println!();
    println!("{}", "Blocks".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Quotes".bold(), stats.quote_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Math blocks".bold(), stats.math_block_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!("{}: {}", "Links".bold(), stats.link_count);

    Ok(())
}

fn cmd_refs(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse(&read_input(input)?);
    let citations = collect_citations(&doc);

    if citations.is_empty() {
        println!("{}", docuflow::Error::NoCitations.to_string().yellow());
        return Ok(());
    }

    println!("{}", "Citations".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (i, citation) in citations.iter().enumerate() {
        println!(
            "[{}] {} {}",
            i + 1,
            citation.label,
            citation.url.dimmed()
        );
    }

    Ok(())
}

fn cmd_themes(current: Theme) {
    println!("{}", "Themes".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for theme in Theme::ALL {
        let marker = if theme == current { "*" } else { " " };
        println!(
            "{} {:<10} {}",
            marker.green(),
            theme.name().bold(),
            theme.profile().container.dimmed()
        );
    }
}

fn cmd_version() {
    println!("{} {}", "docuflow".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markup rendering tool");
}
