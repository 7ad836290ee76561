//! quotefmt CLI - vendor quote re-formatting tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use quotefmt::{
    sniff_dialect, BulletStyle, Dialect, FormatOptions, JsonFormat, KeywordSet, NoiseFilter,
    ParseOptions, QuantityMode, QuoteFormatter,
};

#[derive(Parser)]
#[command(name = "quotefmt")]
#[command(author = "quotefmt contributors")]
#[command(version)]
#[command(about = "Re-format vendor hardware quotes into bullet lists", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    format: FormatArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a quote as a bullet list (default)
    #[command(alias = "fmt")]
    Format {
        #[command(flatten)]
        args: FormatArgs,
    },

    /// Parse a quote and print it as JSON
    Json {
        #[command(flatten)]
        input: InputArgs,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Guess the dialect of a quote
    Detect {
        /// Input text file (stdin if omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// List supported dialects
    Dialects,

    /// Show version information
    Version,
}

#[derive(Args, Clone, Default)]
struct InputArgs {
    /// Input text file (stdin if omitted or "-")
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Input dialect, or "auto" to guess
    #[arg(short, long, env = "QUOTEFMT_DIALECT", default_value = "auto")]
    dialect: String,

    /// Base-unit keywords, comma separated
    #[arg(short, long, value_delimiter = ',')]
    keywords: Vec<String>,

    /// Also list the base line itself as a bullet
    #[arg(long)]
    include_base: bool,

    /// Keep price and boilerplate lines
    #[arg(long)]
    keep_noise: bool,

    /// Extra phrase to strip, e.g. a salesperson's name (repeatable)
    #[arg(long = "strip", value_name = "PHRASE")]
    strip: Vec<String>,
}

#[derive(Args, Clone, Default)]
struct FormatArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Bullet style (defaults to the dialect's preset)
    #[arg(long, value_enum, env = "QUOTEFMT_STYLE")]
    style: Option<StyleArg>,

    /// Text between product sections (escapes: \n, \t)
    #[arg(long)]
    separator: Option<String>,

    /// Text appended to every product title
    #[arg(long, conflicts_with = "no_suffix")]
    suffix: Option<String>,

    /// Do not append a suffix to product titles
    #[arg(long)]
    no_suffix: bool,

    /// Show raw quantities instead of collapsing base-matching ones to 1
    #[arg(long)]
    raw_quantities: bool,

    /// Print extraction statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    /// `- **Memory: 16GB** *(Qty: 1)*`
    Markdown,
    /// `• Memory: 16GB (Qty: 1)`
    Plain,
}

impl From<StyleArg> for BulletStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Markdown => BulletStyle::Markdown,
            StyleArg::Plain => BulletStyle::Plain,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Some(Commands::Format { args }) => cmd_format(&args),
        Some(Commands::Json { input, compact }) => cmd_json(&input, compact),
        Some(Commands::Detect { input }) => cmd_detect(input.as_deref()),
        Some(Commands::Dialects) => {
            cmd_dialects();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_format(&cli.format),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_format(args: &FormatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(args.input.input.as_deref())?;
    let dialect = resolve_dialect(&args.input.dialect, &raw)?;

    let formatter = QuoteFormatter::new()
        .with_parse_options(build_parse_options(&args.input)?)
        .with_format_options(build_format_options(args, dialect));

    let result = formatter.format_with_stats(&raw, dialect)?;

    if args.stats {
        let stats = &result.stats;
        eprintln!("{}", "Extraction Statistics".cyan().bold());
        eprintln!("{}", "─".repeat(40).dimmed());
        eprintln!("{}: {}", "Dialect".bold(), result.dialect);
        eprintln!("{}: {}", "Sections".bold(), stats.section_count);
        eprintln!("{}: {}", "Items".bold(), stats.item_count);
        eprintln!("{}: {}", "Collapsed".bold(), stats.collapsed_quantity_count);
        if stats.has_warnings() {
            eprintln!("{}: {}", "Warnings".yellow().bold(), stats.warning_count);
        }
    }

    write_output(args.output.as_deref(), &result.content)
}

fn cmd_json(input: &InputArgs, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(input.input.as_deref())?;
    let dialect = resolve_dialect(&input.dialect, &raw)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = QuoteFormatter::new()
        .with_parse_options(build_parse_options(input)?)
        .to_json(&raw, dialect, format)?;
    println!("{}", json);

    Ok(())
}

fn cmd_detect(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(input)?;

    match sniff_dialect(&raw) {
        Some(dialect) => {
            println!("{} {}", dialect.as_str().green().bold(), dialect.description().dimmed());
            Ok(())
        }
        None => Err("could not recognize the quote layout; pass --dialect".into()),
    }
}

fn cmd_dialects() {
    println!("{}", "Supported Dialects".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for dialect in Dialect::ALL {
        println!("{:<24} {}", dialect.as_str().bold(), dialect.description());
    }
    println!("{:<24} {}", "auto".bold(), "guess from the input text");
}

fn cmd_version() {
    println!("{} {}", "quotefmt".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Vendor quote re-formatting tool");
    println!();
    println!("License: MIT");
}

fn read_input(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(p) if p != Path::new("-") => Ok(fs::read_to_string(p)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = path {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn resolve_dialect(tag: &str, raw: &str) -> Result<Dialect, Box<dyn std::error::Error>> {
    if !tag.trim().eq_ignore_ascii_case("auto") {
        return Ok(tag.parse::<Dialect>()?);
    }

    let dialect = sniff_dialect(raw)
        .ok_or("could not recognize the quote layout; pass --dialect explicitly")?;
    log::info!("detected dialect: {}", dialect);
    Ok(dialect)
}

fn build_parse_options(args: &InputArgs) -> quotefmt::Result<ParseOptions> {
    let mut options = ParseOptions::new().with_base_item(args.include_base);

    if !args.keywords.is_empty() {
        options = options.with_keywords(KeywordSet::new(args.keywords.iter().cloned())?);
    }

    let mut noise = if args.keep_noise {
        NoiseFilter::none()
    } else {
        NoiseFilter::default()
    };
    for phrase in &args.strip {
        noise = noise.with_phrase(phrase.clone());
    }

    Ok(options.with_noise_filter(noise))
}

fn build_format_options(args: &FormatArgs, dialect: Dialect) -> FormatOptions {
    let mut options = FormatOptions::for_dialect(dialect);

    if let Some(style) = args.style {
        options = options.with_bullet_style(style.into());
    }
    if let Some(ref separator) = args.separator {
        options = options.with_separator(unescape(separator));
    }
    if args.no_suffix {
        options = options.without_title_suffix();
    } else if let Some(ref suffix) = args.suffix {
        options = options.with_title_suffix(suffix.clone());
    }
    if args.raw_quantities {
        options = options.with_quantity_mode(QuantityMode::Raw);
    }

    options
}

// Shells make literal newlines awkward to pass as a flag value.
fn unescape(text: &str) -> String {
    text.replace("\\n", "\n").replace("\\t", "\t")
}
