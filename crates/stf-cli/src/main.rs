use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use stf::{Boundary, Mode, ParseOptions, Separators, Trim};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SepArg {
    Tab,
    Colon,
    Comma,
    Space,
    Semicolon,
    Pipe,
    Slash,
    Hyphen,
    Bang,
}

impl From<SepArg> for Separators {
    fn from(s: SepArg) -> Self {
        match s {
            SepArg::Tab => Separators::TAB,
            SepArg::Colon => Separators::COLON,
            SepArg::Comma => Separators::COMMA,
            SepArg::Space => Separators::SPACE,
            SepArg::Semicolon => Separators::SEMICOLON,
            SepArg::Pipe => Separators::PIPE,
            SepArg::Slash => Separators::SLASH,
            SepArg::Hyphen => Separators::HYPHEN,
            SepArg::Bang => Separators::BANG,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrimArg {
    None,
    Left,
    Right,
    Both,
}

impl From<TrimArg> for Trim {
    fn from(t: TrimArg) -> Self {
        match t {
            TrimArg::None => Trim::empty(),
            TrimArg::Left => Trim::LEFT,
            TrimArg::Right => Trim::RIGHT,
            TrimArg::Both => Trim::LEFT | Trim::RIGHT,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "stf-cli",
    about = "Tokenize delimited or fixed-width text into a JSON grid",
    version
)]
struct Args {
    /// Options file (JSON); flags given on the command line override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field separator; repeat for several
    #[arg(short, long = "separator", value_enum)]
    separators: Vec<SepArg>,

    /// Additional custom separator character
    #[arg(long)]
    custom: Option<char>,

    /// Quote character
    #[arg(long)]
    quote: Option<char>,

    /// Treat a doubled quote inside a quoted field as closing the field
    #[arg(long)]
    no_quote_doubling: bool,

    /// Treat runs of separators as one
    #[arg(long)]
    collapse: bool,

    /// Which ends of a field lose their spaces
    #[arg(long, value_enum)]
    trim: Option<TrimArg>,

    /// Fixed-width column ends, comma separated; -1 runs to end of line
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    fixed: Option<Vec<i64>>,

    /// Stop after this many lines
    #[arg(long)]
    max_lines: Option<usize>,

    /// Convert CR and CRLF to LF and drop form feeds before parsing
    #[arg(long)]
    normalize: bool,

    /// Reject input containing non-printable characters
    #[arg(long)]
    strict_text: bool,

    /// Print sizing statistics instead of the grid
    #[arg(long)]
    stats: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Stats {
    rows: usize,
    columns: usize,
    longest_row: usize,
    column_widths: Vec<usize>,
}

fn build_options(args: &Args) -> Result<ParseOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(f).with_context(|| format!("reading {}", path.display()))?
        }
        None => ParseOptions::default(),
    };

    if !args.separators.is_empty() {
        options.separators = args
            .separators
            .iter()
            .fold(Separators::empty(), |acc, &s| acc | Separators::from(s));
    }
    if let Some(c) = args.custom {
        options = options.with_custom_separator(c);
    }
    if let Some(q) = args.quote {
        options.quote_char = q;
    }
    if args.no_quote_doubling {
        options.quote_doubling_is_literal = false;
    }
    if args.collapse {
        options.collapse_repeated_separators = true;
    }
    if let Some(t) = args.trim {
        options.trim = t.into();
    }
    if let Some(positions) = &args.fixed {
        options.mode = Mode::FixedWidth;
        options.split_positions = positions
            .iter()
            .map(|&p| Boundary::try_from(p))
            .collect::<stf::Result<_>>()?;
    }
    if args.max_lines.is_some() {
        options.max_lines = args.max_lines;
    }
    options.validate()?;
    Ok(options)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = build_options(&args)?;

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    if args.strict_text && !stf::is_valid_text(&buf) {
        bail!("input contains non-printable characters");
    }
    if args.normalize {
        let before = buf.len();
        let after = stf::normalize_line_endings(&mut buf);
        tracing::debug!("normalized input from {} to {} bytes", before, after);
    }

    if args.stats {
        let columns = stf::column_count(&options, &buf);
        let stats = Stats {
            rows: stf::row_count(&options, &buf),
            columns,
            longest_row: stf::longest_row_width(&options, &buf),
            column_widths: (0..columns)
                .map(|i| stf::column_width(&options, &buf, i))
                .collect(),
        };
        print_json(&stats, args.pretty)
    } else {
        let grid = stf::parse(&options, &buf)?;
        print_json(&grid, args.pretty)
    }
}
