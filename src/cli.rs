//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use crate::adapters::console_adapter::ConsoleSink;
use crate::adapters::csv_adapter::{ColumnMap, CsvBidSource};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::BidIndexError;
use crate::domain::index::BidIndex;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::BidSource;
use crate::ports::report_port::BidSink;

#[derive(Parser, Debug)]
#[command(name = "bidindex", about = "Dual-key index over auction bid records")]
pub struct Cli {
    /// INI config with [source] and [columns] sections
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// CSV export to load (overrides the config)
    #[arg(long, global = true)]
    pub csv: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all bids in ascending id order
    List,
    /// List all bids in pre-order of the id tree
    Preorder,
    /// List all bids in ascending title order
    Titles,
    /// List all bids in post-order of the title tree
    TitlesPostorder,
    /// Find a bid by id
    Find { id: String },
    /// Find every bid with a title
    FindTitle { title: String },
    /// Remove a bid by id, then list the remainder
    Remove { id: String },
    /// Interactive menu over a loaded index
    Menu,
}

#[derive(Debug, Clone, Copy)]
enum Listing {
    ById,
    PreOrderById,
    ByTitle,
    PostOrderByTitle,
}

pub fn run(cli: Cli) -> ExitCode {
    let source = match build_source(cli.config.as_ref(), cli.csv.as_ref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let mut sink = ConsoleSink::stdout();
    let result = match cli.command {
        Command::List => run_listing(&source, &mut sink, Listing::ById),
        Command::Preorder => run_listing(&source, &mut sink, Listing::PreOrderById),
        Command::Titles => run_listing(&source, &mut sink, Listing::ByTitle),
        Command::TitlesPostorder => run_listing(&source, &mut sink, Listing::PostOrderByTitle),
        Command::Find { id } => run_find(&source, &mut sink, &id),
        Command::FindTitle { title } => run_find_title(&source, &mut sink, &title),
        Command::Remove { id } => run_remove(&source, &mut sink, &id),
        Command::Menu => run_menu(&source, &mut sink),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, BidIndexError> {
    FileConfigAdapter::from_file(path).map_err(|e| BidIndexError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Resolve the CSV source from flags and config. The `--csv` flag wins over
/// `[source] csv_path`; column positions and the currency symbol come from
/// the config when present, else the export defaults.
pub fn build_source(
    config_path: Option<&PathBuf>,
    csv_override: Option<&PathBuf>,
) -> Result<CsvBidSource, BidIndexError> {
    let config = match config_path {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    let csv_path = match csv_override {
        Some(p) => p.clone(),
        None => config
            .as_ref()
            .and_then(|c| c.get_string("source", "csv_path"))
            .map(PathBuf::from)
            .ok_or_else(|| BidIndexError::ConfigMissing {
                section: "source".into(),
                key: "csv_path".into(),
            })?,
    };

    let defaults = ColumnMap::default();
    let columns = match &config {
        Some(c) => ColumnMap {
            title: c.get_usize("columns", "title", defaults.title),
            id: c.get_usize("columns", "id", defaults.id),
            amount: c.get_usize("columns", "amount", defaults.amount),
            fund: c.get_usize("columns", "fund", defaults.fund),
        },
        None => defaults,
    };

    let symbol = match &config {
        Some(c) => c.get_char("source", "currency_symbol", '$'),
        None => '$',
    };

    Ok(CsvBidSource::new(csv_path, columns, symbol))
}

/// Load every bid from the source into a fresh index, reporting the timing.
pub fn load_index(source: &dyn BidSource) -> Result<BidIndex, BidIndexError> {
    let started = Instant::now();
    let bids = source.load_bids()?;
    let mut index = BidIndex::new();
    for bid in bids {
        index.insert(bid);
    }
    eprintln!(
        "Loaded {} bids in {:.3}s",
        index.len(),
        started.elapsed().as_secs_f64()
    );
    Ok(index)
}

fn run_listing<S: BidSink>(
    source: &dyn BidSource,
    sink: &mut S,
    listing: Listing,
) -> Result<(), BidIndexError> {
    let index = load_index(source)?;
    let count = emit_listing(&index, sink, listing)?;
    eprintln!("{count} bids");
    Ok(())
}

fn emit_listing<S: BidSink>(
    index: &BidIndex,
    sink: &mut S,
    listing: Listing,
) -> Result<usize, BidIndexError> {
    match listing {
        Listing::ById => sink.emit_all(index.in_order()),
        Listing::PreOrderById => sink.emit_all(index.pre_order()),
        Listing::ByTitle => sink.emit_all(index.title_order()),
        Listing::PostOrderByTitle => sink.emit_all(index.post_order_title()),
    }
}

pub fn run_find<S: BidSink>(
    source: &dyn BidSource,
    sink: &mut S,
    id: &str,
) -> Result<(), BidIndexError> {
    let index = load_index(source)?;
    find_in_index(&index, sink, id)
}

fn find_in_index<S: BidSink>(
    index: &BidIndex,
    sink: &mut S,
    id: &str,
) -> Result<(), BidIndexError> {
    let started = Instant::now();
    let found = index.search(id);
    let elapsed = started.elapsed();

    match found {
        Some(bid) => sink.emit(bid)?,
        None => eprintln!("Bid id {id} not found."),
    }
    eprintln!("search took {:.6}s", elapsed.as_secs_f64());
    Ok(())
}

pub fn run_find_title<S: BidSink>(
    source: &dyn BidSource,
    sink: &mut S,
    title: &str,
) -> Result<(), BidIndexError> {
    let index = load_index(source)?;
    find_title_in_index(&index, sink, title)
}

fn find_title_in_index<S: BidSink>(
    index: &BidIndex,
    sink: &mut S,
    title: &str,
) -> Result<(), BidIndexError> {
    let started = Instant::now();
    let found = index.search_title(title);
    let elapsed = started.elapsed();

    if found.is_empty() {
        eprintln!("Bid title {title} not found.");
    } else {
        for bid in &found {
            sink.emit(bid)?;
        }
        eprintln!("{} matching bids", found.len());
    }
    eprintln!("search took {:.6}s", elapsed.as_secs_f64());
    Ok(())
}

pub fn run_remove<S: BidSink>(
    source: &dyn BidSource,
    sink: &mut S,
    id: &str,
) -> Result<(), BidIndexError> {
    let mut index = load_index(source)?;
    match index.remove(id) {
        Some(bid) => {
            eprintln!("Removed bid {}", bid.id);
            let count = sink.emit_all(index.in_order())?;
            eprintln!("{count} bids remain");
        }
        None => eprintln!("Bid id {id} not found."),
    }
    Ok(())
}

const NOT_LOADED: &str = "No bids loaded; choose 1 first.";

fn print_menu() {
    eprintln!("Menu:");
    eprintln!("  1. Load bids");
    eprintln!("  2. Display all bids by id");
    eprintln!("  3. Display bids in pre-order by id");
    eprintln!("  4. Find bid by id");
    eprintln!("  5. Remove bid by id");
    eprintln!("  6. Display all bids by title");
    eprintln!("  7. Find bids by title");
    eprintln!("  8. Display bids in post-order by title");
    eprintln!("  9. Exit");
    eprint!("Enter choice: ");
}

/// Interactive loop over a lazily loaded index. EOF on stdin ends the
/// session like choice 9.
fn run_menu<S: BidSink>(source: &dyn BidSource, sink: &mut S) -> Result<(), BidIndexError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut index: Option<BidIndex> = None;

    loop {
        print_menu();
        let Some(line) = next_line(&mut lines)? else {
            break;
        };

        match line.trim() {
            "1" => index = Some(load_index(source)?),
            "2" | "3" | "6" | "8" => match index.as_ref() {
                Some(idx) => {
                    let listing = match line.trim() {
                        "2" => Listing::ById,
                        "3" => Listing::PreOrderById,
                        "6" => Listing::ByTitle,
                        _ => Listing::PostOrderByTitle,
                    };
                    emit_listing(idx, sink, listing)?;
                }
                None => eprintln!("{NOT_LOADED}"),
            },
            "4" => match index.as_ref() {
                Some(idx) => {
                    let Some(id) = prompt(&mut lines, "bid id")? else {
                        break;
                    };
                    find_in_index(idx, sink, id.trim())?;
                }
                None => eprintln!("{NOT_LOADED}"),
            },
            "5" => match index.as_mut() {
                Some(idx) => {
                    let Some(id) = prompt(&mut lines, "bid id")? else {
                        break;
                    };
                    match idx.remove(id.trim()) {
                        Some(bid) => eprintln!("Removed bid {}", bid.id),
                        None => eprintln!("Bid id {} not found.", id.trim()),
                    }
                }
                None => eprintln!("{NOT_LOADED}"),
            },
            "7" => match index.as_ref() {
                Some(idx) => {
                    let Some(title) = prompt(&mut lines, "bid title")? else {
                        break;
                    };
                    find_title_in_index(idx, sink, title.trim())?;
                }
                None => eprintln!("{NOT_LOADED}"),
            },
            "9" => break,
            other => eprintln!("Invalid choice {other}; enter 1-9."),
        }
    }

    eprintln!("Good bye.");
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    what: &str,
) -> Result<Option<String>, BidIndexError> {
    eprint!("Enter {what}: ");
    next_line(lines)
}

fn next_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<String>, BidIndexError> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
