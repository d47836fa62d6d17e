//! Interactive front end: seed a queue, pick an item by letter, move it to a new position.

use clap::Parser;
use log::LevelFilter;
use ranked_queue::{QueueError, RankedItem, RankedQueue};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "reorder", about = "Move an item of a ranked queue to a new position")]
struct Opt {
    /// Number of items to seed, named A, B, C and so on.
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=26))]
    items: u8,

    /// Log more (-v for debug, -vv for trace); RUST_LOG is honored otherwise.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Payload of a seeded item.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: char,
    region: String,
}

#[derive(Debug, Error)]
enum InputError {
    #[error("unexpected input, enter a character A - {last}")]
    BadSelector { last: char },

    #[error("item {0} is not in the queue")]
    UnknownItem(char),

    #[error("unexpected input, enter a valid position in the queue")]
    BadPosition,

    #[error("no input")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Queue(#[from] QueueError),
}

fn init_logger(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

/// Queue holding items `A..` with regions cycling through `Region 1` to `Region 3`.
fn seed(count: u8) -> RankedQueue<Entry> {
    (0..count)
        .map(|i| Entry {
            name: char::from(b'A' + i),
            region: format!("Region {}", i % 3 + 1),
        })
        .collect()
}

fn last_name(count: u8) -> char {
    char::from(b'A' + count.saturating_sub(1))
}

/// Accept exactly one ASCII letter, in either case.
fn parse_selector(line: &str, count: u8) -> Result<char, InputError> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(InputError::BadSelector {
            last: last_name(count),
        }),
    }
}

fn parse_position(line: &str) -> Result<usize, InputError> {
    line.trim().parse().map_err(|_| InputError::BadPosition)
}

fn read_line(input: &mut impl BufRead) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(line)
}

fn print_listing(out: &mut impl Write, items: &[&RankedItem<Entry>]) -> io::Result<()> {
    for item in items {
        let entry = item.payload();
        writeln!(out, "{}, {}, {}", item.rank(), entry.name, entry.region)?;
    }
    Ok(())
}

fn run(opt: &Opt, input: &mut impl BufRead, out: &mut impl Write) -> Result<(), InputError> {
    let mut queue = seed(opt.items);

    writeln!(out, "Sorted Queue")?;
    print_listing(out, &queue.sort()?)?;
    writeln!(out)?;

    writeln!(out, "Select an item to re-order:")?;
    out.flush()?;
    let name = parse_selector(&read_line(input)?, opt.items)?;
    let handle = queue
        .iter()
        .find(|item| item.payload().name == name)
        .map(RankedItem::handle)
        .ok_or(InputError::UnknownItem(name))?;

    writeln!(out, "Choose item {name}'s new position:")?;
    out.flush()?;
    let position = parse_position(&read_line(input)?)?;
    log::debug!("moving {name} to {position}");

    let reordered = queue.reorder(handle, position)?;
    writeln!(out, "Re-Ordered")?;
    print_listing(out, &reordered)?;
    Ok(())
}

fn main() -> ExitCode {
    let opt = Opt::parse();
    init_logger(opt.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&opt, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
