use std::fs;

use clap::{App, Arg, ArgMatches};
use itertools::Itertools;
use slog::{o, Drain, Logger};
use slog_term::{FullFormat, TermDecorator};

use docfold::{
    document::Document,
    provider::FoldingProvider,
    range::FoldRange,
};

enum Error {
    IO(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IO(e)
    }
}

fn parse_arguments() -> ArgMatches<'static> {
    App::new("docfold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Utility for listing and previewing docstring fold ranges")
        .arg(Arg::with_name("source")
             .help("File to scan for docstring blocks")
             .value_name("SOURCE")
             .required(true)
             .index(1))
        .arg(Arg::with_name("preview")
             .help("Print the file with every docstring block collapsed to its first line")
             .long("preview")
             .short("p"))
        .arg(Arg::with_name("verbose")
             .help("Log detection activity to the terminal")
             .long("verbose")
             .short("v"))
        .get_matches()
}

fn create_logger() -> Logger {
    let decorator = TermDecorator::new().build();
    let drain = FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Logger::root(drain, o!())
}

fn main() {
    let args = parse_arguments();

    match run(&args) {
        Ok(()) => (),
        Err(Error::IO(io)) => eprintln!("IO error: {}", io),
    }
}

fn run(args: &ArgMatches) -> Result<(), Error> {
    let file_path = args.value_of("source").unwrap();
    let text = fs::read_to_string(file_path)?;

    let logger = match args.is_present("verbose") {
        true => Some(create_logger()),
        false => None,
    };

    let document = Document::new(file_path, &text);
    let mut provider = FoldingProvider::with_logger(logger);
    let ranges = provider.provide_ranges(&document).to_vec();

    if args.is_present("preview") {
        print_preview(&document, &ranges);
    } else if ranges.is_empty() {
        println!("no docstring blocks in {}", file_path);
    } else {
        println!("{}", ranges.iter().map(|range| format!("{}", range)).join("\n"));
    }

    Ok(())
}

fn print_preview(document: &Document, ranges: &[FoldRange]) {
    let mut ranges = ranges.iter().peekable();
    let mut line = 0;

    while line < document.line_count() {
        match ranges.peek() {
            Some(range) if range.start == line => {
                // The whole block collapses onto its first line. The closing
                // marker line is outside the range and prints normally.
                println!("{} …", document.line(line).unwrap_or(""));
                line = range.end + 1;
                ranges.next();
            }
            _ => {
                println!("{}", document.line(line).unwrap_or(""));
                line += 1;
            }
        }
    }
}
