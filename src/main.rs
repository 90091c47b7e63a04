use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;
use regex::Regex;
use simple_logger::SimpleLogger;

use pipe_table_sort::order::Order;
use pipe_table_sort::sort::Sort;

/// Sort a pipe delimited table by a metric column, summary rows first
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Table to sort
    input: PathBuf,

    /// Where to write the sorted table
    output: PathBuf,

    /// Column to sort by
    #[arg(long, env = "PIPE_TABLE_SORT_METRIC", default_value = "net_sales_units")]
    metric: String,

    /// Order of the metric column, asc or desc
    #[arg(long, default_value = "desc")]
    order: Order,

    #[arg(long, default_value_t = '|')]
    field_separator: char,

    /// Skip blank lines anywhere in the input
    #[arg(long)]
    ignore_empty: bool,

    /// Skip record lines matching this regex
    #[arg(long)]
    ignore_lines: Option<Regex>,

    /// Value marking a summary row
    #[arg(long, default_value = "$total")]
    summary_sentinel: String,

    /// Only check whether the input is sorted, exit with 1 if it is not
    #[arg(long)]
    check: bool,
}

fn run(args: Args) -> Result<bool, anyhow::Error> {
    let mut table_sort = Sort::new(args.input, args.output, &args.metric);
    table_sort.with_order(args.order);
    table_sort.with_field_separator(args.field_separator);
    table_sort.with_summary_sentinel(&args.summary_sentinel);
    if args.ignore_empty {
        table_sort.with_ignore_empty();
    }
    if let Some(r) = args.ignore_lines {
        table_sort.with_ignore_lines(r);
    }

    if args.check {
        table_sort.check()
    } else {
        table_sort.sort().map(|_| true)
    }
}

/// Exit status of a run, 1 for a pipeline error or an unsorted input under `--check`.
fn exit_code(result: Result<bool, anyhow::Error>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) => {
            log::warn!("Input is not sorted");
            1
        }
        Err(e) => {
            log::error!("An error occurred: {:#}", e);
            1
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    let code = exit_code(run(args));
    if code != 0 {
        process::exit(code);
    }
}
