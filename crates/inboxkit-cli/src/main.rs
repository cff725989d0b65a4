use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use inboxkit_cli::cli::{init_tracing, log_file_path, run_screen, CliConfig, ListRequest, Screen};

#[derive(Parser)]
#[command(name = "inboxkit")]
#[command(about = "Filter, search, sort and select inbox-style lists")]
struct Cli {
    /// Path to JSON config file (unsetDateRange, unknownControl, pageSize, memoize)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// JSON array of records to list instead of the built-in sample data
    #[arg(long, short = 'r', global = true)]
    records: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, short, global = true)]
    pretty: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Received messages (filters: all, unread, pinned, dateRange)
    Inbox(ListArgs),

    /// Sent messages (filters: all, unread, pinned, dateRange)
    Sent(ListArgs),

    /// Canned responses (filters: all, pinned, dateRange)
    Canned(ListArgs),

    /// Question bank (filters: all, pinned, draft, published, archived,
    /// multipleChoice, trueFalse, shortAnswer, essay)
    Questions(ListArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive search text
    #[arg(long, short, default_value = "")]
    query: String,

    /// Filter name
    #[arg(long, short)]
    filter: Option<String>,

    /// Sort key: newest, oldest, titleAsc, titleDesc
    #[arg(long, short)]
    sort: Option<String>,

    /// Lower date bound (RFC 3339), implies --filter dateRange
    #[arg(long)]
    from: Option<String>,

    /// Upper date bound (RFC 3339), implies --filter dateRange
    #[arg(long)]
    to: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page (defaults to pageSize from config)
    #[arg(long)]
    page_size: Option<usize>,

    /// Select a row by id (can be specified multiple times)
    #[arg(long = "select", value_name = "ID")]
    select: Vec<String>,

    /// Select every row in the result, across all pages
    #[arg(long)]
    select_all: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Commands {
    fn into_parts(self) -> (Screen, ListArgs) {
        match self {
            Commands::Inbox(args) => (Screen::Inbox, args),
            Commands::Sent(args) => (Screen::Sent, args),
            Commands::Canned(args) => (Screen::Canned, args),
            Commands::Questions(args) => (Screen::Questions, args),
        }
    }
}

impl From<ListArgs> for ListRequest {
    fn from(args: ListArgs) -> Self {
        ListRequest {
            query: args.query,
            filter: args.filter,
            sort: args.sort,
            from: args.from,
            to: args.to,
            page: args.page,
            page_size: args.page_size,
            select: args.select,
            select_all: args.select_all,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::resolve(cli.config.as_deref())?;
    let log_file = log_file_path(config.log_file.as_deref());
    init_tracing(cli.verbose, log_file.as_deref())?;

    let (screen, args) = cli.command.into_parts();
    let json = args.json;
    let request = ListRequest::from(args);
    let listing = run_screen(screen, &request, &config.view, cli.records.as_deref())?;

    if json {
        println!("{}", listing.to_json(cli.pretty)?);
    } else {
        println!("{}", listing.to_text());
    }
    Ok(())
}
