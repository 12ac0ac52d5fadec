//! Command-line front end for the table engine
//!
//! Loads a manifest JSON file and prints one page of the table for the
//! query parameters given on the command line. This is a thin view
//! adapter: it only forwards actions into the session and prints the
//! snapshot it gets back.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tx_core::QueryAction;
use tx_data::sources::{load_or_empty, ManifestSource};
use tx_query::{TableSession, TableSnapshot};

#[derive(Parser, Debug)]
#[command(
    name = "tablex",
    about = "Browse a chart manifest as a searchable, paginated table"
)]
struct Args {
    /// Path to the manifest JSON file ({"items": [...]})
    #[arg(default_value = "manifest.json")]
    manifest: PathBuf,

    /// Category filter (exact match)
    #[arg(long)]
    category: Option<String>,

    /// Topic filter (exact match)
    #[arg(long)]
    topic: Option<String>,

    /// Search pattern (regex, case-insensitive, matched against every column)
    #[arg(long)]
    search: Option<String>,

    /// Page to show, 1-based
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page
    #[arg(long, default_value_t = 20)]
    page_size: usize,

    /// List the selectable categories and topics instead of rows
    #[arg(long)]
    facets: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let source = ManifestSource::new(&args.manifest);
    let records = load_or_empty(&source).await;
    info!(manifest = %args.manifest.display(), records = records.len(), "ready");

    let mut session = TableSession::with_manifest_columns();
    session.load(records);

    // Filters first so their page resets land before the navigation.
    session.dispatch(QueryAction::SetPageSize(args.page_size));
    if let Some(category) = args.category {
        session.dispatch(QueryAction::SetCategory(category));
    }
    if let Some(topic) = args.topic {
        session.dispatch(QueryAction::SetTopic(topic));
    }
    if let Some(pattern) = args.search {
        session.dispatch(QueryAction::StagePattern(pattern));
        session.dispatch(QueryAction::CommitSearch);
    }
    session.dispatch(QueryAction::GotoPage(args.page));

    let snapshot = session.snapshot();
    if args.facets {
        print_facets(&snapshot);
    } else {
        print_page(&session, &snapshot);
    }

    Ok(())
}

fn print_facets(snapshot: &TableSnapshot) {
    println!("Categorías:");
    for category in &snapshot.category_options {
        println!("  {category}");
    }
    println!("Tópicos:");
    for topic in &snapshot.topic_options {
        println!("  {topic}");
    }
}

fn print_page(session: &TableSession, snapshot: &TableSnapshot) {
    if !snapshot.error.is_empty() {
        eprintln!("{}", snapshot.error);
    }

    let labels: Vec<&str> = session.columns().labels().collect();
    println!("{}", labels.join(" | "));
    for cells in &snapshot.cells {
        println!("{}", cells.join(" | "));
    }

    let pager = &snapshot.pager;
    println!("{}", pager.range_label);
    println!(
        "page {}/{}  [{}-{}]",
        pager.current_page, pager.total_pages, pager.window_start, pager.window_end
    );
}
