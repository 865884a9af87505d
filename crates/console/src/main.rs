// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use vas_api::{
    BulkActionRequest, ListPage, ParamSet, PrintArchiveRequest, QueryParamBuilder, Sheet,
};
use vas_bulk::{
    GateDecision, PlannerConfig, PlannerEvent, PlannerState, PlannerTransition, apply,
    gate_print_transcripts,
};
use vas_client::{BulkExecutor, DEFAULT_TIMEOUT_SECS, ExportArtifact, HttpTransport};
use vas_domain::{DEFAULT_MAX_BATCH_SIZE, FilterState, Selection, TranscriptRecord};
use vas_persistence::{FilterStore, SqliteStore};

const AWARDS_LIST_PATH: &str = "/api/awards/";
const AWARDS_PRINT_PATH: &str = "/api/awards/print/";
const LIST_PAGE_SIZE: u32 = 25;

/// VAS Console - operator console for bulk assessment administration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend base URL
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Per-request deadline in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Directory to save downloaded artifacts into
    #[arg(long, default_value = "exports")]
    out_dir: PathBuf,

    /// Selection size above which bulk actions are batched
    #[arg(long, default_value_t = DEFAULT_MAX_BATCH_SIZE)]
    max_batch_size: u32,

    /// Path to the settings database. If not provided, uses an in-memory
    /// database and filters do not persist across runs.
    #[arg(long)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print one page of the awards list
    List {
        /// 1-based page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Search text, persisted for subsequent runs
        #[arg(long)]
        search: Option<String>,
    },
    /// Print transcripts for every award matching the current filters
    PrintAwards {
        /// Search text, persisted for subsequent runs
        #[arg(long)]
        search: Option<String>,

        /// Repeat an earlier print run
        #[arg(long)]
        reprint: bool,

        /// Recorded justification for a reprint
        #[arg(long)]
        reason_id: Option<i64>,
    },
    /// Export every award matching the current filters as CSV
    Export {
        /// Search text, persisted for subsequent runs
        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store: SqliteStore = match &args.database {
        Some(path) => {
            info!(path = %path.display(), "using settings database");
            SqliteStore::new_with_file(path)?
        }
        None => {
            info!("using in-memory settings database");
            SqliteStore::new_in_memory()?
        }
    };
    let filter_store: FilterStore<SqliteStore> = FilterStore::new(store);

    let transport: HttpTransport = HttpTransport::new(&args.base_url, args.timeout_secs)?;
    let executor: BulkExecutor<HttpTransport> = BulkExecutor::new(transport);

    match &args.command {
        Command::List { page, search } => {
            let builder: QueryParamBuilder =
                prepare_filters(&filter_store, search.as_deref())?;
            run_list(&executor, &builder, *page).await
        }
        Command::PrintAwards {
            search,
            reprint,
            reason_id,
        } => {
            let builder: QueryParamBuilder =
                prepare_filters(&filter_store, search.as_deref())?;
            run_print_awards(&args, &executor, &builder, *reprint, *reason_id).await
        }
        Command::Export { search } => {
            let builder: QueryParamBuilder =
                prepare_filters(&filter_store, search.as_deref())?;
            run_export(&args, &executor, &builder).await
        }
    }
}

/// Loads the persisted filters, applies any search override, and persists
/// the result so the next run starts where this one left off.
fn prepare_filters(
    store: &FilterStore<SqliteStore>,
    search: Option<&str>,
) -> Result<QueryParamBuilder, Box<dyn std::error::Error>> {
    let mut filters: FilterState = store.load()?;
    if let Some(text) = search {
        filters.set_search(text);
        store.save(&filters)?;
    }
    Ok(QueryParamBuilder::new(LIST_PAGE_SIZE, filters))
}

async fn run_list(
    executor: &BulkExecutor<HttpTransport>,
    builder: &QueryParamBuilder,
    page: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing: ListPage<serde_json::Value> = executor
        .fetch_page(AWARDS_LIST_PATH, &builder.build(page, None, None))
        .await?;

    for row in &listing.results {
        println!("{row}");
    }
    info!(
        count = listing.count,
        page = listing.current_page,
        pages = listing.num_pages,
        "fetched awards page"
    );
    Ok(())
}

async fn run_print_awards(
    args: &Args,
    executor: &BulkExecutor<HttpTransport>,
    builder: &QueryParamBuilder,
    reprint: bool,
    reason_id: Option<i64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<serde_json::Value> = executor
        .fetch_all(AWARDS_LIST_PATH, &builder.build_export(None, None))
        .await?;
    let records: Vec<TranscriptRecord> = rows
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()?;

    let reason_id: Option<i64> = match gate_print_transcripts(&records, reprint) {
        GateDecision::Blocked { reason } => return Err(reason.into()),
        GateDecision::RequireReprintReason => match reason_id {
            Some(reason) => Some(reason),
            None => return Err("a reprint requires --reason-id".into()),
        },
        GateDecision::Proceed { .. } => None,
        GateDecision::RequireReference | GateDecision::RequireConfirmation => {
            return Err("unexpected gate decision for a print run".into());
        }
    };

    let total: u64 = records.len() as u64;
    let mut selection: Selection = Selection::new();
    selection.select_all_matching(total);
    let filters: ParamSet = builder.build_export(None, None);

    let config: PlannerConfig = PlannerConfig {
        max_batch_size: args.max_batch_size,
    };
    let mut state: PlannerState = PlannerState::default();
    let mut transition: PlannerTransition = apply(
        &config,
        &state,
        PlannerEvent::RequestBulkAction {
            effective_count: total,
        },
    )?;
    state = transition.new_state.clone();

    let mut batch_index: u32 = 1;
    loop {
        let Some(directive) = transition.directive else {
            match &state {
                PlannerState::AwaitingConfig(plan) => {
                    info!(
                        total = plan.total_requested(),
                        batch_size = plan.chosen_batch_size(),
                        offset = plan.current_offset(),
                        "confirming next batch"
                    );
                    transition = apply(&config, &state, PlannerEvent::Confirm)?;
                    state = transition.new_state.clone();
                    continue;
                }
                _ => break,
            }
        };

        let batched: bool = matches!(state, PlannerState::Executing { plan: Some(_) });
        let scope: BulkActionRequest =
            BulkActionRequest::from_selection(&selection, filters.clone(), &directive)?;
        let request: PrintArchiveRequest = PrintArchiveRequest {
            scope,
            is_reprint: reprint,
            reason_id,
        };

        match executor
            .print_archive(AWARDS_PRINT_PATH, &request, batched.then_some(batch_index))
            .await
        {
            Ok(artifact) => {
                let path: PathBuf = artifact.save(&args.out_dir).await?;
                println!("saved {}", path.display());
                transition = apply(&config, &state, PlannerEvent::BatchSucceeded)?;
                state = transition.new_state.clone();
                batch_index += 1;
            }
            Err(err) => {
                warn!(batch = batch_index, "batch failed, run can be resumed");
                let _failed: PlannerTransition =
                    apply(&config, &state, PlannerEvent::BatchFailed)?;
                return Err(err.into());
            }
        }

        if matches!(state, PlannerState::Idle) {
            break;
        }
    }

    // The printed flags changed server-side, so the local snapshot is stale.
    selection.clear();
    let refreshed: ListPage<serde_json::Value> = executor
        .fetch_page(AWARDS_LIST_PATH, &builder.build(1, None, None))
        .await?;
    info!(count = refreshed.count, "list refreshed after print run");
    Ok(())
}

async fn run_export(
    args: &Args,
    executor: &BulkExecutor<HttpTransport>,
    builder: &QueryParamBuilder,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<serde_json::Value> = executor
        .fetch_all(AWARDS_LIST_PATH, &builder.build_export(None, None))
        .await?;

    if rows.is_empty() {
        println!("No data to export for the current filters");
        return Ok(());
    }

    let headers: Vec<String> = rows
        .first()
        .and_then(serde_json::Value::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();
    let mut sheet: Sheet = Sheet::new("Awards", headers.clone());
    for row in &rows {
        let cells: Vec<String> = headers.iter().map(|key| cell_text(row, key)).collect();
        sheet.push_row(cells)?;
    }

    let today: time::Date = time::OffsetDateTime::now_utc().date();
    let artifact: ExportArtifact = ExportArtifact {
        file_name: format!("awards-export-{today}.csv"),
        content_type: Some(String::from("text/csv")),
        bytes: sheet.write_csv()?,
    };
    let path: PathBuf = artifact.save(&args.out_dir).await?;
    println!("saved {}", path.display());
    info!(rows = rows.len(), "export complete");
    Ok(())
}

fn cell_text(row: &serde_json::Value, key: &str) -> String {
    match row.get(key) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
