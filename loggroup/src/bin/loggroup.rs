use anyhow::Context;
use clap::Parser;
use loggroup::cluster::{self, ClusterState};
use loggroup::config::{OutputFormat, RunConfig, Threshold};
use loggroup::ranker::{self, SortOrder};
use loggroup::render::{JsonRenderer, TableRenderer};
use loggroup::view::{Miss, View};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::sync::Once;
use tracing::{info, warn};

fn init_parallelism() {
    static START: Once = Once::new();
    START.call_once(|| {
        let n = num_cpus::get();
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    });
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[derive(Parser, Debug)]
#[command(name = "loggroup", version, about = "Group similar log lines into wildcard patterns")]
struct Cli {
    /// Input file (`-` or omitted for stdin)
    #[arg(required = false)]
    input: Option<String>,

    /// Similarity threshold for log lines (0-1)
    #[arg(long = "threshold", default_value_t = Threshold::DEFAULT)]
    threshold: f64,

    /// Sort largest groups first
    #[arg(long = "reverse", short = 'r', default_value_t = false)]
    reverse: bool,

    /// Explicit sort order: asc | desc (overrides --reverse)
    #[arg(long = "sort")]
    sort: Option<SortOrder>,

    /// Output format: table | json
    #[arg(long = "format", default_value = "table")]
    format: OutputFormat,

    /// Only keep the first N groups after sorting
    #[arg(long = "top")]
    top: Option<usize>,

    /// Show the member lines of the Nth group (1-based, after sorting)
    #[arg(long = "group", short = 'g')]
    group: Option<usize>,

    /// With --group: show value counts for the Kth wildcard (1-based)
    #[arg(long = "slot", short = 's', requires = "group")]
    slot: Option<usize>,
}

fn read_groups(input: Option<&str>, threshold: Threshold) -> anyhow::Result<ClusterState> {
    let state = match input {
        None | Some("-") => cluster::cluster_reader(io::stdin().lock(), threshold)?,
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {path}"))?;
            // Larger buffer reduces syscalls on big files.
            cluster::cluster_reader(BufReader::with_capacity(1 << 20, f), threshold)?
        }
    };
    Ok(state)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    init_parallelism();
    let cli = Cli::parse();

    let order = cli.sort.unwrap_or(if cli.reverse { SortOrder::Descending } else { SortOrder::Ascending });
    let config = RunConfig::new(cli.threshold, order, cli.format)?.with_top(cli.top);

    let state = read_groups(cli.input.as_deref(), config.threshold)?;
    info!(lines = state.total_lines(), groups = state.groups().len(), threshold = config.threshold.value(), "grouped input");

    let groups = ranker::rank_top(state.into_groups(), config.order, config.top);
    let mut view = View::new(groups);
    match view.open(cli.group, cli.slot) {
        Ok(()) => {}
        Err(Miss::Group(n)) => warn!(group = n, available = view.groups().len(), "no such group; showing list"),
        Err(Miss::Slot { group, slot }) => warn!(group, slot, "group has no such wildcard; showing lines"),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Table => {
            let mut r = TableRenderer::new(&mut out);
            view.render(&mut r)?;
        }
        OutputFormat::Json => {
            let mut r = JsonRenderer::new(&mut out);
            view.render(&mut r)?;
        }
    }
    out.flush()?;
    Ok(())
}
