//! Verbatim command line entrypoint.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use verbatim::{
    BacktestParams, Backtester, CommentCriteria, CommentFilter, ComparabilityScorer,
    EmbedderConfig, EmbeddingCapability, HashedEmbedder, LengthScorer, MatcherConfig, QuoteDetector, QuoteLoader, RecordKeeper,
    RecordSink, SemanticScorer, Segmenter, combine_records, comments_from_matches,
};

#[derive(Debug, Parser)]
#[command(name = "verbatim")]
#[command(about = "Detects comments that restate famous quotes")]
struct Cli {
    /// JSON file with matcher settings. `VERBATIM_*` variables still apply on top.
    #[arg(long, global = true, env = "VERBATIM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Merge the comments of several record files, dropping duplicates.
    Combine {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Build a comment record from the matched comments of several record files.
    MatchComments {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Run the detector over a record file of comments.
    Backtest {
        /// Quote CSV (`quote,author,category`, optional leading index column).
        #[arg(long)]
        quotes: PathBuf,
        /// Record file whose comments are replayed.
        #[arg(long)]
        comments: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = ScorerKind::Semantic)]
        scorer: ScorerKind,
        /// Overrides the configured score threshold.
        #[arg(long)]
        threshold: Option<f32>,
        /// Overrides the configured number of matches kept per comment.
        #[arg(long)]
        store_count: Option<usize>,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Bounds on which stored comments are replayed.
#[derive(Debug, Default, clap::Args)]
struct FilterArgs {
    /// Skip comments from this author. Repeatable.
    #[arg(long = "exclude-author")]
    exclude_authors: Vec<String>,
    /// Skip comments that were edited after posting.
    #[arg(long)]
    skip_edited: bool,
    /// Minimum body length in characters.
    #[arg(long)]
    min_length: Option<usize>,
    /// Maximum body length in characters.
    #[arg(long)]
    max_length: Option<usize>,
    /// Only comments created after this unix timestamp.
    #[arg(long)]
    since: Option<i64>,
    #[arg(long)]
    min_score: Option<i64>,
}

impl FilterArgs {
    fn into_criteria(self) -> CommentCriteria {
        CommentCriteria {
            excluded_authors: self.exclude_authors,
            skip_edited: self.skip_edited,
            min_body_chars: self.min_length,
            max_body_chars: self.max_length,
            newer_than: self.since,
            min_score: self.min_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScorerKind {
    Length,
    Semantic,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Combine { output, inputs } => {
            let records = load_all(&inputs)?;
            let combined = combine_records(&records);

            let mut comments = RecordKeeper::new();
            comments.log_comments(combined.logged_comments());
            comments.save(&output)?;
            tracing::info!(
                inputs = inputs.len(),
                comments = comments.logged_comments().len(),
                output = %output.display(),
                "Combined comment records"
            );
        }
        Commands::MatchComments { output, inputs } => {
            let records = load_all(&inputs)?;
            let comments = comments_from_matches(&[combine_records(&records)]);
            comments.save(&output)?;
            tracing::info!(
                inputs = inputs.len(),
                comments = comments.logged_comments().len(),
                output = %output.display(),
                "Extracted matched comments"
            );
        }
        Commands::Backtest {
            quotes,
            comments,
            output,
            scorer,
            threshold,
            store_count,
            filter,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(threshold) = threshold {
                config = config.with_score_threshold(threshold);
            }
            if let Some(store_count) = store_count {
                config.store_count = store_count;
            }
            config.validate()?;

            let criteria = filter.into_criteria();
            run_backtest(&config, scorer, &criteria, &quotes, &comments, &output)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MatcherConfig> {
    let config = match path {
        Some(path) => MatcherConfig::from_json_file(path)?.with_env_overrides()?,
        None => MatcherConfig::from_env()?,
    };
    Ok(config)
}

fn load_all(paths: &[PathBuf]) -> anyhow::Result<Vec<RecordKeeper>> {
    paths
        .iter()
        .map(|path| Ok(RecordKeeper::load(path)?))
        .collect()
}

fn run_backtest(
    config: &MatcherConfig,
    kind: ScorerKind,
    criteria: &CommentCriteria,
    quotes_path: &Path,
    comments_path: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let quotes = QuoteLoader::from_csv_path(quotes_path)?.into_vec();
    let loaded = RecordKeeper::load(comments_path)?.into_records().comments;
    let total = loaded.len();
    let mut comments = if criteria.is_unbounded() {
        loaded
    } else {
        let mut filter = CommentFilter::new(loaded);
        filter.apply_criteria(criteria);
        tracing::debug!(kept = filter.len(), dropped = total - filter.len(), "Filtered comments");
        filter.into_vec()
    };

    tracing::info!(
        quotes = quotes.len(),
        comments = comments.len(),
        loaded = total,
        scorer = ?kind,
        "Starting backtest"
    );

    let mut params = BacktestParams::from_config(config);
    let (detector, scorer): (QuoteDetector, Box<dyn ComparabilityScorer>) = match kind {
        ScorerKind::Length => {
            if params.filter_author {
                tracing::warn!("Length scorer cannot filter by author, disabling the filter");
                params.filter_author = false;
            }
            let scorer: Box<dyn ComparabilityScorer> = Box::new(LengthScorer::new());
            (QuoteDetector::length(quotes), scorer)
        }
        ScorerKind::Semantic => {
            let embedder: Arc<dyn EmbeddingCapability> = Arc::new(HashedEmbedder::new(
                EmbedderConfig::new(config.embedding_dim),
            )?);
            let detector = QuoteDetector::semantic(quotes, Segmenter::new(embedder.clone()))?;
            let scorer: Box<dyn ComparabilityScorer> =
                Box::new(SemanticScorer::from_config(config, embedder));
            (detector, scorer)
        }
    };

    let mut backtester = Backtester::new(detector, scorer);
    backtester.set_parameters(params);
    let matches = backtester.get_matches(&mut comments)?;

    let mut records = RecordKeeper::new();
    for matched in matches.into_iter().flatten() {
        records.log_match(matched);
    }
    records.save(output)?;

    tracing::info!(
        matches = records.logged_matches().len(),
        output = %output.display(),
        "Backtest complete"
    );
    Ok(())
}
