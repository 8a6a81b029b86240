use anyhow::{bail, Context};
use clap::Parser;
use ns_analysis::{timed, AnalysisConfig, NewsAnalyzer};
use ns_core::RecordStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

mod logging;
mod output;

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore a labeled fake/real news dataset", long_about = None)]
pub struct Cli {
    /// CSV file to load; repeat to combine several files
    #[arg(long = "dataset", global = true)]
    datasets: Vec<PathBuf>,
    /// Directory scanned for *.csv datasets when no --dataset is given
    #[arg(long, default_value = "Dataset", global = true)]
    dataset_dir: PathBuf,
    /// Load only the Nth dataset (1-based) listed in --dataset-dir
    #[arg(long, global = true, conflicts_with = "datasets")]
    pick: Option<usize>,
    /// JSON file with word-frequency settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Report how long the operation took
    #[arg(long, global = true)]
    timing: bool,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the datasets found in --dataset-dir
    Datasets,
    /// Show the number of loaded articles
    Total,
    /// Show the first articles in file order
    Head {
        #[arg(short, long, default_value_t = 5)]
        n: usize,
    },
    /// Sort articles by year and show the first ones
    Sort {
        #[arg(short, long, default_value_t = 5)]
        n: usize,
    },
    /// Find articles from a year in a category
    SearchYear {
        #[arg(long)]
        year: i32,
        /// One of: politics, business, entertainment, health, science, sports, technology
        #[arg(long)]
        category: String,
    },
    /// Find articles whose title or body contains a keyword (case-insensitive)
    SearchKeyword { keyword: String },
    /// Monthly counts of fake political articles in a year
    FakePolitics {
        #[arg(long)]
        year: i32,
    },
    /// Most frequent words in fake government-related articles
    Words {
        #[arg(long)]
        top: Option<usize>,
        #[arg(long)]
        min_len: Option<usize>,
        #[arg(long)]
        no_stop_words: bool,
        /// Subject counted as government-related; repeat for several
        #[arg(long = "category")]
        categories: Vec<String>,
    },
}

fn resolve_datasets(cli: &Cli) -> anyhow::Result<Vec<PathBuf>> {
    if !cli.datasets.is_empty() {
        return Ok(cli.datasets.clone());
    }
    if let Some(choice) = cli.pick {
        return Ok(vec![ns_ingest::select_dataset(&cli.dataset_dir, choice)?]);
    }
    let found = ns_ingest::list_datasets(&cli.dataset_dir)?;
    if found.is_empty() {
        bail!("no CSV datasets found in {}", cli.dataset_dir.display());
    }
    Ok(found)
}

fn load_analyzer(cli: &Cli, config: AnalysisConfig) -> anyhow::Result<NewsAnalyzer> {
    let paths = resolve_datasets(cli)?;
    let collection = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut analyzer = NewsAnalyzer::new(RecordStore::new(), config);
    let loaded = analyzer
        .reload(collection.clone(), || ns_ingest::load_datasets(&paths).map(|r| r.records))
        .with_context(|| format!("failed to load {}", collection))?;
    if loaded == 0 {
        bail!("no valid data found in {}", collection);
    }
    Ok(analyzer)
}

fn build_config(cli: &Cli) -> anyhow::Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("invalid config file {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Commands::Words { top, min_len, no_stop_words, categories } = &cli.command {
        if let Some(top) = top {
            config = config.with_top_n(*top);
        }
        if let Some(min_len) = min_len {
            config = config.with_min_word_len(*min_len);
        }
        if *no_stop_words {
            config = config.with_stop_words(false);
        }
        if !categories.is_empty() {
            config = config.with_government_categories(categories.iter().cloned());
        }
    }
    config.validate()?;
    Ok(config)
}

/// Run `operation`, reporting its duration when `--timing` is set.
fn measured<T>(cli: &Cli, label: &str, operation: impl FnOnce() -> T) -> T {
    if !cli.timing {
        return operation();
    }
    let result = timed(label, operation);
    println!(
        "✅ {} completed in {}.",
        label,
        humantime::format_duration(result.elapsed)
    );
    result.value
}

/// Exit status for a failed run: 2 when the caller passed bad arguments,
/// 1 for everything else.
fn exit_code_for(error: &anyhow::Error) -> u8 {
    let input_error = error
        .downcast_ref::<ns_core::Error>()
        .is_some_and(ns_core::Error::is_input_error);
    if input_error {
        2
    } else {
        1
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Commands::Datasets = cli.command {
        let datasets = ns_ingest::list_datasets(&cli.dataset_dir)?;
        if cli.json {
            output::print_json(&datasets)?;
        } else {
            output::print_datasets(&datasets);
        }
        return Ok(());
    }

    let config = build_config(cli)?;
    let mut analyzer = load_analyzer(cli, config)?;
    info!("📰 {} articles ready", analyzer.total());

    match &cli.command {
        Commands::Datasets => {}
        Commands::Total => {
            if cli.json {
                output::print_json(&serde_json::json!({ "total": analyzer.total() }))?;
            } else {
                println!("Total articles loaded: {}", analyzer.total());
            }
        }
        Commands::Head { n } => {
            let head = analyzer.head(*n);
            if cli.json {
                output::print_json(head)?;
            } else {
                output::print_articles(head, false);
            }
        }
        Commands::Sort { n } => {
            measured(cli, "Sorting", || analyzer.sort_by_year());
            let head = analyzer.head(*n);
            if cli.json {
                output::print_json(head)?;
            } else {
                output::print_articles(head, false);
            }
        }
        Commands::SearchYear { year, category } => {
            let found = measured(cli, "Search", || analyzer.find_by_year_and_category(*year, category))?;
            if cli.json {
                output::print_json(&found)?;
            } else if found.is_empty() {
                println!("No articles found for \"{}\" in {}.", category, year);
            } else {
                output::print_articles(found.iter().copied(), true);
            }
        }
        Commands::SearchKeyword { keyword } => {
            let found = measured(cli, "Search", || analyzer.find_by_keyword(keyword))?;
            if cli.json {
                output::print_json(&found)?;
            } else if found.is_empty() {
                println!("No articles contain \"{}\".", keyword);
            } else {
                println!("Found {} articles containing \"{}\":", found.len(), keyword);
                output::print_articles(found.iter().copied(), true);
            }
        }
        Commands::FakePolitics { year } => {
            let histogram = measured(cli, "Analysis", || analyzer.count_fake_political_by_month(*year))?;
            if cli.json {
                output::print_json(&histogram.to_map())?;
            } else {
                output::print_histogram(&histogram);
            }
        }
        Commands::Words { .. } => {
            let words = measured(cli, "Analysis", || analyzer.most_frequent_words())?;
            if cli.json {
                output::print_json(&words)?;
            } else {
                println!(
                    "Most frequent words in fake news about: {}",
                    analyzer.config().government_categories.join(", ")
                );
                output::print_words(&words);
            }
        }
    }

    Ok(())
}
