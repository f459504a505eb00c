// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use doc_compare::utils::logging::{format_error, format_info, format_success, format_warning};
use doc_compare::{
    render_text_report, CompareError, CompareProgress, CompareStage, ComparisonResult, Config,
    DocumentComparator, HistoryStore, JsonExporter, JsonHistoryStore, RawDocument, Validator,
};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "doc_compare")]
#[command(version = "0.1.0")]
#[command(about = "Compare two documents for similarity and potential plagiarism", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two PDF, DOCX or plain text files
    Compare {
        file1: PathBuf,

        file2: PathBuf,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        #[arg(short, long)]
        pretty: bool,

        /// Also write the JSON result into this directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Print a plain-text report
        #[arg(long)]
        report: bool,

        #[arg(short, long, value_name = "EMAIL", env = "DOC_COMPARE_USER")]
        user: Option<String>,

        /// Save the result to the history of --user
        #[arg(long, requires = "user")]
        save: bool,
    },

    /// List saved comparisons, newest first
    History {
        #[arg(short, long, value_name = "EMAIL", env = "DOC_COMPARE_USER")]
        user: String,

        #[arg(short, long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    doc_compare::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Compare {
            file1,
            file2,
            json,
            pretty,
            output,
            report,
            user,
            save,
        } => {
            let options = CompareOptions {
                json,
                pretty,
                output,
                report,
                save_for: user.filter(|_| save),
                colored: cli.color,
            };
            cmd_compare(config, &file1, &file2, options).await?;
        }
        Commands::History { user, limit } => {
            cmd_history(&config, &user, limit).await?;
        }
        Commands::Config => {
            cmd_config(&config)?;
        }
    }

    Ok(())
}

struct CompareOptions {
    json: bool,
    pretty: bool,
    output: Option<PathBuf>,
    report: bool,
    save_for: Option<String>,
    colored: bool,
}

async fn cmd_compare(
    config: Config,
    file1: &Path,
    file2: &Path,
    options: CompareOptions,
) -> Result<()> {
    let mut progress = CompareProgress::new(options.colored);

    let result = match run_comparison(config.clone(), file1, file2, &mut progress).await {
        Ok(result) => result,
        Err(err) => {
            progress.fail(&err.to_string());
            exit_with_report(&err, options.json);
        }
    };

    if let Some(owner) = &options.save_for {
        progress.stage(CompareStage::Saving);
        let mut store = JsonHistoryStore::open(&config.storage.history_path)
            .await
            .context("Failed to open comparison history")?;
        let entry = store
            .record(owner, result.clone())
            .await
            .context("Failed to save comparison")?;
        info!("Saved comparison {} for {}", entry.id, owner);
    }

    progress.finish();
    let stats = progress.get_stats();
    info!(
        "Comparison finished in {:.2}s ({} bytes read)",
        stats.duration.as_secs_f64(),
        stats.bytes_read
    );

    if let Some(dir) = &options.output {
        let exporter = JsonExporter::new(dir).context("Failed to create output directory")?;
        let path = exporter.export(&result, options.pretty)?;
        eprintln!("{}", format_info(&format!("Wrote {}", path.display())));
    }

    if options.json {
        println!("{}", JsonExporter::to_json(&result, options.pretty)?);
    } else if options.report {
        print!("{}", render_text_report(&result));
    } else {
        print_summary(&result);
    }

    if options.save_for.is_some() {
        eprintln!("{}", format_success("Comparison saved to history"));
    }

    Ok(())
}

async fn run_comparison(
    config: Config,
    file1: &Path,
    file2: &Path,
    progress: &mut CompareProgress,
) -> doc_compare::Result<ComparisonResult> {
    progress.stage(CompareStage::Reading);

    let max_bytes = config.max_file_size_bytes();
    let mut documents = Vec::with_capacity(2);
    for path in [file1, file2] {
        let document = read_upload(path, max_bytes).await?;
        progress.add_bytes_read(document.size());
        documents.push(document);
    }

    let comparator = Arc::new(DocumentComparator::new(config)?);

    progress.stage(CompareStage::Extracting);
    let extractor = Arc::clone(&comparator);
    let texts = tokio::task::spawn_blocking(move || {
        documents
            .iter()
            .map(|document| extractor.extract(document))
            .collect::<doc_compare::Result<Vec<_>>>()
    })
    .await
    .map_err(|e| CompareError::Io(std::io::Error::other(e)))??;

    progress.stage(CompareStage::Comparing);
    tokio::task::spawn_blocking(move || comparator.compare_texts(&texts[0], &texts[1]))
        .await
        .map_err(|e| CompareError::Io(std::io::Error::other(e)))?
}

/// Stand-in for the upload layer: checks the file and tags it with a media type.
async fn read_upload(path: &Path, max_bytes: u64) -> doc_compare::Result<RawDocument> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let checked = async {
        Validator::validate_file_path(path)?;
        let media_type = Validator::media_type_for_path(path)?;

        let size = tokio::fs::metadata(path).await?.len();
        Validator::validate_file_size(size, max_bytes)?;

        let bytes = tokio::fs::read(path).await?;
        Ok::<_, CompareError>(RawDocument::new(name.clone(), media_type.mime(), bytes))
    };

    checked.await.map_err(|e| e.for_file(name))
}

fn exit_with_report(err: &CompareError, json: bool) -> ! {
    let report = err.report();

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("{}", format_error(&report.message)),
        }
    } else {
        let message = match &report.file {
            Some(file) => format!("{}: {}", file, report.message),
            None => report.message.clone(),
        };
        eprintln!("{}", format_error(&message));
    }

    process::exit(if report.kind.is_user_correctable() { 2 } else { 1 });
}

fn print_summary(result: &ComparisonResult) {
    println!(
        "\n{} vs {}\n",
        result.file_info.file1.name.bold(),
        result.file_info.file2.name.bold()
    );
    println!("  Cosine similarity:   {:.4}", result.similarity);
    println!("  Jaccard similarity:  {:.4}", result.jaccard_similarity);
    println!("  Semantic similarity: {:.4}", result.semantic_similarity);
    println!("  Combined score:      {:.4}", result.combined_score);
    println!("  Hamming distance:    {}", result.hamming_distance);
    println!("  Similarity band:     {}", result.similarity_band.label());
    println!(
        "  Similar paragraphs:  {}  Shared phrases: {}",
        result.similar_content.len(),
        result.shared_sequences.len()
    );
    println!();

    if result.plagiarism_detected {
        println!("{}", format_warning("Potential plagiarism detected"));
    } else {
        println!("{}", format_success("No plagiarism detected"));
    }

    if let Some(explanation) = &result.explanation {
        println!("{}", explanation.summary);
    }
}

async fn cmd_history(config: &Config, user: &str, limit: Option<usize>) -> Result<()> {
    let store = JsonHistoryStore::open(&config.storage.history_path)
        .await
        .context("Failed to open comparison history")?;

    let entries = store.list(user).await?;
    let shown = limit.unwrap_or(entries.len()).min(entries.len());

    if entries.is_empty() {
        println!("\nNo saved comparisons for {}\n", user);
        return Ok(());
    }

    println!("\nSaved comparisons for {} ({} of {})\n", user, shown, entries.len());
    println!("{}", "=".repeat(80));

    for entry in entries.iter().take(shown) {
        let verdict = if entry.result.plagiarism_detected {
            "plagiarism".red()
        } else {
            "clean".green()
        };
        println!(
            "{}  {}  {} vs {}  similarity {:.4}  {}",
            entry.created_at,
            entry.id,
            entry.result.file_info.file1.name,
            entry.result.file_info.file2.name,
            entry.result.similarity,
            verdict
        );
    }

    println!("{}", "=".repeat(80));
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
    println!("{}", rendered);
    Ok(())
}
