use clap::{Parser, Subcommand};
use docflow_core::constants::{DEFAULT_INTAKE_DIR_NAME, DEFAULT_ROOT_DIR_NAME};
use docflow_core::{lifecycle, DocumentStore, ResetOutcome};
use docflow_report::Column;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docflow")]
#[command(about = "Document intake routing and the wine quality report")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database root and intake directories
    Setup {
        /// Storage hierarchy root
        #[arg(long, default_value = DEFAULT_ROOT_DIR_NAME)]
        root: PathBuf,
        /// Inbox for newly arrived files
        #[arg(long, default_value = DEFAULT_INTAKE_DIR_NAME)]
        intake: PathBuf,
    },
    /// Store every file currently in the intake directory
    Store {
        /// Storage hierarchy root
        #[arg(long, default_value = DEFAULT_ROOT_DIR_NAME)]
        root: PathBuf,
        /// Inbox for newly arrived files
        #[arg(long, default_value = DEFAULT_INTAKE_DIR_NAME)]
        intake: PathBuf,
    },
    /// Empty the database root, keeping the directory itself
    Reset {
        /// Storage hierarchy root
        #[arg(long, default_value = DEFAULT_ROOT_DIR_NAME)]
        root: PathBuf,
    },
    /// Summarise a wine quality CSV
    Report {
        /// Path to the semicolon-delimited CSV file
        csv: PathBuf,
        /// Scatter x axis, named as in the CSV header (e.g. "alcohol")
        #[arg(long, requires = "y")]
        x: Option<Column>,
        /// Scatter y axis, named as in the CSV header (e.g. "quality")
        #[arg(long, requires = "x")]
        y: Option<Column>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docflow=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Setup { root, intake } => {
            lifecycle::setup(&root, &intake)?;
            println!("Created {} and {}", root.display(), intake.display());
        }
        Commands::Store { root, intake } => {
            lifecycle::setup(&root, &intake)?;
            let store = DocumentStore::new(&intake, &root);
            let outcome = store.store_all()?;

            println!("Stored {} document(s)", outcome.stored);
            if !outcome.failed.is_empty() {
                println!("Failed {} file(s), left in intake:", outcome.failed.len());
                for failed in &outcome.failed {
                    println!("  {}: {}", failed.name, failed.error);
                }
            }
        }
        Commands::Reset { root } => match lifecycle::reset(&root)? {
            ResetOutcome::Cleared => println!("Cleared {}", root.display()),
            ResetOutcome::RootMissing => {
                println!("Nothing to do: {} does not exist", root.display())
            }
        },
        Commands::Report { csv, x, y } => {
            let records = docflow_report::load(&csv)?;
            println!("{} record(s)", records.len());
            for summary in docflow_report::summarize(&records) {
                println!(
                    "{:<22} mean {:>9.3}  std {:>9.3}  min {:>9.3}  max {:>9.3}",
                    summary.column.name(),
                    summary.mean,
                    summary.std_dev,
                    summary.min,
                    summary.max
                );
            }
            if let (Some(x), Some(y)) = (x, y) {
                println!();
                println!("{};{}", x.name(), y.name());
                for (xv, yv) in docflow_report::scatter(&records, x, y) {
                    println!("{};{}", xv, yv);
                }
            }
        }
    }

    Ok(())
}
