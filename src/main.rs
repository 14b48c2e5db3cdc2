//! CLI entry point for daybrief

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "daybrief")]
#[command(version = "0.1.2")]
#[command(about = "A static page generator for daily AI news briefings", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new briefing site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a prefilled data document for a date (defaults to today)
    New {
        /// Date of the document, as YYYY-MM-DD
        date: Option<String>,

        /// Overwrite an existing document
        #[arg(short, long)]
        force: bool,
    },

    /// Generate the briefing page for a date (defaults to today)
    #[command(alias = "g")]
    Generate {
        /// Date to generate, as YYYY-MM-DD
        date: Option<String>,

        /// Skip regenerating the archive index
        #[arg(long)]
        no_index: bool,
    },

    /// Regenerate the archive index page
    Index,

    /// Clean the public folder
    Clean,

    /// List data documents or generated pages
    List {
        /// Type of content to list (data, page)
        #[arg(default_value = "data")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "daybrief=debug,info"
    } else {
        "daybrief=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing briefing site in {:?}", target_dir);
            daybrief::commands::init::init_site(&target_dir)?;
            println!("Initialized briefing site in {:?}", target_dir);
        }

        Commands::New { date, force } => {
            let app = daybrief::Daybrief::new(&base_dir)?;
            let date = resolve_date(&app, date.as_deref())?;
            let path = daybrief::commands::new::run(&app, date, force)?;
            println!("Created {:?}", path);
        }

        Commands::Generate { date, no_index } => {
            let app = daybrief::Daybrief::new(&base_dir)?;
            let date = resolve_date(&app, date.as_deref())?;
            tracing::info!("Generating briefing for {}...", date);

            let path = daybrief::commands::generate::run(&app, date, !no_index)?;
            println!("Generated {:?}", path);
        }

        Commands::Index => {
            let app = daybrief::Daybrief::new(&base_dir)?;
            let path = app.index()?;
            println!("Generated {:?}", path);
        }

        Commands::Clean => {
            let app = daybrief::Daybrief::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let app = daybrief::Daybrief::new(&base_dir)?;
            daybrief::commands::list::run(&app, &r#type)?;
        }

        Commands::Version => {
            println!("daybrief version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Parse an explicit YYYY-MM-DD argument, or resolve today in the
/// configured timezone when none is given.
fn resolve_date(app: &daybrief::Daybrief, arg: Option<&str>) -> Result<chrono::NaiveDate> {
    match arg {
        Some(s) => Ok(daybrief::helpers::parse_date_key(s)?),
        None => Ok(daybrief::helpers::today_in(app.config.timezone())),
    }
}
