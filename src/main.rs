use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use visitnote::{import, render};
use visitnote_core::classify::{self, severity_rank};
use visitnote_core::{date_format, Config, SummaryView};

#[derive(Parser)]
#[command(name = "visitnote")]
#[command(about = "Review doctor visit summaries, action items and follow-ups")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an ISO-8601 timestamp for display
    FormatDate {
        iso: String,

        /// Use full month names
        #[arg(short, long)]
        long: bool,
    },
    /// Show how a category or severity label is classified
    Classify { label: String },
    /// List appointments from a JSON export
    List { file: PathBuf },
    /// Show one appointment's summary
    Show {
        file: PathBuf,
        id: Uuid,

        /// Expand every section instead of showing Read More
        #[arg(short, long)]
        expand: bool,

        /// Group action items by category
        #[arg(short, long)]
        group_actions: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "visitnote=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::FormatDate { iso, long } => {
            if long {
                println!("{}", date_format::format_long(&iso));
            } else {
                println!("{}", date_format::format_short(&iso));
            }
        }
        Commands::Classify { label } => {
            let tag = classify::classify(&label);
            println!("tag:           {}", tag.as_str());
            println!("weight:        {}", tag.sort_weight());
            println!("icon:          {}", tag.icon());
            println!("color:         {}", tag.color());
            println!("severity rank: {}", severity_rank(Some(&label)));
        }
        Commands::List { file } => {
            let store = import::read_appointments(&file)?;
            if store.is_empty() {
                println!("No appointments.");
            }
            for appointment in store.list() {
                println!("{}", render::appointment_line(appointment));
            }
        }
        Commands::Show {
            file,
            id,
            expand,
            group_actions,
        } => {
            let config = match &cli.config {
                Some(path) => Config::load_from_path(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?,
                None => Config::load().context("Failed to load config")?,
            };

            let store = import::read_appointments(&file)?;
            let appointment = store
                .get(id)
                .with_context(|| format!("No appointment with id {id} in {}", file.display()))?;

            let summary = appointment.details.clone().unwrap_or_default();
            let mut view = SummaryView::build(&summary, &config.sections, group_actions)?;
            if expand {
                view.expand_all();
            }

            tracing::debug!(%id, expand, group_actions, "rendering appointment");
            println!("{}", render::appointment_detail(appointment, &view));
        }
    }

    Ok(())
}
