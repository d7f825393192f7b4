// SPDX-License-Identifier: PMPL-1.0-or-later

//! llm-edu-dashboard: LLM adoption in higher education, in English and French
//!
//! Renders usage by faculty group, GPA trends, demographics and performance
//! metrics to the console, an interactive terminal UI or a native window, and
//! exports the derived views as JSON or YAML.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use llm_edu_dashboard::config::DashboardConfig;
use llm_edu_dashboard::dataset::DatasetStore;
use llm_edu_dashboard::logging::init_tracing;
use llm_edu_dashboard::report::{
    print_section, snapshot, write_snapshot, DashboardGui, DashboardTui, ExportFormat,
};
use llm_edu_dashboard::session::Session;
use llm_edu_dashboard::types::Section;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "llm-edu-dashboard")]
#[command(version = "0.3.0")]
#[command(about = "Bilingual dashboard of LLM adoption in higher education")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory whose dataset files replace the built-in ones
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one section to the console
    Show {
        /// Section to show (overview, analytics, reports, settings)
        #[arg(short, long, default_value = "overview")]
        section: String,

        /// Faculty group filter
        #[arg(short, long)]
        group: Option<String>,

        /// Latest year included in the GPA series
        #[arg(short, long)]
        year: Option<String>,

        /// Display language (en, fr)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Interactive terminal dashboard
    Tui,

    /// Native window dashboard
    Gui,

    /// Export every section's view for the current selection
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Faculty group filter
        #[arg(short, long)]
        group: Option<String>,

        /// Latest year included in the GPA series
        #[arg(short, long)]
        year: Option<String>,

        /// Display language (en, fr)
        #[arg(short, long)]
        lang: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    // Installed after loading; the config picks the log format.
    init_tracing(config.log_json);
    match cli.config.as_deref() {
        Some(path) if path.exists() => info!(path = %path.display(), "config loaded"),
        _ => debug!("no config file, using defaults"),
    }
    debug!(?config, "configuration resolved");

    let store = DatasetStore::open(config.data_dir.as_deref())?;

    match cli.command {
        Commands::Show {
            section,
            group,
            year,
            lang,
        } => {
            if Section::parse(&section).is_none() {
                bail!(
                    "unknown section '{}' (expected overview, analytics, reports or settings)",
                    section
                );
            }
            let mut session = Session::new(&config.with_selection(group, year, lang));
            session.set_active_section(&section);
            print_section(&store, session.state());
        }

        Commands::Tui => DashboardTui::run(&store, &config)?,

        Commands::Gui => DashboardGui::run(store, &config)?,

        Commands::Export {
            format,
            output,
            group,
            year,
            lang,
        } => {
            let session = Session::new(&config.with_selection(group, year, lang));
            let snap = snapshot(&store, session.state());
            write_snapshot(&snap, format, output.as_deref())?;
            if let Some(path) = output {
                println!("Snapshot saved to: {}", path.display());
            }
        }
    }

    Ok(())
}
