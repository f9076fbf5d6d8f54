//! CLI command definitions and dispatch.

pub mod browse;
pub mod create;
pub mod list;
pub mod mutate;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dashhub_client::{ContentRepository, HttpContentRepository};
use dashhub_core::config::AppConfig;
use dashhub_core::error::AppError;
use dashhub_core::types::{ItemId, SortKey};
use dashhub_entity::FilterState;
use dashhub_service::HierarchyCoordinator;

use crate::output::{LoggedLocation, OutputFormat, TerminalSink};

/// DashHub: dashboard/folder hierarchy console
#[derive(Debug, Parser)]
#[command(name = "dashhub", version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL; overrides the configuration file
    #[arg(long)]
    pub api_url: Option<String>,

    /// Configuration environment (config/<env>.toml)
    #[arg(long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a folder and render its listing
    Browse(browse::BrowseArgs),
    /// Flat filtered listing of a subtree
    List(list::ListArgs),
    /// Create a folder
    CreateFolder(create::CreateFolderArgs),
    /// Create a dashboard
    CreateDashboard(create::CreateDashboardArgs),
    /// Move a folder to a new parent
    MoveFolder(mutate::MoveFolderArgs),
    /// Delete a folder and its whole subtree
    DeleteFolder(mutate::DeleteFolderArgs),
    /// Delete a dashboard
    DeleteDashboard(mutate::DeleteDashboardArgs),
    /// Toggle a dashboard's star
    Favorite(mutate::FavoriteArgs),
}

/// Shared wiring handed to every command.
pub struct CliContext {
    /// The content repository over the live backend.
    pub repo: Arc<dyn ContentRepository>,
    /// Selected output format.
    pub format: OutputFormat,
    /// Configured search debounce. Inert for one-shot commands, which
    /// never stream keystrokes.
    pub debounce: Duration,
}

impl CliContext {
    /// A coordinator rendering to the terminal.
    pub fn coordinator(&self) -> HierarchyCoordinator {
        HierarchyCoordinator::new(
            self.repo.clone(),
            TerminalSink::new(self.format),
            LoggedLocation::new(),
            self.debounce,
        )
    }

    /// A coordinator opened at a specific folder with filters pre-applied,
    /// as a deep link would seed it.
    pub fn coordinator_at(&self, folder_id: ItemId, filters: FilterState) -> HierarchyCoordinator {
        HierarchyCoordinator::with_state(
            self.repo.clone(),
            TerminalSink::new(self.format),
            LoggedLocation::new(),
            self.debounce,
            folder_id,
            filters,
        )
    }
}

/// Parse a sort order given either as its wire form (`alpha-asc`) or its
/// menu label (`Alphabetically (A-Z)`).
pub(crate) fn parse_sort(value: &str) -> Result<SortKey, AppError> {
    value
        .parse()
        .ok()
        .or_else(|| SortKey::from_label(value))
        .ok_or_else(|| AppError::validation(format!("Unknown sort order '{value}'")))
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let mut config = AppConfig::load(&self.env)?;
        if let Some(api_url) = &self.api_url {
            config.api.base_url = api_url.clone();
        }

        // RUST_LOG wins over the configured level.
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
        if config.logging.format == "json" {
            tracing_subscriber::fmt().with_env_filter(filter).json().init();
        } else {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }

        let ctx = CliContext {
            repo: Arc::new(HttpContentRepository::new(&config.api)),
            format: self.format,
            debounce: Duration::from_millis(config.search.debounce_ms),
        };

        match &self.command {
            Commands::Browse(args) => browse::execute(args, &ctx).await,
            Commands::List(args) => list::execute(args, &ctx).await,
            Commands::CreateFolder(args) => create::execute_folder(args, &ctx).await,
            Commands::CreateDashboard(args) => create::execute_dashboard(args, &ctx).await,
            Commands::MoveFolder(args) => mutate::execute_move(args, &ctx).await,
            Commands::DeleteFolder(args) => mutate::execute_delete_folder(args, &ctx).await,
            Commands::DeleteDashboard(args) => mutate::execute_delete_dashboard(args, &ctx).await,
            Commands::Favorite(args) => mutate::execute_favorite(args, &ctx).await,
        }
    }
}
