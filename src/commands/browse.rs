//! `browse` command: open a folder and render its listing.

use clap::Args;

use dashhub_core::error::AppError;
use dashhub_core::types::ItemId;
use dashhub_entity::FilterState;

use super::CliContext;

/// Arguments for `browse`
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Folder to open; the root when omitted
    #[arg(long)]
    pub folder: Option<String>,

    /// Search query; switches the listing to the flat view
    #[arg(long)]
    pub query: Option<String>,

    /// Sort order: alpha-asc, alpha-desc, created-desc, created-asc
    #[arg(long)]
    pub sort: Option<String>,

    /// Show starred dashboards only
    #[arg(long)]
    pub starred: bool,
}

/// Execute the browse command
pub async fn execute(args: &BrowseArgs, ctx: &CliContext) -> Result<(), AppError> {
    let sort = args.sort.as_deref().map(super::parse_sort).transpose()?;

    let folder_id = args
        .folder
        .as_deref()
        .map(ItemId::from)
        .unwrap_or_else(ItemId::root);
    let filters = FilterState {
        query: args.query.clone().unwrap_or_default(),
        sort,
        starred: args.starred,
    };

    let coordinator = ctx.coordinator_at(folder_id, filters);
    coordinator.load().await;
    Ok(())
}
