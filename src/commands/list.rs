//! `list` command: flat filtered listing of a subtree.

use clap::Args;

use dashhub_core::error::AppError;
use dashhub_core::types::ItemId;
use dashhub_entity::{FilterState, ItemKind};

use crate::output::print_items;

use super::CliContext;

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Root of the listed subtree; the root folder when omitted
    #[arg(long)]
    pub folder: Option<String>,

    /// Search query
    #[arg(long)]
    pub query: Option<String>,

    /// Sort order: alpha-asc, alpha-desc, created-desc, created-asc
    #[arg(long)]
    pub sort: Option<String>,

    /// Show starred dashboards only
    #[arg(long)]
    pub starred: bool,

    /// Restrict to one item kind: folder or dashboard
    #[arg(long)]
    pub kind: Option<String>,
}

/// Execute the list command
pub async fn execute(args: &ListArgs, ctx: &CliContext) -> Result<(), AppError> {
    let sort = args.sort.as_deref().map(super::parse_sort).transpose()?;
    let kind = match args.kind.as_deref() {
        None => None,
        Some("folder") => Some(ItemKind::Folder),
        Some("dashboard") => Some(ItemKind::Dashboard),
        Some(other) => {
            return Err(AppError::validation(format!(
                "Unknown item kind '{other}', expected folder or dashboard"
            )));
        }
    };

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

    let listing = ctx.repo.get_filtered_list(&folder_id, &filters, kind).await?;
    print_items(&listing.items, ctx.format);
    match sort {
        Some(sort) => println!(
            "{} of {} shown, sorted {}",
            listing.items.len(),
            listing.total_count,
            sort.label()
        ),
        None => println!("{} of {} shown", listing.items.len(), listing.total_count),
    }
    Ok(())
}
