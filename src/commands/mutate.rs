//! Structural mutation commands: move, delete, and favorite.

use clap::Args;
use dialoguer::Input;

use dashhub_core::error::AppError;
use dashhub_core::types::ItemId;
use dashhub_service::{Command, CommandOutcome, DELETE_CONFIRMATION};

use super::CliContext;

/// Arguments for `move-folder`
#[derive(Debug, Args)]
pub struct MoveFolderArgs {
    /// The folder to move
    pub folder: String,

    /// The destination folder
    #[arg(long, conflicts_with = "list_targets")]
    pub to: Option<String>,

    /// List eligible destination folders instead of moving
    #[arg(long)]
    pub list_targets: bool,

    /// Narrow the listed destinations by name
    #[arg(long, requires = "list_targets")]
    pub search: Option<String>,
}

/// Arguments for `delete-folder`
#[derive(Debug, Args)]
pub struct DeleteFolderArgs {
    /// The folder to delete, together with its whole subtree
    pub folder: String,

    /// Skip the typed confirmation prompt
    #[arg(long)]
    pub yes: bool,

    /// Supply the confirmation literal non-interactively
    #[arg(long, conflicts_with = "yes")]
    pub confirm: Option<String>,
}

/// Arguments for `delete-dashboard`
#[derive(Debug, Args)]
pub struct DeleteDashboardArgs {
    /// The dashboard to delete
    pub dashboard: String,
}

/// Arguments for `favorite`
#[derive(Debug, Args)]
pub struct FavoriteArgs {
    /// The dashboard whose star to toggle
    pub dashboard: String,
}

/// Execute the move-folder command
pub async fn execute_move(args: &MoveFolderArgs, ctx: &CliContext) -> Result<(), AppError> {
    let folder_id = ItemId::from(args.folder.as_str());
    let coordinator = ctx.coordinator();

    if args.list_targets {
        let search = args.search.as_deref().unwrap_or("");
        let candidates = coordinator.move_target_candidates(&folder_id, search).await?;
        println!("root     {} (root)", ItemId::root());
        for folder in &candidates {
            println!("dir      {:<40} {}", folder.name, folder.id);
        }
        return Ok(());
    }

    let Some(to) = &args.to else {
        return Err(AppError::validation(
            "Pass --to <folder> to move, or --list-targets to see destinations",
        ));
    };

    coordinator
        .dispatch(Command::MoveFolder {
            folder_id: folder_id.clone(),
            new_parent_id: ItemId::from(to.as_str()),
        })
        .await?;
    println!("Moved {folder_id} into {to}");
    Ok(())
}

/// Execute the delete-folder command
pub async fn execute_delete_folder(
    args: &DeleteFolderArgs,
    ctx: &CliContext,
) -> Result<(), AppError> {
    let folder_id = ItemId::from(args.folder.as_str());
    let coordinator = ctx.coordinator();

    let mut gate = coordinator.delete_confirmation(&folder_id).await?;
    println!("This will permanently remove {}.", gate.counts);

    let confirmation = if args.yes {
        DELETE_CONFIRMATION.to_string()
    } else if let Some(confirm) = &args.confirm {
        confirm.clone()
    } else {
        let input: String = Input::new()
            .with_prompt(format!("Type \"{DELETE_CONFIRMATION}\" to confirm"))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Confirmation prompt failed: {e}")))?;
        gate.set_input(input.clone());
        if !gate.is_confirmed() {
            println!("Aborted.");
            return Ok(());
        }
        input
    };

    coordinator
        .dispatch(Command::DeleteFolder {
            folder_id: folder_id.clone(),
            confirmation,
        })
        .await?;
    println!("Deleted folder {folder_id}");
    Ok(())
}

/// Execute the delete-dashboard command
pub async fn execute_delete_dashboard(
    args: &DeleteDashboardArgs,
    ctx: &CliContext,
) -> Result<(), AppError> {
    let id = ItemId::from(args.dashboard.as_str());
    ctx.coordinator().dispatch(Command::DeleteDashboard(id.clone())).await?;
    println!("Deleted dashboard {id}");
    Ok(())
}

/// Execute the favorite command
pub async fn execute_favorite(args: &FavoriteArgs, ctx: &CliContext) -> Result<(), AppError> {
    let id = ItemId::from(args.dashboard.as_str());
    let outcome = ctx.coordinator().dispatch(Command::ToggleFavorite(id.clone())).await?;
    if let CommandOutcome::Favorite(starred) = outcome {
        println!("{} is now {}", id, if starred { "starred" } else { "unstarred" });
    }
    Ok(())
}
