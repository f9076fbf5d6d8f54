//! `create-folder` and `create-dashboard` commands.

use clap::Args;

use dashhub_core::error::AppError;
use dashhub_core::types::ItemId;
use dashhub_service::{Command, CommandOutcome};

use super::CliContext;

/// Arguments for `create-folder`
#[derive(Debug, Args)]
pub struct CreateFolderArgs {
    /// Name of the new folder
    pub name: String,

    /// Containing folder; the root when omitted
    #[arg(long)]
    pub parent: Option<String>,
}

/// Arguments for `create-dashboard`
#[derive(Debug, Args)]
pub struct CreateDashboardArgs {
    /// Name of the new dashboard
    pub name: String,

    /// Optional description
    #[arg(long)]
    pub description: Option<String>,

    /// Containing folder; the root when omitted
    #[arg(long)]
    pub parent: Option<String>,
}

fn parent_id(parent: &Option<String>) -> ItemId {
    parent.as_deref().map(ItemId::from).unwrap_or_else(ItemId::root)
}

/// Execute the create-folder command
pub async fn execute_folder(args: &CreateFolderArgs, ctx: &CliContext) -> Result<(), AppError> {
    let coordinator = ctx.coordinator();
    let outcome = coordinator
        .dispatch(Command::CreateFolder {
            name: args.name.clone(),
            parent_id: parent_id(&args.parent),
        })
        .await?;

    if let CommandOutcome::Created(id) = outcome {
        println!("Created folder {id}");
    }
    Ok(())
}

/// Execute the create-dashboard command
pub async fn execute_dashboard(
    args: &CreateDashboardArgs,
    ctx: &CliContext,
) -> Result<(), AppError> {
    let coordinator = ctx.coordinator();
    let outcome = coordinator
        .dispatch(Command::CreateDashboard {
            name: args.name.clone(),
            description: args.description.clone(),
            parent_id: parent_id(&args.parent),
        })
        .await?;

    if let CommandOutcome::Created(id) = outcome {
        println!("Created dashboard {id}");
    }
    Ok(())
}
