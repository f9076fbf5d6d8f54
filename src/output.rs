//! Terminal rendering: the view sink, the location port, and list output.

use std::sync::Arc;

use clap::ValueEnum;
use tracing::debug;

use dashhub_core::error::AppError;
use dashhub_entity::{ContentItem, ItemKind};
use dashhub_service::{BreadcrumbResolver, ContentView, LocationSync, ViewSink};

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    Table,
    /// JSON, one document per response.
    Json,
}

/// A view sink that prints listings to stdout.
pub struct TerminalSink {
    format: OutputFormat,
}

impl TerminalSink {
    /// Create a sink with the given output format.
    pub fn new(format: OutputFormat) -> Arc<Self> {
        Arc::new(Self { format })
    }
}

impl ViewSink for TerminalSink {
    fn render(&self, view: &ContentView) {
        match view {
            ContentView::Tree(contents) => {
                let path = BreadcrumbResolver::display_path(&contents.breadcrumbs);
                if !path.is_empty() {
                    let names: Vec<&str> =
                        path.iter().map(|crumb| crumb.name.as_str()).collect();
                    println!("{} /", names.join(" / "));
                }
                println!("# {}", contents.folder.name);
                print_items(&contents.items, self.format);
            }
            ContentView::Flat(items) => {
                print_items(items, self.format);
            }
            ContentView::NotFound { folder_id } => {
                println!("Folder not found: {folder_id}");
            }
        }
    }

    fn notify_error(&self, error: &AppError) {
        eprintln!("Warning: {error}");
    }
}

/// A location port that only records the canonical URL form.
///
/// The terminal has no address bar; the pushed query string is still useful
/// as a shareable deep link, so it is logged.
pub struct LoggedLocation;

impl LoggedLocation {
    /// Create the logging location port.
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }
}

impl LocationSync for LoggedLocation {
    fn replace_query(&self, pairs: &[(String, String)]) {
        let query: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        debug!(query = query.join("&"), "Location updated");
    }
}

/// Print a listing in the selected format.
pub fn print_items(items: &[ContentItem], format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(items) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: failed to encode listing: {e}"),
        },
        OutputFormat::Table => {
            if items.is_empty() {
                println!("(empty)");
                return;
            }
            for item in items {
                let marker = match item.kind() {
                    ItemKind::Folder => "dir ",
                    ItemKind::Dashboard => "dash",
                };
                let star = if item.is_favorite() { "*" } else { " " };
                let default = if item.is_default() { " [default]" } else { "" };
                println!("{marker} {star} {:<40} {}{default}", item.name(), item.id());
            }
        }
    }
}
