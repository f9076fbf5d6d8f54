//! Breadcrumb resolution over raw ancestor chains.
//!
//! The repository returns chains root-inclusive and ending at the current
//! folder. Display trims both ends: the root sentinel has its own fixed
//! link and the current folder is rendered separately as a page header.

use dashhub_core::types::ItemId;
use dashhub_entity::Breadcrumb;

/// Derives display paths and navigation targets from raw chains.
pub struct BreadcrumbResolver;

impl BreadcrumbResolver {
    /// The display path: the raw chain without the root sentinel and
    /// without the current folder's own entry.
    pub fn display_path(chain: &[Breadcrumb]) -> Vec<Breadcrumb> {
        let ancestors = match chain.split_last() {
            Some((_current, ancestors)) => ancestors,
            None => &[],
        };
        ancestors
            .iter()
            .filter(|crumb| !crumb.id.is_root())
            .cloned()
            .collect()
    }

    /// The immediate parent of the current folder, used to navigate "up"
    /// after a delete. Second-to-last entry of the raw chain, defaulting to
    /// root when the chain has fewer than two entries.
    pub fn parent_of(chain: &[Breadcrumb]) -> ItemId {
        if chain.len() < 2 {
            return ItemId::root();
        }
        chain[chain.len() - 2].id.clone()
    }
}
