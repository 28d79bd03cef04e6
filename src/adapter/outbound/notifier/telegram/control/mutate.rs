use tracing::{info, warn};

use crate::application::select_candidate;
use crate::domain::WatchItem;
use crate::error::ResolutionError;

use super::TelegramControl;

impl TelegramControl {
    /// Watch `title` at the default branch, caching the ISBN when the search
    /// points at exactly one edition.
    pub(super) async fn add_text(&self, title: &str) -> String {
        let directory = self.lookup.directory();
        let branch = directory.default_code().clone();

        let mut item = match WatchItem::try_new(title, branch.as_str()) {
            Ok(item) => item,
            Err(e) => return format!("❌ Cannot add '{title}': {e}"),
        };
        if let Some(name) = directory.name_of(&branch) {
            item = item.with_branch_name(name);
        }

        let note = match self.lookup.search(title, usize::MAX).await {
            Ok(hits) => match select_candidate(title, &hits) {
                Ok(id) => {
                    let note = format!("\n🔖 ISBN {id}");
                    item = item.with_catalog_id(id);
                    note
                }
                Err(ResolutionError::NotFound { .. }) => {
                    return format!("❌ No results for '{title}'. Nothing added.");
                }
                Err(e @ ResolutionError::Ambiguous { .. }) => {
                    format!("\n⚠️ {e}; it will be matched by title on each check.")
                }
            },
            Err(e) => {
                warn!(title, error = %e, "Search failed while adding; adding by title only");
                "\n⚠️ Search failed; the ISBN will be looked up on the next check.".to_string()
            }
        };

        let label = item.display_branch().to_string();
        let added_title = item.title.clone();
        match self.watch_list.add_item(item).await {
            Ok(()) => {
                info!(title = %added_title, branch = %label, "Watch list entry added via Telegram");
                format!("✅ Watching '{added_title}' @ {label}{note}")
            }
            Err(e) => format!("❌ Could not update the watch list: {e}"),
        }
    }

    pub(super) async fn delete_text(&self, title: &str) -> String {
        match self.watch_list.remove_by_title(title).await {
            Ok(0) => format!("❌ '{}' is not on the watch list.", title.trim()),
            Ok(removed) => {
                info!(title, removed, "Watch list entries removed via Telegram");
                format!("🗑️ Stopped watching '{}' ({removed} removed).", title.trim())
            }
            Err(e) => format!("❌ Could not update the watch list: {e}"),
        }
    }
}
