use std::fmt::Write as _;

use crate::application::{BranchAvailability, ItemState};
use crate::domain::{CatalogId, WatchItem};
use crate::port::CatalogMatch;

use super::TelegramControl;

impl TelegramControl {
    pub(super) async fn search_text(&self, query: &str) -> String {
        if let Some(id) = CatalogId::parse_isbn13(query) {
            return self.isbn_text(&id, None).await;
        }

        let hits = match self.lookup.search(query, self.search_limit).await {
            Ok(hits) => hits,
            Err(e) => return format!("❌ Search failed: {e}"),
        };

        match hits.as_slice() {
            [] => format!("❌ No results for '{query}'."),
            [only] => self.isbn_text(&only.id, Some(only)).await,
            many => candidates_text(query, many),
        }
    }

    pub(super) async fn isbn_text(&self, id: &CatalogId, hit: Option<&CatalogMatch>) -> String {
        let results = self.lookup.check_everywhere(id).await;

        let mut text = match hit {
            Some(hit) if hit.authors.is_empty() => format!("📖 {}\n🔖 ISBN {id}\n\n", hit.title),
            Some(hit) => format!("📖 {}\n✍️ {}\n🔖 ISBN {id}\n\n", hit.title, hit.authors),
            None => format!("🔖 ISBN {id}\n\n"),
        };
        text.push_str(&branch_lines(&results));
        text
    }

    pub(super) async fn status_text(&self) -> String {
        let items = match self.watch_list.list_items().await {
            Ok(items) => items,
            Err(e) => return format!("❌ Could not read the watch list: {e}"),
        };
        if items.is_empty() {
            return "📭 No books are being watched.".to_string();
        }

        let mut text = String::from("📊 Watched books\n\n");
        for (item, state) in self.lookup.item_states(&items).await {
            let _ = write!(text, "{} {} @ {}", state.symbol(), item.title, self.branch_label(&item));
            if let ItemState::Unknown(reason) = &state {
                let _ = write!(text, " ({reason})");
            }
            text.push('\n');
        }
        text.push_str("\n✅ available  ❌ on loan  📭 not held  ❓ unknown");
        text
    }

    pub(super) async fn list_text(&self) -> String {
        let items = match self.watch_list.list_items().await {
            Ok(items) => items,
            Err(e) => return format!("❌ Could not read the watch list: {e}"),
        };
        if items.is_empty() {
            return "📭 No books are being watched.".to_string();
        }

        let mut text = format!("📋 Watch list ({})\n\n", items.len());
        for (index, item) in items.iter().enumerate() {
            let _ = writeln!(text, "{}. {} @ {}", index + 1, item.title, self.branch_label(item));
        }
        text.trim_end().to_string()
    }

    fn branch_label(&self, item: &WatchItem) -> String {
        item.branch_name
            .clone()
            .or_else(|| {
                self.lookup
                    .directory()
                    .name_of(&item.branch_code)
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| item.branch_code.to_string())
    }
}

fn candidates_text(query: &str, hits: &[CatalogMatch]) -> String {
    let mut text = format!("🔍 Results for '{query}'\n\n");
    for (index, hit) in hits.iter().enumerate() {
        let _ = write!(text, "{}. {}", index + 1, hit.title);
        if !hit.authors.is_empty() {
            let _ = write!(text, " / {}", hit.authors);
        }
        let _ = writeln!(text, "\n   /isbn{}", hit.id);
    }
    text.push_str("\nTap an /isbn link to check every branch.");
    text
}

fn branch_lines(results: &[BranchAvailability]) -> String {
    let mut available = Vec::new();
    let mut on_loan = Vec::new();
    let mut failed = Vec::new();
    let mut not_held = 0usize;

    for entry in results {
        match &entry.result {
            Ok(availability) => match ItemState::from(*availability) {
                ItemState::Available => available.push(entry.branch.name.as_str()),
                ItemState::OnLoan => on_loan.push(entry.branch.name.as_str()),
                _ => not_held += 1,
            },
            Err(e) => failed.push(format!("{}: {e}", entry.branch.name)),
        }
    }

    let mut text = String::new();
    for name in &available {
        let _ = writeln!(text, "✅ {name}: available");
    }
    for name in &on_loan {
        let _ = writeln!(text, "❌ {name}: on loan");
    }
    for line in &failed {
        let _ = writeln!(text, "❓ {line}");
    }
    if available.is_empty() && on_loan.is_empty() && failed.is_empty() {
        text.push_str("📭 Not held at any branch.");
    } else if not_held > 0 {
        let _ = write!(text, "📭 Not held at {not_held} other branches.");
    }
    text.trim_end().to_string()
}
