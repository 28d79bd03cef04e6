//! Shared helper routines for operator implementations.

use crate::domain::{BranchDirectory, WatchItem};
use crate::port::inbound::operator::watchlist::WatchEntry;

/// Branch name from the entry, else the directory, else the code.
pub(super) fn branch_label(item: &WatchItem, directory: &BranchDirectory) -> String {
    item.branch_name
        .clone()
        .or_else(|| directory.name_of(&item.branch_code).map(str::to_string))
        .unwrap_or_else(|| item.branch_code.to_string())
}

pub(super) fn watch_entry(item: &WatchItem, directory: &BranchDirectory) -> WatchEntry {
    WatchEntry {
        title: item.title.clone(),
        branch_code: item.branch_code.to_string(),
        branch: branch_label(item, directory),
        catalog_id: item.catalog_id.as_ref().map(ToString::to_string),
    }
}

/// Keep the bot id and the last four characters of the secret.
#[cfg_attr(not(feature = "telegram"), allow(dead_code))]
pub(super) fn mask_token(token: &str) -> String {
    let masked = token
        .split_once(':')
        .filter(|(_, secret)| secret.len() > 4)
        .and_then(|(bot_id, secret)| Some((bot_id, secret.get(secret.len() - 4..)?)));
    match masked {
        Some((bot_id, last)) => format!("{bot_id}:...{last}"),
        None => "****".to_string(),
    }
}

pub(super) fn env_present(name: &str) -> bool {
    std::env::var(name).is_ok_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Branch, BranchCode};
    use crate::testkit::domain::item;

    #[test]
    fn token_is_masked() {
        assert_eq!(mask_token("123456:ABCDEFGHwxyz"), "123456:...wxyz");
        assert_eq!(mask_token("short"), "****");
        assert_eq!(mask_token("1:abc"), "****");
    }

    #[test]
    fn label_prefers_entry_then_directory_then_code() {
        let directory = BranchDirectory::new(
            vec![Branch::new("141001", "Central Library")],
            BranchCode::new("141001"),
        );

        let named = item("Cosmos", "141001").with_branch_name("Main");
        assert_eq!(branch_label(&named, &directory), "Main");
        assert_eq!(branch_label(&item("Cosmos", "141001"), &directory), "Central Library");
        assert_eq!(branch_label(&item("Cosmos", "999999"), &directory), "999999");
    }
}
