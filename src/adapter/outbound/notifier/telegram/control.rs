//! Telegram command execution against the lookup service and watch list.

use std::sync::Arc;

use crate::application::LookupService;
use crate::port::WatchListEditor;

mod dispatch;
mod mutate;
mod render;

/// Command executor for the Telegram bot.
#[derive(Clone)]
pub struct TelegramControl {
    lookup: LookupService,
    watch_list: Arc<dyn WatchListEditor>,
    /// Maximum candidates listed for an ambiguous search.
    search_limit: usize,
}

/// Default candidate limit for search replies.
const DEFAULT_SEARCH_LIMIT: usize = 5;
