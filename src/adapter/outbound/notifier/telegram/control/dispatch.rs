use std::sync::Arc;

use crate::application::LookupService;
use crate::port::WatchListEditor;

use super::super::command::{command_help, TelegramCommand};
use super::{TelegramControl, DEFAULT_SEARCH_LIMIT};

impl TelegramControl {
    #[must_use]
    pub fn new(lookup: LookupService, watch_list: Arc<dyn WatchListEditor>) -> Self {
        Self {
            lookup,
            watch_list,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    #[must_use]
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit.max(1);
        self
    }

    /// Execute one parsed command and return response text.
    pub async fn execute(&self, command: TelegramCommand) -> String {
        match command {
            TelegramCommand::Help => command_help().to_string(),
            TelegramCommand::Search(query) => self.search_text(&query).await,
            TelegramCommand::CheckIsbn(id) => self.isbn_text(&id, None).await,
            TelegramCommand::Status => self.status_text().await,
            TelegramCommand::List => self.list_text().await,
            TelegramCommand::Add(title) => self.add_text(&title).await,
            TelegramCommand::Delete(title) => self.delete_text(&title).await,
        }
    }
}
