//! Message formatting for Telegram notifications.

use url::form_urlencoded::byte_serialize;

use crate::domain::NotificationEvent;
use crate::infrastructure::config::catalog::TITLE_PLACEHOLDER;

/// Build the reserve/check link for `title` from `template`.
#[must_use]
pub fn reserve_url(template: &str, title: &str) -> String {
    let encoded: String = byte_serialize(title.as_bytes()).collect();
    template.replace(TITLE_PLACEHOLDER, &encoded)
}

/// Format an availability event as a MarkdownV2 message.
#[must_use]
pub fn format_event_message(event: &NotificationEvent, reserve_url_template: &str) -> String {
    let title = truncate(&event.item.title, 80);
    let link = reserve_url(reserve_url_template, &event.item.title);

    format!(
        "📚 *Available Now\\!*\n\
        \n\
        📖 *{}*\n\
        📍 {}\n\
        \n\
        [Reserve / check details]({})",
        escape_markdown(&title),
        escape_markdown(event.item.display_branch()),
        escape_link(&link)
    )
}

/// Truncate to `max` characters, appending an ellipsis when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Escape special characters for Telegram MarkdownV2.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Inside a MarkdownV2 link target only `)` and `\` need escaping.
fn escape_link(url: &str) -> String {
    url.replace('\\', "\\\\").replace(')', "\\)")
}
