//! Bookwatch - library book availability monitoring.
//!
//! Watches a list of titles at public library branches and notifies a chat
//! when a watched title becomes loanable. Each run checks every item once,
//! compares the result with the stored status and sends one notification per
//! not-available → available transition.
//!
//! # Architecture
//!
//! - [`domain`] - Watch items, availability records, the transition rule
//! - [`port`] - Traits for the catalog, watch list, status store and notifiers
//! - [`application`] - Monitoring engine, title resolution, run orchestration
//! - [`adapter`] - Catalog API client, JSON/TOML files, Telegram, CLI
//! - [`infrastructure`] - Configuration loading and component wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram notifier and command bot
//! - `testkit` - Shared test doubles for integration tests
//!
//! # Example
//!
//! ```no_run
//! use bookwatch::infrastructure::config::Config;
//! use bookwatch::infrastructure::factory::build_monitor_run;
//!
//! # async fn example() -> bookwatch::error::Result<()> {
//! let config = Config::load("bookwatch.toml")?;
//! let summary = build_monitor_run(&config, true)?.execute().await?;
//! println!("{}", summary.render_text());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
