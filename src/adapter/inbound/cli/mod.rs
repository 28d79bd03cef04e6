//! CLI module graph.

pub mod bot;
pub mod check;
pub mod command;
pub mod logging;
pub mod operator;
pub mod output;
pub mod paths;
pub mod run;
pub mod search;
pub mod status;
pub mod watchlist;
