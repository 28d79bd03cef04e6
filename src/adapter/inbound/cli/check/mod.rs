//! Diagnostic check handlers.

pub mod config;
pub mod telegram;
