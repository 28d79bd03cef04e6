//! Infrastructure configuration modules.

pub mod catalog;
pub mod logging;
pub mod settings;
pub mod storage;
pub mod telegram;

pub use settings::Config;
