//! Unified operator capability surface for inbound adapters.

use super::bot::BotOperator;
use super::configuration::ConfigurationOperator;
use super::diagnostic::DiagnosticOperator;
use super::lookup::LookupOperator;
use super::runtime::RuntimeOperator;
use super::watchlist::WatchListOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort:
    BotOperator
    + ConfigurationOperator
    + DiagnosticOperator
    + LookupOperator
    + RuntimeOperator
    + WatchListOperator
{
}

impl<T> OperatorPort for T where
    T: BotOperator
        + ConfigurationOperator
        + DiagnosticOperator
        + LookupOperator
        + RuntimeOperator
        + WatchListOperator
{
}
