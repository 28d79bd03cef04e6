//! Application layer: the monitoring engine, title resolution, run
//! orchestration and interactive lookups.

pub mod lookup;
pub mod monitor;
pub mod resolve;
pub mod run;
pub mod summary;

pub use lookup::{BranchAvailability, ItemState, LookupService};
pub use monitor::{CheckedItem, CycleOutcome, EngineSettings, MonitorEngine};
pub use resolve::{normalize_title, select_candidate, ResolutionSource, Resolver};
pub use run::MonitorRun;
pub use summary::{NotifyFailure, RunSummary};
