//! Version Executor
//!
//! Runs the planned versions of one problem and turns the outcomes into output.
//!
//! ## Pipeline Overview
//!
//! ```text
//! VersionPlan (built by the planner)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  dispatch   │  Invoke versions in order, collect answers or timings
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Compute summary stats (perf only)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Build Report / Listing with metadata
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`dispatch`] - Sequential version invocation and timing
//! - [`statistics`] - Parallel statistics computation
//! - [`report`] - Report and listing building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod dispatch;
mod formatting;
mod metadata;
mod report;
mod statistics;

// Re-export public API
pub use dispatch::{BenchOutcome, DispatchError, Dispatcher, RunOutcome};
pub use formatting::{INCOMPLETE_WARNING, LISTING_HEADER, format_human_output, format_listing};
pub use metadata::{SCHEMA_VERSION, build_report_meta};
pub use report::{
    ReportContext, build_listing, build_perf_report, build_run_report, version_display_name,
};
pub use statistics::compute_statistics;
