//! Run summary types and helpers.

mod result;
mod run_summary;

pub use result::{FailureStage, RepositoryFailure};
pub use run_summary::RunSummary;
