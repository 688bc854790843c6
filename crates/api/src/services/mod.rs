//! Orchestration services over the repositories.

pub mod catalog;
pub mod recorder;
pub mod reporter;

pub use catalog::CatalogService;
pub use recorder::ChangeRecorder;
pub use reporter::HistoryReporter;
