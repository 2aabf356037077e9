pub mod runner;
pub mod snapshot;

pub use runner::JobRunner;
pub use snapshot::SnapshotJob;
