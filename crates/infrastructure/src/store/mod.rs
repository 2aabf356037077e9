pub mod clock;
pub mod memory;
pub mod persistence;

pub use clock::{Clock, SystemClock};
pub use memory::InMemoryRecordStore;
pub use persistence::{Snapshot, StoreError, StoreFiles, BACKUP_FILE_NAME, PRIMARY_FILE_NAME};
