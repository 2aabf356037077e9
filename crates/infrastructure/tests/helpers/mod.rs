pub mod builders;
pub mod clock;

pub use builders::{a_record, key, query_message, txt_record};
pub use clock::ManualClock;
