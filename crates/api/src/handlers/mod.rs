pub mod health;
pub mod records;
pub mod store;

pub use health::health_check;
