pub mod dns;
pub mod store;
