mod config;
mod logging;
mod signals;
mod store;

pub use config::load_config;
pub use logging::init_logging;
pub use signals::wait_for_shutdown_signal;
pub use store::load_store;
