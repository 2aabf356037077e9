use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding the `store` and `store_bk` files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_true")]
    pub load_on_startup: bool,

    #[serde(default = "default_true")]
    pub save_on_shutdown: bool,

    /// Seconds between background snapshots; 0 disables the job.
    #[serde(default = "default_autosave_interval")]
    pub autosave_interval_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            load_on_startup: true,
            save_on_shutdown: true,
            autosave_interval_secs: default_autosave_interval(),
        }
    }
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}

fn default_autosave_interval() -> u64 {
    300
}
