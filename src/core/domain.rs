use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects. The store
// assigns the id on first save, so an unsaved object has none.
pub trait Identifiable: Sync + Send {
    fn id(&self) -> Option<i64>;
    fn assign_id(&mut self, id: i64);
}

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub bind_address: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: true,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let branch_id = lookup("LIBRARY_BRANCH").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch_id.as_str());
        if let Some(addr) = lookup("LIBRARY_BIND_ADDRESS").filter(|a| !a.trim().is_empty()) {
            config.bind_address = addr;
        }
        if let Some(level) = lookup("LIBRARY_LOG_LEVEL").filter(|l| !l.trim().is_empty()) {
            config.log_level = level;
        }
        if let Some(json) = lookup("LIBRARY_JSON_LOGS").and_then(|j| j.parse::<bool>().ok()) {
            config.json_logs = json;
        }
        config
    }
}
