use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::model::FieldOrder;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    /// Upper bound on assignments tested; `None` searches the whole space.
    #[serde(default)]
    pub max_iterations: Option<u64>,

    #[serde(default)]
    pub field_order: FieldOrder,
}

fn default_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            max_iterations: None,
            field_order: FieldOrder::default(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to the defaults when the file
    /// is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(target: "settings", "Cannot read {}: {}; using defaults", path.display(), e);
                return Settings::default();
            }
        };
        match Self::from_json(&contents) {
            Ok(settings) => {
                debug!(target: "settings", "Loaded {}: {:?}", path.display(), settings);
                settings
            }
            Err(e) => {
                warn!(target: "settings", "Ignoring malformed {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let mut settings = serde_json::from_str::<Settings>(contents)?;
        settings.migrate();
        Ok(settings)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    fn migrate(&mut self) {
        if self.version == 0 {
            self.version = 1;
        }
    }

    /// The effective search bound: `MAX_ITERATIONS` from the environment wins
    /// over the configured value.
    pub fn iteration_limit(&self) -> Option<u64> {
        Self::max_iterations_from_env().or(self.max_iterations)
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn max_iterations_from_env() -> Option<u64> {
        let value = std::env::var("MAX_ITERATIONS").ok()?;
        match value.parse::<u64>() {
            Ok(limit) => Some(limit),
            Err(e) => {
                warn!(target: "settings", "Ignoring MAX_ITERATIONS={}: {}", value, e);
                None
            }
        }
    }
}
