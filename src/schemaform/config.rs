use crate::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "schemaform.json";

/// Configuration for document rendering, stored in `schemaform.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    /// Template sources replacing built-ins, keyed by template name (e.g. "tab_form")
    #[serde(default)]
    pub templates: BTreeMap<String, String>,

    /// Pretty-print assembled documents
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            templates: BTreeMap::new(),
            pretty: default_pretty(),
        }
    }
}

impl FormConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FormError::Io)?;
        let config: FormConfig =
            serde_json::from_str(&content).map_err(FormError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FormError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FormError::Serialization)?;
        fs::write(config_path, content).map_err(FormError::Io)?;
        Ok(())
    }

    /// Replace a built-in template. The name is checked when templates are compiled.
    pub fn set_template(&mut self, name: &str, source: &str) {
        self.templates.insert(name.to_string(), source.to_string());
    }

    /// Go back to the built-in source for a template
    pub fn reset_template(&mut self, name: &str) {
        self.templates.remove(name);
    }
}
