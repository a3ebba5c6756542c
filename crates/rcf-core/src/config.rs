use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

/// A typed option value: a single string or a list of strings. Absence of a
/// key models the empty case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Str(String),
    List(Vec<String>),
}

/// Immutable flag/value sets built once at startup from CLI arguments merged
/// with an optional project config file. Every generator receives this by
/// reference; nothing mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    flags: IndexMap<String, bool>,
    values: IndexMap<String, ConfigValue>,
}

impl GeneratorConfig {
    /// Merge a project config file (lower precedence) with CLI-resolved
    /// flags and values (higher precedence).
    pub fn from_layers(
        file: Option<ProjectConfig>,
        cli_flags: IndexMap<String, bool>,
        cli_values: IndexMap<String, ConfigValue>,
    ) -> Self {
        let mut flags = IndexMap::new();
        let mut values = IndexMap::new();

        if let Some(file) = file {
            flags.extend(file.flags);
            values.extend(file.values);
        }

        // CLI booleans only override when set; a flag left at its default
        // must not mask a `true` from the project file.
        for (name, on) in cli_flags {
            if on {
                flags.insert(name, true);
            }
        }
        values.extend(cli_values);

        Self { flags, values }
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Look up a string value, falling back to the declared default.
    pub fn get_value(&self, name: &str, default: &str) -> String {
        match self.values.get(name) {
            Some(ConfigValue::Str(s)) => s.clone(),
            Some(ConfigValue::List(items)) => items.join(","),
            None => default.to_string(),
        }
    }

    /// Look up a string value without a default.
    pub fn get_opt(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            Some(ConfigValue::Str(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// Look up a list value; a plain string is treated as a one-item list.
    pub fn get_list(&self, name: &str) -> Vec<String> {
        match self.values.get(name) {
            Some(ConfigValue::List(items)) => items.clone(),
            Some(ConfigValue::Str(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    pub fn set_flag(&mut self, name: &str, on: bool) {
        self.flags.insert(name.to_string(), on);
    }

    pub fn set_value(&mut self, name: &str, value: ConfigValue) {
        self.values.insert(name.to_string(), value);
    }
}

/// Project configuration loaded from `.rcf.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub flags: IndexMap<String, bool>,
    pub values: IndexMap<String, ConfigValue>,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".rcf.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let config: ProjectConfig =
        serde_yaml_ng::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# rcf configuration
flags:
  functional: true
  # typescript: true
  # cssmodules: true
  # namedexports: true

values:
  output: src/components
  # templates: ./rcf-templates     # project template overrides
  # graphqldefs: ./src/models/graphql
  # scssinclude:
  #   - src/styles/variables.scss
"#
}
