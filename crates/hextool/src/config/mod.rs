use std::{fs::read_to_string, io::ErrorKind, path::Path};

use anyhow::Result;

use hexbin::{consts::DEFAULT_LOG_LEVEL, datatype::HexBinaryFacets, log};

#[derive(serde::Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    pub log_level: Option<String>, // tracing filter, e.g. "debug" or "hexbin=trace", default: info (debug on debug builds)
    #[serde(default)]
    pub facets: HexBinaryFacets, // Facets used by the validate command, default: none
}

impl ToolConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Loads the configuration file at `path`.
/// A missing file is not an error, defaults are used instead.
pub fn load_config(path: &Path) -> Result<ToolConfig> {
    let config_str = match read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No configuration file at {}, using defaults", path.display());
            return Ok(ToolConfig::default());
        }
        Err(e) => {
            return Err(anyhow::format_err!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ));
        }
    };
    let config = ToolConfig::from_toml_str(&config_str).map_err(|e| {
        anyhow::format_err!(
            "Failed to parse configuration file {}: {}",
            path.display(),
            e
        )
    })?;
    config
        .facets
        .check()
        .map_err(|e| anyhow::format_err!("{}: {}", path.display(), e))?;
    Ok(config)
}
