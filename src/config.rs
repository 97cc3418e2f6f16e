use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Endpoint and identifier configuration for one export run.
///
/// Defaults target the public Drupal infrastructure; a `relnotes.toml` file
/// can override any subset of fields, which is how tests point the pipeline
/// at mock servers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub forge: ForgeConfig,
    pub tracker: TrackerConfig,
    /// Directory the generated document is written to.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Base URL of the forge REST API.
    pub api_base: String,
    /// Numeric project id holding the release branches and tags.
    pub project_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Base URL of the tracker REST API.
    pub api_base: String,
    /// Numeric id the tracker uses to filter issues to the project.
    pub project_filter_id: u64,
    /// Node type of tracked issues.
    pub issue_type: String,
    /// Vocabulary holding the release-note tags.
    pub vocabulary_id: u64,
    /// Base URL for short links to a single issue.
    pub issue_url_base: String,
    /// Issue-search page linked from the report header.
    pub search_base: String,
    /// Human-readable project label used in the search link.
    pub project_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forge: ForgeConfig::default(),
            tracker: TrackerConfig::default(),
            output_dir: PathBuf::from("releasenotes"),
        }
    }
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            api_base: "https://git.drupalcode.org/api/v4".to_string(),
            project_id: 59858,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base: "https://www.drupal.org/api-d7".to_string(),
            project_filter_id: 3060,
            issue_type: "project_issue".to_string(),
            vocabulary_id: 9,
            issue_url_base: "https://drupal.org/i/".to_string(),
            search_base: "https://www.drupal.org/project/issues/search".to_string(),
            project_label: "Drupal core".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a toml file, falling back to defaults when the
    /// file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
