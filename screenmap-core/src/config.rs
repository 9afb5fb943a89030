use crate::{Result, ScreenmapError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Project root that holds the views and components directories
    pub root: PathBuf,
    /// Views directory name, relative to the root
    pub views_dir: String,
    /// Shared components directory name, relative to the root
    pub components_dir: String,
    /// Style-attribute literals kept per file
    pub max_style_samples: usize,
    /// Files listed per component group before "+N more"
    pub max_group_files: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            views_dir: "app".to_string(),
            components_dir: "components".to_string(),
            max_style_samples: 6,
            max_group_files: 8,
        }
    }
}

impl ReportConfig {
    /// Create a new ReportConfig with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: ReportConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the project root
    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = root.into();
        self
    }

    /// Set the views directory name
    pub fn with_views_dir<S: Into<String>>(mut self, dir: S) -> Self {
        self.views_dir = dir.into();
        self
    }

    /// Set the shared components directory name
    pub fn with_components_dir<S: Into<String>>(mut self, dir: S) -> Self {
        self.components_dir = dir.into();
        self
    }

    /// Set how many style literals are sampled per file
    pub fn with_max_style_samples(mut self, max: usize) -> Self {
        self.max_style_samples = max;
        self
    }

    /// Set how many files are listed per component group
    pub fn with_max_group_files(mut self, max: usize) -> Self {
        self.max_group_files = max;
        self
    }

    /// Absolute path of the views root
    pub fn views_root(&self) -> PathBuf {
        self.root.join(&self.views_dir)
    }

    /// Absolute path of the shared components root
    pub fn components_root(&self) -> PathBuf {
        self.root.join(&self.components_dir)
    }

    /// Reject directory names that would point at the root itself
    pub fn validate(&self) -> Result<()> {
        if self.views_dir.trim().is_empty() {
            return Err(ScreenmapError::Config("views_dir must not be empty".to_string()));
        }
        if self.components_dir.trim().is_empty() {
            return Err(ScreenmapError::Config(
                "components_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.views_dir, "app");
        assert_eq!(config.components_dir, "components");
        assert_eq!(config.max_style_samples, 6);
        assert_eq!(config.max_group_files, 8);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ReportConfig::new()
            .with_root("/project")
            .with_views_dir("screens")
            .with_components_dir("ui")
            .with_max_group_files(3);

        assert_eq!(config.views_root(), PathBuf::from("/project/screens"));
        assert_eq!(config.components_root(), PathBuf::from("/project/ui"));
        assert_eq!(config.max_group_files, 3);
        assert_eq!(config.max_style_samples, 6);
    }

    #[test]
    fn test_validate_rejects_empty_dirs() {
        assert!(ReportConfig::new().validate().is_ok());
        assert!(ReportConfig::new().with_views_dir(" ").validate().is_err());
        assert!(ReportConfig::new().with_components_dir("").validate().is_err());
    }

    #[test]
    fn test_from_json_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"views_dir": "screens", "max_group_files": 2}}"#).unwrap();

        let config = ReportConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.views_dir, "screens");
        assert_eq!(config.max_group_files, 2);
        assert_eq!(config.components_dir, "components");
    }

    #[test]
    fn test_from_json_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ReportConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ScreenmapError::Serialization(_)));
    }
}
