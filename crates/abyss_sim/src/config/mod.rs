//! Configuration system
//!
//! Any `serde` type with a `Default` can opt into file loading by
//! implementing [`Config`]. The format is picked from the file extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration text in the given format
    fn from_str_as(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Serialize configuration in the given format
    fn to_string_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string())),
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading configuration from {}", path.display());
        Self::from_str_as(&contents, format)
    }

    /// Load configuration from file, falling back to defaults if it is missing
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::info!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.to_string_as(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("b.ron")).unwrap(), ConfigFormat::Ron);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("b.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(ConfigFormat::from_path(Path::new("noext")).is_err());
    }
}
