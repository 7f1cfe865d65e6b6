use super::Config;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// A missing file falls back to defaults; an unreadable or unparsable
    /// file is reported and ignored.
    pub fn load() -> Config {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path).unwrap_or_else(|err| {
                eprintln!("Ignoring config at {}: {}", path.display(), err);
                Config::default()
            }),
            _ => Config::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Default config file path (~/.config/gh-activity/config.toml)
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gh-activity").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base = \"https://ghe.example.com/api/v3\"").unwrap();

        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.api_base, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_load_from_path_defaults_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing overridden").unwrap();

        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.api_base, "https://api.github.com");
    }

    #[test]
    fn test_load_from_path_missing_file() {
        assert!(ConfigLoader::load_from_path("/nonexistent/config.toml").is_err());
    }

    #[test]
    fn test_load_from_path_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base = [not toml").unwrap();

        assert!(ConfigLoader::load_from_path(file.path()).is_err());
    }
}
