use std::path::PathBuf;

/// Environment variable selecting where native builds keep their result file.
pub const DATA_DIR_ENV: &str = "NURTEST_DATA_DIR";

pub const APP_NAME: &str = "NUrTest";

pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir.trim());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.data_dir, PathBuf::from("."));
        let blank = AppConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(blank, AppConfig::default());
    }

    #[test]
    fn reads_data_dir_override() {
        let config = AppConfig::from_lookup(|key| {
            (key == DATA_DIR_ENV).then(|| "/tmp/nurtest".to_string())
        });
        assert_eq!(config.data_dir, PathBuf::from("/tmp/nurtest"));
    }
}
