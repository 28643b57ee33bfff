//! Session settings for the command-line adapter.
//!
//! Settings may come from an optional TOML file; command-line flags win
//! over the file, and everything has a sensible default so the binary runs
//! with no arguments at all.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Raw session configuration file contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SessionFile {
    /// Path of the save snapshot file.
    pub(crate) save_path: Option<PathBuf>,
    /// Path of the item database JSON.
    pub(crate) catalog_path: Option<PathBuf>,
    /// Seed driving order generation.
    pub(crate) order_seed: Option<u64>,
}

impl SessionFile {
    /// Reads and parses a session configuration file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read session config '{}'", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("could not parse session config '{}'", path.display()))
    }
}

/// Fully resolved session settings.
#[derive(Debug)]
pub(crate) struct SessionSettings {
    /// Path of the save snapshot file.
    pub(crate) save_path: PathBuf,
    /// Path of the item database JSON, or `None` for the built-in database.
    pub(crate) catalog_path: Option<PathBuf>,
    /// Seed driving order generation, or `None` for the default.
    pub(crate) order_seed: Option<u64>,
}

impl SessionSettings {
    /// Merges the optional config file with command-line overrides.
    pub(crate) fn resolve(
        file: SessionFile,
        save_flag: Option<PathBuf>,
        catalog_flag: Option<PathBuf>,
        seed_flag: Option<u64>,
    ) -> Self {
        Self {
            save_path: save_flag
                .or(file.save_path)
                .unwrap_or_else(|| PathBuf::from("msc_save.json")),
            catalog_path: catalog_flag.or(file.catalog_path),
            order_seed: seed_flag.or(file.order_seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_config_file() {
        let file = SessionFile {
            save_path: Some(PathBuf::from("from_file.json")),
            catalog_path: Some(PathBuf::from("items_file.json")),
            order_seed: Some(1),
        };

        let settings = SessionSettings::resolve(
            file,
            Some(PathBuf::from("from_flag.json")),
            None,
            Some(2),
        );

        assert_eq!(settings.save_path, PathBuf::from("from_flag.json"));
        assert_eq!(settings.catalog_path, Some(PathBuf::from("items_file.json")));
        assert_eq!(settings.order_seed, Some(2));
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let settings = SessionSettings::resolve(SessionFile::default(), None, None, None);

        assert_eq!(settings.save_path, PathBuf::from("msc_save.json"));
        assert_eq!(settings.catalog_path, None);
        assert_eq!(settings.order_seed, None);
    }

    #[test]
    fn session_files_parse_partial_contents() {
        let file: SessionFile = toml::from_str("order_seed = 99").expect("config parses");
        assert_eq!(file.order_seed, Some(99));
        assert_eq!(file.save_path, None);
    }
}
