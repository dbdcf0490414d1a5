// File: src/persistence.rs
use crate::core::config::ReadingConfig;
use crate::error::ReadingResult;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// On-disk encoding of a config profile, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// Compact bincode, for `.bin` files.
    Binary,
    /// Pretty-printed JSON, for everything else.
    Json,
}

impl ProfileFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("bin") => ProfileFormat::Binary,
            _ => ProfileFormat::Json,
        }
    }
}

/// Writes the profile to a temp file in the target directory, then renames it
/// over `path`, so readers never see a half-written profile.
pub fn save_config(config: &ReadingConfig, path: &Path) -> ReadingResult<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        match ProfileFormat::for_path(path) {
            ProfileFormat::Binary => bincode::serialize_into(&mut writer, config)?,
            ProfileFormat::Json => serde_json::to_writer_pretty(&mut writer, config)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!("saved reading config to {}", path.display());
    Ok(())
}

/// Loads and validates a profile written by `save_config` or by hand.
/// JSON profiles may name only the fields they override.
pub fn load_config(path: &Path) -> ReadingResult<ReadingConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: ReadingConfig = match ProfileFormat::for_path(path) {
        ProfileFormat::Binary => bincode::deserialize_from(reader)?,
        ProfileFormat::Json => serde_json::from_reader(reader)?,
    };
    config.validate()?;

    info!("loaded reading config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadingError;

    #[test]
    fn round_trips_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ReadingConfig::default();
        config.unit = vec!["VND".to_string()];

        for name in ["profile.json", "nested/profile.bin"] {
            let path = dir.path().join(name);
            save_config(&config, &path).unwrap();
            assert_eq!(load_config(&path).unwrap(), config);
        }
    }

    #[test]
    fn partial_json_profile_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.json");
        fs::write(&path, r#"{"negative_text": "trừ"}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.negative_text, "trừ");
        assert_eq!(config.unit, vec!["đồng".to_string()]);
    }

    #[test]
    fn invalid_profile_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"group_size": 0}"#).unwrap();
        assert!(matches!(load_config(&path), Err(ReadingError::InvalidConfig(_))));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_config(&path), Err(ReadingError::Serialization(_))));
    }

    #[test]
    fn missing_profile_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_config(&dir.path().join("nope.json")),
            Err(ReadingError::Io(_))
        ));
    }
}
