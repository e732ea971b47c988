use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use crate::io::{self, input::SAMPLE_INPUT};
use anyhow::Result;
use std::path::Path;

/// Name of the sample questionnaire written next to the configuration.
pub const SAMPLE_INPUT_NAME: &str = "profile.toml";

/// Write `.airoi.toml` and a sample `profile.toml` into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let input_path = dir.join(SAMPLE_INPUT_NAME);

    if !force {
        if let Some(existing) = [&config_path, &input_path]
            .into_iter()
            .find(|path| io::file_exists(path))
        {
            anyhow::bail!(
                "{} already exists. Use --force to overwrite.",
                existing.display()
            );
        }
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    io::write_file(&input_path, SAMPLE_INPUT)?;
    tracing::info!(
        "Created {} and {}",
        config_path.display(),
        input_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_both_files() {
        let temp = TempDir::new().unwrap();
        init_config(temp.path(), false).unwrap();
        assert!(temp.path().join(CONFIG_FILE_NAME).is_file());
        assert!(temp.path().join(SAMPLE_INPUT_NAME).is_file());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(SAMPLE_INPUT_NAME), "keep me").unwrap();

        let err = init_config(temp.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(
            std::fs::read_to_string(temp.path().join(SAMPLE_INPUT_NAME)).unwrap(),
            "keep me"
        );

        init_config(temp.path(), true).unwrap();
        assert_ne!(
            std::fs::read_to_string(temp.path().join(SAMPLE_INPUT_NAME)).unwrap(),
            "keep me"
        );
    }
}
