use std::path::PathBuf;

use crate::error::{Error, Result};

/// The default length used by generators that are created without an explicit length.
pub const DEFAULT_LENGTH: usize = 10;

/// Configuration that is threaded into generator construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    default_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
        }
    }
}

impl Settings {
    pub fn new(default_length: i64) -> Result<Self> {
        let mut settings = Self::default();
        settings.set_default_length(default_length)?;
        Ok(settings)
    }

    pub fn default_length(&self) -> usize {
        self.default_length
    }

    /// Changes the default length, a value that isn't positive is rejected and the previous
    /// value is kept.
    pub fn set_default_length(&mut self, new_length: i64) -> Result<()> {
        if new_length <= 0 {
            return Err(Error::InvalidConfiguration(new_length));
        }
        self.default_length =
            usize::try_from(new_length).map_err(|_| Error::InvalidConfiguration(new_length))?;
        Ok(())
    }
}

/// Location of the settings file, `$XDG_CONFIG_HOME/pwcompose/settings.toml` or
/// `$HOME/.config/pwcompose/settings.toml` when `XDG_CONFIG_HOME` isn't set.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_dir = match (xdg_config_home, home) {
        (Some(xdg_config_home), _) => xdg_config_home.clone(),
        (None, Some(home)) => home.join(".config"),
        (None, None) => return Err(Error::Generic("no home directory to read settings from")),
    };
    Ok(config_dir.join("pwcompose").join("settings.toml"))
}

/// Reads the settings, later sources override earlier ones:
/// `fallback_length`, the optional toml file and then `<env_prefix>_DEFAULT_LENGTH`.
pub fn read_config(
    config_file: &Option<PathBuf>,
    env_prefix: &str,
    fallback_length: i64,
) -> Result<Settings> {
    let mut settings = config::Config::default();
    settings.set_default("default_length", fallback_length)?;

    if let Some(config_file) = config_file {
        log::debug!("reading settings from {}", config_file.display());
        settings.merge(config::File::from(config_file.as_path()).required(false))?;
    }
    settings.merge(config::Environment::with_prefix(env_prefix))?;

    Settings::new(settings.get_int("default_length")?)
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
