// File: ./src/config.rs
use crate::lexicon::{Lexicon, fold, key_phrase};
use crate::model::subject::Subject;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Host-facing overrides, stored as TOML next to the host application's own
/// settings. Everything is optional; an empty file is a valid config.
///
/// `subject_aliases` iterates in key order (BTreeMap), so merging is
/// deterministic no matter how the file was written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Extra alias -> canonical subject name entries ("bio2" = "Biologia").
    #[serde(default)]
    pub subject_aliases: BTreeMap<String, String>,
    /// Extra whole-message greetings.
    #[serde(default)]
    pub greetings: Vec<String>,
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self> {
        // Explicitly detect missing file so callers can fall back to defaults.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        // Read the file with contextualized error (covers permission/IO issues).
        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        // Parse TOML with contextualized error (covers syntax issues).
        Self::from_toml_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Helper to detect whether an anyhow::Error indicates that the config
    /// file was missing, so callers don't scatter brittle substring checks.
    pub fn is_missing_config_error(err: &Error) -> bool {
        // Fast textual check for the explicit not-found message.
        if err.to_string().contains("Config file not found") {
            return true;
        }

        // Walk the error chain and look for an underlying IO NotFound.
        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }

    /// Merges the overrides into a lexicon. Custom subject aliases go after
    /// the built-in table, so they extend the vocabulary without hijacking
    /// established aliases. Unknown canonical names are skipped with a
    /// warning, never an error.
    pub fn apply(&self, lexicon: &mut Lexicon) {
        for (alias, canonical) in &self.subject_aliases {
            match Subject::from_name(canonical) {
                Some(subject) => lexicon.subjects.push((fold(alias), subject)),
                None => log::warn!(
                    "ignoring subject alias '{}': unknown subject '{}'",
                    alias,
                    canonical
                ),
            }
        }
        if !self.greetings.is_empty() {
            lexicon
                .greetings
                .extend(self.greetings.iter().map(|g| key_phrase(g)));
            log::info!("merged {} custom greeting(s)", self.greetings.len());
        }
    }

    /// Convenience for hosts: built-in lexicon with this config merged in.
    pub fn build_lexicon(&self) -> Lexicon {
        let mut lexicon = Lexicon::builtin().clone();
        self.apply(&mut lexicon);
        lexicon
    }
}
