//! Preference persistence for the transformation commands.
//!
//! Every logical setting is one named string value: booleans encode as
//! "1"/"0", integers as decimal strings, and the quick-wrap buttons as one
//! flat serialized blob. Stored in `~/.config/realign/prefs.yaml`.
//!
//! Passed into the command layer by reference; engines never read
//! preferences themselves.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::split::Disposal;
use crate::wrap::WrapMode;

const KEY_WRAP_PREFIX: &str = "wrap.prefix";
const KEY_WRAP_POSTFIX: &str = "wrap.postfix";
const KEY_WRAP_ESCAPE_SINGLE_QUOTES: &str = "wrap.escape-single-quotes";
const KEY_WRAP_ESCAPE_DOUBLE_QUOTES: &str = "wrap.escape-double-quotes";
const KEY_WRAP_ESCAPE_BACKSLASHES: &str = "wrap.escape-backslashes";
const KEY_WRAP_REMOVE_BLANK_LINES: &str = "wrap.remove-blank-lines";
const KEY_WRAP_MULTI_LINE_MODE: &str = "wrap.multi-line-mode";
const KEY_SPLIT_DELIMITER: &str = "split.delimiter";
const KEY_SPLIT_DISPOSAL: &str = "split.disposal";
const KEY_JOIN_GLUE: &str = "join.glue";
const KEY_QUICK_WRAP_BUTTONS: &str = "quick-wrap.buttons";

/// Flat string-valued preference store that persists across sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Preferences {
    /// Load preferences from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = prefs_file() else {
            tracing::debug!("No config directory available, using default preferences");
            return Self::default();
        };
        Self::load_from(path)
    }

    /// Load preferences from an explicit file path
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.exists() {
            tracing::debug!(
                "Preferences file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!("Failed to parse preferences at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save preferences to disk, creating the config directory if needed
    pub fn save(&self) -> Result<()> {
        let path = prefs_file().context("no config directory available")?;
        self.save_to(path)
    }

    /// Save preferences to an explicit file path
    pub fn save_to(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self).context("failed to serialize preferences")?;
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!("Saved preferences to {}", path.display());

        Ok(())
    }

    fn get(&self, key: &str, default: &str, default_if_empty: bool) -> String {
        match self.values.get(key) {
            Some(value) if value.is_empty() && default_if_empty && !default.is_empty() => {
                default.to_string()
            }
            Some(value) => value.clone(),
            None => default.to_string(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn get_flag(&self, key: &str) -> bool {
        self.get(key, "0", false) == "1"
    }

    fn set_flag(&mut self, key: &str, value: bool) {
        self.set(key, if value { "1" } else { "0" });
    }

    // =========================================================================
    // Wrap
    // =========================================================================

    pub fn wrap_prefix(&self) -> String {
        self.get(KEY_WRAP_PREFIX, ", ", false)
    }

    pub fn wrap_postfix(&self) -> String {
        self.get(KEY_WRAP_POSTFIX, ", ", false)
    }

    pub fn escape_single_quotes(&self) -> bool {
        self.get_flag(KEY_WRAP_ESCAPE_SINGLE_QUOTES)
    }

    pub fn escape_double_quotes(&self) -> bool {
        self.get_flag(KEY_WRAP_ESCAPE_DOUBLE_QUOTES)
    }

    pub fn escape_backslashes(&self) -> bool {
        self.get_flag(KEY_WRAP_ESCAPE_BACKSLASHES)
    }

    pub fn remove_blank_lines(&self) -> bool {
        self.get_flag(KEY_WRAP_REMOVE_BLANK_LINES)
    }

    pub fn multi_line_wrap_mode(&self) -> WrapMode {
        WrapMode::from_pref(&self.get(KEY_WRAP_MULTI_LINE_MODE, "0", true))
    }

    pub fn save_wrap_properties(
        &mut self,
        prefix: &str,
        postfix: &str,
        escape_single_quotes: bool,
        escape_double_quotes: bool,
        escape_backslashes: bool,
        remove_blank_lines: bool,
        mode: WrapMode,
    ) {
        self.set(KEY_WRAP_PREFIX, prefix);
        self.set(KEY_WRAP_POSTFIX, postfix);
        self.set_flag(KEY_WRAP_ESCAPE_SINGLE_QUOTES, escape_single_quotes);
        self.set_flag(KEY_WRAP_ESCAPE_DOUBLE_QUOTES, escape_double_quotes);
        self.set_flag(KEY_WRAP_ESCAPE_BACKSLASHES, escape_backslashes);
        self.set_flag(KEY_WRAP_REMOVE_BLANK_LINES, remove_blank_lines);
        self.set(KEY_WRAP_MULTI_LINE_MODE, mode.as_pref());
    }

    // =========================================================================
    // Split
    // =========================================================================

    pub fn split_delimiter(&self) -> String {
        self.get(KEY_SPLIT_DELIMITER, "", true)
    }

    pub fn split_disposal(&self) -> Disposal {
        Disposal::from_pref(&self.get(KEY_SPLIT_DISPOSAL, "0", true))
    }

    pub fn save_split_properties(&mut self, delimiter: &str, disposal: Disposal) {
        self.set(KEY_SPLIT_DELIMITER, delimiter);
        self.set(KEY_SPLIT_DISPOSAL, disposal.as_pref());
    }

    // =========================================================================
    // Join
    // =========================================================================

    pub fn join_glue(&self) -> String {
        self.get(KEY_JOIN_GLUE, "", false)
    }

    pub fn save_join_properties(&mut self, glue: &str) {
        self.set(KEY_JOIN_GLUE, glue);
    }

    // =========================================================================
    // Quick-wrap buttons
    // =========================================================================

    /// The serialized quick-wrap button blob
    pub fn quick_wrap_buttons(&self) -> String {
        self.get(KEY_QUICK_WRAP_BUTTONS, "", false)
    }

    pub fn save_quick_wrap_buttons(&mut self, serialized: &str) {
        self.set(KEY_QUICK_WRAP_BUTTONS, serialized);
    }
}

/// Preferences file path inside the user's config directory
fn prefs_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("realign").join("prefs.yaml"))
}
