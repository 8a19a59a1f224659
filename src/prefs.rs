//! The persisted user preference: the display language.
//!
//! Storage is a single `prefs.toml` in the user's config directory. The
//! store never surfaces an error: an absent or unreadable file reads as
//! "no stored preference", and a failed save is a logged no-op, so the
//! invitation always falls back to its default language.

use std::env;
use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::definitions::Lang;

const PREFS_FILE: &str = "prefs.toml";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Option<Lang>,
}

/// Handle to the preference file's directory, if one could be resolved.
#[derive(Debug, Clone)]
pub struct PrefStore {
    dir: Option<PathBuf>,
}

impl PrefStore {
    /// Resolves the config directory from `$KALYANAM_CONFIG_DIR`, then
    /// `$XDG_CONFIG_HOME/kalyanam`, then `$HOME/.config/kalyanam`.
    pub fn open_default() -> Self {
        let dir = env::var_os("KALYANAM_CONFIG_DIR")
            .map(PathBuf::from)
            .or_else(|| {
                env::var_os("XDG_CONFIG_HOME").map(|base| PathBuf::from(base).join("kalyanam"))
            })
            .or_else(|| {
                env::var_os("HOME")
                    .map(|home| PathBuf::from(home).join(".config").join("kalyanam"))
            });
        if dir.is_none() {
            warn!("no config directory available, language preference will not persist");
        }
        Self { dir }
    }

    /// Store rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir: Some(dir) }
    }

    /// Store with no backing storage: loads defaults, saves are no-ops.
    pub fn unavailable() -> Self {
        Self { dir: None }
    }

    fn path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(PREFS_FILE))
    }

    /// Reads the preference file; any failure yields defaults.
    pub fn load(&self) -> Preferences {
        let Some(path) = self.path() else {
            return Preferences::default();
        };
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Preferences::default(),
        };
        match toml::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!("ignoring malformed {}: {}", path.display(), err);
                Preferences::default()
            }
        }
    }

    /// Best-effort write; failures are logged and swallowed.
    pub fn save(&self, prefs: &Preferences) {
        let Some(path) = self.path() else {
            return;
        };
        let serialized = match toml::to_string_pretty(prefs) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!("could not serialize preferences: {}", err);
                return;
            }
        };
        if let Some(dir) = path.parent() {
            if let Err(err) = fs::create_dir_all(dir) {
                warn!("could not create {}: {}", dir.display(), err);
                return;
            }
        }
        match fs::write(&path, serialized) {
            Ok(()) => debug!("saved preferences to {}", path.display()),
            Err(err) => warn!("could not write {}: {}", path.display(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> PrefStore {
        let dir = env::temp_dir().join(format!("kalyanam-prefs-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        PrefStore::with_dir(dir)
    }

    #[test]
    fn load_defaults_when_file_absent() {
        let store = temp_store("absent");
        assert!(store.load().language.is_none());
    }

    #[test]
    fn save_then_load_round_trips_the_language() {
        let store = temp_store("roundtrip");
        store.save(&Preferences {
            language: Some(Lang::Te),
        });
        assert_eq!(store.load().language, Some(Lang::Te));
    }

    #[test]
    fn unavailable_store_is_silent() {
        let store = PrefStore::unavailable();
        store.save(&Preferences {
            language: Some(Lang::Te),
        });
        assert!(store.load().language.is_none());
    }

    #[test]
    fn malformed_file_reads_as_default() {
        let store = temp_store("malformed");
        store.save(&Preferences::default());
        let path = store.path().unwrap();
        fs::write(&path, "language = 42").unwrap();
        assert!(store.load().language.is_none());
    }
}
