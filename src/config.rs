//! Invitation content: who, when and where.
//!
//! Loaded from `config/event.toml` under the working directory when
//! present, so a couple can reuse the binary without editing source.
//! Every failure path falls back to the built-in card.

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedText;

const CONFIG_PATH: &str = "config/event.toml";

/// Wedding instant used when the config omits or mangles the date.
pub const DEFAULT_WEDDING_DATE: &str = "2026-01-28T10:00:00+05:30";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub groom: LocalizedText,
    pub bride: LocalizedText,
    /// RFC 3339 date-time with offset, e.g. `2026-01-28T10:00:00+05:30`.
    pub wedding_date: String,
    pub venue: LocalizedText,
    pub blessing: LocalizedText,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            groom: LocalizedText::new("Arjun", "అర్జున్"),
            bride: LocalizedText::new("Meera", "మీరా"),
            wedding_date: String::from(DEFAULT_WEDDING_DATE),
            venue: LocalizedText::new(
                "Sri Lakshmi Gardens, Hyderabad",
                "శ్రీ లక్ష్మి గార్డెన్స్, హైదరాబాద్",
            ),
            blessing: LocalizedText::new(
                "With the blessings of our families, we invite you to celebrate our wedding.",
                "మా కుటుంబాల ఆశీస్సులతో, మా వివాహ వేడుకకు మిమ్మల్ని సాదరంగా ఆహ్వానిస్తున్నాం.",
            ),
        }
    }
}

impl EventConfig {
    /// Loads `config/event.toml` relative to `root`, falling back to the
    /// built-in card when the file is absent or unreadable.
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join(CONFIG_PATH);
        if !path.exists() {
            return Self::default();
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("could not read {}: {}", path.display(), err);
                return Self::default();
            }
        };
        match toml::from_str(&raw) {
            Ok(config) => {
                info!("loaded event details from {}", path.display());
                config
            }
            Err(err) => {
                warn!("could not parse {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// The countdown target. A malformed configured date falls back to the
    /// built-in one rather than breaking the page.
    pub fn wedding_instant(&self) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&self.wedding_date).unwrap_or_else(|err| {
            warn!("invalid wedding_date {:?}: {}", self.wedding_date, err);
            DateTime::parse_from_rfc3339(DEFAULT_WEDDING_DATE)
                .expect("default wedding date parses")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn default_wedding_instant_parses() {
        let config = EventConfig::default();
        let instant = config.wedding_instant();
        assert_eq!(instant.year(), 2026);
        assert_eq!(instant.month(), 1);
        assert_eq!(instant.day(), 28);
    }

    #[test]
    fn malformed_date_falls_back() {
        let config = EventConfig {
            wedding_date: String::from("next spring, probably"),
            ..EventConfig::default()
        };
        assert_eq!(
            config.wedding_instant(),
            DateTime::parse_from_rfc3339(DEFAULT_WEDDING_DATE).unwrap()
        );
    }

    #[test]
    fn missing_config_file_yields_default_card() {
        let config = EventConfig::load_or_default(Path::new("/nonexistent/for/sure"));
        assert_eq!(config.groom.en, "Arjun");
        assert!(config.bride.te.is_some());
    }
}
