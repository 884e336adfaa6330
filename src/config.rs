use std::{sync::LazyLock, time::Duration};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::content::{load_json, ContentError};

pub const SETTINGS_FILE: &str = "settings.json";

/// Upper bound on the decorative layout size.
pub const MAX_DOT_COUNT: usize = 200;

static SETTINGS: LazyLock<Result<Settings, ContentError>> =
    LazyLock::new(|| Settings::load(SETTINGS_FILE));

/// What the certificate viewer does with its last resource when closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerCloseBehavior {
    #[default]
    KeepLast,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub typewriter_period_ms: u64,
    pub cursor_period_ms: u64,
    pub dot_count: usize,
    /// Dots are skipped entirely when the viewport is narrower than this at start.
    pub dot_min_viewport: Option<u32>,
    /// Widths below this are the compact layout (hamburger nav).
    pub compact_breakpoint: u32,
    pub certificate_viewer: bool,
    pub viewer_close: ViewerCloseBehavior,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            typewriter_period_ms: 100,
            cursor_period_ms: 500,
            dot_count: 50,
            dot_min_viewport: None,
            compact_breakpoint: 768,
            certificate_viewer: false,
            viewer_close: ViewerCloseBehavior::KeepLast,
        }
    }
}

impl Settings {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let settings: Settings = load_json(name)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Settings embedded in the binary, parsed once.
    pub fn embedded() -> Result<&'static Settings, ContentError> {
        SETTINGS.as_ref().map_err(Clone::clone)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.typewriter_period_ms == 0 || self.cursor_period_ms == 0 {
            return Err(ContentError::InvalidSettings(
                "timer periods must be non-zero".to_string(),
            ));
        }
        if self.dot_count > MAX_DOT_COUNT {
            return Err(ContentError::InvalidSettings(format!(
                "dot_count {} exceeds {MAX_DOT_COUNT}",
                self.dot_count
            )));
        }
        Ok(())
    }

    pub fn typewriter_period(&self) -> Duration {
        Duration::from_millis(self.typewriter_period_ms)
    }

    pub fn cursor_period(&self) -> Duration {
        Duration::from_millis(self.cursor_period_ms)
    }
}

/// Year the site was built, from `BUILD_TIME` set by the build script.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_json;

    #[test]
    fn test_embedded_settings_load() {
        let settings = Settings::embedded().expect("embedded settings should parse");
        assert!(settings.typewriter_period_ms > 0);
        assert!(settings.dot_count > 0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = parse_json("settings.json", br#"{ "dot_count": 40 }"#).unwrap();
        assert_eq!(settings.dot_count, 40);
        assert_eq!(settings.cursor_period(), Duration::from_millis(500));
        assert_eq!(settings.viewer_close, ViewerCloseBehavior::KeepLast);
    }

    #[test]
    fn test_close_behavior_names() {
        let settings: Settings =
            parse_json("settings.json", br#"{ "viewer_close": "clear" }"#).unwrap();
        assert_eq!(settings.viewer_close, ViewerCloseBehavior::Clear);
    }

    #[test]
    fn test_build_year() {
        assert!(build_year() >= 2024);
    }

    #[test]
    fn test_zero_period_rejected() {
        let settings = Settings {
            typewriter_period_ms: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ContentError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_dot_count_bounded() {
        let at_limit = Settings {
            dot_count: MAX_DOT_COUNT,
            ..Settings::default()
        };
        assert_eq!(at_limit.validate(), Ok(()));

        let settings: Settings =
            parse_json("settings.json", br#"{ "dot_count": 50000 }"#).unwrap();
        assert!(matches!(
            settings.validate(),
            Err(ContentError::InvalidSettings(_))
        ));
    }
}
