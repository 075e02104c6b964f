//! Site configuration.
//!
//! Defaults describe the stock page. A host page can override any subset of
//! fields with a JSON document; missing fields keep their defaults.
//!
//! ```rust
//! use acloudapp_site::config::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{ "brand": "inferly" }"#).unwrap();
//! assert_eq!(config.brand, "inferly");
//! assert_eq!(config.default_tab.as_str(), "real-time");
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::content::{DEFAULT_CODE_TAB, code_tab_definitions};
use crate::tabs::{TabId, TabSelector, TabsError};

pub const DEFAULT_BRAND: &str = "acloudapp";
pub const DEFAULT_HERO_IMAGE: &str =
    "https://framerusercontent.com/images/ZNJCADOlbYVQiJSME03HIUf4ms.jpg?scale-down-to=2048";
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;

/// Why a host configuration document was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Tabs(#[from] TabsError),
}

/// CSS animation delay, passed through verbatim (`"0.2s"`, `"150ms"`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AnimationDelay(String);

impl AnimationDelay {
    pub fn new(delay: impl Into<String>) -> Self {
        Self(delay.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Inline style fragment for the element that fades in.
    pub fn style(&self) -> String {
        format!("animation-delay: {}", self.0)
    }
}

/// Fade-in delays for staggered content, indexed by position.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub delays: Vec<AnimationDelay>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            delays: ["0s", "0.2s", "0.4s", "0.6s"]
                .into_iter()
                .map(AnimationDelay::new)
                .collect(),
        }
    }
}

impl AnimationConfig {
    /// Delay for the `step`-th staggered element; later steps reuse the last
    /// configured delay. `None` when no delays are configured.
    pub fn delay(&self, step: usize) -> Option<&AnimationDelay> {
        self.delays.get(step).or_else(|| self.delays.last())
    }

    /// Inline style for the `step`-th element, empty when unconfigured.
    pub fn style(&self, step: usize) -> String {
        self.delay(step).map(AnimationDelay::style).unwrap_or_default()
    }
}

/// Page-wide settings; every field falls back to the stock page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub brand: String,
    pub hero_image: String,
    pub default_tab: TabId,
    pub animation: AnimationConfig,
    pub copy_feedback_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            hero_image: DEFAULT_HERO_IMAGE.to_string(),
            default_tab: DEFAULT_CODE_TAB,
            animation: AnimationConfig::default(),
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        // Reject a default tab the page does not have before anything mounts.
        config.code_tabs()?;
        Ok(config)
    }

    /// Code-sample selector starting on the configured default tab.
    pub fn code_tabs(&self) -> Result<TabSelector<&'static str>, TabsError> {
        TabSelector::new(code_tab_definitions(), self.default_tab.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "default_tab": "batch", "animation": { "delays": ["0ms", "150ms"] } }"#,
        )
        .unwrap();

        assert_eq!(config.default_tab, TabId::from_static("batch"));
        assert_eq!(config.brand, DEFAULT_BRAND);
        assert_eq!(config.copy_feedback_ms, DEFAULT_COPY_FEEDBACK_MS);
        assert_eq!(config.animation.style(1), "animation-delay: 150ms");
        assert_eq!(config.animation.style(9), "animation-delay: 150ms");
    }

    #[test]
    fn unknown_default_tab_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "default_tab": "streaming" }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Tabs(TabsError::UnknownDefault(ref id)) if id.as_str() == "streaming"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ brand: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site configuration"));
    }

    #[test]
    fn unknown_animation_key_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "animation": { "step": "0.3s" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("step"));
    }

    #[test]
    fn misspelled_top_level_key_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "brnad": "inferly" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn no_delays_means_no_style() {
        let animation = AnimationConfig { delays: vec![] };
        assert_eq!(animation.delay(0), None);
        assert_eq!(animation.style(0), "");
    }

    #[test]
    fn code_tabs_honour_default() {
        let config = SiteConfig {
            default_tab: TabId::from_static("async"),
            ..SiteConfig::default()
        };
        let tabs = config.code_tabs().unwrap();
        assert_eq!(tabs.current_selection().as_str(), "async");
    }
}
