//! Configuration supplied by the host page.
//!
//! `index.html` may carry `<script id="site-config" type="application/json">`.
//! Anything wrong with it is logged and the stock configuration is used.

use acloudapp_site::SiteConfig;
use anyhow::{Context, Result};

pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Host configuration, or the defaults when absent or invalid.
pub fn site_config() -> SiteConfig {
    match read_host_config() {
        Ok(Some(config)) => config,
        Ok(None) => SiteConfig::default(),
        Err(err) => {
            log::warn!("using default site config: {err:#}");
            SiteConfig::default()
        }
    }
}

fn read_host_config() -> Result<Option<SiteConfig>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context("no document to read site config from")?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(None);
    }

    parse_host_config(&json).map(Some)
}

fn parse_host_config(json: &str) -> Result<SiteConfig> {
    SiteConfig::from_json(json).with_context(|| format!("#{CONFIG_ELEMENT_ID} was rejected"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_partial_config() {
        let config = parse_host_config(r#"{ "brand": "inferly" }"#).unwrap();
        assert_eq!(config.brand, "inferly");
    }

    #[test]
    fn rejection_names_element_and_cause() {
        let err = parse_host_config(r#"{ "default_tab": "streaming" }"#).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("#site-config was rejected"));
        assert!(message.contains("default tab `streaming`"));
    }

    #[test]
    fn unknown_keys_are_rejected_not_ignored() {
        let err = parse_host_config(r#"{ "animation": { "step": "0.3s" } }"#).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("#site-config was rejected"));
        assert!(message.contains("unknown field `step`"));
    }
}
