//! Content and tab-selection checks against the shipped page data.

use acloudapp_site::content::{self, CODE_SAMPLES, DEFAULT_CODE_TAB, PRICING};
use acloudapp_site::{SiteConfig, TabId};

// ============================================
// Code sample selector
// ============================================

mod code_tabs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_tabs_in_page_order() {
        let tabs = SiteConfig::default().code_tabs().unwrap();
        let labels: Vec<&str> = tabs.render().controls.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Real-time", "Async", "Batch"]);
    }

    #[test]
    fn opens_on_real_time() {
        let tabs = SiteConfig::default().code_tabs().unwrap();
        assert_eq!(tabs.current_selection(), &DEFAULT_CODE_TAB);

        let view = tabs.render();
        let active = view.active_panel().unwrap();
        assert_eq!(*active.payload, CODE_SAMPLES[0].code);
    }

    #[test]
    fn every_sample_becomes_the_only_active_panel() {
        let mut tabs = SiteConfig::default().code_tabs().unwrap();
        for sample in CODE_SAMPLES {
            tabs.select(&TabId::from_static(sample.id));
            let view = tabs.render();

            let active: Vec<&str> = view
                .panels
                .iter()
                .filter(|p| p.active)
                .map(|p| *p.payload)
                .collect();
            assert_eq!(active, vec![sample.code]);
        }
    }

    #[test]
    fn stray_selection_keeps_visible_sample() {
        let mut tabs = SiteConfig::default().code_tabs().unwrap();
        tabs.select(&TabId::from_static("async"));
        tabs.select(&TabId::new("streaming"));

        assert_eq!(tabs.current_selection().as_str(), "async");
        assert!(tabs.active_definition().payload().contains("callback_url"));
    }

    #[test]
    fn remount_starts_from_default_again() {
        let config = SiteConfig::default();
        let mut first = config.code_tabs().unwrap();
        first.select(&TabId::from_static("batch"));

        let second = config.code_tabs().unwrap();
        assert_eq!(second.current_selection(), &DEFAULT_CODE_TAB);
    }
}

// ============================================
// Static content
// ============================================

mod static_content {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pricing_table_is_rectangular() {
        assert!(PRICING.is_rectangular());
        assert_eq!(PRICING.windows.len(), 6);
        assert_eq!(PRICING.rows.len(), 4);
    }

    #[test]
    fn pricing_rows_in_page_order() {
        let models: Vec<&str> = PRICING.rows.iter().map(|r| r.model).collect();
        assert_eq!(models, vec!["8B", "70B", "40GB", "Deepseek-R1"]);
    }

    #[test]
    fn one_mode_per_code_sample() {
        assert_eq!(content::INFERENCE_MODES.len(), CODE_SAMPLES.len());
    }

    #[test]
    fn copyright_mentions_brand() {
        assert_eq!(
            content::copyright("acloudapp"),
            "\u{a9} 2025 acloudapp technologies. All rights reserved."
        );
    }
}
