//! # acloudapp-site
//!
//! Framework-free core of the acloudapp landing page.
//!
//! - [`tabs`] - single-selection tab state with a pure render mapping
//! - [`content`] - page copy, code samples and pricing data
//! - [`config`] - host-overridable site configuration
//! - [`types`] - content data structures
//!
//! The Leptos front end (`acloudapp-landing`) owns the DOM; this crate owns
//! what goes into it and which code tab is on display.
//!
//! ```rust
//! use acloudapp_site::config::SiteConfig;
//! use acloudapp_site::tabs::TabId;
//!
//! let mut tabs = SiteConfig::default().code_tabs().unwrap();
//! tabs.select(&TabId::from_static("batch"));
//!
//! let view = tabs.render();
//! assert_eq!(view.active_panel().unwrap().id.as_str(), "batch");
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod content;
pub mod tabs;
pub mod types;

pub use config::{ConfigError, SiteConfig};
pub use tabs::{TabDefinition, TabId, TabSelector, TabsError, TabsView};
