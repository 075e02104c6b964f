// Landing page sections, top to bottom

use acloudapp_site::SiteConfig;
use leptos::prelude::*;

mod adaptive;
mod banner;
mod footer;
mod hero;
mod models;
mod nav;
mod rate_limits;
mod why;

pub use adaptive::AdaptiveInference;
pub use banner::Banner;
pub use footer::Footer;
pub use hero::Hero;
pub use models::Models;
pub use nav::Nav;
pub use rate_limits::RateLimits;
pub use why::WhyDevelopers;

/// Configuration provided by `App`; stock defaults outside of it.
fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
