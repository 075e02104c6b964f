use acloudapp_site::content::{RATE_LIMITS_BODY, RATE_LIMITS_KICKER, RATE_LIMITS_TITLE};
use leptos::prelude::*;

use super::site_config;

#[component]
pub fn RateLimits() -> impl IntoView {
    let animation = site_config().animation;

    view! {
        <section class="rate-limits">
            <div class="container container-narrow">
                <h2 class="section-title animate-fade-in">{RATE_LIMITS_TITLE}</h2>
                <p class="section-description animate-fade-in" style=animation.style(1)>
                    {RATE_LIMITS_BODY}
                </p>
                <p class="section-description animate-fade-in" style=animation.style(2)>
                    {RATE_LIMITS_KICKER}
                </p>
            </div>
        </section>
    }
}
