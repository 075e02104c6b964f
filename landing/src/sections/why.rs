use acloudapp_site::content::{REASONS, WHY_TITLE};
use acloudapp_site::types::Reason;
use leptos::prelude::*;

use super::site_config;
use crate::icons::Icon;

#[component]
pub fn WhyDevelopers() -> impl IntoView {
    let config = site_config();

    view! {
        <section class="why">
            <div class="container">
                <h2 class="section-title animate-fade-in">
                    {WHY_TITLE} " "
                    <span class="accent">{config.brand.clone()}</span>
                </h2>
                <div class="reasons-grid">
                    {REASONS
                        .iter()
                        .enumerate()
                        .map(|(i, reason)| view! {
                            <ReasonCard reason=*reason style=config.animation.style(i + 1) />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReasonCard(reason: Reason, style: String) -> impl IntoView {
    view! {
        <article class="reason-card animate-fade-in" style=style>
            <div class="reason-icon">
                <Icon glyph=reason.glyph />
            </div>
            <h3 class="reason-title">{reason.title}</h3>
            <p class="reason-body">{reason.body}</p>
        </article>
    }
}
