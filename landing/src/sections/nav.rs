use acloudapp_site::content::NAV_CTA;
use acloudapp_site::types::Glyph;
use leptos::prelude::*;

use super::site_config;
use crate::icons::Icon;

#[component]
pub fn Nav() -> impl IntoView {
    let brand = site_config().brand;

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="#" class="nav-brand">
                    <Icon glyph=Glyph::Brain size="32" class="nav-logo" />
                    <span class="nav-title">{brand}</span>
                </a>
                <a href="#adaptive-inference" class="btn btn-primary">
                    {NAV_CTA}
                </a>
            </div>
        </nav>
    }
}
