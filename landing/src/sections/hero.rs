use acloudapp_site::content::{HERO_CTA, HERO_SUBTITLE, HERO_TITLE_LINES};
use leptos::prelude::*;

use super::site_config;

#[component]
pub fn Hero() -> impl IntoView {
    let config = site_config();
    let [first, second, third] = HERO_TITLE_LINES;

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src=config.hero_image alt="Background" class="hero-image animate-scale" />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <div class="container">
                    <h1 class="hero-title animate-fade-in">
                        {first}
                        <br />
                        {second}
                        <br />
                        {third}
                    </h1>
                    <p class="hero-description animate-fade-in" style=config.animation.style(1)>
                        {HERO_SUBTITLE}
                    </p>
                    <a
                        href="#adaptive-inference"
                        class="btn btn-primary btn-large animate-fade-in"
                        style=config.animation.style(2)
                    >
                        {HERO_CTA}
                    </a>
                </div>
            </div>
        </section>
    }
}
