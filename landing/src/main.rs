// acloudapp landing page, Leptos 0.8 CSR

mod host;
mod icons;
mod sections;

use acloudapp_site::SiteConfig;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    // Errors only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    let config = host::site_config();
    log::info!(
        "mounting {} landing page, code tab `{}`",
        config.brand,
        config.default_tab
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Nav />
        <main>
            <Hero />
            <Banner />
            <RateLimits />
            <AdaptiveInference />
            <Models />
            <WhyDevelopers />
        </main>
        <Footer />
    }
}
