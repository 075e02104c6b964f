use acloudapp_site::content::copyright;
use leptos::prelude::*;

use super::site_config;

#[component]
pub fn Footer() -> impl IntoView {
    let line = copyright(&site_config().brand);

    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{line}</p>
            </div>
        </footer>
    }
}
