use acloudapp_site::content::BANNER;
use leptos::prelude::*;

#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <div class="banner">
            <p>{BANNER}</p>
        </div>
    }
}
