use acloudapp_site::content::{MODELS_CAPTION, MODELS_FOOTNOTE, MODELS_TITLE_LINES, PRICING};
use acloudapp_site::types::PricingRow;
use leptos::prelude::*;

use super::site_config;

#[component]
pub fn Models() -> impl IntoView {
    let animation = site_config().animation;
    let [first, second] = MODELS_TITLE_LINES;

    view! {
        <section id="models" class="models">
            <div class="container">
                <h2 class="section-title animate-fade-in">
                    {first}
                    <br />
                    {second}
                </h2>
                <p class="section-description animate-fade-in" style=animation.style(1)>
                    {MODELS_CAPTION}
                </p>
                <div class="pricing-scroll animate-fade-in" style=animation.style(2)>
                    <table class="pricing-table">
                        <thead>
                            <tr>
                                <th class="pricing-model">{PRICING.model_heading}</th>
                                {PRICING
                                    .windows
                                    .iter()
                                    .map(|window| view! { <th class="pricing-window">{*window}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {PRICING
                                .rows
                                .iter()
                                .map(|row| view! { <PriceRow row=*row /> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
                <p class="pricing-footnote">{MODELS_FOOTNOTE}</p>
            </div>
        </section>
    }
}

#[component]
fn PriceRow(row: PricingRow) -> impl IntoView {
    view! {
        <tr>
            <td class="pricing-model">{row.model}</td>
            {row
                .prices
                .iter()
                .map(|price| view! { <td class="pricing-price">{*price}</td> })
                .collect_view()}
        </tr>
    }
}
