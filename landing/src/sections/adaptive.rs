use std::time::Duration;

use acloudapp_site::content::{ADAPTIVE_EYEBROW, ADAPTIVE_TITLE, INFERENCE_MODES};
use acloudapp_site::types::InferenceMode;
use acloudapp_site::TabSelector;
use leptos::prelude::*;

use super::site_config;
use crate::icons::Icon;

#[component]
pub fn AdaptiveInference() -> impl IntoView {
    let config = site_config();

    let code_tabs = match config.code_tabs() {
        Ok(tabs) => view! {
            <CodeTabs
                tabs=tabs
                feedback=Duration::from_millis(config.copy_feedback_ms)
                style=config.animation.style(2)
            />
        }
        .into_any(),
        Err(err) => {
            log::error!("code samples unavailable: {err}");
            ().into_any()
        }
    };

    view! {
        <section id="adaptive-inference" class="adaptive">
            <div class="container adaptive-grid">
                <div>
                    <h2 class="adaptive-title animate-fade-in">
                        {ADAPTIVE_EYEBROW}
                        <br />
                        <span class="accent">{ADAPTIVE_TITLE}</span>
                    </h2>
                    <div class="mode-list">
                        {INFERENCE_MODES
                            .iter()
                            .enumerate()
                            .map(|(i, mode)| view! {
                                <ModeRow mode=*mode style=config.animation.style(i + 1) />
                            })
                            .collect_view()}
                    </div>
                </div>
                {code_tabs}
            </div>
        </section>
    }
}

#[component]
fn ModeRow(mode: InferenceMode, style: String) -> impl IntoView {
    view! {
        <div class="mode-row animate-fade-in" style=style>
            <Icon glyph=mode.glyph size="32" class="accent" />
            <div>
                <h3 class="mode-title">{mode.title}</h3>
                <p class="mode-description">{mode.description}</p>
            </div>
        </div>
    }
}

fn control_class(active: bool) -> &'static str {
    if active { "code-tab active" } else { "code-tab" }
}

fn panel_class(active: bool) -> &'static str {
    if active { "code-panel tab-content active" } else { "code-panel tab-content" }
}

/// Tab bar plus one `<pre>` per code sample; only the selected one is active.
///
/// Every panel stays mounted so the CSS fade between samples can run.
#[component]
fn CodeTabs(tabs: TabSelector<&'static str>, feedback: Duration, style: String) -> impl IntoView {
    let tabs = RwSignal::new(tabs);
    let (copied, set_copied) = signal(false);

    let is_active = move |index: usize| tabs.with(|t| t.is_active_at(index));

    let copy_code = move |_| {
        if let Some(window) = web_sys::window() {
            let code = tabs.with_untracked(|t| *t.active_definition().payload());
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(code);
            set_copied.set(true);
            set_timeout(move || set_copied.set(false), feedback);
        }
    };

    // Structure comes from one render pass; active flags re-read `render` by index.
    let (controls, panels) = {
        let initial = tabs.get_untracked();
        let snapshot = initial.render();

        let controls = snapshot
            .controls
            .iter()
            .enumerate()
            .map(|(index, control)| {
                let target = control.id.clone();
                let label = control.label.to_string();
                view! {
                    <button
                        class=move || control_class(is_active(index))
                        on:click=move |_| tabs.update(|t| {
                            t.select(&target);
                        })
                    >
                        {label}
                    </button>
                }
            })
            .collect_view();

        let panels = snapshot
            .panels
            .iter()
            .enumerate()
            .map(|(index, panel)| {
                let tab = panel.id.to_string();
                let code = *panel.payload;
                view! {
                    <pre class=move || panel_class(is_active(index)) data-tab=tab>
                        {code}
                    </pre>
                }
            })
            .collect_view();

        (controls, panels)
    };

    view! {
        <div class="code-card animate-fade-in" style=style>
            <div class="code-tabs">{controls}</div>
            <div class="code-panels">
                {panels}
                <button class="code-copy-btn" on:click=copy_code>
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
            </div>
        </div>
    }
}
