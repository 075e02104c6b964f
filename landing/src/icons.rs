//! Inline SVG icons.
//!
//! Outline glyphs on a 24x24 grid, stroked with `currentColor` so they pick
//! up the surrounding text color.

use acloudapp_site::types::Glyph;
use leptos::prelude::*;

/// Renders one outline glyph.
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Clock size="32" class="mode-icon" /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=glyph_path(glyph)></path>
        </svg>
    }
}

pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Brain => ICON_BRAIN,
        Glyph::Lightning => ICON_LIGHTNING,
        Glyph::Clock => ICON_CLOCK,
        Glyph::Database => ICON_DATABASE,
        Glyph::Gauge => ICON_GAUGE,
        Glyph::Target => ICON_TARGET,
        Glyph::Sparkle => ICON_SPARKLE,
    }
}

/// Two hemispheres (brand mark)
pub const ICON_BRAIN: &str = "M9.5 2A2.5 2.5 0 0 1 12 4.5v15a2.5 2.5 0 0 1-4.96.44 2.5 2.5 0 0 1-2.96-3.08 3 3 0 0 1-.34-5.58 2.5 2.5 0 0 1 1.32-4.24 2.5 2.5 0 0 1 1.98-3A2.5 2.5 0 0 1 9.5 2Z M14.5 2A2.5 2.5 0 0 0 12 4.5v15a2.5 2.5 0 0 0 4.96.44 2.5 2.5 0 0 0 2.96-3.08 3 3 0 0 0 .34-5.58 2.5 2.5 0 0 0-1.32-4.24 2.5 2.5 0 0 0-1.98-3A2.5 2.5 0 0 0 14.5 2Z";

/// Lightning bolt (real-time)
pub const ICON_LIGHTNING: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8Z";

/// Clock face (asynchronous)
pub const ICON_CLOCK: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20Z M12 6v6l4 2";

/// Stacked cylinder (batch)
pub const ICON_DATABASE: &str = "M3 5c0-1.66 4-3 9-3s9 1.34 9 3-4 3-9 3-9-1.34-9-3Z M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5 M3 12c0 1.66 4 3 9 3s9-1.34 9-3";

/// Speedometer
pub const ICON_GAUGE: &str = "m12 14 4-4 M3.34 19a10 10 0 1 1 17.32 0";

/// Concentric rings
pub const ICON_TARGET: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20Z M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12Z M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4Z";

/// Four-point star
pub const ICON_SPARKLE: &str = "M12 3l1.9 5.8L20 10.5l-6.1 1.7L12 18l-1.9-5.8L4 10.5l6.1-1.7Z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_a_path() {
        let glyphs = [
            Glyph::Brain,
            Glyph::Lightning,
            Glyph::Clock,
            Glyph::Database,
            Glyph::Gauge,
            Glyph::Target,
            Glyph::Sparkle,
        ];
        for glyph in glyphs {
            let path = glyph_path(glyph);
            assert!(
                path.starts_with('M') || path.starts_with('m'),
                "{glyph:?}"
            );
        }
    }
}
