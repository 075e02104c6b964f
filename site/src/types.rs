//! Content types for the landing page.
//!
//! Everything here is static data. The UI crate decides how it looks; these
//! types only say what is on the page.

/// Icons the page refers to. The UI crate maps each to its SVG path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Brain,
    Lightning,
    Clock,
    Database,
    Gauge,
    Target,
    Sparkle,
}

/// One way of running inference (shown next to the code samples).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InferenceMode {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

/// Code sample bound to one tab of the code selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeSample {
    /// Tab identifier, also used to derive the tab label.
    pub id: &'static str,
    pub code: &'static str,
}

/// One model row in the pricing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingRow {
    pub model: &'static str,
    /// One price per completion window, already formatted for display.
    pub prices: &'static [&'static str],
}

/// Model prices per completion window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTable {
    pub model_heading: &'static str,
    pub windows: &'static [&'static str],
    pub rows: &'static [PricingRow],
}

impl PricingTable {
    /// True when every row carries exactly one price per window.
    pub fn is_rectangular(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.prices.len() == self.windows.len())
    }
}

/// A card in the "why developers love" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reason {
    pub glyph: Glyph,
    pub title: &'static str,
    pub body: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_table_is_not_rectangular() {
        let table = PricingTable {
            model_heading: "MODEL",
            windows: &["now", "later"],
            rows: &[
                PricingRow {
                    model: "small",
                    prices: &["$1", "$2"],
                },
                PricingRow {
                    model: "large",
                    prices: &["$3"],
                },
            ],
        };
        assert!(!table.is_rectangular());
    }
}
