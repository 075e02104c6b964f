//! Tab selection state.
//!
//! A [`TabSelector`] owns a fixed, ordered set of [`TabDefinition`]s and the
//! single identifier of the tab currently on display. Selection is the only
//! mutation; everything else is a read.
//!
//! ```rust
//! use acloudapp_site::tabs::{TabDefinition, TabId, TabSelector};
//!
//! let mut tabs = TabSelector::new(
//!     vec![
//!         TabDefinition::new("real-time", "print('now')"),
//!         TabDefinition::new("batch", "print('later')"),
//!     ],
//!     TabId::from_static("real-time"),
//! )
//! .unwrap();
//!
//! tabs.select(&TabId::from_static("batch"));
//! assert_eq!(tabs.current_selection().as_str(), "batch");
//!
//! // Unknown identifiers are ignored.
//! tabs.select(&TabId::from_static("stream"));
//! assert_eq!(tabs.current_selection().as_str(), "batch");
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Identifier of one tab within a fixed set.
///
/// String-backed so that identifiers outside the set can still be expressed
/// (and ignored) and so that configuration can name them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct TabId(Cow<'static, str>);

impl TabId {
    /// Identifier backed by a static string, usable in `const` items.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TabId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Derive a display label from an identifier: first character upper-cased,
/// the rest untouched (`real-time` -> `Real-time`).
pub fn label_for(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A tab: identifier, label and an opaque payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabDefinition<P> {
    id: TabId,
    label: Cow<'static, str>,
    payload: P,
}

impl<P> TabDefinition<P> {
    /// Definition whose label is derived from the identifier.
    pub fn new(id: impl Into<TabId>, payload: P) -> Self {
        let id = id.into();
        let label = Cow::Owned(label_for(id.as_str()));
        Self { id, label, payload }
    }

    /// Replace the derived label.
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    pub fn id(&self) -> &TabId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }
}

/// Reasons a tab set cannot back a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabsError {
    #[error("a tab selector needs at least one tab")]
    Empty,
    #[error("tab `{0}` is declared more than once")]
    DuplicateId(TabId),
    #[error("default tab `{0}` is not one of the declared tabs")]
    UnknownDefault(TabId),
}

/// Single-selection state over a fixed, ordered set of tabs.
///
/// Invariant: `selected` is always the id of one of `definitions`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelector<P> {
    definitions: Vec<TabDefinition<P>>,
    default: TabId,
    selected: TabId,
}

impl<P> TabSelector<P> {
    /// Build a selector starting on `default`.
    ///
    /// The set is validated once here; afterwards selection cannot fail.
    pub fn new(definitions: Vec<TabDefinition<P>>, default: TabId) -> Result<Self, TabsError> {
        if definitions.is_empty() {
            return Err(TabsError::Empty);
        }

        let mut seen = HashSet::with_capacity(definitions.len());
        for def in &definitions {
            if !seen.insert(def.id.as_str()) {
                return Err(TabsError::DuplicateId(def.id.clone()));
            }
        }

        if !seen.contains(default.as_str()) {
            return Err(TabsError::UnknownDefault(default));
        }

        Ok(Self {
            definitions,
            selected: default.clone(),
            default,
        })
    }

    /// Make `id` the displayed tab.
    ///
    /// Unknown identifiers are ignored. Returns whether `id` is now selected.
    pub fn select(&mut self, id: &TabId) -> bool {
        match self.definitions.iter().find(|def| &def.id == id) {
            Some(def) => {
                if self.selected != def.id {
                    log::debug!("tab selected: {} -> {}", self.selected, def.id);
                    self.selected = def.id.clone();
                }
                true
            }
            None => {
                log::warn!("ignoring selection of unknown tab `{id}`");
                false
            }
        }
    }

    /// Back to the designated default, as on a fresh mount.
    pub fn reset(&mut self) {
        self.selected = self.default.clone();
    }

    pub fn current_selection(&self) -> &TabId {
        &self.selected
    }

    pub fn default_tab(&self) -> &TabId {
        &self.default
    }

    pub fn is_selected(&self, id: &TabId) -> bool {
        &self.selected == id
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.definitions.iter().any(|def| &def.id == id)
    }

    /// Definitions in declaration order.
    pub fn definitions(&self) -> &[TabDefinition<P>] {
        &self.definitions
    }

    pub fn active_definition(&self) -> &TabDefinition<P> {
        // The constructor and `select` keep `selected` inside the set.
        self.definitions
            .iter()
            .find(|def| def.id == self.selected)
            .unwrap_or(&self.definitions[0])
    }

    /// Controls and panels for the current selection, in declaration order.
    pub fn render(&self) -> TabsView<'_, P> {
        let controls = self
            .definitions
            .iter()
            .map(|def| TabControl {
                id: &def.id,
                label: def.label(),
                active: def.id == self.selected,
            })
            .collect();

        let panels = self
            .definitions
            .iter()
            .map(|def| TabPanel {
                id: &def.id,
                payload: &def.payload,
                active: def.id == self.selected,
            })
            .collect();

        TabsView { controls, panels }
    }

    /// Whether the `index`-th tab (declaration order) renders as active.
    ///
    /// Reads the same flags as [`render`](Self::render); out-of-range
    /// indexes are never active.
    pub fn is_active_at(&self, index: usize) -> bool {
        self.render()
            .panels
            .get(index)
            .is_some_and(|panel| panel.active)
    }
}

/// One selector control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabControl<'a> {
    pub id: &'a TabId,
    pub label: &'a str,
    pub active: bool,
}

/// One content panel.
#[derive(Debug, PartialEq, Eq)]
pub struct TabPanel<'a, P> {
    pub id: &'a TabId,
    pub payload: &'a P,
    pub active: bool,
}

impl<P> Clone for TabPanel<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for TabPanel<'_, P> {}

/// Render output of a [`TabSelector`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabsView<'a, P> {
    pub controls: Vec<TabControl<'a>>,
    pub panels: Vec<TabPanel<'a, P>>,
}

impl<'a, P> TabsView<'a, P> {
    /// The panel marked active, if exactly one is.
    pub fn active_panel(&self) -> Option<TabPanel<'a, P>> {
        let mut active = self.panels.iter().filter(|panel| panel.active);
        match (active.next(), active.next()) {
            (Some(panel), None) => Some(*panel),
            _ => None,
        }
    }
}
