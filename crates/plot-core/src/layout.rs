// File: crates/plot-core/src/layout.rs
// Summary: Layout document (cards -> tabs -> fields) and per-tab resolution.

use serde::Deserialize;

use crate::axis::ScaleKind;
use crate::error::Result;
use crate::field::FieldDescriptor;

/// `layout.barmode` value that selects the signed-log y scale.
pub const LOG_Y_BARMODE: &str = "logy";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Tab {
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub layout: Option<TabLayout>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TabLayout {
    #[serde(default)]
    pub barmode: Option<String>,
}

impl Tab {
    pub fn scale_kind(&self) -> ScaleKind {
        match self.layout.as_ref().and_then(|l| l.barmode.as_deref()) {
            Some(LOG_Y_BARMODE) => ScaleKind::SignedLog,
            _ => ScaleKind::Linear,
        }
    }
}

impl LayoutDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn tab(&self, card: usize, tab: usize) -> Option<&Tab> {
        self.cards.get(card)?.tabs.get(tab)
    }

    /// Field descriptors of `cards[card].tabs[tab]`; empty when absent.
    pub fn fields(&self, card: usize, tab: usize) -> &[FieldDescriptor] {
        match self.tab(card, tab) {
            Some(t) => &t.fields,
            None => {
                log::warn!("layout has no tab {tab} in card {card}; plotting nothing");
                &[]
            }
        }
    }
}
