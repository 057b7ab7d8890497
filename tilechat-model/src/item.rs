//! Display records rendered by the carousel viewers.

use serde::{Deserialize, Serialize};

/// Which viewer family an item list is destined for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Tile,
    SuggestedOption,
}

/// A product as returned by the catalogue backend.
///
/// Items are immutable once fetched. The backend is loose about which fields
/// it fills in, so every string defaults to empty and the image location may
/// arrive as either `image_url` or `image_path`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name: String,
    /// Rupees per square foot.
    pub price: f64,
    pub size: String,
    pub finish: String,
    pub material: String,
    /// Comma separated list of rooms/areas the tile suits.
    pub applications: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(alias = "product_url", alias = "url")]
    pub detail_url: String,
    pub category: String,
    /// Option label used by suggestion menus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    /// Best available image location.
    pub fn image(&self) -> Option<&str> {
        if !self.image_url.is_empty() {
            return Some(&self.image_url);
        }
        self.image_path.as_deref().filter(|path| !path.is_empty())
    }

    pub fn detail(&self) -> Option<&str> {
        (!self.detail_url.is_empty()).then_some(self.detail_url.as_str())
    }

    /// Text shown under the image, falling back to the name.
    pub fn title(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn price_label(&self) -> String {
        format!("₹{}/sq.ft", self.price)
    }

    pub fn application_list(&self) -> Vec<&str> {
        self.applications
            .split(',')
            .map(str::trim)
            .filter(|app| !app.is_empty())
            .collect()
    }
}
