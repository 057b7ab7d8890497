use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use tilechat_core::{AspectRatio, ViewerConfig, WrapMode};
use tilechat_model::ItemKind;

/// Local development backend.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Top-level widget settings. Viewer sections accept partial tables; any
/// field left out keeps its preset value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Base URL of the catalogue/assistant backend.
    pub api_base_url: String,
    /// Per-request timeout for backend calls.
    pub request_timeout_secs: u64,
    /// Product tile carousel.
    #[serde(default = "tiles_default", deserialize_with = "tiles_section")]
    pub tiles: ViewerConfig,
    /// Recommended-options carousel.
    #[serde(
        default = "suggested_options_default",
        deserialize_with = "suggested_options_section"
    )]
    pub suggested_options: ViewerConfig,
}

fn tiles_default() -> ViewerConfig {
    ViewerConfig::tile_defaults()
}

fn suggested_options_default() -> ViewerConfig {
    ViewerConfig::suggested_options_defaults()
}

fn tiles_section<'de, D>(deserializer: D) -> Result<ViewerConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = ViewerOverrides::deserialize(deserializer)?;
    Ok(overrides.apply(ViewerConfig::tile_defaults()))
}

fn suggested_options_section<'de, D>(
    deserializer: D,
) -> Result<ViewerConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = ViewerOverrides::deserialize(deserializer)?;
    Ok(overrides.apply(ViewerConfig::suggested_options_defaults()))
}

/// A viewer table as written in a config file: only the fields present
/// replace the preset's values.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ViewerOverrides {
    pub page_size: Option<usize>,
    pub paginate: Option<bool>,
    pub tick_interval_ms: Option<u64>,
    pub gesture_threshold: Option<f32>,
    pub gesture_debounce_ms: Option<u64>,
    pub visibility_threshold: Option<f32>,
    pub aspect_ratio: Option<AspectRatio>,
    pub wrap_mode: Option<WrapMode>,
    pub autoplay: Option<bool>,
}

impl ViewerOverrides {
    pub fn apply(self, preset: ViewerConfig) -> ViewerConfig {
        ViewerConfig {
            page_size: self.page_size.unwrap_or(preset.page_size),
            paginate: self.paginate.unwrap_or(preset.paginate),
            tick_interval_ms: self
                .tick_interval_ms
                .unwrap_or(preset.tick_interval_ms),
            gesture_threshold: self
                .gesture_threshold
                .unwrap_or(preset.gesture_threshold),
            gesture_debounce_ms: self
                .gesture_debounce_ms
                .unwrap_or(preset.gesture_debounce_ms),
            visibility_threshold: self
                .visibility_threshold
                .unwrap_or(preset.visibility_threshold),
            aspect_ratio: self.aspect_ratio.unwrap_or(preset.aspect_ratio),
            wrap_mode: self.wrap_mode.unwrap_or(preset.wrap_mode),
            autoplay: self.autoplay.unwrap_or(preset.autoplay),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            tiles: tiles_default(),
            suggested_options: suggested_options_default(),
        }
    }
}

impl WidgetConfig {
    pub fn viewer_for(&self, kind: ItemKind) -> ViewerConfig {
        match kind {
            ItemKind::Tile => self.tiles,
            ItemKind::SuggestedOption => self.suggested_options,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Environment overrides applied on top of whatever source was loaded:
    /// `TILECHAT_API_URL`, `TILECHAT_TICK_INTERVAL_MS` (both viewers) and
    /// `TILECHAT_AUTOPLAY` (both viewers).
    pub fn apply_overrides<F>(&mut self, lookup: &F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        use crate::util::{non_empty, parse_bool};

        if let Some(url) = non_empty(lookup, "TILECHAT_API_URL") {
            self.api_base_url = url;
        }

        if let Some(raw) = non_empty(lookup, "TILECHAT_TICK_INTERVAL_MS") {
            let ms: u64 = raw.parse().map_err(|err| {
                anyhow::anyhow!(
                    "invalid TILECHAT_TICK_INTERVAL_MS {raw:?}: {err}"
                )
            })?;
            self.tiles.tick_interval_ms = ms;
            self.suggested_options.tick_interval_ms = ms;
        }

        if let Some(raw) = non_empty(lookup, "TILECHAT_AUTOPLAY") {
            let autoplay = parse_bool(&raw).ok_or_else(|| {
                anyhow::anyhow!("invalid TILECHAT_AUTOPLAY {raw:?}")
            })?;
            self.tiles.autoplay = autoplay;
            self.suggested_options.autoplay = autoplay;
        }

        Ok(())
    }
}
