//! Sanity checks applied to every loaded configuration

use thiserror::Error;
use tilechat_core::ViewerConfig;
use url::Url;

use crate::models::WidgetConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid api_base_url '{url}'")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("api_base_url '{url}' must use http or https")]
    UnsupportedScheme { url: String },
    #[error("{viewer}.page_size must be at least 1")]
    ZeroPageSize { viewer: &'static str },
    #[error("{viewer}.tick_interval_ms must be at least 1")]
    ZeroTickInterval { viewer: &'static str },
    #[error("{viewer}.visibility_threshold {value} is outside 0.0..=1.0")]
    VisibilityThreshold { viewer: &'static str, value: f32 },
    #[error("{viewer}.gesture_threshold {value} must be a non-negative number")]
    GestureThreshold { viewer: &'static str, value: f32 },
    #[error("{viewer}.aspect_ratio {ratio} must have positive sides")]
    AspectRatio { viewer: &'static str, ratio: String },
    #[error("request_timeout_secs must be at least 1")]
    ZeroTimeout,
}

impl WidgetConfig {
    /// Reject settings the runtime cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|source| {
            ConfigError::InvalidApiUrl {
                url: self.api_base_url.clone(),
                source,
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: self.api_base_url.clone(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        validate_viewer("tiles", &self.tiles)?;
        validate_viewer("suggested_options", &self.suggested_options)
    }
}

pub fn validate_viewer(
    viewer: &'static str,
    config: &ViewerConfig,
) -> Result<(), ConfigError> {
    if config.paginate && config.page_size == 0 {
        return Err(ConfigError::ZeroPageSize { viewer });
    }
    if config.tick_interval_ms == 0 {
        return Err(ConfigError::ZeroTickInterval { viewer });
    }
    let visibility = config.visibility_threshold;
    if !(0.0..=1.0).contains(&visibility) {
        return Err(ConfigError::VisibilityThreshold {
            viewer,
            value: visibility,
        });
    }
    let gesture = config.gesture_threshold;
    if !gesture.is_finite() || gesture < 0.0 {
        return Err(ConfigError::GestureThreshold {
            viewer,
            value: gesture,
        });
    }
    if config.aspect_ratio.as_f32().is_none() {
        return Err(ConfigError::AspectRatio {
            viewer,
            ratio: config.aspect_ratio.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilechat_core::AspectRatio;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(WidgetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_http_url() {
        let cfg = WidgetConfig {
            api_base_url: "ftp://files.example".into(),
            ..WidgetConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn rejects_unparseable_url() {
        let cfg = WidgetConfig {
            api_base_url: "not a url".into(),
            ..WidgetConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn names_the_offending_viewer() {
        let mut cfg = WidgetConfig::default();
        cfg.suggested_options.visibility_threshold = 1.5;
        let err = cfg.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "suggested_options.visibility_threshold 1.5 is outside 0.0..=1.0"
        );
    }

    #[test]
    fn zero_page_size_only_matters_when_paginating() {
        let mut viewer = ViewerConfig::simple_defaults();
        viewer.page_size = 0;
        assert_eq!(validate_viewer("simple", &viewer), Ok(()));
        viewer.paginate = true;
        assert_eq!(
            validate_viewer("simple", &viewer),
            Err(ConfigError::ZeroPageSize { viewer: "simple" })
        );
    }

    #[test]
    fn degenerate_aspect_ratio() {
        let mut viewer = ViewerConfig::tile_defaults();
        viewer.aspect_ratio = AspectRatio::new(16, 0);
        assert!(matches!(
            validate_viewer("tiles", &viewer),
            Err(ConfigError::AspectRatio { .. })
        ));
    }
}
