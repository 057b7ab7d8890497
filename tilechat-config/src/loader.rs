use anyhow::{Context, anyhow};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::models::WidgetConfig;
use crate::util::{env_lookup, non_empty, normalize_base_url};

pub const CONFIG_PATH_VAR: &str = "TILECHAT_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "TILECHAT_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "tilechat.toml",
    "tilechat.json",
    "config/tilechat.toml",
    "config/tilechat.json",
];

/// Source that produced the widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("built-in defaults"),
            Self::EnvPath(path) => {
                write!(f, "{CONFIG_PATH_VAR} ({})", path.display())
            }
            Self::EnvInline => f.write_str(CONFIG_JSON_VAR),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: WidgetConfig,
    pub source: ConfigSource,
}

impl ConfigLoad {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$TILECHAT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$TILECHAT_CONFIG_JSON` (inline JSON),
    /// 3) `tilechat.{toml,json}` in the working directory or `config/`,
    /// 4) defaults.
    ///
    /// A `.env` file is read first when present. Individual overrides
    /// (`TILECHAT_API_URL` and friends) are applied on top of the source.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::load_with(&env_lookup, Path::new("."))
    }

    /// Same as [`load_from_env`](Self::load_from_env) with an explicit
    /// variable lookup and a base directory for the default candidates.
    pub fn load_with<F>(lookup: &F, base_dir: &Path) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut config, source) = Self::resolve_source(lookup, base_dir)?;
        config.apply_overrides(lookup)?;
        config.api_base_url = normalize_base_url(&config.api_base_url);
        config
            .validate()
            .with_context(|| format!("invalid configuration from {source}"))?;
        log::debug!("Loaded widget configuration from {source}");
        Ok(Self { config, source })
    }

    fn resolve_source<F>(
        lookup: &F,
        base_dir: &Path,
    ) -> anyhow::Result<(WidgetConfig, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = non_empty(lookup, CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str);
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty(lookup, CONFIG_JSON_VAR) {
            let parsed = parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = find_default_file(base_dir) {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((WidgetConfig::default(), ConfigSource::Default))
    }
}

pub fn load_from_file(path: &Path) -> anyhow::Result<WidgetConfig> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read widget config from {}", path.display())
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents).with_context(|| {
            format!("invalid widget config {}", path.display())
        }),
        Some("toml") | Some("tml") => toml::from_str(&contents).map_err(|err| {
            anyhow!("invalid widget config {}: {}", path.display(), err)
        }),
        _ => parse_from_str(&contents, &path.display().to_string()),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> anyhow::Result<WidgetConfig> {
    // TOML first, then JSON.
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse widget config {}: \
                 toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

pub fn parse_json(raw: &str) -> anyhow::Result<WidgetConfig> {
    serde_json::from_str(raw)
        .map_err(|err| anyhow!("invalid widget config json: {err}"))
}

fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|candidate| base_dir.join(candidate))
        .find(|path| path.exists())
}
