//! Category → size → tiles lookup, as the chat script performs it

use anyhow::{Context, anyhow, bail};
use tilechat_model::Item;
use tilechat_model::catalogue::{canonical_category, wire_category, wire_size};

use crate::api_client::CatalogApi;

/// Tiles fetched for one category/size pick.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSelection {
    /// Catalogue label, e.g. `Swimming Pool-tiles`.
    pub category: String,
    /// Size as sent to the backend, e.g. `600x600 mm ft`.
    pub size: String,
    pub items: Vec<Item>,
}

/// Resolve `category` against the catalogue, pick a size (the first one the
/// backend offers when `size` is `None`) and fetch the matching tiles.
///
/// Both requests carry the backend's wire forms of category and size. A
/// "not found" answer from the tiles endpoint yields an empty list.
pub async fn load_tiles(
    api: &dyn CatalogApi,
    category: &str,
    size: Option<&str>,
) -> anyhow::Result<TileSelection> {
    let category = canonical_category(category)
        .ok_or_else(|| anyhow!("unknown tile category '{category}'"))?
        .to_string();
    let wire = wire_category(&category);

    let size = match size.map(str::trim).filter(|s| !s.is_empty()) {
        Some(size) => wire_size(size)
            .ok_or_else(|| anyhow!("invalid tile size '{size}'"))?,
        None => {
            let sizes = api.fetch_sizes(&wire).await.with_context(|| {
                format!("failed to list sizes for {category}")
            })?;
            let Some(first) = sizes.into_iter().find_map(|s| wire_size(&s))
            else {
                bail!("no sizes available for {category}");
            };
            log::info!("No size given, using {first} for {category}");
            first
        }
    };

    let items = match api.fetch_tiles(&wire, &size).await {
        Ok(items) => items,
        Err(err) if err.is_not_found() => {
            log::info!("No tiles for {category} / {size}");
            Vec::new()
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to fetch tiles for {category} / {size}")
            });
        }
    };

    Ok(TileSelection {
        category,
        size,
        items,
    })
}
