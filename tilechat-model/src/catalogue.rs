/// Tile categories offered by the chat script, in menu order.
pub const TILE_CATEGORIES: &[&str] = &[
    "Bathroom-tiles",
    "Living-tiles",
    "Kitchen-tiles",
    "Bedroom-tiles",
    "Balcony-tiles",
    "Swimming Pool-tiles",
    "Accent-tiles",
    "Outdoor-tiles",
    "Office-tiles",
    "Pathway-tiles",
    "Dining-tiles",
    "Hospital-tiles",
    "High Traffic-tiles",
    "Bar-tiles",
    "Restaurant-tiles",
    "School & College-tiles",
    "Commercial-tiles",
    "Outdoor Area-tiles",
    "Parking-tiles",
    "Porch-tiles",
    "Automotive-tiles",
    "Airport-tiles",
    "Metro Station-tiles",
    "Warehouse-tiles",
];

/// Unit suffix the backend stores with every size.
pub const SIZE_UNIT_SUFFIX: &str = " mm ft";

/// Look up the catalogue spelling of a category. Case is ignored and `_`,
/// spaces and `-` are interchangeable.
pub fn canonical_category(raw: &str) -> Option<&'static str> {
    let wanted = wire_category(raw);
    TILE_CATEGORIES
        .iter()
        .copied()
        .find(|category| wire_category(category) == wanted)
}

/// Category as the backend indexes it: lowercase with `_` and whitespace
/// runs turned into `-` (`Swimming Pool-tiles` is `swimming-pool-tiles`).
pub fn wire_category(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Size as the backend stores it, e.g. `600x600 mm ft`. Only digits and `x`
/// are kept from `raw`, so an already suffixed size is accepted too.
pub fn wire_size(raw: &str) -> Option<String> {
    let dimensions: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'x')
        .collect();
    if dimensions.is_empty() {
        return None;
    }
    Some(dimensions + SIZE_UNIT_SUFFIX)
}
