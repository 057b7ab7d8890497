//! Typed chat-script actions.
//!
//! Menu buttons used to carry formatted string tokens (`STATE_West_Bengal`,
//! `SALES_SIZE600x600`, ...). [`ChatAction`] is the typed form; the legacy
//! token syntax is still accepted by `FromStr` and produced by `Display`
//! so persisted conversations and backend payloads keep working.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalogue::canonical_category;
use crate::error::ModelError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChatAction {
    ShowTiles,
    ShowMoreTiles,
    StoreLocator,
    AboutUs,
    ContactUs,
    DownloadCatalogue,
    Careers,
    RecommendTile,
    LocationWise,
    RecommendationSize,
    CustomerWise,
    ShowMoreCustomers,
    /// A tile category such as `Bathroom-tiles`.
    Category(String),
    /// A catalogue size, digits and `x` only (e.g. `600x600`).
    Size(String),
    SalesSize(String),
    State(String),
    City(String),
    Application(String),
    CustomerName(String),
}

const FIXED: &[(&str, ChatAction)] = &[
    ("SHOW_TILES", ChatAction::ShowTiles),
    ("SHOW_MORE_TILES", ChatAction::ShowMoreTiles),
    ("STORE_LOCATOR", ChatAction::StoreLocator),
    ("ABOUT_US", ChatAction::AboutUs),
    ("CONTACT_US", ChatAction::ContactUs),
    ("DOWNLOAD_CATALOGUE", ChatAction::DownloadCatalogue),
    ("CAREERS", ChatAction::Careers),
    ("RECOMMEND_TILE", ChatAction::RecommendTile),
    ("LOCATION_WISE", ChatAction::LocationWise),
    ("RECOMMENDATION_SIZE", ChatAction::RecommendationSize),
    ("CUSTOMER_WISE", ChatAction::CustomerWise),
    ("SHOW_MORE_CUSTOMERS", ChatAction::ShowMoreCustomers),
];

/// Payload prefixes, longest first so `SALES_SIZE` never parses as `SIZE_`.
const PREFIXES: &[&str] = &[
    "CUSTOMER_NAME_",
    "APPLICATION_",
    "SALES_SIZE",
    "STATE_",
    "CITY_",
    "SIZE_",
];

const CATEGORY_SUFFIX: &str = "-TILES";

impl ChatAction {
    /// Category action from a catalogue label.
    pub fn category(label: impl Into<String>) -> Self {
        ChatAction::Category(label.into())
    }

    /// The payload of parameterised actions.
    pub fn payload(&self) -> Option<&str> {
        match self {
            ChatAction::Category(v)
            | ChatAction::Size(v)
            | ChatAction::SalesSize(v)
            | ChatAction::State(v)
            | ChatAction::City(v)
            | ChatAction::Application(v)
            | ChatAction::CustomerName(v) => Some(v),
            _ => None,
        }
    }

    fn with_prefix(
        prefix: &'static str,
        raw: &str,
    ) -> Result<Self, ModelError> {
        let value: String = if prefix == "SIZE_" {
            raw.chars()
                .filter(|c| c.is_ascii_digit() || *c == 'x')
                .collect()
        } else {
            decode(raw)
        };
        if value.is_empty() {
            return Err(ModelError::EmptyPayload(prefix));
        }
        Ok(match prefix {
            "CUSTOMER_NAME_" => ChatAction::CustomerName(value),
            "APPLICATION_" => ChatAction::Application(value),
            "SALES_SIZE" => ChatAction::SalesSize(value),
            "STATE_" => ChatAction::State(value),
            "CITY_" => ChatAction::City(value),
            _ => ChatAction::Size(value),
        })
    }
}

fn decode(raw: &str) -> String {
    raw.replace('_', " ").trim().to_string()
}

fn encode(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}

impl FromStr for ChatAction {
    type Err = ModelError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        if let Some((_, action)) = FIXED.iter().find(|(t, _)| *t == token) {
            return Ok(action.clone());
        }
        // The careers button historically used its label as the token.
        if token.starts_with("Careers") {
            return Ok(ChatAction::Careers);
        }

        for prefix in PREFIXES {
            if let Some(rest) = token.strip_prefix(prefix) {
                return ChatAction::with_prefix(prefix, rest);
            }
        }

        if token.to_ascii_uppercase().ends_with(CATEGORY_SUFFIX) {
            let label = canonical_category(token)
                .map(str::to_string)
                .unwrap_or_else(|| decode(token));
            return Ok(ChatAction::Category(label));
        }

        Err(ModelError::UnknownAction(token.to_string()))
    }
}

impl fmt::Display for ChatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((token, _)) = FIXED.iter().find(|(_, a)| a == self) {
            return f.write_str(token);
        }
        match self {
            ChatAction::Category(label) => {
                write!(f, "{}", encode(label).to_ascii_uppercase())
            }
            ChatAction::Size(size) => write!(f, "SIZE_{size}"),
            ChatAction::SalesSize(size) => {
                write!(f, "SALES_SIZE{}", encode(size))
            }
            ChatAction::State(state) => write!(f, "STATE_{}", encode(state)),
            ChatAction::City(city) => write!(f, "CITY_{}", encode(city)),
            ChatAction::Application(app) => {
                write!(f, "APPLICATION_{}", encode(app))
            }
            ChatAction::CustomerName(name) => {
                write!(f, "CUSTOMER_NAME_{}", encode(name))
            }
            // Fixed actions are handled by the table above.
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tokens_parse() {
        assert_eq!("SHOW_TILES".parse(), Ok(ChatAction::ShowTiles));
        assert_eq!(
            "SHOW_MORE_CUSTOMERS".parse(),
            Ok(ChatAction::ShowMoreCustomers)
        );
        assert_eq!("Careers 🧑🏻‍💼".parse(), Ok(ChatAction::Careers));
    }

    #[test]
    fn sales_size_is_not_mistaken_for_size() {
        assert_eq!(
            "SALES_SIZE600x1200".parse(),
            Ok(ChatAction::SalesSize("600x1200".into()))
        );
        assert_eq!(
            "SIZE_600x600".parse(),
            Ok(ChatAction::Size("600x600".into()))
        );
    }

    #[test]
    fn underscores_decode_to_spaces() {
        assert_eq!(
            "STATE_West_Bengal".parse(),
            Ok(ChatAction::State("West Bengal".into()))
        );
        assert_eq!(
            "CUSTOMER_NAME_Acme_Builders".parse(),
            Ok(ChatAction::CustomerName("Acme Builders".into()))
        );
    }

    #[test]
    fn category_tokens_resolve_to_catalogue_labels() {
        assert_eq!(
            "SWIMMING_POOL-TILES".parse(),
            Ok(ChatAction::Category("Swimming Pool-tiles".into()))
        );
        assert_eq!(
            ChatAction::category("Swimming Pool-tiles").to_string(),
            "SWIMMING_POOL-TILES"
        );
    }

    #[test]
    fn payload_actions_display_as_legacy_tokens() {
        assert_eq!(
            ChatAction::City("New Delhi".into()).to_string(),
            "CITY_New_Delhi"
        );
        assert_eq!(ChatAction::AboutUs.to_string(), "ABOUT_US");
    }

    #[test]
    fn unknown_and_empty_tokens_are_errors() {
        assert_eq!(
            "DANCE".parse::<ChatAction>(),
            Err(ModelError::UnknownAction("DANCE".into()))
        );
        assert_eq!(
            "STATE_".parse::<ChatAction>(),
            Err(ModelError::EmptyPayload("STATE_"))
        );
    }

    #[test]
    fn serde_uses_tagged_form() {
        let json =
            serde_json::to_string(&ChatAction::State("Goa".into())).unwrap();
        assert_eq!(json, r#"{"kind":"state","value":"Goa"}"#);
        let back: ChatAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChatAction::State("Goa".into()));
    }
}
