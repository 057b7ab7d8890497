//! Scripted chat menus
//!
//! The category picker reuses [`PageWindow`] so "See More" behaves exactly
//! like the carousel's "load more".

use tilechat_model::{ChatAction, TILE_CATEGORIES};

use crate::carousel::PageWindow;

/// Categories shown before the first "See More".
pub const CATEGORY_PAGE_SIZE: usize = 9;
pub const SEE_MORE_LABEL: &str = "See More👈";

/// A button in a bot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: ChatAction,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, action: ChatAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Options of the welcome message.
pub fn main_menu() -> Vec<MenuOption> {
    vec![
        MenuOption::new("Show Tiles 🧱", ChatAction::ShowTiles),
        MenuOption::new("Store Locator 🏪", ChatAction::StoreLocator),
        MenuOption::new("About us 🤝", ChatAction::AboutUs),
        MenuOption::new("Contact us 📞", ChatAction::ContactUs),
        MenuOption::new(
            "Download Catalogue 📑",
            ChatAction::DownloadCatalogue,
        ),
        MenuOption::new("Careers 🧑🏻‍💼", ChatAction::Careers),
        MenuOption::new(
            "Confused? Shall I recommend tiles? 🤔",
            ChatAction::RecommendTile,
        ),
    ]
}

/// Options offered after "recommend tiles".
pub fn recommendation_menu() -> Vec<MenuOption> {
    vec![
        MenuOption::new("State/City-wise", ChatAction::LocationWise),
        MenuOption::new("Size-wise", ChatAction::RecommendationSize),
        MenuOption::new("Customer-wise", ChatAction::CustomerWise),
    ]
}

/// Time-of-day salutation for a local hour (0..=23).
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=15 => "Good afternoon",
        16..=19 => "Good evening",
        _ => "Good night",
    }
}

/// Windowed list of tile categories.
#[derive(Debug, Clone)]
pub struct CategoryMenu {
    categories: Vec<String>,
    window: PageWindow,
}

impl Default for CategoryMenu {
    fn default() -> Self {
        Self::new(TILE_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}

impl CategoryMenu {
    pub fn new(categories: Vec<String>) -> Self {
        let mut window = PageWindow::new(CATEGORY_PAGE_SIZE);
        window.initialize(categories.len());
        Self { categories, window }
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more()
    }

    /// Reveal the next page. Returns false when everything is shown.
    pub fn show_more(&mut self) -> bool {
        self.window.load_more()
    }

    pub fn visible(&self) -> &[String] {
        &self.categories[self.window.range()]
    }

    /// Buttons for the current window, with a trailing "See More" while
    /// categories remain hidden.
    pub fn options(&self) -> Vec<MenuOption> {
        let mut options: Vec<MenuOption> = self
            .visible()
            .iter()
            .map(|label| {
                let action = ChatAction::category(label.clone());
                MenuOption::new(label.clone(), action)
            })
            .collect();
        if self.has_more() {
            options.push(MenuOption::new(
                SEE_MORE_LABEL,
                ChatAction::ShowMoreTiles,
            ));
        }
        options
    }
}
