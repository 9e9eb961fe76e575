use std::collections::HashSet;

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::{MenuItem, MENU_ITEMS};
use super::period::{MealPeriod, MEAL_PERIODS};
use crate::enums::meal_period::MealPeriodId;

pub const ALL_CATEGORIES: &str = "All";

/// Category selection: the "All" sentinel or one concrete category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate menu item id {0}")]
    DuplicateItemId(u32),
    #[error("menu item {0} has no available periods")]
    NoPeriods(u32),
    #[error("menu item {0} must have a positive id")]
    ZeroItemId(u32),
    #[error("meal period {0} has a malformed window")]
    MalformedWindow(MealPeriodId),
    #[error("meal period {0} is declared more than once")]
    DuplicatePeriod(MealPeriodId),
}

/// Immutable view over the item and meal period tables.
///
/// All operations are pure; the tables are process-wide statics and are
/// never mutated.
#[derive(Debug, Clone, Copy)]
pub struct MenuCatalog {
    items: &'static [MenuItem],
    periods: &'static [MealPeriod],
}

impl MenuCatalog {
    pub const fn new(items: &'static [MenuItem], periods: &'static [MealPeriod]) -> Self {
        Self { items, periods }
    }

    /// The restaurant's built-in catalog
    pub fn standard() -> Self {
        Self::new(&MENU_ITEMS, &MEAL_PERIODS)
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    pub fn periods(&self) -> &'static [MealPeriod] {
        self.periods
    }

    pub fn item(&self, id: u32) -> Option<&'static MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn period(&self, id: MealPeriodId) -> Option<&'static MealPeriod> {
        self.periods.iter().find(|p| p.id == id)
    }

    /// First period, in declaration order, whose window contains the
    /// minute of day. `None` for gaps such as early morning or late night.
    pub fn resolve_minute(&self, minute_of_day: u16) -> Option<MealPeriodId> {
        self.periods
            .iter()
            .find(|p| p.window.contains(minute_of_day))
            .map(|p| p.id)
    }

    pub fn resolve_active_period<T: Timelike>(&self, now: &T) -> Option<MealPeriodId> {
        let total_minutes = now.hour() * 60 + now.minute();
        self.resolve_minute(total_minutes as u16)
    }

    /// "All" followed by the categories offered in `period`, first-seen order
    pub fn list_categories(&self, period: MealPeriodId) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut categories = vec![CategoryFilter::All];
        for item in self.items.iter().filter(|i| i.is_available_in(period)) {
            if seen.insert(item.category) {
                categories.push(CategoryFilter::Only(item.category.to_string()));
            }
        }
        categories
    }

    /// Items offered in `period` that match `category`, in catalog order
    pub fn filter_items(
        &self,
        period: MealPeriodId,
        category: &CategoryFilter,
    ) -> Vec<&'static MenuItem> {
        self.items
            .iter()
            .filter(|item| item.is_available_in(period) && category.matches(item.category))
            .collect()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut period_ids = HashSet::new();
        for period in self.periods {
            if !period.window.is_well_formed() {
                return Err(CatalogError::MalformedWindow(period.id));
            }
            if !period_ids.insert(period.id) {
                return Err(CatalogError::DuplicatePeriod(period.id));
            }
        }

        let mut item_ids = HashSet::new();
        for item in self.items {
            if item.id == 0 {
                return Err(CatalogError::ZeroItemId(item.id));
            }
            if !item_ids.insert(item.id) {
                return Err(CatalogError::DuplicateItemId(item.id));
            }
            if item.available_periods.is_empty() {
                return Err(CatalogError::NoPeriods(item.id));
            }
        }
        Ok(())
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
