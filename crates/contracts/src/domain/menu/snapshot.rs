use serde::{Deserialize, Serialize};

use super::catalog::{CategoryFilter, MenuCatalog};
use super::item::MenuItem;
use super::period::MealPeriod;
use crate::enums::meal_period::MealPeriodId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemDto {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub price: String,
    pub category: String,
    pub image: String,
    pub available_periods: Vec<MealPeriodId>,
}

impl From<&MenuItem> for MenuItemDto {
    fn from(item: &MenuItem) -> Self {
        MenuItemDto {
            id: item.id,
            name: item.name.to_string(),
            description: item.description.to_string(),
            price_cents: item.price_cents,
            price: item.price_display(),
            category: item.category.to_string(),
            image: item.image.to_string(),
            available_periods: item.available_periods.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPeriodDto {
    pub id: MealPeriodId,
    pub display_name: String,
    pub display_time_range: String,
    pub start_minute: u16,
    pub end_minute: u16,
}

impl From<&MealPeriod> for MealPeriodDto {
    fn from(p: &MealPeriod) -> Self {
        MealPeriodDto {
            id: p.id,
            display_name: p.display_name.to_string(),
            display_time_range: p.display_time_range.to_string(),
            start_minute: p.window.start,
            end_minute: p.window.end,
        }
    }
}

/// Serializable menu view for one (period, category) selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSnapshot {
    pub active_period: MealPeriodId,
    pub category: String,
    pub periods: Vec<MealPeriodDto>,
    pub categories: Vec<String>,
    pub items: Vec<MenuItemDto>,
}

impl MenuSnapshot {
    pub fn build(catalog: &MenuCatalog, period: MealPeriodId, category: &CategoryFilter) -> Self {
        MenuSnapshot {
            active_period: period,
            category: category.label().to_string(),
            periods: catalog.periods().iter().map(MealPeriodDto::from).collect(),
            categories: catalog
                .list_categories(period)
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            items: catalog
                .filter_items(period, category)
                .into_iter()
                .map(MenuItemDto::from)
                .collect(),
        }
    }
}
