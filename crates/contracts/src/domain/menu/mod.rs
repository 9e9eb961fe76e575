pub mod catalog;
pub mod item;
pub mod period;
pub mod selection;
pub mod snapshot;

pub use catalog::{CatalogError, CategoryFilter, MenuCatalog, ALL_CATEGORIES};
pub use item::{format_price, MenuItem, MENU_ITEMS};
pub use period::{MealPeriod, TimeWindow, MEAL_PERIODS};
pub use selection::{ActiveSelection, OverridePolicy};
pub use snapshot::{MealPeriodDto, MenuItemDto, MenuSnapshot};
