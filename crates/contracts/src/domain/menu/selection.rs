use chrono::Timelike;
use serde::{Deserialize, Serialize};

use super::catalog::{CategoryFilter, MenuCatalog};
use super::item::MenuItem;
use crate::enums::meal_period::MealPeriodId;

/// How long a manual period pick survives clock ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OverridePolicy {
    /// The next tick replaces a manual pick with the clock-derived period
    #[default]
    Transient,
    /// A manual pick holds until `clear_override` is called
    Sticky,
}

/// The (period, category) pair that drives what the menu shows.
///
/// Clock ticks and user clicks are serialized by the caller; whichever
/// arrives last wins, subject to the override policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSelection {
    current_period: MealPeriodId,
    category: CategoryFilter,
    policy: OverridePolicy,
    pinned: bool,
}

impl ActiveSelection {
    /// Breakfast until the first tick resolves the real period
    pub fn new(policy: OverridePolicy) -> Self {
        Self {
            current_period: MealPeriodId::default(),
            category: CategoryFilter::All,
            policy,
            pinned: false,
        }
    }

    /// Initial selection for the given wall-clock time
    pub fn at<T: Timelike>(catalog: &MenuCatalog, now: &T, policy: OverridePolicy) -> Self {
        let mut selection = Self::new(policy);
        selection.tick(catalog, now);
        selection
    }

    pub fn current_period(&self) -> MealPeriodId {
        self.current_period
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn policy(&self) -> OverridePolicy {
        self.policy
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Re-resolve from the clock. A gap keeps the previous period.
    /// Returns true when the active period changed.
    pub fn tick<T: Timelike>(&mut self, catalog: &MenuCatalog, now: &T) -> bool {
        if self.pinned && self.policy == OverridePolicy::Sticky {
            return false;
        }
        self.pinned = false;
        match catalog.resolve_active_period(now) {
            Some(period) => self.set_period(period),
            None => false,
        }
    }

    /// Manual tab click
    pub fn select_period(&mut self, period: MealPeriodId) -> bool {
        self.pinned = true;
        self.set_period(period)
    }

    /// Drop a manual pick; the next tick decides again
    pub fn clear_override(&mut self) {
        self.pinned = false;
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn categories(&self, catalog: &MenuCatalog) -> Vec<CategoryFilter> {
        catalog.list_categories(self.current_period)
    }

    pub fn visible_items(&self, catalog: &MenuCatalog) -> Vec<&'static MenuItem> {
        catalog.filter_items(self.current_period, &self.category)
    }

    fn set_period(&mut self, period: MealPeriodId) -> bool {
        if period == self.current_period {
            return false;
        }
        self.current_period = period;
        self.category = CategoryFilter::All;
        true
    }
}

impl Default for ActiveSelection {
    fn default() -> Self {
        Self::new(OverridePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use MealPeriodId::{Breakfast, Dinner, Lunch, Tea};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_initial_selection_resolves_clock() {
        let catalog = MenuCatalog::standard();
        let selection = ActiveSelection::at(&catalog, &at(19, 0), OverridePolicy::Transient);
        assert_eq!(selection.current_period(), Dinner);
        assert_eq!(selection.category(), &CategoryFilter::All);
    }

    #[test]
    fn test_initial_selection_in_gap_defaults_to_breakfast() {
        let catalog = MenuCatalog::standard();
        let selection = ActiveSelection::at(&catalog, &at(3, 0), OverridePolicy::Transient);
        assert_eq!(selection.current_period(), Breakfast);
    }

    #[test]
    fn test_gap_retains_previous_period() {
        let catalog = MenuCatalog::standard();
        let mut selection = ActiveSelection::at(&catalog, &at(21, 0), OverridePolicy::Transient);
        assert_eq!(selection.current_period(), Dinner);

        assert!(!selection.tick(&catalog, &at(23, 0)));
        assert_eq!(selection.current_period(), Dinner);
        // Retention is idempotent
        assert!(!selection.tick(&catalog, &at(7, 0)));
        assert_eq!(selection.current_period(), Dinner);
    }

    #[test]
    fn test_manual_pick_is_overwritten_on_next_tick() {
        let catalog = MenuCatalog::standard();
        let mut selection = ActiveSelection::at(&catalog, &at(12, 0), OverridePolicy::Transient);
        assert_eq!(selection.current_period(), Lunch);

        selection.select_period(Dinner);
        assert_eq!(selection.current_period(), Dinner);

        selection.tick(&catalog, &at(12, 1));
        assert_eq!(selection.current_period(), Lunch);
    }

    #[test]
    fn test_manual_pick_in_gap_survives_tick() {
        let catalog = MenuCatalog::standard();
        let mut selection = ActiveSelection::at(&catalog, &at(23, 0), OverridePolicy::Transient);
        selection.select_period(Tea);
        selection.tick(&catalog, &at(23, 1));
        assert_eq!(selection.current_period(), Tea);
    }

    #[test]
    fn test_sticky_pick_survives_ticks_until_cleared() {
        let catalog = MenuCatalog::standard();
        let mut selection = ActiveSelection::at(&catalog, &at(12, 0), OverridePolicy::Sticky);
        selection.select_period(Tea);

        assert!(!selection.tick(&catalog, &at(12, 1)));
        assert_eq!(selection.current_period(), Tea);
        assert!(selection.is_pinned());

        selection.clear_override();
        assert!(selection.tick(&catalog, &at(12, 2)));
        assert_eq!(selection.current_period(), Lunch);
    }

    #[test]
    fn test_category_resets_when_period_changes() {
        let catalog = MenuCatalog::standard();
        let mut selection = ActiveSelection::at(&catalog, &at(9, 0), OverridePolicy::Transient);
        selection.select_category(CategoryFilter::from_label("Snacks"));
        assert_eq!(selection.visible_items(&catalog).len(), 2);

        // Same period again keeps the filter
        selection.tick(&catalog, &at(9, 1));
        assert_eq!(selection.category().label(), "Snacks");

        selection.tick(&catalog, &at(12, 0));
        assert_eq!(selection.current_period(), Lunch);
        assert_eq!(selection.category(), &CategoryFilter::All);
    }

    #[test]
    fn test_selecting_current_period_keeps_category() {
        let catalog = MenuCatalog::standard();
        let mut selection = ActiveSelection::at(&catalog, &at(9, 0), OverridePolicy::Transient);
        selection.select_category(CategoryFilter::from_label("Beverages"));
        assert!(!selection.select_period(Breakfast));
        assert_eq!(selection.category().label(), "Beverages");
    }
}
