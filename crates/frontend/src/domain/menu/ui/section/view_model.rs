use std::time::Duration;

use chrono::NaiveTime;
use contracts::domain::menu::{
    ActiveSelection, CategoryFilter, MealPeriod, MenuCatalog, MenuItem, OverridePolicy,
};
use contracts::enums::meal_period::MealPeriodId;
use leptos::prelude::*;

use crate::shared::date_utils::local_time;

/// How often the clock re-resolves the active period
pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// ViewModel for the interactive menu section
#[derive(Clone, Copy)]
pub struct MenuViewModel {
    pub selection: RwSignal<ActiveSelection>,
    /// Last clock reading; `None` until the first tick
    pub now: RwSignal<Option<NaiveTime>>,
}

impl MenuViewModel {
    pub fn new(policy: OverridePolicy) -> Self {
        Self {
            selection: RwSignal::new(ActiveSelection::new(policy)),
            now: RwSignal::new(None),
        }
    }

    fn catalog() -> MenuCatalog {
        MenuCatalog::standard()
    }

    /// Resolve once now, then every [`TICK_INTERVAL`] until the owner is
    /// disposed.
    pub fn start_clock(&self) {
        let vm = *self;
        vm.tick();

        match set_interval_with_handle(move || vm.tick(), TICK_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::error!("Failed to start menu clock: {:?}", e),
        }
    }

    fn tick(&self) {
        let now = local_time();
        self.now.set(Some(now));
        let catalog = Self::catalog();
        self.selection.update(|selection| {
            if selection.tick(&catalog, &now) {
                log::info!("Menu switched to {}", selection.current_period());
            }
        });
    }

    /// Skeleton until the clock has been read once
    pub fn is_ready(&self) -> bool {
        self.now.with(Option::is_some)
    }

    pub fn clock_label(&self) -> String {
        self.now
            .get()
            .map(|t| t.format("%I:%M %p").to_string())
            .unwrap_or_default()
    }

    pub fn active_period(&self) -> MealPeriodId {
        self.selection.with(ActiveSelection::current_period)
    }

    pub fn periods(&self) -> &'static [MealPeriod] {
        Self::catalog().periods()
    }

    pub fn select_period(&self, period: MealPeriodId) {
        self.selection.update(|selection| {
            selection.select_period(period);
        });
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        let catalog = Self::catalog();
        self.selection.with(|selection| selection.categories(&catalog))
    }

    pub fn is_category_active(&self, category: &CategoryFilter) -> bool {
        self.selection.with(|selection| selection.category() == category)
    }

    pub fn select_category(&self, category: CategoryFilter) {
        self.selection
            .update(|selection| selection.select_category(category));
    }

    pub fn visible_items(&self) -> Vec<&'static MenuItem> {
        let catalog = Self::catalog();
        self.selection
            .with(|selection| selection.visible_items(&catalog))
    }
}
