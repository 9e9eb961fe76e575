use serde::Serialize;

use crate::enums::meal_period::MealPeriodId;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Half-open window `[start, end)` in minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: u16,
    pub end: u16,
}

impl TimeWindow {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, minute_of_day: u16) -> bool {
        minute_of_day >= self.start && minute_of_day < self.end
    }

    /// `0 <= start < end <= 1440`
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end && self.end <= MINUTES_PER_DAY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealPeriod {
    pub id: MealPeriodId,
    pub display_name: &'static str,
    pub display_time_range: &'static str,
    pub window: TimeWindow,
}

impl MealPeriod {
    /// Start and end halves of the display range, e.g. ("8:00 AM", "11:30 AM")
    pub fn display_bounds(&self) -> (&'static str, &'static str) {
        self.display_time_range
            .split_once(" - ")
            .unwrap_or((self.display_time_range, ""))
    }
}

/// Lunch and tea overlap in [900, 960); breakfast and lunch in [660, 690).
pub static MEAL_PERIODS: [MealPeriod; 4] = [
    MealPeriod {
        id: MealPeriodId::Breakfast,
        display_name: "BREAKFAST MENU",
        display_time_range: "8:00 AM - 11:30 AM",
        window: TimeWindow::new(8 * 60, 11 * 60 + 30),
    },
    MealPeriod {
        id: MealPeriodId::Lunch,
        display_name: "LUNCH MENU",
        display_time_range: "11:00 AM - 4:00 PM",
        window: TimeWindow::new(11 * 60, 16 * 60),
    },
    MealPeriod {
        id: MealPeriodId::Tea,
        display_name: "TEA TIME",
        display_time_range: "3:00 PM - 6:30 PM",
        window: TimeWindow::new(15 * 60, 18 * 60 + 30),
    },
    MealPeriod {
        id: MealPeriodId::Dinner,
        display_name: "DINNER MENU",
        display_time_range: "6:30 PM - 10:30 PM",
        window: TimeWindow::new(18 * 60 + 30, 22 * 60 + 30),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_half_open() {
        let w = TimeWindow::new(660, 960);
        assert!(!w.contains(659));
        assert!(w.contains(660));
        assert!(w.contains(959));
        assert!(!w.contains(960));
    }

    #[test]
    fn test_builtin_windows() {
        let windows: Vec<(u16, u16)> = MEAL_PERIODS
            .iter()
            .map(|p| (p.window.start, p.window.end))
            .collect();
        assert_eq!(windows, vec![(480, 690), (660, 960), (900, 1110), (1110, 1350)]);
        assert!(MEAL_PERIODS.iter().all(|p| p.window.is_well_formed()));
    }

    #[test]
    fn test_display_bounds() {
        assert_eq!(MEAL_PERIODS[2].display_bounds(), ("3:00 PM", "6:30 PM"));
    }
}
