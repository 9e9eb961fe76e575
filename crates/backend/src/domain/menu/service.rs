use chrono::{Local, Timelike};
use contracts::domain::menu::{CategoryFilter, MenuCatalog, MenuSnapshot};
use contracts::enums::meal_period::MealPeriodId;

/// Menu view for the requested period and category.
///
/// Without a period the server's local time picks one.
pub fn snapshot(period: Option<&str>, category: Option<&str>) -> anyhow::Result<MenuSnapshot> {
    snapshot_at(period, category, &Local::now())
}

pub fn snapshot_at<T: Timelike>(
    period: Option<&str>,
    category: Option<&str>,
    now: &T,
) -> anyhow::Result<MenuSnapshot> {
    let catalog = MenuCatalog::standard();

    let period = match period.map(str::trim).filter(|p| !p.is_empty()) {
        Some(code) => MealPeriodId::from_code(code)
            .ok_or_else(|| anyhow::anyhow!("Unknown meal period: {}", code))?,
        None => catalog.resolve_active_period(now).unwrap_or_default(),
    };
    let category = category
        .map(CategoryFilter::from_label)
        .unwrap_or_default();

    Ok(MenuSnapshot::build(&catalog, period, &category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_resolves_period_from_time() {
        let snapshot = snapshot_at(None, None, &at(19, 0)).unwrap();
        assert_eq!(snapshot.active_period, MealPeriodId::Dinner);
        assert_eq!(snapshot.category, "All");
    }

    #[test]
    fn test_falls_back_to_breakfast_outside_hours() {
        let snapshot = snapshot_at(None, None, &at(2, 0)).unwrap();
        assert_eq!(snapshot.active_period, MealPeriodId::Breakfast);
    }

    #[test]
    fn test_explicit_period_wins_over_time() {
        let snapshot = snapshot_at(Some("tea"), Some("Snacks"), &at(9, 0)).unwrap();
        assert_eq!(snapshot.active_period, MealPeriodId::Tea);
        assert!(snapshot.items.iter().all(|i| i.category == "Snacks"));
    }

    #[test]
    fn test_unknown_period_is_an_error() {
        assert!(snapshot_at(Some("brunch"), None, &at(9, 0)).is_err());
    }
}
