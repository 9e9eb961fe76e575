use serde::Serialize;

use crate::enums::meal_period::MealPeriodId::{self, Breakfast, Dinner, Lunch, Tea};

/// Menu item. Prices are held in cents to keep two-place precision exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
    pub category: &'static str,
    pub image: &'static str,
    pub available_periods: &'static [MealPeriodId],
}

impl MenuItem {
    pub fn is_available_in(&self, period: MealPeriodId) -> bool {
        self.available_periods.contains(&period)
    }

    /// "$14.99"
    pub fn price_display(&self) -> String {
        format_price(self.price_cents)
    }
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub static MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        id: 1,
        name: "Masala Chai",
        description: "Slow-brewed, aromatic, soul-warming.",
        price_cents: 349,
        category: "Beverages",
        image: "/images/iran chaai.png",
        available_periods: &[Breakfast, Lunch, Dinner],
    },
    MenuItem {
        id: 2,
        name: "Osmania Biscuits",
        description: "Crisp, buttery, perfect with chai.",
        price_cents: 499,
        category: "Snacks",
        image: "/images/osimania biskets.png",
        available_periods: &[Breakfast, Tea],
    },
    MenuItem {
        id: 3,
        name: "Hyderabadi Biryani",
        description: "Long-grain basmati, rich masala, royal aroma.",
        price_cents: 1499,
        category: "Main Course",
        image: "/images/Hyderabadi Biryani.jpg",
        available_periods: &[Lunch, Dinner],
    },
    MenuItem {
        id: 4,
        name: "Bun Maska",
        description: "Pillow-soft bun, lashings of butter.",
        price_cents: 599,
        category: "Snacks",
        image: "/images/Bun Maska.jpg",
        available_periods: &[Breakfast, Tea],
    },
    MenuItem {
        id: 5,
        name: "Vada Pav",
        description: "Mumbai's favorite, fiery & fun.",
        price_cents: 699,
        category: "Street Food",
        image: "/images/Vada Pav.jpg",
        available_periods: &[Lunch, Dinner],
    },
    MenuItem {
        id: 6,
        name: "Chicken 65",
        description: "Crispy, tangy, dangerously addictive.",
        price_cents: 1299,
        category: "Appetizers",
        image: "/images/Chicken 65.jpg",
        available_periods: &[Lunch, Dinner],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(349), "$3.49");
        assert_eq!(format_price(1499), "$14.99");
        assert_eq!(format_price(1005), "$10.05");
    }

    #[test]
    fn test_availability() {
        let chai = &MENU_ITEMS[0];
        assert!(chai.is_available_in(Breakfast));
        assert!(!chai.is_available_in(Tea));
    }
}
