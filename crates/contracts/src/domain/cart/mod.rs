use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: u32,
    pub quantity: u32,
}

/// In-memory order lines for one browsing session. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the existing line or append a new one; lines keep
    /// first-add order.
    pub fn add_item(&mut self, item_id: u32) {
        match self.lines.iter_mut().find(|line| line.item_id == item_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item_id,
                quantity: 1,
            }),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Badge text; `None` hides the badge
    pub fn badge_label(&self) -> Option<String> {
        match self.total_count() {
            0 => None,
            1 => Some("1 item".to_string()),
            n => Some(format!("{} items", n)),
        }
    }

    /// Sum of line prices; ids missing from the catalog count as zero
    pub fn subtotal_cents(&self, catalog: &MenuCatalog) -> u32 {
        self.lines
            .iter()
            .filter_map(|line| catalog.item(line.item_id).map(|i| i.price_cents * line.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_add_increments_single_line() {
        let mut cart = Cart::new();
        cart.add_item(3);
        cart.add_item(3);
        assert_eq!(cart.lines(), &[CartLine { item_id: 3, quantity: 2 }]);
    }

    #[test]
    fn test_total_count_and_order() {
        let mut cart = Cart::new();
        cart.add_item(1);
        cart.add_item(2);
        cart.add_item(1);
        assert_eq!(cart.total_count(), 3);
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_badge_label() {
        let mut cart = Cart::new();
        assert_eq!(cart.badge_label(), None);
        cart.add_item(5);
        assert_eq!(cart.badge_label().as_deref(), Some("1 item"));
        cart.add_item(6);
        assert_eq!(cart.badge_label().as_deref(), Some("2 items"));
    }

    #[test]
    fn test_subtotal() {
        let catalog = MenuCatalog::standard();
        let mut cart = Cart::new();
        cart.add_item(1);
        cart.add_item(1);
        cart.add_item(3);
        cart.add_item(99);
        assert_eq!(cart.subtotal_cents(&catalog), 349 * 2 + 1499);
    }
}
