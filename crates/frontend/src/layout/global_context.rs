use contracts::domain::cart::Cart;
use contracts::domain::menu::MenuCatalog;
use leptos::prelude::*;

/// App-wide state shared through context: the in-memory order.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub cart: RwSignal<Cart>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
        }
    }

    pub fn add_to_cart(&self, item_id: u32) {
        self.cart.update(|cart| cart.add_item(item_id));
        log::debug!(
            "Added item {} to order ({} total)",
            item_id,
            self.cart.with_untracked(Cart::total_count)
        );
    }

    /// "N items" text for the header, `None` while the order is empty
    pub fn cart_badge(&self) -> Option<String> {
        self.cart.with(Cart::badge_label)
    }

    pub fn cart_subtotal(&self) -> String {
        let catalog = MenuCatalog::standard();
        contracts::domain::menu::format_price(self.cart.with(|cart| cart.subtotal_cents(&catalog)))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
