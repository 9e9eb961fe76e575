//! Thaw `Card` that fades in when it mounts.
//!
//! The `card-appear` keyframes live in `style/main.css`. Give sibling cards
//! increasing `delay_ms` values for a staggered entrance:
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0>   // first dish
//! <CardAnimated delay_ms=80>  // second dish
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "dish-card".to_string()
    } else {
        format!("dish-card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
