use leptos::prelude::*;

const DISHES: [&str; 8] = [
    "Irani Chai",
    "Osmania Biscuits",
    "Hyderabadi Biryani",
    "Samosa & Cutlets",
    "Bun Maska",
    "Vada Pav",
    "Chicken 65",
    "Kulfi & Falooda",
];

/// Scrolling dish names; the list is rendered twice so the CSS loop is seamless
#[component]
pub fn Marquee() -> impl IntoView {
    view! {
        <div class="marquee" aria-hidden="true">
            <div class="marquee__track">
                {DISHES
                    .iter()
                    .chain(DISHES.iter())
                    .map(|dish| view! { <span class="marquee__item">{*dish}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
