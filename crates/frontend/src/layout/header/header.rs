use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;

/// In-page anchors shown in the navigation bar, in display order
const NAV_LINKS: [(&str, &str); 5] = [
    ("Menu", "/#menu"),
    ("Our Story", "/#story"),
    ("Location & Hours", "/#location"),
    ("Gallery", "/#gallery"),
    ("Contact", "/#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let menu_open = RwSignal::new(false);
    let close_menu = move |_| menu_open.set(false);

    view! {
        <header data-zone="header" class="site-header">
            <div class="site-header__inner">
                <A href="/" attr:class="site-header__brand">
                    {icon("cup")}
                    <span>"Chai Bisket"</span>
                </A>

                <button
                    class="site-header__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class=move || {
                    if menu_open.get() { "site-nav site-nav--open" } else { "site-nav" }
                }>
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| view! {
                            <a class="site-nav__link" href=*href on:click=close_menu>{*label}</a>
                        })
                        .collect_view()}
                    <A href="/login" attr:class="site-nav__link site-nav__link--login">"Login"</A>
                </nav>

                <a class="site-header__cart" href="/#menu" aria-label="Your order">
                    {icon("cart")}
                    {move || ctx.cart_badge().map(|label| view! {
                        <Badge variant="accent">{label}</Badge>
                        <span class="site-header__subtotal">{ctx.cart_subtotal()}</span>
                    })}
                </a>
            </div>
        </header>
    }
}
