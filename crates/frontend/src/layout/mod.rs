pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page frame: header, page content, footer
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <header::Header />
        <main class="site-main">
            {children()}
        </main>
        <footer::Footer />
    }
}
