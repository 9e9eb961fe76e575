use leptos::prelude::*;

/// Small pill: "accent" for the cart counter, "neutral" (default) otherwise
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "accent" => "badge--accent",
        "success" => "badge--success",
        _ => "badge--neutral",
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}
