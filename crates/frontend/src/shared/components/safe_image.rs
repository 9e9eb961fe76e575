use leptos::prelude::*;

const BRAND_NAME: &str = "Chai Bisket";

/// Image that swaps itself for a labelled placeholder once loading fails.
///
/// The swap is one-way: a broken image never retries.
#[component]
pub fn SafeImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    /// Text shown on the placeholder; defaults to `alt`
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let label = label.unwrap_or_else(|| alt.clone());

    view! {
        <Show
            when=move || !failed.get()
            fallback={
                let label = label.clone();
                let class = class.clone();
                move || view! {
                    <div class=format!("image-placeholder {}", class) role="img" aria-label=label.clone()>
                        <span class="image-placeholder__label">{label.clone()}</span>
                        <span class="image-placeholder__brand">{BRAND_NAME}</span>
                    </div>
                }
            }
        >
            <img
                src=src.clone()
                alt=alt.clone()
                class=class.clone()
                loading="lazy"
                on:error=move |_| {
                    log::warn!("Image failed to load, showing placeholder");
                    failed.set(true);
                }
            />
        </Show>
    }
}
