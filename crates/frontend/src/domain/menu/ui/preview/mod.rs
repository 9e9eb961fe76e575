use contracts::domain::menu::MenuCatalog;
use leptos::prelude::*;

use crate::shared::components::{CardAnimated, SafeImage};

/// "Signature Menu" teaser: every catalog dish, regardless of the hour
#[component]
pub fn MenuPreview() -> impl IntoView {
    let catalog = MenuCatalog::standard();

    view! {
        <section id="signature" class="preview-section">
            <div class="section-heading">
                <h2>"Signature Menu"</h2>
                <p>"Street-style favorites with a modern twist. 100% vibe, 100% flavor."</p>
            </div>
            <div class="preview-grid">
                {catalog
                    .items()
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! {
                        <CardAnimated delay_ms={index as u32 * 60} class="preview-card">
                            <div class="preview-card__title">
                                <span>{item.name}</span>
                                <span class="preview-card__price">{item.price_display()}</span>
                            </div>
                            <p>{item.description}</p>
                            <div class="preview-card__image">
                                <SafeImage src=item.image alt=item.name />
                            </div>
                        </CardAnimated>
                    })
                    .collect_view()}
            </div>
            <div class="preview-section__more">
                <a class="button button--outline" href="#menu">"View Full Menu & Prices"</a>
            </div>
        </section>
    }
}
