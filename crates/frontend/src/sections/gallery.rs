use leptos::prelude::*;

use crate::shared::components::SafeImage;

const GALLERY_SIZE: usize = 8;
const INSTAGRAM_URL: &str = "https://instagram.com/chaibisket_eats";

#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section id="gallery" class="gallery">
            <div class="section-heading">
                <h2>"Moments & Mood"</h2>
                <p>"Swipe through the vibe. Tag us on Instagram to get featured!"</p>
            </div>
            <div class="gallery__grid">
                {(1..=GALLERY_SIZE)
                    .map(|n| view! {
                        <div class="gallery__tile">
                            <SafeImage
                                src=format!("/images/gallery-{}.jpg", n)
                                alt=format!("Chai Bisket gallery {}", n)
                            />
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="gallery__more">
                <a class="button button--outline" href=INSTAGRAM_URL target="_blank" rel="noreferrer">
                    "Follow on Instagram"
                </a>
            </div>
        </section>
    }
}
