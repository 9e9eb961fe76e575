use leptos::prelude::*;

use crate::shared::components::SafeImage;

const PROMISES: [&str; 4] = [
    "House-blend masalas",
    "Fresh, local ingredients",
    "Vegetarian & non-veg",
    "Chai & biscuit pairings",
];

#[component]
pub fn Story() -> impl IntoView {
    view! {
        <section id="story" class="story">
            <div class="section-heading">
                <span class="section-heading__kicker">"Our Journey"</span>
                <h2>"Our Story"</h2>
                <div class="section-heading__rule"></div>
            </div>
            <div class="story__grid">
                <div class="story__text">
                    <p>
                        "Born from Hyderabadi passion and Indian street-food nostalgia, Chai Bisket blends the warmth of traditional "
                        <em>"chai addas"</em>
                        " with a fresh, contemporary vibe. Think banana leaves, coastal breezes and the timeless silhouettes of Charminar, all on your plate, in your city."
                    </p>
                    <ul class="story__promises">
                        {PROMISES.iter().map(|text| view! { <li>{*text}</li> }).collect_view()}
                    </ul>
                </div>
                <figure class="story__image">
                    <SafeImage src="/images/chai-making.jpg" alt="Chai Bisket experience" />
                    <figcaption>
                        <strong>"\"Mass & class, same glass.\""</strong>
                        <span>"Hyderabadi proverb (our vibe)"</span>
                    </figcaption>
                </figure>
            </div>
        </section>
    }
}
