use leptos::prelude::*;

use crate::shared::components::SafeImage;

const HIGHLIGHTS: [&str; 3] = ["Freshly brewed chai", "Daily specials", "Vegetarian options"];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__copy">
                <span class="hero__pill">
                    <span class="hero__pulse"></span>
                    "Now serving in Cumming, GA"
                </span>
                <h1>
                    "Biryani is an " <span class="hero__accent hero__accent--green">"emotion"</span> ","
                    <br />
                    "chai is for " <span class="hero__accent hero__accent--amber">"mood"</span> "."
                </h1>
                <p class="hero__lead">
                    "From crispy samosas to soul-warming Irani chai, we bring the authentic flavors of India's street food scene to your table."
                </p>
                <div class="hero__actions">
                    <a class="button button--primary" href="#menu">"Explore Our Menu"</a>
                    <a class="button button--outline" href="#contact">"Order Now"</a>
                </div>
                <ul class="hero__highlights">
                    {HIGHLIGHTS.iter().map(|text| view! { <li>{*text}</li> }).collect_view()}
                </ul>
            </div>
            <div class="hero__art">
                <SafeImage src="/images/iran chaai.png" alt="Irani Chai" />
            </div>
        </section>
    }
}
