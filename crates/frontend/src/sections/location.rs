use leptos::prelude::*;

use crate::shared::icons::icon;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3309.125603227977!2d-84.2151689243235!3d34.18057607322581!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x88f59f6c9bafb7b9%3A0x8c5f6b6b6b6b6b6b6!2s911%20Market%20Pl%20Blvd%20%23L%2C%20Cumming%2C%20GA%2030041!5e0!3m2!1sen!2sus!4v1623456789012!5m2!1sen!2sus";
const DIRECTIONS_URL: &str =
    "https://www.google.com/maps/dir//911+Market+Pl+Blvd+%23L,+Cumming,+GA+30041";

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Mon-Thu", "11:00 AM - 9:30 PM"),
    ("Fri-Sat", "11:00 AM - 10:30 PM"),
    ("Sun", "11:00 AM - 9:00 PM"),
];

#[component]
pub fn LocationHours() -> impl IntoView {
    view! {
        <section id="location" class="location">
            <div class="location__card">
                <h2>"Visit Us"</h2>
                <div class="location__row">
                    {icon("map-pin")}
                    <div>
                        <strong>"911 Market Pl Blvd, Suite L"</strong>
                        <div>"Cumming, GA 30041"</div>
                        <a href=DIRECTIONS_URL target="_blank" rel="noopener noreferrer">"Get Directions"</a>
                    </div>
                </div>
                <div class="location__row">
                    {icon("clock")}
                    <div>
                        <strong>"Hours"</strong>
                        {OPENING_HOURS
                            .iter()
                            .map(|(days, hours)| view! { <div>{format!("{}: {}", days, hours)}</div> })
                            .collect_view()}
                    </div>
                </div>
                <div class="location__row">
                    {icon("phone")}
                    <div>
                        <strong>"Call Us"</strong>
                        <a href="tel:+17705550123">"(770) 555-0123"</a>
                    </div>
                </div>
                <div class="location__actions">
                    <a class="button button--primary" href="#menu">"View Menu"</a>
                    <a class="button button--outline" href="#contact">"Catering Inquiries"</a>
                </div>
            </div>
            <div class="location__map">
                <iframe
                    src=MAP_EMBED_URL
                    title="Chai Bisket Location"
                    {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                    referrerpolicy="no-referrer-when-downgrade"
                    allowfullscreen=true
                ></iframe>
            </div>
        </section>
    }
}
