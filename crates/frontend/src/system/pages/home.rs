use leptos::prelude::*;

use crate::domain::contact::ui::ContactSection;
use crate::domain::menu::ui::preview::MenuPreview;
use crate::domain::menu::ui::section::MenuSection;
use crate::layout::Shell;
use crate::sections::{Gallery, Hero, LocationHours, Marquee, Story};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Shell>
            <Hero />
            <Marquee />
            <MenuPreview />
            <MenuSection />
            <Story />
            <LocationHours />
            <Gallery />
            <ContactSection />
        </Shell>
    }
}
