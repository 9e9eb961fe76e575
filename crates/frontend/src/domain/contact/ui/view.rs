use contracts::shared::contact::{ContactRequest, ContactStatus};
use contracts::shared::validation::FormField;
use leptos::prelude::*;

use super::view_model::ContactViewModel;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact-section">
            <div class="contact-section__grid">
                <div class="contact-card">
                    <h3>"Contact & Catering"</h3>
                    <ContactForm />
                </div>
                <div class="catering-card">
                    <h3>"Hosting a Party?"</h3>
                    <p>"From chai counters to biryani bars, we cater birthdays, office events and desi celebrations."</p>
                    <ul>
                        <li>"Customizable menus"</li>
                        <li>"Bulk chai, biscuits & snacks"</li>
                        <li>"On-site live stations"</li>
                    </ul>
                    <a class="button button--ghost" href="#contact">"Get a Catering Quote"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let vm = ContactViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <Input
                label="Name"
                id="name"
                required=ContactRequest::is_required(FormField::Name)
                placeholder="Your name"
                value=vm.field(|f| &f.name)
                on_input=Callback::new(move |v: String| vm.edit(|f| f.name = v))
                disabled=Signal::derive(move || vm.is_sending())
            />
            <Input
                label="Email"
                id="email"
                required=ContactRequest::is_required(FormField::Email)
                input_type="email"
                placeholder="Email"
                value=vm.field(|f| &f.email)
                on_input=Callback::new(move |v: String| vm.edit(|f| f.email = v))
                disabled=Signal::derive(move || vm.is_sending())
            />
            <Input
                label="Phone"
                id="phone"
                required=ContactRequest::is_required(FormField::Phone)
                input_type="tel"
                placeholder="Phone"
                value=vm.field(|f| &f.phone)
                on_input=Callback::new(move |v: String| vm.edit(|f| f.phone = v))
                disabled=Signal::derive(move || vm.is_sending())
            />
            // Honeypot: hidden from people, left empty by real visitors
            <input
                name="website"
                class="visually-hidden"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                prop:value=move || vm.form.with(|f| f.fields.website.clone())
                on:input=move |ev| vm.edit(|f| f.website = event_target_value(&ev))
            />
            <Textarea
                label="Message"
                id="message"
                required=ContactRequest::is_required(FormField::Message)
                placeholder="Tell us about your event or question"
                value=vm.field(|f| &f.message)
                on_input=Callback::new(move |v: String| vm.edit(|f| f.message = v))
                disabled=Signal::derive(move || vm.is_sending())
            />
            <Button button_type="submit" disabled=Signal::derive(move || vm.is_sending())>
                {move || if vm.is_sending() { "Sending..." } else { "Send Message" }}
            </Button>

            {move || match vm.status() {
                ContactStatus::Ok => view! {
                    <div class="form__notice form__notice--ok">
                        {icon("check")}
                        "Thanks! We'll get back to you shortly."
                    </div>
                }.into_any(),
                ContactStatus::Error(message) => view! {
                    <div class="form__notice form__notice--error">
                        {icon("alert")}
                        "Something went wrong. Please try again. "
                        <span class="form__notice-detail">{format!("({})", message)}</span>
                    </div>
                }.into_any(),
                ContactStatus::Idle | ContactStatus::Sending => ().into_any(),
            }}
        </form>
    }
}
