use contracts::shared::validation::FormField;
use contracts::system::auth::SignupForm;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::components::ui::{Button, Input};
use crate::system::auth::AuthFormViewModel;

#[component]
pub fn SignupPage() -> impl IntoView {
    let vm = AuthFormViewModel::<SignupForm>::new();
    let navigate = use_navigate();
    let show_password = RwSignal::new(false);
    let password_type = Signal::derive(move || {
        if show_password.get() { "text" } else { "password" }.to_string()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        vm.submit_command(move || {
            log::info!("Account created");
            navigate("/", Default::default());
        });
    };

    let field = move |label: &'static str,
                      id: &'static str,
                      field: FormField,
                      input_type: Signal<String>,
                      placeholder: &'static str| {
        view! {
            <Input
                label=label
                id=id
                input_type=input_type
                placeholder=placeholder
                value=vm.value(field)
                error=vm.error(field)
                on_input=Callback::new(move |v: String| vm.edit(field, v))
                disabled=Signal::derive(move || vm.is_submitting())
            />
        }
    };
    let text = |t: &'static str| Signal::derive(move || t.to_string());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"CB"</div>
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Sign up for a Chai Bisket account"</p>

                <form class="auth-form" on:submit=on_submit novalidate=true>
                    {field("Full Name", "name", FormField::Name, text("text"), "Enter your full name")}
                    {field("Email", "email", FormField::Email, text("email"), "your@email.com")}
                    {field("Password", "password", FormField::Password, password_type, "Create a password")}
                    {field(
                        "Confirm Password",
                        "confirmPassword",
                        FormField::ConfirmPassword,
                        password_type,
                        "Confirm your password",
                    )}
                    <div class="auth-form__row">
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide password" } else { "Show password" }}
                        </button>
                    </div>
                    <Button
                        button_type="submit"
                        class="auth-form__submit"
                        disabled=Signal::derive(move || vm.is_submitting())
                    >
                        {move || vm.state.with(|s| s.submit_label("Create Account", "Creating account..."))}
                    </Button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
                <p class="auth-card__back">
                    <A href="/">"← Back to Home"</A>
                </p>
            </div>
        </div>
    }
}
