use contracts::shared::validation::FormField;
use contracts::system::auth::LoginForm;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::components::ui::{Button, Input};
use crate::system::auth::AuthFormViewModel;

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = AuthFormViewModel::<LoginForm>::new();
    let navigate = use_navigate();
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        vm.submit_command(move || {
            log::info!("Signed in");
            navigate("/", Default::default());
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"CB"</div>
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your Chai Bisket account"</p>

                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <Input
                        label="Email"
                        id="email"
                        input_type="email"
                        placeholder="your@email.com"
                        autocomplete="email"
                        value=vm.value(FormField::Email)
                        error=vm.error(FormField::Email)
                        on_input=Callback::new(move |v: String| vm.edit(FormField::Email, v))
                        disabled=Signal::derive(move || vm.is_submitting())
                    />
                    <Input
                        label="Password"
                        id="password"
                        input_type=Signal::derive(move || {
                            if show_password.get() { "text" } else { "password" }.to_string()
                        })
                        placeholder="••••••••"
                        autocomplete="current-password"
                        value=vm.value(FormField::Password)
                        error=vm.error(FormField::Password)
                        on_input=Callback::new(move |v: String| vm.edit(FormField::Password, v))
                        disabled=Signal::derive(move || vm.is_submitting())
                    />
                    <div class="auth-form__row">
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide password" } else { "Show password" }}
                        </button>
                        <a href="#" class="link-button">"Forgot password?"</a>
                    </div>
                    <Button
                        button_type="submit"
                        class="auth-form__submit"
                        disabled=Signal::derive(move || vm.is_submitting())
                    >
                        {move || vm.state.with(|s| s.submit_label("Sign In", "Signing in..."))}
                    </Button>
                </form>

                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
                <p class="auth-card__back">
                    <A href="/">"← Back to Home"</A>
                </p>
            </div>
        </div>
    }
}
