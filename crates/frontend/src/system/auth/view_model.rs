use contracts::shared::validation::FormField;
use contracts::system::auth::{AuthForm, AuthFormState, SIMULATED_SUBMIT_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel shared by the login and signup pages
pub struct AuthFormViewModel<F: AuthForm + Send + Sync + 'static> {
    pub state: RwSignal<AuthFormState<F>>,
}

impl<F: AuthForm + Send + Sync + 'static> Clone for AuthFormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: AuthForm + Send + Sync + 'static> Copy for AuthFormViewModel<F> {}

impl<F: AuthForm + Send + Sync + 'static> AuthFormViewModel<F> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthFormState::new()),
        }
    }

    pub fn value(&self, field: FormField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.fields.field(field).to_string()))
    }

    pub fn error(&self, field: FormField) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.errors().get(field).map(str::to_string)))
    }

    pub fn edit(&self, field: FormField, value: String) {
        self.state.update(|s| s.edit(field, value));
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(AuthFormState::is_submitting)
    }

    /// Validate, then run the simulated request. `on_success` runs after
    /// the delay unless the page was unmounted in the meantime.
    pub fn submit_command(&self, on_success: impl FnOnce() + 'static) {
        let state = self.state;
        let mut started = false;
        state.update(|s| started = s.submit());
        if !started {
            log::debug!(
                "Form not submitted: {} invalid field(s)",
                state.with_untracked(|s| s.errors().len())
            );
            return;
        }

        spawn_local(async move {
            TimeoutFuture::new(SIMULATED_SUBMIT_DELAY_MS).await;
            // A disposed signal means the page is gone; drop the completion
            if state.try_update(AuthFormState::complete).is_none() {
                log::debug!("Form unmounted before the simulated request finished");
                return;
            }
            on_success();
        });
    }
}

impl<F: AuthForm + Send + Sync + 'static> Default for AuthFormViewModel<F> {
    fn default() -> Self {
        Self::new()
    }
}
