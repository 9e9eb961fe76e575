use contracts::shared::contact::{ContactForm, ContactRequest, ContactStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::contact::api;

/// ViewModel for the contact & catering form
#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub form: RwSignal<ContactForm>,
}

impl ContactViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContactForm::new()),
        }
    }

    /// Reactive getter for one field
    pub fn field(&self, pick: fn(&ContactRequest) -> &String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| pick(&f.fields).clone()))
    }

    pub fn edit(&self, apply: impl FnOnce(&mut ContactRequest)) {
        self.form.update(|f| apply(&mut f.fields));
    }

    pub fn status(&self) -> ContactStatus {
        self.form.with(|f| f.status().clone())
    }

    pub fn is_sending(&self) -> bool {
        self.form.with(ContactForm::is_sending)
    }

    /// Send the form; a second click while in flight is ignored
    pub fn submit_command(&self) {
        let form = self.form;
        let mut payload = None;
        form.update(|f| payload = f.begin_submit());
        let Some(request) = payload else {
            return;
        };

        spawn_local(async move {
            let outcome = api::send_contact(&request).await;
            if let Err(e) = &outcome {
                log::warn!("Contact form failed: {}", e);
            }
            // The section may be gone by now
            if form.try_update(|f| f.finish(outcome)).is_none() {
                log::debug!("Contact form unmounted before the reply arrived");
            }
        });
    }
}

impl Default for ContactViewModel {
    fn default() -> Self {
        Self::new()
    }
}
