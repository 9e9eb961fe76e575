use leptos::prelude::*;

/// Labelled text input with an inline validation message
#[component]
pub fn Input(
    #[prop(into)] label: String,
    /// DOM id and form name
    #[prop(into)]
    id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    /// Message shown under the field; also marks the input invalid
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "email", "password", "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let error_id = format!("{}-error", id);

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <input
                id=id.clone()
                name=id
                class=move || {
                    if error.get().is_some() { "form__input form__input--invalid" } else { "form__input" }
                }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                autocomplete=input_autocomplete
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                aria-invalid=move || error.get().is_some().to_string()
                aria-describedby=error_id.clone()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <p class="form__error" id=error_id.clone()>{message}</p>
            })}
        </div>
    }
}
