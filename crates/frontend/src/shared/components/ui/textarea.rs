use leptos::prelude::*;

/// Labelled textarea with an inline validation message
#[component]
pub fn Textarea(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <textarea
                id=id.clone()
                name=id
                class=move || {
                    if error.get().is_some() { "form__textarea form__input--invalid" } else { "form__textarea" }
                }
                placeholder=textarea_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                rows=rows.unwrap_or(4)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || error.get().map(|message| view! { <p class="form__error">{message}</p> })}
        </div>
    }
}
