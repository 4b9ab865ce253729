use leptos::prelude::*;

/// Labelled native input bound to a string signal
#[component]
pub fn FormField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] min: Option<&'static str>,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}{required.then_some(" *")}</span>
            <input
                class="form__input"
                type=input_type
                required=required
                placeholder=placeholder
                min=min
                step=step
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn FormTextarea(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <textarea
                class="form__input"
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Cancel / save buttons at the bottom of a form
#[component]
pub fn FormActions(on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="form__actions">
            <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                "Hủy"
            </button>
            <button type="submit" class="button button--primary">"Lưu"</button>
        </div>
    }
}

/// Validation message above the form buttons
#[component]
pub fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
}
