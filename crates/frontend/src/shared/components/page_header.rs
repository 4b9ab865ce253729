use leptos::prelude::*;

/// Title row of a page with an actions slot on the right
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Buttons and filters
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <span class="page__subtitle">{s}</span>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
