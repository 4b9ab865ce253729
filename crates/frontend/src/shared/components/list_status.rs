use crate::shared::list_state::ListView;
use leptos::prelude::*;

pub const EMPTY_TEXT: &str = "Không có dữ liệu";

/// Loading, empty and error states of a list; renders `children` once rows exist
#[component]
pub fn ListStatus(
    #[prop(into)] state: Signal<ListView>,
    #[prop(into)] error: Signal<Option<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = Memo::new(move |_| state.get());

    move || match state.get() {
        ListView::Loading => view! { <div class="list-status">"Đang tải..."</div> }.into_any(),
        ListView::Empty => view! { <div class="list-status list-status--empty">{EMPTY_TEXT}</div> }.into_any(),
        ListView::Failed => view! {
            <div class="list-status list-status--error">
                {move || error.get().unwrap_or_default()}
            </div>
        }
        .into_any(),
        ListView::Rows => children().into_any(),
    }
}
