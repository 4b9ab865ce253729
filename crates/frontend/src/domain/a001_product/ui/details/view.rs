use super::view_model::ProductForm;
use crate::shared::components::form_field::{FormActions, FormError, FormField, FormTextarea};
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    initial: Option<Product>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_submit: Callback<ProductDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = initial
        .as_ref()
        .map(ProductForm::from_product)
        .unwrap_or_default();
    let name = RwSignal::new(form.name);
    let sku = RwSignal::new(form.sku);
    let price = RwSignal::new(form.price);
    let stock = RwSignal::new(form.stock);
    let category_id = RwSignal::new(form.category_id);
    let description = RwSignal::new(form.description);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ProductForm {
            name: name.get_untracked(),
            sku: sku.get_untracked(),
            price: price.get_untracked(),
            stock: stock.get_untracked(),
            category_id: category_id.get_untracked(),
            description: description.get_untracked(),
        };
        match form.to_dto() {
            Ok(dto) => {
                error.set(None);
                on_submit.run(dto);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <form class="form" on:submit=submit>
            <FormField label="Tên sản phẩm" value=name required=true />
            <FormField label="Mã SKU" value=sku />
            <div class="form__row">
                <FormField label="Giá bán (₫)" value=price input_type="number" required=true min="0" step="any" />
                <FormField label="Tồn kho" value=stock input_type="number" required=true min="0" step="1" />
            </div>
            <label class="form__field">
                <span class="form__label">"Danh mục"</span>
                <select
                    class="form__input"
                    on:change=move |ev| category_id.set(event_target_value(&ev))
                >
                    <option value="" selected=move || category_id.get().is_empty()>"-- Chưa phân loại --"</option>
                    {move || categories.get().into_iter().map(|c| {
                        let value = c.id.as_string();
                        let current = value.clone();
                        view! {
                            <option value=value selected=move || category_id.get() == current>{c.name}</option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <FormTextarea label="Mô tả" value=description />
            <FormError error=error />
            <FormActions on_cancel=on_cancel />
        </form>
    }
}
